// Infrastructure layer: HTML parsing, renderers, schema checks, file I/O, eventing
pub mod event_ndjson;
pub mod file_adapter;
pub mod json_renderer;
pub mod markdown_renderer;
pub mod netscape_html;
pub mod schema_validator;
