//! Convert browser-exported bookmark HTML (the Netscape bookmark file format)
//! into JSON or Markdown.

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
