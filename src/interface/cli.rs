use crate::domain::model::DuplicateTitles;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::file_adapter::{read_bookmarks_html, write_new_file};
use crate::infrastructure::netscape_html::NetscapeHtmlParser;
use crate::usecase::check::check_paths;
use crate::usecase::convert::{convert_bookmarks, renderer_for, ConvertOptions};
use crate::usecase::event::AppEvent;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let Cli {
        input,
        output,
        options,
    } = Cli::parse(args)?;

    let format = check_paths(&input, &output)?;
    options.check_format(format)?;

    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if options.emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };

    let markup = read_bookmarks_html(&input)
        .await
        .with_context(|| format!("reading bookmarks HTML: {}", input.display()))?;

    let parser = NetscapeHtmlParser::new(options.duplicates);
    let renderer = renderer_for(format, &options);

    let (text, stats) = convert_bookmarks(&markup, &parser, renderer.as_ref(), Some(tx))
        .await
        .with_context(|| format!("converting {}", input.display()))?;

    write_new_file(&output, &text)
        .await
        .with_context(|| format!("writing {} output: {}", format.name(), output.display()))?;

    if let Some(handle) = printer {
        handle.await.ok();
    }

    if stats.titles_overwritten > 0 {
        eprintln!(
            "warning: {} same-titled entries were overwritten (Markdown output with --keep-duplicates keeps them)",
            stats.titles_overwritten
        );
    }

    eprintln!(
        "summary: format={} folders={} bookmarks={} max_depth={} titles_overwritten={}",
        format.name(),
        stats.folders,
        stats.bookmarks,
        stats.max_depth,
        stats.titles_overwritten
    );

    Ok(())
}

#[derive(Debug)]
struct Cli {
    input: PathBuf,
    output: PathBuf,
    options: ConvertOptions,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> -i/--input <bookmarks.html> -o/--output <out.json|out.md> [--keep-duplicates] [--title <heading>] [--emit-events]
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut options = ConvertOptions::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-i" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-o" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--title" => {
                    i += 1;
                    let title = args
                        .get(i)
                        .cloned()
                        .ok_or_else(|| anyhow!(format!("missing value for --title\n\n{}", usage())))?;
                    options.heading = Some(title);
                }
                "--keep-duplicates" => {
                    options.duplicates = DuplicateTitles::KeepAll;
                }
                "--emit-events" => {
                    options.emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing -i/--input\n\n{}", usage())))?;
        let output = output.ok_or_else(|| anyhow!(format!("missing -o/--output\n\n{}", usage())))?;

        Ok(Cli {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            options,
        })
    }
}

fn usage() -> &'static str {
    "Convert browser bookmarks (an exported HTML file) into a Markdown or JSON file.\n\nUsage:\n  bookmark-html-converter -i/--input <bookmarks.html> -o/--output <output.md|output.json> [--keep-duplicates] [--title <heading>] [--emit-events]\n\nThe output format follows the output file extension (.md or .json). The output file must not exist.\n\nOptions:\n  --keep-duplicates  keep every same-titled sibling instead of letting the last one win (Markdown only)\n  --title <heading>  Markdown heading (defaults to the root folder name)\n  --emit-events      write NDJSON progress events to stdout; the summary goes to stderr\n\nExample:\n  bookmark-html-converter -i bookmarks.html -o bookmarks.md"
}
