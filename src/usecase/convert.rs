use crate::domain::format::OutputFormat;
use crate::domain::model::DuplicateTitles;
use crate::domain::traits::{BookmarkParser, TreeRenderer};
use crate::infrastructure::json_renderer::JsonRenderer;
use crate::infrastructure::markdown_renderer::MarkdownRenderer;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::ConvertStats;
use anyhow::{anyhow, Result};
use tokio::sync::mpsc;

/// Runtime settings of a conversion, populated from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub duplicates: DuplicateTitles,
    /// Markdown heading; defaults to the root folder's title.
    pub heading: Option<String>,
    pub emit_events: bool,
}

impl ConvertOptions {
    /// Rejects settings the output format cannot represent. JSON objects are keyed by
    /// title, so keeping same-titled siblings would silently lose all but the last.
    pub fn check_format(&self, format: OutputFormat) -> Result<()> {
        if format == OutputFormat::Json && self.duplicates == DuplicateTitles::KeepAll {
            return Err(anyhow!(
                "--keep-duplicates cannot be used with JSON output: JSON keys are titles, so same-titled entries would be lost; write Markdown (.md) instead"
            ));
        }
        Ok(())
    }
}

pub fn renderer_for(format: OutputFormat, options: &ConvertOptions) -> Box<dyn TreeRenderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Markdown => Box::new(MarkdownRenderer {
            heading: options.heading.clone(),
        }),
    }
}

/// Parses `markup` and renders the resulting tree. Nothing is written; the caller
/// persists the returned text only when this succeeds.
pub async fn convert_bookmarks(
    markup: &str,
    parser: &dyn BookmarkParser,
    renderer: &dyn TreeRenderer,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(String, ConvertStats)> {
    emit(&sink, AppEvent::PhaseStarted { name: "parse".into() }).await;
    let outcome = parser.parse(markup)?;
    for path in &outcome.overwritten {
        emit(&sink, AppEvent::TitleOverwritten { path: path.clone() }).await;
    }
    emit(&sink, AppEvent::PhaseFinished { name: "parse".into() }).await;

    emit(&sink, AppEvent::PhaseStarted { name: "render".into() }).await;
    let text = renderer.render(&outcome.tree)?;
    emit(&sink, AppEvent::PhaseFinished { name: "render".into() }).await;

    let stats = ConvertStats::from_tree(&outcome.tree, outcome.overwritten.len());
    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((text, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
