//! Text forms of a page view.

use anyhow::Result;
use clap::ValueEnum;
use famtree_app::PageView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
  /// Graphviz DOT source.
  Dot,
  /// JSON for other drawing front ends.
  Json,
}

/// Render `view` for stdout. The placeholder page prints its text as-is in
/// DOT mode since there is no graph to draw.
pub fn render_view(view: &PageView, format: Format) -> Result<String> {
  Ok(match (view, format) {
    (PageView::Tree(graph), Format::Dot) => graph.to_dot(),
    (PageView::Placeholder(text), Format::Dot) => format!("{text}\n"),
    (view, Format::Json) => serde_json::to_string_pretty(view)? + "\n",
  })
}
