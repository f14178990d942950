//! The pages a session can show.

use famtree_graph::GraphDescription;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Text shown on the page that has no content yet.
pub const PLACEHOLDER_TEXT: &str = "Coming soon!";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Display,
  EnumIter,
  EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Page {
  /// The rendered tree of the selected family.
  #[default]
  #[strum(serialize = "Family Tree")]
  FamilyTree,
  /// Not built yet; always shows [`PLACEHOLDER_TEXT`].
  #[strum(serialize = "Empty Family Tree")]
  EmptyFamilyTree,
}

/// What a page produces for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum PageView {
  Tree(GraphDescription),
  Placeholder(&'static str),
}
