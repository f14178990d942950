//! The renderer's output model.
//!
//! Attribute values are kept as the drawing engine spells them (`"none"`,
//! `"rounded"`) so the DOT and JSON forms agree.

use famtree_core::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::Result;

/// Direction generations are laid out in.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum RankDir {
  /// Top to bottom; ancestors above descendants.
  #[default]
  Tb,
  Bt,
  Lr,
  Rl,
}

/// Symbol shown in the top row of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
  /// The member has a photo reference.
  Photo,
  /// Generic placeholder.
  Person,
}

impl Glyph {
  pub fn symbol(self) -> &'static str {
    match self {
      Self::Photo  => "🖼️",
      Self::Person => "👤",
    }
  }
}

/// The two-row table label of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLabel {
  pub glyph:      Glyph,
  /// Fill of the glyph row.
  pub background: Color,
  pub name:       String,
  /// Shown under the name in italics.
  pub role:       String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
  pub id:           Uuid,
  pub label:        NodeLabel,
  pub shape:        &'static str,
  pub style:        &'static str,
  pub fill_color:   Color,
  pub border_color: Color,
}

/// A parent-to-child link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
  pub from:  Uuid,
  pub to:    Uuid,
  /// Arrowhead direction; `"none"` draws a plain line.
  pub dir:   &'static str,
  pub color: Color,
}

/// A complete, renderable description of one family tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
  pub rank_dir: RankDir,
  /// Canvas size hint in inches, `"width,height"`.
  pub size:     String,
  pub nodes:    Vec<Node>,
  pub edges:    Vec<Edge>,
}

impl GraphDescription {
  pub fn node(&self, id: Uuid) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == id)
  }

  /// Graphviz DOT source for this graph.
  pub fn to_dot(&self) -> String { crate::dot::serialize(self) }

  /// Pretty-printed JSON for non-Graphviz consumers.
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}
