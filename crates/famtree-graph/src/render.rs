//! [`TreeRenderer`] — one family in, one [`GraphDescription`] out.

use famtree_core::{Color, FamilyGroup, Member};
use serde::Deserialize;

use crate::{
  Error, Result,
  graph::{Edge, Glyph, GraphDescription, Node, NodeLabel, RankDir},
};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Presentation settings shared by every rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
  pub rank_dir:     RankDir,
  /// Large enough that three or four generations stay legible.
  pub size:         String,
  pub edge_color:   Color,
  pub border_color: Color,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      rank_dir:     RankDir::Tb,
      size:         "8,8".to_string(),
      edge_color:   Color::new("black"),
      border_color: Color::new("black"),
    }
  }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
  options: RenderOptions,
}

impl TreeRenderer {
  pub fn new(options: RenderOptions) -> Self { Self { options } }

  pub fn options(&self) -> &RenderOptions { &self.options }

  /// Describe `family` as a graph: one node per member in family order, then
  /// one undirected-looking edge per parent reference.
  ///
  /// Never mutates the family, and equal input gives equal output. A parent
  /// reference that does not resolve within the family is an error rather
  /// than a silently dropped edge.
  pub fn render(&self, family: &FamilyGroup) -> Result<GraphDescription> {
    let nodes = family.iter().map(|m| self.node(m)).collect();

    let mut edges = Vec::with_capacity(family.edge_count());
    for member in family {
      for &parent in member.parent_refs() {
        if !family.contains(parent) {
          return Err(Error::DanglingReference {
            member: member.identity(),
            parent,
          });
        }
        edges.push(Edge {
          from:  parent,
          to:    member.identity(),
          dir:   "none",
          color: self.options.edge_color.clone(),
        });
      }
    }

    tracing::debug!(
      family = family.name(),
      nodes = family.len(),
      edges = edges.len(),
      "rendered family tree"
    );

    Ok(GraphDescription {
      rank_dir: self.options.rank_dir,
      size: self.options.size.clone(),
      nodes,
      edges,
    })
  }

  fn node(&self, member: &Member) -> Node {
    let glyph = if member.photo_ref().is_some() {
      Glyph::Photo
    } else {
      Glyph::Person
    };
    Node {
      id:           member.identity(),
      label:        NodeLabel {
        glyph,
        background: member.color().clone(),
        name:       member.name().to_string(),
        role:       member.role().to_string(),
      },
      // The label's own table draws the visible frame.
      shape:        "none",
      style:        "rounded",
      fill_color:   member.color().clone(),
      border_color: self.options.border_color.clone(),
    }
  }
}
