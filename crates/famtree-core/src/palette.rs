//! Generation tiers and the per-family colour schemes keyed by them.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ─── Tier ────────────────────────────────────────────────────────────────────

/// The generational band a member's colour is drawn from.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
  Elder,
  Parent,
  Child,
  Grandchild,
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A display colour token handed verbatim to the drawing engine, usually a
/// `#RRGGBB` hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
  pub fn new(token: impl Into<String>) -> Self { Self(token.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Color {
  fn from(token: &str) -> Self { Self::new(token) }
}

// ─── ColorScheme ─────────────────────────────────────────────────────────────

/// One colour per [`Tier`]; every family carries its own scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
  pub elder:      Color,
  pub parent:     Color,
  pub child:      Color,
  pub grandchild: Color,
}

impl ColorScheme {
  pub fn new(elder: &str, parent: &str, child: &str, grandchild: &str) -> Self {
    Self {
      elder:      elder.into(),
      parent:     parent.into(),
      child:      child.into(),
      grandchild: grandchild.into(),
    }
  }

  /// The colour assigned to members of `tier`.
  pub fn for_tier(&self, tier: Tier) -> &Color {
    match tier {
      Tier::Elder      => &self.elder,
      Tier::Parent     => &self.parent,
      Tier::Child      => &self.child,
      Tier::Grandchild => &self.grandchild,
    }
  }
}
