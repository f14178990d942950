//! Member — one person in a family tree.
//!
//! A member's identity, colour, and parent references are fixed when it is
//! added to a [`FamilyGroup`](crate::FamilyGroup). Only the display name and
//! role can change afterwards.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::EnumString;
use uuid::Uuid;

use crate::palette::{Color, Tier};

// ─── Role ────────────────────────────────────────────────────────────────────

/// A generational label shown under the member's name.
///
/// Purely descriptive: nothing checks it against the member's parent
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum Role {
  Grandfather,
  Grandmother,
  Father,
  Mother,
  Child,
  Grandchild,
  #[strum(default)]
  Custom(String),
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Self::Grandfather => "Grandfather",
      Self::Grandmother => "Grandmother",
      Self::Father      => "Father",
      Self::Mother      => "Mother",
      Self::Child       => "Child",
      Self::Grandchild  => "Grandchild",
      Self::Custom(s)   => s,
    };
    f.write_str(text)
  }
}

impl Serialize for Role {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Role {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

// ─── Member ──────────────────────────────────────────────────────────────────

/// One person record. Fields are read through accessors; the two editable
/// fields change only through [`FamilyGroup`](crate::FamilyGroup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
  identity:    Uuid,
  name:        String,
  role:        Role,
  tier:        Tier,
  color:       Color,
  photo_ref:   Option<String>,
  parent_refs: Vec<Uuid>,
}

impl Member {
  /// Build a member from already-validated input, minting a fresh identity.
  pub(crate) fn create(input: NewMember, color: Color) -> Self {
    Self {
      identity: Uuid::new_v4(),
      name: input.name,
      role: input.role,
      tier: input.tier,
      color,
      photo_ref: input.photo_ref,
      parent_refs: input.parent_refs,
    }
  }

  pub fn identity(&self) -> Uuid { self.identity }

  pub fn name(&self) -> &str { &self.name }

  pub fn role(&self) -> &Role { &self.role }

  pub fn tier(&self) -> Tier { self.tier }

  pub fn color(&self) -> &Color { &self.color }

  pub fn photo_ref(&self) -> Option<&str> { self.photo_ref.as_deref() }

  /// Zero, one, or two identities of members in the same family.
  pub fn parent_refs(&self) -> &[Uuid] { &self.parent_refs }

  /// Whether this member belongs to the founding generation of the dataset.
  pub fn is_founder(&self) -> bool { self.parent_refs.is_empty() }

  pub(crate) fn set_name(&mut self, name: String) { self.name = name; }

  pub(crate) fn set_role(&mut self, role: Role) { self.role = role; }
}

// ─── NewMember ───────────────────────────────────────────────────────────────

/// Input to [`FamilyGroup::add`](crate::FamilyGroup::add).
///
/// The identity and colour are not accepted from callers: the family mints
/// the identity and looks the colour up in its scheme by `tier`.
#[derive(Debug, Clone)]
pub struct NewMember {
  pub name:        String,
  pub role:        Role,
  pub tier:        Tier,
  pub photo_ref:   Option<String>,
  pub parent_refs: Vec<Uuid>,
}

impl NewMember {
  /// A parentless member without a photo.
  pub fn new(name: impl Into<String>, role: Role, tier: Tier) -> Self {
    Self {
      name: name.into(),
      role,
      tier,
      photo_ref: None,
      parent_refs: Vec::new(),
    }
  }

  pub fn with_parents(mut self, parents: impl IntoIterator<Item = Uuid>) -> Self {
    self.parent_refs = parents.into_iter().collect();
    self
  }

  pub fn with_photo(mut self, photo_ref: impl Into<String>) -> Self {
    self.photo_ref = Some(photo_ref.into());
    self
  }
}
