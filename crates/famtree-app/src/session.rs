//! [`Session`] — one user's families, selection, and edit handling.

use std::fmt;

use famtree_core::FamilyRegistry;
use famtree_graph::{RenderOptions, TreeRenderer};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  page::{PLACEHOLDER_TEXT, Page, PageView},
};

// ─── Notification ─────────────────────────────────────────────────────────────

/// Outcome of an edit, phrased for the person who submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notification {
  Success(String),
  Error(String),
}

impl Notification {
  pub fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

  pub fn message(&self) -> &str {
    match self {
      Self::Success(m) | Self::Error(m) => m,
    }
  }
}

impl fmt::Display for Notification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Success(m) => write!(f, "✅ {m}"),
      Self::Error(m) => write!(f, "⚠️ {m}"),
    }
  }
}

/// An entry in the "member to update" picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberChoice {
  pub identity: Uuid,
  pub name:     String,
}

// ─── Session ──────────────────────────────────────────────────────────────────

/// State for one session. Each session owns its registry, so edits never leak
/// between sessions.
#[derive(Debug, Clone)]
pub struct Session {
  registry: FamilyRegistry,
  renderer: TreeRenderer,
  family:   String,
  page:     Page,
}

impl Session {
  /// Seed a fresh registry and select the first family on the tree page.
  pub fn new(options: RenderOptions) -> Result<Self> {
    let registry = FamilyRegistry::seeded()?;
    let family = registry
      .list_family_names()
      .first()
      .map(|name| name.to_string())
      .ok_or_else(|| Error::NotFound("no families to select".to_string()))?;

    tracing::debug!(%family, "session started");
    Ok(Self {
      registry,
      renderer: TreeRenderer::new(options),
      family,
      page: Page::default(),
    })
  }

  pub fn registry(&self) -> &FamilyRegistry { &self.registry }

  pub fn family_names(&self) -> Vec<&str> { self.registry.list_family_names() }

  pub fn selected_family(&self) -> &str { &self.family }

  pub fn page(&self) -> Page { self.page }

  /// Switch to `name`. Unknown names leave the selection unchanged.
  pub fn select_family(&mut self, name: &str) -> Result<()> {
    self.registry.get_family(name)?;
    self.family = name.to_string();
    Ok(())
  }

  pub fn select_page(&mut self, page: Page) { self.page = page; }

  /// Members of the selected family, in tree order.
  pub fn members(&self) -> Result<Vec<MemberChoice>> {
    let family = self.registry.get_family(&self.family)?;
    Ok(
      family
        .iter()
        .map(|m| MemberChoice {
          identity: m.identity(),
          name:     m.name().to_string(),
        })
        .collect(),
    )
  }

  /// Resolve `key` within the selected family, as an identity or an exact
  /// display name.
  pub fn find_member(&self, key: &str) -> Result<Uuid> {
    let family = self.registry.get_family(&self.family)?;
    if let Ok(identity) = key.parse::<Uuid>()
      && family.contains(identity)
    {
      return Ok(identity);
    }
    family
      .find_by_name(key)
      .map(|m| m.identity())
      .ok_or_else(|| Error::NotFound(format!("member {key:?} in {}", self.family)))
  }

  /// What the current page shows.
  pub fn view(&self) -> Result<PageView> {
    match self.page {
      Page::FamilyTree => {
        let family = self.registry.get_family(&self.family)?;
        Ok(PageView::Tree(self.renderer.render(family)?))
      }
      Page::EmptyFamilyTree => Ok(PageView::Placeholder(PLACEHOLDER_TEXT)),
    }
  }

  /// Apply a rename from the edit form.
  ///
  /// Blank names are rejected before the registry is touched. Failures are
  /// reported in the notification and leave the session as it was.
  pub fn submit_rename(&mut self, member: Uuid, new_name: &str) -> Notification {
    match self.try_rename(member, new_name) {
      Ok(()) => Notification::Success(format!("Updated member to {new_name}")),
      Err(Error::Validation(msg)) => Notification::Error(msg),
      Err(e) => {
        tracing::warn!(error = %e, "rename failed");
        Notification::Error(e.to_string())
      }
    }
  }

  fn try_rename(&mut self, member: Uuid, new_name: &str) -> Result<()> {
    if new_name.trim().is_empty() {
      return Err(Error::Validation(
        "Please enter a name for the family member".to_string(),
      ));
    }
    self.registry.rename_member(&self.family, member, new_name)?;
    Ok(())
  }
}
