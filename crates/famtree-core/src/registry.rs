//! [`FamilyRegistry`] — the set of families owned by one session.
//!
//! The registry is an explicit state object: the caller creates it, seeds it
//! once, mutates it in place, and drops it when the session ends.

use uuid::Uuid;

use crate::{Error, Result, family::FamilyGroup, member::Role, presets};

/// All families of a session, in selection order.
#[derive(Debug, Clone, Default)]
pub struct FamilyRegistry {
  families:    Vec<FamilyGroup>,
  initialized: bool,
}

impl FamilyRegistry {
  /// An empty registry. Call [`initialize`](Self::initialize) to seed it.
  pub fn new() -> Self { Self::default() }

  /// A registry already seeded with the preset families.
  pub fn seeded() -> Result<Self> {
    let mut registry = Self::new();
    registry.initialize()?;
    Ok(registry)
  }

  pub fn is_initialized(&self) -> bool { self.initialized }

  /// Seed the preset families on first call. Later calls leave the existing
  /// (possibly edited) families untouched and just return them.
  pub fn initialize(&mut self) -> Result<&[FamilyGroup]> {
    if self.initialized {
      tracing::debug!("registry already initialized, keeping current families");
      return Ok(self.families.as_slice());
    }

    self.families = presets::all()?;
    self.initialized = true;
    tracing::debug!(families = self.families.len(), "seeded preset families");
    Ok(self.families.as_slice())
  }

  pub fn get_family(&self, name: &str) -> Result<&FamilyGroup> {
    self
      .families
      .iter()
      .find(|f| f.name() == name)
      .ok_or_else(|| Error::FamilyNotFound(name.to_string()))
  }

  fn get_family_mut(&mut self, name: &str) -> Result<&mut FamilyGroup> {
    self
      .families
      .iter_mut()
      .find(|f| f.name() == name)
      .ok_or_else(|| Error::FamilyNotFound(name.to_string()))
  }

  /// Family names in a stable order, for selection lists.
  pub fn list_family_names(&self) -> Vec<&str> {
    self.families.iter().map(FamilyGroup::name).collect()
  }

  pub fn families(&self) -> &[FamilyGroup] { &self.families }

  /// Rename one member in place.
  ///
  /// Does not validate `new_name`; callers reject blank input before calling.
  /// An identity that is not part of `family_name` yields
  /// [`Error::MemberNotFound`] and leaves the registry unchanged.
  pub fn rename_member(
    &mut self,
    family_name: &str,
    member: Uuid,
    new_name: &str,
  ) -> Result<()> {
    let family = self.get_family_mut(family_name)?;
    family.rename(member, new_name)?;
    tracing::info!(family = family_name, %member, new_name, "renamed member");
    Ok(())
  }

  /// Replace the role label of one member in place.
  pub fn set_member_role(
    &mut self,
    family_name: &str,
    member: Uuid,
    role: Role,
  ) -> Result<()> {
    let family = self.get_family_mut(family_name)?;
    family.set_role(member, role.clone())?;
    tracing::info!(family = family_name, %member, %role, "changed member role");
    Ok(())
  }
}
