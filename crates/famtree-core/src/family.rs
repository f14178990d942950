//! FamilyGroup — a named collection of members sharing one colour scheme.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  member::{Member, NewMember, Role},
  palette::ColorScheme,
};

/// A named family. Members are kept in insertion order, which is also the
/// order the renderer emits them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyGroup {
  name:    String,
  scheme:  ColorScheme,
  members: Vec<Member>,
}

impl FamilyGroup {
  pub fn new(name: impl Into<String>, scheme: ColorScheme) -> Self {
    Self {
      name: name.into(),
      scheme,
      members: Vec::new(),
    }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn scheme(&self) -> &ColorScheme { &self.scheme }

  /// Validate `input` and append it as a new member, returning its identity.
  ///
  /// Every parent must already belong to this family, so a group built only
  /// through `add` is acyclic and layered.
  pub fn add(&mut self, input: NewMember) -> Result<Uuid> {
    if input.name.trim().is_empty() {
      return Err(Error::BlankName);
    }
    if input.parent_refs.len() > 2 {
      return Err(Error::TooManyParents(input.parent_refs.len()));
    }

    let mut seen = HashSet::new();
    for parent in &input.parent_refs {
      if !seen.insert(*parent) {
        return Err(Error::DuplicateParent(*parent));
      }
      if !self.contains(*parent) {
        return Err(Error::DanglingParent {
          family: self.name.clone(),
          parent: *parent,
        });
      }
    }

    let color = self.scheme.for_tier(input.tier).clone();
    let member = Member::create(input, color);
    let identity = member.identity();
    self.members.push(member);
    Ok(identity)
  }

  pub fn contains(&self, identity: Uuid) -> bool {
    self.members.iter().any(|m| m.identity() == identity)
  }

  pub fn get(&self, identity: Uuid) -> Option<&Member> {
    self.members.iter().find(|m| m.identity() == identity)
  }

  /// First member whose display name equals `name` exactly.
  pub fn find_by_name(&self, name: &str) -> Option<&Member> {
    self.members.iter().find(|m| m.name() == name)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Member> { self.members.iter() }

  pub fn len(&self) -> usize { self.members.len() }

  pub fn is_empty(&self) -> bool { self.members.is_empty() }

  /// Total number of parent links, i.e. the edge count of the rendered tree.
  pub fn edge_count(&self) -> usize {
    self.members.iter().map(|m| m.parent_refs().len()).sum()
  }

  /// Replace the display name of `identity`.
  pub fn rename(&mut self, identity: Uuid, name: impl Into<String>) -> Result<()> {
    let member = self.member_mut(identity)?;
    member.set_name(name.into());
    Ok(())
  }

  /// Replace the role label of `identity`.
  pub fn set_role(&mut self, identity: Uuid, role: Role) -> Result<()> {
    let member = self.member_mut(identity)?;
    member.set_role(role);
    Ok(())
  }

  fn member_mut(&mut self, identity: Uuid) -> Result<&mut Member> {
    let family = &self.name;
    self
      .members
      .iter_mut()
      .find(|m| m.identity() == identity)
      .ok_or_else(|| Error::MemberNotFound {
        family: family.clone(),
        member: identity,
      })
  }
}

impl<'a> IntoIterator for &'a FamilyGroup {
  type Item = &'a Member;
  type IntoIter = std::slice::Iter<'a, Member>;

  fn into_iter(self) -> Self::IntoIter { self.members.iter() }
}
