//! Built-in sample families.
//!
//! Every preset shares one three-generation shape and differs only in its
//! family name and colour scheme.

use crate::{
  Result,
  family::FamilyGroup,
  member::{NewMember, Role},
  palette::{ColorScheme, Tier},
};

/// Family name and (elder, parent, child, grandchild) colours, in the order
/// the families are offered for selection.
pub const PRESETS: &[(&str, [&str; 4])] = &[
  ("Ndao",       ["#1E88E5", "#42A5F5", "#90CAF9", "#BBDEFB"]),
  ("Ndiaye",     ["#FF5722", "#FF7043", "#FFAB91", "#FFCCBC"]),
  ("DIA",        ["#4CAF50", "#66BB6A", "#81C784", "#A5D6A7"]),
  ("WANE",       ["#FBC02D", "#FDD835", "#FFEB3B", "#FFF59D"]),
  ("KANE",       ["#1976D2", "#2196F3", "#64B5F6", "#BBDEFB"]),
  ("Mbacké",     ["#8E24AA", "#AB47BC", "#E1BEE7", "#F1E6F2"]),
  ("Sy",         ["#D32F2F", "#E57373", "#EF9A9A", "#FFCDD2"]),
  ("Tall",       ["#C2185B", "#D81B60", "#F06292", "#F8BBD0"]),
  ("SOUGOUFARA", ["#7B1FA2", "#9C27B0", "#BA68C8", "#E1BEE7"]),
  ("Aidara",     ["#0288D1", "#03A9F4", "#4FC3F7", "#B3E5FC"]),
  ("AGNE",       ["#F57C00", "#FF9800", "#FFB74D", "#FFE0B2"]),
];

/// Build the preset tree for `family_name`.
///
/// Founders: grandfather and grandmother. The father descends from both; the
/// mother has no recorded parents. Three children descend from the father and
/// mother. Each grandchild records only the one child it descends from: two
/// under the first child, one under each of the others.
pub fn base_family(family_name: &str, scheme: ColorScheme) -> Result<FamilyGroup> {
  let mut family = FamilyGroup::new(family_name, scheme);
  let named = |given: &str| format!("{given} {family_name}");

  let grandfather = family.add(NewMember::new(
    named("El Hadj"),
    Role::Grandfather,
    Tier::Elder,
  ))?;
  let grandmother = family.add(NewMember::new(
    named("Adja"),
    Role::Grandmother,
    Tier::Elder,
  ))?;
  let father = family.add(
    NewMember::new(named("Serigne"), Role::Father, Tier::Parent)
      .with_parents([grandfather, grandmother]),
  )?;
  let mother =
    family.add(NewMember::new(named("Sokhna"), Role::Mother, Tier::Parent))?;

  let mut children = Vec::with_capacity(3);
  for given in ["Cheikh", "Aissatou", "Mamadou"] {
    children.push(family.add(
      NewMember::new(named(given), Role::Child, Tier::Child)
        .with_parents([father, mother]),
    )?);
  }

  let grandchildren = [
    ("Fatou", children[0]),
    ("Ali", children[0]),
    ("Youssou", children[1]),
    ("Ndèye", children[2]),
  ];
  for (given, parent) in grandchildren {
    family.add(
      NewMember::new(named(given), Role::Grandchild, Tier::Grandchild)
        .with_parents([parent]),
    )?;
  }

  Ok(family)
}

/// Build every preset family, in [`PRESETS`] order.
pub fn all() -> Result<Vec<FamilyGroup>> {
  PRESETS
    .iter()
    .map(|(name, [elder, parent, child, grandchild])| {
      base_family(name, ColorScheme::new(elder, parent, child, grandchild))
    })
    .collect()
}
