//! Registry-level tests against freshly seeded sessions.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{Error, FamilyGroup, FamilyRegistry, Role, Tier, presets::PRESETS};

fn registry() -> FamilyRegistry {
  FamilyRegistry::seeded().expect("preset families build")
}

/// Identity-free description of a family: (name, role, tier, color, parent
/// names) per member, in order.
fn shape(family: &FamilyGroup) -> Vec<(String, String, Tier, String, Vec<String>)> {
  let names: HashMap<Uuid, &str> =
    family.iter().map(|m| (m.identity(), m.name())).collect();
  family
    .iter()
    .map(|m| {
      (
        m.name().to_string(),
        m.role().to_string(),
        m.tier(),
        m.color().to_string(),
        m.parent_refs().iter().map(|p| names[p].to_string()).collect(),
      )
    })
    .collect()
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[test]
fn seeds_every_preset_in_order() {
  let r = registry();
  let expected: Vec<&str> = PRESETS.iter().map(|(name, _)| *name).collect();
  assert_eq!(r.list_family_names(), expected);
  assert!(r.list_family_names().len() >= 11);
}

#[test]
fn seeding_is_deterministic_across_sessions() {
  let a = registry();
  let b = registry();
  for name in a.list_family_names() {
    let fa = a.get_family(name).unwrap();
    let fb = b.get_family(name).unwrap();
    assert_eq!(shape(fa), shape(fb));
    assert_eq!(fa.edge_count(), fb.edge_count());
  }
  let first = a.families()[0].iter().next().unwrap().identity();
  let other = b.families()[0].iter().next().unwrap().identity();
  assert_ne!(first, other, "identities are minted fresh per session");
}

#[test]
fn every_family_has_eleven_members_across_four_tiers() {
  let r = registry();
  for family in r.families() {
    assert_eq!(family.len(), 11, "{}", family.name());
    let count = |tier: Tier| family.iter().filter(|m| m.tier() == tier).count();
    assert_eq!(count(Tier::Elder), 2);
    assert_eq!(count(Tier::Parent), 2);
    assert_eq!(count(Tier::Child), 3);
    assert_eq!(count(Tier::Grandchild), 4);
    assert_eq!(family.edge_count(), 12);
  }
}

#[test]
fn every_parent_ref_resolves_within_its_family() {
  let r = registry();
  for family in r.families() {
    for member in family {
      for parent in member.parent_refs() {
        assert!(family.contains(*parent), "{} -> {parent}", member.name());
      }
    }
  }
}

#[test]
fn colors_follow_the_family_scheme() {
  let r = registry();
  for family in r.families() {
    for member in family {
      assert_eq!(member.color(), family.scheme().for_tier(member.tier()));
    }
  }
}

#[test]
fn ndao_founders_and_father() {
  let r = registry();
  let ndao = r.get_family("Ndao").unwrap();

  let grandfather = ndao.find_by_name("El Hadj Ndao").unwrap();
  assert_eq!(grandfather.role(), &Role::Grandfather);
  assert!(grandfather.parent_refs().is_empty());
  assert_eq!(grandfather.color().as_str(), "#1E88E5");

  let father = ndao.find_by_name("Serigne Ndao").unwrap();
  assert_eq!(father.role(), &Role::Father);
  assert_eq!(father.parent_refs().len(), 2);
  assert_eq!(father.parent_refs()[0], grandfather.identity());

  let mother = ndao.find_by_name("Sokhna Ndao").unwrap();
  assert!(mother.parent_refs().is_empty());
}

#[test]
fn grandchildren_carry_a_single_parent() {
  let r = registry();
  let ndao = r.get_family("Ndao").unwrap();
  let cheikh = ndao.find_by_name("Cheikh Ndao").unwrap().identity();
  for given in ["Fatou", "Ali"] {
    let gc = ndao.find_by_name(&format!("{given} Ndao")).unwrap();
    assert_eq!(gc.parent_refs(), [cheikh]);
  }
  let ndeye = ndao.find_by_name("Ndèye Ndao").unwrap();
  assert_eq!(ndeye.role(), &Role::Grandchild);
  assert_eq!(ndeye.parent_refs().len(), 1);
}

#[test]
fn initialize_twice_keeps_edits() {
  let mut r = registry();
  let id = r
    .get_family("Sy")
    .unwrap()
    .find_by_name("Adja Sy")
    .unwrap()
    .identity();
  r.rename_member("Sy", id, "Adja Coumba Sy").unwrap();

  assert!(r.is_initialized());
  let families = r.initialize().unwrap();
  assert_eq!(families.len(), PRESETS.len());
  assert_eq!(r.get_family("Sy").unwrap().get(id).unwrap().name(), "Adja Coumba Sy");
}

#[test]
fn fresh_registry_is_empty_until_initialized() {
  let mut r = FamilyRegistry::new();
  assert!(!r.is_initialized());
  assert!(r.list_family_names().is_empty());
  r.initialize().unwrap();
  assert_eq!(r.families().len(), PRESETS.len());
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_family_is_not_found() {
  let r = registry();
  let err = r.get_family("Unknown").unwrap_err();
  assert!(matches!(err, Error::FamilyNotFound(ref n) if n == "Unknown"));
  assert!(err.is_not_found());
}

#[test]
fn initialize_yields_exactly_the_presets() {
  let mut r = FamilyRegistry::new();
  r.initialize().unwrap();
  r.initialize().unwrap();
  let expected: Vec<&str> = PRESETS.iter().map(|(name, _)| *name).collect();
  assert_eq!(r.list_family_names(), expected);
}

// ─── Rename ──────────────────────────────────────────────────────────────────

#[test]
fn rename_is_idempotent_for_a_fixed_name() {
  let mut once = registry();
  let id = once
    .get_family("Ndao")
    .unwrap()
    .find_by_name("Serigne Ndao")
    .unwrap()
    .identity();
  once.rename_member("Ndao", id, "Serigne Moussa Ndao").unwrap();
  let after_once = once.get_family("Ndao").unwrap().clone();

  once.rename_member("Ndao", id, "Serigne Moussa Ndao").unwrap();
  assert_eq!(once.get_family("Ndao").unwrap(), &after_once);
}

#[test]
fn rename_touches_only_the_target() {
  let mut r = registry();
  let before = r.get_family("Ndao").unwrap().clone();
  let id = before.find_by_name("Serigne Ndao").unwrap().identity();

  r.rename_member("Ndao", id, "Serigne Moussa Ndao").unwrap();

  let after = r.get_family("Ndao").unwrap();
  for (old, new) in before.iter().zip(after.iter()) {
    assert_eq!(old.identity(), new.identity());
    assert_eq!(old.parent_refs(), new.parent_refs());
    if old.identity() == id {
      assert_eq!(new.name(), "Serigne Moussa Ndao");
    } else {
      assert_eq!(old.name(), new.name());
    }
  }
}

#[test]
fn rename_in_unknown_family_fails() {
  let mut r = registry();
  let err = r.rename_member("Unknown", Uuid::new_v4(), "X").unwrap_err();
  assert!(matches!(err, Error::FamilyNotFound(_)));
}

#[test]
fn rename_with_foreign_identity_fails_and_changes_nothing() {
  let mut r = registry();
  let foreign = r
    .get_family("KANE")
    .unwrap()
    .find_by_name("Cheikh KANE")
    .unwrap()
    .identity();
  let before = r.get_family("WANE").unwrap().clone();

  let err = r.rename_member("WANE", foreign, "Someone").unwrap_err();
  assert!(matches!(err, Error::MemberNotFound { member, .. } if member == foreign));
  assert_eq!(r.get_family("WANE").unwrap(), &before);
}

#[test]
fn set_member_role_reaches_registry_families() {
  let mut r = registry();
  let id = r
    .get_family("Aidara")
    .unwrap()
    .find_by_name("Sokhna Aidara")
    .unwrap()
    .identity();
  r.set_member_role("Aidara", id, Role::Custom("Matriarch".into()))
    .unwrap();

  let member = r.get_family("Aidara").unwrap().get(id).unwrap();
  assert_eq!(member.role().to_string(), "Matriarch");
  assert_eq!(member.tier(), Tier::Parent);
  assert_eq!(member.color().as_str(), "#03A9F4");

  let err = r
    .set_member_role("Aidara", Uuid::new_v4(), Role::Child)
    .unwrap_err();
  assert!(matches!(err, Error::MemberNotFound { .. }));
}

#[test]
fn families_serialize_for_json_listing() {
  let r = registry();
  let value = serde_json::to_value(r.get_family("Tall").unwrap()).unwrap();
  assert_eq!(value["name"], "Tall");
  assert_eq!(value["scheme"]["elder"], "#C2185B");
  let members = value["members"].as_array().unwrap();
  assert_eq!(members.len(), 11);
  assert_eq!(members[0]["name"], "El Hadj Tall");
  assert_eq!(members[0]["role"], "Grandfather");
  assert_eq!(members[0]["tier"], "elder");
  assert_eq!(members[2]["parent_refs"].as_array().unwrap().len(), 2);
  assert!(members[0]["photo_ref"].is_null());
}
