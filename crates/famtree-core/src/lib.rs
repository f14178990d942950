//! Core types for famtree: members, family groups, and the session registry.
//!
//! This crate is deliberately free of rendering and I/O. The graph renderer
//! and the interactive layers depend on it; it depends on nothing of theirs.

pub mod error;
pub mod family;
pub mod member;
pub mod palette;
pub mod presets;
pub mod registry;

pub use error::{Error, Result};
pub use family::FamilyGroup;
pub use member::{Member, NewMember, Role};
pub use palette::{Color, ColorScheme, Tier};
pub use registry::FamilyRegistry;

#[cfg(test)]
mod tests;
