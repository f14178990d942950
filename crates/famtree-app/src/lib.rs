//! Interaction layer for famtree.
//!
//! A [`Session`] is the explicit state object behind one user's visit: it owns
//! a seeded [`famtree_core::FamilyRegistry`], remembers the selected family and
//! page, and turns edit submissions into user-facing [`Notification`]s.
//! Widgets, drawing, and transport are the caller's responsibility.

pub mod error;
pub mod page;
pub mod session;

pub use error::{Error, Result};
pub use page::{Page, PageView};
pub use session::{MemberChoice, Notification, Session};
