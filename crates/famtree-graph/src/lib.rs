//! Graph rendering for famtree.
//!
//! Turns a [`famtree_core::FamilyGroup`] into a [`GraphDescription`]: an
//! abstract set of styled nodes and edges for an external drawing engine.
//! Pure synchronous code; the description can be emitted as Graphviz DOT or
//! as JSON.
//!
//! # Quick start
//!
//! ```no_run
//! use famtree_core::FamilyRegistry;
//! use famtree_graph::TreeRenderer;
//!
//! let registry = FamilyRegistry::seeded().unwrap();
//! let family = registry.get_family("Ndao").unwrap();
//! let graph = TreeRenderer::default().render(family).unwrap();
//! println!("{}", graph.to_dot());
//! ```

mod dot;
pub mod error;
pub mod graph;
mod render;

pub use error::{Error, Result};
pub use graph::{Edge, Glyph, GraphDescription, Node, NodeLabel, RankDir};
pub use render::{RenderOptions, TreeRenderer};
