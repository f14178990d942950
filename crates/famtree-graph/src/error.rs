//! Error types for the famtree renderer.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("member {member} references parent {parent}, which is not in the family")]
  DanglingReference { member: Uuid, parent: Uuid },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
