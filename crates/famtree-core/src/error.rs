//! Error types for `famtree-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("family not found: {0}")]
  FamilyNotFound(String),

  #[error("member {member} not found in family {family}")]
  MemberNotFound { family: String, member: Uuid },

  #[error("member name must not be blank")]
  BlankName,

  #[error("a member may have at most two parents, got {0}")]
  TooManyParents(usize),

  #[error("parent {parent} is not a member of family {family}")]
  DanglingParent { family: String, parent: Uuid },

  #[error("parent {0} listed more than once")]
  DuplicateParent(Uuid),
}

impl Error {
  /// Whether this error reports a failed lookup rather than invalid input.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::FamilyNotFound(_) | Self::MemberNotFound { .. })
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
