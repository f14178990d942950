//! Error type for the session layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("{0}")]
  Validation(String),

  #[error("core error: {0}")]
  Core(#[source] famtree_core::Error),

  #[error("render error: {0}")]
  Render(#[from] famtree_graph::Error),
}

impl From<famtree_core::Error> for Error {
  fn from(e: famtree_core::Error) -> Self {
    if e.is_not_found() {
      Error::NotFound(e.to_string())
    } else {
      Error::Core(e)
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
