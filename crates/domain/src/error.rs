//! Common error types used across the workspace.
//!
//! Each layer converts into [`CrowdfundError`] via `#[from]`; there are no
//! stringly-typed variants.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum CrowdfundError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong { max: usize, actual: usize },
    #[error("{field} must be a non-negative amount")]
    NegativeAmount { field: &'static str },
    #[error("goal amount must be greater than zero")]
    NonPositiveGoal,
}

/// A record looked up by identifier does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
