//! Errors raised while loading the mock campaign set.

use crowdfund_domain::error::CrowdfundError;

/// The seed data could not be turned into a repository.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The JSON document is malformed or has the wrong shape.
    #[error("failed to parse campaign seed")]
    Parse(#[from] serde_json::Error),
    /// A record violates a campaign invariant.
    #[error("invalid seed campaign {id}")]
    Invalid {
        id: String,
        #[source]
        source: CrowdfundError,
    },
    /// Two records share the same identifier.
    #[error("duplicate seed campaign id {0}")]
    Duplicate(String),
}
