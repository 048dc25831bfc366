//! # crowdfund-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** a data source must implement:
//!   - `CampaignRepository`: read-only lookup of campaign records
//! - Define the **driving/inbound** use-cases:
//!   - `CampaignService`: get one campaign, list, filter and paginate
//! - Orchestrate domain objects without knowing *where* records come from
//!   (the mock set today, an HTTP backend later)
//!
//! ## Dependency rule
//! Depends on `crowdfund-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
