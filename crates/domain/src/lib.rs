//! # crowdfund-domain
//!
//! Pure domain model for the crowdfund presentation layer.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Campaigns** (fundraising records with a goal and a raised total)
//! - Derive **funding metrics**: percentage funded, days remaining, status
//! - Format **money** the way the UI shows it (`$24,000`)
//! - Interpret the **donation amount** typed by a visitor
//! - Score **password strength** and describe **roles** and the session user
//! - Filter and paginate campaign listings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Data sources are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod campaign;
pub mod donation;
pub mod funding;
pub mod money;
pub mod password;
pub mod query;
pub mod role;
pub mod user;
