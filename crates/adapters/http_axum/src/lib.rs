//! # crowdfund-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** over the campaign data source
//!   (`/api/campaigns`, `/api/campaigns/{id}`) so the dashboard can be
//!   pointed at HTTP instead of the in-process mock
//! - Serve the **compiled dashboard** (the Leptos CSR bundle) with an
//!   `index.html` fallback so client-side routes survive a reload
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `crowdfund-app` (port traits and services) and
//! `crowdfund-domain` (types used in response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod assets;
pub mod error;
pub mod router;
pub mod state;
