//! # Site Persona Core
//!
//! Shared, storage-agnostic logic for Site Persona: the closed category set,
//! the interest-key resolver, the service catalog, the interest tracker, and
//! the recommendation engine.
//!
//! This crate performs no filesystem I/O. Persistence goes through the
//! [`store::KeyValueStore`] trait, which the calling application injects.
//!
//! ```text
//!  UI action ──▶ resolver ──▶ tracker ──▶ KeyValueStore ("userInterestProfile")
//!                                              │
//!  page load ◀── hero + top 3 ◀── engine ◀─────┘
//! ```

pub mod catalog;
pub mod category;
pub mod engine;
pub mod hero;
pub mod personalization;
pub mod popularity;
pub mod profile;
pub mod resolver;
pub mod store;
pub mod tracker;
