//! # Site Persona
//!
//! Interest tracking and personalized service recommendations for an
//! IT-services website.
//!
//! Visitor actions (clicking a tag, filtering the portfolio, opening a
//! service) report interest keys. Keys resolve to one of four business
//! categories and are counted in a persisted profile. On each page load the
//! profile is ranked to pick hero copy and up to three recommended services.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────┐   ┌──────────────┐
//! │  track /   │──▶│ resolver │──▶│  FileStore   │
//! │  view      │   │ tracker  │   │ (JSON k/v)   │
//! └────────────┘   └──────────┘   └──────┬───────┘
//!                                        │
//!                  ┌──────────┐          │
//!                  │  engine  │◀─────────┘
//!                  └────┬─────┘
//!                       ▼
//!                 hero + top 3
//! ```
//!
//! The algorithms live in `site-persona-core`; this crate adds configuration,
//! file-backed storage, catalog loading, and the `persona` CLI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`file_store`] | JSON-file key-value store |
//! | [`catalog`] | Built-in or TOML catalog loading |
//! | [`track`] | `track` and `resolve` commands |
//! | [`recommend`] | `recommend`, `profile`, and `reset` commands |
//! | [`services`] | `services` and `view` commands |

pub mod catalog;
pub mod config;
pub mod file_store;
pub mod recommend;
pub mod services;
pub mod track;
