//! HTTP server module.
//!
//! Serves the calculator HTML pages and a small JSON API over the same
//! service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Form / JSON parsing, blank-field detection             │
//! │  - HTML rendering, JSON serialization, error mapping      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │  spawn_blocking
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Phase classification, position table assembly          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Ephemeris (ephemeris/)                                   │
//! │  - Moon illumination, planet RA/Dec and alt-az            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use router::{create_router, create_router_with_settings};
pub use state::AppState;
