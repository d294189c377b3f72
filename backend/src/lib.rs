//! # Sky Calculator
//!
//! Two small astronomy calculators served over HTTP.
//!
//! - **Lunar phase**: percentage of the Moon's disk illuminated at a date and
//!   time, and the named phase that percentage falls into.
//! - **Planet positions**: azimuth, elevation, right ascension and
//!   declination of Mercury through Neptune for an observer on Earth.
//!
//! ## Architecture
//!
//! - [`models`]: validated inputs (instants, observer locations)
//! - [`ephemeris`]: the [`ephemeris::Ephemeris`] trait and its adapter over
//!   the `siderust` crate
//! - [`services`]: phase classification and position table assembly
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum HTML pages and JSON API (feature `http-server`)
//!
//! The library logs through the `log` facade; the server binary installs a
//! `tracing` subscriber that also collects those records.

pub mod config;
pub mod ephemeris;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
