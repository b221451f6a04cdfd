//! Sonar installation configuration and lookup.
//!
//! An installation names one Sonar server together with the database
//! credentials, Maven plugin version and trigger policy builds use to run
//! analysis against it. The host keeps the list; this module models a
//! single entry and resolves entries by name. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Lookup services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
