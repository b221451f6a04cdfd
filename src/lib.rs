//! Sonar installations: connection profiles for Sonar code-quality servers.
//!
//! This crate models the named Sonar server installations a continuous
//! integration host keeps in its configuration, builds dashboard links from
//! them, and resolves them by name for build steps.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`installation`]: Installation entity, password scrambling and lookup

pub mod installation;
