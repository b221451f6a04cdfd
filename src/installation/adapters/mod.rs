//! Adapter implementations for installation ports.

pub mod memory;
