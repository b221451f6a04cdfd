//! Unit tests for the installation module.
