//! Application services for installation lookup.

mod lookup;

pub use lookup::InstallationLookup;
