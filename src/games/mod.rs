//! Game implementations built on the core and rules modules.

pub mod memory;
