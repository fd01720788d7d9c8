//! Setup catalog repositories.
//!
//! Setups, the groups that collect them, and the sheets that stack groups into layers.

pub mod group;
pub mod setup;
pub mod sheet;
