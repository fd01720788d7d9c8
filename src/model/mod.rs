//! Serializable data transfer objects.
//!
//! These are the shapes handed to whatever transport sits above the core. Ordered sequences
//! (course hole order, sheet layers) serialize as arrays in stored order, `objective` as
//! `"score"` or `"speed"`, and optional fields as explicit `null`.

pub mod display;
pub mod geometry;
pub mod setup;
pub mod sheet;
pub mod user;
