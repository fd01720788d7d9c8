//! Utility functions and helpers for server operations.
//!
//! Field-level validation shared by the services: names, descriptive text, media URLs and
//! the numeric fields of a setup.

pub mod validate;
