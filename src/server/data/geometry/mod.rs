//! Game geometry repositories.
//!
//! Games own holes and courses, holes own pins. Courses additionally store an ordered list of
//! holes and a set of allowed wind speeds as child rows.

pub mod course;
pub mod game;
pub mod hole;
pub mod pin;
