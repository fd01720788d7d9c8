//! End-to-end scenarios driving the services from registration through resolution.

mod authoring;
mod resolution;
