//! Server application core modules.
//!
//! Everything needed to run Caddie against a database: configuration, repositories over the
//! SeaORM entities, the error taxonomy, domain types such as the acting identity and the
//! situation tuple, field validation, and the services exposing each operation. There is no
//! transport layer here; callers invoke services directly with an [`model::actor::Actor`].

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
