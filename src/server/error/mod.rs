//! Error types for the Caddie server core.
//!
//! Each family of failure has its own enum (configuration, validation, referential integrity,
//! authorization, setup sheets) and all of them aggregate into [`Error`], the type every
//! service method returns. None of these errors are retried internally: they describe
//! caller input or data-authoring problems and are surfaced to the caller as-is.

pub mod auth;
pub mod config;
pub mod integrity;
pub mod sheet;
pub mod validation;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, integrity::ReferentialIntegrityError,
    sheet::SheetError, validation::ValidationError,
};

/// Main error type for the Caddie server core.
///
/// Domain-specific error enums convert into this type through `#[from]`, so services can use
/// `?` on any of them. Database errors are kept transparent with the exception of unique
/// constraint violations, which [`Error::from_insert`] turns into [`Error::DuplicateName`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed input such as a bad handle, an empty name, or a disallowed wind speed.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A reference points at a missing entity or at a child of the wrong parent.
    #[error(transparent)]
    IntegrityError(#[from] ReferentialIntegrityError),
    /// The acting user may not perform the mutation.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Layer reordering or resolution failure.
    #[error(transparent)]
    SheetError(#[from] SheetError),
    /// Uniqueness violation on a user handle or on a `(creator, name)` pair.
    #[error("{entity} named {name:?} already exists")]
    DuplicateName { entity: &'static str, name: String },
    /// Internal error indicating a bug in Caddie's code.
    #[error("Internal error with Caddie's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl Error {
    /// Maps the result of an insert or rename against a unique index.
    ///
    /// The database unique index is the compare-and-set primitive for names: when two writers
    /// race on the same key exactly one insert succeeds and the other is reported here as
    /// [`Error::DuplicateName`] rather than as a raw database error.
    pub fn from_insert(err: DbErr, entity: &'static str, name: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateName {
                entity,
                name: name.to_string(),
            },
            _ => Self::DbErr(err),
        }
    }
}
