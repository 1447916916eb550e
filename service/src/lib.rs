//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

#[cfg(doc)]
use infra::{Publisher, Repository};

pub use self::{command::Command, query::Query};

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<R, P> {
    /// [`Repository`] of this [`Service`].
    repository: R,

    /// [`Publisher`] of this [`Service`].
    publisher: P,
}

impl<R, P> Service<R, P> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Returns [`Repository`] of this [`Service`].
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns [`Publisher`] of this [`Service`].
    #[must_use]
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
