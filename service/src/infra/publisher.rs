//! [`Publisher`]-related definitions.

use derive_more::{Display, Error as StdError};

#[cfg(doc)]
use crate::domain::labor::Event;

/// Publisher delivering domain [`Event`]s to the surrounding system.
pub use common::Handler as Publisher;

/// [`Publisher`] error.
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// Underlying transport rejected the [`Event`].
    #[display("event delivery failed: {_0}")]
    Delivery(#[error(not(source))] String),
}
