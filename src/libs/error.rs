//! Error types shared by the menu handlers.

use crate::libs::messages::Message;
use thiserror::Error;

/// Why a handler stopped before finishing.
///
/// Only `Prompt` ends the session; the dispatcher reports the other two and
/// shows the menu again.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A query or statement failed in the store. Connection errors, SQL
    /// errors, and constraint violations all land here.
    #[error("{context}: {source}")]
    Store {
        context: Message,
        #[source]
        source: rusqlite::Error,
    },

    /// A selection list the handler needs is empty.
    #[error("{0}")]
    Unavailable(Message),

    /// The terminal could not be read from or written to.
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

/// Attaches an operation context to store results.
pub trait StoreContext<T> {
    fn store_context(self, context: Message) -> Result<T, TrackerError>;
}

impl<T> StoreContext<T> for rusqlite::Result<T> {
    fn store_context(self, context: Message) -> Result<T, TrackerError> {
        self.map_err(|source| TrackerError::Store { context, source })
    }
}
