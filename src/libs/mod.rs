//! Supporting pieces for the menu handlers.
//!
//! - **Configuration**: database path resolution and the data directory
//! - **Logging**: the tracing subscriber
//! - **Messaging**: user-facing text and the `msg_*!` output macros
//! - **Interaction**: the prompt seam and selection lists
//! - **Presentation**: table rendering
//! - **Errors**: the handler error type

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod selection;
pub mod view;
