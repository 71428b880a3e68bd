//! # netlayer-core
//!
//! Shared vocabulary for netlayer: the network configuration data model,
//! built-in defaults, merge layers, and the error type used by every other
//! crate in the workspace.

pub mod error;
pub mod types;

pub use error::{NetlayerError, Result};
pub use types::*;
