//! Core types for viewer-count.
//!
//! Holds the request filter, its validation rules and the server
//! configuration shared by every other crate in the workspace.

mod config;
mod constants;
mod error;
mod filter;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use filter::*;
