//! Service layer for viewer-count.
//!
//! Sits between the HTTP handler and storage: resolves a filter into a
//! store query, folds the cursor into a total and decides when an empty
//! result means "not found".

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod aggregate;
mod count_service;
mod error;

pub use aggregate::{CountTotal, aggregate_counts};
pub use count_service::CountService;
pub use error::{AggregateError, ServiceError};
