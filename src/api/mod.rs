//! Subjects API integration module.
//!
//! Provides the REST client, the source trait and the wire models.

pub mod client;
pub mod models;
pub mod source;

pub use client::SubjectClient;
pub use models::{SortOrder, Subject, SubjectPage, SubjectQuery};
pub use source::SubjectSource;
