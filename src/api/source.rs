use async_trait::async_trait;

use crate::api::models::{SubjectPage, SubjectQuery};
use crate::error::FetchError;

/// Defines the contract for fetching one page of subjects.
///
/// The event loop only talks to this trait, so tests can drive the list page
/// with an in-memory source.
#[async_trait]
pub trait SubjectSource: Send + Sync + 'static {
    /// Fetches the page described by `query`.
    async fn fetch_subjects(&self, query: SubjectQuery) -> Result<SubjectPage, FetchError>;
}
