//! Background execution of subject fetches.
//!
//! Each [`FetchRequest`] runs on its own tokio task. The outcome comes back to
//! the UI loop as a [`PageEvent::Loaded`] over an unbounded channel.

use crate::api::SubjectSource;
use crate::app::{FetchRequest, ListPage, PageEvent};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawns fetches and tracks the tasks still running.
pub struct Fetcher {
    source: Arc<dyn SubjectSource>,
    tx: UnboundedSender<PageEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl Fetcher {
    /// Create a fetcher that reports completions on `tx`.
    pub fn new(source: Arc<dyn SubjectSource>, tx: UnboundedSender<PageEvent>) -> Self {
        Self {
            source,
            tx,
            tasks: Vec::new(),
        }
    }

    /// Start a fetch in the background.
    ///
    /// # Details
    /// Requests are never de-duplicated or cancelled here; the list page
    /// drops completions that are no longer current.
    pub fn spawn(&mut self, request: FetchRequest) {
        self.tasks.retain(|task| !task.is_finished());

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = source.fetch_subjects(request.query).await;
            let event = PageEvent::Loaded {
                token: request.token,
                limit: request.query.limit,
                outcome,
            };
            if tx.send(event).is_err() {
                debug!(token = request.token, "list page gone, dropping response");
            }
        });
        self.tasks.push(handle);
        debug!(token = request.token, in_flight = self.in_flight(), "fetch spawned");
    }

    /// Number of tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// Abort every running fetch so nothing reports after the page is closed.
    pub fn abort_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Apply an event and start the fetch it asks for, if any.
pub fn dispatch(page: &mut ListPage, fetcher: &mut Fetcher, event: PageEvent) {
    if let Some(request) = page.handle(event) {
        fetcher.spawn(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Subject, SubjectPage, SubjectQuery};
    use crate::app::RenderState;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Mutex;
    use tokio::sync::{Notify, mpsc};

    /// Serves `count` subjects from memory and records every query.
    struct MemorySource {
        count: u64,
        queries: Mutex<Vec<SubjectQuery>>,
    }

    #[async_trait]
    impl SubjectSource for MemorySource {
        async fn fetch_subjects(&self, query: SubjectQuery) -> Result<SubjectPage, FetchError> {
            self.queries.lock().unwrap().push(query);
            let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let results = (query.offset..self.count)
                .take(query.limit as usize)
                .map(|i| Subject {
                    id: i + 1,
                    name: format!("subject {}", i + 1),
                    image_source: None,
                    question_count: 0,
                    created_at: base + Duration::days(i as i64),
                })
                .collect();
            Ok(SubjectPage {
                count: self.count,
                results: Some(results),
            })
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SubjectSource for FailingSource {
        async fn fetch_subjects(&self, _query: SubjectQuery) -> Result<SubjectPage, FetchError> {
            Err(FetchError::Decode(
                serde_json::from_str::<SubjectPage>("<html>").unwrap_err(),
            ))
        }
    }

    /// Never completes.
    struct HangingSource(Notify);

    #[async_trait]
    impl SubjectSource for HangingSource {
        async fn fetch_subjects(&self, _query: SubjectQuery) -> Result<SubjectPage, FetchError> {
            self.0.notified().await;
            Ok(SubjectPage::default())
        }
    }

    #[tokio::test]
    async fn test_mount_loads_first_page() {
        let source = Arc::new(MemorySource {
            count: 20,
            queries: Mutex::new(Vec::new()),
        });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut fetcher = Fetcher::new(source.clone(), tx);
        let mut page = ListPage::new();

        dispatch(&mut page, &mut fetcher, PageEvent::Mount);
        let event = rx.recv().await.unwrap();
        dispatch(&mut page, &mut fetcher, event);

        assert_eq!(page.render_state(), RenderState::Populated);
        assert_eq!(page.items().len(), 8);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(source.queries.lock().unwrap()[0].offset, 0);
    }

    #[tokio::test]
    async fn test_page_change_fetches_offset() {
        let source = Arc::new(MemorySource {
            count: 20,
            queries: Mutex::new(Vec::new()),
        });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut fetcher = Fetcher::new(source.clone(), tx);
        let mut page = ListPage::new();

        dispatch(&mut page, &mut fetcher, PageEvent::Mount);
        let event = rx.recv().await.unwrap();
        dispatch(&mut page, &mut fetcher, event);

        dispatch(&mut page, &mut fetcher, PageEvent::LastPage);
        let event = rx.recv().await.unwrap();
        dispatch(&mut page, &mut fetcher, event);

        assert_eq!(page.current_page(), 3);
        assert_eq!(page.items().len(), 4);
        assert_eq!(source.queries.lock().unwrap()[1].offset, 16);
    }

    #[tokio::test]
    async fn test_failure_settles_to_empty() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut fetcher = Fetcher::new(Arc::new(FailingSource), tx);
        let mut page = ListPage::new();

        dispatch(&mut page, &mut fetcher, PageEvent::Mount);
        assert_eq!(page.render_state(), RenderState::Loading);
        let event = rx.recv().await.unwrap();
        dispatch(&mut page, &mut fetcher, event);

        assert_eq!(page.render_state(), RenderState::Empty);
    }

    #[tokio::test]
    async fn test_aborted_fetch_never_reports() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut fetcher = Fetcher::new(Arc::new(HangingSource(Notify::new())), tx);
        let mut page = ListPage::new();

        dispatch(&mut page, &mut fetcher, PageEvent::Mount);
        assert_eq!(fetcher.in_flight(), 1);
        drop(fetcher);

        assert!(rx.recv().await.is_none());
        assert!(page.is_loading());
    }
}
