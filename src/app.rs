//! List page state management.
//!
//! Owns sort order, the current page of subjects, pagination and the loading
//! flag. All transitions go through [`ListPage::handle`], which returns the
//! fetch to run, if any. The render state is derived, never stored.

use crate::api::{SortOrder, Subject, SubjectPage, SubjectQuery};
use crate::collate::compare_ko;
use crate::error::FetchError;
use crate::layout::{SizeClass, WIDE_PAGE_SIZE};
use tracing::{debug, error, info};

/// Which of the three mutually exclusive views to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// A fetch is in flight
    Loading,
    /// Settled with no subjects
    Empty,
    /// Settled with at least one subject
    Populated,
}

/// Inputs to the list page reducer.
#[derive(Debug)]
pub enum PageEvent {
    /// Page shown for the first time
    Mount,
    /// Viewport width changed (logical pixels)
    Resize(u32),
    /// Sort selector picked an order
    SetSortOrder(SortOrder),
    /// Sort selector toggled
    ToggleSortOrder,
    /// Pagination picked a page
    SetPage(u32),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Re-fetch the current page without changing state
    Reload,
    SelectNext,
    SelectPrev,
    /// A fetch settled
    Loaded {
        token: u64,
        limit: u32,
        outcome: Result<SubjectPage, FetchError>,
    },
}

/// A fetch the runtime should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Identifies the request; completions with an older token are dropped
    pub token: u64,
    /// Query parameters
    pub query: SubjectQuery,
}

/// State of the subject list page.
#[derive(Debug)]
pub struct ListPage {
    sort_order: SortOrder,
    items: Vec<Subject>,
    loading: bool,
    page_size: u32,
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    selected: usize,
    request_token: u64,
}

impl Default for ListPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ListPage {
    /// Create a list page with mount-time defaults.
    ///
    /// # Returns
    /// * `ListPage` - Sorted newest first, page 1 of size 8, loading
    pub fn new() -> Self {
        Self {
            sort_order: SortOrder::CreatedAt,
            items: Vec::new(),
            loading: true,
            page_size: WIDE_PAGE_SIZE,
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            selected: 0,
            request_token: 0,
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Subjects in server order.
    #[cfg(test)]
    pub fn items(&self) -> &[Subject] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Index of the selected card in the sorted view.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Derive the view to draw from the loading flag and item count.
    pub fn render_state(&self) -> RenderState {
        if self.loading {
            RenderState::Loading
        } else if self.items.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated
        }
    }

    /// Items in display order.
    ///
    /// # Details
    /// Recomputed on every call:
    /// - `CreatedAt`: newest first (stable, so ties keep server order)
    /// - `Name`: ascending under Korean collation
    pub fn sorted_items(&self) -> Vec<Subject> {
        let mut sorted = self.items.clone();
        sort_subjects(&mut sorted, self.sort_order);
        sorted
    }

    /// Currently selected subject in display order.
    pub fn selected_subject(&self) -> Option<Subject> {
        if self.render_state() != RenderState::Populated {
            return None;
        }
        self.sorted_items().into_iter().nth(self.selected)
    }

    /// Apply one event.
    ///
    /// # Arguments
    /// * `event` - What happened
    ///
    /// # Returns
    /// * `Option<FetchRequest>` - Fetch to start, if the event changed
    ///   sort order, page or page size, or asked for a reload
    pub fn handle(&mut self, event: PageEvent) -> Option<FetchRequest> {
        match event {
            PageEvent::Mount | PageEvent::Reload => Some(self.load()),
            PageEvent::Resize(width_px) => {
                if self.set_viewport(width_px) {
                    Some(self.load())
                } else {
                    None
                }
            }
            PageEvent::SetSortOrder(order) => self.set_sort_order(order),
            PageEvent::ToggleSortOrder => self.set_sort_order(self.sort_order.toggled()),
            PageEvent::SetPage(page) => self.set_current_page(page),
            PageEvent::NextPage => self.set_current_page(self.current_page.saturating_add(1)),
            PageEvent::PrevPage => self.set_current_page(self.current_page.saturating_sub(1)),
            PageEvent::FirstPage => self.set_current_page(1),
            PageEvent::LastPage => self.set_current_page(self.total_pages),
            PageEvent::SelectNext => {
                self.move_selection(true);
                None
            }
            PageEvent::SelectPrev => {
                self.move_selection(false);
                None
            }
            PageEvent::Loaded {
                token,
                limit,
                outcome,
            } => {
                self.finish_load(token, limit, outcome);
                None
            }
        }
    }

    /// Start a fetch for the current sort order, page and page size.
    fn load(&mut self) -> FetchRequest {
        self.loading = true;
        self.request_token += 1;
        let query = SubjectQuery::for_page(self.current_page, self.page_size, self.sort_order);
        debug!(token = self.request_token, ?query, "issuing subjects fetch");
        FetchRequest {
            token: self.request_token,
            query,
        }
    }

    fn finish_load(&mut self, token: u64, limit: u32, outcome: Result<SubjectPage, FetchError>) {
        if token != self.request_token {
            debug!(token, latest = self.request_token, "dropping stale subjects response");
            return;
        }

        match outcome {
            Ok(SubjectPage {
                count,
                results: Some(results),
            }) => {
                info!(count, received = results.len(), page = self.current_page, "subjects loaded");
                self.items = results;
                self.total_count = count;
                self.total_pages = total_pages(count, limit);
                self.selected = 0;
            }
            Ok(SubjectPage { results: None, .. }) => {
                info!("subjects response had no results");
                self.items.clear();
                self.selected = 0;
            }
            Err(e) => {
                error!("데이터를 불러오는데 실패하였습니다: {}", e);
            }
        }
        self.loading = false;
    }

    fn set_sort_order(&mut self, order: SortOrder) -> Option<FetchRequest> {
        if order == self.sort_order {
            return None;
        }
        // Page is kept as-is, so the new order is fetched at the same offset.
        self.sort_order = order;
        Some(self.load())
    }

    /// Apply a viewport width without issuing a fetch.
    ///
    /// Used for the initial measurement before `Mount`, so startup sends a
    /// single request at the right page size. Returns whether the page size
    /// changed.
    pub fn set_viewport(&mut self, width_px: u32) -> bool {
        let page_size = SizeClass::from_width(width_px).page_size();
        if page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        true
    }

    fn set_current_page(&mut self, page: u32) -> Option<FetchRequest> {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.load())
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }
}

/// Sort subjects in place for the given order.
pub fn sort_subjects(subjects: &mut [Subject], order: SortOrder) {
    match order {
        SortOrder::CreatedAt => subjects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Name => subjects.sort_by(|a, b| compare_ko(&a.name, &b.name)),
    }
}

/// `ceil(count / limit)`, zero when `limit` is zero.
pub fn total_pages(count: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(count.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}
