// src/client/controller.rs
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};

use super::api::CatalogApi;
use super::debounce::Debouncer;
use super::ordering::{ResponseOrdering, Tickets};
use super::state::CatalogState;
use crate::config::DEBOUNCE_DELAY;

/// Shortest search text that triggers suggestions and a filtered listing.
pub const MIN_SEARCH_CHARS: usize = 2;

struct Shared<A> {
    api: A,
    state: watch::Sender<CatalogState>,
    ordering: ResponseOrdering,
    listings: Tickets,
    suggestions: Tickets,
}

impl<A: CatalogApi + 'static> Shared<A> {
    fn accept(&self, tickets: &Tickets, ticket: u64) -> bool {
        match self.ordering {
            ResponseOrdering::Arrival => true,
            ResponseOrdering::Latest => tickets.accept(ticket),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_products(&self, ticket: u64, page: i64, search: String) {
        match self.api.list_products(page, &search).await {
            Ok(listing) => {
                self.state.send_if_modified(|state| {
                    if !self.accept(&self.listings, ticket) {
                        debug!(ticket, "Dropping stale product listing");
                        return false;
                    }
                    state.apply_listing(listing);
                    true
                });
            }
            Err(e) => error!(error = %e, "Error fetching products"),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_suggestions(&self, ticket: u64, q: String) {
        match self.api.search_suggestions(&q).await {
            Ok(names) => {
                self.state.send_if_modified(|state| {
                    if !self.accept(&self.suggestions, ticket) {
                        debug!(ticket, "Dropping stale suggestions");
                        return false;
                    }
                    state.suggestions = names;
                    true
                });
            }
            Err(e) => error!(error = %e, "Error fetching suggestions"),
        }
    }

    fn clear_suggestions(&self) {
        self.suggestions.invalidate();
        self.state.send_if_modified(|state| {
            let changed = !state.suggestions.is_empty();
            state.suggestions.clear();
            changed
        });
    }

    // Tickets are issued here, not in the task, so they follow the order of
    // user actions rather than the order the scheduler polls tasks in.
    fn spawn_products(self: &Arc<Self>, page: i64, search: String) -> JoinHandle<()> {
        let ticket = self.listings.issue();
        let shared = Arc::clone(self);
        tokio::spawn(async move { shared.fetch_products(ticket, page, search).await })
    }

    fn spawn_suggestions(self: &Arc<Self>, q: String) -> JoinHandle<()> {
        let ticket = self.suggestions.issue();
        let shared = Arc::clone(self);
        tokio::spawn(async move { shared.fetch_suggestions(ticket, q).await })
    }

    // Debounce target. Requests go to their own tasks so a later keystroke
    // aborting the timer never cancels them.
    fn search_fired(self: &Arc<Self>, text: String) {
        if text.chars().count() >= MIN_SEARCH_CHARS {
            self.spawn_suggestions(text.clone());
            self.spawn_products(1, text);
        } else {
            self.clear_suggestions();
            self.spawn_products(1, String::new());
        }
    }
}

/// Drives `CatalogState` from input events.
///
/// Every mutation is published on a `watch` channel; renderers subscribe and
/// redraw. Network calls run on spawned tasks and are never cancelled, and
/// failures are logged and leave the state as it was.
pub struct CatalogController<A> {
    shared: Arc<Shared<A>>,
    debounce: Debouncer,
    mounted: bool,
}

impl<A: CatalogApi + 'static> CatalogController<A> {
    pub fn new(api: A, ordering: ResponseOrdering) -> Self {
        Self::with_debounce(api, ordering, DEBOUNCE_DELAY)
    }

    pub fn with_debounce(api: A, ordering: ResponseOrdering, delay: Duration) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            shared: Arc::new(Shared {
                api,
                state,
                ordering,
                listings: Tickets::default(),
                suggestions: Tickets::default(),
            }),
            debounce: Debouncer::new(delay),
            mounted: false,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.shared.state.subscribe()
    }

    pub fn state(&self) -> CatalogState {
        self.shared.state.borrow().clone()
    }

    /// Loads the unfiltered first page. Only the first call does anything.
    pub fn mount(&mut self) -> Option<JoinHandle<()>> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.shared.spawn_products(1, String::new()))
    }

    /// A keystroke: `text` is the whole new search box contents.
    pub fn input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.shared.state.send_modify(|state| state.search_text.clone_from(&text));

        let shared = Arc::clone(&self.shared);
        self.debounce.schedule(async move { shared.search_fired(text) });
    }

    /// Fills the search box with `suggestion` and lists its first page.
    pub fn select_suggestion(&mut self, suggestion: impl Into<String>) -> JoinHandle<()> {
        let suggestion = suggestion.into();
        // A search still waiting on the timer would overwrite the pick.
        self.debounce.cancel();
        self.shared.suggestions.invalidate();
        self.shared.state.send_modify(|state| {
            state.search_text.clone_from(&suggestion);
            state.suggestions.clear();
        });
        self.shared.spawn_products(1, suggestion)
    }

    /// Selects the suggestion at a 0-based position, if there is one.
    pub fn select_suggestion_at(&mut self, index: usize) -> Option<JoinHandle<()>> {
        let suggestion = self.shared.state.borrow().suggestions.get(index).cloned()?;
        Some(self.select_suggestion(suggestion))
    }

    /// Fetches `page` for the current search text. No bounds are checked.
    pub fn go_to_page(&self, page: i64) -> JoinHandle<()> {
        let search = self.shared.state.borrow().search_text.clone();
        self.shared.spawn_products(page, search)
    }

    /// `None` when the "next" control is disabled.
    pub fn next_page(&self) -> Option<JoinHandle<()>> {
        let (enabled, page) = {
            let state = self.shared.state.borrow();
            (state.can_go_next(), state.current_page + 1)
        };
        enabled.then(|| self.go_to_page(page))
    }

    /// `None` when the "previous" control is disabled.
    pub fn previous_page(&self) -> Option<JoinHandle<()>> {
        let (enabled, page) = {
            let state = self.shared.state.borrow();
            (state.can_go_previous(), state.current_page - 1)
        };
        enabled.then(|| self.go_to_page(page))
    }

    pub fn has_pending_search(&self) -> bool {
        self.debounce.is_pending()
    }
}
