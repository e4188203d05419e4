//! State behind the budget list screen.
//!
//! The view keeps the projected entries, the current search/filter selection,
//! the create/edit dialog state and a queue of transient notifications. It
//! re-projects from scratch whenever the attached [`AccountStore`] publishes a
//! new snapshot.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use bufy_domain::{AccountSnapshot, BudgetDraft, BudgetEntry, BudgetFilter, BudgetQuery};
use tracing::{debug, info, warn};

use crate::{
    actions::{budget_route, BudgetActions},
    budget_service::{BudgetMetrics, BudgetService},
    notification::Notification,
    snapshot_store::{AccountStore, SubscriptionId},
    summary_service::{BudgetOverview, SummaryService},
    CoreError,
};

pub const EMPTY_FILTERED_MESSAGE: &str = "No budgets match your search criteria";
pub const EMPTY_LIST_MESSAGE: &str = "No budgets created yet. Create your first budget!";

struct Attachment {
    store: Arc<AccountStore>,
    subscription: SubscriptionId,
    stale: Arc<AtomicBool>,
}

pub struct BudgetListView {
    snapshot: Option<AccountSnapshot>,
    entries: Vec<BudgetEntry>,
    metrics: BudgetMetrics,
    query: BudgetQuery,
    loading: bool,
    budget_to_edit: Option<BudgetEntry>,
    create_dialog_open: bool,
    notifications: Vec<Notification>,
    attachment: Option<Attachment>,
}

impl Default for BudgetListView {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetListView {
    /// Creates a detached view; feed it with [`BudgetListView::refresh`].
    pub fn new() -> Self {
        Self {
            snapshot: None,
            entries: Vec::new(),
            metrics: BudgetMetrics::default(),
            query: BudgetQuery::default(),
            loading: true,
            budget_to_edit: None,
            create_dialog_open: false,
            notifications: Vec::new(),
            attachment: None,
        }
    }

    /// Creates a view that follows `store`, projecting its current snapshot.
    pub fn attach(store: Arc<AccountStore>) -> Self {
        let stale = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stale);
        let subscription = store.subscribe(move |_| flag.store(true, Ordering::SeqCst));
        let mut view = Self::new();
        view.refresh(store.get().as_ref());
        view.attachment = Some(Attachment {
            store,
            subscription,
            stale,
        });
        view
    }

    /// Re-projects from the attached store if it changed since the last sync.
    ///
    /// Returns `true` when a recompute happened.
    pub fn sync(&mut self) -> bool {
        let latest = match &self.attachment {
            Some(attachment) if attachment.stale.swap(false, Ordering::SeqCst) => {
                attachment.store.get()
            }
            _ => return false,
        };
        self.refresh(latest.as_ref());
        true
    }

    /// Rebuilds entries and metrics from `snapshot`.
    pub fn refresh(&mut self, snapshot: Option<&AccountSnapshot>) {
        self.loading = true;
        self.snapshot = snapshot.copied();
        self.entries = BudgetService::project(snapshot);
        self.metrics = BudgetService::metrics(snapshot);
        self.loading = false;
        debug!(
            "budget list recomputed: {} entries, {} over budget",
            self.entries.len(),
            self.metrics.over_budget_count
        );
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn metrics(&self) -> BudgetMetrics {
        self.metrics
    }

    pub fn overview(&self) -> BudgetOverview {
        SummaryService::overview(self.snapshot.as_ref())
    }

    pub fn query(&self) -> &BudgetQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn set_filter(&mut self, filter: BudgetFilter) {
        self.query.filter = filter;
    }

    /// Entries that pass the current search term and filter.
    pub fn visible_entries(&self) -> Vec<BudgetEntry> {
        BudgetService::filter(&self.entries, &self.query, &self.metrics)
    }

    pub fn is_over_budget(&self, entry: &BudgetEntry) -> bool {
        BudgetService::is_over_budget(entry, &self.metrics)
    }

    /// Placeholder text for an empty list, or `None` when entries are visible.
    pub fn empty_state_message(&self) -> Option<&'static str> {
        if !self.visible_entries().is_empty() {
            return None;
        }
        if self.query.is_narrowed() {
            Some(EMPTY_FILTERED_MESSAGE)
        } else {
            Some(EMPTY_LIST_MESSAGE)
        }
    }

    pub fn is_create_dialog_open(&self) -> bool {
        self.create_dialog_open
    }

    pub fn budget_to_edit(&self) -> Option<&BudgetEntry> {
        self.budget_to_edit.as_ref()
    }

    pub fn open_create_dialog(&mut self) {
        self.budget_to_edit = None;
        self.create_dialog_open = true;
    }

    /// Opens the dialog pre-filled with the entry `id`.
    pub fn begin_edit(&mut self, id: u32) -> Result<(), CoreError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(CoreError::BudgetNotFound(id))?;
        self.budget_to_edit = Some(entry);
        self.create_dialog_open = true;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.budget_to_edit = None;
        self.create_dialog_open = false;
    }

    /// Submits the dialog: updates the entry being edited, or creates a new one.
    ///
    /// On failure the dialog stays open and an error notification is queued.
    pub fn save(&mut self, draft: BudgetDraft, actions: &mut dyn BudgetActions) -> bool {
        let editing = self.budget_to_edit.as_ref().map(|entry| entry.id);
        let result = match editing {
            Some(id) => actions.update(id, &draft),
            None => actions.create(&draft),
        };

        match result {
            Ok(()) => {
                if let Some(id) = editing {
                    if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
                        entry.apply(&draft);
                    }
                    self.metrics =
                        BudgetService::metrics_for(&self.entries, self.metrics.total_spent);
                    self.notify(Notification::success("Budget updated successfully"));
                } else {
                    self.notify(Notification::success("Budget created successfully"));
                }
                self.create_dialog_open = false;
                self.budget_to_edit = None;
                true
            }
            Err(err) => {
                warn!("saving budget `{}` failed: {}", draft.name, err);
                let message = if editing.is_some() {
                    "Failed to update budget"
                } else {
                    "Failed to create budget"
                };
                self.notify(Notification::error(message));
                false
            }
        }
    }

    pub fn delete(&mut self, id: u32, actions: &mut dyn BudgetActions) -> bool {
        match actions.delete(id) {
            Ok(()) => {
                self.notify(Notification::success("Budget deleted successfully"));
                true
            }
            Err(err) => {
                warn!("deleting budget {} failed: {}", id, err);
                self.notify(Notification::error("Failed to delete budget"));
                false
            }
        }
    }

    /// Navigates to the detail route of entry `id` and returns that route.
    pub fn view_details(
        &mut self,
        id: u32,
        actions: &mut dyn BudgetActions,
    ) -> Result<String, CoreError> {
        let route = budget_route(id);
        actions.navigate(&route)?;
        Ok(route)
    }

    /// Hands queued notifications to the caller, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        info!("{}: {}", notification.kind, notification.message);
        self.notifications.push(notification);
    }
}

impl Drop for BudgetListView {
    fn drop(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.store.unsubscribe(attachment.subscription);
        }
    }
}
