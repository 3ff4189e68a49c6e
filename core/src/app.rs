//! Application state and the per-view state machines.
//!
//! # Design
//! One explicit, serializable-in-spirit `AppState` value holds everything
//! the UI needs between renders: the current page, the last-fetched post
//! list, the single process-wide pending-delete slot, the create view's
//! form and staged candidate, and the edit view's target. There are no
//! ambient singletons; `update` is the only place state transitions
//! happen, driven by discrete [`Event`]s from the host UI.
//!
//! Each event handler performs at most one API call (plus a list refresh
//! after a successful mutation), then drains the facade's error messages
//! into the state for the next render. Execution is single-threaded and
//! synchronous by design: the UI blocks for the duration of each call.

use crate::api::BlogApi;
use crate::form::BlogForm;
use crate::http::Transport;
use crate::types::BlogPost;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    Create,
    Edit,
}

/// The edit view's selected post: its id plus a form seeded from it.
#[derive(Debug, Clone)]
pub struct EditTarget {
    pub id: String,
    pub form: BlogForm,
}

/// The whole UI state between renders.
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    /// Last-fetched list, displayed by the List and Edit views.
    pub posts: Vec<BlogPost>,
    /// Global confirmation slot: id of the one post pending deletion.
    /// Requesting deletion of another post overwrites it.
    pub pending_delete: Option<String>,
    pub create_form: BlogForm,
    /// Validated candidate awaiting yes/no before the create call.
    pub pending_create: Option<BlogPost>,
    pub edit: Option<EditTarget>,
    errors: Vec<String>,
    notices: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::List,
            posts: Vec::new(),
            pending_delete: None,
            create_form: BlogForm::new(),
            pending_create: None,
            edit: None,
            errors: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Drain error lines for the next render, oldest first.
    pub fn take_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }

    /// Drain success/info lines for the next render, oldest first.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Discrete UI events. Field edits mutate the forms directly; only
/// transitions go through here.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Page),
    RefreshList,
    /// Delete button on one listed post; overwrites the confirmation slot.
    DeleteRequested(String),
    ConfirmDelete,
    CancelDelete,
    /// Collect and validate the create form into a staged candidate.
    SubmitCreate,
    ConfirmCreate,
    CancelCreate,
    /// Pick the edit target by id and fetch its full record.
    SelectEditTarget(String),
    /// Validate the edit form and immediately call update (no confirmation).
    SubmitEdit,
}

/// Advance the state machine by one event.
///
/// `today` is the `YYYY-MM-DD` date stamped onto newly created posts.
pub fn update<T: Transport>(
    state: &mut AppState,
    api: &mut BlogApi<T>,
    event: Event,
    today: &str,
) {
    match event {
        Event::Navigate(page) => {
            state.page = page;
            match page {
                // Both views render from the fetched list.
                Page::List | Page::Edit => refresh_list(state, api),
                Page::Create => {}
            }
        }
        Event::RefreshList => refresh_list(state, api),
        Event::DeleteRequested(id) => {
            // Overwrites any pending confirmation on another post.
            state.pending_delete = Some(id);
        }
        Event::ConfirmDelete => {
            // Slot is cleared whether or not the call succeeds.
            if let Some(id) = state.pending_delete.take() {
                if api.delete_post(&id).is_some() {
                    state.notice("Blog deleted successfully");
                    refresh_list(state, api);
                }
                drain(state, api);
            }
        }
        Event::CancelDelete => {
            state.pending_delete = None;
        }
        Event::SubmitCreate => {
            // The staged candidate is what gets submitted; ignore further
            // submissions until it is confirmed or cancelled.
            if state.pending_create.is_some() {
                return;
            }
            match state.create_form.submit(today) {
                Ok(post) => state.pending_create = Some(post),
                Err(e) => state.error(e.to_string()),
            }
        }
        Event::ConfirmCreate => {
            if let Some(post) = state.pending_create.take() {
                if api.create_post(&post).is_some() {
                    state.notice("Blog created successfully");
                    state.create_form = BlogForm::new();
                    state.page = Page::List;
                    refresh_list(state, api);
                } else {
                    // Candidate discarded; no retry-with-same-data path.
                    state.error("Failed to create blog. Please try again.");
                    state.create_form = BlogForm::new();
                }
                drain(state, api);
            }
        }
        Event::CancelCreate => {
            state.pending_create = None;
            state.create_form = BlogForm::new();
        }
        Event::SelectEditTarget(id) => {
            match api.get_post(&id) {
                Some(post) => {
                    state.edit = Some(EditTarget {
                        id: post.id.clone(),
                        form: BlogForm::from_post(&post),
                    });
                }
                None => {
                    state.error("Blog not found");
                    state.edit = None;
                }
            }
            drain(state, api);
        }
        Event::SubmitEdit => {
            let Some(target) = &state.edit else { return };
            let submitted = target.form.submit(today);
            let id = target.id.clone();
            match submitted {
                Ok(post) => {
                    if api.update_post(&id, &post).is_some() {
                        state.notice("Blog updated successfully");
                        state.edit = None;
                        state.page = Page::List;
                        refresh_list(state, api);
                    }
                    // On failure: stay on Edit, form re-offered.
                    drain(state, api);
                }
                Err(e) => state.error(e.to_string()),
            }
        }
    }
}

fn refresh_list<T: Transport>(state: &mut AppState, api: &mut BlogApi<T>) {
    state.posts = api.list_posts();
    drain(state, api);
}

fn drain<T: Transport>(state: &mut AppState, api: &mut BlogApi<T>) {
    state.errors.extend(api.take_messages());
}
