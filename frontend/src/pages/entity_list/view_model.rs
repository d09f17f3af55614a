use super::{
    config::{ListConfig, ListVariant},
    repository::ListRepository,
    state::{ListState, PageOutcome},
};
use crate::{
    api::{use_api_client, ApiError, EntityKind, ListQuery},
    state::notifications::{use_notifications, Notifications},
    utils::request_sequence::{RequestSequence, RequestTicket},
};
use leptos::*;
use std::rc::Rc;

/// Runs one fetch and applies it only if `ticket` is still the newest.
/// Returns `None` for stale or failed responses.
pub async fn load_page(
    repo: &ListRepository,
    variant: ListVariant,
    query: ListQuery,
    ticket: RequestTicket,
    sequence: &RequestSequence,
    state: RwSignal<ListState>,
) -> Option<PageOutcome> {
    let result = repo.fetch(variant, &query).await;
    if !sequence.is_current(ticket) {
        log::debug!("Dropping stale {} response for page {}", variant.label(), query.page);
        return None;
    }
    match result {
        Ok(page) => {
            let outcome = state.try_update(|s| s.apply_page(page))?;
            if let PageOutcome::StepBack(target) = outcome {
                log::info!(
                    "{} page {} came back empty, stepping back to page {}",
                    variant.label(),
                    query.page,
                    target
                );
            }
            Some(outcome)
        }
        Err(err) => {
            log::error!(
                "Failed to fetch {} page {}: {}",
                variant.label(),
                query.page,
                err
            );
            state.update(|s| s.fail_fetch());
            None
        }
    }
}

/// Reports a finished delete. Returns whether the current page should be
/// fetched again; a failure leaves the list as it was.
pub fn after_delete(
    result: &Result<(), ApiError>,
    kind: EntityKind,
    notifications: Notifications,
) -> bool {
    match result {
        Ok(()) => {
            notifications.success(format!("{} deleted", kind.label()));
            true
        }
        Err(err) => {
            log::error!("Failed to delete {}: {}", kind.label(), err);
            notifications.error(format!("Failed to delete {}: {}", kind.label(), err));
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct ListViewModel {
    pub config: StoredValue<ListConfig>,
    pub state: RwSignal<ListState>,
    pub pending_delete: RwSignal<Option<String>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    reload: Trigger,
}

impl ListViewModel {
    pub fn go_to_page(&self, page: u32) {
        self.state.update(|s| {
            s.go_to_page(page);
        });
    }

    pub fn search(&self, term: &str) {
        self.state.update(|s| s.apply_search(term));
    }

    /// Re-fetches the current page even when the query is unchanged.
    pub fn reload(&self) {
        self.reload.notify();
    }

    pub fn request_delete(&self, id: String) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self, id: String) {
        self.pending_delete.set(None);
        self.delete_action.dispatch(id);
    }
}

pub fn use_list_view_model(variant: ListVariant) -> ListViewModel {
    let repo = ListRepository::new_with_client(Rc::new(use_api_client()));
    let notifications = use_notifications();
    let config = variant.config();
    let searchable = config.searchable();
    let kind = config.kind();

    let state = create_rw_signal(ListState::default());
    let pending_delete = create_rw_signal(None::<String>);
    let reload = create_trigger();
    let sequence = RequestSequence::new();

    let query = create_memo(move |_| state.with(|s| s.query(searchable)));

    {
        let repo = repo.clone();
        let sequence = sequence.clone();
        create_effect(move |_| {
            reload.track();
            let query = query.get();
            let ticket = sequence.issue();
            state.update(|s| s.begin_fetch());
            let repo = repo.clone();
            let sequence = sequence.clone();
            spawn_local(async move {
                load_page(&repo, variant, query, ticket, &sequence, state).await;
            });
        });
    }

    on_cleanup(move || sequence.invalidate());

    let delete_action = {
        let repo = repo.clone();
        create_action(move |id: &String| {
            let repo = repo.clone();
            let id = id.clone();
            async move { repo.delete(kind, &id).await }
        })
    };

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            if after_delete(&result, kind, notifications) {
                reload.notify();
            }
        }
    });

    ListViewModel {
        config: store_value(config),
        state,
        pending_delete,
        delete_action,
        reload,
    }
}
