use crate::pages::entity_list::config::ListVariant;
use leptos::*;

/// Which list the shell shows. Lives above the router so it survives a
/// round trip through a form page.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub selected: RwSignal<ListVariant>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            selected: create_rw_signal(ListVariant::default()),
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_shell_state() -> ShellState {
    let state = ShellState::new();
    provide_context(state);
    state
}

pub fn use_shell_state() -> ShellState {
    use_context::<ShellState>().unwrap_or_else(provide_shell_state)
}
