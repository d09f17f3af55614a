#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::{
        auth::AuthState,
        session::{Session, SessionStore},
    };
    use crate::utils::navigation::Navigator;
    use leptos::*;
    use std::{cell::RefCell, rc::Rc};

    pub fn signed_in_session(token: &str, admin_id: &str) -> SessionStore {
        let session = SessionStore::in_memory();
        session
            .set(&Session {
                token: token.into(),
                admin_id: admin_id.into(),
            })
            .expect("in-memory session accepts writes");
        session
    }

    /// Provides the session store and a matching auth signal.
    pub fn provide_auth(
        session: SessionStore,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let pair = create_signal(AuthState::from_session(session.get()));
        provide_context(session);
        provide_context(pair);
        pair
    }

    /// A navigator that records every path it is sent to.
    pub fn recording_navigator() -> (Navigator, Rc<RefCell<Vec<String>>>) {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let navigator = Navigator::from_fn(move |path| sink.borrow_mut().push(path.to_string()));
        (navigator, visited)
    }
}
