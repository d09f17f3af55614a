use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub const TOKEN_KEY: &str = "token";
pub const ADMIN_ID_KEY: &str = "adminId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub admin_id: String,
}

/// Where the session values physically live.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct CookieBackend;

#[cfg(target_arch = "wasm32")]
impl SessionBackend for CookieBackend {
    fn read(&self, key: &str) -> Option<String> {
        crate::utils::cookies::read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        crate::utils::cookies::write(key, value)
    }

    fn remove(&self, key: &str) {
        crate::utils::cookies::remove(key)
    }
}

type Listener = Rc<dyn Fn(Option<&Session>)>;

/// Single source of truth for the bearer token. Every `set`/`clear` is
/// broadcast to subscribers.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Cookie-backed in the browser, in-memory on the host.
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::with_backend(Rc::new(CookieBackend))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Rc::new(MemoryBackend::default()))
    }

    pub fn with_backend(backend: Rc<dyn SessionBackend>) -> Self {
        Self {
            backend,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set(&self, session: &Session) -> Result<(), String> {
        self.backend.write(TOKEN_KEY, &session.token)?;
        if let Err(err) = self.backend.write(ADMIN_ID_KEY, &session.admin_id) {
            self.backend.remove(TOKEN_KEY);
            return Err(err);
        }
        log::info!("Session stored for admin {}", session.admin_id);
        self.notify(Some(session));
        Ok(())
    }

    pub fn get(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            admin_id: self.admin_id().unwrap_or_default(),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .read(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn admin_id(&self) -> Option<String> {
        self.backend
            .read(ADMIN_ID_KEY)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ADMIN_ID_KEY);
        log::info!("Session cleared");
        self.notify(None);
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self, session: Option<&Session>) {
        // Snapshot so a listener may subscribe without a re-entrant borrow.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(session);
        }
    }
}

pub fn use_session() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(store) => store,
        None => {
            let store = SessionStore::new();
            provide_context(store.clone());
            store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn session() -> Session {
        Session {
            token: "tok-123".into(),
            admin_id: "7".into(),
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SessionStore::in_memory();
        store.set(&session()).unwrap();
        assert_eq!(store.get(), Some(session()));
        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.admin_id().as_deref(), Some("7"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn clear_then_get_is_absent() {
        let store = SessionStore::in_memory();
        store.set(&session()).unwrap();
        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn blank_token_counts_as_absent() {
        let backend = Rc::new(MemoryBackend::default());
        backend.write(TOKEN_KEY, "   ").unwrap();
        backend.write(ADMIN_ID_KEY, "7").unwrap();
        let store = SessionStore::with_backend(backend);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clones_share_backend_and_listeners() {
        let store = SessionStore::in_memory();
        let handle = store.clone();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        handle.subscribe(move |_| counter.set(counter.get() + 1));

        store.set(&session()).unwrap();
        assert_eq!(handle.get(), Some(session()));
        store.clear();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn listeners_receive_current_session() {
        let store = SessionStore::in_memory();
        let last = Rc::new(RefCell::new(None::<Option<Session>>));
        let sink = last.clone();
        store.subscribe(move |current| *sink.borrow_mut() = Some(current.cloned()));

        store.set(&session()).unwrap();
        assert_eq!(*last.borrow(), Some(Some(session())));
        store.clear();
        assert_eq!(*last.borrow(), Some(None));
    }

    struct FailingAdminId {
        inner: MemoryBackend,
    }

    impl SessionBackend for FailingAdminId {
        fn read(&self, key: &str) -> Option<String> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), String> {
            if key == ADMIN_ID_KEY {
                return Err("quota".into());
            }
            self.inner.write(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    #[test]
    fn partial_write_does_not_leave_a_token_behind() {
        let store = SessionStore::with_backend(Rc::new(FailingAdminId {
            inner: MemoryBackend::default(),
        }));
        assert!(store.set(&session()).is_err());
        assert!(store.token().is_none());
    }
}
