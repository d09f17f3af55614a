use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};
use std::rc::Rc;

/// Router navigation that degrades to a logged no-op outside a `<Router>`.
#[derive(Clone)]
pub struct Navigator(Option<Rc<dyn Fn(&str)>>);

impl Navigator {
    pub fn detached() -> Self {
        Self(None)
    }

    pub fn from_fn(navigate: impl Fn(&str) + 'static) -> Self {
        Self(Some(Rc::new(navigate)))
    }

    pub fn go(&self, path: &str) {
        match &self.0 {
            Some(navigate) => navigate(path),
            None => log::warn!("No router mounted; dropping navigation to {}", path),
        }
    }
}

pub fn use_navigator() -> Navigator {
    if use_context::<RouterContext>().is_none() {
        return Navigator::detached();
    }
    let navigate = use_navigate();
    Navigator::from_fn(move |path| navigate(path, NavigateOptions::default()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn navigator_without_router_is_detached() {
        with_runtime(|| {
            let navigator = use_navigator();
            assert!(navigator.0.is_none());
            navigator.go("/login");
        });
    }

    #[test]
    fn navigator_from_fn_forwards_paths() {
        let visited = Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
        let sink = visited.clone();
        let navigator = Navigator::from_fn(move |path| sink.borrow_mut().push(path.to_string()));
        navigator.go("/");
        navigator.go("/login");
        assert_eq!(*visited.borrow(), vec!["/", "/login"]);
    }
}
