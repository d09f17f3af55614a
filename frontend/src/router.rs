use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RouteGuard, toast::ToastHost},
    pages::{
        entity_form::{EntityFormPage, FormRoute},
        login::LoginPage,
        shell::HomePage,
    },
    state::{
        auth::AuthProvider, notifications::provide_notifications, session::SessionStore,
        shell::provide_shell_state,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/admin/add-admin",
    "/admin/update-admin",
    "/admin/update-profile",
    "/employee/add-employee",
    "/employee/update-employee",
    "/leave/add-leave",
    "/leave/update-leave",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let session = SessionStore::new();
    provide_context(session.clone());
    provide_context(ApiClient::with_session(session));
    provide_notifications();
    provide_shell_state();

    view! {
        <Title text="StaffDesk"/>
        <AuthProvider>
            <Router>
                <RouteGuard>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/admin/add-admin" view=AddAdminPage/>
                        <Route path="/admin/update-admin" view=UpdateAdminPage/>
                        <Route path="/admin/update-profile" view=UpdateProfilePage/>
                        <Route path="/employee/add-employee" view=AddEmployeePage/>
                        <Route path="/employee/update-employee" view=UpdateEmployeePage/>
                        <Route path="/leave/add-leave" view=AddLeavePage/>
                        <Route path="/leave/update-leave" view=UpdateLeavePage/>
                    </Routes>
                </RouteGuard>
            </Router>
            <ToastHost/>
        </AuthProvider>
    }
}

#[component]
fn AddAdminPage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::AddAdmin/> }
}

#[component]
fn UpdateAdminPage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::UpdateAdmin/> }
}

#[component]
fn UpdateProfilePage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::UpdateProfile/> }
}

#[component]
fn AddEmployeePage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::AddEmployee/> }
}

#[component]
fn UpdateEmployeePage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::UpdateEmployee/> }
}

#[component]
fn AddLeavePage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::AddLeave/> }
}

#[component]
fn UpdateLeavePage() -> impl IntoView {
    view! { <EntityFormPage route=FormRoute::UpdateLeave/> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::guard::DEFAULT_GUARDED_PATHS;
    use std::collections::HashSet;

    #[test]
    fn every_form_route_is_mounted() {
        for route in FormRoute::ALL {
            assert!(
                ROUTE_PATHS.contains(&route.path()),
                "form route missing from ROUTE_PATHS: {}",
                route.path()
            );
        }
    }

    #[test]
    fn guarded_paths_are_known_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in DEFAULT_GUARDED_PATHS {
            assert!(all.contains(path), "guarded path is not routed: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
