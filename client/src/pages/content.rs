//! Routed content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders `Content` with its own `NavigationTarget`. What is
//! actually shown is decided by `state::view::resolve` from the current
//! session, and the URL is replaced whenever the two disagree.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppContext;
use crate::components::loading::LoadingPanel;
use crate::net::types::LoginPortal;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::user_dashboard::UserDashboardPage;
use crate::state::view::{NavigationTarget, View, resolve};
use crate::util::auth::install_view_redirect;

#[component]
pub fn Content(target: NavigationTarget) -> impl IntoView {
    let state = expect_context::<AppContext>().state;
    install_view_redirect(state, target, use_navigate());

    let view = Memo::new(move |_| state.with(|s| resolve(s, target)));

    move || match view.get() {
        View::Loading => view! { <LoadingPanel/> }.into_any(),
        View::Home => view! { <HomePage/> }.into_any(),
        View::UserLogin => view! { <LoginPage portal=LoginPortal::User/> }.into_any(),
        View::AdminLogin => view! { <LoginPage portal=LoginPortal::Admin/> }.into_any(),
        View::UserDashboard => view! { <UserDashboardPage/> }.into_any(),
        View::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
    }
}
