//! Landing view for signed-out visitors.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::view::NavigationTarget;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="card card--narrow">
            <h2>"Welcome!"</h2>
            <p>"Please log in as a user or an admin to access the application."</p>
            <div class="card__actions">
                <A href=NavigationTarget::UserLogin.path() attr:class="btn">"User Login"</A>
                <A href=NavigationTarget::AdminLogin.path() attr:class="btn">"Admin Login"</A>
            </div>
        </div>
    }
}
