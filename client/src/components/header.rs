//! Top navigation bar.
//!
//! Shows the signed-in email and a Logout action. Logging out only clears
//! the session; the routed view redirects itself once it resolves to home.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::state::session::SessionState;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;
    let busy = RwSignal::new(false);

    let email = move || state.with(|s| s.identity().map(|identity| identity.email.clone()));
    let signed_in = move || state.with(SessionState::is_signed_in);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let logout = ctx.session.logout();
        leptos::task::spawn_local(async move {
            logout.await;
            busy.set(false);
        });
    };

    view! {
        <nav class="header">
            <div class="header__logo">"Adminboard"</div>
            <ul class="header__links">
                <li>
                    <A href="/">"Home"</A>
                </li>
                <Show when=signed_in>
                    <li class="header__email">{email}</li>
                    <li>
                        <button class="btn btn--danger" on:click=on_logout.clone() disabled=move || busy.get()>
                            "Logout"
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
