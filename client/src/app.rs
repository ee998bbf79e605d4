//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::net::platform::HttpIdentityPlatform;
use crate::pages::content::Content;
use crate::state::admin::AdminConsole;
use crate::state::session::SessionState;
use crate::state::store::SessionStore;
use crate::state::view::NavigationTarget;

/// Collaborators shared with every page through Leptos context.
///
/// `state` mirrors the store's snapshots so views can react to them; all
/// writes still go through `session`.
#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub admin: Arc<AdminConsole>,
    pub platform: HttpIdentityPlatform,
    pub state: RwSignal<SessionState>,
}

impl AppContext {
    /// Wire the HTTP backend and identity platform for `config`.
    #[must_use]
    pub fn connect(config: &ClientConfig) -> Self {
        let backend = Arc::new(HttpBackend::new(config.api_base.clone()));
        let session = SessionStore::new(backend.clone());
        let admin = Arc::new(AdminConsole::new(Arc::clone(&session), backend));
        let platform = HttpIdentityPlatform::new(config.session_url());
        let state = RwSignal::new(session.snapshot());
        Self { session, admin, platform, state }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store, mirrors it into a signal, subscribes it to the
/// identity platform and releases both subscriptions on unmount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::connect(&ClientConfig::from_build_env());
    let state = ctx.state;
    let mirror = ctx.session.subscribe(move |snapshot: &SessionState| state.set(snapshot.clone()));
    ctx.session.initialize(&ctx.platform);

    let session = Arc::clone(&ctx.session);
    on_cleanup(move || {
        mirror.release();
        session.teardown();
    });

    provide_context(ctx);

    view! {
        <Stylesheet id="leptos" href="/pkg/adminboard.css"/>
        <Title text="Adminboard"/>

        <Router>
            <Header/>
            <main class="content">
                <Routes fallback=|| view! { <Content target=NavigationTarget::Home/> }>
                    <Route path=StaticSegment("") view=|| view! { <Content target=NavigationTarget::Home/> }/>
                    <Route
                        path=(StaticSegment("login"), StaticSegment("user"))
                        view=|| view! { <Content target=NavigationTarget::UserLogin/> }
                    />
                    <Route
                        path=(StaticSegment("login"), StaticSegment("admin"))
                        view=|| view! { <Content target=NavigationTarget::AdminLogin/> }
                    />
                    <Route path=StaticSegment("user") view=|| view! { <Content target=NavigationTarget::UserDashboard/> }/>
                    <Route path=StaticSegment("admin") view=|| view! { <Content target=NavigationTarget::AdminDashboard/> }/>
                </Routes>
            </main>
        </Router>
    }
}
