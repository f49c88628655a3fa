//! Root application component with routing and session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, login::LoginPage, monitor::MonitorPage};
use crate::state::session::SessionState;

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

/// Root component: provides the shared session state and the route table.
///
/// `/` and `/ecdis` render the guarded monitor view; the admin console
/// lives under `/admin` with its own login variant.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/crowsnest-client.css"/>
        <Title text="Crowsnest"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MonitorPage/>
                <Route path=StaticSegment("ecdis") view=MonitorPage/>
                <Route path=StaticSegment("login") view=|| view! { <LoginPage/> }/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=|| view! { <LoginPage admin=true/> }
                />
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
