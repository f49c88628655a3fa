//! Top bar shown above guarded pages: brand, session identity, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn Topbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let full_name = move || session.get().session.map(|s| s.full_name()).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::SessionEvent;
            use crate::util::redirect::LOGIN_ROUTE;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::submit_logout().await;
                session.update(|s| s.apply(SessionEvent::LoggedOut));
                navigate(LOGIN_ROUTE, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    view! {
        <header class="topbar">
            <span class="topbar__brand">"Crowsnest"</span>
            <span class="topbar__spacer"></span>
            <span class="topbar__user">{full_name}</span>
            <button class="topbar__logout" on:click=on_logout>"Logout"</button>
        </header>
    }
}
