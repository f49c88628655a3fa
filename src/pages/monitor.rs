//! Monitor page — guarded shell for the live map view.
//!
//! The chart stack composes the actual map (tiles, vessel overlays) into
//! the container rendered here; this page owns the guard wiring and the
//! session-aware chrome around it. `/` and `/ecdis` both land here.

use leptos::prelude::*;

use crate::components::topbar::Topbar;
use crate::state::session::SessionState;

#[component]
pub fn MonitorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "hydrate")]
    crate::util::guard::install(session);

    view! {
        <Show
            when=move || session.get().is_authorized()
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <div class="monitor-page">
                <Topbar/>
                <div id="map" class="monitor-page__map"></div>
            </div>
        </Show>
    }
}
