//! Admin console page — privileged shell gated on the administrator flag.
//!
//! Entry runs the console gate's auth check; a denial redirects to the
//! admin login carrying why ("Insufficient privileges" for a verified
//! non-admin). The user-management tables themselves are composed by the
//! console framework into the container rendered here.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Identity;

#[component]
pub fn AdminPage() -> impl IntoView {
    let identity = RwSignal::new(None::<Identity>);
    let authorized = RwSignal::new(false);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        use crate::net::admin::{AdminGate, ConsoleAuthProvider};

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let gate = AdminGate;
            match gate.check_auth().await {
                Ok(()) => {
                    if let Ok(who) = gate.get_identity().await {
                        identity.set(Some(who));
                    }
                    authorized.set(true);
                }
                Err(failure) => {
                    let target = crate::util::redirect::admin_login_url(Some(failure.detail()));
                    navigate(&target, leptos_router::NavigateOptions::default());
                }
            }
        });
    }

    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::admin::{AdminGate, ConsoleAuthProvider};

            let navigate = navigate_logout.clone();
            leptos::task::spawn_local(async move {
                let destination = AdminGate.logout().await;
                navigate(destination, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate_logout;
    };

    view! {
        <Show
            when=move || authorized.get()
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <div class="admin-page">
                <header class="admin-page__header">
                    <h1>"User Administration"</h1>
                    <span class="admin-page__identity">
                        {move || identity.get().map(|i| i.full_name).unwrap_or_default()}
                    </span>
                    <button class="admin-page__logout" on:click=on_logout.clone()>"Logout"</button>
                </header>
                <div id="admin-console" class="admin-page__console"></div>
            </div>
        </Show>
    }
}
