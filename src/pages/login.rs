//! Login page: credential form, forced-detour banner, resume-on-success.
//!
//! Arriving here usually means a guard denied a navigation; the query
//! string carries where the user wanted to go (`from`), or for the legacy
//! reverse-proxy detour an absolute target (`url`) and an advisory
//! `message`. A still-valid session renders the signed-in card instead of
//! the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{Credentials, Session};
use crate::state::session::SessionState;
use crate::util::redirect::{self, ADMIN_ROUTE, LoginParams, Resume};

/// Where a successful login goes: the admin variant always resumes at the
/// console, the map variant follows the query parameters.
pub(crate) fn resume_action(admin: bool, params: &LoginParams) -> Resume {
    if admin {
        Resume::Path(ADMIN_ROUTE.to_owned())
    } else {
        redirect::resume_destination(params)
    }
}

/// Raw query string of the current document.
fn current_search() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().search().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Login page; `admin` switches to the console variant.
#[component]
pub fn LoginPage(#[prop(optional)] admin: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let banner = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(None::<Session>);
    let params = RwSignal::new(LoginParams::default());

    // Banner and resume parameters from the query string.
    Effect::new(move || {
        let parsed = redirect::parse_login_query(&current_search().unwrap_or_default());
        if let Some(message) = &parsed.message {
            banner.set(message.clone());
        }
        params.set(parsed);
    });

    // A still-valid session shows the signed-in card instead of the form.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(existing) = api::fetch_identity().await {
            signed_in.set(Some(existing));
        }
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = Credentials { username: username.get(), password: password.get() };
        if let Err(failure) = api::validate(&credentials) {
            banner.set(failure.detail().to_owned());
            return;
        }
        busy.set(true);
        banner.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::SessionEvent;

            let navigate = navigate_submit.clone();
            let resume = resume_action(admin, &params.get());
            leptos::task::spawn_local(async move {
                match api::submit_login(&credentials).await {
                    Ok(()) => {
                        session.update(|s| s.apply(SessionEvent::LoginSucceeded));
                        match resume {
                            Resume::Path(path) => navigate(&path, leptos_router::NavigateOptions::default()),
                            Resume::Absolute(url) => {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href(&url);
                                }
                            }
                        }
                    }
                    Err(failure) => {
                        banner.set(failure.detail().to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, credentials, session);
            busy.set(false);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::SessionEvent;

            leptos::task::spawn_local(async move {
                api::submit_logout().await;
                session.update(|s| s.apply(SessionEvent::LoggedOut));
                signed_in.set(None);
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Crowsnest"</h1>
                <Show when=move || admin>
                    <p class="login-card__subtitle">"User Administration"</p>
                </Show>
                <Show when=move || !banner.get().is_empty()>
                    <p class="login-message">{move || banner.get()}</p>
                </Show>
                <Show
                    when=move || signed_in.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="login-card__session">
                                <p class="login-card__caption">"Logged-in as:"</p>
                                <p class="login-card__username">
                                    {move || signed_in.get().map(|s| s.username).unwrap_or_default()}
                                </p>
                                <Show when=move || signed_in.get().is_some_and(|s| s.administrator)>
                                    <p class="login-card__caption">"User Administration"</p>
                                </Show>
                                <button class="login-button" on:click=on_logout>"Logout"</button>
                            </div>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_submit.clone()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Login"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
