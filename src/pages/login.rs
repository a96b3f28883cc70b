use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::use_services;
use crate::components::shell::{bind_input, error_text, INPUT_CLASS, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::forms::login_form;
use crate::routes::Route;
use crate::session::{sign_in, use_session};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = match login_form(&email, &password) {
                Ok(credentials) => credentials,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            let Some(session) = session.clone() else {
                error.set(Some("Session unavailable, reload the page.".to_string()));
                return;
            };

            loading.set(true);
            error.set(None);

            let client = services.client.clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match sign_in(&*client, &session, &credentials).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::ExpensesSummary);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let to_signup = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Signup);
        }
    });

    html! {
        <div class="flex items-center justify-center">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Welcome back"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Sign in to continue."}</p>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <input type="email" placeholder="Email" required={true} class={INPUT_CLASS}
                        value={(*email).clone()} oninput={bind_input(&email)} />
                    <input type="password" placeholder="Password" required={true} class={INPUT_CLASS}
                        value={(*password).clone()} oninput={bind_input(&password)} />
                    if let Some(msg) = &*error {
                        { error_text(msg) }
                    }
                    <button type="submit" class={PRIMARY_BUTTON} disabled={*loading}>
                        { if *loading { "Please wait..." } else { "Log in" } }
                    </button>
                    <button type="button" class={SECONDARY_BUTTON} onclick={to_signup}>
                        {"Create Account"}
                    </button>
                </form>
            </div>
        </div>
    }
}
