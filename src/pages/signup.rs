use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::use_services;
use crate::components::shell::{alert, bind_input, INPUT_CLASS, PRIMARY_BUTTON};
use crate::forms::signup_form;
use crate::routes::Route;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let loading = use_state(|| false);
    let min_len = services.config.min_password_len;

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = match signup_form(&email, &password, min_len) {
                Ok(credentials) => credentials,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };

            loading.set(true);
            let client = services.client.clone();
            let email = email.clone();
            let password = password.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match client.register(&credentials).await {
                    Ok(()) => {
                        alert("User registered successfully");
                        email.set("".to_string());
                        password.set("".to_string());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => alert(&err.to_string()),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="flex items-center justify-center">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Create account"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Start managing your finances."}</p>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <input type="email" placeholder="Email" required={true} class={INPUT_CLASS}
                        value={(*email).clone()} oninput={bind_input(&email)} />
                    <input type="password" required={true} class={INPUT_CLASS}
                        placeholder={format!("Password (at least {} characters)", min_len)}
                        value={(*password).clone()} oninput={bind_input(&password)} />
                    <button type="submit" class={PRIMARY_BUTTON} disabled={*loading}>
                        { if *loading { "Please wait..." } else { "Sign up" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
