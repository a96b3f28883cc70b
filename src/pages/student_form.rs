use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{
    alert, bind_input, bind_textarea, page_shell, CARD, INPUT_CLASS, PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::forms::StudentInput;
use crate::routes::Route;
use crate::session::use_session;

#[function_component(StudentFormPage)]
pub fn student_form_page() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    let firstname = use_state(|| "".to_string());
    let lastname = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let phone = use_state(|| "".to_string());
    let age = use_state(|| "".to_string());
    let description = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let saving = use_state(|| false);

    let on_submit = {
        let fields = [
            firstname.clone(),
            lastname.clone(),
            email.clone(),
            phone.clone(),
            age.clone(),
            description.clone(),
            password.clone(),
        ];
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let [firstname, lastname, email, phone, age, description, password] = &fields;
            let input = StudentInput {
                firstname: (**firstname).clone(),
                lastname: (**lastname).clone(),
                email: (**email).clone(),
                phone: (**phone).clone(),
                age: (**age).clone(),
                description: (**description).clone(),
                password: (**password).clone(),
            };
            let student = match input.validate() {
                Ok(student) => student,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            saving.set(true);
            let client = services.client.clone();
            let fields = fields.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match client.create_student(&token, &student).await {
                    Ok(created) => {
                        log::info!("created student {:?}", created.id);
                        alert("Student created successfully");
                        for field in &fields {
                            field.set("".to_string());
                        }
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        alert(&err.to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    let to_list = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Students);
        }
    });

    html! {
        { page_shell(
            "Create Student",
            html! {},
            html! {
                <form class={classes!(CARD, "space-y-4", "max-w-lg")} onsubmit={on_submit}>
                    <input type="text" placeholder="First name" required={true} class={INPUT_CLASS}
                        value={(*firstname).clone()} oninput={bind_input(&firstname)} />
                    <input type="text" placeholder="Last name" required={true} class={INPUT_CLASS}
                        value={(*lastname).clone()} oninput={bind_input(&lastname)} />
                    <input type="email" placeholder="Email" required={true} class={INPUT_CLASS}
                        value={(*email).clone()} oninput={bind_input(&email)} />
                    <input type="tel" placeholder="Phone" required={true} class={INPUT_CLASS}
                        value={(*phone).clone()} oninput={bind_input(&phone)} />
                    <input type="number" min="1" max="120" placeholder="Age" required={true} class={INPUT_CLASS}
                        value={(*age).clone()} oninput={bind_input(&age)} />
                    <textarea rows="3" placeholder="Description" required={true} class={INPUT_CLASS}
                        value={(*description).clone()} oninput={bind_textarea(&description)} />
                    <input type="password" placeholder="Password" required={true} class={INPUT_CLASS}
                        value={(*password).clone()} oninput={bind_input(&password)} />
                    <button type="submit" class={PRIMARY_BUTTON} disabled={*saving}>
                        { if *saving { "Saving..." } else { "Create Student" } }
                    </button>
                    <button type="button" class={SECONDARY_BUTTON} onclick={to_list}>{"View Students"}</button>
                </form>
            }
        ) }
    }
}
