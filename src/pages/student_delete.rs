use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{alert, bind_input, page_shell, CARD, DANGER_BUTTON, INPUT_CLASS};
use crate::forms::parse_number;
use crate::models::StudentId;
use crate::session::use_session;

#[function_component(StudentDeletePage)]
pub fn student_delete_page() -> Html {
    let services = use_services();
    let session = use_session();
    let id = use_state(|| "".to_string());
    let deleting = use_state(|| false);

    let on_submit = {
        let id = id.clone();
        let deleting = deleting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let student_id = match parse_number::<StudentId>(&id, "Student ID") {
                Ok(value) => value,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            deleting.set(true);
            let client = services.client.clone();
            let id = id.clone();
            let deleting = deleting.clone();
            spawn_local(async move {
                match client.delete_student(&token, student_id).await {
                    Ok(()) => {
                        log::info!("deleted student {student_id}");
                        alert("Student deleted successfully");
                        id.set("".to_string());
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        alert(&err.to_string());
                    }
                }
                deleting.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Delete Student",
            html! {},
            html! {
                <form class={classes!(CARD, "max-w-lg", "space-y-3")} onsubmit={on_submit}>
                    <input type="number" min="1" placeholder="Student ID" required={true} class={INPUT_CLASS}
                        value={(*id).clone()} oninput={bind_input(&id)} />
                    <button type="submit" class={DANGER_BUTTON} disabled={*deleting}>
                        { if *deleting { "Deleting..." } else { "Delete Student" } }
                    </button>
                </form>
            }
        ) }
    }
}
