use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{
    alert, bind_input, bind_textarea, page_shell, CARD, INPUT_CLASS, PRIMARY_BUTTON,
    SECONDARY_BUTTON,
};
use crate::forms::{parse_number, StudentInput};
use crate::models::{Student, StudentId};
use crate::session::use_session;

use super::students::student_card;

#[function_component(StudentLookupPage)]
pub fn student_lookup_page() -> Html {
    let services = use_services();
    let session = use_session();
    let id = use_state(|| "".to_string());
    let student = use_state(|| None::<Student>);
    let searching = use_state(|| false);

    let editing = use_state(|| false);
    let firstname = use_state(|| "".to_string());
    let lastname = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let phone = use_state(|| "".to_string());
    let age = use_state(|| "".to_string());
    let description = use_state(|| "".to_string());
    let fields = [
        firstname.clone(),
        lastname.clone(),
        email.clone(),
        phone.clone(),
        age.clone(),
        description.clone(),
    ];

    let on_submit = {
        let id = id.clone();
        let student = student.clone();
        let searching = searching.clone();
        let editing = editing.clone();
        let session = session.clone();
        let client = services.client.clone();
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

            searching.set(true);
            editing.set(false);
            let client = client.clone();
            let student = student.clone();
            let searching = searching.clone();
            spawn_local(async move {
                match client.get_student(&token, student_id).await {
                    Ok(found) => {
                        let id = found.id.or(Some(student_id));
                        student.set(Some(Student { id, ..found }));
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        student.set(None);
                        alert(&err.to_string());
                    }
                }
                searching.set(false);
            });
        })
    };

    let on_edit = {
        let student = student.clone();
        let editing = editing.clone();
        let fields = fields.clone();
        Callback::from(move |_| {
            let Some(found) = &*student else { return };
            let input = StudentInput::from(found);
            let values = [
                input.firstname,
                input.lastname,
                input.email,
                input.phone,
                input.age,
                input.description,
            ];
            for (field, value) in fields.iter().zip(values) {
                field.set(value);
            }
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_save = {
        let student = student.clone();
        let editing = editing.clone();
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(student_id) = (*student).as_ref().and_then(|found| found.id) else { return };
            let [firstname, lastname, email, phone, age, description] = &fields;
            let input = StudentInput {
                firstname: (**firstname).clone(),
                lastname: (**lastname).clone(),
                email: (**email).clone(),
                phone: (**phone).clone(),
                age: (**age).clone(),
                description: (**description).clone(),
                password: String::new(),
            };
            let profile = match input.validate_profile() {
                Ok(profile) => profile,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            let client = services.client.clone();
            let student = student.clone();
            let editing = editing.clone();
            spawn_local(async move {
                match client.update_student(&token, student_id, &profile).await {
                    Ok(updated) => {
                        log::info!("updated student {student_id}");
                        let id = updated.id.or(Some(student_id));
                        student.set(Some(Student { id, ..updated }));
                        editing.set(false);
                        alert("Student updated successfully");
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        alert(&err.to_string());
                    }
                }
            });
        })
    };

    let details = match (&*student, *editing) {
        (None, _) => html! {},
        (Some(found), false) => html! {
            <>
                { student_card(found) }
                if found.id.is_some() {
                    <button type="button" class={SECONDARY_BUTTON} onclick={on_edit}>{"Edit Student"}</button>
                }
            </>
        },
        (Some(_), true) => html! {
            <form class="space-y-3" onsubmit={on_save}>
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
                <button type="submit" class={PRIMARY_BUTTON}>{"Save Changes"}</button>
                <button type="button" class={SECONDARY_BUTTON} onclick={on_cancel}>{"Cancel"}</button>
            </form>
        },
    };

    html! {
        { page_shell(
            "Find Student",
            html! {},
            html! {
                <div class={classes!(CARD, "max-w-lg", "space-y-4")}>
                    <form class="space-y-3" onsubmit={on_submit}>
                        <input type="number" min="1" placeholder="Student ID" required={true} class={INPUT_CLASS}
                            value={(*id).clone()} oninput={bind_input(&id)} />
                        <button type="submit" class={PRIMARY_BUTTON} disabled={*searching}>
                            { if *searching { "Searching..." } else { "Find Student" } }
                        </button>
                    </form>
                    { details }
                </div>
            }
        ) }
    }
}
