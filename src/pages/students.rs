use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{
    alert, icon_chevron_left, icon_chevron_right, page_shell, CARD, PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::listing::Cursor;
use crate::models::Student;
use crate::routes::Route;
use crate::session::use_session;

pub fn student_card(student: &Student) -> Html {
    html! {
        <div class="space-y-1 text-left text-gray-700">
            <p><strong>{"Name: "}</strong>{ student.full_name() }</p>
            <p><strong>{"Email: "}</strong>{ student.email.clone() }</p>
            <p><strong>{"Age: "}</strong>{ student.age }</p>
            <p><strong>{"Phone: "}</strong>{ student.phone.clone() }</p>
            <p><strong>{"Description: "}</strong>{ student.description.clone() }</p>
        </div>
    }
}

#[function_component(StudentsPage)]
pub fn students_page() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();
    let students = use_state(Vec::<Student>::new);
    let cursor = use_state(Cursor::default);
    let loading = use_state(|| false);

    let on_fetch = {
        let students = students.clone();
        let cursor = cursor.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            loading.set(true);
            let client = services.client.clone();
            let students = students.clone();
            let cursor = cursor.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match client.list_students(&token).await {
                    Ok(list) => {
                        cursor.set(Cursor::new(list.len()));
                        students.set(list);
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        alert(&err.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.prev()))
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.next()))
    };
    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let current = if cursor.is_empty() {
        None
    } else {
        students.get(cursor.index())
    };

    html! {
        { page_shell(
            "Students",
            html! {},
            html! {
                <div class={classes!(CARD, "max-w-lg", "space-y-4")}>
                    <form onsubmit={on_fetch}>
                        <button type="submit" class={PRIMARY_BUTTON} disabled={*loading}>
                            { if *loading { "Loading..." } else { "Get Students" } }
                        </button>
                    </form>
                    if let Some(student) = current {
                        <h3 class="text-xl font-semibold">
                            { format!("Student {} of {}", cursor.index() + 1, cursor.len()) }
                        </h3>
                        { student_card(student) }
                        <div class="flex justify-between">
                            <button onclick={on_prev} disabled={cursor.at_start()} class="p-2 disabled:opacity-40">{ icon_chevron_left() }</button>
                            <button onclick={on_next} disabled={cursor.at_end()} class="p-2 disabled:opacity-40">{ icon_chevron_right() }</button>
                        </div>
                        <button type="button" class={SECONDARY_BUTTON} onclick={go_to(Route::StudentLookup)}>{"Find Student by ID"}</button>
                        <button type="button" class={SECONDARY_BUTTON} onclick={go_to(Route::StudentDelete)}>{"Delete Student"}</button>
                    } else {
                        <p class="text-center text-gray-500">{"No students to show."}</p>
                    }
                </div>
            }
        ) }
    }
}
