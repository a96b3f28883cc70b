use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{
    bind_input, error_text, load_notice, page_shell, CARD, INPUT_CLASS, PRIMARY_BUTTON,
    SECONDARY_BUTTON,
};
use crate::format::{format_amount, format_period};
use crate::forms::GoalInput;
use crate::load_state::LoadState;
use crate::models::Goal;
use crate::session::use_session;

#[function_component(SavingGoalsPage)]
pub fn saving_goals_page() -> Html {
    let services = use_services();
    let session = use_session();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_string));

    let goals = use_state(LoadState::<Vec<Goal>>::default);
    // Id of the goal being edited; `None` means the form adds a new one.
    let editing = use_state(|| None::<i64>);
    let month = use_state(|| "".to_string());
    let year = use_state(|| "".to_string());
    let amount = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let goals = goals.clone();
        let client = services.client.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |token: &Option<String>| {
                if let Some(token) = token.clone() {
                    goals.set(LoadState::Loading);
                    spawn_local(async move {
                        let result = client.list_goals(&token).await;
                        if let Err(err) = &result {
                            expire_on_unauthorized(session.as_ref(), err);
                        }
                        goals.set(result.into());
                    });
                }
                || ()
            },
            token,
        );
    }

    let reset_form = {
        let editing = editing.clone();
        let month = month.clone();
        let year = year.clone();
        let amount = amount.clone();
        let form_error = form_error.clone();
        move || {
            editing.set(None);
            month.set("".to_string());
            year.set("".to_string());
            amount.set("".to_string());
            form_error.set(None);
        }
    };

    let on_submit = {
        let goals = goals.clone();
        let editing = editing.clone();
        let month = month.clone();
        let year = year.clone();
        let amount = amount.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = GoalInput {
                month: (*month).clone(),
                year: (*year).clone(),
                amount: (*amount).clone(),
            };
            let draft = match input.validate() {
                Ok(draft) => draft,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            saving.set(true);
            let client = services.client.clone();
            let goals = goals.clone();
            let editing_id = *editing;
            let form_error = form_error.clone();
            let saving = saving.clone();
            let reset_form = reset_form.clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => {
                        let goal = Goal {
                            id,
                            month: draft.month,
                            year: draft.year,
                            amount: draft.amount,
                        };
                        client.update_goal(&token, &goal).await
                    }
                    None => client.add_goal(&token, &draft).await,
                };
                match result {
                    Ok(saved) => {
                        let mut next = goals.loaded().cloned().unwrap_or_default();
                        match next.iter_mut().find(|goal| goal.id == saved.id) {
                            Some(slot) => *slot = saved,
                            None => next.push(saved),
                        }
                        goals.set(LoadState::Loaded(next));
                        reset_form();
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let start_edit = |goal: &Goal| {
        let editing = editing.clone();
        let month = month.clone();
        let year = year.clone();
        let amount = amount.clone();
        let goal = goal.clone();
        Callback::from(move |_| {
            editing.set(Some(goal.id));
            month.set(goal.month.to_string());
            year.set(goal.year.to_string());
            amount.set(goal.amount.to_string());
        })
    };

    let on_cancel = Callback::from(move |_| reset_form());

    let list = match &*goals {
        LoadState::Loaded(list) if list.is_empty() => html! {
            <p class="text-muted-foreground">{"No saving goals yet."}</p>
        },
        LoadState::Loaded(list) => html! {
            <ul class="divide-y divide-border">
                { for list.iter().map(|goal| html! {
                    <li key={goal.id.to_string()} class="flex items-center justify-between py-3 text-sm">
                        <span>{ format!("Goal for {}: {}", format_period(goal.year, goal.month), format_amount(goal.amount)) }</span>
                        <button class="text-primary font-semibold" onclick={start_edit(goal)}>{"Edit"}</button>
                    </li>
                }) }
            </ul>
        },
        other => load_notice(other, "Loading goals..."),
    };

    html! {
        { page_shell(
            "Saving Goals",
            html! {},
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <form class={CARD} onsubmit={on_submit}>
                        <h3 class="text-lg font-bold mb-4">{ if editing.is_some() { "Edit Goal" } else { "Add New Goal" } }</h3>
                        <div class="space-y-3">
                            <input type="number" min="1" max="12" placeholder="Month" required={true} class={INPUT_CLASS}
                                value={(*month).clone()} oninput={bind_input(&month)} />
                            <input type="number" placeholder="Year" required={true} class={INPUT_CLASS}
                                value={(*year).clone()} oninput={bind_input(&year)} />
                            <input type="number" step="0.01" placeholder="Amount" required={true} class={INPUT_CLASS}
                                value={(*amount).clone()} oninput={bind_input(&amount)} />
                            <button type="submit" class={PRIMARY_BUTTON} disabled={*saving}>
                                { if editing.is_some() { "Update Goal" } else { "Add Goal" } }
                            </button>
                            if editing.is_some() {
                                <button type="button" class={SECONDARY_BUTTON} onclick={on_cancel}>{"Cancel"}</button>
                            }
                        </div>
                        if let Some(msg) = &*form_error {
                            { error_text(msg) }
                        }
                    </form>
                    <div class={CARD}>
                        <h3 class="text-lg font-bold mb-4">{"Existing Goals"}</h3>
                        { list }
                    </div>
                </div>
            }
        ) }
    }
}
