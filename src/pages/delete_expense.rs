use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{alert, error_text, load_notice, page_shell, DANGER_BUTTON};
use crate::format::format_amount;
use crate::listing::remove_expense;
use crate::load_state::LoadState;
use crate::models::{Expense, ExpenseId};
use crate::session::use_session;

#[function_component(DeleteExpensePage)]
pub fn delete_expense_page() -> Html {
    let services = use_services();
    let session = use_session();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_string));

    let expenses = use_state(LoadState::<Vec<Expense>>::default);
    let selected = use_state(|| None::<ExpenseId>);
    let delete_error = use_state(|| None::<String>);
    let deleting = use_state(|| false);

    {
        let expenses = expenses.clone();
        let client = services.client.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |token: &Option<String>| {
                if let Some(token) = token.clone() {
                    expenses.set(LoadState::Loading);
                    spawn_local(async move {
                        let result = client.list_expenses(&token).await;
                        if let Err(err) = &result {
                            expire_on_unauthorized(session.as_ref(), err);
                        }
                        expenses.set(result.into());
                    });
                }
                || ()
            },
            token,
        );
    }

    let on_delete = {
        let expenses = expenses.clone();
        let selected = selected.clone();
        let delete_error = delete_error.clone();
        let deleting = deleting.clone();
        Callback::from(move |_| {
            let Some(id) = *selected else {
                alert("Please select an expense to delete.");
                return;
            };
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            deleting.set(true);
            delete_error.set(None);
            let client = services.client.clone();
            let expenses = expenses.clone();
            let selected = selected.clone();
            let delete_error = delete_error.clone();
            let deleting = deleting.clone();
            spawn_local(async move {
                match client.delete_expense(&token, id).await {
                    Ok(()) => {
                        if let Some(list) = expenses.loaded() {
                            let mut next = list.clone();
                            remove_expense(&mut next, id);
                            expenses.set(LoadState::Loaded(next));
                        }
                        selected.set(None);
                    }
                    Err(err) => {
                        expire_on_unauthorized(Some(&session), &err);
                        delete_error.set(Some(err.to_string()));
                    }
                }
                deleting.set(false);
            });
        })
    };

    let list = match &*expenses {
        LoadState::Loaded(list) if list.is_empty() => html! {
            <p class="text-muted-foreground">{"No expenses found."}</p>
        },
        LoadState::Loaded(list) => html! {
            <ul class="divide-y divide-border bg-card rounded-lg border border-border">
                { for list.iter().map(|expense| {
                    let is_selected = *selected == Some(expense.id);
                    let on_select = {
                        let selected = selected.clone();
                        let id = expense.id;
                        Callback::from(move |_| selected.set(Some(id)))
                    };
                    html! {
                        <li key={expense.id.to_string()} class="flex items-center justify-between px-6 py-3 text-sm">
                            <span>
                                { format!("{} - {} - {}", expense.description, format_amount(expense.amount), expense.period()) }
                            </span>
                            <button onclick={on_select}
                                class={if is_selected { "px-3 py-1 rounded-xl bg-[#173E63] text-white" } else { "px-3 py-1 rounded-xl bg-[#B2CBDE] text-[#173E63]" }}>
                                { if is_selected { "Selected" } else { "Select" } }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        },
        other => load_notice(other, "Loading expenses..."),
    };

    html! {
        { page_shell(
            "Delete Expense",
            html! {},
            html! {
                <>
                    { list }
                    if let Some(msg) = &*delete_error {
                        { error_text(msg) }
                    }
                    <div class="max-w-xs">
                        <button onclick={on_delete} class={DANGER_BUTTON} disabled={selected.is_none() || *deleting}>
                            { if *deleting { "Deleting..." } else { "Delete Selected Expense" } }
                        </button>
                    </div>
                </>
            }
        ) }
    }
}
