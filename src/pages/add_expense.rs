use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{
    bind_input, bind_select, error_text, page_shell, success_text, INPUT_CLASS, PRIMARY_BUTTON,
    SECONDARY_BUTTON,
};
use crate::forms::ExpenseInput;
use crate::load_state::LoadState;
use crate::models::Category;
use crate::session::use_session;

#[function_component(AddExpensePage)]
pub fn add_expense_page() -> Html {
    let services = use_services();
    let session = use_session();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_string));

    let categories = use_state(LoadState::<Vec<Category>>::default);
    let form_amount = use_state(|| "".to_string());
    let form_description = use_state(|| "".to_string());
    let form_category = use_state(|| "".to_string());
    let form_date = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let categories = categories.clone();
        let client = services.client.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |token: &Option<String>| {
                if let Some(token) = token.clone() {
                    categories.set(LoadState::Loading);
                    spawn_local(async move {
                        let result = client.expense_categories(&token).await;
                        if let Err(err) = &result {
                            expire_on_unauthorized(session.as_ref(), err);
                        }
                        categories.set(result.into());
                    });
                }
                || ()
            },
            token,
        );
    }

    let clear_form = {
        let form_amount = form_amount.clone();
        let form_description = form_description.clone();
        let form_category = form_category.clone();
        let form_date = form_date.clone();
        move || {
            form_amount.set("".to_string());
            form_description.set("".to_string());
            form_category.set("".to_string());
            form_date.set("".to_string());
        }
    };

    let on_submit = {
        let categories = categories.clone();
        let form_amount = form_amount.clone();
        let form_description = form_description.clone();
        let form_category = form_category.clone();
        let form_date = form_date.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let saving = saving.clone();
        let clear_form = clear_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form_success.set(None);
            let input = ExpenseInput {
                amount: (*form_amount).clone(),
                description: (*form_description).clone(),
                category_id: (*form_category).clone(),
                date: (*form_date).clone(),
            };
            let known = categories.loaded().cloned().unwrap_or_default();
            let expense = match input.validate(&known) {
                Ok(expense) => expense,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            form_error.set(None);
            saving.set(true);
            let client = services.client.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let saving = saving.clone();
            let clear_form = clear_form.clone();
            spawn_local(async move {
                match client.add_expense(&token, &expense).await {
                    Ok(()) => {
                        log::info!("expense added for {}-{:02}", expense.year, expense.month);
                        clear_form();
                        form_success.set(Some("Expense added.".to_string()));
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

    let on_clear = {
        let form_error = form_error.clone();
        Callback::from(move |_| {
            clear_form();
            form_error.set(None);
        })
    };

    let category_options = match &*categories {
        LoadState::Loaded(list) => list
            .iter()
            .map(|category| {
                html! {
                    <option key={category.id.to_string()} value={category.id.to_string()}
                        selected={*form_category == category.id.to_string()}>
                        { category.name.clone() }
                    </option>
                }
            })
            .collect::<Html>(),
        LoadState::Loading => html! { <option disabled={true}>{"Loading categories..."}</option> },
        LoadState::Failed(_) | LoadState::Idle => html! {},
    };

    html! {
        { page_shell(
            "Add New Expense",
            html! {},
            html! {
                <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                    <form onsubmit={on_submit}>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Amount"}</label>
                                <input type="number" step="0.01" placeholder="0.00" required={true} class={INPUT_CLASS}
                                    value={(*form_amount).clone()} oninput={bind_input(&form_amount)} />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Description"}</label>
                                <input type="text" placeholder="Expense description" class={INPUT_CLASS}
                                    value={(*form_description).clone()} oninput={bind_input(&form_description)} />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                                <select required={true} class={INPUT_CLASS} onchange={bind_select(&form_category)}>
                                    <option value="" selected={form_category.is_empty()}>{"Select Category"}</option>
                                    { category_options }
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                                <input type="date" required={true} class={INPUT_CLASS}
                                    value={(*form_date).clone()} oninput={bind_input(&form_date)} />
                            </div>
                        </div>
                        <div class="flex gap-3">
                            <button type="submit" class={PRIMARY_BUTTON} disabled={*saving}>
                                { if *saving { "Saving..." } else { "Add Expense" } }
                            </button>
                            <button type="button" class={SECONDARY_BUTTON} onclick={on_clear}>{"Clear"}</button>
                        </div>
                    </form>
                    if let Some(msg) = categories.error() {
                        { error_text(msg) }
                    }
                    if let Some(msg) = &*form_error {
                        { error_text(msg) }
                    }
                    if let Some(msg) = &*form_success {
                        { success_text(msg) }
                    }
                </div>
            }
        ) }
    }
}
