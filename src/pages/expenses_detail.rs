use chrono::{Datelike, Local};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{bind_input, error_text, load_notice, page_shell, INPUT_CLASS, PRIMARY_BUTTON};
use crate::error::FormError;
use crate::forms::{parse_month, parse_number};
use crate::format::format_amount;
use crate::load_state::LoadState;
use crate::models::{DetailQuery, Expense};
use crate::session::use_session;

fn current_month() -> DetailQuery {
    let today = Local::now().date_naive();
    DetailQuery {
        year: today.year(),
        month: today.month(),
        category_id: 1,
    }
}

fn read_query(year: &str, month: &str, category_id: &str) -> Result<DetailQuery, FormError> {
    Ok(DetailQuery {
        year: parse_number(year, "year")?,
        month: parse_month(month)?,
        category_id: parse_number(category_id, "category id")?,
    })
}

#[function_component(ExpensesDetailPage)]
pub fn expenses_detail_page() -> Html {
    let services = use_services();
    let session = use_session();
    let location = use_location();
    let initial = location
        .and_then(|location| location.query::<DetailQuery>().ok())
        .unwrap_or_else(current_month);

    let year = use_state(|| initial.year.to_string());
    let month = use_state(|| initial.month.to_string());
    let category_id = use_state(|| initial.category_id.to_string());
    let detail = use_state(LoadState::<Vec<Expense>>::default);
    let form_error = use_state(|| None::<String>);

    let on_search = {
        let year = year.clone();
        let month = month.clone();
        let category_id = category_id.clone();
        let detail = detail.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = match read_query(&year, &month, &category_id) {
                Ok(query) => query,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            form_error.set(None);
            let Some(session) = session.clone() else { return };
            let Some(token) = session.token().map(str::to_string) else { return };

            detail.set(LoadState::Loading);
            let client = services.client.clone();
            let detail = detail.clone();
            spawn_local(async move {
                let result = client.expenses_detail(&token, &query).await;
                if let Err(err) = &result {
                    expire_on_unauthorized(Some(&session), err);
                }
                detail.set(result.into());
            });
        })
    };

    html! {
        { page_shell(
            "Expense Detail by Category",
            html! {},
            html! {
                <>
                    <form class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end" onsubmit={on_search}>
                        <div class="space-y-1">
                            <label class="text-[12px] font-bold text-muted-foreground">{"Year"}</label>
                            <input type="number" class={INPUT_CLASS} value={(*year).clone()} oninput={bind_input(&year)} />
                        </div>
                        <div class="space-y-1">
                            <label class="text-[12px] font-bold text-muted-foreground">{"Month"}</label>
                            <input type="number" min="1" max="12" class={INPUT_CLASS} value={(*month).clone()} oninput={bind_input(&month)} />
                        </div>
                        <div class="space-y-1">
                            <label class="text-[12px] font-bold text-muted-foreground">{"Category ID"}</label>
                            <input type="number" class={INPUT_CLASS} value={(*category_id).clone()} oninput={bind_input(&category_id)} />
                        </div>
                        <button type="submit" class={PRIMARY_BUTTON} disabled={detail.is_loading()}>{"Search"}</button>
                    </form>
                    if let Some(msg) = &*form_error {
                        { error_text(msg) }
                    }
                    { load_notice(&detail, "Loading expenses...") }
                    if let Some(expenses) = detail.loaded() {
                        <div class="bg-card rounded-lg border border-border overflow-hidden">
                            <table class="w-full text-left border-collapse">
                                <thead class="bg-secondary border-b border-border">
                                    <tr>
                                        <th class="px-6 py-3 text-sm font-semibold">{"Date"}</th>
                                        <th class="px-6 py-3 text-sm font-semibold">{"Description"}</th>
                                        <th class="px-6 py-3 text-sm font-semibold">{"Category"}</th>
                                        <th class="px-6 py-3 text-sm font-semibold text-right">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    if expenses.is_empty() {
                                        <tr><td colspan="4" class="px-6 py-6 text-center text-muted-foreground">{"No expenses for this period."}</td></tr>
                                    }
                                    { for expenses.iter().map(|expense| html! {
                                        <tr class="text-sm">
                                            <td class="px-6 py-3 text-muted-foreground">{ expense.period() }</td>
                                            <td class="px-6 py-3">{ expense.description.clone() }</td>
                                            <td class="px-6 py-3">{ expense.category.name.clone() }</td>
                                            <td class="px-6 py-3 text-right font-semibold">{ format_amount(expense.amount) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                            <div class="px-6 py-3 border-t border-border text-sm font-semibold text-right">
                                { format!("Total: {}", format_amount(expenses.iter().map(|e| e.amount).sum())) }
                            </div>
                        </div>
                    }
                </>
            }
        ) }
    }
}
