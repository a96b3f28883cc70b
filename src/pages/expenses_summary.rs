use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{
    bind_input, icon_chevron_left, icon_chevron_right, load_notice, page_shell, INPUT_CLASS,
};
use crate::format::{format_amount, format_period};
use crate::listing::{arrange_summary, page_count, page_slice, SortOrder, SummaryFilter, SummarySort};
use crate::load_state::LoadState;
use crate::models::{DetailQuery, SummaryEntry};
use crate::routes::Route;
use crate::session::use_session;

#[function_component(ExpensesSummaryPage)]
pub fn expenses_summary_page() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_string));

    let summary = use_state(LoadState::<Vec<SummaryEntry>>::default);
    let category_filter = use_state(|| "".to_string());
    let year_filter = use_state(|| "".to_string());
    let sort_key = use_state(SummarySort::default);
    let sort_order = use_state(SortOrder::default);
    let page = use_state(|| 0usize);
    let per_page = services.config.page_size;

    {
        let summary = summary.clone();
        let client = services.client.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |token: &Option<String>| {
                if let Some(token) = token.clone() {
                    summary.set(LoadState::Loading);
                    spawn_local(async move {
                        let result = client.expenses_summary(&token).await;
                        if let Err(err) = &result {
                            expire_on_unauthorized(session.as_ref(), err);
                        }
                        summary.set(result.into());
                    });
                }
                || ()
            },
            token,
        );
    }

    let filter = SummaryFilter {
        category: (*category_filter).clone(),
        year: year_filter.trim().parse().ok(),
    };
    let shown = summary
        .loaded()
        .map(|entries| arrange_summary(entries, &filter, *sort_key, *sort_order))
        .unwrap_or_default();
    let pages = page_count(shown.len(), per_page);
    let current_page = (*page).min(pages - 1);
    let rows = page_slice(&shown, current_page, per_page);

    let sort_by = |key: SummarySort| {
        let sort_key = sort_key.clone();
        let sort_order = sort_order.clone();
        let page = page.clone();
        Callback::from(move |_| {
            if *sort_key == key {
                sort_order.set(sort_order.toggled());
            } else {
                sort_key.set(key);
                sort_order.set(SortOrder::Ascending);
            }
            page.set(0);
        })
    };
    let header = |label: &'static str, key: SummarySort| {
        let arrow = if *sort_key == key { sort_order.arrow() } else { "" };
        html! {
            <th class="px-6 py-3 text-sm font-semibold text-secondary-foreground cursor-pointer select-none" onclick={sort_by(key)}>
                { format!("{label} {arrow}") }
            </th>
        }
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_| page.set(current_page.saturating_sub(1)))
    };
    let on_next = {
        let page = page.clone();
        Callback::from(move |_| page.set((current_page + 1).min(pages - 1)))
    };
    let reset_page = {
        let page = page.clone();
        Callback::from(move |_: InputEvent| page.set(0))
    };

    let open_detail = |entry: &SummaryEntry| {
        let navigator = navigator.clone();
        let query = DetailQuery {
            year: entry.year,
            month: entry.month,
            category_id: entry.category.id,
        };
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                if let Err(err) = navigator.push_with_query(&Route::ExpensesDetail, &query) {
                    log::warn!("could not open the expense detail: {err}");
                }
            }
        })
    };

    html! {
        { page_shell(
            "Expenses Summary",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4" oninput={reset_page}>
                        <input type="text" placeholder="Filter by category" class={INPUT_CLASS}
                            value={(*category_filter).clone()} oninput={bind_input(&category_filter)} />
                        <input type="number" placeholder="Year" class={INPUT_CLASS}
                            value={(*year_filter).clone()} oninput={bind_input(&year_filter)} />
                    </div>
                    { load_notice(&summary, "Loading summary...") }
                    if summary.loaded().is_some() {
                        <div class="bg-card rounded-lg border border-border overflow-hidden">
                            <table class="w-full text-left border-collapse">
                                <thead class="bg-secondary border-b border-border">
                                    <tr>
                                        { header("Period", SummarySort::Period) }
                                        { header("Category", SummarySort::Category) }
                                        { header("Amount", SummarySort::Amount) }
                                        <th class="px-6 py-3"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    if rows.is_empty() {
                                        <tr><td colspan="4" class="px-6 py-6 text-center text-muted-foreground">{"No expenses to show."}</td></tr>
                                    }
                                    { for rows.iter().map(|entry| html! {
                                        <tr class="text-sm hover:bg-muted/30 transition-colors">
                                            <td class="px-6 py-3 text-muted-foreground">{ format_period(entry.year, entry.month) }</td>
                                            <td class="px-6 py-3 text-foreground">{ entry.category.name.clone() }</td>
                                            <td class="px-6 py-3 font-semibold text-foreground">{ format_amount(entry.amount) }</td>
                                            <td class="px-6 py-3 text-right">
                                                <button class="text-primary font-semibold" onclick={open_detail(entry)}>{"Detail"}</button>
                                            </td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                            <div class="flex items-center justify-between px-6 py-3 border-t border-border text-sm">
                                <button onclick={on_prev} disabled={current_page == 0} class="p-2 disabled:opacity-40">{ icon_chevron_left() }</button>
                                <span>{ format!("Page {} of {} ({} items)", current_page + 1, pages, shown.len()) }</span>
                                <button onclick={on_next} disabled={current_page + 1 >= pages} class="p-2 disabled:opacity-40">{ icon_chevron_right() }</button>
                            </div>
                        </div>
                    }
                </>
            }
        ) }
    }
}
