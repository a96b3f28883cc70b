use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{expire_on_unauthorized, use_services};
use crate::components::shell::{load_notice, page_shell};
use crate::load_state::LoadState;
use crate::models::Category;
use crate::session::use_session;

#[function_component(ExpenseCategoriesPage)]
pub fn expense_categories_page() -> Html {
    let services = use_services();
    let session = use_session();
    let token = session.as_ref().and_then(|s| s.token().map(str::to_string));
    let categories = use_state(LoadState::<Vec<Category>>::default);

    {
        let categories = categories.clone();
        let client = services.client.clone();
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

    let body = match &*categories {
        LoadState::Loaded(list) if list.is_empty() => html! {
            <p class="text-muted-foreground">{"No categories found."}</p>
        },
        LoadState::Loaded(list) => html! {
            <ul class="grid grid-cols-2 md:grid-cols-3 gap-3">
                { for list.iter().map(|category| html! {
                    <li key={category.id.to_string()} class="bg-card border border-border rounded-xl px-4 py-3 flex justify-between">
                        <span class="font-semibold text-[#173E63]">{ category.name.clone() }</span>
                        <span class="text-xs text-muted-foreground">{ format!("#{}", category.id) }</span>
                    </li>
                }) }
            </ul>
        },
        other => load_notice(other, "Loading categories..."),
    };

    html! {
        { page_shell("Expense Categories", html! {}, body) }
    }
}
