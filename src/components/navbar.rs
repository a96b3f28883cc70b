use yew::prelude::*;
use yew_router::prelude::*;

use super::shell::{icon_log_out, icon_wallet};
use crate::routes::Route;
use crate::session::{use_session, SessionAction};

const NAV_ITEMS: &[Route] = &[
    Route::Login,
    Route::Signup,
    Route::ExpensesSummary,
    Route::ExpensesDetail,
    Route::AddExpense,
    Route::DeleteExpense,
    Route::ExpenseCategories,
    Route::SavingGoals,
    Route::StudentForm,
    Route::Students,
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let signed_in = session.as_ref().is_some_and(|s| s.is_authenticated());

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(session) = &session {
                session.dispatch(SessionAction::Clear);
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <nav class="w-full bg-[#D8E1E8] border-b border-border shadow px-8 py-4 flex flex-wrap gap-4 items-center justify-center fixed top-0 left-0 z-50">
            <span class="flex items-center gap-2 text-2xl font-black tracking-tight text-[#173E63] mr-6">
                { icon_wallet() }
                {"Ahorrista"}
            </span>
            { for NAV_ITEMS.iter().map(|route| {
                let class_name = if current.as_ref() == Some(route) {
                    "px-3 py-1 rounded-xl text-[13px] font-semibold bg-[#173E63] text-white"
                } else {
                    "px-3 py-1 rounded-xl text-[13px] font-semibold text-[#173E63] hover:bg-white/60"
                };
                html! {
                    <Link<Route> to={route.clone()} classes={classes!(class_name)}>{ route.title() }</Link<Route>>
                }
            }) }
            if signed_in {
                <button onclick={on_logout} class="flex items-center gap-2 px-3 py-1 rounded-xl text-[13px] font-semibold text-[#173E63] hover:bg-white/60">
                    { icon_log_out() }
                    <span>{"Log Out"}</span>
                </button>
            }
        </nav>
    }
}
