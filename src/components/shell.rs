use yew::prelude::*;

use crate::load_state::LoadState;

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 space-y-6 max-w-5xl mx-auto">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-[#173E63]">{ title }</h1>
                <div class="flex items-center gap-3">{ actions }</div>
            </div>
            { children }
        </div>
    }
}

/// Loading and error lines shared by the list pages.
pub fn load_notice<T>(state: &LoadState<T>, loading_text: &'static str) -> Html {
    match state {
        LoadState::Loading => html! {
            <div class="flex flex-col items-center mt-8 text-muted-foreground">
                <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-500 mb-4"></div>
                { loading_text }
            </div>
        },
        LoadState::Failed(message) => error_text(message),
        LoadState::Idle | LoadState::Loaded(_) => html! {},
    }
}

pub fn error_text(message: &str) -> Html {
    html! { <p class="text-sm text-red-500 mt-3">{ message.to_string() }</p> }
}

pub fn success_text(message: &str) -> Html {
    html! { <p class="text-sm text-green-600 mt-3">{ message.to_string() }</p> }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Copies the value of the `<input>` that fired the event into `state`.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

pub const INPUT_CLASS: &str =
    "w-full px-4 py-2 bg-[#f1f4f9] border border-input rounded-[10px] text-[#173E63] focus:outline-none focus:ring-2 focus:ring-primary";
pub const PRIMARY_BUTTON: &str =
    "w-full bg-[#173E63] text-white py-2 rounded-[10px] font-semibold hover:opacity-90 transition-opacity disabled:opacity-50";
pub const SECONDARY_BUTTON: &str =
    "w-full bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] font-semibold hover:opacity-90 transition-opacity disabled:opacity-50";
pub const DANGER_BUTTON: &str =
    "w-full bg-red-500 text-white py-2 rounded-[10px] font-semibold hover:bg-red-600 transition-colors disabled:opacity-50";
pub const CARD: &str = "bg-card rounded-2xl shadow-md border border-border p-6";

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_chevron_left() -> Html {
    icon_base("M15 18l-6-6 6-6")
}
pub fn icon_chevron_right() -> Html {
    icon_base("M9 18l6-6-6-6")
}
