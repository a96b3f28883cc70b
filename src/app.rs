use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiClient, GlooTransport};
use crate::components::{Navbar, RouteGate};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::pages::*;
use crate::routes::Route;
use crate::session::{default_store, Session, SessionHandle, TokenStore};

pub type Client = ApiClient<GlooTransport>;

/// Configuration and API client, shared with every page.
#[derive(Clone, PartialEq)]
pub struct Services {
    pub config: Rc<AppConfig>,
    pub client: Rc<Client>,
}

impl Services {
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        let client = ApiClient::new(&config, GlooTransport);
        Self {
            config: Rc::new(config),
            client: Rc::new(client),
        }
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().unwrap_or_else(Services::from_env)
}

/// A 401/403 means the stored token is no good any more; dropping it sends
/// the guard back to the login page.
pub fn expire_on_unauthorized<S>(store: Option<&S>, err: &ApiError)
where
    S: TokenStore + ?Sized,
{
    if err.is_unauthorized() {
        if let Some(store) = store {
            log::info!("server rejected the session token");
            store.clear();
        }
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::ExpensesSummary => html! { <ExpensesSummaryPage /> },
        Route::ExpensesDetail => html! { <ExpensesDetailPage /> },
        Route::AddExpense => html! { <AddExpensePage /> },
        Route::DeleteExpense => html! { <DeleteExpensePage /> },
        Route::ExpenseCategories => html! { <ExpenseCategoriesPage /> },
        Route::SavingGoals => html! { <SavingGoalsPage /> },
        Route::StudentForm => html! { <StudentFormPage /> },
        Route::Students => html! { <StudentsPage /> },
        Route::StudentLookup => html! { <StudentLookupPage /> },
        Route::StudentDelete => html! { <StudentDeletePage /> },
        Route::NotFound => html! { <h1 class="p-6 text-2xl font-bold">{"404 Not Found"}</h1> },
    };
    html! { <RouteGate route={route}>{ page }</RouteGate> }
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo(|_| Services::from_env(), ());
    let session = use_reducer(|| Session::restore(default_store()));

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <ContextProvider<SessionHandle> context={session}>
                <BrowserRouter>
                    <Navbar />
                    <main class="pt-24 min-h-screen bg-background">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<SessionHandle>>
        </ContextProvider<Services>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    fn signed_in() -> MemoryTokenStore {
        let store = MemoryTokenStore::default();
        store.save("jwt");
        store
    }

    #[test]
    fn unauthorized_clears_the_token() {
        let store = signed_in();
        let err = ApiError::Unauthorized {
            message: "Session expired".into(),
        };
        expire_on_unauthorized(Some(&store), &err);
        assert_eq!(store.read(), None);
    }

    #[test]
    fn other_failures_keep_the_token() {
        let store = signed_in();
        for err in [
            ApiError::Rejected {
                status: 500,
                message: "boom".into(),
            },
            ApiError::Network {
                message: "offline".into(),
            },
            ApiError::Malformed {
                message: "bad body".into(),
            },
        ] {
            expire_on_unauthorized(Some(&store), &err);
            assert_eq!(store.read().as_deref(), Some("jwt"));
        }
    }

    #[test]
    fn missing_store_is_ignored() {
        let err = ApiError::Unauthorized {
            message: "Session expired".into(),
        };
        expire_on_unauthorized(None::<&MemoryTokenStore>, &err);
    }
}
