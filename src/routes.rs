use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/expenses_summary")]
    ExpensesSummary,
    #[at("/expenses_detail")]
    ExpensesDetail,
    #[at("/expenses")]
    AddExpense,
    #[at("/expenses/delete")]
    DeleteExpense,
    #[at("/expenses_category")]
    ExpenseCategories,
    #[at("/goals")]
    SavingGoals,
    #[at("/student")]
    StudentForm,
    #[at("/get_students")]
    Students,
    #[at("/student/id")]
    StudentLookup,
    #[at("/student/delete")]
    StudentDelete,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What a visitor needs before a route may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Public,
    Authenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

impl Route {
    pub fn capability(&self) -> Capability {
        match self {
            Route::Login | Route::Signup | Route::NotFound => Capability::Public,
            _ => Capability::Authenticated,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Sign up",
            Route::ExpensesSummary => "Summary",
            Route::ExpensesDetail => "Detail",
            Route::AddExpense => "Add Expense",
            Route::DeleteExpense => "Delete Expense",
            Route::ExpenseCategories => "Categories",
            Route::SavingGoals => "Saving Goals",
            Route::StudentForm => "New Student",
            Route::Students => "Students",
            Route::StudentLookup => "Find Student",
            Route::StudentDelete => "Delete Student",
            Route::NotFound => "Not Found",
        }
    }
}

/// Decides, before anything renders, whether `route` is reachable.
pub fn access(route: &Route, authenticated: bool) -> Access {
    match route.capability() {
        Capability::Authenticated if !authenticated => Access::Redirect(Route::Login),
        _ => Access::Granted,
    }
}
