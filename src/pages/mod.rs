mod add_expense;
mod categories;
mod delete_expense;
mod expenses_detail;
mod expenses_summary;
mod login;
mod saving_goals;
mod signup;
mod student_delete;
mod student_form;
mod student_lookup;
mod students;

pub use add_expense::AddExpensePage;
pub use categories::ExpenseCategoriesPage;
pub use delete_expense::DeleteExpensePage;
pub use expenses_detail::ExpensesDetailPage;
pub use expenses_summary::ExpensesSummaryPage;
pub use login::LoginPage;
pub use saving_goals::SavingGoalsPage;
pub use signup::SignupPage;
pub use student_delete::StudentDeletePage;
pub use student_form::StudentFormPage;
pub use student_lookup::StudentLookupPage;
pub use students::StudentsPage;
