use super::{to_body, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Category, DetailQuery, Expense, ExpenseId, NewExpense, SummaryEntry};

impl<T: Transport> ApiClient<T> {
    pub async fn expenses_summary(&self, token: &str) -> ApiResult<Vec<SummaryEntry>> {
        let request = self.request(Method::Get, "/expenses_summary").bearer(token);
        self.fetch_list(request, "Could not load the expenses summary")
            .await
    }

    pub async fn expenses_detail(&self, token: &str, query: &DetailQuery) -> ApiResult<Vec<Expense>> {
        let request = self
            .request(Method::Get, "/expenses/detail")
            .bearer(token)
            .query("year", query.year)
            .query("month", query.month)
            .query("categoryId", query.category_id);
        self.fetch_list(request, "Could not load the expense detail")
            .await
    }

    pub async fn list_expenses(&self, token: &str) -> ApiResult<Vec<Expense>> {
        let request = self.request(Method::Get, "/expenses").bearer(token);
        self.fetch_list(request, "Error fetching expenses").await
    }

    pub async fn add_expense(&self, token: &str, expense: &NewExpense) -> ApiResult<()> {
        let request = self
            .request(Method::Post, "/expenses")
            .bearer(token)
            .json(to_body(expense));
        self.fetch_nothing(request, "Could not add the expense").await
    }

    pub async fn delete_expense(&self, token: &str, id: ExpenseId) -> ApiResult<()> {
        let request = self
            .request(Method::Delete, &format!("/expenses/{id}"))
            .bearer(token);
        self.fetch_nothing(request, "Error deleting expense").await
    }

    pub async fn expense_categories(&self, token: &str) -> ApiResult<Vec<Category>> {
        let request = self.request(Method::Get, "/expenses_category").bearer(token);
        self.fetch_list(request, "Could not load categories").await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::api::test_client;
    use crate::api::transport::scripted::ScriptedTransport;
    use crate::models::CategoryRef;

    use super::*;

    #[tokio::test]
    async fn summary_is_authenticated_and_parsed() {
        let client = test_client(ScriptedTransport::default().reply(
            200,
            r#"[{"id": 1, "expenseCategory": {"id": 2, "name": "Food"}, "year": 2024, "month": 6, "amount": 150.5}]"#,
        ));
        let summary = client.expenses_summary("jwt").await.unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].category.name, "Food");
        assert_eq!(summary[0].amount, 150.5);

        let sent = client.transport().last();
        assert_eq!(sent.url, "http://api.test/expenses_summary");
        assert_eq!(sent.bearer.as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn detail_sends_year_month_and_category() {
        let client = test_client(ScriptedTransport::default().reply(200, r#"{"data": []}"#));
        let query = DetailQuery {
            year: 2024,
            month: 6,
            category_id: 1,
        };
        assert!(client.expenses_detail("jwt", &query).await.unwrap().is_empty());

        let sent = client.transport().last();
        assert_eq!(sent.url, "http://api.test/expenses/detail");
        assert_eq!(
            sent.query,
            vec![
                ("year".to_string(), "2024".to_string()),
                ("month".to_string(), "6".to_string()),
                ("categoryId".to_string(), "1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn add_expense_posts_split_date() {
        let client = test_client(ScriptedTransport::default().reply(201, ""));
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let expense = NewExpense {
            amount: 20.0,
            description: "Lunch".into(),
            category: CategoryRef {
                id: 4,
                name: "Food".into(),
            },
            date,
            year: 2024,
            month: 3,
        };
        client.add_expense("jwt", &expense).await.unwrap();

        let body = client.transport().last().body.unwrap();
        assert_eq!(body["date"], "2024-03-15");
        assert_eq!(body["year"], 2024);
        assert_eq!(body["month"], 3);
        assert_eq!(body["category"]["id"], 4);
    }

    #[tokio::test]
    async fn delete_targets_the_expense_id() {
        let client = test_client(ScriptedTransport::default().reply(204, ""));
        client.delete_expense("jwt", 42).await.unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, "http://api.test/expenses/42");
    }

    #[tokio::test]
    async fn delete_failure_keeps_fallback() {
        let client = test_client(ScriptedTransport::default().reply(500, "oops"));
        let err = client.delete_expense("jwt", 42).await.unwrap_err();
        assert_eq!(err.to_string(), "Error deleting expense");
    }

    #[tokio::test]
    async fn list_failure_uses_fallback() {
        let client = test_client(ScriptedTransport::default().fail("offline"));
        let err = client.list_expenses("jwt").await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching expenses");
    }

    #[tokio::test]
    async fn categories_are_listed() {
        let client = test_client(
            ScriptedTransport::default()
                .reply(200, r#"[{"id": 1, "name": "Food"}, {"id": 2, "name": "Transport"}]"#),
        );
        let categories = client.expense_categories("jwt").await.unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Food", "Transport"]);
        assert_eq!(client.transport().last().url, "http://api.test/expenses_category");
    }
}
