use super::{to_body, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Goal, GoalDraft};

impl<T: Transport> ApiClient<T> {
    pub async fn list_goals(&self, token: &str) -> ApiResult<Vec<Goal>> {
        let request = self.request(Method::Get, "/goals").bearer(token);
        self.fetch_list(request, "Could not load saving goals").await
    }

    pub async fn add_goal(&self, token: &str, draft: &GoalDraft) -> ApiResult<Goal> {
        let request = self
            .request(Method::Post, "/goals")
            .bearer(token)
            .json(to_body(draft));
        self.fetch_item(request, "Could not add the goal").await
    }

    pub async fn update_goal(&self, token: &str, goal: &Goal) -> ApiResult<Goal> {
        let request = self
            .request(Method::Patch, &format!("/goals/{}", goal.id))
            .bearer(token)
            .json(to_body(goal));
        self.fetch_item(request, "Could not update the goal").await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_client;
    use crate::api::transport::scripted::ScriptedTransport;

    use super::*;

    #[tokio::test]
    async fn update_patches_by_id_and_returns_server_copy() {
        let client = test_client(
            ScriptedTransport::default()
                .reply(200, r#"{"id": 7, "month": 5, "year": 2024, "amount": 300.0}"#),
        );
        let goal = Goal {
            id: 7,
            month: 5,
            year: 2024,
            amount: 250.0,
        };
        let saved = client.update_goal("jwt", &goal).await.unwrap();
        assert_eq!(saved.amount, 300.0);

        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.url, "http://api.test/goals/7");
    }

    #[tokio::test]
    async fn add_goal_returns_created_goal() {
        let client = test_client(
            ScriptedTransport::default()
                .reply(201, r#"{"data": {"id": 1, "month": 1, "year": 2025, "amount": 100}}"#),
        );
        let draft = GoalDraft {
            month: 1,
            year: 2025,
            amount: 100.0,
        };
        let goal = client.add_goal("jwt", &draft).await.unwrap();
        assert_eq!(goal.id, 1);
        assert_eq!(client.transport().last().body.unwrap()["year"], 2025);
    }
}
