use super::{to_body, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::{NewStudent, Student, StudentId};

impl<T: Transport> ApiClient<T> {
    pub async fn create_student(&self, token: &str, student: &NewStudent) -> ApiResult<Student> {
        let request = self
            .request(Method::Post, "/student")
            .bearer(token)
            .json(to_body(student));
        self.fetch_item(request, "Could not create the student").await
    }

    pub async fn list_students(&self, token: &str) -> ApiResult<Vec<Student>> {
        let request = self.request(Method::Get, "/student").bearer(token);
        self.fetch_list(request, "Could not load students").await
    }

    pub async fn get_student(&self, token: &str, id: StudentId) -> ApiResult<Student> {
        let request = self
            .request(Method::Get, &format!("/student/{id}"))
            .bearer(token);
        self.fetch_item(request, "Student not found").await
    }

    pub async fn update_student(
        &self,
        token: &str,
        id: StudentId,
        student: &Student,
    ) -> ApiResult<Student> {
        let request = self
            .request(Method::Put, &format!("/student/{id}"))
            .bearer(token)
            .json(to_body(student));
        self.fetch_item(request, "Could not update the student").await
    }

    pub async fn delete_student(&self, token: &str, id: StudentId) -> ApiResult<()> {
        let request = self
            .request(Method::Delete, &format!("/student/{id}"))
            .bearer(token);
        self.fetch_nothing(request, "Could not delete the student").await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_client;
    use crate::api::transport::scripted::ScriptedTransport;

    use super::*;

    const ANA: &str = r#"{"id": 3, "firstname": "Ana", "lastname": "Quispe", "email": "ana@example.com", "phone": "999", "age": 20, "description": "TA"}"#;

    #[tokio::test]
    async fn get_student_by_id() {
        let client = test_client(ScriptedTransport::default().reply(200, ANA));
        let student = client.get_student("jwt", 3).await.unwrap();
        assert_eq!(student.full_name(), "Ana Quispe");
        assert_eq!(client.transport().last().url, "http://api.test/student/3");
    }

    #[tokio::test]
    async fn missing_student_reports_fallback() {
        let client = test_client(ScriptedTransport::default().reply(404, ""));
        let err = client.get_student("jwt", 99).await.unwrap_err();
        assert_eq!(err.to_string(), "Student not found");
    }

    #[tokio::test]
    async fn list_and_update() {
        let client = test_client(
            ScriptedTransport::default()
                .reply(200, &format!("[{ANA}]"))
                .reply(200, ANA),
        );
        let students = client.list_students("jwt").await.unwrap();
        assert_eq!(students.len(), 1);

        client.update_student("jwt", 3, &students[0]).await.unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.body.unwrap()["email"], "ana@example.com");
    }

    #[tokio::test]
    async fn delete_student_by_id() {
        let client = test_client(ScriptedTransport::default().reply(200, ""));
        client.delete_student("jwt", 3).await.unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.bearer.as_deref(), Some("jwt"));
    }
}
