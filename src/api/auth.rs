use serde_json::Value;

use super::{malformed, to_body, ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::Credentials;

const LOGIN_FAILED: &str = "Incorrect email or password";
const REGISTER_FAILED: &str = "Could not register the user";

impl<T: Transport> ApiClient<T> {
    /// Exchanges credentials for a bearer token.
    ///
    /// Only the field named by the configured token envelope is accepted. A
    /// successful status without that field is an error.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let request = self
            .request(Method::Post, &format!("/{}/login", self.auth_prefix))
            .json(to_body(credentials));
        let response = self.execute(request, LOGIN_FAILED).await?;
        let body: Value =
            serde_json::from_str(&response.body).map_err(|err| malformed(err, LOGIN_FAILED))?;
        match self.token_envelope.extract(&body) {
            Some(token) => Ok(token.to_string()),
            None => Err(malformed(
                format!("no token under the `{}` envelope", self.token_envelope),
                LOGIN_FAILED,
            )),
        }
    }

    pub async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        let request = self
            .request(
                Method::Post,
                &format!("/{}/{}", self.auth_prefix, self.register_path),
            )
            .json(to_body(credentials));
        self.fetch_nothing(request, REGISTER_FAILED).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::envelope::TokenEnvelope;
    use crate::api::test_client;
    use crate::api::transport::scripted::ScriptedTransport;
    use crate::error::ApiError;

    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            email: "ana@example.com".into(),
            passwd: "correct horse battery".into(),
        }
    }

    #[tokio::test]
    async fn login_posts_credentials_and_reads_data_token() {
        let client =
            test_client(ScriptedTransport::default().reply(200, r#"{"data": {"token": "jwt-1"}}"#));
        let token = client.login(&credentials()).await.unwrap();
        assert_eq!(token, "jwt-1");

        let sent = client.transport().last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/authentication/login");
        assert_eq!(sent.bearer, None);
        let body = sent.body.unwrap();
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["passwd"], "correct horse battery");
    }

    #[tokio::test]
    async fn login_ignores_tokens_outside_the_configured_envelope() {
        let client =
            test_client(ScriptedTransport::default().reply(200, r#"{"result": {"token": "jwt-2"}}"#));
        let err = client.login(&credentials()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Malformed {
                message: LOGIN_FAILED.into()
            }
        );
    }

    #[tokio::test]
    async fn login_with_result_envelope() {
        let mut client =
            test_client(ScriptedTransport::default().reply(200, r#"{"result": {"token": "jwt-2"}}"#));
        client.token_envelope = TokenEnvelope::Result;
        assert_eq!(client.login(&credentials()).await.unwrap(), "jwt-2");
    }

    #[tokio::test]
    async fn rejected_login_uses_fallback_without_message() {
        let client = test_client(ScriptedTransport::default().reply(401, ""));
        let err = client.login(&credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }

    #[tokio::test]
    async fn register_uses_configured_path() {
        let mut client = test_client(ScriptedTransport::default().reply(201, ""));
        client.auth_prefix = "auth".into();
        client.register_path = "signup".into();
        client.register(&credentials()).await.unwrap();
        assert_eq!(client.transport().last().url, "http://api.test/auth/signup");
    }

    #[tokio::test]
    async fn register_surfaces_server_message() {
        let client = test_client(
            ScriptedTransport::default().reply(400, r#"{"message": "Email already registered"}"#),
        );
        let err = client.register(&credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }
}
