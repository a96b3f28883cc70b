//! The bearer token for the current tab.

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::Credentials;

const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    fn save(&self, token: &str);
    /// Current token; an empty value reads as no token.
    fn read(&self) -> Option<String>;
    fn clear(&self);
}

/// `window.sessionStorage`, so the token dies with the tab.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("could not persist the session token");
                }
            }
            None => log::warn!("session storage unavailable"),
        }
    }

    fn read(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(TOKEN_KEY).is_err() {
                log::warn!("could not remove the session token");
            }
        }
    }
}

/// Token held for the lifetime of the page only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn read(&self) -> Option<String> {
        self.token.borrow().clone().filter(|token| !token.is_empty())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// sessionStorage when the browser offers it, memory otherwise.
pub fn default_store() -> Rc<dyn TokenStore> {
    if BrowserTokenStore::storage().is_some() {
        Rc::new(BrowserTokenStore)
    } else {
        log::warn!("session storage unavailable, the token will not survive a reload");
        Rc::new(MemoryTokenStore::default())
    }
}

/// Session state shared with every page through a Yew context.
#[derive(Clone)]
pub struct Session {
    token: Option<String>,
    backend: Rc<dyn TokenStore>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Session {
    pub fn restore(backend: Rc<dyn TokenStore>) -> Self {
        let token = backend.read();
        Self { token, backend }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub enum SessionAction {
    Save(String),
    Clear,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let token = match action {
            SessionAction::Save(token) if !token.is_empty() => {
                log::info!("session started");
                self.backend.save(&token);
                Some(token)
            }
            SessionAction::Save(_) | SessionAction::Clear => {
                if self.token.is_some() {
                    log::info!("session cleared");
                }
                self.backend.clear();
                None
            }
        };
        Rc::new(Session {
            token,
            backend: self.backend.clone(),
        })
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

impl TokenStore for SessionHandle {
    fn save(&self, token: &str) {
        self.dispatch(SessionAction::Save(token.to_string()));
    }

    fn read(&self) -> Option<String> {
        self.token().map(str::to_string)
    }

    fn clear(&self) {
        self.dispatch(SessionAction::Clear);
    }
}

#[hook]
pub fn use_session() -> Option<SessionHandle> {
    use_context::<SessionHandle>()
}

/// Logs in and keeps the token only if the whole exchange succeeded.
pub async fn sign_in<T, S>(client: &ApiClient<T>, store: &S, credentials: &Credentials) -> ApiResult<()>
where
    T: Transport,
    S: TokenStore + ?Sized,
{
    let token = client.login(credentials).await?;
    store.save(&token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_client;
    use crate::api::transport::scripted::ScriptedTransport;

    fn credentials() -> Credentials {
        Credentials {
            email: "ana@example.com".into(),
            passwd: "a long enough password".into(),
        }
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let store = MemoryTokenStore::default();
        for transport in [
            ScriptedTransport::default().reply(401, r#"{"message": "bad credentials"}"#),
            ScriptedTransport::default().reply(500, ""),
            ScriptedTransport::default().reply(200, r#"{"data": {}}"#),
            ScriptedTransport::default().reply(200, "not json"),
            ScriptedTransport::default().fail("offline"),
        ] {
            let client = test_client(transport);
            assert!(sign_in(&client, &store, &credentials()).await.is_err());
            assert_eq!(store.read(), None);
        }
    }

    #[tokio::test]
    async fn successful_login_stores_exactly_the_envelope_token() {
        let store = MemoryTokenStore::default();
        let client = test_client(ScriptedTransport::default().reply(
            200,
            r#"{"token": "decoy", "data": {"token": "real-token", "user": "ana"}}"#,
        ));
        sign_in(&client, &store, &credentials()).await.unwrap();
        assert_eq!(store.read().as_deref(), Some("real-token"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.read(), None);
        store.save("abc");
        assert_eq!(store.read().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.read(), None);
        store.save("");
        assert_eq!(store.read(), None);
    }

    #[test]
    fn session_writes_through_to_its_store() {
        let backend = Rc::new(MemoryTokenStore::default());
        let session = Rc::new(Session::restore(backend.clone()));
        assert!(!session.is_authenticated());

        let session = session.reduce(SessionAction::Save("t1".into()));
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(backend.read().as_deref(), Some("t1"));

        let session = session.reduce(SessionAction::Clear);
        assert!(!session.is_authenticated());
        assert_eq!(backend.read(), None);
    }

    #[test]
    fn session_restores_existing_token() {
        let backend = Rc::new(MemoryTokenStore::default());
        backend.save("kept");
        let session = Session::restore(backend);
        assert_eq!(session.token(), Some("kept"));
    }

    #[test]
    fn saving_an_empty_token_signs_out() {
        let backend = Rc::new(MemoryTokenStore::default());
        backend.save("old");
        let session = Rc::new(Session::restore(backend.clone()));
        let session = session.reduce(SessionAction::Save(String::new()));
        assert!(!session.is_authenticated());
        assert_eq!(backend.read(), None);
    }
}
