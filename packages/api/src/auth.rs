//! Login, signup, logout and the persisted session.
//!
//! Authentication failures are values, not errors: the sign-in view decides
//! how to present them, so nothing here propagates an `Err` past the boundary
//! and nothing retries.

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, SessionRecord};

use crate::http::HttpClient;
use crate::models::Role;

#[derive(Debug, Clone, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: &'a str,
    name: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub email: String,
    pub role: String,
    pub message: Option<String>,
}

/// Outcome of a login or signup attempt.
///
/// A successful login may still carry a non-fatal advisory from the backend
/// (any `message` other than the plain "login successful" acknowledgement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { warning: Option<String> },
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }
}

/// Identity read back from device storage at process start. Trust-on-read:
/// the backend re-checks the token on every request anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredSession {
    pub email: String,
    pub role: Role,
}

pub struct SessionManager<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    /// Exactly one network call; on success the token/email/role returned by
    /// the backend (not the requested role) are persisted.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> AuthOutcome {
        let request = LoginRequest {
            email,
            password,
            role: role.as_str(),
        };
        match self.http.post::<_, LoginResponse>("/auth/login", &request).await {
            Ok(resp) => {
                SessionRecord {
                    token: resp.token,
                    email: Some(resp.email),
                    role: Some(resp.role),
                }
                .save(self.http.store());
                AuthOutcome::Success {
                    warning: advisory(resp.message),
                }
            }
            Err(err) => AuthOutcome::Failure {
                message: err
                    .backend_message()
                    .unwrap_or("Invalid credentials")
                    .to_string(),
            },
        }
    }

    /// Registers an account. Does not establish a session; callers log in
    /// afterwards.
    pub async fn signup(&self, email: &str, password: &str, role: Role, name: &str) -> AuthOutcome {
        let request = SignupRequest {
            email,
            password,
            role: role.as_str(),
            name,
        };
        match self
            .http
            .post::<_, serde_json::Value>("/auth/signup", &request)
            .await
        {
            Ok(_) => AuthOutcome::Success { warning: None },
            Err(err) => AuthOutcome::Failure {
                message: err
                    .backend_message()
                    .unwrap_or("Unable to create account")
                    .to_string(),
            },
        }
    }

    /// Best-effort backend notification, then unconditional local cleanup.
    /// A failed notification is logged and never surfaced.
    pub async fn logout(&self) {
        let record = SessionRecord::load(self.http.store());
        if record.token.is_some() {
            if let Err(err) = self.http.post_unit("/auth/logout").await {
                tracing::warn!("logout notification failed: {err}");
            }
        }
        SessionRecord::clear(self.http.store());
    }

    /// Trust-on-read initialization: restores the identity when both email
    /// and a recognizable role survived in storage.
    pub fn restore(&self) -> Option<RestoredSession> {
        let record = SessionRecord::load(self.http.store());
        let email = record.email?;
        let role = record.role?.parse::<Role>().ok()?;
        Some(RestoredSession { email, role })
    }
}

/// Backend-supplied advisory text, as distinct from the routine success
/// acknowledgement.
fn advisory(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.eq_ignore_ascii_case("login successful"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use store::session::{EMAIL_KEY, ROLE_KEY, TOKEN_KEY};
    use store::MemoryStore;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manager(server: &MockServer, kv: MemoryStore) -> SessionManager<MemoryStore> {
        SessionManager::new(HttpClient::new(ApiConfig::new(server.uri()), kv))
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "email": "a@x.com",
                "password": "secret",
                "role": "admin",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "T",
                "email": "a@x.com",
                "role": "admin",
                "message": "Login successful",
            })))
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        let session = manager(&server, kv.clone());
        let outcome = session.login("a@x.com", "secret", Role::Admin).await;

        assert_eq!(outcome, AuthOutcome::Success { warning: None });
        assert_eq!(kv.get(TOKEN_KEY).as_deref(), Some("T"));
        assert_eq!(kv.get(EMAIL_KEY).as_deref(), Some("a@x.com"));
        assert_eq!(kv.get(ROLE_KEY).as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn test_login_advisory_message_becomes_warning() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "T",
                "email": "a@x.com",
                "role": "member",
                "message": "Your membership expires in 3 days",
            })))
            .mount(&server)
            .await;

        let session = manager(&server, MemoryStore::new());
        let outcome = session.login("a@x.com", "secret", Role::Member).await;
        assert_eq!(
            outcome,
            AuthOutcome::Success {
                warning: Some("Your membership expires in 3 days".into())
            }
        );
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_unset() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        let session = manager(&server, kv.clone());

        // Repeated failures never establish an identity.
        for _ in 0..3 {
            let outcome = session.login("a@x.com", "wrong", Role::Admin).await;
            assert_eq!(
                outcome,
                AuthOutcome::Failure {
                    message: "Invalid credentials".into()
                }
            );
            assert!(kv.get(TOKEN_KEY).is_none());
            assert!(kv.get(EMAIL_KEY).is_none());
            assert!(kv.get(ROLE_KEY).is_none());
        }
        assert!(session.restore().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_without_body_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let session = manager(&server, MemoryStore::new());
        let outcome = session.login("a@x.com", "pw", Role::User).await;
        assert_eq!(
            outcome,
            AuthOutcome::Failure {
                message: "Invalid credentials".into()
            }
        );
    }

    #[tokio::test]
    async fn test_signup_does_not_establish_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "email": "new@x.com",
                "role": "user",
            })))
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        let session = manager(&server, kv.clone());
        let outcome = session.signup("new@x.com", "secret", Role::User, "New").await;

        assert!(outcome.is_success());
        assert!(kv.get(TOKEN_KEY).is_none());
        assert!(session.restore().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_backend_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        SessionRecord {
            token: Some("T".into()),
            email: Some("a@x.com".into()),
            role: Some("member".into()),
        }
        .save(&kv);

        let session = manager(&server, kv.clone());
        session.logout().await;

        assert!(kv.get(TOKEN_KEY).is_none());
        assert!(kv.get(EMAIL_KEY).is_none());
        assert!(kv.get(ROLE_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_sends_credentials_when_token_present() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .and(header("Authorization", "T"))
            .and(header("X-User-Email", "a@x.com"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        SessionRecord {
            token: Some("T".into()),
            email: Some("a@x.com".into()),
            role: Some("admin".into()),
        }
        .save(&kv);

        manager(&server, kv.clone()).logout().await;
        assert!(kv.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_without_token_skips_backend_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let kv = MemoryStore::new();
        kv.set(EMAIL_KEY, "a@x.com");
        kv.set(ROLE_KEY, "user");

        manager(&server, kv.clone()).logout().await;
        assert!(kv.get(EMAIL_KEY).is_none());
    }

    #[tokio::test]
    async fn test_restore_requires_email_role_and_known_role() {
        let server = MockServer::start().await;
        let kv = MemoryStore::new();
        let session = manager(&server, kv.clone());

        assert!(session.restore().is_none());

        kv.set(EMAIL_KEY, "a@x.com");
        assert!(session.restore().is_none());

        kv.set(ROLE_KEY, "superuser");
        assert!(session.restore().is_none());

        kv.set(ROLE_KEY, "admin");
        assert_eq!(
            session.restore(),
            Some(RestoredSession {
                email: "a@x.com".into(),
                role: Role::Admin,
            })
        );
    }

    #[test]
    fn test_advisory_filtering() {
        assert_eq!(advisory(None), None);
        assert_eq!(advisory(Some("Login successful".into())), None);
        assert_eq!(advisory(Some("login successful".into())), None);
        assert_eq!(
            advisory(Some("Password expires soon".into())).as_deref(),
            Some("Password expires soon")
        );
    }
}
