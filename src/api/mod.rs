//! HTTP request layer.
//!
//! All admin API calls go through [`ApiClient::request`], which attaches the
//! bearer token, parses the response body, clears the session on 401 and
//! extracts the server-provided message from failed responses.

use reqwest::Method;
use serde_json::{Map, Value};

use crate::auth::{AuthSession, SessionStore};
use crate::errors::AdminError;
use crate::models::{CollectionKey, ContentEnvelope};

/// Fallback message when a failed response carries no usable body.
const GENERIC_FAILURE: &str = "Request failed";

/// Client for the admin content API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// The session this client attaches tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Shared transport, reused by the upload flow.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue one API request and return the parsed response body.
    ///
    /// The body is parsed as JSON with a raw-string fallback, mirroring the
    /// loose shapes the backend may answer with. A 401 clears the session
    /// before the error is raised, regardless of the call site.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, AdminError> {
        let url = self.url(path);
        let mut builder = self.http.request(method.clone(), &url);

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let payload = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("401 from {} {}; clearing admin session", method, path);
            self.session.clear();
        }

        if !status.is_success() {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_FAILURE)
                .to_string();
            return Err(AdminError::Api {
                status: Some(status.as_u16()),
                message,
            });
        }

        Ok(payload)
    }

    /// GET /api/admin/content - Fetch all collections in one round trip.
    pub async fn fetch_content(&self) -> Result<ContentEnvelope, AdminError> {
        let payload = self.request(Method::GET, "/api/admin/content", None).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// POST /api/admin/content/:collection - Create a record.
    pub async fn create_record(
        &self,
        collection: CollectionKey,
        data: &Map<String, Value>,
    ) -> Result<Value, AdminError> {
        let path = format!("/api/admin/content/{}", collection);
        let body = serde_json::json!({ "data": data });
        self.request(Method::POST, &path, Some(&body)).await
    }

    /// PUT /api/admin/content/:collection/:id - Update a record.
    pub async fn update_record(
        &self,
        collection: CollectionKey,
        id: &str,
        data: &Map<String, Value>,
    ) -> Result<Value, AdminError> {
        let path = format!("/api/admin/content/{}/{}", collection, id);
        let body = serde_json::json!({ "data": data });
        self.request(Method::PUT, &path, Some(&body)).await
    }

    /// DELETE /api/admin/content/:collection/:id - Delete a record.
    pub async fn delete_record(
        &self,
        collection: CollectionKey,
        id: &str,
    ) -> Result<(), AdminError> {
        let path = format!("/api/admin/content/{}/{}", collection, id);
        self.request(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// POST /api/auth/login - Authenticate and store the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AdminError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let payload = self
            .request(Method::POST, "/api/auth/login", Some(&body))
            .await?;
        let session: AuthSession = serde_json::from_value(payload)?;
        self.session.set(session.clone());
        Ok(session)
    }
}
