use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::admin_client::application::{ClientError, MembershipAccessor, RecordDeleter};
use crate::api::schemas::DeleteResponse;
use crate::auth::application::ports::incoming::use_cases::LoginResult;
use crate::group::application::ports::{
    incoming::use_cases::GroupListResult, outgoing::GroupResult,
};
use crate::membership::application::ports::{
    incoming::use_cases::{
        BulkAddResult, BulkRemoveResult, GroupMembersResult, MembershipStatus, UserGroupsResult,
    },
    outgoing::MembershipResult,
};
use crate::user::application::ports::incoming::use_cases::UserListResult;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct GroupPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct MembershipPayload {
    user_id: i32,
    group_id: i32,
}

#[derive(Serialize)]
struct BulkPayload<'a> {
    group_id: i32,
    user_ids: &'a [i32],
}

/// Client for the administration API.
///
/// Authenticated calls fail with `MissingCredential` until a token is set,
/// either through [`ApiClient::login`] or [`ApiClient::with_token`].
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchanges credentials for a bearer token and keeps it for later calls.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginResult, ClientError> {
        let request = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&Credentials { email, password });

        let result: LoginResult = send_json(request).await?;
        self.token = Some(result.access_token.clone());
        Ok(result)
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    pub async fn list_users(&self) -> Result<UserListResult, ClientError> {
        send_json(self.authorized(self.http.get(self.url("/api/users/")))?).await
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<DeleteResponse, ClientError> {
        let path = format!("/api/users/{}", user_id);
        send_json(self.authorized(self.http.delete(self.url(&path)))?).await
    }

    pub async fn list_groups(&self) -> Result<GroupListResult, ClientError> {
        send_json(self.authorized(self.http.get(self.url("/api/groups/")))?).await
    }

    pub async fn create_group(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<GroupResult, ClientError> {
        let payload = GroupPayload {
            name: Some(name),
            description,
        };
        let request = self.http.post(self.url("/api/groups/")).json(&payload);
        send_json(self.authorized(request)?).await
    }

    /// Fields left `None` are not sent and stay unchanged.
    pub async fn update_group(
        &self,
        group_id: i32,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<GroupResult, ClientError> {
        let path = format!("/api/groups/{}", group_id);
        let request = self
            .http
            .put(self.url(&path))
            .json(&GroupPayload { name, description });
        send_json(self.authorized(request)?).await
    }

    pub async fn delete_group(&self, group_id: i32) -> Result<DeleteResponse, ClientError> {
        let path = format!("/api/groups/{}", group_id);
        send_json(self.authorized(self.http.delete(self.url(&path)))?).await
    }

    pub async fn user_groups(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<UserGroupsResult, ClientError> {
        let path = format!(
            "/api/memberships/users/{}/groups?include_deleted={}",
            user_id, include_deleted
        );
        send_json(self.authorized(self.http.get(self.url(&path)))?).await
    }

    pub async fn is_member(&self, user_id: i32, group_id: i32) -> Result<bool, ClientError> {
        let path = format!(
            "/api/memberships/users/{}/groups/{}/membership",
            user_id, group_id
        );
        let status: MembershipStatus =
            send_json(self.authorized(self.http.get(self.url(&path)))?).await?;
        Ok(status.is_member)
    }

    /// Server-side bulk add; the server walks the list itself.
    pub async fn bulk_add(
        &self,
        group_id: i32,
        user_ids: &[i32],
    ) -> Result<BulkAddResult, ClientError> {
        let request = self
            .http
            .post(self.url("/api/memberships/bulk-add"))
            .json(&BulkPayload { group_id, user_ids });
        send_json(self.authorized(request)?).await
    }

    pub async fn bulk_remove(
        &self,
        group_id: i32,
        user_ids: &[i32],
    ) -> Result<BulkRemoveResult, ClientError> {
        let request = self
            .http
            .post(self.url("/api/memberships/bulk-remove"))
            .json(&BulkPayload { group_id, user_ids });
        send_json(self.authorized(request)?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::MissingCredential)?;
        Ok(request.bearer_auth(token))
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Transport(format!("request timed out: {e}"))
        } else if e.is_connect() {
            ClientError::Transport(format!("connection failed: {e}"))
        } else {
            ClientError::Transport(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        debug!(status = status.as_u16(), "Request rejected");
        return Err(ClientError::from_status(status.as_u16(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Transport(format!("invalid response body: {e}")))
}

#[async_trait]
impl MembershipAccessor for ApiClient {
    fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    async fn list(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<GroupMembersResult, ClientError> {
        let path = format!(
            "/api/memberships/groups/{}/members?include_deleted={}",
            group_id, include_deleted
        );
        send_json(self.authorized(self.http.get(self.url(&path)))?).await
    }

    async fn add(&self, group_id: i32, user_id: i32) -> Result<MembershipResult, ClientError> {
        let request = self
            .http
            .post(self.url("/api/memberships/"))
            .json(&MembershipPayload { user_id, group_id });
        send_json(self.authorized(request)?).await
    }

    async fn remove(&self, group_id: i32, user_id: i32) -> Result<String, ClientError> {
        let path = format!("/api/memberships/groups/{}/users/{}", group_id, user_id);
        let confirmation: DeleteResponse =
            send_json(self.authorized(self.http.delete(self.url(&path)))?).await?;
        Ok(confirmation.message)
    }
}

#[async_trait]
impl RecordDeleter for ApiClient {
    async fn delete_group(&self, group_id: i32) -> Result<String, ClientError> {
        Ok(ApiClient::delete_group(self, group_id).await?.message)
    }

    async fn delete_user(&self, user_id: i32) -> Result<String, ClientError> {
        Ok(ApiClient::delete_user(self, user_id).await?.message)
    }
}
