// src/core/api_client.rs
//! HTTP client for the job-board API - every call goes through `send`
//! so success decoding and error normalization stay uniform

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::error::{ClientError, ClientResult};
use crate::query::{encode_posts_params, with_query};
use crate::types::{
    ApplicantProfile, AuthResult, GetPostsParams, PostsPage, ProfileUpdate, SignInRequest,
    SignUpRequest, User,
};

pub const DEFAULT_BASE_URL: &str = "https://api-internhasha.wafflestudio.com";

const SIGN_UP_ENDPOINT: &str = "/api/auth/user";
const SIGN_IN_ENDPOINT: &str = "/api/auth/user/session";
const ME_ENDPOINT: &str = "/api/auth/me";
const POSTS_ENDPOINT: &str = "/api/post";
const BOOKMARKS_ENDPOINT: &str = "/api/post/bookmarks";
const APPLICANT_ME_ENDPOINT: &str = "/api/applicant/me";

/// Server code for "this user has no applicant profile yet"
pub const PROFILE_NOT_FOUND_CODE: &str = "APPLICANT_002";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> ClientResult<Self> {
        let timeout = if timeout_seconds == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_seconds
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(ClientError::Network)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/auth/user`
    pub async fn sign_up(&self, req: &SignUpRequest) -> ClientResult<AuthResult> {
        self.post_json(SIGN_UP_ENDPOINT, req).await
    }

    /// `POST /api/auth/user/session`
    pub async fn sign_in(&self, req: &SignInRequest) -> ClientResult<AuthResult> {
        self.post_json(SIGN_IN_ENDPOINT, req).await
    }

    /// `GET /api/auth/me`
    pub async fn get_me(&self, token: &str) -> ClientResult<User> {
        let request = self.request(Method::GET, ME_ENDPOINT, Some(token));
        self.fetch_json(request, ME_ENDPOINT).await
    }

    /// `GET /api/post`. The token is optional; with it the server fills in `isBookmarked`.
    pub async fn get_posts(
        &self,
        params: &GetPostsParams,
        token: Option<&str>,
    ) -> ClientResult<PostsPage> {
        let path = with_query(POSTS_ENDPOINT, &encode_posts_params(params));
        let request = self.request(Method::GET, &path, token);
        self.fetch_json(request, &path).await
    }

    pub async fn add_bookmark(&self, post_id: &str, token: &str) -> ClientResult<()> {
        let path = bookmark_path(post_id)?;
        let request = self.request(Method::POST, &path, Some(token));
        self.fetch_empty(request, &path).await
    }

    pub async fn remove_bookmark(&self, post_id: &str, token: &str) -> ClientResult<()> {
        let path = bookmark_path(post_id)?;
        let request = self.request(Method::DELETE, &path, Some(token));
        self.fetch_empty(request, &path).await
    }

    /// Bookmark or un-bookmark a posting so that it ends in the `bookmarked` state
    pub async fn set_bookmark(
        &self,
        post_id: &str,
        token: &str,
        bookmarked: bool,
    ) -> ClientResult<()> {
        if bookmarked {
            self.add_bookmark(post_id, token).await
        } else {
            self.remove_bookmark(post_id, token).await
        }
    }

    /// `GET /api/post/bookmarks`
    pub async fn get_bookmarks(&self, token: &str) -> ClientResult<PostsPage> {
        let request = self.request(Method::GET, BOOKMARKS_ENDPOINT, Some(token));
        self.fetch_json(request, BOOKMARKS_ENDPOINT).await
    }

    /// `GET /api/applicant/me`. Fails with `APPLICANT_002` when no profile exists.
    pub async fn get_applicant_profile(&self, token: &str) -> ClientResult<ApplicantProfile> {
        let request = self.request(Method::GET, APPLICANT_ME_ENDPOINT, Some(token));
        self.fetch_json(request, APPLICANT_ME_ENDPOINT).await
    }

    /// `PUT /api/applicant/me`
    pub async fn update_applicant_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> ClientResult<ApplicantProfile> {
        let request = self
            .request(Method::PUT, APPLICANT_ME_ENDPOINT, Some(token))
            .json(update);
        self.fetch_json(request, APPLICANT_ME_ENDPOINT).await
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> ClientResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, endpoint, None).json(payload);
        self.fetch_json(request, endpoint).await
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn fetch_json<R>(&self, request: RequestBuilder, path: &str) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        let body = self.send(request, path).await?;
        serde_json::from_str::<R>(&body).map_err(|e| {
            warn!("Undecodable response from {}: {}", path, e);
            ClientError::Decode(e.to_string())
        })
    }

    async fn fetch_empty(&self, request: RequestBuilder, path: &str) -> ClientResult<()> {
        self.send(request, path).await.map(|_| ())
    }

    /// Send a request and return the body of a 2xx response; anything else
    /// becomes a normalized `ClientError`
    async fn send(&self, request: RequestBuilder, path: &str) -> ClientResult<String> {
        debug!("Calling {}", path);

        let response = request.send().await.map_err(|e| {
            error!("Network error calling {}: {}", path, e);
            ClientError::Network(e)
        })?;

        let status = response.status();
        debug!("Response status for {}: {}", path, status);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(ClientError::Decode(e.to_string())),
            Err(_) => String::new(),
        };

        if status.is_success() {
            return Ok(body);
        }

        let err = ClientError::from_response(status, &body);
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            info!("Request to {} rejected: {}", path, err);
        } else {
            error!("Request to {} failed: {}", path, err);
        }
        Err(err)
    }
}

/// Post ids go into the path verbatim, so only URL-unreserved characters pass
fn bookmark_path(post_id: &str) -> ClientResult<String> {
    let post_id = post_id.trim();
    let unreserved = post_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
    if post_id.is_empty() || !unreserved || post_id == "." || post_id == ".." {
        return Err(ClientError::InvalidInput(format!(
            "invalid post id: {:?}",
            post_id
        )));
    }
    Ok(format!("{}/{}/bookmark", POSTS_ENDPOINT, post_id))
}
