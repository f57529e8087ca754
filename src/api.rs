use gloo_net::http::{Request, RequestBuilder};
use urlencoding::encode;
use web_sys::AbortSignal;

use crate::error::ApiError;
use crate::model::{Catalog, ErrorBody, MessageBody};

/// Thin client for the activities REST endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesApi {
    base: String,
}

impl ActivitiesApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    /// `GET /activities`. A non-2xx status counts as a failure rather than
    /// being decoded as a catalog.
    pub async fn fetch_catalog(&self, signal: Option<&AbortSignal>) -> Result<Catalog, ApiError> {
        let resp = Request::get(&self.activities_url())
            .abort_signal(signal)
            .send()
            .await?;
        if !resp.ok() {
            return Err(rejected(resp).await);
        }
        Ok(resp.json::<Catalog>().await?)
    }

    /// `POST /activities/{name}/signup?email=...`, returning the server message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        mutate(Request::post(&self.signup_url(activity, email))).await
    }

    /// `DELETE /activities/{name}/signup?email=...`, returning the server message.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        mutate(Request::delete(&self.signup_url(activity, email))).await
    }
}

async fn mutate(req: RequestBuilder) -> Result<String, ApiError> {
    let resp = req.send().await?;
    if !resp.ok() {
        return Err(rejected(resp).await);
    }
    let body: MessageBody = resp.json().await?;
    Ok(body.message)
}

async fn rejected(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Rejected { status, detail }
}
