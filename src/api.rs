use crate::errors::{ClientError, Result};
use crate::models::{ErrorBody, Snapshot};
use reqwest::{Client, Response, Url};
use std::future::Future;
use tracing::debug;

/// The three calls the view needs from the activities service.
pub trait ActivityApi {
    fn fetch_activities(&self) -> impl Future<Output = Result<Snapshot>> + Send;

    fn signup(&self, activity: &str, email: &str) -> impl Future<Output = Result<()>> + Send;

    fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: Client,
    base_url: Url,
}

impl HttpActivityApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ClientError::Config(format!("invalid base url {base_url:?}: {err}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base url must be an http(s) url, got {base_url}"
            )));
        }
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<Snapshot> {
        let url = self.endpoint(&["activities"])?;
        debug!("GET {url}");
        let response = check_status(self.client.get(url).send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.endpoint(&["activities", activity, "signup"])?;
        debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .query(&[("email", email)])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.endpoint(&["activities", activity, "participants"])?;
        debug!("DELETE {url}");
        let response = self
            .client
            .delete(url)
            .query(&[("email", email)])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_detail),
        Err(_) => None,
    };
    Err(ClientError::Rejected {
        status: status.as_u16(),
        detail,
    })
}
