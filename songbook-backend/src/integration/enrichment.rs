use concat_string::concat_string;
use serde::{Deserialize, Serialize};

use super::Informant;
use crate::{config, Error};

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct Request<'a> {
    group: &'a str,
    song: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(default)]
pub struct Info {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl Client {
    pub fn new(config: &config::integration::Enrichment) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| Error::Internal(error.into()))?;
        Ok(Self { http, url: config.url.trim_end_matches('/').to_owned() })
    }

    fn build_url(&self, request: &Request<'_>) -> Result<String, Error> {
        serde_html_form::to_string(request)
            .map(|form| concat_string!(&self.url, "/info?", form))
            .map_err(|_| Error::SerializeRequest("enrichment query"))
    }

    async fn send(&self, request: &Request<'_>) -> Result<Info, Error> {
        let response = self
            .http
            .get(self.build_url(request)?)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|error| Error::EnrichmentUnavailable(error.into()))?;

        response.json::<Info>().await.map_err(|error| {
            if error.is_decode() {
                Error::EnrichmentDecode(error.into())
            } else {
                Error::EnrichmentUnavailable(error.into())
            }
        })
    }
}

#[async_trait::async_trait]
impl Informant for Client {
    #[tracing::instrument(skip(self))]
    async fn info(&self, group: &str, song: &str) -> Result<Info, Error> {
        self.send(&Request { group, song }).await
    }
}
