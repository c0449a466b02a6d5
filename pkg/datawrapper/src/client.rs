use crate::{ApiError, ChartApi};
use pkg_constants::api::{CONTENT_TYPE_CSV, CONTENT_TYPE_JSON};
use pkg_types::map::MapId;
use pkg_types::metadata::{CreateChartRequest, CreatedChart, MetadataUpdate};
use pkg_types::publish::PublishResult;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

/// Blocking HTTPS client for the charting service.
pub struct HttpChartApi {
    client: Client,
    api_base: String,
    publish_base: String,
    token: String,
}

impl HttpChartApi {
    pub fn new(
        api_base: impl Into<String>,
        publish_base: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self::with_client(client, api_base, publish_base, token))
    }

    /// Use an already configured HTTP client.
    pub fn with_client(
        client: Client,
        api_base: impl Into<String>,
        publish_base: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            publish_base: publish_base.into(),
            token: token.into(),
        }
    }

    /// Attach the bearer token, send, and return the body of a 2xx response.
    fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        debug!("{} {}", method, url);
        let resp = request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .map_err(|source| ApiError::Transport {
                method,
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        let body = resp.text().map_err(|source| ApiError::Transport {
            method,
            url: url.to_string(),
            source,
        })?;
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        debug!("{} {} -> {}", method, url, status);
        Ok(body)
    }
}

impl ChartApi for HttpChartApi {
    fn create_chart(&self, request: &CreateChartRequest) -> Result<MapId, ApiError> {
        let url = charts_url(&self.api_base);
        let req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .json(request);
        let body = self.send("POST", &url, req)?;
        let created: CreatedChart = serde_json::from_str(&body)
            .map_err(|source| ApiError::Decode { url: url.clone(), source })?;
        let id = created.id.ok_or_else(|| ApiError::MissingField {
            what: format!("POST {} response", url),
            field: "id",
        })?;
        Ok(MapId::new(id))
    }

    fn patch_metadata(&self, id: &MapId, update: &MetadataUpdate) -> Result<(), ApiError> {
        let url = chart_url(&self.api_base, id);
        debug!("Patching {} metadata for map_id={}", update.kind(), id);
        let req = self
            .client
            .patch(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .json(&update.to_patch());
        self.send("PATCH", &url, req)?;
        Ok(())
    }

    fn put_data(&self, id: &MapId, body: String) -> Result<(), ApiError> {
        let url = data_url(&self.api_base, id);
        let req = self
            .client
            .put(&url)
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, CONTENT_TYPE_CSV)
            .body(body);
        self.send("PUT", &url, req)?;
        Ok(())
    }

    fn publish(&self, id: &MapId) -> Result<PublishResult, ApiError> {
        let url = publish_url(&self.publish_base, id);
        let req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        let body = self.send("POST", &url, req)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

// --- Endpoint paths ---

fn charts_url(base: &str) -> String {
    format!("{}/v3/charts", base.trim_end_matches('/'))
}

fn chart_url(base: &str, id: &MapId) -> String {
    format!("{}/{}", charts_url(base), id)
}

fn data_url(base: &str, id: &MapId) -> String {
    format!("{}/data", chart_url(base, id))
}

/// Publishing still lives on the unversioned path.
fn publish_url(base: &str, id: &MapId) -> String {
    format!("{}/charts/{}/publish", base.trim_end_matches('/'), id)
}
