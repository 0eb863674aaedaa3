use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::remote::interpreter::AnalysisReport;

/// HTTP client for the two analysis services. One outbound call per
/// classification, no retry: callers map failures straight to the
/// backend-error verdict.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    link_endpoint: String,
    image_endpoint: String,
}

impl AnalysisClient {
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            http: build_http_client(config.timeout_secs),
            link_endpoint: config.link_endpoint.clone(),
            image_endpoint: config.image_endpoint.clone(),
        }
    }

    /// `POST {link_endpoint}` with JSON body `{"link": <url>}`.
    pub async fn check_link(&self, link: &str) -> Result<AnalysisReport, AnalysisError> {
        let response = self
            .http
            .post(&self.link_endpoint)
            .json(&json!({ "link": link }))
            .send()
            .await
            .map_err(|e| AnalysisError::Request {
                endpoint: self.link_endpoint.clone(),
                message: e.to_string(),
            })?;

        read_report(&self.link_endpoint, response).await
    }

    /// `POST {image_endpoint}` with a single multipart `image` part.
    pub async fn check_image(
        &self,
        data: Vec<u8>,
        mime: &str,
        filename: Option<String>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let part = Part::bytes(data)
            .file_name(filename.unwrap_or_else(|| "upload".to_string()))
            .mime_str(mime)
            .map_err(|e| AnalysisError::Request {
                endpoint: self.image_endpoint.clone(),
                message: format!("bad mime type '{mime}': {e}"),
            })?;
        let form = Form::new().part("image", part);

        let response = self
            .http
            .post(&self.image_endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Request {
                endpoint: self.image_endpoint.clone(),
                message: e.to_string(),
            })?;

        read_report(&self.image_endpoint, response).await
    }
}

async fn read_report(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<AnalysisReport, AnalysisError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AnalysisError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .json::<AnalysisReport>()
        .await
        .map_err(|e| AnalysisError::Malformed(e.to_string()))
}

fn build_http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
}
