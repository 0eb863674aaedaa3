//! Request validation and classification orchestration.
//!
//! One request flows one way: validate input shape, then either score text
//! locally or dispatch a single remote call and interpret its verdict. All
//! failures surface as verdict values; the orchestrator itself is
//! infallible once constructed.

use url::Url;

use crate::config::AnalysisConfig;
use crate::remote::{AnalysisClient, interpret};
use crate::scoring;
use crate::verdict::{RiskVerdict, SourceKind};

/// Declared MIME types accepted for image uploads.
const ACCEPTED_IMAGE_MIME: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/webp"];

pub const EMPTY_INPUT_MESSAGE: &str = "Please provide text, image or link.";
pub const MULTIPLE_INPUT_MESSAGE: &str = "Provide only one of text, image or link.";
pub const BAD_IMAGE_TYPE_MESSAGE: &str = "Unsupported image type: expected png, jpeg or webp.";
pub const BAD_URL_MESSAGE: &str = "That does not look like a valid link.";

/// An image upload with whatever type information the caller had.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    /// MIME type as declared by the caller, if any.
    pub declared_mime: Option<String>,
    pub filename: Option<String>,
}

/// One classification request: exactly one kind is expected to be present.
/// All three empty is itself a terminal input condition, not an error.
#[derive(Debug, Clone, Default)]
pub struct ClassificationRequest {
    pub text: Option<String>,
    pub image: Option<ImageUpload>,
    pub url: Option<String>,
}

impl ClassificationRequest {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn image(upload: ImageUpload) -> Self {
        Self {
            image: Some(upload),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Drives one request through validation, local scoring or remote dispatch.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    client: AnalysisClient,
    max_image_bytes: u64,
}

impl Orchestrator {
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            client: AnalysisClient::new(config),
            max_image_bytes: config.max_image_mb * 1024 * 1024,
        }
    }

    /// Classify one request. Always terminates in a rendered verdict: local
    /// scoring is synchronous, the remote dispatch is awaited exactly once
    /// and never retried.
    pub async fn classify(&self, request: ClassificationRequest) -> RiskVerdict {
        let text = request
            .text
            .as_deref()
            .map(scoring::normalize)
            .filter(|t| !t.is_empty());
        let url = request
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());
        let image = request.image.filter(|i| !i.data.is_empty());

        let provided =
            usize::from(text.is_some()) + usize::from(url.is_some()) + usize::from(image.is_some());
        match provided {
            0 => return RiskVerdict::invalid(None, EMPTY_INPUT_MESSAGE),
            1 => {}
            _ => return RiskVerdict::invalid(None, MULTIPLE_INPUT_MESSAGE),
        }

        if let Some(text) = text {
            tracing::debug!("dispatching to local text scorer");
            return scoring::classify_text(&text);
        }

        if let Some(upload) = image {
            return self.classify_image(upload).await;
        }

        // `provided == 1` leaves only the url arm.
        let raw = url.unwrap_or_default();
        self.classify_url(raw).await
    }

    async fn classify_image(&self, upload: ImageUpload) -> RiskVerdict {
        let Some(mime) = resolve_image_mime(&upload) else {
            tracing::debug!(declared = ?upload.declared_mime, "rejected image upload type");
            return RiskVerdict::invalid(Some(SourceKind::Image), BAD_IMAGE_TYPE_MESSAGE);
        };

        if upload.data.len() as u64 > self.max_image_bytes {
            let limit_mb = self.max_image_bytes / (1024 * 1024);
            return RiskVerdict::invalid(
                Some(SourceKind::Image),
                format!("Image exceeds the {limit_mb} MB upload limit."),
            );
        }

        tracing::debug!(%mime, bytes = upload.data.len(), "dispatching image for analysis");
        let outcome = self
            .client
            .check_image(upload.data, &mime, upload.filename)
            .await;
        interpret(outcome, SourceKind::Image)
    }

    async fn classify_url(&self, raw: &str) -> RiskVerdict {
        if validate_url(raw).is_none() {
            tracing::debug!(url = raw, "rejected malformed link");
            return RiskVerdict::invalid(Some(SourceKind::Link), BAD_URL_MESSAGE);
        }

        tracing::debug!(url = raw, "dispatching link for analysis");
        let outcome = self.client.check_link(raw).await;
        interpret(outcome, SourceKind::Link)
    }
}

/// Resolve the MIME type an upload will be sent with, or `None` when it is
/// not an accepted image. The declared type wins; absent or opaque declared
/// types fall back to magic-byte sniffing.
fn resolve_image_mime(upload: &ImageUpload) -> Option<String> {
    if let Some(declared) = upload.declared_mime.as_deref()
        && declared != "application/octet-stream"
    {
        let declared = declared.to_ascii_lowercase();
        if ACCEPTED_IMAGE_MIME.contains(&declared.as_str()) {
            // "image/jpg" is a common but non-standard alias.
            if declared == "image/jpg" {
                return Some(mime::IMAGE_JPEG.to_string());
            }
            return Some(declared);
        }
        return None;
    }

    let sniffed = infer::get(&upload.data)?.mime_type();
    if ACCEPTED_IMAGE_MIME.contains(&sniffed) {
        Some(sniffed.to_string())
    } else {
        None
    }
}

/// Permissive scheme + host + TLD check. Anything the `url` crate cannot
/// parse as http(s) with a dotted hostname is rejected before dispatch.
fn validate_url(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;
    let tld = host.rsplit('.').next()?;
    if host.contains('.') && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(parsed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::RiskTier;

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(&AnalysisConfig::default())
    }

    fn png_bytes() -> Vec<u8> {
        vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00]
    }

    #[tokio::test]
    async fn empty_request_is_invalid_with_cleared_meter() {
        let v = orchestrator().classify(ClassificationRequest::default()).await;
        assert_eq!(v.tier, RiskTier::Invalid);
        assert_eq!(v.meter_percent, 0);
        assert_eq!(v.reasons, vec![EMPTY_INPUT_MESSAGE.to_string()]);
        assert!(v.source.is_none());
    }

    #[tokio::test]
    async fn whitespace_only_text_counts_as_empty() {
        let v = orchestrator()
            .classify(ClassificationRequest::text("   \n  "))
            .await;
        assert_eq!(v.tier, RiskTier::Invalid);
        assert_eq!(v.reasons, vec![EMPTY_INPUT_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn more_than_one_kind_is_invalid() {
        let request = ClassificationRequest {
            text: Some("hello".into()),
            url: Some("https://example.com".into()),
            image: None,
        };
        let v = orchestrator().classify(request).await;
        assert_eq!(v.tier, RiskTier::Invalid);
        assert_eq!(v.reasons, vec![MULTIPLE_INPUT_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn text_path_scores_locally() {
        let v = orchestrator()
            .classify(ClassificationRequest::text("URGENT free gift offer"))
            .await;
        assert_eq!(v.tier, RiskTier::Scam);
        assert_eq!(v.source, Some(SourceKind::Text));
    }

    #[tokio::test]
    async fn text_plain_image_is_invalid_before_any_dispatch() {
        // Endpoint is unreachable; reaching it would yield BackendError,
        // so Invalid here proves no call was attempted.
        let v = orchestrator()
            .classify(ClassificationRequest::image(ImageUpload {
                data: b"hello world".to_vec(),
                declared_mime: Some("text/plain".into()),
                filename: Some("notes.txt".into()),
            }))
            .await;
        assert_eq!(v.tier, RiskTier::Invalid);
        assert_eq!(v.source, Some(SourceKind::Image));
        assert_eq!(v.reasons, vec![BAD_IMAGE_TYPE_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn malformed_url_is_invalid_before_any_dispatch() {
        let v = orchestrator()
            .classify(ClassificationRequest::url("not a url"))
            .await;
        assert_eq!(v.tier, RiskTier::Invalid);
        assert_eq!(v.source, Some(SourceKind::Link));
        assert_eq!(v.reasons, vec![BAD_URL_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn oversized_image_is_invalid_before_any_dispatch() {
        let config = AnalysisConfig {
            max_image_mb: 1,
            ..AnalysisConfig::default()
        };
        let mut data = png_bytes();
        data.resize(2 * 1024 * 1024, 0);

        let v = Orchestrator::new(&config)
            .classify(ClassificationRequest::image(ImageUpload {
                data,
                declared_mime: Some("image/png".into()),
                filename: None,
            }))
            .await;
        assert_eq!(v.tier, RiskTier::Invalid);
        assert!(v.reasons[0].contains("1 MB"));
    }

    #[test]
    fn declared_jpg_alias_normalizes_to_jpeg() {
        let upload = ImageUpload {
            data: Vec::new(),
            declared_mime: Some("image/jpg".into()),
            filename: None,
        };
        assert_eq!(resolve_image_mime(&upload).as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn undeclared_mime_falls_back_to_magic_bytes() {
        let upload = ImageUpload {
            data: png_bytes(),
            declared_mime: None,
            filename: None,
        };
        assert_eq!(resolve_image_mime(&upload).as_deref(), Some("image/png"));

        let octet = ImageUpload {
            data: png_bytes(),
            declared_mime: Some("application/octet-stream".into()),
            filename: None,
        };
        assert_eq!(resolve_image_mime(&octet).as_deref(), Some("image/png"));
    }

    #[test]
    fn non_image_bytes_without_declared_type_are_rejected() {
        let upload = ImageUpload {
            data: b"plain text bytes".to_vec(),
            declared_mime: None,
            filename: None,
        };
        assert!(resolve_image_mime(&upload).is_none());
    }

    #[test]
    fn url_validation_accepts_http_and_https_with_tld() {
        assert!(validate_url("https://example.com").is_some());
        assert!(validate_url("http://sub.example.co.in/path?q=1").is_some());
    }

    #[test]
    fn url_validation_rejects_other_shapes() {
        assert!(validate_url("not a url").is_none());
        assert!(validate_url("ftp://example.com").is_none());
        assert!(validate_url("https://localhost").is_none());
        assert!(validate_url("https://192.168.0.1").is_none());
        assert!(validate_url("example.com").is_none());
    }
}
