use std::time::Duration;

use reqwest::blocking::multipart;

use crate::deface::domain::anonymizer::{DefaceError, DefaceRequest, VideoAnonymizer};
use crate::shared::constants::DEFACE_ENDPOINT;

/// Talks to a locally running deface service over HTTP multipart.
///
/// The video is uploaded as-is; the service runs its own detection and
/// returns the processed video bytes in the response body.
pub struct HttpAnonymizer {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpAnonymizer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        // Anonymizing a long video server-side can take minutes
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(600))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpAnonymizer {
    fn default() -> Self {
        Self::new(DEFACE_ENDPOINT)
    }
}

impl VideoAnonymizer for HttpAnonymizer {
    fn anonymize(&self, video: &[u8], request: &DefaceRequest) -> Result<Vec<u8>, DefaceError> {
        let video_part = multipart::Part::bytes(video.to_vec())
            .file_name("video.mp4")
            .mime_str("video/mp4")?;

        let mut form = multipart::Form::new()
            .part("video", video_part)
            .text("mode", request.mode.to_string())
            .text("threshold", request.threshold.to_string());
        if let Some(scale) = &request.scale {
            form = form.text("scale", scale.clone());
        }

        let response = self.client.post(&self.endpoint).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DefaceError::Http(status.as_u16()));
        }

        Ok(response.bytes()?.to_vec())
    }
}
