use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use shared::models::{DETECT_OPTIC_DISC_PATH, DIAGNOSIS_GLAUCOMA_PATH, UPLOAD_FIELD};
use shared::{
    AnalysisClient, AnalysisError, ClientConfig, DetectionOutcome, DiagnosisOutcome, decode_response,
    with_deadline,
};
use web_sys::FormData;

/// Talks to the analysis backend with multipart uploads.
#[derive(Clone)]
pub struct HttpAnalysisClient {
    config: ClientConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn submit<T: DeserializeOwned>(&self, path: &str, file: &GlooFile) -> Result<T, AnalysisError> {
        let timeout_ms = self.config.request_timeout_ms;
        with_deadline(
            self.post_file(path, file),
            TimeoutFuture::new(timeout_ms),
            timeout_ms,
        )
        .await
    }

    async fn post_file<T: DeserializeOwned>(&self, path: &str, file: &GlooFile) -> Result<T, AnalysisError> {
        let url = self.config.endpoint(path);

        let form_data =
            FormData::new().map_err(|e| AnalysisError::Request(format!("{:?}", e)))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file.as_ref(), &file.name())
            .map_err(|e| AnalysisError::Request(format!("{:?}", e)))?;

        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        decode_response(status, &body)
    }
}

impl AnalysisClient for HttpAnalysisClient {
    type File = GlooFile;

    async fn detect_optic_disc(&self, file: &GlooFile) -> Result<DetectionOutcome, AnalysisError> {
        self.submit(DETECT_OPTIC_DISC_PATH, file).await
    }

    async fn diagnose_glaucoma(&self, file: &GlooFile) -> Result<DiagnosisOutcome, AnalysisError> {
        self.submit(DIAGNOSIS_GLAUCOMA_PATH, file).await
    }
}
