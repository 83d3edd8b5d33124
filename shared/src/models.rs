use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::Display as StrumDisplay;
use uuid::Uuid;

pub const DETECT_OPTIC_DISC_PATH: &str = "/api/detect-optic-disc";
pub const DIAGNOSIS_GLAUCOMA_PATH: &str = "/api/diagnosis-glaucoma";
/// Multipart field both endpoints read the image from.
pub const UPLOAD_FIELD: &str = "file";

/// Identifies one analysis run. Completions carrying another run's id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// `[x1, y1, x2, y2]` in image pixels.
    #[serde(rename = "box")]
    pub bounds: [f64; 4],
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(rename = "class")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    pub result_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<Detection>>,
}

impl DetectionOutcome {
    pub fn detections(&self) -> &[Detection] {
        self.detections.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisOutcome {
    pub is_positive: bool,
    /// Percentage as reported by the backend. Not guaranteed to stay within 0..=100.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Verdict {
    #[strum(serialize = "Signs of glaucoma")]
    GlaucomaSigns,
    #[strum(serialize = "No signs of glaucoma")]
    NoGlaucomaSigns,
}

impl Verdict {
    /// Short label for the detail table.
    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::GlaucomaSigns => "Suspected glaucoma",
            Verdict::NoGlaucomaSigns => "Normal",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Verdict::GlaucomaSigns => {
                "The model found characteristics compatible with glaucoma in this image."
            }
            Verdict::NoGlaucomaSigns => {
                "The model did not find significant changes compatible with glaucoma."
            }
        }
    }
}

impl DiagnosisOutcome {
    pub fn verdict(&self) -> Verdict {
        if self.is_positive {
            Verdict::GlaucomaSigns
        } else {
            Verdict::NoGlaucomaSigns
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detection_response_from_backend() {
        let body = r#"{
            "originalImageUrl": "/static/original_1700000000000.jpg",
            "resultImageUrl": "/static/result_1700000000000.jpg",
            "detections": [
                { "box": [10, 10, 50, 50], "confidence": 0.87, "class": "optic_disc" }
            ]
        }"#;
        let outcome: DetectionOutcome = serde_json::from_str(body).unwrap();

        assert_eq!(outcome.result_image_url, "/static/result_1700000000000.jpg");
        let detections = outcome.detections();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].bounds, [10.0, 10.0, 50.0, 50.0]);
        assert_eq!(detections[0].confidence, Some(0.87));
        assert_eq!(detections[0].label, "optic_disc");
    }

    #[test]
    fn detections_are_optional() {
        let outcome: DetectionOutcome =
            serde_json::from_str(r#"{ "resultImageUrl": "https://cdn.example/r.jpg" }"#).unwrap();
        assert!(outcome.detections().is_empty());

        let outcome: DetectionOutcome =
            serde_json::from_str(r#"{ "resultImageUrl": "/static/r.jpg", "detections": null }"#)
                .unwrap();
        assert!(outcome.detections().is_empty());
    }

    #[test]
    fn missing_detection_confidence_is_none() {
        let detection: Detection =
            serde_json::from_str(r#"{ "box": [1, 2, 3, 4], "confidence": null, "class": "0" }"#)
                .unwrap();
        assert_eq!(detection.confidence, None);
    }

    #[test]
    fn parses_diagnosis_response() {
        let outcome: DiagnosisOutcome =
            serde_json::from_str(r#"{ "isPositive": true, "confidence": 93 }"#).unwrap();
        assert!(outcome.is_positive);
        assert_eq!(outcome.confidence, 93.0);
        assert_eq!(outcome.verdict(), Verdict::GlaucomaSigns);
        assert_eq!(outcome.verdict().to_string(), "Signs of glaucoma");
    }

    #[test]
    fn backend_routes_and_upload_field() {
        assert_eq!(DETECT_OPTIC_DISC_PATH, "/api/detect-optic-disc");
        assert_eq!(DIAGNOSIS_GLAUCOMA_PATH, "/api/diagnosis-glaucoma");
        assert_eq!(UPLOAD_FIELD, "file");
    }

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(RunId::new(), RunId::new());
    }
}
