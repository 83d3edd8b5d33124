//! Formatting and small display-only state shared by the result views.

use strum_macros::Display;

/// References with this prefix live on the backend's static file server.
pub const STATIC_ASSET_PREFIX: &str = "/static/";

/// Which image the detection card shows. Switching never re-issues a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ImageView {
    #[strum(serialize = "Original")]
    Original,
    #[strum(serialize = "Detection")]
    Annotated,
}

/// Bar width for a percentage that the backend does not keep within bounds.
pub fn clamp_percentage(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// Detection confidences arrive as a fraction: `0.87` -> `87.00%`.
pub fn format_detection_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

/// Diagnosis confidences arrive as a percentage: `93` -> `93%`, `87.456` -> `87.46%`.
pub fn format_diagnosis_confidence(confidence: f64) -> String {
    let rounded = format!("{:.2}", confidence);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    format!("{}%", trimmed)
}

pub fn format_box(bounds: &[f64; 4]) -> String {
    let parts: Vec<String> = bounds.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Prefixes backend static paths with `backend_url`; everything else is used as-is.
pub fn resolve_asset_url(reference: &str, backend_url: &str) -> String {
    if reference.starts_with(STATIC_ASSET_PREFIX) {
        format!("{}{}", backend_url.trim_end_matches('/'), reference)
    } else {
        reference.to_string()
    }
}

/// Bounded reload of an image that failed to load, keyed by its source URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetRetry {
    source: String,
    attempts: u32,
}

impl AssetRetry {
    pub fn attempts_for(&self, source: &str) -> u32 {
        if self.source == source { self.attempts } else { 0 }
    }

    /// URL to put in the `src` attribute for `source`.
    pub fn src_for(&self, source: &str) -> String {
        match self.attempts_for(source) {
            0 => source.to_string(),
            attempt => {
                let separator = if source.contains('?') { '&' } else { '?' };
                format!("{}{}retry={}", source, separator, attempt)
            }
        }
    }

    pub fn can_reload(&self, source: &str, limit: u32) -> bool {
        is_reloadable(source) && self.attempts_for(source) < limit
    }

    /// Next state after a failed load of `source`, or `None` once `limit` is spent.
    pub fn reload(&self, source: &str, limit: u32) -> Option<Self> {
        let attempts = self.attempts_for(source);
        if !is_reloadable(source) || attempts >= limit {
            return None;
        }
        Some(Self {
            source: source.to_string(),
            attempts: attempts + 1,
        })
    }
}

/// Object and data URLs resolve only verbatim, so a cache-busting query breaks them.
fn is_reloadable(source: &str) -> bool {
    !(source.starts_with("blob:") || source.starts_with("data:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_bar_width() {
        assert_eq!(clamp_percentage(120.0), 100.0);
        assert_eq!(clamp_percentage(-3.0), 0.0);
        assert_eq!(clamp_percentage(93.0), 93.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(clamp_percentage(f64::INFINITY), 100.0);
    }

    #[test]
    fn formats_confidences() {
        assert_eq!(format_detection_confidence(Some(0.87)), "87.00%");
        assert_eq!(format_detection_confidence(Some(1.0)), "100.00%");
        assert_eq!(format_detection_confidence(None), "n/a");

        assert_eq!(format_diagnosis_confidence(93.0), "93%");
        assert_eq!(format_diagnosis_confidence(87.456), "87.46%");
        assert_eq!(format_diagnosis_confidence(70.5), "70.5%");
        assert_eq!(format_diagnosis_confidence(120.0), "120%");
    }

    #[test]
    fn formats_boxes() {
        assert_eq!(format_box(&[10.0, 10.0, 50.0, 50.0]), "[10, 10, 50, 50]");
        assert_eq!(format_box(&[1.5, 2.0, 3.0, 4.25]), "[1.5, 2, 3, 4.25]");
    }

    #[test]
    fn resolves_static_references_against_backend() {
        assert_eq!(
            resolve_asset_url("/static/result_1.jpg", "http://localhost:8000/"),
            "http://localhost:8000/static/result_1.jpg"
        );
        assert_eq!(
            resolve_asset_url("https://cdn.example/result.jpg", "http://localhost:8000"),
            "https://cdn.example/result.jpg"
        );
        assert_eq!(
            resolve_asset_url("blob:http://localhost:8080/1234", "http://localhost:8000"),
            "blob:http://localhost:8080/1234"
        );
    }

    #[test]
    fn image_view_labels() {
        assert_eq!(ImageView::Original.to_string(), "Original");
        assert_eq!(ImageView::Annotated.to_string(), "Detection");
    }

    #[test]
    fn asset_retry_is_bounded_per_source() {
        let source = "http://localhost:8000/static/result_1.jpg";
        let fresh = AssetRetry::default();
        assert_eq!(fresh.src_for(source), source);

        let first = fresh.reload(source, 2).unwrap();
        assert_eq!(first.src_for(source), format!("{}?retry=1", source));
        let second = first.reload(source, 2).unwrap();
        assert_eq!(second.src_for(source), format!("{}?retry=2", source));
        assert!(!second.can_reload(source, 2));
        assert_eq!(second.reload(source, 2), None);

        // A different source starts over.
        let other = "http://localhost:8000/static/result_2.jpg";
        assert_eq!(second.src_for(other), other);
        assert!(second.can_reload(other, 2));
    }

    #[test]
    fn local_previews_are_never_cache_busted() {
        let preview = "blob:http://localhost:8080/abcd";
        let retry = AssetRetry::default();
        assert!(!retry.can_reload(preview, 3));
        assert_eq!(retry.reload(preview, 3), None);
        assert_eq!(retry.src_for(preview), preview);

        let inline = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(retry.reload(inline, 3), None);
    }

    #[test]
    fn asset_retry_appends_to_existing_query() {
        let retry = AssetRetry::default().reload("/img.jpg?v=3", 1).unwrap();
        assert_eq!(retry.src_for("/img.jpg?v=3"), "/img.jpg?v=3&retry=1");
    }
}
