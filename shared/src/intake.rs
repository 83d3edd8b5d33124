use std::ops::Deref;

use log::{info, warn};

use crate::error::IntakeError;

/// What the page knows about a picked file before it is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// A file accepted for analysis together with the URL of its local preview.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage<F> {
    pub file: F,
    pub preview_url: String,
    pub meta: FileMeta,
}

/// Holds the preview of the current upload. `P` releases its resource on drop.
pub struct Intake<P> {
    preview: Option<P>,
    details: Option<FileMeta>,
}

impl<P> Default for Intake<P> {
    fn default() -> Self {
        Self {
            preview: None,
            details: None,
        }
    }
}

impl<P: Deref<Target = str>> Intake<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `meta` and, for images, swaps in a fresh preview.
    /// A rejected file leaves the current preview and details untouched.
    pub fn accept<F>(
        &mut self,
        file: F,
        meta: FileMeta,
        make_preview: impl FnOnce(&F) -> P,
    ) -> Result<SelectedImage<F>, IntakeError> {
        if !meta.is_image() {
            warn!(
                "Rejected non-image file {} ({})",
                meta.name,
                if meta.media_type.is_empty() { "unknown type" } else { meta.media_type.as_str() }
            );
            return Err(IntakeError::NotAnImage {
                name: meta.name,
                media_type: meta.media_type,
            });
        }

        // Release the old preview before creating the next one.
        drop(self.preview.take());
        let preview = make_preview(&file);
        let preview_url = String::from(&*preview);
        self.preview = Some(preview);
        self.details = Some(meta.clone());

        info!("Accepted {} ({})", meta.name, format_file_size(meta.size));
        Ok(SelectedImage {
            file,
            preview_url,
            meta,
        })
    }

    pub fn reset(&mut self) {
        self.preview = None;
        self.details = None;
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn details(&self) -> Option<&FileMeta> {
        self.details.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.preview.is_some()
    }
}

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2.25 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}
