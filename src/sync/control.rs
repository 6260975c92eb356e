//! The remote control document and the decision whether to act on it.
//!
//! The document is a single line of the form `<image_url>,<published_at>`.
//! Timestamps are ISO-8601 local times without offset
//! (`2024-05-01T08:30:00`); a bare date is accepted as midnight.

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use thiserror::Error;

use super::history::WallpaperChange;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ControlError {
    #[error("control document returned HTTP {0}")]
    BadStatus(u16),

    #[error("expected 2 comma-separated values, found {0}")]
    FieldCount(usize),

    #[error("control document has an empty image URL")]
    EmptyUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDocument {
    pub image_url: String,
    pub published_at: String,
}

impl ControlDocument {
    pub fn parse(body: &str) -> Result<Self, ControlError> {
        let fields: Vec<&str> = body.split(',').collect();
        if fields.len() != 2 {
            return Err(ControlError::FieldCount(fields.len()));
        }

        let image_url = fields[0].trim();
        if image_url.is_empty() {
            return Err(ControlError::EmptyUrl);
        }

        Ok(Self {
            image_url: image_url.to_string(),
            published_at: fields[1].trim().to_string(),
        })
    }
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Order two timestamps, as times when both parse and as strings otherwise.
pub fn compare_timestamps(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Apply when nothing was applied yet, the URL changed, or the document was
/// published after the last change.
pub fn should_apply(doc: &ControlDocument, last: Option<&WallpaperChange>) -> bool {
    let Some(last) = last else {
        return true;
    };
    last.image_url != doc.image_url
        || compare_timestamps(&last.applied_at, &doc.published_at) == Ordering::Less
}
