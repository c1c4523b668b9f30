use crate::store::snapshot::{MediaDescriptor, MediaKind};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A media descriptor resolved into a directly displayable URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedMedia {
    pub kind: MediaKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Turns a raw descriptor into displayable media.
///
/// A descriptor whose locator cannot be resolved yields `None`; the article
/// renders without its media element instead of failing.
pub fn resolve(descriptor: &MediaDescriptor) -> Option<ResolvedMedia> {
    let raw_url = match descriptor.url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => {
            tracing::warn!(kind = ?descriptor.kind, "Media descriptor without locator, omitting");
            return None;
        }
    };

    let url = match descriptor.kind {
        MediaKind::Image | MediaKind::Video => raw_url.to_string(),
        MediaKind::Youtube => match youtube_embed_url(raw_url) {
            Some(url) => url,
            None => {
                tracing::warn!(url = raw_url, "Unparseable YouTube locator, omitting media");
                return None;
            }
        },
    };

    Some(ResolvedMedia {
        kind: descriptor.kind,
        url,
        title: descriptor.title.clone(),
        description: descriptor.description.clone(),
    })
}

/// Extracts the video id from the common YouTube URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `shorts/`) and rewrites it as an
/// embed URL.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let re = Regex::new(
        r"(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{6,})",
    )
    .unwrap();
    let id = re.captures(url).and_then(|cap| cap.get(1))?;
    Some(format!("https://www.youtube.com/embed/{}", id.as_str()))
}
