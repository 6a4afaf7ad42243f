//! Typed result records returned by the search backends.

use serde::{Deserialize, Serialize};

/// Ordered field-name/value view of a record, used by the print and CSV
/// renderers. Field order matches the serialized form.
pub trait Record {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// One text-search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResult {
    pub title: String,
    /// URL of the result page; the field the bulk downloader reads.
    pub href: String,
    pub body: String,
}

impl Record for TextResult {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("href", self.href.clone()),
            ("body", self.body.clone()),
        ]
    }
}

/// One image-search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResult {
    #[serde(default)]
    pub title: String,
    /// URL of the full-size image; the field the bulk downloader reads.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Page the image was found on.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub width: u64,
    #[serde(default)]
    pub source: String,
}

impl Record for ImagesResult {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("image", self.image.clone()),
            ("thumbnail", self.thumbnail.clone()),
            ("url", self.url.clone()),
            ("height", self.height.to_string()),
            ("width", self.width.to_string()),
            ("source", self.source.clone()),
        ]
    }
}

/// One news-search hit. `date` is RFC 3339 (converted from the endpoint's
/// epoch seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResult {
    pub date: String,
    pub title: String,
    pub body: String,
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub source: String,
}

impl Record for NewsResult {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.clone()),
            ("title", self.title.clone()),
            ("body", self.body.clone()),
            ("url", self.url.clone()),
            ("image", self.image.clone()),
            ("source", self.source.clone()),
        ]
    }
}

/// Thumbnail set of a video result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoImages {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub motion: String,
    #[serde(default)]
    pub small: String,
}

/// View statistics of a video result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoStats {
    #[serde(default, rename = "viewCount")]
    pub view_count: Option<u64>,
}

/// One video-search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideosResult {
    /// URL of the video page.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub embed_url: String,
    #[serde(default)]
    pub images: VideoImages,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub statistics: VideoStats,
    #[serde(default)]
    pub uploader: String,
}

impl Record for VideosResult {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("content", self.content.clone()),
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("duration", self.duration.clone()),
            ("embed_url", self.embed_url.clone()),
            ("image", self.images.medium.clone()),
            ("published", self.published.clone()),
            ("publisher", self.publisher.clone()),
            (
                "views",
                self.statistics
                    .view_count
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            ),
            ("uploader", self.uploader.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_result_serde_round_trip() {
        let r = TextResult {
            title: "Rust".into(),
            href: "https://rust-lang.org".into(),
            body: "A language".into(),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: TextResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.href, "https://rust-lang.org");
    }

    #[test]
    fn images_result_defaults_for_missing_fields() {
        let r: ImagesResult =
            serde_json::from_str(r#"{"image": "https://x.test/a.png"}"#).unwrap();
        assert_eq!(r.image, "https://x.test/a.png");
        assert_eq!(r.height, 0);
        assert!(r.title.is_empty());
    }

    #[test]
    fn record_field_order_is_stable() {
        let r = TextResult {
            title: "t".into(),
            href: "h".into(),
            body: "b".into(),
        };
        let names: Vec<_> = r.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["title", "href", "body"]);
    }

    #[test]
    fn video_stats_view_count_rename() {
        let s: VideoStats = serde_json::from_str(r#"{"viewCount": 42}"#).unwrap();
        assert_eq!(s.view_count, Some(42));
    }
}
