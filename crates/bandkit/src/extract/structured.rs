//! Embedded schema.org metadata extraction
//!
//! Album and track pages carry a JSON-LD block describing the page's
//! primary entity. It is the preferred source for every field it covers;
//! a missing or malformed block degrades to selector-only extraction and
//! is never surfaced as an error.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::warn;

use crate::types::AlbumTrack;

static JSON_LD: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());

/// Structured fields found on an album page
#[derive(Debug, Default)]
pub(crate) struct AlbumData {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub image: Option<String>,
    pub num_tracks: u32,
    pub tracks: Vec<AlbumTrack>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub label: Option<String>,
    pub label_url: Option<String>,
}

/// Structured fields found on a track page
#[derive(Debug, Default)]
pub(crate) struct TrackData {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub image: Option<String>,
    pub album: Option<String>,
    pub album_url: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
}

/// Locate and parse the page's JSON-LD block.
///
/// Returns `None` when the block is missing, malformed, or not a JSON
/// object. Malformed blocks are logged and otherwise ignored.
fn metadata_block(doc: &Html) -> Option<Value> {
    let script = doc.select(&JSON_LD).next()?;
    let text: String = script.text().collect();
    match serde_json::from_str::<Value>(&text) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            warn!("JSON-LD block is not an object, ignoring");
            None
        }
        Err(err) => {
            warn!(error = %err, "Failed to parse JSON-LD block");
            None
        }
    }
}

/// Non-empty string at `value[key]`
fn string_field(value: &Value, key: &str) -> Option<String> {
    value[key]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-empty string at `value[outer][inner]`
fn nested_string(value: &Value, outer: &str, inner: &str) -> Option<String> {
    string_field(&value[outer], inner)
}

/// String or number at `value[outer][inner]`, numbers stringified.
///
/// Offer prices appear both ways in the wild.
fn nested_scalar(value: &Value, outer: &str, inner: &str) -> Option<String> {
    match &value[outer][inner] {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract album fields from the page's JSON-LD block, if it has one
pub(crate) fn album_data(doc: &Html) -> Option<AlbumData> {
    let data = metadata_block(doc)?;

    let mut album = AlbumData {
        title: string_field(&data, "name"),
        artist: nested_string(&data, "byArtist", "name"),
        description: string_field(&data, "description"),
        release_date: string_field(&data, "datePublished"),
        image: string_field(&data, "image"),
        num_tracks: data["numTracks"].as_u64().unwrap_or(0) as u32,
        ..Default::default()
    };

    if let Some(elements) = data["track"]["itemListElement"].as_array() {
        for element in elements {
            let item = &element["item"];
            album.tracks.push(AlbumTrack {
                position: element["position"].as_u64().unwrap_or(0) as u32,
                title: string_field(item, "name"),
                duration: string_field(item, "duration"),
                url: string_field(item, "@id"),
            });
        }
    }

    album.price = nested_scalar(&data, "offers", "price");
    album.currency = nested_string(&data, "offers", "priceCurrency");
    album.label = nested_string(&data, "publisher", "name");
    album.label_url = nested_string(&data, "publisher", "@id");

    Some(album)
}

/// Extract track fields from the page's JSON-LD block, if it has one
pub(crate) fn track_data(doc: &Html) -> Option<TrackData> {
    let data = metadata_block(doc)?;

    Some(TrackData {
        title: string_field(&data, "name"),
        artist: nested_string(&data, "byArtist", "name"),
        duration: string_field(&data, "duration"),
        description: string_field(&data, "description"),
        release_date: string_field(&data, "datePublished"),
        image: string_field(&data, "image"),
        album: nested_string(&data, "inAlbum", "name"),
        album_url: nested_string(&data, "inAlbum", "@id"),
        price: nested_scalar(&data, "offers", "price"),
        currency: nested_string(&data, "offers", "priceCurrency"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_json_ld(json: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><head><script type="application/ld+json">{}</script></head></html>"#,
            json
        ))
    }

    #[test]
    fn test_album_data_basic_fields() {
        let doc = doc_with_json_ld(
            r#"{
                "name": "Geogaddi",
                "byArtist": {"name": "Boards of Canada"},
                "datePublished": "18 Feb 2002 00:00:00 GMT",
                "numTracks": 23,
                "offers": {"price": "7.00", "priceCurrency": "USD"},
                "publisher": {"name": "Warp Records", "@id": "https://warp.net"}
            }"#,
        );
        let data = album_data(&doc).unwrap();
        assert_eq!(data.title.as_deref(), Some("Geogaddi"));
        assert_eq!(data.artist.as_deref(), Some("Boards of Canada"));
        assert_eq!(data.num_tracks, 23);
        assert_eq!(data.price.as_deref(), Some("7.00"));
        assert_eq!(data.currency.as_deref(), Some("USD"));
        assert_eq!(data.label.as_deref(), Some("Warp Records"));
        assert_eq!(data.label_url.as_deref(), Some("https://warp.net"));
    }

    #[test]
    fn test_album_data_numeric_price() {
        let doc = doc_with_json_ld(r#"{"name": "X", "offers": {"price": 7.5}}"#);
        let data = album_data(&doc).unwrap();
        assert_eq!(data.price.as_deref(), Some("7.5"));
        assert_eq!(data.currency, None);
    }

    #[test]
    fn test_album_data_tracklist() {
        let doc = doc_with_json_ld(
            r#"{
                "name": "EP",
                "track": {"itemListElement": [
                    {"position": 1, "item": {"name": "One", "duration": "PT3M45S", "@id": "https://x.bandcamp.com/track/one"}},
                    {"position": 2, "item": {"name": "Two"}}
                ]}
            }"#,
        );
        let data = album_data(&doc).unwrap();
        assert_eq!(data.tracks.len(), 2);
        assert_eq!(data.tracks[0].position, 1);
        assert_eq!(data.tracks[0].duration.as_deref(), Some("PT3M45S"));
        assert_eq!(data.tracks[1].position, 2);
        assert_eq!(data.tracks[1].duration, None);
    }

    #[test]
    fn test_malformed_block_is_absent() {
        let doc = doc_with_json_ld("{not valid json");
        assert!(album_data(&doc).is_none());
        assert!(track_data(&doc).is_none());
    }

    #[test]
    fn test_non_object_block_is_absent() {
        let doc = doc_with_json_ld(r#"["an", "array"]"#);
        assert!(album_data(&doc).is_none());
    }

    #[test]
    fn test_missing_block_is_absent() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(album_data(&doc).is_none());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let doc = doc_with_json_ld(r#"{"name": "", "byArtist": {"name": "  "}}"#);
        let data = album_data(&doc).unwrap();
        assert_eq!(data.title, None);
        assert_eq!(data.artist, None);
    }

    #[test]
    fn test_track_data_album_association() {
        let doc = doc_with_json_ld(
            r#"{
                "name": "Roygbiv",
                "byArtist": {"name": "Boards of Canada"},
                "duration": "PT2M31S",
                "inAlbum": {"name": "Music Has the Right to Children", "@id": "https://x.bandcamp.com/album/mhtrtc"}
            }"#,
        );
        let data = track_data(&doc).unwrap();
        assert_eq!(data.duration.as_deref(), Some("PT2M31S"));
        assert_eq!(
            data.album.as_deref(),
            Some("Music Has the Right to Children")
        );
        assert_eq!(
            data.album_url.as_deref(),
            Some("https://x.bandcamp.com/album/mhtrtc")
        );
    }
}
