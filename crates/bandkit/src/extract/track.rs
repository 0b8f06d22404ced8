//! Track page extraction
//!
//! Same layering as album pages: JSON-LD first, markup fallback for
//! title/artist, tags and lyrics from markup only.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{first_text, structured, tag_list, PAGE_BYLINE, PAGE_TITLE, TRALBUM_TAGS};
use crate::types::Track;

static LYRICS: Lazy<Selector> = Lazy::new(|| Selector::parse(".lyricsText").unwrap());

/// Parse a track page into its canonical record
pub fn parse(html: &str, url: &str) -> Track {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut track = Track {
        url: url.to_string(),
        ..Default::default()
    };

    if let Some(data) = structured::track_data(&doc) {
        track.title = data.title;
        track.artist = data.artist;
        track.duration = data.duration;
        track.description = data.description;
        track.release_date = data.release_date;
        track.image = data.image;
        track.album = data.album;
        track.album_url = data.album_url;
        track.price = data.price;
        track.currency = data.currency;
    }

    if track.title.is_none() {
        track.title = first_text(root, &PAGE_TITLE);
    }
    if track.artist.is_none() {
        track.artist = first_text(root, &PAGE_BYLINE);
    }

    track.tags = tag_list(root, &TRALBUM_TAGS);
    track.lyrics = first_text(root, &LYRICS);

    track
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://boc.bandcamp.com/track/roygbiv";

    const TRACK_PAGE: &str = r#"
        <html><head>
        <script type="application/ld+json">{
            "name": "Roygbiv",
            "byArtist": {"name": "Boards of Canada"},
            "duration": "PT2M31S",
            "datePublished": "20 Apr 1998 00:00:00 GMT",
            "image": "https://f4.bcbits.com/img/t1.jpg",
            "inAlbum": {"name": "Music Has the Right to Children", "@id": "https://boc.bandcamp.com/album/mhtrtc"},
            "offers": {"price": "1.00", "priceCurrency": "GBP"}
        }</script>
        </head><body>
        <div class="tralbum-tags"><a class="tag">idm</a><a class="tag">downtempo</a></div>
        <div class="lyricsText">(instrumental)</div>
        </body></html>
    "#;

    #[test]
    fn test_structured_fields() {
        let track = parse(TRACK_PAGE, URL);
        assert_eq!(track.url, URL);
        assert_eq!(track.title.as_deref(), Some("Roygbiv"));
        assert_eq!(track.artist.as_deref(), Some("Boards of Canada"));
        assert_eq!(track.duration.as_deref(), Some("PT2M31S"));
        assert_eq!(
            track.album.as_deref(),
            Some("Music Has the Right to Children")
        );
        assert_eq!(
            track.album_url.as_deref(),
            Some("https://boc.bandcamp.com/album/mhtrtc")
        );
        assert_eq!(track.price.as_deref(), Some("1.00"));
        assert_eq!(track.currency.as_deref(), Some("GBP"));
    }

    #[test]
    fn test_markup_only_fields() {
        let track = parse(TRACK_PAGE, URL);
        assert_eq!(track.tags, vec!["idm", "downtempo"]);
        assert_eq!(track.lyrics.as_deref(), Some("(instrumental)"));
    }

    #[test]
    fn test_markup_fallback_for_title_and_artist() {
        let page = r#"
            <html><body>
            <div id="name-section">
                <h2 class="trackTitle">Olson</h2>
                <h3><a href="/">Boards of Canada</a></h3>
            </div>
            </body></html>
        "#;
        let track = parse(page, URL);
        assert_eq!(track.title.as_deref(), Some("Olson"));
        assert_eq!(track.artist.as_deref(), Some("Boards of Canada"));
        assert_eq!(track.duration, None);
        assert_eq!(track.album, None);
    }

    #[test]
    fn test_standalone_track_has_no_album() {
        let page = r#"
            <html><head>
            <script type="application/ld+json">{"name": "Single", "byArtist": {"name": "X"}}</script>
            </head></html>
        "#;
        let track = parse(page, URL);
        assert_eq!(track.title.as_deref(), Some("Single"));
        assert_eq!(track.album, None);
        assert_eq!(track.album_url, None);
    }

    #[test]
    fn test_empty_page_keeps_url() {
        let track = parse("<html></html>", URL);
        assert_eq!(track.url, URL);
        assert_eq!(track.title, None);
        assert!(track.tags.is_empty());
    }
}
