//! Album page extraction
//!
//! Field precedence: JSON-LD first, then selector fallback for
//! title/artist. Tags, about and credits only exist in markup.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{first_text, structured, tag_list, PAGE_BYLINE, PAGE_TITLE, TRALBUM_TAGS};
use crate::types::Album;

static ABOUT: Lazy<Selector> = Lazy::new(|| Selector::parse(".tralbum-about").unwrap());
static CREDITS: Lazy<Selector> = Lazy::new(|| Selector::parse(".tralbum-credits").unwrap());

/// Parse an album page into its canonical record.
///
/// `url` is the address the page was fetched from and is carried into
/// the record unchanged, whatever else extraction yields.
pub fn parse(html: &str, url: &str) -> Album {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut album = Album {
        url: url.to_string(),
        ..Default::default()
    };

    if let Some(data) = structured::album_data(&doc) {
        album.title = data.title;
        album.artist = data.artist;
        album.description = data.description;
        album.release_date = data.release_date;
        album.image = data.image;
        album.num_tracks = data.num_tracks;
        album.tracks = data.tracks;
        album.price = data.price;
        album.currency = data.currency;
        album.label = data.label;
        album.label_url = data.label_url;
    }

    if album.title.is_none() {
        album.title = first_text(root, &PAGE_TITLE);
    }
    if album.artist.is_none() {
        album.artist = first_text(root, &PAGE_BYLINE);
    }

    album.tags = tag_list(root, &TRALBUM_TAGS);
    album.about = first_text(root, &ABOUT);
    album.credits = first_text(root, &CREDITS);

    album
}
