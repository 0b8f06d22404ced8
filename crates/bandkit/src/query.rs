//! URL construction for search, tag and discovery pages

use url::form_urlencoded;

/// Percent-encode a string for use in a URL query component.
///
/// Uses form encoding, so spaces become `+`.
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Site short code for a search item-type filter.
///
/// `all` and unrecognized values yield `None`, producing an unfiltered
/// query rather than an error. Labels share the artist code.
fn item_type_code(item_type: &str) -> Option<&'static str> {
    match item_type {
        "album" => Some("a"),
        "artist" => Some("b"),
        "track" => Some("t"),
        "label" => Some("b"),
        "fan" => Some("f"),
        _ => None,
    }
}

/// Build a search URL for the given query, item-type filter and page
pub fn search_url(base: &str, query: &str, item_type: &str, page: u32) -> String {
    let mut url = format!("{}/search?q={}&page={}", base, encode(query), page);
    if let Some(code) = item_type_code(item_type) {
        url.push_str("&item_type=");
        url.push_str(code);
    }
    url
}

/// Build a tag listing URL.
///
/// The sort key is passed through verbatim.
pub fn tag_url(base: &str, tag: &str, sort: &str, page: u32) -> String {
    format!(
        "{}/tag/{}?sort_field={}&page={}",
        base,
        encode(tag),
        sort,
        page
    )
}

/// Build a discovery URL.
///
/// Only non-default parameters are emitted, in the order `g`, `s`,
/// `sort`, `f`, `l`.
pub fn discover_url(
    base: &str,
    genre: &str,
    subgenre: &str,
    sort: &str,
    format: &str,
    location: u32,
) -> String {
    let mut params = Vec::new();
    if !genre.is_empty() {
        params.push(format!("g={}", encode(genre)));
    }
    if !subgenre.is_empty() {
        params.push(format!("s={}", encode(subgenre)));
    }
    if !sort.is_empty() {
        params.push(format!("sort={}", sort));
    }
    if !format.is_empty() && format != "all" {
        params.push(format!("f={}", format));
    }
    if location != 0 {
        params.push(format!("l={}", location));
    }

    let mut url = format!("{}/discover", base);
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}
