//! Canonical record types for Bandcamp pages

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of entity a search result points at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// An album page
    Album,
    /// An artist page
    Artist,
    /// A single track page
    Track,
    /// A label page
    Label,
    /// A fan profile
    Fan,
    /// Anything the result page labels with an unrecognized type
    #[default]
    Unknown,
}

impl ResultKind {
    /// Map the lower-cased type label shown in a search result block.
    ///
    /// Labels outside the known set map to `Unknown` rather than failing,
    /// since the site is free to introduce new ones.
    pub fn from_label(label: &str) -> Self {
        match label {
            "album" => ResultKind::Album,
            "artist" => ResultKind::Artist,
            "track" => ResultKind::Track,
            "label" => ResultKind::Label,
            "fan" => ResultKind::Fan,
            _ => ResultKind::Unknown,
        }
    }

    /// Capitalized label for text output
    pub fn display(&self) -> &'static str {
        match self {
            ResultKind::Album => "Album",
            ResultKind::Artist => "Artist",
            ResultKind::Track => "Track",
            ResultKind::Label => "Label",
            ResultKind::Fan => "Fan",
            ResultKind::Unknown => "Unknown",
        }
    }
}

/// One entry in a search result listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    /// What kind of entity this result is
    #[serde(rename = "type")]
    pub kind: ResultKind,

    /// Result title (always non-empty; title-less blocks are dropped)
    pub title: String,

    /// Link to the result page
    pub url: String,

    /// Attributed artist or label line, when shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,

    /// Cover/avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Tags attached to the result, in page order (may be empty)
    pub tags: Vec<String>,

    /// Free-text release date line, `"released "` prefix stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,

    /// Genre line, `"genre: "` prefix stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Page position of a search response
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Pagination {
    /// 1-based page number the caller asked for
    pub page: u32,
    /// Number of results actually returned on this page (not a total)
    pub items: usize,
}

/// Search results plus pagination info
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub pagination: Pagination,
}

/// One track inside an album tracklist
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AlbumTrack {
    /// 1-based tracklist position, 0 when the page does not state one
    pub position: u32,

    /// Track title as listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Raw duration string, usually ISO-8601 (`PT3M45S`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Track page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Album detail record
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Album {
    /// The URL the album was requested from, carried through unchanged
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Track count stated by the page, 0 when unavailable
    pub num_tracks: u32,

    /// Tracklist in page order
    pub tracks: Vec<AlbumTrack>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,

    /// Album tags in page order (may be empty)
    pub tags: Vec<String>,

    /// Free-text "about" section, untruncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Free-text credits section, untruncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
}

/// One release in an artist's discography grid
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiscographyEntry {
    /// Release page URL, joined against the artist page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Release title (always non-empty; title-less entries are dropped)
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// An external link from an artist page sidebar
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

/// Artist (or label) page record
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Artist {
    /// The URL the artist was requested from, carried through unchanged
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-text bio, untruncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Releases in grid order
    pub discography: Vec<DiscographyEntry>,

    /// External links in page order
    pub links: Vec<ExternalLink>,
}

/// Track detail record
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Track {
    /// The URL the track was requested from, carried through unchanged
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Raw duration string, usually ISO-8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Parent album name, when the track belongs to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Track tags in page order (may be empty)
    pub tags: Vec<String>,

    /// Lyrics, untruncated, when the page shows them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

/// One album on a tag or discover listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListingAlbum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Always non-empty; title-less items are dropped
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Genre label, only present on discover listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Albums browsed from a tag page
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TagPage {
    pub tag: String,
    pub sort: String,
    pub page: u32,
    pub albums: Vec<ListingAlbum>,
}

/// Albums from the discovery page
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiscoverPage {
    pub genre: String,
    pub subgenre: String,
    pub sort: String,
    pub albums: Vec<ListingAlbum>,
}

fn default_item_type() -> String {
    "all".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_tag_sort() -> String {
    "pop".to_string()
}

fn default_discover_sort() -> String {
    "top".to_string()
}

fn default_format() -> String {
    "all".to_string()
}

/// Parameters for the search tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query (artist name, album title, etc.)
    pub query: String,

    /// Type of result to filter by: all, album, artist, track, label, fan
    #[serde(default = "default_item_type")]
    pub item_type: String,

    /// Page number for pagination
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Parameters for tools that take a single page URL
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UrlParams {
    /// Full Bandcamp page URL
    pub url: String,
}

/// Parameters for the tag browsing tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TagParams {
    /// Tag/genre to browse (e.g. 'ambient', 'electronic', 'jazz')
    pub tag: String,

    /// Sort order: pop (popular), new (newest), rec (recommended)
    #[serde(default = "default_tag_sort")]
    pub sort: String,

    /// Page number
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Parameters for the discovery tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiscoverParams {
    /// Main genre (e.g. 'electronic', 'rock', 'hip-hop-rap')
    #[serde(default)]
    pub genre: String,

    /// Subgenre for more specific filtering
    #[serde(default)]
    pub subgenre: String,

    /// Sort: top (best-selling), new (newest), rec (recommended)
    #[serde(default = "default_discover_sort")]
    pub sort: String,

    /// Physical format filter: all, vinyl, cd, cassette
    #[serde(default = "default_format")]
    pub format: String,

    /// Location code, 0 for anywhere
    #[serde(default)]
    pub location: u32,
}
