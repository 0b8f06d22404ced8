//! BandKit - AI-friendly Bandcamp browsing library
//!
//! Bandcamp has no public API, so this crate extracts structured records
//! from the public website's HTML. Album and track pages embed a
//! schema.org JSON-LD block that is preferred for every field it covers;
//! CSS-selector rules fill the gaps and carry the page types that have
//! no embedded metadata at all (search, artist, tag and discovery
//! listings).
//!
//! ## Layering
//!
//! - [`query`] builds search/tag/discover URLs from caller parameters
//! - [`BandcampClient`] fetches a page and hands it to the extractors
//! - [`extract`] turns a fetched document into a canonical record
//! - [`format`] renders records as text for tool output
//!
//! Extraction is tolerant by design: a selector that matches nothing or
//! a malformed metadata block produces omitted fields, never an error.
//! Only the fetch itself can fail an invocation.

pub mod client;
mod error;
pub mod extract;
pub mod format;
pub mod query;
mod types;

pub use client::{BandcampClient, ClientBuilder, BANDCAMP_BASE};
pub use error::FetchError;
pub use types::{
    Album, AlbumTrack, Artist, DiscographyEntry, DiscoverPage, DiscoverParams, ExternalLink,
    ListingAlbum, Pagination, ResultKind, SearchParams, SearchResponse, SearchResult, TagPage,
    TagParams, Track, UrlParams,
};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns BandKit/1.0";
