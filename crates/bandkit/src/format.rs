//! Text rendering of canonical records for tool output
//!
//! Everything here is presentation: long free-text fields are cut down
//! with an ellipsis marker and durations get a readable form, but the
//! records themselves are never modified.

use crate::types::{Album, Artist, DiscoverPage, SearchResponse, TagPage, Track};

/// Display cap for an album's "about" text
pub const ABOUT_LIMIT: usize = 500;
/// Display cap for album credits
pub const CREDITS_LIMIT: usize = 300;
/// Display cap for an artist bio
pub const BIO_LIMIT: usize = 800;
/// Display cap for track lyrics
pub const LYRICS_LIMIT: usize = 1000;
/// Display cap for a track description
pub const DESCRIPTION_LIMIT: usize = 500;

/// Most tags shown per search result
const SEARCH_TAG_LIMIT: usize = 5;
/// Most discography entries shown per artist
const DISCOGRAPHY_LIMIT: usize = 20;

/// Cut `text` down to `limit` characters, appending an ellipsis marker
/// when anything was dropped
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    }
}

/// Readable form of an ISO-8601 duration: `PT3M45S` becomes `3:45`.
///
/// Only the `P`/`T`/`S` designators are stripped and `M` turned into a
/// separator. Hour designators are not handled and pass through
/// verbatim, so `PT1H2M3S` renders with a literal `H`.
pub fn display_duration(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, 'P' | 'T' | 'S'))
        .map(|c| if c == 'M' { ':' } else { c })
        .collect()
}

/// Render a search response
pub fn search_response(response: &SearchResponse) -> String {
    if response.results.is_empty() {
        return "No results found.".to_string();
    }

    let mut lines = vec![format!(
        "Found {} results (page {}):\n",
        response.results.len(),
        response.pagination.page
    )];

    for item in &response.results {
        lines.push(format!("[{}] {}", item.kind.display(), item.title));
        if let Some(subhead) = &item.subhead {
            lines.push(format!("  by {}", subhead));
        }
        if let Some(genre) = &item.genre {
            lines.push(format!("  Genre: {}", genre));
        }
        if let Some(released) = &item.released {
            lines.push(format!("  Released: {}", released));
        }
        if !item.tags.is_empty() {
            let shown: Vec<&str> = item
                .tags
                .iter()
                .take(SEARCH_TAG_LIMIT)
                .map(String::as_str)
                .collect();
            lines.push(format!("  Tags: {}", shown.join(", ")));
        }
        lines.push(format!("  URL: {}", item.url));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render an album record
pub fn album(album: &Album) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Album: {}",
        album.title.as_deref().unwrap_or("Unknown")
    ));
    lines.push(format!(
        "Artist: {}",
        album.artist.as_deref().unwrap_or("Unknown")
    ));

    if let Some(label) = &album.label {
        lines.push(format!("Label: {}", label));
    }
    if let Some(date) = &album.release_date {
        lines.push(format!("Released: {}", date));
    }
    if let Some(price) = &album.price {
        let price_str = match &album.currency {
            Some(currency) => format!("{} {}", currency, price),
            None => price.clone(),
        };
        lines.push(format!("Price: {}", price_str));
    }
    if !album.tags.is_empty() {
        lines.push(format!("Tags: {}", album.tags.join(", ")));
    }

    if !album.tracks.is_empty() {
        lines.push(format!("\nTracklist ({} tracks):", album.tracks.len()));
        for track in &album.tracks {
            let title = track.title.as_deref().unwrap_or("");
            let duration = track
                .duration
                .as_deref()
                .map(display_duration)
                .filter(|d| !d.is_empty())
                .map(|d| format!(" ({})", d))
                .unwrap_or_default();
            lines.push(format!("  {}. {}{}", track.position, title, duration));
        }
    }

    if let Some(about) = &album.about {
        lines.push(format!("\nAbout:\n{}", truncate(about, ABOUT_LIMIT)));
    }
    if let Some(credits) = &album.credits {
        lines.push(format!("\nCredits:\n{}", truncate(credits, CREDITS_LIMIT)));
    }

    lines.push(format!("\nURL: {}", album.url));
    lines.join("\n")
}

/// Render an artist record
pub fn artist(artist: &Artist) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Artist: {}",
        artist.name.as_deref().unwrap_or("Unknown")
    ));

    if let Some(location) = &artist.location {
        lines.push(format!("Location: {}", location));
    }
    if let Some(bio) = &artist.bio {
        lines.push(format!("\nBio:\n{}", truncate(bio, BIO_LIMIT)));
    }

    if !artist.discography.is_empty() {
        lines.push(format!(
            "\nDiscography ({} releases):",
            artist.discography.len()
        ));
        for release in artist.discography.iter().take(DISCOGRAPHY_LIMIT) {
            lines.push(format!("  - {}", release.title));
            lines.push(format!("    {}", release.url.as_deref().unwrap_or("")));
        }
    }

    if !artist.links.is_empty() {
        lines.push("\nExternal Links:".to_string());
        for link in &artist.links {
            lines.push(format!("  - {}: {}", link.name, link.url));
        }
    }

    lines.push(format!("\nURL: {}", artist.url));
    lines.join("\n")
}

/// Render a track record
pub fn track(track: &Track) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Track: {}",
        track.title.as_deref().unwrap_or("Unknown")
    ));
    lines.push(format!(
        "Artist: {}",
        track.artist.as_deref().unwrap_or("Unknown")
    ));

    if let Some(album) = &track.album {
        lines.push(format!("Album: {}", album));
    }
    if let Some(duration) = &track.duration {
        lines.push(format!("Duration: {}", duration));
    }
    if let Some(date) = &track.release_date {
        lines.push(format!("Released: {}", date));
    }
    if let Some(price) = &track.price {
        let price_str = match &track.currency {
            Some(currency) => format!("{} {}", currency, price),
            None => price.clone(),
        };
        lines.push(format!("Price: {}", price_str));
    }
    if !track.tags.is_empty() {
        lines.push(format!("Tags: {}", track.tags.join(", ")));
    }

    if let Some(lyrics) = &track.lyrics {
        lines.push(format!("\nLyrics:\n{}", truncate(lyrics, LYRICS_LIMIT)));
    }
    if let Some(description) = &track.description {
        lines.push(format!(
            "\nDescription:\n{}",
            truncate(description, DESCRIPTION_LIMIT)
        ));
    }

    lines.push(format!("\nURL: {}", track.url));
    lines.join("\n")
}

/// Render a tag page record
pub fn tag_page(page: &TagPage) -> String {
    if page.albums.is_empty() {
        return format!("No albums found for tag '{}'.", page.tag);
    }

    let mut lines = vec![format!(
        "Tag: {} (sort: {}, page {})\n",
        page.tag, page.sort, page.page
    )];
    lines.push(format!("Found {} albums:\n", page.albums.len()));

    for album in &page.albums {
        lines.push(album.title.clone());
        if let Some(artist) = &album.artist {
            lines.push(format!("  by {}", artist));
        }
        lines.push(format!("  URL: {}", album.url.as_deref().unwrap_or("")));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render a discover page record
pub fn discover_page(page: &DiscoverPage) -> String {
    if page.albums.is_empty() {
        return "No albums found in discovery.".to_string();
    }

    let genre = if page.genre.is_empty() {
        "all genres"
    } else {
        &page.genre
    };
    let mut lines = vec![format!("Discover: {} (sort: {})\n", genre, page.sort)];
    lines.push(format!("Found {} albums:\n", page.albums.len()));

    for album in &page.albums {
        lines.push(album.title.clone());
        if let Some(artist) = &album.artist {
            lines.push(format!("  by {}", artist));
        }
        if let Some(genre) = &album.genre {
            lines.push(format!("  Genre: {}", genre));
        }
        lines.push(format!("  URL: {}", album.url.as_deref().unwrap_or("")));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AlbumTrack, DiscographyEntry, ListingAlbum, Pagination, ResultKind, SearchResult,
    };

    #[test]
    fn test_display_duration_minutes_seconds() {
        assert_eq!(display_duration("PT3M45S"), "3:45");
        assert_eq!(display_duration("PT0M59S"), "0:59");
    }

    #[test]
    fn test_display_duration_hours_pass_through() {
        // Hour designators are not parsed; the H survives as-is
        assert_eq!(display_duration("PT1H2M3S"), "1H2:3");
    }

    #[test]
    fn test_truncate_under_limit() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_over_limit() {
        assert_eq!(truncate("0123456789ab", 10), "0123456789...");
    }

    #[test]
    fn test_bio_truncation_leaves_record_intact() {
        let bio: String = "x".repeat(900);
        let record = Artist {
            url: "https://a.bandcamp.com".to_string(),
            name: Some("A".to_string()),
            bio: Some(bio.clone()),
            ..Default::default()
        };

        let text = artist(&record);
        // 800 chars plus the marker appear in the output
        let rendered: String = "x".repeat(BIO_LIMIT);
        assert!(text.contains(&format!("{}...", rendered)));
        assert!(!text.contains(&"x".repeat(BIO_LIMIT + 1)));
        // The canonical record keeps all 900
        assert_eq!(record.bio.as_deref().map(|b| b.len()), Some(900));
    }

    #[test]
    fn test_album_formatting() {
        let record = Album {
            url: "https://boc.bandcamp.com/album/geogaddi".to_string(),
            title: Some("Geogaddi".to_string()),
            artist: Some("Boards of Canada".to_string()),
            price: Some("7.00".to_string()),
            currency: Some("USD".to_string()),
            tags: vec!["idm".to_string(), "electronic".to_string()],
            tracks: vec![AlbumTrack {
                position: 1,
                title: Some("Music Is Math".to_string()),
                duration: Some("PT5M21S".to_string()),
                url: None,
            }],
            num_tracks: 1,
            ..Default::default()
        };

        let text = album(&record);
        assert!(text.contains("Album: Geogaddi"));
        assert!(text.contains("Artist: Boards of Canada"));
        assert!(text.contains("Price: USD 7.00"));
        assert!(text.contains("Tags: idm, electronic"));
        assert!(text.contains("Tracklist (1 tracks):"));
        assert!(text.contains("  1. Music Is Math (5:21)"));
        assert!(text.ends_with("URL: https://boc.bandcamp.com/album/geogaddi"));
    }

    #[test]
    fn test_album_unknown_title() {
        let record = Album {
            url: "https://x.bandcamp.com/album/y".to_string(),
            ..Default::default()
        };
        let text = album(&record);
        assert!(text.contains("Album: Unknown"));
        assert!(text.contains("Artist: Unknown"));
        assert!(!text.contains("Tracklist"));
    }

    #[test]
    fn test_search_empty() {
        let response = SearchResponse::default();
        assert_eq!(search_response(&response), "No results found.");
    }

    #[test]
    fn test_search_tag_cap() {
        let tags: Vec<String> = (1..=8).map(|i| format!("tag{}", i)).collect();
        let response = SearchResponse {
            results: vec![SearchResult {
                kind: ResultKind::Album,
                title: "T".to_string(),
                url: "u".to_string(),
                tags,
                ..Default::default()
            }],
            pagination: Pagination { page: 1, items: 1 },
        };
        let text = search_response(&response);
        assert!(text.contains("tag5"));
        assert!(!text.contains("tag6"));
    }

    #[test]
    fn test_artist_discography_cap() {
        let discography = (0..30)
            .map(|i| DiscographyEntry {
                url: None,
                title: format!("Release {}", i),
                image: None,
            })
            .collect();
        let record = Artist {
            url: "https://a.bandcamp.com".to_string(),
            discography,
            ..Default::default()
        };
        let text = artist(&record);
        assert!(text.contains("Discography (30 releases):"));
        assert!(text.contains("Release 19"));
        assert!(!text.contains("Release 20"));
    }

    #[test]
    fn test_tag_page_empty_wording() {
        let page = TagPage {
            tag: "vaporwave".to_string(),
            sort: "pop".to_string(),
            page: 1,
            albums: Vec::new(),
        };
        assert_eq!(tag_page(&page), "No albums found for tag 'vaporwave'.");
    }

    #[test]
    fn test_discover_all_genres_wording() {
        let page = DiscoverPage {
            genre: String::new(),
            subgenre: String::new(),
            sort: "top".to_string(),
            albums: vec![ListingAlbum {
                url: Some("https://c.bandcamp.com/album/three".to_string()),
                title: "Three".to_string(),
                artist: Some("C".to_string()),
                image: None,
                genre: Some("ambient".to_string()),
            }],
        };
        let text = discover_page(&page);
        assert!(text.starts_with("Discover: all genres (sort: top)"));
        assert!(text.contains("Genre: ambient"));
    }

    #[test]
    fn test_discover_empty_wording() {
        let page = DiscoverPage {
            sort: "top".to_string(),
            ..Default::default()
        };
        assert_eq!(discover_page(&page), "No albums found in discovery.");
    }
}
