//! BandKit CLI - Bandcamp search and discovery from the command line

mod mcp;

use bandkit::{format, BandcampClient, FetchError};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};

/// Output format for the page subcommands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON record
    Json,
}

/// BandKit - AI-friendly Bandcamp browsing tool
#[derive(Parser, Debug)]
#[command(name = "bandkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom User-Agent
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Output format
    #[arg(long, short, global = true, default_value = "text")]
    output: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run as MCP (Model Context Protocol) server over stdio
    Mcp,
    /// Search for albums, artists, tracks or labels
    Search {
        /// Search query
        query: String,

        /// Result type filter: all, album, artist, track, label, fan
        #[arg(long, default_value = "all")]
        item_type: String,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show album details from an album URL
    Album {
        /// Full album page URL
        url: String,
    },
    /// Show artist or label details from an artist URL
    Artist {
        /// Artist page URL
        url: String,
    },
    /// Show track details from a track URL
    Track {
        /// Full track page URL
        url: String,
    },
    /// Browse albums under a tag
    Tag {
        /// Tag or genre to browse
        tag: String,

        /// Sort order: pop, new, rec
        #[arg(long, default_value = "pop")]
        sort: String,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Browse the discovery page
    Discover {
        /// Main genre
        #[arg(long, default_value = "")]
        genre: String,

        /// Subgenre for more specific filtering
        #[arg(long, default_value = "")]
        subgenre: String,

        /// Sort order: top, new, rec
        #[arg(long, default_value = "top")]
        sort: String,

        /// Physical format filter: all, vinyl, cd, cassette
        #[arg(long, default_value = "all")]
        format: String,

        /// Location code, 0 for anywhere
        #[arg(long, default_value_t = 0)]
        location: u32,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for protocol/record output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = BandcampClient::builder();
    if let Some(ua) = &cli.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => fail(e),
    };

    match cli.command {
        Commands::Mcp => mcp::run_server(client).await,
        Commands::Search {
            query,
            item_type,
            page,
        } => match client.search(&query, &item_type, page).await {
            Ok(response) => print_record(&response, format::search_response(&response), cli.output),
            Err(e) => fail(e),
        },
        Commands::Album { url } => match client.album(&url).await {
            Ok(album) => print_record(&album, format::album(&album), cli.output),
            Err(e) => fail(e),
        },
        Commands::Artist { url } => match client.artist(&url).await {
            Ok(artist) => print_record(&artist, format::artist(&artist), cli.output),
            Err(e) => fail(e),
        },
        Commands::Track { url } => match client.track(&url).await {
            Ok(track) => print_record(&track, format::track(&track), cli.output),
            Err(e) => fail(e),
        },
        Commands::Tag { tag, sort, page } => match client.tag_page(&tag, &sort, page).await {
            Ok(tag_page) => print_record(&tag_page, format::tag_page(&tag_page), cli.output),
            Err(e) => fail(e),
        },
        Commands::Discover {
            genre,
            subgenre,
            sort,
            format: fmt,
            location,
        } => match client
            .discover(&genre, &subgenre, &sort, &fmt, location)
            .await
        {
            Ok(discover) => print_record(&discover, format::discover_page(&discover), cli.output),
            Err(e) => fail(e),
        },
    }
}

/// Print the record as text or pretty JSON, per the output flag
fn print_record<T: Serialize>(record: &T, text: String, output: OutputFormat) {
    match output {
        OutputFormat::Text => writeln_safe(&text),
        OutputFormat::Json => match serde_json::to_string_pretty(record) {
            Ok(json) => writeln_safe(&json),
            Err(e) => {
                eprintln!("Error serializing record: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn fail(e: FetchError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1)
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
