//! MCP (Model Context Protocol) server implementation

use bandkit::{format, BandcampClient, DiscoverParams, SearchParams, TagParams, UrlParams};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

const SEARCH_DESCRIPTION: &str = "Search Bandcamp for albums, artists, tracks, or labels. Returns titles, URLs, and basic info.";
const ALBUM_DESCRIPTION: &str = "Get detailed album information including tracklist, tags, credits, and pricing from a Bandcamp album URL.";
const ARTIST_DESCRIPTION: &str = "Get artist/label information including bio, location, discography, and external links from a Bandcamp artist page.";
const TRACK_DESCRIPTION: &str =
    "Get detailed track information including lyrics (if available), tags, and album association.";
const TAG_DESCRIPTION: &str =
    "Browse albums by tag/genre on Bandcamp. Great for discovering music in specific genres.";
const DISCOVER_DESCRIPTION: &str =
    "Discover new music on Bandcamp's discovery page. Filter by genre, format, and sort order.";

/// JSON-RPC 2.0 request
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Successful tool call carrying a text payload
    fn text_content(id: Option<Value>, text: String) -> Self {
        Self::success(
            id,
            json!({
                "content": [{
                    "type": "text",
                    "text": text
                }]
            }),
        )
    }

    /// Tool-level failure: still a protocol success, flagged for the caller
    fn tool_error(id: Option<Value>, message: String) -> Self {
        Self::success(
            id,
            json!({
                "content": [{
                    "type": "text",
                    "text": format!("Error: {}", message)
                }],
                "isError": true
            }),
        )
    }
}

/// One entry for the tools/list response
fn tool_entry<T: JsonSchema>(name: &str, description: &str) -> Value {
    let schema = serde_json::to_value(schema_for!(T)).unwrap_or_default();
    json!({
        "name": name,
        "description": description,
        "inputSchema": schema
    })
}

/// MCP Server implementation
struct McpServer {
    client: BandcampClient,
}

impl McpServer {
    fn new(client: BandcampClient) -> Self {
        Self { client }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            "notifications/initialized" => {
                // This is a notification, no response needed
                JsonRpcResponse::success(request.id, json!(null))
            }
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "bandkit",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "tools": [
                    tool_entry::<SearchParams>("bandcamp_search", SEARCH_DESCRIPTION),
                    tool_entry::<UrlParams>("bandcamp_get_album", ALBUM_DESCRIPTION),
                    tool_entry::<UrlParams>("bandcamp_get_artist", ARTIST_DESCRIPTION),
                    tool_entry::<UrlParams>("bandcamp_get_track", TRACK_DESCRIPTION),
                    tool_entry::<TagParams>("bandcamp_browse_tag", TAG_DESCRIPTION),
                    tool_entry::<DiscoverParams>("bandcamp_discover", DISCOVER_DESCRIPTION),
                ]
            }),
        )
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match tool_name.as_str() {
            "bandcamp_search" => {
                let args: SearchParams = match serde_json::from_value(arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e))
                    }
                };
                match self
                    .client
                    .search(&args.query, &args.item_type, args.page)
                    .await
                {
                    Ok(response) => {
                        JsonRpcResponse::text_content(id, format::search_response(&response))
                    }
                    Err(e) => JsonRpcResponse::tool_error(id, e.to_string()),
                }
            }
            "bandcamp_get_album" => {
                let args: UrlParams = match serde_json::from_value(arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e))
                    }
                };
                match self.client.album(&args.url).await {
                    Ok(album) => JsonRpcResponse::text_content(id, format::album(&album)),
                    Err(e) => JsonRpcResponse::tool_error(id, e.to_string()),
                }
            }
            "bandcamp_get_artist" => {
                let args: UrlParams = match serde_json::from_value(arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e))
                    }
                };
                match self.client.artist(&args.url).await {
                    Ok(artist) => JsonRpcResponse::text_content(id, format::artist(&artist)),
                    Err(e) => JsonRpcResponse::tool_error(id, e.to_string()),
                }
            }
            "bandcamp_get_track" => {
                let args: UrlParams = match serde_json::from_value(arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e))
                    }
                };
                match self.client.track(&args.url).await {
                    Ok(track) => JsonRpcResponse::text_content(id, format::track(&track)),
                    Err(e) => JsonRpcResponse::tool_error(id, e.to_string()),
                }
            }
            "bandcamp_browse_tag" => {
                let args: TagParams = match serde_json::from_value(arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e))
                    }
                };
                match self.client.tag_page(&args.tag, &args.sort, args.page).await {
                    Ok(page) => JsonRpcResponse::text_content(id, format::tag_page(&page)),
                    Err(e) => JsonRpcResponse::tool_error(id, e.to_string()),
                }
            }
            "bandcamp_discover" => {
                let args: DiscoverParams = match serde_json::from_value(arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        return JsonRpcResponse::error(id, -32602, format!("Invalid arguments: {}", e))
                    }
                };
                match self
                    .client
                    .discover(
                        &args.genre,
                        &args.subgenre,
                        &args.sort,
                        &args.format,
                        args.location,
                    )
                    .await
                {
                    Ok(page) => JsonRpcResponse::text_content(id, format::discover_page(&page)),
                    Err(e) => JsonRpcResponse::tool_error(id, e.to_string()),
                }
            }
            _ => JsonRpcResponse::error(id, -32602, format!("Unknown tool: {}", tool_name)),
        }
    }
}

/// Run the MCP server over stdio
pub async fn run_server(client: BandcampClient) {
    tracing::info!("MCP server listening on stdio");

    let server = McpServer::new(client);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                continue;
            }
        };

        if line.is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                let response = JsonRpcResponse::error(None, -32700, format!("Parse error: {}", e));
                let json = serde_json::to_string(&response).unwrap_or_default();
                let _ = writeln!(stdout, "{}", json);
                let _ = stdout.flush();
                continue;
            }
        };

        // Skip notifications (no id)
        if request.id.is_none() && request.method.starts_with("notifications/") {
            continue;
        }

        let response = server.handle_request(request).await;
        let json = serde_json::to_string(&response).unwrap_or_default();
        let _ = writeln!(stdout, "{}", json);
        let _ = stdout.flush();
    }
}
