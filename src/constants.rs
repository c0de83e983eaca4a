// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many child blocks the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while walking a subtree.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// API version sent in the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Default REST endpoint, overridable through `NOTION_API_BASE_URL`.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Environment variable holding the integration token.
pub const API_KEY_ENV_VAR: &str = "NOTION_API_KEY";

/// Environment variable overriding the REST endpoint.
pub const API_BASE_URL_ENV_VAR: &str = "NOTION_API_BASE_URL";

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Placed between title segments when a title is echoed in progress output.
pub const TITLE_SEGMENT_SEPARATOR: &str = "•";

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Process exit codes
// ---------------------------------------------------------------------------

/// Missing page argument or unusable configuration.
pub const EXIT_USAGE: u8 = 1;

/// The root page could not be resolved, or a single-page trim failed.
pub const EXIT_TRIM_FAILED: u8 = 2;
