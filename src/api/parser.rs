// src/api/parser.rs
//! Response parsing using the notion-client library.
//!
//! Success bodies are decoded into notion-client types and converted to the
//! domain model; error bodies are decoded into Notion's error object, with a
//! fallback on the HTTP status when the body is not one.

use super::client::ApiResponse;
use super::responses::{NotionError, NotionPage, RetrieveBlockChildrenResponse, ToDomain};
use super::types::{PaginatedResponse, PaginationCursor};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionClientError, NotionErrorCode};
use crate::model::{ChildBlock, Page};
use reqwest::StatusCode;

/// Parse any Notion API response using notion-client types
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        NotionClientError::Deserialization {
            source: e,
            body: preview(body),
        }
        .into()
    })
}

fn parse_error_body(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return NotionClientError::NotionApi {
            status: notion_error.status,
            code: notion_error.code,
            message: notion_error.message,
            request_id: notion_error.request_id,
        }
        .into();
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Parse a page retrieval response
pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let notion_page: NotionPage = parse_api_response(result)?;
    ToDomain::to_domain(notion_page)
}

/// Parse one page of a block children listing
pub fn parse_children_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<ChildBlock>, AppError> {
    let response: RetrieveBlockChildrenResponse = parse_api_response(result)?;
    let next_cursor = response.next_cursor.clone().map(PaginationCursor::new);
    let has_more = response.has_more;

    Ok(PaginatedResponse {
        results: response.into_domain_blocks()?,
        next_cursor,
        has_more,
    })
}

/// Checks a page update response. The echoed page body is not needed.
pub fn parse_update_response(result: ApiResponse<String>) -> Result<(), AppError> {
    if result.status.is_success() {
        Ok(())
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, ParentKind, RichTextSegment};
    use pretty_assertions::assert_eq;

    const PAGE_ID: &str = "59833787-2cf9-4fdf-8782-e53db20768a5";
    const PARENT_ID: &str = "255104cd-9b4a-4a1c-9d8b-6fd2c4cc4c11";

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/test".to_string(),
        }
    }

    fn user_json() -> &'static str {
        r#"{ "object": "user", "id": "ee5f0f84-409a-440f-983a-a5315961c6e4" }"#
    }

    fn page_json(parent: &str) -> String {
        format!(
            r#"{{
                "object": "page",
                "id": "{PAGE_ID}",
                "created_time": "2024-01-05T10:00:00.000Z",
                "last_edited_time": "2024-01-06T10:00:00.000Z",
                "created_by": {user},
                "last_edited_by": {user},
                "cover": null,
                "icon": null,
                "parent": {parent},
                "archived": false,
                "in_trash": false,
                "properties": {{
                    "title": {{
                        "id": "title",
                        "type": "title",
                        "title": [
                            {{
                                "type": "text",
                                "text": {{ "content": "  Weekly ", "link": null }},
                                "annotations": {{
                                    "bold": true, "italic": false, "strikethrough": false,
                                    "underline": false, "code": false, "color": "default"
                                }},
                                "plain_text": "  Weekly ",
                                "href": null
                            }},
                            {{
                                "type": "mention",
                                "mention": {{ "type": "page", "page": {{ "id": "{PARENT_ID}" }} }},
                                "annotations": {{
                                    "bold": false, "italic": false, "strikethrough": false,
                                    "underline": false, "code": false, "color": "default"
                                }},
                                "plain_text": "Planning",
                                "href": "https://www.notion.so/255104cd9b4a4a1c9d8b6fd2c4cc4c11"
                            }}
                        ]
                    }}
                }},
                "url": "https://www.notion.so/Weekly-598337872cf94fdf8782e53db20768a5",
                "public_url": null
            }}"#,
            user = user_json(),
        )
    }

    fn block_json(id: &str, body: &str) -> String {
        format!(
            r#"{{
                "object": "block",
                "id": "{id}",
                "parent": {{ "type": "page_id", "page_id": "{PARENT_ID}" }},
                "created_time": "2024-01-05T10:00:00.000Z",
                "last_edited_time": "2024-01-05T10:00:00.000Z",
                "created_by": {user},
                "last_edited_by": {user},
                "has_children": false,
                "archived": false,
                "in_trash": false,
                {body}
            }}"#,
            user = user_json(),
        )
    }

    #[test]
    fn parses_page_with_rich_text_title() {
        let body = page_json(&format!(r#"{{ "type": "page_id", "page_id": "{PARENT_ID}" }}"#));
        let page = parse_page_response(response(StatusCode::OK, &body)).unwrap();

        assert_eq!(page.id.to_dashed(), PAGE_ID);
        assert_eq!(page.parent_kind(), ParentKind::Page);

        let segments = page.title.segments();
        assert_eq!(segments.len(), 2);
        match &segments[0] {
            RichTextSegment::Text(run) => {
                assert_eq!(run.content, "  Weekly ");
                assert_eq!(run.annotations.as_ref().unwrap()["bold"], true);
            }
            other => panic!("expected text segment, got {:?}", other),
        }
        match &segments[1] {
            RichTextSegment::Mention(run) => {
                assert_eq!(run.plain_text, "Planning");
                assert_eq!(run.mention["page"]["id"], PARENT_ID);
            }
            other => panic!("expected mention segment, got {:?}", other),
        }
    }

    #[test]
    fn parses_database_parent() {
        let body = page_json(&format!(
            r#"{{ "type": "database_id", "database_id": "{PARENT_ID}" }}"#
        ));
        let page = parse_page_response(response(StatusCode::OK, &body)).unwrap();
        assert_eq!(page.parent_kind(), ParentKind::Database);
    }

    #[test]
    fn parses_children_listing_with_cursor() {
        let child = block_json(
            "3c7bd6b0-67e4-4a3d-9c57-14e0b0d5e0a1",
            r#""type": "child_page", "child_page": { "title": "Child" }"#,
        );
        let paragraph = block_json(
            "8d1ad1a6-5f4b-4b8e-9a77-0f6a6a4b2c10",
            r#""type": "paragraph", "paragraph": { "rich_text": [], "color": "default" }"#,
        );
        let body = format!(
            r#"{{
                "object": "list",
                "results": [{child}, {paragraph}],
                "next_cursor": "8d1ad1a6-5f4b-4b8e-9a77-0f6a6a4b2c10",
                "has_more": true,
                "type": "block",
                "block": {{}}
            }}"#
        );

        let listing = parse_children_pagination(response(StatusCode::OK, &body)).unwrap();

        assert_eq!(listing.results.len(), 2);
        assert_eq!(
            listing.results[0].kind,
            BlockKind::ChildPage {
                title: "Child".to_string()
            }
        );
        assert_eq!(listing.results[1].kind, BlockKind::Other);
        assert_eq!(
            listing.continuation().map(|c| c.as_str()),
            Some("8d1ad1a6-5f4b-4b8e-9a77-0f6a6a4b2c10")
        );
    }

    #[test]
    fn api_error_body_is_classified() {
        let body = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID: abc123",
            "request_id": "req_123"
        }"#;

        let err = parse_page_response(response(StatusCode::NOT_FOUND, body)).unwrap_err();
        assert!(err.is_not_found());

        match parse_update_response(response(StatusCode::NOT_FOUND, body)) {
            Err(AppError::NotionClient(NotionClientError::NotionApi { code, .. })) => {
                assert_eq!(code, "object_not_found")
            }
            other => panic!("expected NotionApi error, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let err = parse_update_response(response(StatusCode::BAD_GATEWAY, "<html>")).unwrap_err();
        match err {
            AppError::NotionService { code, status, .. } => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
                assert_eq!(status, StatusCode::BAD_GATEWAY);
            }
            other => panic!("expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn successful_update_ignores_body() {
        assert!(parse_update_response(response(StatusCode::OK, "{}")).is_ok());
    }

    #[test]
    fn malformed_success_body_is_reported() {
        let err = parse_page_response(response(StatusCode::OK, "{ not json")).unwrap_err();
        assert!(matches!(
            err,
            AppError::NotionClient(NotionClientError::Deserialization { .. })
        ));
    }

    #[test]
    fn preview_truncates_long_bodies_on_char_boundaries() {
        let long = "é".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
