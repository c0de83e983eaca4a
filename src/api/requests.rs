// src/api/requests.rs
//! Request bodies sent to the Notion API.

use crate::model::{RichTextSegment, Title};
use serde_json::{json, Value};

/// Body of `PATCH pages/{id}` replacing the page title.
///
/// `title` is the fixed property id of a page's title property, so this
/// works regardless of what the property is named.
pub fn title_update_body(title: &Title) -> Value {
    let rich_text: Vec<Value> = title.segments().iter().map(segment_to_wire).collect();
    json!({
        "properties": {
            "title": { "title": rich_text }
        }
    })
}

fn segment_to_wire(segment: &RichTextSegment) -> Value {
    let (mut value, annotations) = match segment {
        RichTextSegment::Text(run) => (
            json!({
                "type": "text",
                "text": {
                    "content": run.content,
                    "link": run.link.as_ref().map(|link| json!({ "url": link.url })),
                },
            }),
            &run.annotations,
        ),
        RichTextSegment::Mention(run) => (
            json!({ "type": "mention", "mention": run.mention }),
            &run.annotations,
        ),
        RichTextSegment::Equation(run) => (
            json!({ "type": "equation", "equation": { "expression": run.expression } }),
            &run.annotations,
        ),
    };

    if let Some(annotations) = annotations {
        value["annotations"] = annotations.clone();
    }
    value
}
