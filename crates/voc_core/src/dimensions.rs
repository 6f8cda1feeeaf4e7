//! Decoding of the dimension list returned by the data-processing webhook.
//!
//! Depending on the deployment the list arrives wrapped in `body`, in
//! `output`, under `dimensions`, or bare. Shapes are probed in that order.

use serde_json::Value;
use voc_logging::voc_warn;

use crate::model::{is_truthy, Dimension};

/// Which part of the webhook response carried the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookShape {
    Body,
    Output,
    Dimensions,
    Raw,
}

const PROBE_ORDER: [(WebhookShape, &str); 3] = [
    (WebhookShape::Body, "body"),
    (WebhookShape::Output, "output"),
    (WebhookShape::Dimensions, "dimensions"),
];

/// Picks the first truthy wrapper field, falling back to the raw response.
pub fn resolve_payload(response: &Value) -> (WebhookShape, &Value) {
    if let Value::Object(map) = response {
        for (shape, key) in PROBE_ORDER {
            if let Some(value) = map.get(key).filter(|v| is_truthy(v)) {
                return (shape, value);
            }
        }
    }
    (WebhookShape::Raw, response)
}

/// Resolves the payload and extracts a dimension list from it.
///
/// An array payload is the list itself; an object payload contributes its
/// `dimensions` array. Anything else yields an empty list.
pub fn decode_dimensions(response: &Value) -> Vec<Dimension> {
    let (shape, payload) = resolve_payload(response);
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("dimensions") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| {
            if !item.is_object() {
                voc_warn!("Dropping non-object dimension entry from {:?} payload", shape);
                return None;
            }
            match serde_json::from_value::<Dimension>(item.clone()) {
                Ok(dimension) => Some(dimension),
                Err(err) => {
                    voc_warn!("Dropping undecodable dimension entry: {}", err);
                    None
                }
            }
        })
        .collect()
}

/// Splits comma-separated keyword text, trimming each entry.
///
/// Empty segments are kept so that text being typed (`"a,"`) survives.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}
