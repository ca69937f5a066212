//! # Response Renderer
//!
//! Defensive decoding of the response body into a tagged payload union,
//! then fixed-format rendering. Rendering never fails: a body that does
//! not decode yields the no-data line, unexpected shapes fall through to
//! the opaque variant, and missing fields print as literal markers.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Marker printed in place of a missing field
const UNDEFINED: &str = "undefined";

/// Maximum number of characters of the description shown in the detail block
const DESCRIPTION_LIMIT: usize = 100;

/// A product record as the catalog returns it.
///
/// Every field is optional; absence is tolerated, not an error. Ids and
/// prices stay as raw JSON values so that whatever the catalog sends is
/// shown as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub price: Option<Value>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// The decoded response payload, classified in priority order.
#[derive(Debug, Clone)]
pub enum DecodedPayload {
    /// A sequence of product-shaped records
    ProductList(Vec<Product>),
    /// A single record carrying a title
    Detail(Product),
    /// A single record carrying an id but no title
    Deletion { id: Value },
    /// Anything else that decoded successfully
    Opaque(Value),
}

/// Decode the raw body text. An empty or non-JSON body yields `None`,
/// never an error.
pub fn decode(body: &str) -> Option<DecodedPayload> {
    let value: Value = serde_json::from_str(body).ok()?;
    Some(classify(value))
}

fn classify(value: Value) -> DecodedPayload {
    match value {
        Value::Array(items) => DecodedPayload::ProductList(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        Value::Object(map) => classify_record(map),
        other => DecodedPayload::Opaque(other),
    }
}

fn classify_record(map: Map<String, Value>) -> DecodedPayload {
    match serde_json::from_value::<Product>(Value::Object(map.clone())) {
        Ok(product) if product.title.is_some() => return DecodedPayload::Detail(product),
        Ok(Product { id: Some(id), .. }) => return DecodedPayload::Deletion { id },
        Ok(_) => {}
        Err(_) => {
            // A record whose string fields defeat the lenient decode is
            // still a deletion ack if it carries an id and no title.
            if map.get("title").is_none() {
                if let Some(id) = map.get("id") {
                    return DecodedPayload::Deletion { id: id.clone() };
                }
            }
        }
    }
    DecodedPayload::Opaque(Value::Object(map))
}

/// Render the payload as the lines to print, in order.
pub fn render(payload: Option<DecodedPayload>) -> Vec<String> {
    let Some(payload) = payload else {
        return vec!["The action completed, but there is no data to display.".to_string()];
    };

    match payload {
        DecodedPayload::ProductList(products) => {
            let mut lines = vec!["Products received:".to_string()];
            for product in &products {
                lines.push(format!(
                    "[{}] {} - ${}",
                    value_or_undefined(&product.id),
                    product.title.as_deref().unwrap_or(UNDEFINED),
                    value_or_undefined(&product.price),
                ));
            }
            lines
        }
        DecodedPayload::Detail(product) => {
            let mut lines = vec![
                format!("Product #{}", value_or_undefined(&product.id)),
                format!("Title: {}", product.title.as_deref().unwrap_or(UNDEFINED)),
                format!("Price: ${}", value_or_undefined(&product.price)),
                format!(
                    "Category: {}",
                    product.category.as_deref().unwrap_or(UNDEFINED)
                ),
            ];
            if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
                // The ellipsis is appended even when nothing was cut.
                lines.push(format!(
                    "Description: {}...",
                    truncate_chars(description, DESCRIPTION_LIMIT)
                ));
            }
            lines
        }
        DecodedPayload::Deletion { id } => {
            vec![format!(
                "Product with ID {} deleted (simulated by the API).",
                scalar(&id)
            )]
        }
        DecodedPayload::Opaque(value) => vec![format!("Processed response: {value}")],
    }
}

/// Decode and render in one step.
pub fn render_body(body: &str) -> Vec<String> {
    render(decode(body))
}

/// Print a scalar the way a human wrote it: strings without quotes,
/// everything else in its JSON form.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_or_undefined(field: &Option<Value>) -> String {
    field
        .as_ref()
        .map(scalar)
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// Truncate on char boundaries, not bytes.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
