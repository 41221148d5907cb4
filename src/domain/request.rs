use crate::error::Result;
use serde_json::{Map, Value};

/// Flat (later nested) request payload, in arrival order.
pub type FormData = Map<String, Value>;

/// Parses a CGI query string into single-valued form data.
///
/// Pairs are URL-decoded (`+` becomes a space). The first occurrence of a key
/// wins and pairs with a blank value are dropped.
pub fn parse_query(query: &str) -> Result<FormData> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

    let mut data = FormData::new();
    for (key, value) in pairs {
        if value.is_empty() || data.contains_key(&key) {
            continue;
        }
        data.insert(key, Value::String(value));
    }
    Ok(data)
}
