//! Card-data masking for log output.

use serde_json::Value;

/// Keeps the last four characters of a PAN.
fn mask_pan(pan: &str) -> String {
    let chars: Vec<char> = pan.chars().collect();
    if chars.len() > 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        "*".repeat(chars.len() - 4) + &tail
    } else {
        pan.to_string()
    }
}

fn is_pan_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k == "number" || k == "pan" || (k.contains("card") && k.contains("number"))
}

fn is_secret_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("cvc") || k.contains("cvv") || k.starts_with("encrypted") || k.contains("apikey")
}

/// Returns a copy of `v` with card numbers and secrets masked.
///
/// Encrypted values count as secrets: only their presence is logged.
pub fn secure_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(_) if is_secret_key(k) => Value::String("***".to_string()),
                    Value::String(s) if is_pan_key(k) => Value::String(mask_pan(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}
