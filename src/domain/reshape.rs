//! Moves flat form fields into the nested objects the checkout API expects.

use super::request::FormData;
use crate::error::{RelayError, Result};
use serde_json::Value;

const AMOUNT_FIELDS: [&str; 2] = ["value", "currency"];

const CARD_FIELDS: [&str; 5] = ["number", "expiryMonth", "expiryYear", "holderName", "cvc"];

const ENCRYPTED_CARD_FIELDS: [&str; 5] = [
    "encryptedCardNumber",
    "encryptedExpiryMonth",
    "encryptedExpiryYear",
    "holderName",
    "encryptedSecurityCode",
];

/// Moves `data[target]` to `data[parent][target]`, creating `parent` if needed.
pub fn indent_field(data: &mut FormData, parent: &str, target: &str) -> Result<()> {
    let value = data
        .shift_remove(target)
        .ok_or_else(|| RelayError::MissingField(target.to_string()))?;

    let nested = data
        .entry(parent)
        .or_insert_with(|| Value::Object(FormData::new()));
    match nested.as_object_mut() {
        Some(object) => {
            object.insert(target.to_string(), value);
            Ok(())
        }
        None => Err(RelayError::NotAnObject(parent.to_string())),
    }
}

fn indent_fields(data: &mut FormData, parent: &str, targets: &[&str]) -> Result<()> {
    targets
        .iter()
        .try_for_each(|target| indent_field(data, parent, target))
}

pub fn reformat_amount(data: &mut FormData) -> Result<()> {
    indent_fields(data, "amount", &AMOUNT_FIELDS)
}

/// Classic API card shape: plain card fields under `card`.
pub fn reformat_card(data: &mut FormData) -> Result<()> {
    indent_fields(data, "card", &CARD_FIELDS)
}

/// Checkout API card shape: card fields under `paymentMethod` with type `scheme`.
///
/// Encrypted values are base64, so any `+` the browser sent unescaped came
/// through URL decoding as a space and is restored here. `holderName` is plain
/// text and keeps its spaces.
pub fn reformat_card_checkout(data: &mut FormData, encrypted: bool) -> Result<()> {
    let fields = if encrypted {
        &ENCRYPTED_CARD_FIELDS
    } else {
        &CARD_FIELDS
    };
    indent_fields(data, "paymentMethod", fields)?;

    let Some(method) = data.get_mut("paymentMethod").and_then(Value::as_object_mut) else {
        return Err(RelayError::NotAnObject("paymentMethod".to_string()));
    };
    method.insert("type".to_string(), Value::String("scheme".to_string()));

    if encrypted {
        for field in fields.iter().filter(|f| f.starts_with("encrypted")) {
            if let Some(Value::String(s)) = method.get_mut(*field) {
                *s = s.replace(' ', "+");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> FormData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_indent_creates_parent() {
        let mut data = form(json!({"value": "1000", "currency": "EUR", "reference": "r1"}));
        reformat_amount(&mut data).unwrap();

        assert_eq!(
            Value::Object(data),
            json!({"reference": "r1", "amount": {"value": "1000", "currency": "EUR"}})
        );
    }

    #[test]
    fn test_indent_into_existing_parent() {
        let mut data = form(json!({"amount": {"value": "5"}, "currency": "USD"}));
        indent_field(&mut data, "amount", "currency").unwrap();

        assert_eq!(data["amount"], json!({"value": "5", "currency": "USD"}));
        assert!(!data.contains_key("currency"));
    }

    #[test]
    fn test_missing_target() {
        let mut data = form(json!({"value": "1000"}));
        let err = reformat_amount(&mut data).unwrap_err();
        assert!(matches!(err, RelayError::MissingField(ref f) if f == "currency"));
    }

    #[test]
    fn test_parent_not_object() {
        let mut data = form(json!({"amount": "10", "value": "1000"}));
        let err = indent_field(&mut data, "amount", "value").unwrap_err();
        assert!(matches!(err, RelayError::NotAnObject(_)));
    }

    #[test]
    fn test_reformat_card() {
        let mut data = form(json!({
            "number": "4111111111111111",
            "expiryMonth": "10",
            "expiryYear": "2020",
            "holderName": "John Smith",
            "cvc": "737"
        }));
        reformat_card(&mut data).unwrap();

        assert_eq!(data.len(), 1);
        assert_eq!(data["card"]["holderName"], "John Smith");
        assert_eq!(data["card"]["cvc"], "737");
    }

    #[test]
    fn test_checkout_encrypted_restores_plus() {
        let mut data = form(json!({
            "encryptedCardNumber": "adyenjs_0_1_18$ab cd",
            "encryptedExpiryMonth": "m m",
            "encryptedExpiryYear": "y y",
            "holderName": "John Smith",
            "encryptedSecurityCode": "c c"
        }));
        reformat_card_checkout(&mut data, true).unwrap();

        let method = &data["paymentMethod"];
        assert_eq!(method["type"], "scheme");
        assert_eq!(method["encryptedCardNumber"], "adyenjs_0_1_18$ab+cd");
        assert_eq!(method["encryptedExpiryMonth"], "m+m");
        assert_eq!(method["encryptedExpiryYear"], "y+y");
        assert_eq!(method["encryptedSecurityCode"], "c+c");
        assert_eq!(method["holderName"], "John Smith");
    }

    #[test]
    fn test_checkout_plain_card() {
        let mut data = form(json!({
            "number": "4111111111111111",
            "expiryMonth": "10",
            "expiryYear": "2020",
            "holderName": "John Smith",
            "cvc": "737"
        }));
        reformat_card_checkout(&mut data, false).unwrap();

        let method = &data["paymentMethod"];
        assert_eq!(method["type"], "scheme");
        assert_eq!(method["number"], "4111111111111111");
        assert_eq!(method["holderName"], "John Smith");
    }
}
