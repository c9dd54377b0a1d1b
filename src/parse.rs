use serde_json::Value;

use crate::error::FareError;

/// Parse the decoded body and validate its top-level shape: a JSON array
/// whose every element is an object carrying a `prices` key. The records are
/// returned unmodified; anything past the `prices` key is opaque to us.
pub fn parse_records(text: &str) -> Result<Vec<Value>, FareError> {
    let data: Value =
        serde_json::from_str(text).map_err(|e| FareError::JsonParse(e.to_string()))?;

    let records = match data {
        Value::Array(records) => records,
        _ => {
            return Err(FareError::UnexpectedShape(
                "top-level value is not a list".into(),
            ))
        }
    };

    for (i, record) in records.iter().enumerate() {
        if record.get("prices").is_none() {
            return Err(FareError::UnexpectedShape(format!(
                "record {i} has no \"prices\" key"
            )));
        }
    }

    Ok(records)
}
