use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 4] = ["name", "phone", "blood_group", "location"];

#[derive(Debug)]
pub struct Donor {
    pub name: String,
    pub phone: String,
    pub blood_group: String,
    pub location: String,
}

impl Donor {
    /// Presence is checked by key membership only: an empty or null value
    /// still counts as present, and nothing is trimmed or validated further.
    pub fn parse(payload: &Value) -> Result<Donor, String> {
        let data = payload
            .as_object()
            .ok_or_else(|| "The payload is not a JSON object".to_string())?;
        if !REQUIRED_FIELDS.iter().all(|field| data.contains_key(*field)) {
            return Err("One or more required fields are missing".to_string());
        }
        Ok(Donor {
            name: field_text(&data["name"]),
            phone: field_text(&data["phone"]),
            blood_group: field_text(&data["blood_group"]),
            location: field_text(&data["location"]),
        })
    }
}

// String values pass through verbatim, anything else keeps its JSON text.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
