use chrono::NaiveDate;

/// Wire and `<input type="date">` representation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts `YYYY-MM-DD` as well as full ISO-8601 timestamps, keeping only the
/// calendar date.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    let head = trimmed.get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

pub fn normalize_date_input(raw: &str) -> Option<String> {
    parse_api_date(raw).map(format_date)
}

pub mod serde_opt_date {
    use super::{format_date, parse_api_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|value| {
            let parsed = parse_api_date(value);
            if parsed.is_none() {
                log::warn!("Ignoring unparseable date value {:?}", value);
            }
            parsed
        }))
    }
}
