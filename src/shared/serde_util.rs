//! Custom serde helpers for backend wire formats.

/// Deserializes a backend timestamp string into KST wall-clock
/// [`NaiveDateTime`](chrono::NaiveDateTime).
///
/// Accepts every format [`parse_backend_timestamp`](crate::shared::time::parse_backend_timestamp)
/// understands. Serializes back as ISO 8601 without an offset.
pub mod backend_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        crate::shared::time::parse_backend_timestamp(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", raw)))
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

/// Same as [`backend_datetime`] for nullable fields. Use with `#[serde(default)]`.
pub mod option_backend_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => crate::shared::time::parse_backend_timestamp(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s))),
        }
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }
}

/// Deserializes `null` as the type's default. Use with `#[serde(default)]`
/// for collections the backend sometimes sends as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(with = "super::backend_datetime")]
        created_at: NaiveDateTime,
        #[serde(default, with = "super::option_backend_datetime")]
        refund_at: Option<NaiveDateTime>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_optional_fields_absent_or_null() {
        let s: Stamped =
            serde_json::from_str(r#"{"created_at":"2025-06-01T10:00:00","refund_at":null,"tags":null}"#)
                .unwrap();
        assert_eq!(s.created_at.format("%Y.%m.%d").to_string(), "2025.06.01");
        assert!(s.refund_at.is_none());
        assert!(s.tags.is_empty());

        let s: Stamped = serde_json::from_str(r#"{"created_at":"2025-06-01"}"#).unwrap();
        assert!(s.refund_at.is_none());
    }

    #[test]
    fn test_optional_field_present() {
        let s: Stamped = serde_json::from_str(
            r#"{"created_at":"2025-06-01T10:00:00","refund_at":"2025-06-05T09:30:00"}"#,
        )
        .unwrap();
        assert_eq!(
            s.refund_at.unwrap().format("%Y.%m.%d").to_string(),
            "2025.06.05"
        );
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let r = serde_json::from_str::<Stamped>(r#"{"created_at":"not a date"}"#);
        assert!(r.is_err());
    }
}
