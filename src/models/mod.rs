pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod summary;

use serde::{Deserialize, Deserializer};

/// Interprets a boolean query parameter. Only a case-insensitive `true` is
/// true; any other present value is false. Absent means "no filter".
pub fn flag(value: Option<&str>) -> Option<bool> {
    value.map(|v| v.eq_ignore_ascii_case("true"))
}

/// Lets a patch tell "leave as is" (field missing) apart from "clear"
/// (explicit `null`). Use with `#[serde(default, deserialize_with = "nullable")]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string shared by the experience and education listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentQuery {
    pub current: Option<String>,
}

impl CurrentQuery {
    pub fn current(&self) -> Option<bool> {
        flag(self.current.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_only_literal_true() {
        assert_eq!(flag(None), None);
        assert_eq!(flag(Some("true")), Some(true));
        assert_eq!(flag(Some("TRUE")), Some(true));
        assert_eq!(flag(Some("True")), Some(true));
        assert_eq!(flag(Some("false")), Some(false));
        assert_eq!(flag(Some("1")), Some(false));
        assert_eq!(flag(Some("yes")), Some(false));
        assert_eq!(flag(Some("")), Some(false));
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        end_date: Option<Option<String>>,
    }

    #[test]
    fn nullable_separates_missing_from_null() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.end_date, None);

        let cleared: Patch = serde_json::from_str(r#"{"end_date": null}"#).unwrap();
        assert_eq!(cleared.end_date, Some(None));

        let set: Patch = serde_json::from_str(r#"{"end_date": "2024-01-01"}"#).unwrap();
        assert_eq!(set.end_date, Some(Some("2024-01-01".to_string())));
    }
}
