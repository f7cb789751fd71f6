//! Conditionally projected response fields.

use serde::{Serialize, Serializer};

/// A response field that is only present when its source relation was loaded.
///
/// `Omitted` is dropped from the serialized payload entirely (pair it with
/// `#[serde(skip_serializing_if = "Field::is_omitted")]`, or `flatten`).
/// A loaded-but-empty relation is `Present` with a zero or empty value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Field<T> {
    #[default]
    Omitted,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Field::Omitted)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Omitted => Field::Omitted,
            Field::Present(value) => Field::Present(f(value)),
        }
    }

    /// Converts into an `Option`, losing the omitted/present distinction.
    pub fn present(self) -> Option<T> {
        match self {
            Field::Omitted => None,
            Field::Present(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Omitted, Field::Present)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Omitted => serializer.serialize_none(),
            Field::Present(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        id: u32,
        #[serde(skip_serializing_if = "Field::is_omitted")]
        tags: Field<Vec<String>>,
    }

    #[test]
    fn omitted_field_is_absent() {
        let json = serde_json::to_value(Payload {
            id: 1,
            tags: Field::Omitted,
        })
        .unwrap();
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn empty_present_field_is_serialized() {
        let json = serde_json::to_value(Payload {
            id: 1,
            tags: Field::Present(Vec::new()),
        })
        .unwrap();
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Field::from(Some(3)), Field::Present(3));
        assert_eq!(Field::<u8>::from(None), Field::Omitted);
        assert_eq!(Field::Present(2).map(|v| v * 2).present(), Some(4));
        assert!(Field::<u8>::Omitted.map(|v| v + 1).is_omitted());
    }
}
