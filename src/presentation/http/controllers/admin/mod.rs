// src/presentation/http/controllers/admin/mod.rs
//! JSON management console mounted under `/admin/api`.

pub mod advertisements;
pub mod articles;
pub mod auth;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod newsletter;
pub mod vlogs;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Selected rows plus the action to apply to them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkActionRequest {
    pub ids: Vec<i64>,
    pub action: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

/// Tells "field absent" (`None`) apart from "field set to null" (`Some(None)`).
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        image: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"image":null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"image":"a.png"}"#).unwrap();
        assert_eq!(absent.image, None);
        assert_eq!(null.image, Some(None));
        assert_eq!(set.image, Some(Some("a.png".into())));
    }
}
