//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Deserializer, Serialize};

/// Keep "present but null" apart from "absent": absent fields stay `None`
/// through `#[serde(default)]`, present ones become `Some(..)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request to create a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub image: Option<String>,
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub author_image: Option<String>,
    pub is_favorite: Option<bool>,
}

/// Partial update of a blog post. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub heading: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub author_image: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let req: UpdateBlogRequest =
            serde_json::from_str(r#"{"image": null, "heading": "New"}"#).unwrap();

        assert_eq!(req.image, Some(None));
        assert_eq!(req.heading, Some(Some("New".to_string())));
        assert_eq!(req.description, None);
        assert_eq!(req.is_favorite, None);
    }

    #[test]
    fn test_create_accepts_camel_case() {
        let req: CreateBlogRequest = serde_json::from_str(
            r#"{"heading": "Hi", "subHeading": "sub", "authorImage": "a.png", "isFavorite": true}"#,
        )
        .unwrap();

        assert_eq!(req.sub_heading.as_deref(), Some("sub"));
        assert_eq!(req.author_image.as_deref(), Some("a.png"));
        assert_eq!(req.is_favorite, Some(true));
        assert_eq!(req.description, None);
    }
}
