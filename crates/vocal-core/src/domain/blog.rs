use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned identifier of a blog post.
pub type BlogId = i32;

/// Author used when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Current User";

/// Avatar used when a post has no author image.
pub const DEFAULT_AUTHOR_IMAGE: &str = "https://via.placeholder.com/40x40/cccccc/666666?text=User";

/// Minimum description length, counted in characters after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Current time at the precision the store keeps (microseconds).
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Resolve the author name, falling back to [`DEFAULT_AUTHOR`].
pub fn default_author(author: Option<String>) -> String {
    author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
}

/// Resolve the author image. Missing and empty values get [`DEFAULT_AUTHOR_IMAGE`].
pub fn default_author_image(author_image: Option<String>) -> String {
    match author_image {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_AUTHOR_IMAGE.to_string(),
    }
}

fn check_content(heading: &str, description: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if heading.trim().is_empty() {
        errors.push("Heading is required".to_string());
    }

    if description.trim().is_empty() {
        errors.push("Description is required".to_string());
    }

    // A whitespace-only description is "present" and fails both rules.
    if !description.is_empty() && description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        errors.push(format!(
            "Description must be at least {MIN_DESCRIPTION_CHARS} characters"
        ));
    }

    errors
}

/// Blog post entity as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: BlogId,
    pub image: Option<String>,
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: String,
    pub author: String,
    pub author_image: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Collect every violated content rule. Empty means valid.
    pub fn validate(&self) -> Vec<String> {
        check_content(&self.heading, &self.description)
    }

    /// Move `updated_at` forward. The result is always strictly later than
    /// the previous value, even when the clock has not advanced.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at + Duration::microseconds(1));
    }

    /// Apply a partial update, refresh `updated_at` and re-validate.
    ///
    /// On error `self` has already been modified; callers run this against
    /// a working copy and discard it when validation fails.
    pub fn revise(&mut self, changes: BlogChanges, now: DateTime<Utc>) -> Result<(), DomainError> {
        changes.apply_to(self);
        self.touch(now);

        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self, now: DateTime<Utc>) {
        self.is_favorite = !self.is_favorite;
        self.touch(now);
    }

    /// External JSON shape of the post.
    pub fn to_representation(&self) -> BlogRepresentation {
        BlogRepresentation {
            id: self.id,
            image: self.image.clone(),
            heading: self.heading.clone(),
            sub_heading: self.sub_heading.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            author_image: self.author_image.clone(),
            is_favorite: self.is_favorite,
            created_at: format_timestamp(&self.created_at),
            updated_at: format_timestamp(&self.updated_at),
        }
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Client-supplied fields of a post that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub image: Option<String>,
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: String,
    pub author: Option<String>,
    pub author_image: Option<String>,
    pub is_favorite: Option<bool>,
}

/// A post with defaults applied, ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub image: Option<String>,
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: String,
    pub author: String,
    pub author_image: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewBlogPost {
    /// Apply defaults to a draft. Both timestamps are set to `now`.
    pub fn from_draft(draft: BlogDraft, now: DateTime<Utc>) -> Self {
        Self {
            image: draft.image,
            heading: draft.heading,
            sub_heading: draft.sub_heading,
            description: draft.description,
            author: default_author(draft.author),
            author_image: default_author_image(draft.author_image),
            is_favorite: draft.is_favorite.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Vec<String> {
        check_content(&self.heading, &self.description)
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: BlogId) -> BlogPost {
        BlogPost {
            id,
            image: self.image,
            heading: self.heading,
            sub_heading: self.sub_heading,
            description: self.description,
            author: self.author,
            author_image: self.author_image,
            is_favorite: self.is_favorite,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update of a post.
///
/// The outer `Option` is `None` when the field was not supplied. The inner
/// `Option` is `None` when it was supplied as `null`.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub image: Option<Option<String>>,
    pub heading: Option<Option<String>>,
    pub sub_heading: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub author: Option<Option<String>>,
    pub author_image: Option<Option<String>>,
    pub is_favorite: Option<bool>,
}

impl BlogChanges {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
            && self.heading.is_none()
            && self.sub_heading.is_none()
            && self.description.is_none()
            && self.author.is_none()
            && self.author_image.is_none()
            && self.is_favorite.is_none()
    }

    /// Overwrite the supplied fields on `post`, leaving the rest untouched.
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(heading) = self.heading {
            post.heading = heading.unwrap_or_default();
        }
        if let Some(sub_heading) = self.sub_heading {
            post.sub_heading = sub_heading;
        }
        if let Some(description) = self.description {
            post.description = description.unwrap_or_default();
        }
        if let Some(author) = self.author {
            post.author = default_author(author);
        }
        if let Some(author_image) = self.author_image {
            post.author_image = default_author_image(author_image);
        }
        if let Some(is_favorite) = self.is_favorite {
            post.is_favorite = is_favorite;
        }
    }
}

/// JSON representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRepresentation {
    pub id: BlogId,
    pub image: Option<String>,
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: String,
    pub author: String,
    pub author_image: String,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(heading: &str, description: &str) -> BlogDraft {
        BlogDraft {
            heading: heading.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn stored(heading: &str, description: &str) -> BlogPost {
        NewBlogPost::from_draft(draft(heading, description), current_timestamp()).with_id(1)
    }

    #[test]
    fn test_valid_post_has_no_errors() {
        let post = stored("Hello", "This is long enough.");
        assert!(post.validate().is_empty());
    }

    #[test]
    fn test_short_description_rejected() {
        let post = stored("Hi", "short");
        assert_eq!(
            post.validate(),
            vec!["Description must be at least 10 characters".to_string()]
        );
    }

    #[test]
    fn test_all_violations_collected() {
        let post = stored("   ", "");
        assert_eq!(
            post.validate(),
            vec![
                "Heading is required".to_string(),
                "Description is required".to_string()
            ]
        );

        let post = stored("", "    ");
        assert_eq!(post.validate().len(), 3);
    }

    #[test]
    fn test_description_length_counts_trimmed_characters() {
        assert!(stored("h", "  123456789  ").validate().len() == 1);
        assert!(stored("h", "  1234567890  ").validate().is_empty());
        // Ten multi-byte characters are enough.
        assert!(stored("h", "éééééééééé").validate().is_empty());
    }

    #[test]
    fn test_defaults_applied_to_draft() {
        let now = current_timestamp();
        let post = NewBlogPost::from_draft(draft("Hello", "This is long enough."), now);

        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert_eq!(post.author_image, DEFAULT_AUTHOR_IMAGE);
        assert!(!post.is_favorite);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_supplied_author_image_preserved() {
        let mut d = draft("Hello", "This is long enough.");
        d.author_image = Some("https://example.com/me.png".to_string());
        let post = NewBlogPost::from_draft(d, current_timestamp());
        assert_eq!(post.author_image, "https://example.com/me.png");

        assert_eq!(default_author_image(Some(String::new())), DEFAULT_AUTHOR_IMAGE);
    }

    #[test]
    fn test_touch_is_strictly_monotonic() {
        let mut post = stored("Hello", "This is long enough.");
        let before = post.updated_at;

        // Same instant as creation: must still move forward.
        post.touch(before);
        assert!(post.updated_at > before);
        assert!(post.updated_at >= post.created_at);

        // A clock that went backwards does not rewind the timestamp.
        let later = post.updated_at;
        post.touch(before - Duration::seconds(5));
        assert!(post.updated_at > later);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut post = stored("Hello", "This is long enough.");
        let original = post.clone();

        post.toggle_favorite(current_timestamp());
        assert!(post.is_favorite);
        post.toggle_favorite(current_timestamp());

        assert_eq!(post.is_favorite, original.is_favorite);
        assert!(post.updated_at > original.updated_at);
        assert_eq!(
            BlogPost {
                updated_at: original.updated_at,
                ..post
            },
            original
        );
    }

    #[test]
    fn test_changes_only_touch_supplied_fields() {
        let mut post = stored("Hello", "This is long enough.");
        post.image = Some("cover.png".to_string());
        post.sub_heading = Some("sub".to_string());

        let changes = BlogChanges {
            heading: Some(Some("New heading".to_string())),
            image: Some(None),
            author: Some(None),
            author_image: Some(Some(String::new())),
            ..Default::default()
        };
        changes.apply_to(&mut post);

        assert_eq!(post.heading, "New heading");
        assert_eq!(post.image, None);
        assert_eq!(post.sub_heading.as_deref(), Some("sub"));
        assert_eq!(post.description, "This is long enough.");
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert_eq!(post.author_image, DEFAULT_AUTHOR_IMAGE);
    }

    #[test]
    fn test_revise_rejects_invalid_result() {
        let mut post = stored("Hello", "This is long enough.");
        let changes = BlogChanges {
            description: Some(Some("ok".to_string())),
            ..Default::default()
        };

        let err = post.revise(changes, current_timestamp()).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors, vec!["Description must be at least 10 characters"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_heading_fails_validation() {
        let mut post = stored("Hello", "This is long enough.");
        let changes = BlogChanges {
            heading: Some(None),
            ..Default::default()
        };
        assert!(post.revise(changes, current_timestamp()).is_err());
    }

    #[test]
    fn test_representation_shape() {
        let post = stored("Hello", "This is long enough.");
        let json = serde_json::to_value(post.to_representation()).unwrap();

        for key in [
            "id",
            "image",
            "heading",
            "subHeading",
            "description",
            "author",
            "authorImage",
            "isFavorite",
            "createdAt",
            "updatedAt",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json["image"].is_null());
        assert!(json["createdAt"].as_str().unwrap().ends_with('Z'));
        assert_eq!(json["createdAt"], json["updatedAt"]);
    }
}
