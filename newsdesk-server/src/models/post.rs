//! Post document model
//!
//! `Post` is both the persisted document shape and the wire shape. The
//! sequential id is the public identity of a post, distinct from the
//! store's own document id, and is never reused after deletion.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single image reference attached to a post beyond the banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherImage {
    pub image: String,
}

/// News post document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Human-facing incrementing number, assigned from the counter
    pub sequential_id: i64,
    pub banner_image: String,
    pub title: String,
    pub content: String,
    /// Additional image references; starts empty on creation
    #[serde(default)]
    pub other_images: Vec<OtherImage>,
    #[serde(default)]
    pub image_caption: String,
    /// Display date in D-M-YYYY form, stamped at creation
    pub creation_date: String,
}

/// Fields accepted when creating a post
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub banner_image: String,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Build the stored document for a draft: sequential id from the
    /// counter, creation date stamped from `created_on`.
    pub fn from_draft(sequential_id: i64, draft: PostDraft, created_on: NaiveDate) -> Self {
        Self {
            sequential_id,
            banner_image: draft.banner_image,
            title: draft.title,
            content: draft.content,
            other_images: Vec::new(),
            image_caption: String::new(),
            creation_date: display_date(created_on),
        }
    }
}

/// Partial update for a post. Only the title, image caption, and content
/// are patchable; anything else in a request body is dropped before it
/// gets here.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub image_caption: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Apply the patch in place. A field overwrites only when present
    /// and non-empty; absent or empty fields leave the stored value
    /// unchanged.
    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = non_empty(&self.title) {
            post.title = title.to_owned();
        }
        if let Some(caption) = non_empty(&self.image_caption) {
            post.image_caption = caption.to_owned();
        }
        if let Some(content) = non_empty(&self.content) {
            post.content = content.to_owned();
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Format a date for display: numeric day-month-year, no zero padding,
/// month 1-based (e.g. "7-8-2026").
pub fn display_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::from_draft(
            1,
            PostDraft {
                banner_image: "banner.png".into(),
                title: "First".into(),
                content: "Hello".into(),
            },
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        )
    }

    #[test]
    fn display_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 9).unwrap();
        assert_eq!(display_date(date), "9-3-2021");
    }

    #[test]
    fn display_date_keeps_two_digit_components() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(display_date(date), "31-12-2026");
    }

    #[test]
    fn from_draft_starts_with_no_extra_images() {
        let post = sample_post();
        assert_eq!(post.sequential_id, 1);
        assert_eq!(post.creation_date, "7-8-2026");
        assert!(post.other_images.is_empty());
        assert!(post.image_caption.is_empty());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut post = sample_post();
        let patch = PostPatch {
            title: Some("Updated".into()),
            ..Default::default()
        };

        patch.apply(&mut post);

        assert_eq!(post.title, "Updated");
        assert_eq!(post.content, "Hello");
        assert_eq!(post.image_caption, "");
    }

    #[test]
    fn patch_treats_empty_strings_as_absent() {
        let mut post = sample_post();
        let patch = PostPatch {
            title: Some(String::new()),
            content: Some("New body".into()),
            ..Default::default()
        };

        patch.apply(&mut post);

        assert_eq!(post.title, "First");
        assert_eq!(post.content, "New body");
    }

    #[test]
    fn post_serializes_with_wire_field_names() {
        let post = sample_post();
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["sequential_id"], 1);
        assert_eq!(value["banner_image"], "banner.png");
        assert_eq!(value["other_images"], serde_json::json!([]));
        assert_eq!(value["creation_date"], "7-8-2026");
    }
}
