use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use super::not_blank;

/// Category assigned when the author does not pick one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Dream entity - a recorded dream and its stored interpretation.
///
/// `owner_id` is fixed at creation; nothing in this type mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dream {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub interpretation: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dream {
    /// Create a new, non-favorite dream owned by `owner_id`.
    pub fn new(owner_id: Uuid, draft: NewDream) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: draft.title.trim().to_string(),
            content: draft.content,
            category: category_or_default(draft.category),
            interpretation: draft.interpretation,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied fields into this record.
    pub fn apply(&mut self, changes: DreamChanges) {
        if let Some(title) = changes.title {
            self.title = title.trim().to_string();
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(category) = changes.category {
            self.category = category_or_default(Some(category));
        }
        if let Some(interpretation) = changes.interpretation {
            self.interpretation = interpretation;
        }
        if let Some(is_favorite) = changes.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = Utc::now();
    }
}

fn category_or_default(category: Option<String>) -> String {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Command to record a dream.
#[derive(Debug, Clone, Validate)]
pub struct NewDream {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    pub category: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub interpretation: String,
}

/// Partial update; every `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default, Validate)]
pub struct DreamChanges {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub content: Option<String>,
    pub category: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub interpretation: Option<String>,
    pub is_favorite: Option<bool>,
}

impl DreamChanges {
    /// Changes touching only the favorite flag.
    pub fn favorite(is_favorite: bool) -> Self {
        Self {
            is_favorite: Some(is_favorite),
            ..Default::default()
        }
    }
}

/// Optional narrowing of a listing. The default matches every dream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DreamFilter {
    pub favorite: Option<bool>,
    pub category: Option<String>,
    /// Case-insensitive substring matched against title and content.
    pub search: Option<String>,
}

impl DreamFilter {
    /// Drops blank criteria so they do not constrain the query.
    pub fn normalized(self) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            favorite: self.favorite,
            category: clean(self.category),
            search: clean(self.search),
        }
    }

    pub fn matches(&self, dream: &Dream) -> bool {
        if let Some(favorite) = self.favorite {
            if dream.is_favorite != favorite {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &dream.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !dream.title.to_lowercase().contains(&needle)
                && !dream.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}
