use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Sentinel author filter value meaning "any author".
pub const NO_AUTHOR_FILTER: i64 = -1;

/// Ad entity - a classified advertisement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ad {
    /// Unique identifier, assigned by the repository
    pub id: i64,
    /// Short headline, 1-100 characters
    pub title: String,
    /// Body, 1-500 characters
    pub text: String,
    /// Owning user; immutable after creation
    pub author_id: i64,
    /// Whether the ad is publicly listed
    pub published: bool,
    /// Creation timestamp, set once
    pub create_date: DateTime<Utc>,
    /// Last mutation timestamp, refreshed on every change
    pub update_date: DateTime<Utc>,
}

/// DTO for creating a new ad
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAd {
    pub title: String,
    pub text: String,
    #[serde(rename = "user_id")]
    pub author_id: i64,
}

/// DTO for replacing an ad's title and text
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAd {
    #[serde(rename = "user_id")]
    pub author_id: i64,
    pub title: String,
    pub text: String,
}

/// DTO for flipping an ad's publish flag
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeAdStatus {
    #[serde(rename = "user_id")]
    pub author_id: i64,
    pub published: bool,
}

/// Query filters for listing ads.
///
/// Every dimension except `published` is optional; `published` defaults to
/// `true` so that only published ads are publicly listed unless the caller
/// asks otherwise.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct AdFilter {
    /// Restrict to one author; `-1` means "any author"
    #[serde(rename = "user_id", default = "no_author_filter")]
    pub author_id: i64,
    /// Restrict by publish state; always applied
    #[serde(default = "published_default")]
    pub published: bool,
    /// Restrict to ads created at this instant (formatter precision)
    #[serde(default)]
    pub create_date: Option<DateTime<Utc>>,
    /// Case-insensitive exact title match; empty means "any title"
    #[serde(default)]
    pub title: String,
}

fn no_author_filter() -> i64 {
    NO_AUTHOR_FILTER
}

fn published_default() -> bool {
    true
}

impl Default for AdFilter {
    fn default() -> Self {
        Self {
            author_id: NO_AUTHOR_FILTER,
            published: true,
            create_date: None,
            title: String::new(),
        }
    }
}

/// A boolean condition over an ad, AND-composed by the repository scan.
pub type AdPredicate = Box<dyn Fn(&Ad) -> bool + Send + Sync>;
