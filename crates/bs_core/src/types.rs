use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::format;

/// One search hit or random pick as returned by the backend.
///
/// Every field is optional: `/random` answers `{}` on an empty index and
/// the indexer writes `null` or `""` for missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub blog_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub blog_url: Option<String>,
}

impl Article {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(format::UNTITLED)
    }

    pub fn display_link(&self) -> &str {
        self.link.as_deref().unwrap_or(format::NO_LINK)
    }

    pub fn display_blog(&self) -> &str {
        self.blog_name.as_deref().unwrap_or(format::UNKNOWN_BLOG)
    }

    pub fn display_summary(&self) -> String {
        format::truncate_summary(self.summary.as_deref())
    }

    pub fn display_date(&self) -> String {
        format::format_published(self.published.as_deref())
    }

    /// The "blog | date" line under each card.
    pub fn meta_line(&self) -> String {
        format!("{} | {}", self.display_blog(), self.display_date())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_articles: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_blogs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles_per_blog: Option<BTreeMap<String, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Per-blog entry of the `/blogs` listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogInfo {
    pub count: u64,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
}

/// Blog listing keyed (and therefore ordered) by blog name.
pub type BlogListing = BTreeMap<String, BlogInfo>;

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
