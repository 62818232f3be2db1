use serde::{Deserialize, Serialize};

/// One podcast-notes catalog record.
///
/// The catalog is read-only: records are defined once at load and never
/// mutated.  `date` stays a display string on purpose; the site never does
/// calendar arithmetic on it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Episode {
    /// Unique key across the catalog (also the detail-page URL segment).
    pub id: String,
    pub title: String,
    /// Name of the source program.
    pub podcast_name: String,
    /// Logo URI for the source program.
    pub podcast_logo: String,
    /// Publish date as a display string, e.g. "December 4, 2024".
    pub date: String,
    /// Estimated read time in minutes.  Positive in well-formed data;
    /// a zero is flagged at catalog load.
    pub read_time: u32,
    pub description: String,
    /// Ordered list of key takeaways.
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    /// Free-text topical labels.  Display labels only; no case or
    /// whitespace normalization is applied anywhere.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Editorial flag marking an episode for promotion.
    #[serde(default)]
    pub featured: bool,
    /// View count, absent for episodes that predate view tracking.
    #[serde(default)]
    pub views: Option<u64>,
}

impl Episode {
    /// View count with absent treated as zero, the ranking key.
    pub fn view_count(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    /// True when any of this episode's tags appears in `selected`.
    /// Comparison is exact: tags are display labels, not normalized keys.
    pub fn has_any_tag(&self, selected: &[String]) -> bool {
        self.tags.iter().any(|t| selected.contains(t))
    }
}
