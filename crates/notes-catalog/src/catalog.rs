//! The episode store: a fixed list of records plus its derived views.
//!
//! The catalog is loaded once (builtin TOML or a user-supplied file) and
//! never mutated afterwards.  `featured`, `recent` and `popular` are
//! recomputed from the full list on demand; with a dozen records there is
//! nothing worth caching.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::episode::Episode;
use crate::query;

/// How many episodes the "recent" strip shows.
pub const RECENT_COUNT: usize = 8;
/// How many episodes the "popular" strip shows.
pub const POPULAR_COUNT: usize = 6;

/// Read-only episode collection, in editorial (catalog) order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    episodes: Vec<Episode>,
}

/// Intermediate struct matching the TOML `[[episode]]` tables.  Kept
/// separate from `Episode` so the file schema can diverge from the wire
/// struct without breaking either.
#[derive(Debug, serde::Deserialize)]
struct TomlEpisodeFile {
    episode: Vec<Episode>,
}

impl Catalog {
    /// The builtin twelve-record dataset shipped with the crate.
    pub fn builtin() -> Self {
        // The embedded file is checked by tests; a parse failure here is a
        // build defect, not a runtime condition.
        Self::from_toml_str(include_str!("../data/episodes.toml"))
            .expect("builtin episodes.toml is well-formed")
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: TomlEpisodeFile = toml::from_str(content)?;
        Ok(Self::new(file.episode))
    }

    /// Load a catalog from a user-supplied TOML file.
    pub fn load_from_toml(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!("Loaded {} episodes from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn new(episodes: Vec<Episode>) -> Self {
        // Ids are supposed to be unique but nothing upstream enforces it.
        // A duplicate would make the detail route resolve to the first hit,
        // so flag it loudly and keep going.
        let mut seen = HashSet::new();
        for ep in &episodes {
            if !seen.insert(ep.id.as_str()) {
                warn!("duplicate episode id in catalog: {}", ep.id);
            }
            if ep.read_time == 0 {
                warn!("episode {} has a zero read_time", ep.id);
            }
        }
        Self { episodes }
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Lookup by id.  A miss is a normal `None`; it drives the
    /// not-found page, never an error path.
    pub fn get(&self, id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.id == id)
    }

    /// All episodes with the featured flag, catalog order.
    pub fn featured(&self) -> Vec<&Episode> {
        self.episodes.iter().filter(|ep| ep.featured).collect()
    }

    /// First `RECENT_COUNT` episodes in catalog order.  Catalog order is
    /// assumed newest-first; nothing verifies the dates.
    pub fn recent(&self) -> Vec<&Episode> {
        self.episodes.iter().take(RECENT_COUNT).collect()
    }

    /// Top `POPULAR_COUNT` of the full view-count ranking.
    pub fn popular(&self) -> Vec<&Episode> {
        let mut ranked = query::rank_by_views(&self.episodes);
        ranked.truncate(POPULAR_COUNT);
        ranked
    }

    /// Distinct tags in first-appearance order (the filter chips on the
    /// episodes page).
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for ep in &self.episodes {
            for tag in &ep.tags {
                if seen.insert(tag.as_str()) {
                    tags.push(tag.as_str());
                }
            }
        }
        tags
    }
}
