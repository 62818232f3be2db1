//! Filtering and ranking over the episode list.
//!
//! Both operations are plain in-memory scans; the catalog tops out at a
//! few dozen records, so there is no index and no pagination.  Everything
//! here is order-preserving: filtering keeps catalog order, ranking is a
//! stable sort.

use crate::episode::Episode;

/// Combined text + tag filter.
///
/// An episode passes when:
///   - `query`, case-insensitively, is a substring of the title OR the
///     podcast name OR the description (empty query matches everything),
///     AND
///   - `selected_tags` is empty OR the episode carries at least one of
///     the selected tags (OR across tags, not AND).
///
/// The query is trimmed before matching; the result preserves the input
/// order of `episodes`.
pub fn filter<'a>(
    episodes: &'a [Episode],
    query: &str,
    selected_tags: &[String],
) -> Vec<&'a Episode> {
    let needle = query.trim().to_lowercase();

    episodes
        .iter()
        .filter(|ep| {
            let matches_search = needle.is_empty()
                || ep.title.to_lowercase().contains(&needle)
                || ep.podcast_name.to_lowercase().contains(&needle)
                || ep.description.to_lowercase().contains(&needle);

            let matches_tags = selected_tags.is_empty() || ep.has_any_tag(selected_tags);

            matches_search && matches_tags
        })
        .collect()
}

/// Full episode set sorted descending by view count, absent views counting
/// as zero.  The sort is stable, so ties keep their input order.
pub fn rank_by_views(episodes: &[Episode]) -> Vec<&Episode> {
    let mut ranked: Vec<&Episode> = episodes.iter().collect();
    ranked.sort_by(|a, b| b.view_count().cmp(&a.view_count()));
    ranked
}

/// The three non-overlapping partitions of the ranked sequence used by the
/// popular page: #1, runner-ups #2–#4, and the rest.
#[derive(Debug, Default)]
pub struct Podium<'a> {
    pub top: Option<&'a Episode>,
    pub runner_ups: Vec<&'a Episode>,
    pub rest: Vec<&'a Episode>,
}

impl<'a> Podium<'a> {
    pub fn from_episodes(episodes: &'a [Episode]) -> Self {
        let ranked = rank_by_views(episodes);
        let mut iter = ranked.into_iter();
        let top = iter.next();
        let mut runner_ups = Vec::with_capacity(3);
        for _ in 0..3 {
            match iter.next() {
                Some(ep) => runner_ups.push(ep),
                None => break,
            }
        }
        Self {
            top,
            runner_ups,
            rest: iter.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ep(id: &str, views: Option<u64>) -> Episode {
        Episode {
            id: id.to_string(),
            views,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.episodes(), "", &[]);
        assert_eq!(result.len(), catalog.len());
        for (got, want) in result.iter().zip(catalog.episodes()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_whitespace_query_behaves_as_empty() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.episodes(), "   ", &[]);
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_nonmatching_query_returns_empty() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.episodes(), "xqzzyplugh", &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let lower = filter(catalog.episodes(), "stripe", &[]);
        let upper = filter(catalog.episodes(), "STRIPE", &[]);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, upper[0].id);
    }

    #[test]
    fn test_query_matches_description_field() {
        // "Naval" appears in the description, not the title.
        let catalog = Catalog::builtin();
        let result = filter(catalog.episodes(), "Naval", &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "naval-ravikant-wealth-happiness");
        assert_eq!(result[0].title, "How to Get Rich (Without Getting Lucky)");
    }

    #[test]
    fn test_query_matches_podcast_name_field() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.episodes(), "tim ferriss", &[]);
        let ids: Vec<_> = result.iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(
            ids,
            ["naval-ravikant-wealth-happiness", "derek-sivers-hell-yeah"]
        );
    }

    #[test]
    fn test_tag_filter_returns_tagged_episodes_in_order() {
        let catalog = Catalog::builtin();
        let selected = vec!["Startups".to_string()];
        let result = filter(catalog.episodes(), "", &selected);
        let ids: Vec<_> = result.iter().map(|ep| ep.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "naval-ravikant-wealth-happiness",
                "patrick-collison-stripe-culture",
                "peter-thiel-contrarian",
            ]
        );
        assert!(result.iter().all(|ep| ep.has_any_tag(&selected)));
    }

    #[test]
    fn test_tag_selection_is_or_not_and() {
        let catalog = Catalog::builtin();
        let selected = vec!["Art".to_string(), "Crypto".to_string()];
        let result = filter(catalog.episodes(), "", &selected);
        // No single episode carries both, but each match carries one.
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|ep| ep.has_any_tag(&selected)));
    }

    #[test]
    fn test_query_and_tags_combine_with_and() {
        let catalog = Catalog::builtin();
        let selected = vec!["Startups".to_string()];
        let result = filter(catalog.episodes(), "stripe", &selected);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "patrick-collison-stripe-culture");
    }

    #[test]
    fn test_filter_empty_dataset() {
        let result = filter(&[], "anything", &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_ranking_descends_by_views() {
        let catalog = Catalog::builtin();
        let ranked = rank_by_views(catalog.episodes());
        assert_eq!(ranked.len(), catalog.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].view_count() >= pair[1].view_count());
        }
        assert_eq!(ranked[0].id, "sam-altman-ai-future");
        assert_eq!(ranked[1].id, "peter-thiel-contrarian");
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let catalog = Catalog::builtin();
        let once: Vec<Episode> = rank_by_views(catalog.episodes())
            .into_iter()
            .cloned()
            .collect();
        let twice = rank_by_views(&once);
        for (a, b) in once.iter().zip(twice) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_ranking_ties_keep_input_order() {
        let episodes = vec![ep("a", Some(100)), ep("b", Some(100)), ep("c", Some(200))];
        let ranked = rank_by_views(&episodes);
        let ids: Vec<_> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_ranking_absent_views_sort_last() {
        let episodes = vec![ep("a", None), ep("b", Some(1))];
        let ranked = rank_by_views(&episodes);
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[1].id, "a");
    }

    #[test]
    fn test_podium_partitions_are_disjoint_and_complete() {
        let catalog = Catalog::builtin();
        let podium = Podium::from_episodes(catalog.episodes());

        let top = podium.top.unwrap();
        assert_eq!(top.id, "sam-altman-ai-future");
        assert_eq!(podium.runner_ups.len(), 3);
        assert_eq!(podium.rest.len(), catalog.len() - 4);

        let mut ids: Vec<&str> = vec![top.id.as_str()];
        ids.extend(podium.runner_ups.iter().map(|e| e.id.as_str()));
        ids.extend(podium.rest.iter().map(|e| e.id.as_str()));
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), catalog.len());
    }

    #[test]
    fn test_podium_small_catalogs() {
        let podium = Podium::from_episodes(&[]);
        assert!(podium.top.is_none());
        assert!(podium.runner_ups.is_empty());
        assert!(podium.rest.is_empty());

        let two = vec![ep("a", Some(2)), ep("b", Some(1))];
        let podium = Podium::from_episodes(&two);
        assert_eq!(podium.top.unwrap().id, "a");
        assert_eq!(podium.runner_ups.len(), 1);
        assert!(podium.rest.is_empty());
    }
}
