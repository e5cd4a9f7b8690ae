use crate::keyword_aggregation::domain::{
    CategoryKeywords, CategoryRecord, ComponentId, ComponentRecord, KeywordCount,
};
use std::collections::{BTreeMap, HashSet};

/// KeywordCounter service for counting distinct owning components per keyword
///
/// Pure domain logic: no I/O, works only on records already fetched from the store.
pub struct KeywordCounter;

impl KeywordCounter {
    /// Counts, for every keyword, how many distinct visible components list it
    ///
    /// Hidden components are skipped even if the store already filtered them out.
    /// Repeats of a keyword inside one component, and repeats of the same
    /// component id, contribute once.
    ///
    /// # Returns
    /// Keyword counts in ascending (byte-wise, case-sensitive) keyword order
    pub fn aggregate(components: &[ComponentRecord]) -> Vec<KeywordCount> {
        let mut owners: BTreeMap<&str, HashSet<&ComponentId>> = BTreeMap::new();

        for component in components.iter().filter(|c| c.is_visible()) {
            for keyword in component.keywords() {
                owners
                    .entry(keyword.as_str())
                    .or_default()
                    .insert(component.id());
            }
        }

        owners
            .into_iter()
            .map(|(keyword, ids)| KeywordCount::new(keyword, ids.len()))
            .collect()
    }

    /// Aggregates each category separately, dropping categories left without keywords
    ///
    /// Category order is the order the store returned them in.
    pub fn group_by_category(categories: &[CategoryRecord]) -> Vec<CategoryKeywords> {
        categories
            .iter()
            .filter_map(|category| {
                let keywords = Self::aggregate(category.components());
                if keywords.is_empty() {
                    None
                } else {
                    Some(CategoryKeywords::new(category.name(), keywords))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword_aggregation::domain::CategorySlug;

    fn component(id: &str, show: bool, keywords: &[&str]) -> ComponentRecord {
        ComponentRecord::new(
            ComponentId::new(id).unwrap(),
            show,
            keywords.iter().map(|k| k.to_string()).collect(),
        )
    }

    fn category(name: &str, slug: &str, components: Vec<ComponentRecord>) -> CategoryRecord {
        CategoryRecord::new(
            name.to_string(),
            CategorySlug::new(slug).unwrap(),
            components,
        )
    }

    fn pairs(counts: &[KeywordCount]) -> Vec<(&str, usize)> {
        counts.iter().map(|kc| (kc.keyword(), kc.count())).collect()
    }

    #[test]
    fn test_aggregate_dedups_within_component() {
        let counts = KeywordCounter::aggregate(&[component("c1", true, &["a", "a", "b"])]);
        assert_eq!(pairs(&counts), vec![("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_aggregate_counts_distinct_components() {
        let counts = KeywordCounter::aggregate(&[
            component("c1", true, &["x"]),
            component("c2", true, &["x"]),
        ]);
        assert_eq!(pairs(&counts), vec![("x", 2)]);
    }

    #[test]
    fn test_aggregate_repeated_keyword_on_third_component() {
        let counts = KeywordCounter::aggregate(&[
            component("c1", true, &["x"]),
            component("c2", true, &["x", "x"]),
        ]);
        assert_eq!(pairs(&counts), vec![("x", 2)]);
    }

    #[test]
    fn test_aggregate_same_component_listed_twice() {
        let counts = KeywordCounter::aggregate(&[
            component("c1", true, &["x"]),
            component("c1", true, &["x"]),
        ]);
        assert_eq!(pairs(&counts), vec![("x", 1)]);
    }

    #[test]
    fn test_aggregate_skips_hidden_components() {
        let counts = KeywordCounter::aggregate(&[
            component("c1", true, &["shared"]),
            component("c2", false, &["shared", "hidden-only"]),
        ]);
        assert_eq!(pairs(&counts), vec![("shared", 1)]);
    }

    #[test]
    fn test_aggregate_sorts_ascending() {
        let counts = KeywordCounter::aggregate(&[
            component("c1", true, &["zeta"]),
            component("c2", true, &["alpha", "mid"]),
        ]);
        assert_eq!(pairs(&counts), vec![("alpha", 1), ("mid", 1), ("zeta", 1)]);
    }

    #[test]
    fn test_aggregate_sort_is_case_sensitive() {
        let counts = KeywordCounter::aggregate(&[component("c1", true, &["beta", "Beta", "alpha"])]);
        let keywords: Vec<&str> = counts.iter().map(|kc| kc.keyword()).collect();
        assert_eq!(keywords, vec!["Beta", "alpha", "beta"]);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(KeywordCounter::aggregate(&[]).is_empty());
        assert!(KeywordCounter::aggregate(&[component("c1", true, &[])]).is_empty());
    }

    #[test]
    fn test_group_by_category_drops_empty_categories() {
        let categories = vec![
            category("Navbars", "navbars", vec![component("n1", false, &["sticky"])]),
            category("Buttons", "buttons", vec![component("b1", true, &["flat"])]),
            category("Forms", "forms", vec![component("f1", true, &[])]),
            category("Empty", "empty", vec![]),
        ];

        let grouped = KeywordCounter::group_by_category(&categories);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].category(), "Buttons");
        assert_eq!(pairs(grouped[0].keywords()), vec![("flat", 1)]);
    }

    #[test]
    fn test_group_by_category_preserves_store_order() {
        let categories = vec![
            category("Pricing", "pricing", vec![component("p1", true, &["cards"])]),
            category("Buttons", "buttons", vec![component("b1", true, &["flat"])]),
            category("Hero", "hero", vec![component("h1", true, &["gradient"])]),
        ];

        let names: Vec<String> = KeywordCounter::group_by_category(&categories)
            .iter()
            .map(|ck| ck.category().to_string())
            .collect();
        assert_eq!(names, vec!["Pricing", "Buttons", "Hero"]);
    }

    #[test]
    fn test_group_by_category_scopes_counts_per_category() {
        let categories = vec![
            category(
                "Buttons",
                "buttons",
                vec![
                    component("b1", true, &["animated", "rounded"]),
                    component("b2", true, &["rounded", "flat"]),
                ],
            ),
            category("Cards", "cards", vec![component("c1", true, &["rounded"])]),
        ];

        let grouped = KeywordCounter::group_by_category(&categories);
        assert_eq!(
            pairs(grouped[0].keywords()),
            vec![("animated", 1), ("flat", 1), ("rounded", 2)]
        );
        assert_eq!(pairs(grouped[1].keywords()), vec![("rounded", 1)]);
    }

    #[test]
    fn test_aggregate_counts_empty_keyword() {
        let components = vec![
            component("c1", true, &["", "flat"]),
            component("c2", true, &[""]),
        ];

        let result = KeywordCounter::aggregate(&components);
        assert_eq!(pairs(&result), vec![("", 2), ("flat", 1)]);
    }
}
