//! src/model/view_filter.rs
//! ============================================================================
//! # ViewFilter and the derived-view pipeline
//!
//! [`derive_view`] maps (collection, filter, favorites) to the ordered list of
//! visible rows. It is recomputed from scratch after every relevant change and
//! returns indices into the collection rather than cloned items.

use crate::model::catalog::{CatalogItem, ItemId};

/// User-controlled filter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    pub query: String,
    pub include_alcoholic: bool,
    pub include_non_alcoholic: bool,
    pub favorites_only: bool,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            include_alcoholic: true,
            include_non_alcoholic: true,
            favorites_only: false,
        }
    }
}

impl ViewFilter {
    pub fn toggle_alcoholic(&mut self) {
        self.include_alcoholic = !self.include_alcoholic;
    }

    pub fn toggle_non_alcoholic(&mut self) {
        self.include_non_alcoholic = !self.include_non_alcoholic;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
    }

    /// Alcohol membership; both flags off rejects everything.
    fn accepts_alcohol(&self, alcoholic: bool) -> bool {
        (self.include_alcoholic && alcoholic) || (self.include_non_alcoholic && !alcoholic)
    }
}

/// Filters and ranks `collection`, favorites first.
///
/// The favorite grouping is a stable partition: inside each group, items keep
/// the order they had in `collection`.
pub fn derive_view<F>(collection: &[CatalogItem], filter: &ViewFilter, is_favorite: F) -> Vec<usize>
where
    F: Fn(ItemId) -> bool,
{
    let needle = filter.query.to_lowercase();

    let (favorites, others): (Vec<usize>, Vec<usize>) = collection
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .filter(|(_, item)| filter.accepts_alcohol(item.alcoholic))
        .filter(|(_, item)| !filter.favorites_only || is_favorite(item.id))
        .map(|(idx, _)| idx)
        .partition(|&idx| is_favorite(collection[idx].id));

    let mut visible = favorites;
    visible.extend(others);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn item(id: ItemId, name: &str, alcoholic: bool) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            category: "Cocktail".to_string(),
            glass: "Highball glass".to_string(),
            instructions: String::new(),
            image_url: String::new(),
            alcoholic,
            created_at: None,
            updated_at: None,
        }
    }

    /// A(alcoholic, fav), B(non-alcoholic), C(alcoholic)
    fn abc() -> (Vec<CatalogItem>, HashSet<ItemId>) {
        let collection = vec![item(1, "A", true), item(2, "B", false), item(3, "C", true)];
        (collection, HashSet::from([1]))
    }

    fn names(collection: &[CatalogItem], view: &[usize]) -> Vec<String> {
        view.iter().map(|&i| collection[i].name.clone()).collect()
    }

    #[test]
    fn test_defaults_show_everything_favorites_first() {
        let (collection, favs) = abc();
        let view = derive_view(&collection, &ViewFilter::default(), |id| favs.contains(&id));
        assert_eq!(names(&collection, &view), ["A", "B", "C"]);
    }

    #[test]
    fn test_favorite_moves_ahead_of_earlier_items() {
        let (collection, _) = abc();
        let favs = HashSet::from([3]);
        let view = derive_view(&collection, &ViewFilter::default(), |id| favs.contains(&id));
        assert_eq!(names(&collection, &view), ["C", "A", "B"]);
    }

    #[test]
    fn test_query_selects_single_item() {
        let (collection, favs) = abc();
        let filter = ViewFilter {
            query: "B".to_string(),
            ..ViewFilter::default()
        };
        let view = derive_view(&collection, &filter, |id| favs.contains(&id));
        assert_eq!(names(&collection, &view), ["B"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let collection = vec![
            item(1, "Mojito", true),
            item(2, "Virgin Mojito", false),
            item(3, "Margarita", true),
        ];
        let filter = ViewFilter {
            query: "mOJ".to_string(),
            ..ViewFilter::default()
        };
        let view = derive_view(&collection, &filter, |_| false);
        assert_eq!(names(&collection, &view), ["Mojito", "Virgin Mojito"]);
    }

    #[test]
    fn test_non_alcoholic_only() {
        let (collection, favs) = abc();
        let filter = ViewFilter {
            include_alcoholic: false,
            include_non_alcoholic: true,
            ..ViewFilter::default()
        };
        let view = derive_view(&collection, &filter, |id| favs.contains(&id));
        assert_eq!(names(&collection, &view), ["B"]);

        let with_query = ViewFilter {
            query: "a".to_string(),
            ..filter
        };
        assert!(derive_view(&collection, &with_query, |id| favs.contains(&id)).is_empty());
    }

    #[test]
    fn test_both_alcohol_flags_off_is_empty() {
        let (collection, favs) = abc();
        let filter = ViewFilter {
            include_alcoholic: false,
            include_non_alcoholic: false,
            ..ViewFilter::default()
        };
        assert!(derive_view(&collection, &filter, |id| favs.contains(&id)).is_empty());
    }

    #[test]
    fn test_favorites_only_without_favorites_is_empty() {
        let (collection, _) = abc();
        let filter = ViewFilter {
            favorites_only: true,
            ..ViewFilter::default()
        };
        assert!(derive_view(&collection, &filter, |_| false).is_empty());
    }

    #[test]
    fn test_favorites_only_keeps_favorites() {
        let (collection, _) = abc();
        let favs = HashSet::from([1, 3]);
        let filter = ViewFilter {
            favorites_only: true,
            ..ViewFilter::default()
        };
        let view = derive_view(&collection, &filter, |id| favs.contains(&id));
        assert_eq!(names(&collection, &view), ["A", "C"]);
    }

    fn arb_collection() -> impl Strategy<Value = Vec<CatalogItem>> {
        prop::collection::vec(("[a-cA-C]{1,4}", any::<bool>()), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, alcoholic))| item(i as ItemId, &name, alcoholic))
                .collect()
        })
    }

    fn arb_filter() -> impl Strategy<Value = ViewFilter> {
        ("[a-cA-C]{0,2}", any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(query, include_alcoholic, include_non_alcoholic, favorites_only)| ViewFilter {
                query,
                include_alcoholic,
                include_non_alcoholic,
                favorites_only,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_pipeline_is_deterministic(
            collection in arb_collection(),
            filter in arb_filter(),
            favs in prop::collection::hash_set(0u64..40, 0..20),
        ) {
            let first = derive_view(&collection, &filter, |id| favs.contains(&id));
            let second = derive_view(&collection, &filter, |id| favs.contains(&id));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_stable_partition(
            collection in arb_collection(),
            filter in arb_filter(),
            favs in prop::collection::hash_set(0u64..40, 0..20),
        ) {
            let view = derive_view(&collection, &filter, |id| favs.contains(&id));
            let is_fav = |idx: &usize| favs.contains(&collection[*idx].id);

            // favorites form a prefix
            let boundary = view.iter().take_while(|i| is_fav(i)).count();
            prop_assert!(view[boundary..].iter().all(|i| !is_fav(i)));

            // each group is in collection order
            let fav_group: Vec<usize> = view.iter().copied().filter(|i| is_fav(i)).collect();
            let other_group: Vec<usize> = view.iter().copied().filter(|i| !is_fav(i)).collect();
            prop_assert!(fav_group.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(other_group.windows(2).all(|w| w[0] < w[1]));

            // every visible row passes the filter
            let needle = filter.query.to_lowercase();
            for &i in &view {
                let it = &collection[i];
                prop_assert!(it.name.to_lowercase().contains(&needle));
                prop_assert!(filter.accepts_alcohol(it.alcoholic));
                prop_assert!(!filter.favorites_only || favs.contains(&it.id));
            }

            // and no passing row is dropped
            let passing = collection
                .iter()
                .filter(|it| it.name.to_lowercase().contains(&needle))
                .filter(|it| filter.accepts_alcohol(it.alcoholic))
                .filter(|it| !filter.favorites_only || favs.contains(&it.id))
                .count();
            prop_assert_eq!(view.len(), passing);
        }
    }
}
