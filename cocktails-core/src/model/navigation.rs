//! Listing ⇄ Detail screen state.

use tracing::debug;

use crate::model::catalog::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Listing,
    Detail(CatalogItem),
}

impl Screen {
    /// `Listing --select--> Detail`. Ignored while already showing a detail.
    pub fn select(&mut self, item: CatalogItem) -> bool {
        match self {
            Self::Listing => {
                debug!(id = item.id, "Opening detail view");
                *self = Self::Detail(item);
                true
            }
            Self::Detail(_) => false,
        }
    }

    /// `Detail --back--> Listing`. Ignored on the listing.
    pub fn back(&mut self) -> bool {
        match self {
            Self::Detail(_) => {
                *self = Self::Listing;
                true
            }
            Self::Listing => false,
        }
    }

    pub fn detail_item(&self) -> Option<&CatalogItem> {
        match self {
            Self::Detail(item) => Some(item),
            Self::Listing => None,
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cocktail(id: u64) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("Cocktail {id}"),
            category: String::new(),
            glass: String::new(),
            instructions: String::new(),
            image_url: String::new(),
            alcoholic: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_select_then_back() {
        let mut screen = Screen::default();
        assert!(screen.is_listing());

        assert!(screen.select(cocktail(1)));
        assert_eq!(screen.detail_item().map(|i| i.id), Some(1));

        assert!(screen.back());
        assert_eq!(screen, Screen::Listing);
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        let mut screen = Screen::Listing;
        assert!(!screen.back());
        assert!(screen.is_listing());

        screen.select(cocktail(1));
        assert!(!screen.select(cocktail(2)));
        assert_eq!(screen.detail_item().map(|i| i.id), Some(1));
    }
}
