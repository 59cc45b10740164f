// SPDX-License-Identifier: MPL-2.0
//! Product catalog filtering by category and search term.

use crate::config::REVEAL_STAGGER_MS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Meat categories sold by the shop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Beef,
    Chicken,
    Lamb,
    Pork,
    Goat,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Beef,
        Category::Chicken,
        Category::Lamb,
        Category::Pork,
        Category::Goat,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beef => "beef",
            Category::Chicken => "chicken",
            Category::Lamb => "lamb",
            Category::Pork => "pork",
            Category::Goat => "goat",
        }
    }

    /// i18n key of the filter button label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Beef => "category-beef",
            Category::Chicken => "category-chicken",
            Category::Lamb => "category-lamb",
            Category::Pork => "category-pork",
            Category::Goat => "category-goat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

/// Category selection of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a `#hash`-style anchor. Unknown anchors yield `None`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        anchor
            .trim_start_matches('#')
            .parse::<Category>()
            .ok()
            .map(CategoryFilter::Only)
    }

    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// The searchable part of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    pub name: String,
    pub description: String,
    pub category: Category,
}

/// Visibility of one product after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Shown, fading in after `delay`.
    Shown { delay: Duration },
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    category: CategoryFilter,
    search_term: String,
}

impl ProductFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Stores the search input, lowercased and trimmed.
    pub fn set_search(&mut self, input: &str) {
        self.search_term = input.trim().to_lowercase();
    }

    #[must_use]
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn matches(&self, product: &ProductInfo) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }
        self.search_term.is_empty()
            || product.name.to_lowercase().contains(&self.search_term)
            || product.description.to_lowercase().contains(&self.search_term)
    }

    /// Visibility of every product, in order. Shown products are staggered
    /// by their position among the shown ones.
    #[must_use]
    pub fn apply<'a, I>(&self, products: I) -> Vec<Visibility>
    where
        I: IntoIterator<Item = &'a ProductInfo>,
    {
        let mut shown = 0u64;
        products
            .into_iter()
            .map(|product| {
                if self.matches(product) {
                    let delay = Duration::from_millis(shown * REVEAL_STAGGER_MS);
                    shown += 1;
                    Visibility::Shown { delay }
                } else {
                    Visibility::Hidden
                }
            })
            .collect()
    }
}

/// Clock for the staggered reveal that follows a filter change.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    started: Instant,
    now: Instant,
}

impl Reveal {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self { started: now, now }
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    /// Whether a product with this visibility is drawn yet.
    #[must_use]
    pub fn is_revealed(&self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Shown { delay } => self.elapsed() >= delay,
            Visibility::Hidden => false,
        }
    }

    /// True once every shown product has been revealed.
    #[must_use]
    pub fn is_settled(&self, visibilities: &[Visibility]) -> bool {
        visibilities
            .iter()
            .all(|v| matches!(v, Visibility::Hidden) || self.is_revealed(*v))
    }

    fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started)
    }
}
