//! Post Categories
//!
//! Fixed set of categories a post can be filed under.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "IT")]
    It,
    Music,
    Beauty,
    Programming,
    Art,
    Business,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::It,
        Category::Music,
        Category::Beauty,
        Category::Programming,
        Category::Art,
        Category::Business,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::It => "IT",
            Category::Music => "Music",
            Category::Beauty => "Beauty",
            Category::Programming => "Programming",
            Category::Art => "Art",
            Category::Business => "Business",
            Category::Other => "Other",
        }
    }

    /// Exact match on the wire name; anything else is not a known category.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Cover image shown on the category chip
    pub fn image_url(&self) -> &'static str {
        match self {
            Category::It => "https://images.unsplash.com/photo-1517430816045-df4b7de11d1d?w=200",
            Category::Music => "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad?w=200",
            Category::Beauty => "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=200",
            Category::Programming => "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=200",
            Category::Art => "https://images.unsplash.com/photo-1547891654-e66ed7ebb968?w=200",
            Category::Business => "https://images.unsplash.com/photo-1444653614773-995cb1ef9efa?w=200",
            Category::Other => "https://images.unsplash.com/photo-1493612276216-ee3925520721?w=200",
        }
    }
}

/// Which slice of the feed is being browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(*c),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}
