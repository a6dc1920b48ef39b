use serde::{Deserialize, Serialize};

use super::Dimension;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    Books,
    Toys,
    Sports,
}

impl Category {
    /// Sub-categories that may appear together with this category
    pub fn sub_categories(&self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &["Phones", "Laptops", "Audio", "Cameras", "Accessories"],
            Category::Clothing => &["Shirts", "Jackets", "Shoes", "Dresses", "Hats"],
            Category::HomeKitchen => &["Cookware", "Furniture", "Lighting", "Bedding", "Appliances"],
            Category::Books => &["Fiction", "Biography", "Science", "Comics", "Cookbooks"],
            Category::Toys => &["Puzzles", "Dolls", "Blocks", "Games", "Plush"],
            Category::Sports => &["Fitness", "Cycling", "Camping", "Running", "Swimming"],
        }
    }
}

impl Dimension for Category {
    const COLUMN: &'static str = "Category";
    const VALUES: &'static [Self] = &[
        Category::Electronics,
        Category::Clothing,
        Category::HomeKitchen,
        Category::Books,
        Category::Toys,
        Category::Sports,
    ];

    fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Sports => "Sports",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matches_serde_name() {
        for category in Category::VALUES {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("Home & Kitchen"), Some(Category::HomeKitchen));
        assert_eq!(Category::from_label("home & kitchen"), None);
    }
}
