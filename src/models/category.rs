//! Expense categories
//!
//! Categories are plain names. The built-in set carries an icon and a chart
//! colour; any other name (e.g. left over in old data) gets the fallback
//! style.

/// The default category list, in display order
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Other",
];

/// Icon and colour used when rendering a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

pub const FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    icon: "📝",
    color: "#C9CBCF",
};

/// Look up the display style of a category
pub fn category_style(name: &str) -> CategoryStyle {
    let (icon, color) = match name {
        "Food" => ("🍽️", "#FF6384"),
        "Transportation" => ("🚗", "#36A2EB"),
        "Housing" => ("🏠", "#FFCE56"),
        "Utilities" => ("⚡", "#4BC0C0"),
        "Entertainment" => ("🎬", "#9966FF"),
        "Healthcare" => ("🏥", "#FF9F40"),
        "Shopping" => ("🛍️", "#FF6384"),
        "Other" => ("📝", "#C9CBCF"),
        _ => return FALLBACK_STYLE,
    };
    CategoryStyle { icon, color }
}

/// The default categories as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Find the canonical spelling of `input` in `categories` (case-insensitive)
pub fn resolve_category<'a>(categories: &'a [String], input: &str) -> Option<&'a str> {
    let input = input.trim();
    categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input))
        .map(String::as_str)
}
