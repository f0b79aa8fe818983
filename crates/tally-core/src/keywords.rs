//! Deterministic keyword layer of the category pipeline
//!
//! Rules-as-data: an ordered table of (category key, keyword set) pairs.
//! The first category with any keyword appearing as a substring of the
//! normalized input wins, so declaration order is part of the contract:
//! an input matching both "mall" and "pizza" is Shopping, not Food,
//! because shopping is declared first.

/// Keyword rules in match-priority order. Keys are internal lowercase
/// names; the returned label is the title-cased key.
const KEYWORD_RULES: &[(&str, &[&str])] = &[
    (
        "shopping",
        &["shoes", "clothes", "shirt", "mall", "iphone", "store", "supermarket"],
    ),
    (
        "food",
        &[
            "kfc", "starbucks", "pizza", "dinner", "lunch", "cafe", "bread", "apple", "fruit",
            "market", "grocery", "meat",
        ],
    ),
    (
        "transport",
        &["grab", "taxi", "bus", "parking", "gas", "fuel", "uber", "flight"],
    ),
    (
        "study",
        &["book", "course", "tutor", "pen", "library", "tuition", "notebook", "school"],
    ),
];

/// Classify normalized text by keyword, returning the title-cased
/// category name of the first matching rule, or `None` when no keyword
/// occurs in the input.
pub fn classify_by_keyword(text: &str) -> Option<String> {
    for (category, words) in KEYWORD_RULES {
        if words.iter().any(|word| text.contains(word)) {
            return Some(title_case(category));
        }
    }
    None
}

/// "shopping" -> "Shopping". Keys are ASCII lowercase by construction.
fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
