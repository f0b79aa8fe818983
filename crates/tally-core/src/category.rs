//! Category normalization into the display vocabulary
//!
//! Stored expense rows and limit configuration carry free-form category
//! spellings ("food", "Transport", "f&d"). This module collapses them
//! onto the fixed display vocabulary and defines the presentation order.
//!
//! Unknown non-blank categories pass through verbatim instead of being
//! coerced to the fallback. That asymmetry is deliberate: a category this
//! version doesn't know about should still display under its own name.

/// The guaranteed terminal category. Blank input, unclassifiable text,
/// and every degraded failure mode land here.
pub const FALLBACK_CATEGORY: &str = "Others";

/// Display vocabulary in presentation order. `Others` sorts last purely
/// because it is declared last.
pub const PREFERRED_ORDER: &[&str] = &[
    "Food & Drinks",
    "Transportation",
    "House",
    "Study",
    "Shopping",
    "Others",
];

/// Many-to-one alias table: lowercase trimmed spelling -> display label.
/// Each display label's own lowercase spelling maps to itself, which is
/// what makes `normalize_category` idempotent.
const ALIASES: &[(&str, &str)] = &[
    // Food & Drinks
    ("food & drinks", "Food & Drinks"),
    ("food and drinks", "Food & Drinks"),
    ("food", "Food & Drinks"),
    ("foods", "Food & Drinks"),
    ("f&d", "Food & Drinks"),
    ("drinks", "Food & Drinks"),
    // Transportation
    ("transportation", "Transportation"),
    ("transport", "Transportation"),
    ("travel", "Transportation"),
    // House
    ("house", "House"),
    ("housing", "House"),
    ("home", "House"),
    ("rent", "House"),
    // Study
    ("study", "Study"),
    ("education", "Study"),
    // Shopping
    ("shopping", "Shopping"),
    ("shop", "Shopping"),
    // Others
    ("others", "Others"),
    ("other", "Others"),
    ("misc", "Others"),
    ("miscellaneous", "Others"),
];

/// Map an arbitrary category spelling onto the display vocabulary.
///
/// `None` and blank/whitespace-only input map to [`FALLBACK_CATEGORY`].
/// Known aliases (matched on the lowercased trimmed input) map to their
/// display label. Anything else is returned trimmed but otherwise
/// unchanged: unknown categories are passed through, not coerced.
pub fn normalize_category(raw: Option<&str>) -> String {
    let trimmed = match raw {
        Some(s) => s.trim(),
        None => return FALLBACK_CATEGORY.to_string(),
    };
    if trimmed.is_empty() {
        return FALLBACK_CATEGORY.to_string();
    }

    let key = trimmed.to_lowercase();
    for (alias, display) in ALIASES {
        if *alias == key {
            return (*display).to_string();
        }
    }

    trimmed.to_string()
}

/// Sort categories for presentation: preferred display order first
/// (matched case-insensitively), then everything unknown, lexicographic
/// among themselves.
pub fn order_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut cats: Vec<String> = categories.into_iter().map(Into::into).collect();
    cats.sort_by_cached_key(|cat| {
        let key = cat.to_lowercase();
        let rank = PREFERRED_ORDER
            .iter()
            .position(|p| p.to_lowercase() == key)
            .unwrap_or(PREFERRED_ORDER.len());
        (rank, key)
    });
    cats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_none_map_to_fallback() {
        assert_eq!(normalize_category(None), FALLBACK_CATEGORY);
        assert_eq!(normalize_category(Some("")), FALLBACK_CATEGORY);
        assert_eq!(normalize_category(Some("   ")), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_aliases_collapse_to_display_label() {
        assert_eq!(normalize_category(Some("food")), "Food & Drinks");
        assert_eq!(normalize_category(Some("Foods")), "Food & Drinks");
        assert_eq!(normalize_category(Some("F&D")), "Food & Drinks");
        assert_eq!(normalize_category(Some("  transport ")), "Transportation");
        assert_eq!(normalize_category(Some("rent")), "House");
        assert_eq!(normalize_category(Some("EDUCATION")), "Study");
        assert_eq!(normalize_category(Some("shop")), "Shopping");
        assert_eq!(normalize_category(Some("misc")), "Others");
    }

    #[test]
    fn test_unknown_nonblank_passes_through() {
        assert_eq!(normalize_category(Some("Crypto")), "Crypto");
        assert_eq!(normalize_category(Some("  Pet Care ")), "Pet Care");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["food", "Transportation", "Crypto", "", "   ", "OTHERS"] {
            let once = normalize_category(Some(raw));
            let twice = normalize_category(Some(&once));
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
        let once = normalize_category(None);
        assert_eq!(normalize_category(Some(&once)), once);
    }

    #[test]
    fn test_display_labels_are_fixed_points() {
        for label in PREFERRED_ORDER {
            assert_eq!(normalize_category(Some(label)), *label);
        }
    }

    #[test]
    fn test_order_preferred_then_unknown() {
        let ordered = order_categories(vec![
            "Shopping",
            "Zoo",
            "Others",
            "Food & Drinks",
            "Aquarium",
            "House",
        ]);
        assert_eq!(
            ordered,
            vec!["Food & Drinks", "House", "Shopping", "Others", "Aquarium", "Zoo"]
        );
    }

    #[test]
    fn test_order_is_case_insensitive_for_preferred() {
        let ordered = order_categories(vec!["others", "STUDY", "transportation"]);
        assert_eq!(ordered, vec!["transportation", "STUDY", "others"]);
    }
}
