//! Presentation defaults for contribution categories.
//!
//! Categories are stored by name only; the portal decorates them with an
//! icon and a blurb at display time. This is a read-only lookup keyed
//! case-insensitively by category name, with a default entry for names
//! nobody has curated yet.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    pub icon: &'static str,
    pub description: &'static str,
}

const DEFAULT_META: CategoryMeta = CategoryMeta {
    icon: "📊",
    description: "Open datasets contributed by the community",
};

static CATEGORY_DEFAULTS: Lazy<HashMap<&'static str, CategoryMeta>> = Lazy::new(|| {
    HashMap::from([
        (
            "health",
            CategoryMeta {
                icon: "🏥",
                description: "Hospitals, clinics, public health services and statistics",
            },
        ),
        (
            "education",
            CategoryMeta {
                icon: "🎓",
                description: "Schools, enrollment, graduation and literacy data",
            },
        ),
        (
            "transportation",
            CategoryMeta {
                icon: "🚌",
                description: "Roads, transit routes, traffic and vehicle registries",
            },
        ),
        (
            "environment",
            CategoryMeta {
                icon: "🌿",
                description: "Air and water quality, waste, green spaces and climate",
            },
        ),
        (
            "economy",
            CategoryMeta {
                icon: "💼",
                description: "Employment, trade, prices and business registrations",
            },
        ),
        (
            "agriculture",
            CategoryMeta {
                icon: "🌾",
                description: "Crops, livestock, fisheries and land use",
            },
        ),
        (
            "demographics",
            CategoryMeta {
                icon: "👥",
                description: "Population counts, census extracts and migration",
            },
        ),
        (
            "budget",
            CategoryMeta {
                icon: "🧾",
                description: "Government budgets, spending and procurement",
            },
        ),
    ])
});

/// Presentation defaults for a category name. Unknown names get the
/// generic entry.
pub fn defaults_for(name: &str) -> &'static CategoryMeta {
    CATEGORY_DEFAULTS
        .get(name.trim().to_ascii_lowercase().as_str())
        .unwrap_or(&DEFAULT_META)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_case_insensitively() {
        assert_eq!(defaults_for("health").icon, "🏥");
        assert_eq!(defaults_for("Health"), defaults_for("health"));
        assert_eq!(defaults_for("  EDUCATION  ").icon, "🎓");
    }

    #[test]
    fn unknown_names_fall_back_to_the_default() {
        assert_eq!(defaults_for("cryptozoology"), &DEFAULT_META);
        assert_eq!(defaults_for(""), &DEFAULT_META);
    }
}
