//! Open Graph property registry
//!
//! Static whitelists of the property names understood by the protocol
//! (see <https://ogp.me/>):
//! - Top-level properties, grouped in five categories
//! - Structured sub-properties, allowed only under specific parents
//! - Known object types, used for diagnostics only
//!
//! Everything in this module is a pure lookup over constant data.

/// Open Graph XML namespace URI.
pub const NAMESPACE_URI: &str = "http://ogp.me/ns#";

/// Prefix used for every rendered property (`og:<name>`).
pub const NAMESPACE_PREFIX: &str = "og";

const NAMESPACE_ATTRIBUTE: &str = "xmlns:og=\"http://ogp.me/ns#\"";

/// Category a top-level property belongs to.
///
/// Membership carries no semantics beyond grouping; every category is
/// equally valid for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCategory {
    Basic,
    Recommended,
    Optional,
    Location,
    Contact,
}

impl PropertyCategory {
    /// All categories, in declaration order.
    pub const ALL: [PropertyCategory; 5] = [
        PropertyCategory::Basic,
        PropertyCategory::Recommended,
        PropertyCategory::Optional,
        PropertyCategory::Location,
        PropertyCategory::Contact,
    ];

    /// Property names in this category.
    pub fn properties(self) -> &'static [&'static str] {
        match self {
            PropertyCategory::Basic => &["title", "type", "image", "url"],
            PropertyCategory::Recommended => &["description", "site_name", "locale"],
            PropertyCategory::Optional => &["determiner", "audio", "video"],
            PropertyCategory::Location => &[
                "latitude",
                "longitude",
                "street-address",
                "locality",
                "region",
                "postal-code",
                "country-name",
            ],
            PropertyCategory::Contact => &["email", "phone_number", "fax_number"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyCategory::Basic => "basic",
            PropertyCategory::Recommended => "recommended",
            PropertyCategory::Optional => "optional",
            PropertyCategory::Location => "location",
            PropertyCategory::Contact => "contact",
        }
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parents that accept structured sub-properties, with their allowed names.
const STRUCTURED_PROPERTIES: &[(&str, &[&str])] = &[
    ("image", &["url", "secure_url", "type", "width", "height"]),
    ("audio", &["url", "secure_url", "type"]),
    ("video", &["url", "secure_url", "type", "width", "height"]),
    ("locale", &["alternates"]),
];

/// Object types listed by the protocol.
const OBJECT_TYPES: &[&str] = &[
    // Activities
    "activity",
    "sport",
    // Businesses
    "bar",
    "company",
    "cafe",
    "hotel",
    "restaurant",
    // Groups
    "cause",
    "sports_league",
    "sports_team",
    // Organizations
    "band",
    "government",
    "non_profit",
    "school",
    "university",
    // People
    "actor",
    "athlete",
    "author",
    "director",
    "musician",
    "politicians",
    "public_figure",
    // Places
    "city",
    "country",
    "landmark",
    "state_province",
    // Products and Entertainment
    "album",
    "book",
    "drink",
    "food",
    "game",
    "product",
    "song",
    "movie",
    "tv_show",
    // Websites
    "website",
    "blog",
    "article",
];

/// Category of a top-level property, if it is one.
pub fn category_of(name: &str) -> Option<PropertyCategory> {
    PropertyCategory::ALL
        .into_iter()
        .find(|category| category.properties().contains(&name))
}

/// Check whether `name` is a valid top-level property.
pub fn is_valid_property(name: &str) -> bool {
    category_of(name).is_some()
}

/// Allowed sub-properties for a structured parent.
///
/// Returns `None` when `parent` does not accept structured properties.
pub fn structured_properties(parent: &str) -> Option<&'static [&'static str]> {
    STRUCTURED_PROPERTIES
        .iter()
        .find(|(name, _)| *name == parent)
        .map(|(_, subs)| *subs)
}

/// Check whether `sub` is allowed under the structured parent `parent`.
pub fn is_valid_structured_property(parent: &str, sub: &str) -> bool {
    structured_properties(parent).is_some_and(|subs| subs.contains(&sub))
}

/// Check whether `object_type` is one of the protocol's listed object types.
///
/// Advisory only: values are never rejected on this basis.
pub fn is_known_type(object_type: &str) -> bool {
    OBJECT_TYPES.contains(&object_type)
}

/// The namespace attribute to place on the root `<html>` element.
pub fn namespace_attribute() -> &'static str {
    NAMESPACE_ATTRIBUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_property_is_valid() {
        for category in PropertyCategory::ALL {
            for name in category.properties() {
                assert!(is_valid_property(name), "{name} should be valid");
                assert_eq!(category_of(name), Some(category));
            }
        }
    }

    #[test]
    fn test_invalid_properties() {
        assert!(!is_valid_property("dummy_prop"));
        assert!(!is_valid_property(""));
        assert!(!is_valid_property("Title"));
        assert!(!is_valid_property("og:title"));
        // Structured keys are not top-level names
        assert!(!is_valid_property("image:url"));
    }

    #[test]
    fn test_categories_do_not_overlap() {
        let total: usize = PropertyCategory::ALL
            .iter()
            .map(|c| c.properties().len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_structured_properties() {
        assert!(is_valid_structured_property("image", "url"));
        assert!(is_valid_structured_property("image", "height"));
        assert!(is_valid_structured_property("audio", "secure_url"));
        assert!(is_valid_structured_property("video", "width"));
        assert!(is_valid_structured_property("locale", "alternates"));

        assert!(!is_valid_structured_property("audio", "width"));
        assert!(!is_valid_structured_property("locale", "url"));
        assert!(!is_valid_structured_property("title", "url"));
        assert!(!is_valid_structured_property("dummy", "dummy"));
    }

    #[test]
    fn test_structured_parents_are_valid_properties() {
        for (parent, _) in STRUCTURED_PROPERTIES {
            assert!(is_valid_property(parent));
        }
        assert_eq!(structured_properties("title"), None);
        assert_eq!(
            structured_properties("audio"),
            Some(&["url", "secure_url", "type"][..])
        );
    }

    #[test]
    fn test_known_types() {
        assert!(is_known_type("website"));
        assert!(is_known_type("tv_show"));
        assert!(!is_known_type("spaceship"));
    }

    #[test]
    fn test_namespace_attribute() {
        assert_eq!(namespace_attribute(), r#"xmlns:og="http://ogp.me/ns#""#);
        assert!(namespace_attribute().contains(NAMESPACE_URI));
        assert!(namespace_attribute().starts_with(&format!("xmlns:{NAMESPACE_PREFIX}=")));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(PropertyCategory::Location.to_string(), "location");
    }
}
