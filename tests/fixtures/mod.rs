//! Canned search service response bodies.

#![allow(dead_code)]

/// Two well-formed records.
pub const TWO_ITEMS: &str = r#"[
    {
        "id": 1,
        "name": "Selvedge Jeans",
        "type": "Pants",
        "brand": "Indigo Mills",
        "sizes": ["30", "32", "34"],
        "colors": ["Denim", "Black"],
        "description": "Raw denim, slim taper"
    },
    {
        "id": 2,
        "name": "Flannel Overshirt",
        "type": "Shirt",
        "brand": "Northwood",
        "sizes": "L",
        "colors": "Plaid",
        "description": "Brushed cotton"
    }
]"#;

/// Records with missing fields and wrong shapes.
pub const MALFORMED_ITEMS: &str = r#"[
    {"name": 12, "colors": {"primary": "red"}, "sizes": null},
    "just a string",
    {}
]"#;

pub const EMPTY: &str = "[]";
pub const OBJECT: &str = r#"{"results": [{"name": "Hidden"}]}"#;
pub const NULL: &str = "null";
pub const NOT_JSON: &str = "<html><body>Bad Gateway</body></html>";
