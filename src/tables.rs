//! Static lookup tables used by the value resolver and property lowering.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

pub const JAVAFX_CONTROL: &str = "javafx.scene.control.Control";
pub const USE_PREF_SIZE: &str = "USE_PREF_SIZE";
pub const USE_COMPUTED_SIZE: &str = "USE_COMPUTED_SIZE";

/// Attribute name prefixes of the sizing-hint convention (`prefWidth`, …).
pub const SIZE_HINT_PREFIXES: &[&str] = &["max", "min", "pref"];

/// How membership in an enumeration is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// The attribute value must equal one of the listed constants.
    Value(&'static [&'static str]),
    /// The local part of the attribute name must equal this name; the value is
    /// trusted to be a constant of the enumeration.
    Name(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct EnumCategory {
    pub type_name: &'static str,
    pub membership: Membership,
}

impl EnumCategory {
    pub fn matches(&self, attribute_name: &str, value: &str) -> bool {
        match self.membership {
            Membership::Value(constants) => constants.contains(&value),
            Membership::Name(local) => local_name(attribute_name) == local,
        }
    }
}

/// `GridPane.halignment` → `halignment`.
pub fn local_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

const PRIORITY: &[&str] = &["ALWAYS", "SOMETIMES", "NEVER"];
const TAB_CLOSING_POLICY: &[&str] = &["SELECTED_TAB", "UNAVAILABLE", "ALL_TABS"];
const POS: &[&str] = &[
    "TOP_LEFT",
    "TOP_CENTER",
    "TOP_RIGHT",
    "CENTER_LEFT",
    "CENTER",
    "CENTER_RIGHT",
    "BOTTOM_LEFT",
    "BOTTOM_CENTER",
    "BOTTOM_RIGHT",
    "BASELINE_LEFT",
    "BASELINE_CENTER",
    "BASELINE_RIGHT",
];

lazy_static! {
    /// Enumeration categories in resolution order. The first match wins.
    pub static ref ENUM_CATEGORIES: Vec<EnumCategory> = vec![
        EnumCategory {
            type_name: "javafx.scene.control.ContentDisplay",
            membership: Membership::Name("contentDisplay"),
        },
        EnumCategory {
            type_name: "javafx.scene.layout.Priority",
            membership: Membership::Value(PRIORITY),
        },
        EnumCategory {
            type_name: "javafx.scene.control.TabPane.TabClosingPolicy",
            membership: Membership::Value(TAB_CLOSING_POLICY),
        },
        EnumCategory {
            type_name: "javafx.scene.text.TextAlignment",
            membership: Membership::Name("textAlignment"),
        },
        EnumCategory {
            type_name: "javafx.geometry.VPos",
            membership: Membership::Name("valignment"),
        },
        EnumCategory {
            type_name: "javafx.geometry.HPos",
            membership: Membership::Name("halignment"),
        },
        EnumCategory {
            type_name: "javafx.geometry.Pos",
            membership: Membership::Value(POS),
        },
        EnumCategory {
            type_name: "javafx.scene.control.OverrunStyle",
            membership: Membership::Name("textOverrun"),
        },
        EnumCategory {
            type_name: "javafx.geometry.Side",
            membership: Membership::Name("side"),
        },
    ];

    /// Collection-valued properties and the element type of each collection.
    pub static ref LIST_TYPES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("children", "javafx.scene.Node");
        m.insert("columnConstraints", "javafx.scene.layout.ColumnConstraints");
        m.insert("rowConstraints", "javafx.scene.layout.RowConstraints");
        m.insert("tabs", "javafx.scene.control.Tab");
        m.insert("items", "javafx.scene.control.MenuItem");
        m.insert("columns", "javafx.scene.control.TableColumn");
        m
    };

    /// Tag names in the `fx:` namespace the markup reader understands.
    pub static ref FX_ELEMENTS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("include");
        s.insert("reference");
        s.insert("copy");
        s.insert("define");
        s.insert("root");
        s.insert("script");
        s
    };
}

pub fn is_size_hint(attribute_name: &str) -> bool {
    SIZE_HINT_PREFIXES
        .iter()
        .any(|prefix| attribute_name.starts_with(prefix))
}

/// Enumeration type the value of this attribute belongs to, if any.
pub fn enum_type_for(attribute_name: &str, value: &str) -> Option<&'static str> {
    ENUM_CATEGORIES
        .iter()
        .find(|category| category.matches(attribute_name, value))
        .map(|category| category.type_name)
}

/// Element type of a collection-valued property, `None` for single-valued ones.
pub fn list_element_type(name: &str) -> Option<&'static str> {
    LIST_TYPES.get(name).copied()
}
