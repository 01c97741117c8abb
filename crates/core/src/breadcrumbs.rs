//! Breadcrumb trail resolver.
//!
//! The trail is deliberately shallow: the root "Home" entry, plus one entry
//! for the final path segment when that segment has a label. Intermediate
//! segments are never shown, and an unlabelled leaf leaves the trail at
//! "Home" alone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label and path of the root breadcrumb.
pub const ROOT_LABEL: &str = "Home";
pub const ROOT_PATH: &str = "/";

/// One element of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
    pub is_current_page: bool,
}

/// Static segment → label table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLabels {
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl BreadcrumbLabels {
    /// Build a table from `(segment, label)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            labels: pairs
                .into_iter()
                .map(|(segment, label)| (segment.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Label for a single path segment, if one is configured.
    #[must_use]
    pub fn label_for(&self, segment: &str) -> Option<&str> {
        self.labels.get(segment).map(String::as_str)
    }

    /// Resolve the trail for `current_path`.
    ///
    /// At most one entry is marked current, and it is always the last one.
    #[must_use]
    pub fn resolve(&self, current_path: &str) -> Vec<Breadcrumb> {
        let leaf = current_path
            .split('/')
            .rfind(|segment| !segment.is_empty())
            .and_then(|segment| self.label_for(segment));

        // Root is the current page whenever nothing follows it, which
        // includes "/" itself.
        let mut trail = vec![Breadcrumb {
            label: ROOT_LABEL.to_string(),
            path: ROOT_PATH.to_string(),
            is_current_page: leaf.is_none(),
        }];

        if let Some(label) = leaf {
            trail.push(Breadcrumb {
                label: label.to_string(),
                path: current_path.to_string(),
                is_current_page: true,
            });
        }

        trail
    }
}
