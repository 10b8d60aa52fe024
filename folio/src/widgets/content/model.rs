use crate::catalog::{self, DEFAULT_CATEGORY};

/// Page data for the selected category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContentViewModel {
    pub(crate) category: &'static str,
    pub(crate) group_title: &'static str,
    pub(crate) display_name: &'static str,
}

impl ContentViewModel {
    /// Resolve a category name against the catalog. Unknown names render
    /// as the raw name with no group.
    pub(crate) fn for_category(name: &'static str) -> Self {
        match catalog::find(name) {
            Some((group, category)) => Self {
                category: category.name,
                group_title: group.title,
                display_name: category.display_name,
            },
            None => Self {
                category: name,
                group_title: "",
                display_name: name,
            },
        }
    }

    pub(crate) fn is_landing(&self) -> bool {
        self.category == DEFAULT_CATEGORY
    }

    /// Short description shown under the page heading.
    pub(crate) fn description(&self) -> String {
        if self.is_landing() {
            String::from("Every post on the site, newest first.")
        } else {
            format!(
                "Posts filed under {} in {}.",
                self.display_name, self.group_title
            )
        }
    }
}
