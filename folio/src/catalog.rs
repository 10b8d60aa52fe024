/// Category shown on the landing page.
pub(crate) const DEFAULT_CATEGORY: &str = "all";

/// A post category entry in the sidebar tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Category {
    pub(crate) display_name: &'static str,
    pub(crate) name: &'static str,
}

/// A titled group of categories.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CategoryGroup {
    pub(crate) title: &'static str,
    pub(crate) categories: &'static [Category],
}

const fn category(display_name: &'static str, name: &'static str) -> Category {
    Category { display_name, name }
}

/// Static category catalog in display order.
pub(crate) const CATALOG: &[CategoryGroup] = &[
    CategoryGroup {
        title: "Collections",
        categories: &[
            category("All posts", "all"),
            category("Translations", "translate"),
        ],
    },
    CategoryGroup {
        title: "Frontend",
        categories: &[
            category("React", "react"),
            category("Vue", "vue"),
            category("TypeScript", "typescript"),
        ],
    },
    CategoryGroup {
        title: "Backend",
        categories: &[
            category("Node.js", "nodejs"),
            category("Nest.js", "nestjs"),
        ],
    },
    CategoryGroup {
        title: "Cloud",
        categories: &[
            category("AWS", "aws"),
            category("Azure", "azure"),
            category("Google Cloud", "gcp"),
        ],
    },
    CategoryGroup {
        title: "DevOps",
        categories: &[
            category("Docker", "docker"),
            category("Kubernetes", "kubernetes"),
            category("CI / CD", "cicd"),
        ],
    },
    CategoryGroup {
        title: "Computer Science",
        categories: &[
            category("Operating Systems", "os"),
            category("Databases", "database"),
            category("Data Structures", "ds"),
        ],
    },
    CategoryGroup {
        title: "Languages",
        categories: &[
            category("JavaScript", "javascript"),
            category("Dart", "dart"),
            category("Java", "java"),
            category("Python", "python"),
        ],
    },
    CategoryGroup {
        title: "Algorithms",
        categories: &[
            category("Baekjoon Online Judge", "boj"),
            category("Programmers", "programmers"),
        ],
    },
    CategoryGroup {
        title: "Misc",
        categories: &[
            category("Performances", "show"),
            category("Restaurant notes", "eat"),
        ],
    },
];

/// Look up a category and its group by machine name.
pub(crate) fn find(
    name: &str,
) -> Option<(&'static CategoryGroup, &'static Category)> {
    CATALOG.iter().find_map(|group| {
        group
            .categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| (group, category))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{CATALOG, DEFAULT_CATEGORY, find};

    #[test]
    fn given_catalog_when_scanning_names_then_every_name_is_unique() {
        let mut seen = HashSet::new();
        for group in CATALOG {
            for category in group.categories {
                assert!(
                    seen.insert(category.name),
                    "duplicate category name {}",
                    category.name
                );
            }
        }
    }

    #[test]
    fn given_default_category_when_looked_up_then_it_exists() {
        let (group, category) =
            find(DEFAULT_CATEGORY).expect("default category should exist");

        assert_eq!(group.title, "Collections");
        assert_eq!(category.display_name, "All posts");
    }

    #[test]
    fn given_unknown_name_when_looked_up_then_none_is_returned() {
        assert!(find("cobol").is_none());
    }
}
