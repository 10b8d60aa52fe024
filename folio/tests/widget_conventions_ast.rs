use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared_modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            _ => violations.push(format!(
                "{}: only module declarations are allowed",
                mod_rs.display()
            )),
        }
    }

    let mut fs_modules = BTreeSet::new();
    for path in read_dir(&widgets_dir) {
        if path.is_dir() {
            fs_modules.insert(file_stem(&path));
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(&file_stem(dir));

    for required in ["mod.rs", "event.rs"] {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing required file {required}",
                dir.display()
            ));
        }
    }

    let event_rs = dir.join("event.rs");
    if event_rs.is_file() {
        validate_event_file(&event_rs, &prefix, violations);
    }

    let view_rs = dir.join("view.rs");
    let view_mod_rs = dir.join("view").join("mod.rs");
    for view in [view_rs, view_mod_rs] {
        if view.is_file() {
            validate_view_file(&view, &prefix, violations);
        }
    }

    for file in rust_files(dir) {
        let source = fs::read_to_string(&file).unwrap_or_else(|err| {
            panic!("failed to read {}: {err}", file.display())
        });

        for forbidden in ["crate::app::", "crate::routers::"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: widgets must not depend on {forbidden}",
                    file.display()
                ));
            }
        }
        for forbidden in ["std::fs::", "open::", "iced::clipboard"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: side effect {forbidden} belongs in a router",
                    file.display()
                ));
            }
        }

        let parsed = parse(&file);
        for item in &parsed.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file.display()
                    ));
                }
            }
        }
    }
}

fn validate_event_file(
    path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(path);
    let expected = format!("{prefix}Event");

    let enums: Vec<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            _ => None,
        })
        .collect();

    if !enums.contains(&expected) {
        violations.push(format!(
            "{}: expected an event contract named {expected}",
            path.display()
        ));
    }

    for name in enums {
        if !name.starts_with(prefix) {
            violations.push(format!(
                "{}: event type '{name}' must start with widget prefix '{prefix}'",
                path.display()
            ));
        }
    }
}

fn validate_view_file(path: &Path, prefix: &str, violations: &mut Vec<String>) {
    let file = parse(path);

    let props: Vec<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item_struct)
                if item_struct.ident.to_string().ends_with("Props") =>
            {
                Some(item_struct.ident.to_string())
            },
            _ => None,
        })
        .collect();

    if props.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            path.display(),
            props.len()
        ));
    }

    for name in props {
        if name != format!("{prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named {prefix}Props",
                path.display()
            ));
        }
    }
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn read_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| {
                    panic!("failed to read dir entry: {err}")
                })
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in read_dir(dir) {
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
