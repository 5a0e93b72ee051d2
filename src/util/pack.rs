//! File tree packing for orb and config sources
//!
//! A directory of YAML fragments is folded into one document: directories
//! become nested mappings keyed by name, each file becomes the entry named by
//! its stem, and `@`-prefixed files merge their mapping into the directory
//! that holds them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];

static INCLUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<<\s*include\(([^)]+)\)\s*>>$").expect("include pattern is valid")
});

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Every file under `root` with one of `extensions`, in sorted walk order.
pub fn collect_files(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::Pack(format!("{} is not a directory", root.display())));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if matches {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Insert `value` at `key`, merging mappings and rejecting leaf collisions.
fn merge_entry(target: &mut Mapping, key: Value, value: Value, origin: &Path) -> Result<()> {
    match target.get_mut(&key) {
        None => {
            target.insert(key, value);
            Ok(())
        }
        Some(Value::Mapping(existing)) => match value {
            Value::Mapping(incoming) => {
                for (k, v) in incoming {
                    merge_entry(existing, k, v, origin)?;
                }
                Ok(())
            }
            _ => Err(duplicate(&key, origin)),
        },
        Some(_) => Err(duplicate(&key, origin)),
    }
}

fn duplicate(key: &Value, origin: &Path) -> Error {
    let name = match key {
        Value::String(s) => s.clone(),
        other => format!("{:?}", other),
    };
    Error::Pack(format!(
        "duplicate key '{}' produced by {}",
        name,
        origin.display()
    ))
}

/// Walk to (creating as needed) the mapping at `path` below `root`.
fn descend<'a>(root: &'a mut Mapping, path: &[String], origin: &Path) -> Result<&'a mut Mapping> {
    let mut node = root;
    for segment in path {
        let key = Value::String(segment.clone());
        let child = node
            .entry(key)
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        node = match child {
            Value::Mapping(m) => m,
            _ => {
                return Err(Error::Pack(format!(
                    "'{}' is both a file and a directory near {}",
                    segment,
                    origin.display()
                )));
            }
        };
    }
    Ok(node)
}

/// Replace `<<include(path)>>` string values with the referenced file.
fn resolve_includes(value: &mut Value, base: &Path) -> Result<()> {
    match value {
        Value::String(s) => {
            if let Some(caps) = INCLUDE.captures(s) {
                let target = base.join(caps[1].trim());
                let contents = fs::read_to_string(&target).map_err(|e| {
                    Error::Pack(format!("could not include {}: {}", target.display(), e))
                })?;
                *s = contents;
            } else if s.contains("<<include(") {
                return Err(Error::Pack(format!(
                    "include must be the entire value, found '{}'",
                    s
                )));
            }
        }
        Value::Sequence(items) => {
            for item in items {
                resolve_includes(item, base)?;
            }
        }
        Value::Mapping(map) => {
            for (_, v) in map.iter_mut() {
                resolve_includes(v, base)?;
            }
        }
        Value::Tagged(tagged) => resolve_includes(&mut tagged.value, base)?,
        _ => {}
    }
    Ok(())
}

fn load_fragment(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    let mut value: Value = serde_yaml::from_str(&text)
        .map_err(|e| Error::Pack(format!("{}: {}", path.display(), e)))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_includes(&mut value, base)?;
    Ok(value)
}

/// Fold the YAML tree under `root` into a single value.
pub fn pack_dir(root: &Path) -> Result<Value> {
    let mut tree = Mapping::new();

    for path in collect_files(root, YAML_EXTENSIONS)? {
        let rel = path.strip_prefix(root).unwrap_or(&path);
        let dirs: Vec<String> = rel
            .parent()
            .map(|p| {
                p.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        let stem = rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let value = load_fragment(&path)?;
        let parent = descend(&mut tree, &dirs, &path)?;

        if stem.starts_with('@') {
            match value {
                Value::Mapping(map) => {
                    for (k, v) in map {
                        merge_entry(parent, k, v, &path)?;
                    }
                }
                Value::Null => {}
                _ => {
                    return Err(Error::Pack(format!(
                        "{} must contain a mapping to merge into its directory",
                        path.display()
                    )));
                }
            }
        } else {
            merge_entry(parent, Value::String(stem), value, &path)?;
        }
    }

    Ok(Value::Mapping(tree))
}

/// Pack `root` and render the result as YAML text.
pub fn pack_to_string(root: &Path) -> Result<String> {
    Ok(serde_yaml::to_string(&pack_dir(root)?)?)
}

/// Policy sources under `root`, keyed by path relative to it.
pub fn collect_policies(root: &Path) -> Result<BTreeMap<String, String>> {
    let mut policies = BTreeMap::new();
    for path in collect_files(root, &["rego"])? {
        let rel = path.strip_prefix(root).unwrap_or(&path);
        let key = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        policies.insert(key, fs::read_to_string(&path)?);
    }
    Ok(policies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn get<'a>(value: &'a Value, path: &[&str]) -> &'a Value {
        path.iter().fold(value, |v, key| &v[*key])
    }

    #[test]
    fn test_directories_become_nested_keys() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "commands/greet.yml", "steps:\n  - run: echo hi\n");
        write(dir.path(), "jobs/build.yml", "docker:\n  - image: cimg/base\n");

        let packed = pack_dir(dir.path()).unwrap();
        assert_eq!(
            get(&packed, &["commands", "greet", "steps"])[0]["run"],
            Value::String("echo hi".into())
        );
        assert_eq!(
            get(&packed, &["jobs", "build", "docker"])[0]["image"],
            Value::String("cimg/base".into())
        );
    }

    #[test]
    fn test_at_file_merges_into_parent() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "@orb.yml", "version: 2.1\ndescription: demo\n");
        write(dir.path(), "commands/greet.yml", "steps: []\n");

        let packed = pack_dir(dir.path()).unwrap();
        assert_eq!(packed["description"], Value::String("demo".into()));
        assert!(packed["commands"]["greet"].is_mapping());
    }

    #[test]
    fn test_at_file_and_directory_share_a_mapping() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "@orb.yml", "commands:\n  inline:\n    steps: []\n");
        write(dir.path(), "commands/greet.yml", "steps: []\n");

        let packed = pack_dir(dir.path()).unwrap();
        assert!(packed["commands"]["inline"].is_mapping());
        assert!(packed["commands"]["greet"].is_mapping());
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "@orb.yml", "description: one\n");
        write(dir.path(), "description.yml", "two\n");

        let err = pack_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate key 'description'"));
    }

    #[test]
    fn test_include_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "scripts/greet.sh", "echo hello\n");
        write(
            dir.path(),
            "commands/greet.yml",
            "steps:\n  - run:\n      command: <<include(../scripts/greet.sh)>>\n",
        );

        let packed = pack_dir(dir.path()).unwrap();
        assert_eq!(
            packed["commands"]["greet"]["steps"][0]["run"]["command"],
            Value::String("echo hello\n".into())
        );
    }

    #[test]
    fn test_partial_include_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.yml", "x: \"before <<include(b.sh)>>\"\n");
        assert!(pack_dir(dir.path()).is_err());
    }

    #[test]
    fn test_missing_include_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.yml", "x: <<include(nope.sh)>>\n");
        let err = pack_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("could not include"));
    }

    #[test]
    fn test_non_yaml_and_hidden_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "README.md", "# docs");
        write(dir.path(), ".hidden/x.yml", "a: 1\n");
        write(dir.path(), "jobs/test.yaml", "steps: []\n");

        let packed = pack_dir(dir.path()).unwrap();
        let map = packed.as_mapping().unwrap();
        assert_eq!(map.len(), 1);
        assert!(packed["jobs"]["test"].is_mapping());
    }

    #[test]
    fn test_pack_requires_directory() {
        let dir = TempDir::new().unwrap();
        assert!(pack_dir(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_collect_policies_uses_relative_paths() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "main.rego", "package org\n");
        write(dir.path(), "rules/branch.rego", "package org\n");
        write(dir.path(), "notes.txt", "ignored");

        let policies = collect_policies(dir.path()).unwrap();
        let keys: Vec<&str> = policies.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["main.rego", "rules/branch.rego"]);
    }

    #[test]
    fn test_pack_to_string_is_yaml() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "@orb.yml", "version: 2.1\n");
        let text = pack_to_string(dir.path()).unwrap();
        assert!(text.contains("version: 2.1"));
    }
}
