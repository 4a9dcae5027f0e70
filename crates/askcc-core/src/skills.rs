//! Installation of bundled agent skills into the OpenClaw workspace.
//!
//! Each skill is a directory. Installing replaces the target directory
//! wholesale and then marks the skill enabled in `openclaw.json`, one skill at
//! a time, so the registry never lists a skill whose files were not copied.

use crate::error::{AskccError, Result};
use crate::io;
use rust_embed::Embed;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Skill directories starting with this prefix are internal and never installed.
pub const INTERNAL_PREFIX: &str = "__";

fn is_installable(name: &str) -> bool {
    !name.starts_with(INTERNAL_PREFIX)
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Somewhere skill directories can be copied from.
pub trait SkillSource {
    /// Installable skill names, sorted.
    fn skill_names(&self) -> Result<Vec<String>>;

    /// Copy every file of skill `name` beneath `dest`. Returns the file count.
    fn copy_skill(&self, name: &str, dest: &Path) -> Result<usize>;
}

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/skills/"]
struct BundledAssets;

/// Skills compiled into the binary from `crates/askcc-core/skills/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSkills;

impl SkillSource for BundledSkills {
    fn skill_names(&self) -> Result<Vec<String>> {
        // Top-level files have no '/' and are not skills.
        let names: BTreeSet<String> = BundledAssets::iter()
            .filter_map(|path| path.split_once('/').map(|(dir, _)| dir.to_string()))
            .filter(|name| is_installable(name))
            .collect();
        Ok(names.into_iter().collect())
    }

    fn copy_skill(&self, name: &str, dest: &Path) -> Result<usize> {
        let prefix = format!("{name}/");
        let mut copied = 0;
        for path in BundledAssets::iter() {
            let Some(rel) = path.strip_prefix(&prefix) else {
                continue;
            };
            let Some(file) = BundledAssets::get(&path) else {
                continue;
            };
            io::atomic_write(&dest.join(rel), &file.data)?;
            copied += 1;
        }
        if copied == 0 {
            return Err(AskccError::SkillNotFound(name.to_string()));
        }
        Ok(copied)
    }
}

/// Skills laid out as subdirectories of a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSkills {
    root: PathBuf,
}

impl DirSkills {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SkillSource for DirSkills {
    fn skill_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_installable(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn copy_skill(&self, name: &str, dest: &Path) -> Result<usize> {
        let src = self.root.join(name);
        if !src.is_dir() {
            return Err(AskccError::SkillNotFound(name.to_string()));
        }
        io::copy_dir_all(&src, dest)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

fn object_mut<'a>(value: &'a mut Value, key: &str, path: &Path) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| AskccError::InvalidRegistry {
        path: path.display().to_string(),
        reason: format!("'{key}' is not a JSON object"),
    })
}

/// Mark `skill_name` as enabled in the registry at `registry_path`.
///
/// The document is `{"skills": {"entries": {"<name>": {"enabled": true}}}}`.
/// Other entries and any unrelated keys are kept in their original order.
pub fn register_skill(registry_path: &Path, skill_name: &str) -> Result<()> {
    let mut doc = if registry_path.exists() {
        let text = std::fs::read_to_string(registry_path)?;
        if text.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&text)?
        }
    } else {
        Value::Object(Map::new())
    };

    let root = object_mut(&mut doc, "<root>", registry_path)?;
    let skills = root
        .entry("skills")
        .or_insert_with(|| Value::Object(Map::new()));
    let skills = object_mut(skills, "skills", registry_path)?;
    let entries = skills
        .entry("entries")
        .or_insert_with(|| Value::Object(Map::new()));
    let entries = object_mut(entries, "skills.entries", registry_path)?;
    entries.insert(skill_name.to_string(), serde_json::json!({ "enabled": true }));

    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    io::atomic_write(registry_path, text.as_bytes())?;
    tracing::info!(
        "Registered skill '{skill_name}' in {}",
        registry_path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Install
// ---------------------------------------------------------------------------

/// Install every skill from `source` into `target_dir` and register each one.
///
/// An existing `target_dir/<name>` is removed first so files dropped from a
/// newer version of a skill do not linger. Returns the installed names.
pub fn install_skills(
    source: &dyn SkillSource,
    target_dir: &Path,
    registry_path: &Path,
) -> Result<Vec<String>> {
    let mut installed = Vec::new();
    for name in source.skill_names()? {
        let dest = target_dir.join(&name);
        io::remove_dir_if_exists(&dest)?;
        io::ensure_dir(target_dir)?;
        let files = source.copy_skill(&name, &dest)?;
        tracing::info!(
            "Installed skill '{name}' to {} ({files} file(s))",
            dest.display()
        );
        register_skill(registry_path, &name)?;
        installed.push(name);
    }
    Ok(installed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, text: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    fn read_registry(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn dir_source_lists_sorted_skill_dirs_only() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("zeta/SKILL.md"), "z");
        write(&dir.path().join("alpha/SKILL.md"), "a");
        write(&dir.path().join("__pycache__/x.pyc"), "");
        write(&dir.path().join("README.md"), "not a skill");

        let names = DirSkills::new(dir.path()).skill_names().unwrap();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[cfg(unix)]
    #[test]
    fn dir_source_lists_symlinked_skill_dirs() {
        let dir = TempDir::new().unwrap();
        let checkout = dir.path().join("checkout/triage");
        write(&checkout.join("SKILL.md"), "t");
        let source = dir.path().join("bundle");
        std::fs::create_dir_all(&source).unwrap();
        std::os::unix::fs::symlink(&checkout, source.join("triage")).unwrap();

        let skills = DirSkills::new(&source);
        assert_eq!(skills.skill_names().unwrap(), ["triage"]);
        let copied = skills
            .copy_skill("triage", &dir.path().join("out/triage"))
            .unwrap();
        assert_eq!(copied, 1);
    }

    #[test]
    fn bundled_source_has_skills() {
        let names = BundledSkills.skill_names().unwrap();
        assert!(names.contains(&"askcc".to_string()));
        assert!(names.iter().all(|n| !n.starts_with(INTERNAL_PREFIX)));
    }

    #[test]
    fn bundled_skill_copies_skill_md() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("askcc");
        let copied = BundledSkills.copy_skill("askcc", &dest).unwrap();
        assert!(copied >= 1);
        assert!(dest.join("SKILL.md").is_file());
    }

    #[test]
    fn bundled_unknown_skill_is_error() {
        let dir = TempDir::new().unwrap();
        let err = BundledSkills
            .copy_skill("no-such-skill", &dir.path().join("x"))
            .unwrap_err();
        assert!(matches!(err, AskccError::SkillNotFound(_)));
    }

    #[test]
    fn register_creates_registry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".openclaw/openclaw.json");
        register_skill(&path, "askcc").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(
            read_registry(&path),
            serde_json::json!({"skills": {"entries": {"askcc": {"enabled": true}}}})
        );
    }

    #[test]
    fn register_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("openclaw.json");
        write(
            &path,
            r#"{"model": "x", "skills": {"dirs": ["/a"], "entries": {"other": {"enabled": false}, "askcc": {"enabled": false, "extra": 1}}}}"#,
        );

        register_skill(&path, "askcc").unwrap();

        let doc = read_registry(&path);
        assert_eq!(doc["model"], "x");
        assert_eq!(doc["skills"]["dirs"], serde_json::json!(["/a"]));
        assert_eq!(doc["skills"]["entries"]["other"], serde_json::json!({"enabled": false}));
        assert_eq!(doc["skills"]["entries"]["askcc"], serde_json::json!({"enabled": true}));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["model", "skills"]);
    }

    #[test]
    fn register_rejects_non_object_skills() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("openclaw.json");
        write(&path, r#"{"skills": []}"#);
        let err = register_skill(&path, "askcc").unwrap_err();
        assert!(matches!(err, AskccError::InvalidRegistry { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"skills": []}"#);
    }

    #[test]
    fn install_replaces_previous_version() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bundle");
        let target = dir.path().join("workspace/skills");
        let registry = dir.path().join("openclaw.json");
        write(&registry, r#"{"gateway": {"port": 1}}"#);

        write(&source.join("triage/SKILL.md"), "v1");
        write(&source.join("triage/old.md"), "stale");
        let installed = install_skills(&DirSkills::new(&source), &target, &registry).unwrap();
        assert_eq!(installed, ["triage"]);
        assert!(target.join("triage/old.md").exists());

        std::fs::remove_file(source.join("triage/old.md")).unwrap();
        write(&source.join("triage/SKILL.md"), "v2");
        write(&source.join("triage/new.md"), "fresh");
        install_skills(&DirSkills::new(&source), &target, &registry).unwrap();

        assert!(!target.join("triage/old.md").exists());
        assert_eq!(
            std::fs::read_to_string(target.join("triage/SKILL.md")).unwrap(),
            "v2"
        );
        assert!(target.join("triage/new.md").exists());

        let doc = read_registry(&registry);
        assert_eq!(doc["gateway"], serde_json::json!({"port": 1}));
        assert_eq!(
            doc["skills"]["entries"]["triage"],
            serde_json::json!({"enabled": true})
        );
    }

    #[test]
    fn install_registers_each_skill_in_order() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bundle");
        write(&source.join("b-skill/SKILL.md"), "b");
        write(&source.join("a-skill/SKILL.md"), "a");
        let registry = dir.path().join("openclaw.json");

        let installed =
            install_skills(&DirSkills::new(&source), &dir.path().join("t"), &registry).unwrap();

        assert_eq!(installed, ["a-skill", "b-skill"]);
        let doc = read_registry(&registry);
        let keys: Vec<&String> = doc["skills"]["entries"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a-skill", "b-skill"]);
    }

    /// Copies the first skill, then fails on every later one.
    struct FailAfterFirst {
        inner: DirSkills,
        calls: std::cell::Cell<usize>,
    }

    impl SkillSource for FailAfterFirst {
        fn skill_names(&self) -> Result<Vec<String>> {
            self.inner.skill_names()
        }

        fn copy_skill(&self, name: &str, dest: &Path) -> Result<usize> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n > 0 {
                return Err(AskccError::Io(std::io::Error::other("disk full")));
            }
            self.inner.copy_skill(name, dest)
        }
    }

    #[test]
    fn failed_copy_leaves_registry_matching_copied_skills() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bundle");
        write(&source.join("a-skill/SKILL.md"), "a");
        write(&source.join("b-skill/SKILL.md"), "b");
        let target = dir.path().join("t");
        let registry = dir.path().join("openclaw.json");

        let failing = FailAfterFirst {
            inner: DirSkills::new(&source),
            calls: std::cell::Cell::new(0),
        };
        let err = install_skills(&failing, &target, &registry).unwrap_err();
        assert!(matches!(err, AskccError::Io(_)));

        let doc = read_registry(&registry);
        let entries = doc["skills"]["entries"].as_object().unwrap();
        assert_eq!(entries.get("a-skill"), Some(&serde_json::json!({"enabled": true})));
        assert!(!entries.contains_key("b-skill"));
        assert!(target.join("a-skill/SKILL.md").is_file());
        assert!(!target.join("b-skill").exists());
    }
}
