use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting templates or the skill registry.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

/// Remove a directory tree if present. Returns true if something was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_dir_all(path)?;
    Ok(true)
}

/// Recursively copy `src` into `dest`, creating `dest` and any parents.
/// Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dest: &Path) -> Result<usize> {
    ensure_dir(dest)?;
    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let path = entry.path();
        // Follows symlinked directories.
        if path.is_dir() {
            copied += copy_dir_all(&path, &target)?;
        } else {
            std::fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("openclaw.json");
        atomic_write(&path, b"{}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c/PLAN_USER_PROMPT.md");
        atomic_write(&path, b"data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_if_missing_skips_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.md");
        std::fs::write(&path, b"original").unwrap();
        let written = write_if_missing(&path, b"new").unwrap();
        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn copy_dir_all_copies_nested_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("scripts/lib")).unwrap();
        std::fs::write(src.join("SKILL.md"), "# skill").unwrap();
        std::fs::write(src.join("scripts/lib/run.sh"), "echo hi").unwrap();

        let dest = dir.path().join("out/skill");
        let copied = copy_dir_all(&src, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            std::fs::read_to_string(dest.join("scripts/lib/run.sh")).unwrap(),
            "echo hi"
        );
    }

    #[cfg(unix)]
    #[test]
    fn copy_dir_all_follows_symlinked_dirs() {
        let dir = TempDir::new().unwrap();
        let shared = dir.path().join("shared");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("common.md"), "shared").unwrap();

        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("SKILL.md"), "# skill").unwrap();
        std::os::unix::fs::symlink(&shared, src.join("refs")).unwrap();

        let dest = dir.path().join("out");
        assert_eq!(copy_dir_all(&src, &dest).unwrap(), 2);
        assert!(!dest.join("refs").is_symlink());
        assert_eq!(
            std::fs::read_to_string(dest.join("refs/common.md")).unwrap(),
            "shared"
        );
    }

    #[test]
    fn remove_dir_if_exists_handles_missing() {
        let dir = TempDir::new().unwrap();
        assert!(!remove_dir_if_exists(&dir.path().join("nope")).unwrap());
        std::fs::create_dir_all(dir.path().join("yes/inner")).unwrap();
        assert!(remove_dir_if_exists(&dir.path().join("yes")).unwrap());
        assert!(!dir.path().join("yes").exists());
    }
}
