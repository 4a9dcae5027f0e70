use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Default config root, relative to the user's home directory.
pub const ASKCC_DIR: &str = ".askcc";
pub const TEMPLATES_DIR: &str = "templates";

pub const OPENCLAW_SKILLS_DIR: &str = ".openclaw/workspace/skills";
pub const OPENCLAW_CONFIG_FILE: &str = ".openclaw/openclaw.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn default_config_root(home: &Path) -> PathBuf {
    home.join(ASKCC_DIR)
}

pub fn templates_dir(config_root: &Path) -> PathBuf {
    config_root.join(TEMPLATES_DIR)
}

pub fn openclaw_skills_dir(home: &Path) -> PathBuf {
    home.join(OPENCLAW_SKILLS_DIR)
}

pub fn openclaw_config_path(home: &Path) -> PathBuf {
    home.join(OPENCLAW_CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
