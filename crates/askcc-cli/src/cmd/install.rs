use anyhow::Context;
use askcc_core::skills::{self, BundledSkills, DirSkills, SkillSource};
use askcc_core::Settings;
use std::path::Path;

/// `askcc install`: copy skills into the OpenClaw workspace and register them.
pub fn run(settings: &Settings, directory: Option<&Path>, source: Option<&Path>) -> anyhow::Result<()> {
    let target_dir = directory.map_or_else(|| settings.skills_dir(), Path::to_path_buf);
    let registry = settings.openclaw_config_path();

    let dir_source;
    let source: &dyn SkillSource = match source {
        Some(path) => {
            dir_source = DirSkills::new(path);
            &dir_source
        }
        None => &BundledSkills,
    };

    let installed = skills::install_skills(source, &target_dir, &registry)
        .with_context(|| format!("failed to install skills to {}", target_dir.display()))?;

    for name in &installed {
        println!("  installed: {}", target_dir.join(name).display());
    }
    println!(
        "\n{} skill(s) registered in {}",
        installed.len(),
        registry.display()
    );
    Ok(())
}
