//! Prompt template loading, validation, and substitution.
//!
//! Templates use `$name` / `${name}` placeholders, with `$$` as a literal
//! dollar sign. Substitution is "safe": unknown names and stray `$` are left
//! verbatim, and substituted values are inserted as-is, so issue text full of
//! braces or JSON passes through untouched.

use crate::agent::{AgentMode, AgentTemplateSpec, ISSUE_CONTENT_VAR};
use crate::error::{AskccError, Result};
use crate::io;
use regex::{Captures, Regex};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})").unwrap()
    })
}

/// Replace `$name` / `${name}` placeholders using `vars`, leaving anything
/// unrecognised exactly as written.
pub fn safe_substitute(template: &str, vars: &[(&str, &str)]) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            let name = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            match vars.iter().find(|(k, _)| *k == name) {
                Some((_, value)) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Check that `template_text` references every variable in `required`.
///
/// Each variable is substituted with a unique sentinel; if the sentinel does
/// not show up in the output the placeholder was never there.
pub fn validate_template(template_text: &str, required: &[&str], file_name: &str) -> Result<()> {
    for &var in required {
        let sentinel = format!("__SENTINEL_{var}__");
        let rendered = safe_substitute(template_text, &[(var, sentinel.as_str())]);
        if !rendered.contains(&sentinel) {
            return Err(AskccError::TemplateValidation {
                file: file_name.to_string(),
                variable: var.to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Resolved config
// ---------------------------------------------------------------------------

/// A mode's spec with any on-disk overrides applied. Lives for one invocation.
#[derive(Debug, Clone)]
pub struct ResolvedAgentConfig {
    pub mode: AgentMode,
    pub spec: &'static AgentTemplateSpec,
    pub system_prompt: String,
    pub user_prompt_template: String,
}

impl ResolvedAgentConfig {
    pub fn agent_name(&self) -> &'static str {
        self.spec.name
    }

    pub fn description(&self) -> &'static str {
        self.spec.description
    }

    /// Render the user prompt with the fetched issue text.
    pub fn render_prompt(&self, issue_content: &str) -> String {
        safe_substitute(
            &self.user_prompt_template,
            &[(ISSUE_CONTENT_VAR, issue_content)],
        )
    }
}

// ---------------------------------------------------------------------------
// TemplateStore
// ---------------------------------------------------------------------------

/// The templates directory: user overrides on top of built-in defaults.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write every missing default template. Existing files are never touched.
    /// Returns the number of files created.
    pub fn bootstrap(&self) -> Result<usize> {
        io::ensure_dir(&self.dir)?;
        let mut created = 0;
        for mode in AgentMode::ALL {
            for (file_name, content) in mode.spec().template_files() {
                if io::write_if_missing(&self.dir.join(file_name), content.as_bytes())? {
                    created += 1;
                }
            }
        }
        if created > 0 {
            tracing::info!(
                "Created {created} default template(s) in {}",
                self.dir.display()
            );
        }
        Ok(created)
    }

    /// Read `file_name` from the templates directory, or fall back to `default`
    /// when it does not exist.
    pub fn load_template(&self, file_name: &str, default: &str) -> Result<String> {
        let path = self.dir.join(file_name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Template file not found: {} (using built-in default)",
                    path.display()
                );
                Ok(default.to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load both prompts for `mode` and validate the user template.
    pub fn load_agent_config(&self, mode: AgentMode) -> Result<ResolvedAgentConfig> {
        let spec = mode.spec();
        let user_prompt_template =
            self.load_template(spec.user_prompt_file, spec.user_prompt_template_default)?;
        validate_template(
            &user_prompt_template,
            spec.required_variables,
            spec.user_prompt_file,
        )?;
        let system_prompt =
            self.load_template(spec.system_prompt_file, spec.system_prompt_default)?;
        Ok(ResolvedAgentConfig {
            mode,
            spec,
            system_prompt,
            user_prompt_template,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
