use anyhow::Context;
use askcc_core::issue::{self, require_cli};
use askcc_core::{AgentMode, Settings, TemplateStore};
use claude_agent::{AgentDefinition, QueryOptions};
use std::path::Path;

pub const CLAUDE_INSTALL_HINT: &str =
    "Install Claude Code from https://docs.anthropic.com/en/docs/claude-code";

/// `askcc <mode> --github-issue-url <url>`: fetch the issue, render the mode's
/// prompt, and hand it to `claude`. Returns the agent's exit code.
pub fn run(
    settings: &Settings,
    mode: AgentMode,
    issue_url: &str,
    cwd: Option<&Path>,
) -> anyhow::Result<i32> {
    let store = TemplateStore::new(settings.templates_dir());
    store.bootstrap().with_context(|| {
        format!(
            "failed to create default templates in {}",
            store.dir().display()
        )
    })?;

    let config = store.load_agent_config(mode)?;
    let claude = require_cli("claude", CLAUDE_INSTALL_HINT)?;

    let issue_content = issue::fetch_issue(issue_url)?;
    let prompt = config.render_prompt(&issue_content);
    tracing::info!("Prompt prepared for '{mode}' command");

    let opts = QueryOptions {
        dangerously_skip_permissions: true,
        cwd: cwd.map(Path::to_path_buf),
        path_to_executable: Some(claude),
        ..Default::default()
    }
    .with_agent(
        config.agent_name(),
        AgentDefinition::new(config.description(), config.system_prompt.clone()),
    );

    tracing::info!("Requesting '{}' from Claude Code ...", config.agent_name());
    let code = claude_agent::run(&prompt, &opts).context("failed to run claude")?;
    tracing::info!("Claude Code finished (exit code: {code})");
    Ok(code)
}
