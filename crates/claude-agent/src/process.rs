use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::types::{AgentDefinition, QueryOptions};
use crate::{ClaudeAgentError, Result};

/// Agent output is streamed to the terminal as plain text.
const OUTPUT_FORMAT: &str = "text";

// ─── One-shot run ─────────────────────────────────────────────────────────

/// Run `claude -p <prompt>` to completion with stdio inherited from this
/// process, so the agent's output reaches the terminal unmodified.
///
/// Returns the child's exit code. A child killed by a signal reports
/// `128 + signal` on Unix, matching shell conventions.
pub(crate) fn run(prompt: &str, opts: &QueryOptions) -> Result<i32> {
    let mut cmd = build_command(prompt, opts)?;
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .spawn()
        .map_err(|e| ClaudeAgentError::Process(format!("failed to spawn {program}: {e}")))?;
    let status = child.wait()?;
    Ok(exit_code(status))
}

pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

// ─── Command builder ──────────────────────────────────────────────────────

/// Build the `claude` command line for a one-shot prompt.
///
/// `CLAUDECODE` is removed from the environment so this works both from a
/// terminal and from inside a running Claude session.
pub(crate) fn build_command(prompt: &str, opts: &QueryOptions) -> Result<Command> {
    let exe = opts
        .path_to_executable
        .clone()
        .unwrap_or_else(|| PathBuf::from("claude"));
    let mut cmd = Command::new(exe);
    cmd.env_remove("CLAUDECODE");

    cmd.arg("-p")
        .arg(prompt)
        .arg("--output-format")
        .arg(OUTPUT_FORMAT);

    if opts.dangerously_skip_permissions {
        cmd.arg("--dangerously-skip-permissions");
    }

    if !opts.agents.is_empty() {
        cmd.arg("--agents").arg(build_agents_json(&opts.agents)?);
    }

    if let Some(cwd) = &opts.cwd {
        cmd.current_dir(cwd);
    }

    tracing::debug!(
        "claude args: {:?}",
        cmd.get_args()
            .map(|a| a.to_string_lossy())
            .filter(|a| &**a != prompt)
            .collect::<Vec<_>>()
    );

    Ok(cmd)
}

/// Serialise subagents into the JSON string expected by `claude --agents '...'`.
///
/// Format: `{"<name>":{"description":"...","prompt":"..."}}`
pub(crate) fn build_agents_json(agents: &BTreeMap<String, AgentDefinition>) -> Result<String> {
    Ok(serde_json::to_string(agents)?)
}
