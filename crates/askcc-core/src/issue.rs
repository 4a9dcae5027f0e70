//! GitHub issue retrieval through the `gh` CLI.

use crate::error::{AskccError, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;
use url::Url;

pub const GH_INSTALL_HINT: &str = "Install it from https://cli.github.com/";

/// Minimum path segments in `<owner>/<repo>/issues/<n>`.
const MIN_ISSUE_URL_PARTS: usize = 4;

/// Location of a single GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl IssueRef {
    /// `owner/repo`, as used in API paths.
    pub fn repo_nwo(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn api_path(&self) -> String {
        format!("repos/{}/issues/{}", self.repo_nwo(), self.number)
    }
}

/// Base that relative input such as `owner/repo/issues/1` is resolved against.
const GITHUB_BASE_URL: &str = "https://github.com/";

/// Parse `https://github.com/<owner>/<repo>/issues/<n>` into its parts.
///
/// Only the URL path is inspected, so a trailing slash, query string, or
/// fragment does not affect the result. Input without a scheme is read as a
/// path relative to `https://github.com/`.
pub fn parse_issue_url(url: &str) -> Result<IssueRef> {
    let invalid = || AskccError::InvalidIssueUrl(url.to_string());

    let base = Url::parse(GITHUB_BASE_URL).map_err(|_| invalid())?;
    let parsed = Url::options()
        .base_url(Some(&base))
        .parse(url)
        .map_err(|_| invalid())?;

    let parts: Vec<&str> = parsed.path().trim_matches('/').split('/').collect();
    if parts.len() < MIN_ISSUE_URL_PARTS || parts[2] != "issues" {
        return Err(invalid());
    }
    let number = parts[3];
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number = number.parse::<u64>().map_err(|_| invalid())?;
    Ok(IssueRef {
        owner: parts[0].to_string(),
        repo: parts[1].to_string(),
        number,
    })
}

/// Resolve an external CLI on `PATH`.
pub fn require_cli(name: &str, install_hint: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| AskccError::MissingDependency {
        tool: name.to_string(),
        hint: install_hint.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub user: CommentUser,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentUser {
    pub login: String,
}

/// Decode `gh api --paginate` output. Each page is its own JSON array and
/// pages are written back to back, so the stream may hold several arrays.
pub fn parse_comments(stdout: &str) -> Result<Vec<IssueComment>> {
    let mut comments = Vec::new();
    for page in serde_json::Deserializer::from_str(stdout).into_iter::<Vec<IssueComment>>() {
        comments.extend(
            page.map_err(|e| AskccError::IssueFetch(format!("malformed comments JSON: {e}")))?,
        );
    }
    Ok(comments)
}

/// Combine the issue text and its comments into the block handed to the agent.
pub fn render_issue(number: u64, issue_text: &str, comments: &[IssueComment]) -> String {
    let mut out = format!("Issue #{number}:\n{issue_text}");
    if !comments.is_empty() {
        let rendered: Vec<String> = comments
            .iter()
            .map(|c| {
                format!(
                    "Comment by @{}:\n{}",
                    c.user.login,
                    c.body.as_deref().unwrap_or("")
                )
            })
            .collect();
        out.push_str("\n\nComments:\n");
        out.push_str(&rendered.join("\n---\n"));
    }
    out
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Runs `gh api` calls for issue data.
#[derive(Debug, Clone)]
pub struct IssueFetcher {
    gh: PathBuf,
}

impl IssueFetcher {
    /// Locate `gh` on `PATH`.
    pub fn from_path() -> Result<Self> {
        Ok(Self::with_executable(require_cli("gh", GH_INSTALL_HINT)?))
    }

    pub fn with_executable(gh: impl Into<PathBuf>) -> Self {
        Self { gh: gh.into() }
    }

    /// Fetch the issue at `url` with all of its comments, rendered as one block.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let issue = parse_issue_url(url)?;
        tracing::info!(
            "Fetching issue #{} from {} ...",
            issue.number,
            issue.repo_nwo()
        );
        let issue_path = issue.api_path();
        let issue_text = self.gh_api(&[issue_path.as_str(), "--jq", ".title, .body"])?;
        let issue_text = issue_text.trim();

        tracing::info!("Fetching comments for issue #{} ...", issue.number);
        let comments_path = format!("{issue_path}/comments");
        let comments = parse_comments(&self.gh_api(&["--paginate", comments_path.as_str()])?)?;
        tracing::info!("Fetched issue with {} comment(s)", comments.len());

        Ok(render_issue(issue.number, issue_text, &comments))
    }

    fn gh_api(&self, args: &[&str]) -> Result<String> {
        tracing::debug!("{} api {}", self.gh.display(), args.join(" "));
        let output = Command::new(&self.gh)
            .arg("api")
            .args(args)
            .output()
            .map_err(|e| AskccError::IssueFetch(format!("failed to run gh: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AskccError::IssueFetch(format!(
                "gh api {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| AskccError::IssueFetch(format!("gh output is not UTF-8: {e}")))
    }
}

/// Resolve `gh` and fetch the issue at `url`.
pub fn fetch_issue(url: &str) -> Result<String> {
    IssueFetcher::from_path()?.fetch(url)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
