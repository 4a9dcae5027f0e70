use crate::prompts;
use std::fmt;

/// The variable every user-prompt template must reference.
pub const ISSUE_CONTENT_VAR: &str = "issue_content";

/// Operating modes that dispatch to the coding agent.
///
/// `install` is a CLI command with no template and is not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentMode {
    Plan,
    Develop,
    Review,
    Explore,
    Diagnose,
}

impl AgentMode {
    pub const ALL: [AgentMode; 5] = [
        AgentMode::Plan,
        AgentMode::Develop,
        AgentMode::Review,
        AgentMode::Explore,
        AgentMode::Diagnose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentMode::Plan => "plan",
            AgentMode::Develop => "develop",
            AgentMode::Review => "review",
            AgentMode::Explore => "explore",
            AgentMode::Diagnose => "diagnose",
        }
    }

    pub fn spec(self) -> &'static AgentTemplateSpec {
        match self {
            AgentMode::Plan => &PLAN,
            AgentMode::Develop => &DEVELOP,
            AgentMode::Review => &REVIEW,
            AgentMode::Explore => &EXPLORE,
            AgentMode::Diagnose => &DIAGNOSE,
        }
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled-in persona and prompt defaults for one mode.
#[derive(Debug, PartialEq, Eq)]
pub struct AgentTemplateSpec {
    /// Agent name passed to `claude --agents`.
    pub name: &'static str,
    pub description: &'static str,
    pub system_prompt_default: &'static str,
    pub user_prompt_template_default: &'static str,
    pub system_prompt_file: &'static str,
    pub user_prompt_file: &'static str,
    pub required_variables: &'static [&'static str],
}

impl AgentTemplateSpec {
    /// `(file name, default text)` for both templates of this mode.
    pub fn template_files(&self) -> [(&'static str, &'static str); 2] {
        [
            (self.system_prompt_file, self.system_prompt_default),
            (self.user_prompt_file, self.user_prompt_template_default),
        ]
    }
}

static PLAN: AgentTemplateSpec = AgentTemplateSpec {
    name: "planner",
    description: "Plans implementation for given issue",
    system_prompt_default: prompts::PLAN_SYSTEM_PROMPT,
    user_prompt_template_default: prompts::PLAN_USER_PROMPT,
    system_prompt_file: "PLAN_SYSTEM_PROMPT.md",
    user_prompt_file: "PLAN_USER_PROMPT.md",
    required_variables: &[ISSUE_CONTENT_VAR],
};

static DEVELOP: AgentTemplateSpec = AgentTemplateSpec {
    name: "developer",
    description: "Develops a planned/defined issue",
    system_prompt_default: prompts::DEVELOP_SYSTEM_PROMPT,
    user_prompt_template_default: prompts::DEVELOP_USER_PROMPT,
    system_prompt_file: "DEVELOP_SYSTEM_PROMPT.md",
    user_prompt_file: "DEVELOP_USER_PROMPT.md",
    required_variables: &[ISSUE_CONTENT_VAR],
};

static REVIEW: AgentTemplateSpec = AgentTemplateSpec {
    name: "reviewer",
    description: "Reviews a GitHub issue for clarity, completeness, and feasibility",
    system_prompt_default: prompts::REVIEW_SYSTEM_PROMPT,
    user_prompt_template_default: prompts::REVIEW_USER_PROMPT,
    system_prompt_file: "REVIEW_SYSTEM_PROMPT.md",
    user_prompt_file: "REVIEW_USER_PROMPT.md",
    required_variables: &[ISSUE_CONTENT_VAR],
};

static EXPLORE: AgentTemplateSpec = AgentTemplateSpec {
    name: "explorer",
    description: "Investigates a GitHub issue and proposes best-practice solutions",
    system_prompt_default: prompts::EXPLORE_SYSTEM_PROMPT,
    user_prompt_template_default: prompts::EXPLORE_USER_PROMPT,
    system_prompt_file: "EXPLORE_SYSTEM_PROMPT.md",
    user_prompt_file: "EXPLORE_USER_PROMPT.md",
    required_variables: &[ISSUE_CONTENT_VAR],
};

static DIAGNOSE: AgentTemplateSpec = AgentTemplateSpec {
    name: "diagnostician",
    description: "Investigates a reported issue and identifies potential causes",
    system_prompt_default: prompts::DIAGNOSE_SYSTEM_PROMPT,
    user_prompt_template_default: prompts::DIAGNOSE_USER_PROMPT,
    system_prompt_file: "DIAGNOSE_SYSTEM_PROMPT.md",
    user_prompt_file: "DIAGNOSE_USER_PROMPT.md",
    required_variables: &[ISSUE_CONTENT_VAR],
};
