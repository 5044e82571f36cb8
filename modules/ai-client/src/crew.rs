//! Single-pass crew orchestration: role-described agents run
//! description/expected-output tasks sequentially over one chat model,
//! each task seeing the previous task's output as context.

use anyhow::{bail, Result};
use tracing::info;

use crate::openai::OpenAi;

/// A role-described actor. The role/goal/backstory triple becomes the
/// system prompt for every task bound to this agent.
#[derive(Debug, Clone)]
pub struct Agent {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl Agent {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            goal: String::new(),
            backstory: String::new(),
        }
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    pub(crate) fn system_prompt(&self) -> String {
        let mut prompt = format!("You are {}.", self.role);
        if !self.goal.is_empty() {
            prompt.push_str(&format!("\n\nYour goal: {}", self.goal));
        }
        if !self.backstory.is_empty() {
            prompt.push_str(&format!("\n\n{}", self.backstory));
        }
        prompt
    }
}

/// A unit of work bound to an agent.
#[derive(Debug, Clone)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
    pub agent: Agent,
}

impl Task {
    pub fn new(agent: Agent, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            expected_output: String::new(),
            agent,
        }
    }

    pub fn expected_output(mut self, expected_output: impl Into<String>) -> Self {
        self.expected_output = expected_output.into();
        self
    }

    pub(crate) fn user_prompt(&self, context: Option<&str>) -> String {
        let mut prompt = self.description.clone();
        if let Some(context) = context {
            prompt.push_str(&format!(
                "\n\nOutput of the previous task, for context:\n{}",
                context
            ));
        }
        if !self.expected_output.is_empty() {
            prompt.push_str(&format!("\n\nExpected output:\n{}", self.expected_output));
        }
        prompt
    }
}

/// A run container: tasks executed in order against one model.
pub struct Crew {
    tasks: Vec<Task>,
}

impl Crew {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Execute every task sequentially and return the final task's output.
    pub async fn kickoff(&self, llm: &OpenAi) -> Result<String> {
        if self.tasks.is_empty() {
            bail!("Crew has no tasks to run");
        }

        let mut previous: Option<String> = None;
        for (i, task) in self.tasks.iter().enumerate() {
            info!(
                task = i + 1,
                total = self.tasks.len(),
                role = %task.agent.role,
                model = %llm.model(),
                "Running crew task"
            );
            let output = llm
                .chat_completion(task.agent.system_prompt(), task.user_prompt(previous.as_deref()))
                .await?;
            previous = Some(output);
        }

        // Loop ran at least once, so previous is always set here.
        Ok(previous.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyst() -> Agent {
        Agent::new("a test analyst")
            .goal("analyze the input")
            .backstory("You have seen many inputs.")
    }

    #[test]
    fn system_prompt_includes_role_goal_backstory() {
        let prompt = analyst().system_prompt();
        assert!(prompt.starts_with("You are a test analyst."));
        assert!(prompt.contains("Your goal: analyze the input"));
        assert!(prompt.contains("You have seen many inputs."));
    }

    #[test]
    fn system_prompt_skips_empty_sections() {
        let prompt = Agent::new("a minimal agent").system_prompt();
        assert_eq!(prompt, "You are a minimal agent.");
    }

    #[test]
    fn user_prompt_embeds_description_verbatim() {
        let description = "Analyze this:\n\nError: No search keyword provided";
        let task = Task::new(analyst(), description);
        assert!(task.user_prompt(None).starts_with(description));
    }

    #[test]
    fn user_prompt_appends_context_and_expected_output() {
        let task = Task::new(analyst(), "Summarize.").expected_output("A summary.");
        let prompt = task.user_prompt(Some("previous findings"));
        assert!(prompt.contains("previous findings"));
        assert!(prompt.ends_with("Expected output:\nA summary."));
    }

    #[tokio::test]
    async fn kickoff_rejects_empty_crew() {
        let llm = OpenAi::new("test-key", "test-model");
        let err = Crew::new(vec![]).kickoff(&llm).await.unwrap_err();
        assert!(err.to_string().contains("no tasks"));
    }
}
