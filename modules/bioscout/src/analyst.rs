//! Analysis step: one Biomedical Research Analyst agent, one task whose
//! description embeds the rendered research text, one crew kickoff.

use anyhow::Result;

use ai_client::{Agent, Crew, OpenAi, Task};

const ANALYST_BACKSTORY: &str = "You are a highly skilled biomedical research analyst with \
expertise in evaluating scientific literature, clinical studies, and medical research. \
You excel at synthesizing complex medical information and identifying key trends, \
methodologies, and clinical implications.";

const EXPECTED_OUTPUT: &str = "A detailed research analysis report containing:\n\
- Executive summary of key findings\n\
- Analysis of research methodologies and study types\n\
- Clinical implications and practical applications\n\
- Current trends and future directions\n\
- Quality assessment and recommendations";

pub fn research_agent(topic: &str) -> Agent {
    Agent::new("a Biomedical Research Analyst")
        .goal(format!(
            "Analyze the biomedical research data provided about {}",
            topic
        ))
        .backstory(ANALYST_BACKSTORY)
}

pub fn analysis_task(topic: &str, research_data: &str) -> Task {
    let description = format!(
        "Analyze the following biomedical research data about '{}':\n\n\
         {}\n\n\
         Based on this research data, provide a comprehensive analysis that includes:\n\
         1. Summary of the key findings and research themes\n\
         2. Analysis of the types of studies and methodologies mentioned\n\
         3. Clinical significance and potential real-world applications\n\
         4. Current trends in this research area\n\
         5. Assessment of the research scope and quality\n\
         6. Recommendations for patients, clinicians, or future research",
        topic, research_data
    );

    Task::new(research_agent(topic), description).expected_output(EXPECTED_OUTPUT)
}

/// Run the analysis crew and return its narrative text.
pub async fn analyze(llm: &OpenAi, topic: &str, research_data: &str) -> Result<String> {
    let crew = Crew::new(vec![analysis_task(topic, research_data)]);
    crew.kickoff(llm).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_embeds_research_data_verbatim() {
        // Whatever text the fetch step rendered goes into the prompt
        // unmodified, sentinel strings included.
        let sentinel = "Error: No search keyword provided";
        let task = analysis_task("diabetes", sentinel);
        assert!(task.description.contains(sentinel));
        assert!(task
            .description
            .starts_with("Analyze the following biomedical research data about 'diabetes':"));
    }

    #[test]
    fn task_lists_all_six_analysis_instructions() {
        let task = analysis_task("cancer", "Found 1 research papers on 'cancer':");
        for n in 1..=6 {
            assert!(task.description.contains(&format!("\n{}. ", n)));
        }
        assert!(task.description.contains("6. Recommendations"));
    }

    #[test]
    fn agent_goal_names_the_topic() {
        let agent = research_agent("gene therapy");
        assert_eq!(
            agent.goal,
            "Analyze the biomedical research data provided about gene therapy"
        );
        assert!(!agent.backstory.is_empty());
    }

    #[test]
    fn expected_output_template_is_attached() {
        let task = analysis_task("diabetes", "data");
        assert!(task
            .expected_output
            .starts_with("A detailed research analysis report"));
    }
}
