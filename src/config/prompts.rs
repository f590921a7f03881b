//! Prompt templates for tldw.
//!
//! The default system prompt asks Claude for a structured JSON summary; a
//! custom instruction from settings or the command line replaces it entirely.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// System and user prompt templates for summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompt {
    pub system: String,
    pub user: String,
}

impl Default for SummaryPrompt {
    fn default() -> Self {
        Self {
            system: r#"You are an expert educator, and summariser of information.
You summarise youtube video transcripts into short readable bites.
You give the appropriate amount of information to summarise a video, in short bullet points.
You include all important information, along with any action items the video calls out.
You return a json object with the keys title and summary of bullet points like so:
The title should be 2-4 words which are as descriptive as possible
{
    "title": "LLM with Python",
    "summary": ["- Install python and pip",
                "- install the requests library",
                "- write a valid get request to query the completions API endpoint",
                "- process the results"]
}"#
            .to_string(),

            user: r#"Video title: {{title}}

Transcript:
{{transcript}}"#
                .to_string(),
        }
    }
}

impl SummaryPrompt {
    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompt = SummaryPrompt::default();
        assert!(prompt.system.contains("title"));
        assert!(prompt.user.contains("{{transcript}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Video title: {{title}}\n\n{{transcript}}";
        let mut vars = HashMap::new();
        vars.insert("title".to_string(), "Intro to Rust".to_string());
        vars.insert("transcript".to_string(), "hello world".to_string());

        let result = SummaryPrompt::render(template, &vars);
        assert_eq!(result, "Video title: Intro to Rust\n\nhello world");
    }
}
