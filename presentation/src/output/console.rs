//! Console output formatter for conversations and answers

use colored::Colorize;
use covenant_domain::{ConfigIssue, ConversationMessage, Sender, Severity};
use serde_json::json;

/// Formats conversation output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one conversation message with a sender label
    pub fn format_message(message: &ConversationMessage) -> String {
        let label = match message.sender {
            Sender::User => "You".cyan().bold(),
            Sender::Assistant => "Assistant".green().bold(),
        };
        format!("{} {}", label, message.text)
    }

    /// Format a whole transcript, one message per block
    pub fn format_transcript(messages: &[ConversationMessage]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Conversation"));
        for message in messages {
            output.push_str(&format!(
                "{} {}\n\n",
                format!("[{}]", message.timestamp.format("%H:%M:%S")).dimmed(),
                Self::format_message(message)
            ));
        }
        output
    }

    /// Format a one-shot answer
    pub fn format_answer(question: &str, answer: &str) -> String {
        format!(
            "{} {}\n\n{} {}\n",
            "Question:".cyan().bold(),
            question,
            "Answer:".green().bold(),
            answer
        )
    }

    /// Format a one-shot answer as JSON
    pub fn format_answer_json(question: &str, answer: &str) -> String {
        serde_json::to_string_pretty(&json!({ "question": question, "answer": answer }))
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Format a configuration issue for startup output
    pub fn format_issue(issue: &ConfigIssue) -> String {
        match issue.severity {
            Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
            Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
        }
    }

    /// Format an error message
    pub fn format_error(error: &str) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn header(title: &str) -> String {
        let line = "═".repeat(50);
        format!(
            "\n{}\n{}\n{}\n\n",
            line.blue(),
            format!("  {}", title).bold(),
            line.blue()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use covenant_domain::ConfigIssueCode;

    fn message(sender: Sender, text: &str) -> ConversationMessage {
        ConversationMessage {
            sender,
            text: text.to_string(),
            sequence: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_format_message_contains_text() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_message(&message(Sender::User, "What is the rent?"));
        assert_eq!(output, "You What is the rent?");
        let output = ConsoleFormatter::format_message(&message(Sender::Assistant, "$900."));
        assert_eq!(output, "Assistant $900.");
    }

    #[test]
    fn test_format_transcript_keeps_order() {
        colored::control::set_override(false);
        let messages = vec![
            message(Sender::Assistant, "first"),
            message(Sender::User, "second"),
        ];
        let output = ConsoleFormatter::format_transcript(&messages);
        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_answer_json() {
        let output = ConsoleFormatter::format_answer_json("q?", "a.");
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["question"], "q?");
        assert_eq!(parsed["answer"], "a.");
    }

    #[test]
    fn test_format_issue() {
        colored::control::set_override(false);
        let issue = ConfigIssue::warning(
            ConfigIssueCode::MissingValue {
                field: "store.path".to_string(),
            },
            "store.path is not set",
        );
        assert_eq!(
            ConsoleFormatter::format_issue(&issue),
            "warning: store.path is not set"
        );
    }
}
