//! Prompt template for grounded answers

/// Exact sentence the backend must reply with when the agreement does not
/// contain the answer.
pub const REFUSAL_SENTENCE: &str =
    "I'm sorry, but the answer to that question cannot be found in the provided document.";

const SECTION_RULE: &str = "---";

/// Template for the grounded question-answering prompt
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction block placed before the question and context
    pub fn grounded_instructions() -> String {
        format!(
            r#"You are a helpful assistant answering questions about a legal document.
Based ONLY on the provided "Contract Context", answer the user's "Question".
Do not use outside knowledge and do not guess.
If the answer cannot be found in the context, respond with exactly: "{REFUSAL_SENTENCE}""#
        )
    }

    /// Render the full prompt for a question and its assembled context.
    ///
    /// Pure: no randomness, no I/O.
    pub fn render(question: &str, context: &str) -> String {
        format!(
            "{instructions}\n\nQuestion:\n{SECTION_RULE}\n{question}\n{SECTION_RULE}\n\nContract Context:\n{SECTION_RULE}\n{context}\n{SECTION_RULE}\n",
            instructions = Self::grounded_instructions(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_sections_in_order() {
        let prompt = PromptTemplate::render("When is rent due?", "Rent is due on the 1st.");
        let instructions = prompt.find("Based ONLY").unwrap();
        let question = prompt.find("Question:\n---\nWhen is rent due?\n---").unwrap();
        let context = prompt
            .find("Contract Context:\n---\nRent is due on the 1st.\n---")
            .unwrap();
        assert!(instructions < question);
        assert!(question < context);
    }

    #[test]
    fn test_render_includes_refusal_sentence_verbatim() {
        let prompt = PromptTemplate::render("q", "c");
        assert!(prompt.contains(REFUSAL_SENTENCE));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = PromptTemplate::render("What is the deposit?", "Notice period is 30 days.");
        let b = PromptTemplate::render("What is the deposit?", "Notice period is 30 days.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_exact_layout() {
        let prompt = PromptTemplate::render("Q?", "C.");
        assert!(prompt.ends_with("Question:\n---\nQ?\n---\n\nContract Context:\n---\nC.\n---\n"));
    }
}
