//! Prompt Composer: builds the full clause-analysis prompt.
//!
//! Pure and deterministic: the same input always yields the same prompt.

use crate::analysis::models::ClauseChangeInput;
use crate::analysis::prompts::{
    INPUT_LEAD_IN, METHODOLOGY_PREAMBLE, OUTPUT_REQUIREMENT, WORKED_EXAMPLES,
};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, SECTION_BREAK};

/// Composes preamble, worked examples, output requirement and the serialized input.
pub fn compose(input: &ClauseChangeInput) -> String {
    let mut sections: Vec<&str> = Vec::with_capacity(WORKED_EXAMPLES.len() + 3);
    sections.push(METHODOLOGY_PREAMBLE);
    sections.extend(WORKED_EXAMPLES.iter().copied());
    sections.push(OUTPUT_REQUIREMENT);

    let mut prompt = sections.join(SECTION_BREAK);
    prompt.push_str("\n\n");
    prompt.push_str(JSON_ONLY_INSTRUCTION);
    prompt.push_str(SECTION_BREAK);
    prompt.push_str(INPUT_LEAD_IN);
    prompt.push_str("\n\n");
    prompt.push_str(&serialize_input(input));
    prompt
}

fn serialize_input(input: &ClauseChangeInput) -> String {
    // Only strings inside; serialization cannot fail in practice.
    serde_json::to_string_pretty(input).unwrap_or_else(|_| format!("{input:?}"))
}
