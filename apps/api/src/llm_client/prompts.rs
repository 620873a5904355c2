// Shared prompt fragments and prompt-building utilities.
// Each service that needs oracle calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Closing instruction for every prompt whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Horizontal rule separating prompt sections.
pub const SECTION_BREAK: &str = "\n\n---\n\n";
