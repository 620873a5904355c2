// All prompt constants for the clause analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Methodology preamble. Lists the analysis fields in their required order.
pub const METHODOLOGY_PREAMBLE: &str = r#"**Objective:**

You analyze clauses of a Non-Disclosure and Confidentiality Agreement (NDA). Learn the methodology from the worked examples below, then apply it to the clause supplied at the end of this prompt.

**Methodology:**

For each clause you receive:

1. **Categorize:** assign a category label to the clause.
2. **Summarize:** give a concise summary of the clause's main points.
3. **Assess risks:** identify the risks the clause creates for the Disclosing Party and for the Receiving Party.
4. **Suggest improvements:** comment on how the clause could be improved for each party (the examples focus on the Disclosing Party), then give concrete revised wording that takes both sets of suggestions into account.
5. **Review changes:** the input carries the original clause, the modified clause and a changelog of edits made by a third party. Put special emphasis on those changes and the risks they introduce.

**Analysis fields (all required, in this order):**

* `The clause category is:` -> `clauseCategory`
* `The summary of this clause is:` -> `summary`
* `The potential risks for the disclosing party are:` -> `risksDisclosingParty`
* `The potential risks for the receiving party are:` -> `risksReceivingParty`
* `The comments and descriptive improvement suggestions in favor of the disclosing party are:` -> `improvementsDisclosingParty`
* `The comments and descriptive improvement suggestions in favor of the receiving party are:` -> `improvementsReceivingParty`
* `The specific wording suggestion considering both improvement suggestions is:` -> `suggestedWording`

Additionally, `commentsOnChanges` holds your assessment of the changelog entries. Write "Not applicable" in any field that does not apply; never omit a field."#;

/// Worked examples. Each maps an original clause to the expected JSON record.
pub const WORKED_EXAMPLES: &[&str] = &[
    r#"**Example: Parties**

Original text:
This Non-Disclosure and Confidentiality Agreement (the "Agreement") is entered into May 02, 2025 (the "Effective Date") by and between Quantum Innovations Inc., a corporation organized under the laws of the State of Washington, represented by its CEO ("Disclosing Party"), and Michael Thompson ("Receiving Party"), also individually referred to as the "Party", and collectively the "Parties".

Expected output:
{
  "clauseIdentifier": "Parties",
  "originalClauseText": "This Non-Disclosure and Confidentiality Agreement (the \"Agreement\") is entered into May 02, 2025 ...",
  "analysis": {
    "clauseCategory": "Parties",
    "summary": "Identifies Quantum Innovations Inc. as Disclosing Party and Michael Thompson as Receiving Party, and defines the Effective Date.",
    "risksDisclosingParty": "Not applicable",
    "risksReceivingParty": "Not applicable",
    "improvementsDisclosingParty": "Not applicable",
    "improvementsReceivingParty": "Not applicable",
    "suggestedWording": "This Non-Disclosure and Confidentiality Agreement (the \"Agreement\") is entered into May 02, 2025 ...",
    "commentsOnChanges": "No changes submitted."
  }
}"#,
    r#"**Example: Confidential Information Definition**

Original text:
1. Confidential Information. The confidential information ("Confidential Information") includes any information that is only known by the Disclosing Party, and not known by the general public at the time it is disclosed, whether tangible or intangible, and through whatever means it is disclosed.
Confidential Information does not include information that:
1.1. The Receiving Party lawfully gained before the Disclosing Party actually disclosed it;
1.2. Becomes available to the general public by no fault of the Receiving Party.

Expected output:
{
  "clauseIdentifier": "Clause 1 - Confidential Information Definition",
  "originalClauseText": "1. Confidential Information. The confidential information (\"Confidential Information\") includes ...",
  "analysis": {
    "clauseCategory": "Confidential Information Definition",
    "summary": "Defines Confidential Information broadly; excludes information known beforehand or becoming public.",
    "risksDisclosingParty": "Ambiguities may allow the Receiving Party to argue information was previously known or public.",
    "risksReceivingParty": "Potentially all information of the Disclosing Party falls under the definition.",
    "improvementsDisclosingParty": "Clarify that the Receiving Party bears the burden of proof that information falls within the exceptions.",
    "improvementsReceivingParty": "List examples of Confidential Information, even if not exhaustively.",
    "suggestedWording": "1. Confidential Information. ... 1.1. Confidential Information includes in particular, but is not limited to: technical data; trade secrets; research; financial information. ... The Receiving Party shall bear the burden of proof to demonstrate that the information falls within the exceptions.",
    "commentsOnChanges": "No changes submitted."
  }
}"#,
    r#"**Example: Return of Confidential Information**

Original text:
4. Return of Confidential Information. Upon termination of this Agreement, the Receiving Party must return all tangible materials it has in its possession and permanently delete all files that contain any part of the Confidential Information.

Expected output:
{
  "clauseIdentifier": "Clause 4 - Return of Confidential Information",
  "originalClauseText": "4. Return of Confidential Information. Upon termination of this Agreement, ...",
  "analysis": {
    "clauseCategory": "Return and Deletion of Information",
    "summary": "Return and delete information upon termination.",
    "risksDisclosingParty": "No audit rights to verify deletion.",
    "risksReceivingParty": "Not applicable",
    "improvementsDisclosingParty": "Add audit rights and a certificate of deletion.",
    "improvementsReceivingParty": "Not applicable",
    "suggestedWording": "4. Return of Confidential Information. ... The Receiving Party shall provide a written certification of return and destruction, and permit an independent audit upon request.",
    "commentsOnChanges": "No changes submitted."
  }
}"#,
    r#"**Example: Penalties (with a submitted change)**

Original text:
7. Penalties. The Receiving Party shall pay a penalty of up to $1,000,000 for any breach of this Agreement at the discretion of the Disclosing Party.

Changelog:
[{"type": "Modification", "description": "Penalty reduced from $1,000,000 to $10,000"}]

Expected output:
{
  "clauseIdentifier": "Clause 7 - Penalties",
  "originalClauseText": "7. Penalties. The Receiving Party shall pay a penalty of up to $1,000,000 ...",
  "analysis": {
    "clauseCategory": "Penalties",
    "summary": "Fixed penalty for any breach of the Agreement.",
    "risksDisclosingParty": "Risk of unenforceability as punitive damages.",
    "risksReceivingParty": "Not applicable",
    "improvementsDisclosingParty": "Reframe as a liability cap rather than a penalty to improve enforceability.",
    "improvementsReceivingParty": "Not applicable",
    "suggestedWording": "7. Limitation of Liability. The liability of the Receiving Party shall be capped up to $1,000,000 for any damages resulting from a breach of this Agreement. The Parties agree that this amount shall not be considered a penalty.",
    "commentsOnChanges": "The reduction to $10,000 removes most of the deterrent effect for the Disclosing Party and should be rejected or justified."
  }
}"#,
];

/// Output structure requirement. Followed by `JSON_ONLY_INSTRUCTION`.
pub const OUTPUT_REQUIREMENT: &str = r#"**Output structure requirement:**

Return exactly one JSON object with this EXACT schema. Every value is a string; no field may be null or missing:
{
  "clauseIdentifier": "...",
  "originalClauseText": "...",
  "analysis": {
    "clauseCategory": "...",
    "summary": "...",
    "risksDisclosingParty": "...",
    "risksReceivingParty": "...",
    "improvementsDisclosingParty": "...",
    "improvementsReceivingParty": "...",
    "suggestedWording": "...",
    "commentsOnChanges": "..."
  }
}"#;

/// Lead-in for the serialized clause input.
pub const INPUT_LEAD_IN: &str = "Now analyze the following clause on your own. \
    The input is a JSON document with the original clause, the modified clause \
    and the changes made by a third party:";

/// Free-form suggestion prompt. Replace `{clause_text}` before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = "Analyze the following legal clause and suggest \
improvements or better alternatives. Return a list of suggestions.\n\nClause: {clause_text}";
