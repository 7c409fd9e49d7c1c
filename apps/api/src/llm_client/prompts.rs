// Shared prompt fragments. Each service that needs LLM calls defines its
// own prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Appended to every JSON-mode prompt. JSON mode also sets the response
/// MIME type, but models still occasionally wrap output in fences or add
/// commentary; the instruction plus `strip_json_fences` covers both ends.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Return ONLY valid JSON. No additional text, no markdown formatting, no code fences, \
     no explanations.";
