//! Prompt template for industry insight generation (JSON mode).

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// The JSON skeleton in the prompt is the contract `InsightData` parses;
/// keep the two in sync when either changes.
const INSIGHT_PROMPT_TEMPLATE: &str = r#"Analyze the current state of the {industry} industry in India and provide insights in the following JSON format:

{
  "salaryRanges": [
    { "role": "string", "min": number, "max": number, "median": number, "location": "India" }
  ],
  "growthRate": number,
  "demandLevel": "High" | "Medium" | "Low",
  "topSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"],
  "marketOutlook": "Positive" | "Neutral" | "Negative",
  "keyTrends": ["trend1", "trend2", "trend3", "trend4", "trend5"],
  "recommendedSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"]
}

Include at least 5 relevant job roles with realistic salary ranges in INR for the Indian market.
{json_instruction}"#;

pub fn insight_prompt(industry: &str) -> String {
    INSIGHT_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{json_instruction}", JSON_ONLY_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_industry_and_schema() {
        let prompt = insight_prompt("Healthcare");

        assert!(prompt.contains("the Healthcare industry in India"));
        assert!(prompt.contains("\"salaryRanges\""));
        assert!(prompt.contains("\"recommendedSkills\""));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
        assert!(!prompt.contains("{industry}"), "placeholders must be filled");
    }
}
