// Prompt constants for the interview prep service.
// Reuses the placeholder-template style shared across services.

use crate::models::artifact::QuestionResult;
use crate::models::user::UserRow;

/// Quiz generation prompt template (JSON mode).
/// Replace: {industry}, {expertise_clause}
///
/// The JSON skeleton is the contract `QuizQuestion` parses; keep the two in
/// sync when either changes.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate 10 technical interview questions for a {industry} professional{expertise_clause}.

Each question should be multiple choice with 4 options.

Return the response in this JSON format only:
{
  "questions": [
    {
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correctAnswer": "string",
      "explanation": "string"
    }
  ]
}"#;

/// Improvement tip prompt template.
/// Replace: {industry}, {wrong_questions}
pub const TIP_PROMPT_TEMPLATE: &str = r#"The user got the following {industry} technical interview questions wrong:

{wrong_questions}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn/practice."#;

pub fn quiz_prompt(user: &UserRow) -> String {
    let industry = user.industry.as_deref().unwrap_or("General");
    let expertise_clause = if user.skills.is_empty() {
        String::new()
    } else {
        format!(" with expertise in {}", user.skills.join(", "))
    };

    QUIZ_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{expertise_clause}", &expertise_clause)
}

pub fn improvement_prompt(industry: &str, wrong_answers: &[QuestionResult]) -> String {
    let wrong_questions = wrong_answers
        .iter()
        .map(|result| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                result.question, result.answer, result.user_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    TIP_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{wrong_questions}", &wrong_questions)
}
