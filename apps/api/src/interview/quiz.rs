//! Quiz generation, grading, and assessment persistence.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::outcome::{run_generation, GenerationOutcome};
use crate::llm_client::{GeminiClient, OutputMode};
use crate::models::artifact::{AssessmentRow, QuestionResult};
use crate::models::user::UserRow;
use crate::store::{CareerStore, NewAssessment};

use super::{fallback, prompts};

const CATEGORY_TECHNICAL: &str = "Technical";

/// One multiple-choice question in the shape the model is instructed to
/// emit. Field names stay camelCase because they are part of the prompt
/// contract, and the client echoes them back unchanged when submitting
/// results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// The wrapper object the quiz prompt asks for.
#[derive(Debug, Deserialize)]
struct QuizPayload {
    questions: Vec<QuizQuestion>,
}

/// Generates a quiz for the caller's industry and skills. Degradable
/// failures resolve to the fixed question bank; blocked or credential
/// failures surface.
pub async fn generate_quiz(
    gemini: &GeminiClient,
    user: &UserRow,
) -> Result<Vec<QuizQuestion>, AppError> {
    let prompt = prompts::quiz_prompt(user);
    let outcome = run_generation(gemini, &prompt, OutputMode::Json).await;
    resolve_quiz(outcome)
}

fn resolve_quiz(outcome: GenerationOutcome) -> Result<Vec<QuizQuestion>, AppError> {
    let payload: QuizPayload = outcome
        .resolve_json("interview quiz", || QuizPayload {
            questions: fallback::quiz_questions(),
        })
        .map_err(AppError::from)?;
    Ok(payload.questions)
}

/// Pairs questions with the user's answers. Callers must have validated
/// that both slices are the same length.
pub fn grade(questions: &[QuizQuestion], answers: &[String]) -> Vec<QuestionResult> {
    questions
        .iter()
        .zip(answers)
        .map(|(question, user_answer)| QuestionResult {
            question: question.question.clone(),
            answer: question.correct_answer.clone(),
            user_answer: user_answer.clone(),
            is_correct: question.correct_answer == *user_answer,
            explanation: question.explanation.clone(),
        })
        .collect()
}

/// Percentage of correct answers, 0.0 for an empty result set.
pub fn score(results: &[QuestionResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let correct = results.iter().filter(|r| r.is_correct).count();
    correct as f64 / results.len() as f64 * 100.0
}

/// Generates a tip from the wrong answers. The tip is auxiliary: every
/// failure, fatal ones included, degrades to the fixed tip so the
/// surrounding save never fails on its account.
async fn improvement_tip(
    gemini: &GeminiClient,
    industry: &str,
    wrong_answers: &[QuestionResult],
) -> String {
    let prompt = prompts::improvement_prompt(industry, wrong_answers);
    let outcome = run_generation(gemini, &prompt, OutputMode::Text).await;
    outcome
        .resolve_text("improvement tip", || fallback::IMPROVEMENT_TIP.to_string())
        .unwrap_or_else(|kind| {
            warn!("improvement tip: fatal generation failure ({kind:?}), using fixed tip");
            fallback::IMPROVEMENT_TIP.to_string()
        })
}

fn build_assessment(
    results: Vec<QuestionResult>,
    improvement_tip: Option<String>,
) -> NewAssessment {
    NewAssessment {
        quiz_score: score(&results),
        questions: results,
        category: CATEGORY_TECHNICAL.to_string(),
        improvement_tip,
    }
}

/// Grades the submitted quiz and persists the assessment. A tip is
/// generated only when at least one answer is wrong.
pub async fn save_result(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
    questions: Vec<QuizQuestion>,
    answers: Vec<String>,
) -> Result<AssessmentRow, AppError> {
    let results = grade(&questions, &answers);
    let wrong_answers: Vec<QuestionResult> = results
        .iter()
        .filter(|r| !r.is_correct)
        .cloned()
        .collect();

    let tip = if wrong_answers.is_empty() {
        None
    } else {
        let industry = user.industry.as_deref().unwrap_or("General");
        Some(improvement_tip(gemini, industry, &wrong_answers).await)
    };

    let assessment = store
        .create_assessment(user.id, &build_assessment(results, tip))
        .await?;

    info!(
        "Assessment {} saved for user {} (score {:.1})",
        assessment.id, user.id, assessment.quiz_score
    );
    Ok(assessment)
}
