// Prompt constants for the cover letter service.
// Reuses the placeholder-template style shared across services.

/// Generation prompt template.
/// Replace: {job_title}, {company_name}, {industry}, {experience},
///          {skills}, {bio}, {keywords_line}, {job_description}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Write a professional, compelling cover letter for a {job_title} position at {company_name}.

About the candidate:
- Industry: {industry}
- Years of Experience: {experience}
- Core Skills: {skills}
- Professional Background: {bio}
{keywords_line}
Job Description:
{job_description}

Requirements:
1. Use a professional, enthusiastic, and confident tone
2. Highlight 2-3 specific skills that match the job requirements
3. Include concrete examples of achievements or experience
4. Show genuine interest in the company and role
5. Keep it concise (300-400 words maximum)
6. Use proper business letter formatting in markdown
7. Address how the candidate's background aligns with the role
8. End with a strong call to action

Structure:
- Opening paragraph: Express interest and mention the position
- Body paragraphs (2-3): Highlight relevant experience, skills, and achievements
- Closing paragraph: Express enthusiasm and request an interview

Format the letter in markdown with proper sections."#;

/// Regeneration prompt template.
/// Replace: {current_letter}, {improvement_notes}
pub const REGENERATION_PROMPT_TEMPLATE: &str = r#"Improve the following cover letter based on these notes:

Current Cover Letter:
{current_letter}

Improvement Notes:
{improvement_notes}

Requirements:
1. Maintain the same structure but enhance the content
2. Make it more impactful and persuasive
3. Keep all factual information accurate
4. Improve the tone and language
5. Format in markdown

Return only the improved cover letter, no explanations."#;

use crate::models::user::UserRow;

use super::generator::GenerateParams;

/// Builds the generation prompt. Pure and infallible: missing profile
/// fields become neutral placeholders instead of errors.
pub fn generation_prompt(
    user: &UserRow,
    industry_keywords: &[String],
    params: &GenerateParams,
) -> String {
    let experience = user
        .experience
        .map(|years| years.to_string())
        .unwrap_or_else(|| "Entry-level".to_string());
    let skills = if user.skills.is_empty() {
        "General skills".to_string()
    } else {
        user.skills.join(", ")
    };
    let bio = user
        .bio
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or("Motivated professional");
    let industry = user.industry.as_deref().unwrap_or("General");
    let keywords_line = if industry_keywords.is_empty() {
        String::new()
    } else {
        format!(
            "- Industry-relevant skills: {}\n",
            industry_keywords.join(", ")
        )
    };
    let job_description = params
        .job_description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No job description provided");

    GENERATION_PROMPT_TEMPLATE
        .replace("{job_title}", &params.job_title)
        .replace("{company_name}", &params.company_name)
        .replace("{industry}", industry)
        .replace("{experience}", &experience)
        .replace("{skills}", &skills)
        .replace("{bio}", bio)
        .replace("{keywords_line}", &keywords_line)
        .replace("{job_description}", job_description)
}

pub fn regeneration_prompt(current_letter: &str, improvement_notes: &str) -> String {
    REGENERATION_PROMPT_TEMPLATE
        .replace("{current_letter}", current_letter)
        .replace("{improvement_notes}", improvement_notes)
}
