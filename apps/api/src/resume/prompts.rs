// Prompt constants for the resume service.
// Reuses the placeholder-template style shared across services.

use crate::models::user::UserRow;

/// Section improvement prompt template.
/// Replace: {section_type}, {industry}, {current}, {skills_line}
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer, improve the following {section_type} description for a {industry} professional.
Make it more impactful, quantifiable, and aligned with industry standards.

Current content: "{current}"
{skills_line}
Requirements:
1. Use strong action verbs (e.g., Led, Architected, Optimized, Delivered)
2. Include metrics and quantifiable results where possible
3. Highlight relevant technical skills and technologies
4. Keep it concise but detailed (2-3 sentences)
5. Focus on achievements and impact over responsibilities
6. Use industry-specific keywords that would pass ATS systems
7. Demonstrate leadership, innovation, or problem-solving

Format the response as a single paragraph without any additional text, explanations, or preamble.
Start directly with the improved content."#;

/// Professional summary prompt template.
/// Replace: {industry}, {experience}, {skills}, {bio}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a compelling professional summary for a {industry} professional with {experience} experience.

Skills: {skills}
Industry: {industry}
Bio: {bio}

Create a 3-4 sentence professional summary that:
1. Highlights core competencies and expertise
2. Mentions years of experience
3. Shows career achievements or impact
4. Ends with career goals or value proposition

Write in first person without using "I" or "my". Be confident and achievement-focused."#;

/// Builds the improvement prompt. The skills line comes from the cached
/// industry insight and is omitted entirely when there is none.
pub fn improve_prompt(
    user: &UserRow,
    top_skills: &[String],
    current: &str,
    section_type: &str,
) -> String {
    let industry = user.industry.as_deref().unwrap_or("General");
    let skills_line = if top_skills.is_empty() {
        String::new()
    } else {
        format!("Key skills in {industry}: {}\n", top_skills.join(", "))
    };

    IMPROVE_PROMPT_TEMPLATE
        .replace("{section_type}", section_type)
        .replace("{industry}", industry)
        .replace("{current}", current)
        .replace("{skills_line}", &skills_line)
}

/// Builds the summary prompt. Pure and infallible: missing profile fields
/// become neutral placeholders instead of errors.
pub fn summary_prompt(user: &UserRow) -> String {
    let industry = user.industry.as_deref().unwrap_or("General");
    let experience = user
        .experience
        .map(|years| format!("{years} years of"))
        .unwrap_or_else(|| "entry-level".to_string());
    let skills = if user.skills.is_empty() {
        "General technical skills".to_string()
    } else {
        user.skills.join(", ")
    };
    let bio = user
        .bio
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or("N/A");

    SUMMARY_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{experience}", &experience)
        .replace("{skills}", &skills)
        .replace("{bio}", bio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_user() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            external_id: "ext-1".to_string(),
            email: "dev@example.com".to_string(),
            name: Some("Dev Kumar".to_string()),
            industry: Some("Technology".to_string()),
            experience: Some(6),
            bio: Some("Backend engineer".to_string()),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_improve_prompt_embeds_section_and_skills() {
        let prompt = improve_prompt(
            &make_user(),
            &["Cloud".to_string(), "React".to_string()],
            "Managed the deployment pipeline",
            "experience",
        );

        assert!(prompt.contains("the following experience description"));
        assert!(prompt.contains("for a Technology professional"));
        assert!(prompt.contains("Current content: \"Managed the deployment pipeline\""));
        assert!(prompt.contains("Key skills in Technology: Cloud, React"));
    }

    #[test]
    fn test_improve_prompt_omits_skills_line_without_insight() {
        let prompt = improve_prompt(&make_user(), &[], "Wrote tests", "project");

        assert!(!prompt.contains("Key skills in"));
        assert!(prompt.contains("Current content: \"Wrote tests\"\n\nRequirements:"));
    }

    #[test]
    fn test_summary_prompt_fills_profile_fields() {
        let prompt = summary_prompt(&make_user());

        assert!(prompt.contains("for a Technology professional with 6 years of experience"));
        assert!(prompt.contains("Skills: Rust, SQL"));
        assert!(prompt.contains("Bio: Backend engineer"));
    }

    #[test]
    fn test_summary_prompt_substitutes_placeholders_for_missing_fields() {
        let mut user = make_user();
        user.industry = None;
        user.experience = None;
        user.skills = vec![];
        user.bio = None;

        let prompt = summary_prompt(&user);

        assert!(prompt.contains("for a General professional with entry-level experience"));
        assert!(prompt.contains("Skills: General technical skills"));
        assert!(prompt.contains("Bio: N/A"));
    }
}
