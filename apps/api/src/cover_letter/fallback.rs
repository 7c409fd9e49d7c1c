//! Deterministic cover letter used when the provider degrades. Pure: the
//! letter is a function of the profile, the job parameters, and the date
//! the caller passes in. No I/O, no failure path.

use chrono::NaiveDate;

use crate::models::user::UserRow;

use super::generator::GenerateParams;

pub fn cover_letter(user: &UserRow, params: &GenerateParams, date: NaiveDate) -> String {
    let experience = match user.experience {
        Some(years) => format!("{years} years of"),
        None => "relevant".to_string(),
    };
    let industry = user.industry.as_deref().unwrap_or("the industry");
    let skills = if user.skills.is_empty() {
        "various technologies and methodologies".to_string()
    } else {
        user.skills
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let bio_block = match user.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        Some(bio) => format!("\n{bio}\n"),
        None => String::new(),
    };
    let name = user.name.as_deref().unwrap_or("Applicant");
    let formatted_date = date.format("%B %-d, %Y").to_string();

    format!(
        r#"# Cover Letter

**{formatted_date}**

Dear Hiring Manager,

I am writing to express my strong interest in the **{job_title}** position at **{company_name}**. With {experience} experience in {industry} and a proven track record of success, I am confident in my ability to contribute effectively to your team.

## Relevant Experience

Throughout my career, I have developed expertise in {skills}. My background in {industry} has equipped me with the skills necessary to excel in this role and deliver measurable results.
{bio_block}
## Why {company_name}

I am particularly excited about this opportunity at {company_name} because it aligns perfectly with my career goals and professional interests. I am eager to bring my skills and experience to your organization and contribute to your continued success.

## Next Steps

I would welcome the opportunity to discuss how my background and skills would benefit {company_name}. Thank you for considering my application. I look forward to speaking with you soon.

Sincerely,

**{name}**
{email}"#,
        job_title = params.job_title,
        company_name = params.company_name,
        email = user.email,
    )
}
