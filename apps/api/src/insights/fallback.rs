//! Static market tables used when insight generation degrades.
//!
//! Five seeded industries; anything unrecognized gets the Technology table.
//! Salary figures are INR. The output is deterministic for a given industry
//! name.

use crate::models::artifact::{InsightData, SalaryRange};

struct IndustryTable {
    roles: &'static [(&'static str, f64, f64, f64)],
    growth_rate: f64,
    top_skills: &'static [&'static str],
    key_trends: &'static [&'static str],
    recommended_skills: &'static [&'static str],
}

const TECHNOLOGY: IndustryTable = IndustryTable {
    roles: &[
        ("Software Engineer", 500_000.0, 2_000_000.0, 1_200_000.0),
        ("Backend Developer", 600_000.0, 2_200_000.0, 1_300_000.0),
        ("Frontend Developer", 450_000.0, 1_800_000.0, 1_100_000.0),
        ("DevOps Engineer", 700_000.0, 2_500_000.0, 1_500_000.0),
        ("Data Analyst", 400_000.0, 1_600_000.0, 900_000.0),
    ],
    growth_rate: 12.5,
    top_skills: &["React", "Node.js", "SQL", "Cloud", "System Design"],
    key_trends: &[
        "AI Adoption",
        "Cloud Migration",
        "Automation",
        "Remote Work",
        "Cybersecurity",
    ],
    recommended_skills: &["Docker", "TypeScript", "API Development", "AWS", "Git"],
};

const FINANCE: IndustryTable = IndustryTable {
    roles: &[
        ("Financial Analyst", 400_000.0, 1_500_000.0, 900_000.0),
        ("Investment Banker", 800_000.0, 3_000_000.0, 1_800_000.0),
        ("Risk Manager", 600_000.0, 2_000_000.0, 1_200_000.0),
        ("Accountant", 350_000.0, 1_200_000.0, 700_000.0),
        ("Financial Controller", 900_000.0, 2_500_000.0, 1_600_000.0),
    ],
    growth_rate: 8.5,
    top_skills: &[
        "Financial Modeling",
        "Excel",
        "Risk Analysis",
        "Regulations",
        "Data Analysis",
    ],
    key_trends: &[
        "FinTech Growth",
        "Digital Banking",
        "Crypto Adoption",
        "ESG Investing",
        "AI in Finance",
    ],
    recommended_skills: &[
        "Python",
        "Power BI",
        "SQL",
        "Bloomberg Terminal",
        "Financial Planning",
    ],
};

const HEALTHCARE: IndustryTable = IndustryTable {
    roles: &[
        ("Medical Officer", 800_000.0, 2_500_000.0, 1_500_000.0),
        ("Healthcare Administrator", 500_000.0, 1_800_000.0, 1_000_000.0),
        ("Nurse Practitioner", 400_000.0, 1_200_000.0, 700_000.0),
        ("Medical Researcher", 600_000.0, 2_000_000.0, 1_200_000.0),
        ("Pharmacist", 350_000.0, 1_000_000.0, 600_000.0),
    ],
    growth_rate: 9.0,
    top_skills: &[
        "Patient Care",
        "Medical Knowledge",
        "Healthcare IT",
        "Communication",
        "Clinical Skills",
    ],
    key_trends: &[
        "Telemedicine",
        "AI Diagnostics",
        "Preventive Care",
        "Digital Health",
        "Personalized Medicine",
    ],
    recommended_skills: &[
        "EMR Systems",
        "Healthcare Analytics",
        "Medical Coding",
        "Public Health",
        "Research Methods",
    ],
};

const EDUCATION: IndustryTable = IndustryTable {
    roles: &[
        ("Teacher", 300_000.0, 800_000.0, 500_000.0),
        ("Principal", 600_000.0, 1_500_000.0, 1_000_000.0),
        ("Education Consultant", 400_000.0, 1_200_000.0, 700_000.0),
        ("Curriculum Developer", 450_000.0, 1_000_000.0, 650_000.0),
        ("Academic Coordinator", 350_000.0, 900_000.0, 550_000.0),
    ],
    growth_rate: 7.0,
    top_skills: &[
        "Pedagogy",
        "Ed-Tech",
        "Curriculum Design",
        "Assessment",
        "Student Engagement",
    ],
    key_trends: &[
        "Online Learning",
        "Hybrid Education",
        "AI Tutoring",
        "Skill-Based Learning",
        "Gamification",
    ],
    recommended_skills: &[
        "LMS Platforms",
        "Digital Content Creation",
        "Data Analytics",
        "Educational Psychology",
        "Communication",
    ],
};

const MARKETING: IndustryTable = IndustryTable {
    roles: &[
        ("Digital Marketing Manager", 500_000.0, 1_800_000.0, 1_100_000.0),
        ("SEO Specialist", 350_000.0, 1_200_000.0, 700_000.0),
        ("Content Strategist", 400_000.0, 1_500_000.0, 900_000.0),
        ("Social Media Manager", 300_000.0, 1_000_000.0, 600_000.0),
        ("Brand Manager", 600_000.0, 2_000_000.0, 1_200_000.0),
    ],
    growth_rate: 10.0,
    top_skills: &[
        "SEO",
        "Content Marketing",
        "Social Media",
        "Analytics",
        "Brand Strategy",
    ],
    key_trends: &[
        "AI Marketing",
        "Influencer Marketing",
        "Video Content",
        "Personalization",
        "Voice Search",
    ],
    recommended_skills: &[
        "Google Ads",
        "Meta Ads",
        "Marketing Automation",
        "A/B Testing",
        "CRM Tools",
    ],
};

fn table_for(industry: &str) -> &'static IndustryTable {
    match industry {
        "Finance" => &FINANCE,
        "Healthcare" => &HEALTHCARE,
        "Education" => &EDUCATION,
        "Marketing" => &MARKETING,
        _ => &TECHNOLOGY,
    }
}

pub fn industry_insight(industry: &str) -> InsightData {
    let table = table_for(industry);
    InsightData {
        salary_ranges: table
            .roles
            .iter()
            .map(|&(role, min, max, median)| SalaryRange {
                role: role.to_string(),
                min,
                max,
                median,
                location: "India".to_string(),
            })
            .collect(),
        growth_rate: table.growth_rate,
        demand_level: "High".to_string(),
        top_skills: to_owned(table.top_skills),
        market_outlook: "Positive".to_string(),
        key_trends: to_owned(table.key_trends),
        recommended_skills: to_owned(table.recommended_skills),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
