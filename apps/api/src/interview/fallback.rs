//! Fixed question bank and tip used when quiz generation degrades.

use super::quiz::QuizQuestion;

/// Generic tip stored when tip generation fails for any reason. The tip is
/// auxiliary: its failure must never fail the surrounding save.
pub const IMPROVEMENT_TIP: &str =
    "Focus on strengthening your fundamentals and practice more problem-solving exercises.";

/// Ten general software questions, served regardless of industry.
pub fn quiz_questions() -> Vec<QuizQuestion> {
    let bank: [(&str, [&str; 4], &str, &str); 10] = [
        (
            "What does REST stand for?",
            [
                "Representational State Transfer",
                "Remote Execution Syntax Tree",
                "Relational Service Technology",
                "Redundant System Technique",
            ],
            "Representational State Transfer",
            "REST is an architectural style for designing networked applications.",
        ),
        (
            "Which data structure uses FIFO?",
            ["Stack", "Queue", "Tree", "Graph"],
            "Queue",
            "Queues use First-In-First-Out ordering.",
        ),
        (
            "Which keyword declares a constant in JavaScript?",
            ["var", "let", "static", "const"],
            "const",
            "`const` is used to declare immutable variables.",
        ),
        (
            "Which SQL command retrieves data?",
            ["UPDATE", "DELETE", "INSERT", "SELECT"],
            "SELECT",
            "`SELECT` is used to fetch data from a database.",
        ),
        (
            "Which is a JavaScript framework?",
            ["Django", "Flask", "React", "Laravel"],
            "React",
            "React is a frontend JS library.",
        ),
        (
            "What is the time complexity of binary search?",
            ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
            "O(log n)",
            "Binary search halves the problem size each step.",
        ),
        (
            "Which HTTP status means 'Not Found'?",
            ["200", "301", "404", "500"],
            "404",
            "404 means the resource does not exist.",
        ),
        (
            "Which is a NoSQL database?",
            ["MySQL", "PostgreSQL", "MongoDB", "SQLite"],
            "MongoDB",
            "MongoDB stores documents in JSON-like format.",
        ),
        (
            "Which tag is used to create a hyperlink in HTML?",
            ["<div>", "<span>", "<a>", "<link>"],
            "<a>",
            "<a> defines a hyperlink.",
        ),
        (
            "What does CSS stand for?",
            [
                "Computer Style Sheets",
                "Cascading Style Sheets",
                "Creative Styling Syntax",
                "Color Style Settings",
            ],
            "Cascading Style Sheets",
            "CSS styles the layout of web pages.",
        ),
    ];

    bank.iter()
        .map(|(question, options, correct_answer, explanation)| QuizQuestion {
            question: (*question).to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct_answer: (*correct_answer).to_string(),
            explanation: (*explanation).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_well_formed() {
        let questions = quiz_questions();

        assert_eq!(questions.len(), 10);
        for q in &questions {
            assert_eq!(q.options.len(), 4, "{}", q.question);
            assert!(
                q.options.contains(&q.correct_answer),
                "correct answer must be one of the options: {}",
                q.question
            );
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_bank_is_deterministic() {
        assert_eq!(quiz_questions(), quiz_questions());
    }
}
