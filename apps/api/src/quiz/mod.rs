// Skill quizzes: shuffled questions from the static banks, topped up with
// generic questions when a bank is smaller than the request.

pub mod bank;
pub mod handlers;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::quiz::bank::{find_bank, BankQuestion, GENERIC_TEMPLATES};

pub const PASSING_SCORE: u32 = 80;
pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("Skill name is required")]
    EmptySkill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub answer: usize,
    pub skill: String,
}

impl QuizQuestion {
    fn from_bank(entry: &BankQuestion, skill: &str) -> Self {
        Self {
            question: entry.question.replace("{skill}", skill),
            options: entry.options.iter().map(|o| o.to_string()).collect(),
            answer: entry.answer,
            skill: skill.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub skill: String,
    pub total_questions: usize,
    pub passing_score: u32,
    pub questions: Vec<QuizQuestion>,
}

fn generic_questions(skill: &str) -> Vec<QuizQuestion> {
    GENERIC_TEMPLATES
        .iter()
        .map(|entry| QuizQuestion::from_bank(entry, skill))
        .collect()
}

pub fn generate_quiz<R: Rng + ?Sized>(
    skill: &str,
    num_questions: usize,
    rng: &mut R,
) -> Result<Quiz, QuizError> {
    let skill = skill.trim();
    if skill.is_empty() {
        return Err(QuizError::EmptySkill);
    }

    let mut questions: Vec<QuizQuestion> = match find_bank(skill) {
        Some(bank) => bank
            .questions
            .iter()
            .map(|entry| QuizQuestion::from_bank(entry, bank.skill))
            .collect(),
        None => generic_questions(skill),
    };
    questions.shuffle(rng);

    if questions.len() < num_questions {
        let mut extra = generic_questions(skill);
        extra.shuffle(rng);
        questions.extend(extra);
    }
    questions.truncate(num_questions);

    Ok(Quiz {
        skill: skill.to_string(),
        total_questions: questions.len(),
        passing_score: PASSING_SCORE,
        questions,
    })
}
