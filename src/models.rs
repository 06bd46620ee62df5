use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sparse per-day activity counts keyed by ISO date (`YYYY-MM-DD`).
/// Absent keys mean zero; the backend owns this data and the client never
/// mutates it.
pub type ActivityRecord = HashMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Login form payload; serialized as-is into the login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup form fields. `confirm_password` exists for local validation only
/// and is never sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gfg_link: Option<String>,
}

impl Question {
    /// Case-insensitive substring match on the question name. A blank query
    /// matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total: u32,
    pub completed: u32,
    pub easy_completed: u32,
    pub medium_completed: u32,
    pub hard_completed: u32,
}

/// Questions of one topic split by difficulty, preserving backend order
/// within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedQuestions {
    pub easy: Vec<Question>,
    pub medium: Vec<Question>,
    pub hard: Vec<Question>,
}

impl GroupedQuestions {
    pub fn bucket(&self, difficulty: Difficulty) -> &[Question] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Applies the search box to every bucket.
    pub fn filtered(&self, query: &str) -> GroupedQuestions {
        let keep = |bucket: &[Question]| {
            bucket
                .iter()
                .filter(|q| q.matches_search(query))
                .cloned()
                .collect()
        };
        GroupedQuestions {
            easy: keep(&self.easy),
            medium: keep(&self.medium),
            hard: keep(&self.hard),
        }
    }
}

pub fn group_by_difficulty(questions: &[Question]) -> GroupedQuestions {
    let mut grouped = GroupedQuestions::default();
    for question in questions {
        match question.difficulty {
            Difficulty::Easy => grouped.easy.push(question.clone()),
            Difficulty::Medium => grouped.medium.push(question.clone()),
            Difficulty::Hard => grouped.hard.push(question.clone()),
        }
    }
    grouped
}

pub fn completed_count(questions: &[Question]) -> usize {
    questions.iter().filter(|q| q.completed).count()
}
