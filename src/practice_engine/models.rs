use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subjects and topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    Math,
    English,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Math => write!(f, "Math"),
            Subject::English => write!(f, "English"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseTopic {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Spelling,
    Vocabulary,
    Grammar,
}

impl ExerciseTopic {
    /// All topics in canonical order.
    pub const ALL: [ExerciseTopic; 7] = [
        ExerciseTopic::Addition,
        ExerciseTopic::Subtraction,
        ExerciseTopic::Multiplication,
        ExerciseTopic::Division,
        ExerciseTopic::Spelling,
        ExerciseTopic::Vocabulary,
        ExerciseTopic::Grammar,
    ];

    pub fn subject(self) -> Subject {
        match self {
            ExerciseTopic::Addition
            | ExerciseTopic::Subtraction
            | ExerciseTopic::Multiplication
            | ExerciseTopic::Division => Subject::Math,
            ExerciseTopic::Spelling | ExerciseTopic::Vocabulary | ExerciseTopic::Grammar => {
                Subject::English
            }
        }
    }

    /// The lowercase identifier used in API query strings and stored data.
    pub fn slug(self) -> &'static str {
        match self {
            ExerciseTopic::Addition => "addition",
            ExerciseTopic::Subtraction => "subtraction",
            ExerciseTopic::Multiplication => "multiplication",
            ExerciseTopic::Division => "division",
            ExerciseTopic::Spelling => "spelling",
            ExerciseTopic::Vocabulary => "vocabulary",
            ExerciseTopic::Grammar => "grammar",
        }
    }

    pub fn from_slug(s: &str) -> Option<ExerciseTopic> {
        ExerciseTopic::ALL.into_iter().find(|t| t.slug() == s)
    }
}

impl fmt::Display for ExerciseTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExerciseTopic::Addition => "Addition",
            ExerciseTopic::Subtraction => "Subtraction",
            ExerciseTopic::Multiplication => "Multiplication",
            ExerciseTopic::Division => "Division",
            ExerciseTopic::Spelling => "Spelling",
            ExerciseTopic::Vocabulary => "Vocabulary",
            ExerciseTopic::Grammar => "Grammar",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Medium,
}

impl DifficultyLevel {
    pub fn slug(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
        }
    }

    pub fn from_slug(s: &str) -> Option<DifficultyLevel> {
        match s {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" => Some(DifficultyLevel::Medium),
            _ => None,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Easy => write!(f, "Easy"),
            DifficultyLevel::Medium => write!(f, "Medium"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// What the caller wants next: one specific topic, a random topic from a
/// subject, or anything at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicSelector {
    Topic(ExerciseTopic),
    Subject(Subject),
    Any,
}

impl From<ExerciseTopic> for TopicSelector {
    fn from(t: ExerciseTopic) -> Self {
        TopicSelector::Topic(t)
    }
}

impl From<Subject> for TopicSelector {
    fn from(s: Subject) -> Self {
        TopicSelector::Subject(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRequest {
    pub selector: TopicSelector,
    pub difficulty: DifficultyLevel,
    pub rng_seed: Option<u64>,
}

impl ExerciseRequest {
    /// Minimal constructor: accepts an [`ExerciseTopic`], a [`Subject`], or a
    /// [`TopicSelector`] directly. Defaults: Easy difficulty, entropy seed.
    pub fn new(selector: impl Into<TopicSelector>) -> Self {
        ExerciseRequest {
            selector: selector.into(),
            difficulty: DifficultyLevel::Easy,
            rng_seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Exercise
// ---------------------------------------------------------------------------

/// The expected answer, tagged by kind.
///
/// `Numeric` answers are checked by extracting a number from the transcript;
/// `Textual` answers are checked by case-insensitive substring containment
/// against any accepted variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKey {
    Numeric {
        value: i64,
    },
    Textual {
        accepted: Vec<String>,
        /// Spoken back to the learner on a wrong answer, e.g.
        /// "The correct spelling is C-A-T".
        correct_answer: String,
    },
}

impl AnswerKey {
    pub fn is_numeric(&self) -> bool {
        matches!(self, AnswerKey::Numeric { .. })
    }
}

/// One practice item. Immutable once generated; discarded after the next
/// exercise is dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_id: String,
    pub topic: ExerciseTopic,
    pub difficulty: DifficultyLevel,
    /// The spoken prompt, e.g. "What is 3 plus 4?".
    pub question: String,
    /// The on-screen rendering, e.g. "3 + 4 = ?".
    pub display: String,
    pub answer: AnswerKey,
    /// Optional extra teaching text read out after a correct answer.
    pub explanation: Option<String>,
}

impl Exercise {
    pub fn prompt(&self) -> &str {
        &self.question
    }

    pub fn subject(&self) -> Subject {
        self.topic.subject()
    }
}
