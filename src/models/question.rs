use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Shown when a single-answer record carries no `a` field.
pub const NO_ANSWER: &str = "No answer provided.";

/// Which data file of a unit to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuestionType {
    #[default]
    Short,
    Long,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::Short, QuestionType::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Short => "Short",
            QuestionType::Long => "Long",
        }
    }

    /// File name of this type's question list inside a unit folder.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Label used by the mode picker.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Short => "Short Questions",
            QuestionType::Long => "Long Questions",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            QuestionType::Short => QuestionType::Long,
            QuestionType::Long => QuestionType::Short,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer body with its optional attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerPart {
    pub text: String,
    /// Graph description source, passed through untouched.
    pub diagram: Option<String>,
    /// Pre-formatted table text.
    pub table: Option<String>,
}

/// The two shapes a question's answer can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(AnswerPart),
    /// Compare/contrast style answer. Part B may be missing from the record.
    Split {
        part_a: AnswerPart,
        part_b: Option<AnswerPart>,
    },
}

/// A question as loaded from a `Short.json` / `Long.json` list.
///
/// The answer shape is decided once while deserializing, so renderers only
/// match on [`Answer`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "QuestionRecord")]
pub struct Question {
    pub prompt: String,
    pub answer: Answer,
}

/// On-disk layout of a question record.
///
/// Text fields accept any JSON scalar; numbers and booleans are shown as
/// written.
#[derive(Deserialize)]
struct QuestionRecord {
    #[serde(deserialize_with = "required_text")]
    q: String,
    #[serde(default, deserialize_with = "text")]
    a: Option<String>,
    #[serde(default, deserialize_with = "present")]
    answer_a: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    answer_b: Option<Option<String>>,
    #[serde(default, deserialize_with = "text")]
    graphviz: Option<String>,
    #[serde(default, deserialize_with = "text")]
    graphviz_a: Option<String>,
    #[serde(default, deserialize_with = "text")]
    graphviz_b: Option<String>,
    #[serde(default, deserialize_with = "text")]
    table: Option<String>,
    #[serde(default, deserialize_with = "text")]
    table_a: Option<String>,
    #[serde(default, deserialize_with = "text")]
    table_b: Option<String>,
}

const EXPECTED_TEXT: &str = "a string, number or boolean";

/// Scalar value as display text; `null` is `None`.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &EXPECTED_TEXT)),
        Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &EXPECTED_TEXT)),
    }
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer)?.ok_or_else(|| de::Error::invalid_type(Unexpected::Unit, &EXPECTED_TEXT))
}

/// Distinguishes a key that is present with `null` from an absent key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(Some)
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let answer = match record.answer_a {
            Some(text_a) => Answer::Split {
                part_a: AnswerPart {
                    text: text_a.unwrap_or_default(),
                    diagram: record.graphviz_a,
                    table: record.table_a,
                },
                part_b: record.answer_b.map(|text_b| AnswerPart {
                    text: text_b.unwrap_or_default(),
                    diagram: record.graphviz_b,
                    table: record.table_b,
                }),
            },
            None => Answer::Single(AnswerPart {
                text: record.a.unwrap_or_else(|| NO_ANSWER.to_string()),
                diagram: record.graphviz,
                table: record.table,
            }),
        };

        Self {
            prompt: record.q,
            answer,
        }
    }
}
