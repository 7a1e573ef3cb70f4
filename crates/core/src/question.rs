//! Validation of new-question submissions.
//!
//! The add-question form posts every field as a string. A submission is
//! accepted only when all four fields are non-blank after trimming and the
//! numeric fields parse; anything else is unprocessable.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::DbId;

/// Request body for `POST /questions`.
///
/// Missing fields deserialize as empty strings so they fail validation the
/// same way a blank field does.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuestionSubmission {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub question: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub answer: String,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "integer"))]
    pub difficulty: String,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "integer"))]
    pub category: String,
}

/// A validated question ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl QuestionSubmission {
    /// Validate every field and convert into a [`NewQuestion`].
    pub fn into_new_question(self) -> Result<NewQuestion, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Unprocessable(e.to_string()))?;

        let difficulty = parse_field(&self.difficulty, "difficulty")?;
        let category = parse_field(&self.category, "category")?;

        Ok(NewQuestion {
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            category,
            difficulty,
        })
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, field: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Unprocessable(format!("{field} must be an integer")))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn integer(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.trim().parse::<i64>().is_err() {
        return Err(ValidationError::new("not_an_integer"));
    }
    Ok(())
}

/// Accept `"3"` or `3` for fields the form sends as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}
