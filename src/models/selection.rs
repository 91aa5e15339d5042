//! The user's position in the content hierarchy.

use tracing::debug;

use super::QuestionType;

/// Current subject, unit, question type and question index.
///
/// Any change to the (subject, unit, type) key sends the index back to the
/// first question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    subject: Option<String>,
    unit: Option<String>,
    question_type: QuestionType,
    current_index: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Select a subject. The unit is cleared since it belonged to the
    /// previous subject.
    pub fn select_subject(&mut self, name: &str) {
        if self.subject.as_deref() == Some(name) {
            return;
        }
        debug!(subject = name, "subject selected");
        self.subject = Some(name.to_string());
        self.unit = None;
        self.current_index = 0;
    }

    pub fn clear_subject(&mut self) {
        if self.subject.take().is_some() {
            self.unit = None;
            self.current_index = 0;
        }
    }

    pub fn select_unit(&mut self, name: &str) {
        if self.unit.as_deref() == Some(name) {
            return;
        }
        debug!(unit = name, "unit selected");
        self.unit = Some(name.to_string());
        self.current_index = 0;
    }

    pub fn clear_unit(&mut self) {
        if self.unit.take().is_some() {
            self.current_index = 0;
        }
    }

    pub fn select_type(&mut self, question_type: QuestionType) {
        if self.question_type == question_type {
            return;
        }
        debug!(%question_type, "question type selected");
        self.question_type = question_type;
        self.current_index = 0;
    }

    /// Jump straight to question `index`.
    pub fn select_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Reset a stale index after a list has been (re)loaded.
    pub fn clamp_index(&mut self, len: usize) -> usize {
        if self.current_index >= len {
            self.current_index = 0;
        }
        self.current_index
    }
}
