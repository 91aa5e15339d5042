use tracing::warn;

use crate::data::ContentStore;
use crate::models::{Question, QuestionType, Selection};

/// Navigation buttons per grid row.
pub const NAV_COLUMNS: usize = 10;

const SCROLL_STEP: u16 = 5;

/// Panel receiving the arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Subjects,
    Units,
    Mode,
    Questions,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Subjects => Focus::Units,
            Focus::Units => Focus::Mode,
            Focus::Mode => Focus::Questions,
            Focus::Questions => Focus::Subjects,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Subjects => Focus::Questions,
            Focus::Units => Focus::Subjects,
            Focus::Mode => Focus::Units,
            Focus::Questions => Focus::Mode,
        }
    }
}

/// Session state of the browser: the content store, what is selected, and
/// the lists read for the current selection.
pub struct App {
    store: ContentStore,
    selection: Selection,
    subjects: Vec<String>,
    units: Vec<String>,
    questions: Vec<Question>,
    load_error: Option<String>,
    focus: Focus,
    answer_scroll: u16,
}

impl App {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            selection: Selection::new(),
            subjects: Vec::new(),
            units: Vec::new(),
            questions: Vec::new(),
            load_error: None,
            focus: Focus::default(),
            answer_scroll: 0,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Message of the last failed load of the current question list.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn answer_scroll(&self) -> u16 {
        self.answer_scroll
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.selection.current_index())
    }

    pub fn current_question_number(&self) -> usize {
        self.selection.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Re-read subjects, units and the question list for the current
    /// selection, falling back to the first entry when a selected folder is
    /// gone, then clamp the question index to the fresh list.
    pub fn refresh(&mut self) {
        self.subjects = self.store.list_subjects();
        let subject_known = self
            .selection
            .subject()
            .is_some_and(|subject| self.subjects.iter().any(|s| s == subject));
        if !subject_known {
            match self.subjects.first() {
                Some(first) => self.selection.select_subject(first),
                None => self.selection.clear_subject(),
            }
        }

        self.units = match self.selection.subject() {
            Some(subject) => self.store.list_units(subject),
            None => Vec::new(),
        };
        let unit_known = self
            .selection
            .unit()
            .is_some_and(|unit| self.units.iter().any(|u| u == unit));
        if !unit_known {
            match self.units.first() {
                Some(first) => self.selection.select_unit(first),
                None => self.selection.clear_unit(),
            }
        }

        self.load_error = None;
        self.questions = match (self.selection.subject(), self.selection.unit()) {
            (Some(subject), Some(unit)) => {
                let question_type = self.selection.question_type();
                match self.store.load_questions(subject, unit, question_type) {
                    Ok(questions) => questions,
                    Err(err) => {
                        warn!(error = %err, "question list unavailable");
                        self.load_error = Some(err.to_string());
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        };

        let before = self.selection.current_index();
        if self.selection.clamp_index(self.questions.len()) != before {
            self.answer_scroll = 0;
        }
    }

    pub fn select_subject(&mut self, name: &str) {
        self.selection.select_subject(name);
        self.answer_scroll = 0;
    }

    pub fn select_unit(&mut self, name: &str) {
        self.selection.select_unit(name);
        self.answer_scroll = 0;
    }

    pub fn select_type(&mut self, question_type: QuestionType) {
        self.selection.select_type(question_type);
        self.answer_scroll = 0;
    }

    pub fn toggle_mode(&mut self) {
        self.select_type(self.selection.question_type().toggle());
    }

    /// Jump to question `index` (0-based).
    pub fn select_index(&mut self, index: usize) {
        if index != self.selection.current_index() {
            self.answer_scroll = 0;
        }
        self.selection.select_index(index);
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.questions.len().checked_sub(1) {
            self.select_index(last);
        }
    }

    /// Jump `delta` questions away from the current one, stopping at the ends
    /// of the list.
    pub fn move_question(&mut self, delta: isize) {
        let Some(last) = self.questions.len().checked_sub(1) else {
            return;
        };
        let current = self.selection.current_index() as isize;
        let target = (current + delta).clamp(0, last as isize);
        self.select_index(target as usize);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Subjects => self.cycle_subject(true),
            Focus::Units => self.cycle_unit(true),
            Focus::Mode => self.toggle_mode(),
            Focus::Questions => self.move_question(NAV_COLUMNS as isize),
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Subjects => self.cycle_subject(false),
            Focus::Units => self.cycle_unit(false),
            Focus::Mode => self.toggle_mode(),
            Focus::Questions => self.move_question(-(NAV_COLUMNS as isize)),
        }
    }

    pub fn scroll_answer_down(&mut self) {
        self.answer_scroll = self.answer_scroll.saturating_add(SCROLL_STEP);
    }

    pub fn scroll_answer_up(&mut self) {
        self.answer_scroll = self.answer_scroll.saturating_sub(SCROLL_STEP);
    }

    /// Keep the scroll offset within the rows that actually overflow.
    pub fn clamp_answer_scroll(&mut self, limit: u16) {
        self.answer_scroll = self.answer_scroll.min(limit);
    }

    fn cycle_subject(&mut self, forward: bool) {
        if let Some(name) = cycle(&self.subjects, self.selection.subject(), forward).map(str::to_owned)
        {
            self.select_subject(&name);
        }
    }

    fn cycle_unit(&mut self, forward: bool) {
        if let Some(name) = cycle(&self.units, self.selection.unit(), forward).map(str::to_owned) {
            self.select_unit(&name);
        }
    }
}

/// Neighbour of `current` in `items`, wrapping at both ends.
fn cycle<'a>(items: &'a [String], current: Option<&str>, forward: bool) -> Option<&'a str> {
    if items.is_empty() {
        return None;
    }
    let len = items.len();
    let next = match current.and_then(|c| items.iter().position(|item| item == c)) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None => 0,
    };
    Some(items[next].as_str())
}
