mod question;
mod selection;

pub use question::{Answer, AnswerPart, NO_ANSWER, Question, QuestionType};
pub use selection::Selection;
