use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Question, QuestionType};

pub const DEFAULT_DATA_DIR: &str = "data";

/// Errors raised while reading a question list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view over a `<root>/<subject>/<unit>/<Type>.json` tree.
///
/// Nothing is cached: every call goes back to the filesystem.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Subject folders under the root, sorted by name.
    ///
    /// A missing root is created so that content can be dropped in later.
    pub fn list_subjects(&self) -> Vec<String> {
        if !self.root.exists() {
            match fs::create_dir_all(&self.root) {
                Ok(()) => info!(root = %self.root.display(), "created content directory"),
                Err(err) => {
                    warn!(root = %self.root.display(), error = %err, "cannot create content directory")
                }
            }
            return Vec::new();
        }
        list_dirs(&self.root)
    }

    /// Unit folders of `subject`, sorted by name.
    pub fn list_units(&self, subject: &str) -> Vec<String> {
        let subject_path = self.root.join(subject);
        if !subject_path.exists() {
            return Vec::new();
        }
        list_dirs(&subject_path)
    }

    pub fn questions_path(&self, subject: &str, unit: &str, question_type: QuestionType) -> PathBuf {
        self.root
            .join(subject)
            .join(unit)
            .join(question_type.file_name())
    }

    /// Question list for the triple, in file order.
    ///
    /// A missing file is an empty list, not an error.
    pub fn load_questions(
        &self,
        subject: &str,
        unit: &str,
        question_type: QuestionType,
    ) -> Result<Vec<Question>, LoadError> {
        let path = self.questions_path(subject, unit, question_type);
        if !path.is_file() {
            debug!(path = %path.display(), "no question file");
            return Ok(Vec::new());
        }

        let json_content = fs::read_to_string(&path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;

        let questions: Vec<Question> = serde_json::from_str(&json_content)
            .map_err(|source| LoadError::Parse { path: path.clone(), source })?;

        debug!(path = %path.display(), count = questions.len(), "loaded questions");
        Ok(questions)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

fn list_dirs(path: &Path) -> Vec<String> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot list directory");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_root_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");
        let store = ContentStore::new(&root);

        assert!(store.list_subjects().is_empty());
        assert!(root.is_dir());
        assert!(store.list_subjects().is_empty());
    }

    #[test]
    fn subjects_and_units_are_sorted_dirs() {
        let dir = tempfile::tempdir().unwrap();
        for unit in ["Unit 3", "Unit 1", "Unit 2"] {
            fs::create_dir_all(dir.path().join("Physics").join(unit)).unwrap();
        }
        fs::create_dir_all(dir.path().join("Chemistry")).unwrap();
        write(dir.path(), "notes.txt", "not a subject");
        write(dir.path(), "Physics/readme.md", "not a unit");

        let store = ContentStore::new(dir.path());
        assert_eq!(store.list_subjects(), vec!["Chemistry", "Physics"]);
        assert_eq!(store.list_units("Physics"), vec!["Unit 1", "Unit 2", "Unit 3"]);
        assert!(store.list_units("Chemistry").is_empty());
    }

    #[test]
    fn unknown_subject_has_no_units() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        assert!(store.list_units("History").is_empty());
    }

    #[test]
    fn missing_file_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Math/Algebra/Long.json", "[]");
        let store = ContentStore::new(dir.path());

        let questions = store
            .load_questions("Math", "Algebra", QuestionType::Short)
            .unwrap();
        assert!(questions.is_empty());
    }

    #[test]
    fn loads_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "Math/Algebra/Short.json",
            r#"[{"q":"z?","a":"1"},{"q":"a?","a":"2"},{"q":"m?"}]"#,
        );
        let store = ContentStore::new(dir.path());

        let first = store
            .load_questions("Math", "Algebra", QuestionType::Short)
            .unwrap();
        let prompts: Vec<&str> = first.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["z?", "a?", "m?"]);

        let second = store
            .load_questions("Math", "Algebra", QuestionType::Short)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Math/Algebra/Short.json", "{ not json");
        let store = ContentStore::new(dir.path());

        let err = store
            .load_questions("Math", "Algebra", QuestionType::Short)
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("Short.json"));
    }
}
