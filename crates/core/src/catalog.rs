use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::model::{Lesson, LessonDraft, LessonError, LessonId};

const BUILTIN_LESSONS: &str = include_str!("../data/lessons.json");

/// Read-only lesson table, keyed by id, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lessons: Vec<Lesson>,
    index: HashMap<LessonId, usize>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error("duplicate lesson id: {0}")]
    DuplicateId(LessonId),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl Catalog {
    /// The lessons bundled with the page.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled data fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_LESSONS)
    }

    /// Parse and validate a JSON array of lessons.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation error
    /// from `from_drafts`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<LessonDraft> = serde_json::from_str(json)?;
        Self::from_drafts(drafts)
    }

    /// Read a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as `from_json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate drafts into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Lesson` for an invalid lesson and
    /// `CatalogError::DuplicateId` when two lessons share an id.
    pub fn from_drafts(drafts: Vec<LessonDraft>) -> Result<Self, CatalogError> {
        let mut lessons = Vec::with_capacity(drafts.len());
        let mut index = HashMap::with_capacity(drafts.len());
        for draft in drafts {
            let lesson = draft.validate()?;
            if index.contains_key(lesson.id()) {
                return Err(CatalogError::DuplicateId(lesson.id().clone()));
            }
            index.insert(lesson.id().clone(), lessons.len());
            lessons.push(lesson);
        }
        Ok(Self { lessons, index })
    }

    /// Pure lookup; an unknown id is `None`.
    #[must_use]
    pub fn get(&self, id: &LessonId) -> Option<&Lesson> {
        self.index.get(id).map(|&pos| &self.lessons[pos])
    }

    /// Lookup by raw key, as carried by an "open" control.
    #[must_use]
    pub fn get_str(&self, id: &str) -> Option<&Lesson> {
        id.parse::<LessonId>().ok().and_then(|id| self.get(&id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &LessonId> {
        self.lessons.iter().map(Lesson::id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
