use tracing::info;

use crate::model::catalog::{lesson_catalog, LessonRecord};

/// In-memory lesson progress. Resets with the app, like the catalog it copies.
#[derive(Debug, Clone)]
pub struct LessonBook {
    lessons: Vec<LessonRecord>,
}

impl Default for LessonBook {
    fn default() -> Self {
        Self::new(lesson_catalog())
    }
}

impl LessonBook {
    pub fn new(lessons: Vec<LessonRecord>) -> Self {
        Self { lessons }
    }

    pub fn lessons(&self) -> &[LessonRecord] {
        &self.lessons
    }

    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed).count()
    }

    /// Marks a lesson finished. Returns `false` for an unknown id.
    pub fn complete(&mut self, id: &str) -> bool {
        match self.lessons.iter_mut().find(|l| l.id == id) {
            Some(lesson) => {
                if !lesson.completed {
                    info!(lesson = %lesson.title, "lesson completed");
                }
                lesson.completed = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::LessonCategory;

    #[test]
    fn completing_flips_flag_once() {
        let mut book = LessonBook::default();
        let before = book.completed_count();

        assert!(book.complete("2"));
        assert!(book.complete("2"));
        assert_eq!(book.completed_count(), before + 1);
    }

    #[test]
    fn unknown_lesson_is_rejected() {
        let mut book = LessonBook::default();
        assert!(!book.complete("nope"));
    }

    #[test]
    fn categories_partition_catalog() {
        let book = LessonBook::default();
        let total: usize = LessonCategory::ALL
            .iter()
            .map(|c| book.lessons().iter().filter(|l| l.category == *c).count())
            .sum();
        assert_eq!(total, book.lessons().len());
    }
}
