use std::collections::BTreeSet;

use super::quest::QuestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    pub description: &'static str,
    pub key_points: &'static [&'static str],
}

/// Where a learner is in a quest's reading material.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LessonProgress {
    quest: QuestId,
    current: usize,
    completed: BTreeSet<usize>,
}

/// Result of moving forward from a lesson card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    Lesson(LessonProgress),
    /// The last card was read; the quiz comes next.
    Quiz(QuestId),
}

impl LessonProgress {
    pub fn new(quest: QuestId) -> Self {
        Self {
            quest,
            current: 0,
            completed: BTreeSet::new(),
        }
    }

    pub fn quest(&self) -> QuestId {
        self.quest
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.quest.lessons().len()
    }

    pub fn lesson(&self) -> &'static Lesson {
        &self.quest.lessons()[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total()
    }

    /// Share of lesson cards read so far, rounded to the nearest percent.
    pub fn percent(&self) -> u8 {
        match self.total() {
            0 => 0,
            total => (self.completed.len() as f64 / total as f64 * 100.0).round() as u8,
        }
    }

    /// Marks the current card as read and moves on.
    pub fn next(mut self) -> Next {
        self.completed.insert(self.current);
        if self.is_last() {
            return Next::Quiz(self.quest);
        }
        self.current += 1;
        Next::Lesson(self)
    }

    #[must_use]
    pub fn previous(mut self) -> Self {
        self.current = self.current.saturating_sub(1);
        self
    }
}
