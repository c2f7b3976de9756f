use super::lesson::Lesson;
use super::topics::{
    copyrights, five_pillars, neutral_point, no_original_research, not_wikipedia, verifiability,
};
use super::Quiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestId {
    FivePillars,
    WhatWikipediaIsNot,
    Verifiability,
    NoOriginalResearch,
    NeutralPointOfView,
    Copyrights,
}

impl QuestId {
    /// In the order a newcomer is expected to take them.
    pub const ALL: [QuestId; 6] = [
        QuestId::FivePillars,
        QuestId::WhatWikipediaIsNot,
        QuestId::Verifiability,
        QuestId::NoOriginalResearch,
        QuestId::NeutralPointOfView,
        QuestId::Copyrights,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            QuestId::FivePillars => "five-pillars",
            QuestId::WhatWikipediaIsNot => "what-wikipedia-is-not",
            QuestId::Verifiability => "verifiability",
            QuestId::NoOriginalResearch => "no-original-research",
            QuestId::NeutralPointOfView => "neutral-point-of-view",
            QuestId::Copyrights => "copyrights",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuestId::FivePillars => "The Five Pillars of Wikipedia",
            QuestId::WhatWikipediaIsNot => "What Wikipedia Is Not",
            QuestId::Verifiability => "Verifiability",
            QuestId::NoOriginalResearch => "No Original Research",
            QuestId::NeutralPointOfView => "Neutral Point of View",
            QuestId::Copyrights => "Copyrights",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuestId::FivePillars => {
                "Learn the fundamental principles that guide Wikipedia's content and community."
            }
            QuestId::WhatWikipediaIsNot => {
                "Understand common misconceptions about Wikipedia's purpose and content."
            }
            QuestId::Verifiability => {
                "Learn why verifiability is a cornerstone of Wikipedia's content policies."
            }
            QuestId::NoOriginalResearch => {
                "Learn why Wikipedia doesn't publish original thought or research."
            }
            QuestId::NeutralPointOfView => {
                "Learn how to write Wikipedia articles from a neutral perspective."
            }
            QuestId::Copyrights => "Learn about copyright considerations when editing Wikipedia.",
        }
    }

    /// Badges a correct answer in this quest can earn.
    pub fn badge_pool(self) -> &'static [&'static str] {
        match self {
            QuestId::FivePillars => &five_pillars::BADGES,
            QuestId::WhatWikipediaIsNot => &not_wikipedia::BADGES,
            QuestId::Verifiability => &verifiability::BADGES,
            QuestId::NoOriginalResearch => &no_original_research::BADGES,
            QuestId::NeutralPointOfView => &neutral_point::BADGES,
            QuestId::Copyrights => &copyrights::BADGES,
        }
    }

    /// Shown on the results screen when the quiz is passed.
    pub fn mastery_badge(self) -> &'static str {
        match self {
            QuestId::FivePillars => "Five Pillars",
            QuestId::WhatWikipediaIsNot => "Wikipedia Boundaries",
            QuestId::Verifiability => "Verifiability Expert",
            QuestId::NoOriginalResearch => "Research Guardian",
            QuestId::NeutralPointOfView => "Neutrality Guardian",
            QuestId::Copyrights => "Copyright Guardian",
        }
    }

    pub fn quiz(self) -> Quiz {
        let questions: &'static [super::Question] = match self {
            QuestId::FivePillars => &five_pillars::QUESTIONS,
            QuestId::WhatWikipediaIsNot => &not_wikipedia::QUESTIONS,
            QuestId::Verifiability => &verifiability::QUESTIONS,
            QuestId::NoOriginalResearch => &no_original_research::QUESTIONS,
            QuestId::NeutralPointOfView => &neutral_point::QUESTIONS,
            QuestId::Copyrights => &copyrights::QUESTIONS,
        };
        Quiz {
            questions,
            badge_pool: self.badge_pool(),
        }
    }

    pub fn lessons(self) -> &'static [Lesson] {
        match self {
            QuestId::FivePillars => &five_pillars::LESSONS,
            QuestId::WhatWikipediaIsNot => &not_wikipedia::LESSONS,
            QuestId::Verifiability => &verifiability::LESSONS,
            QuestId::NoOriginalResearch => &no_original_research::LESSONS,
            QuestId::NeutralPointOfView => &neutral_point::LESSONS,
            QuestId::Copyrights => &copyrights::LESSONS,
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.title() == title)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_question_is_well_formed() {
        for quest in QuestId::ALL {
            for question in quest.quiz().questions {
                let distinct: HashSet<_> = question.options.iter().collect();
                assert_eq!(distinct.len(), 4, "{}: {}", quest.slug(), question.text);
                assert!(
                    question.has_option(question.correct_option),
                    "{}: {}",
                    quest.slug(),
                    question.text
                );
                assert!(!question.explanation.is_empty());
                let policy = question.policy.expect("every question links a policy");
                assert!(policy.code.starts_with("WP:"));
                assert!(policy.url.starts_with("https://en.wikipedia.org/wiki/Wikipedia:"));
            }
        }
    }

    #[test]
    fn slugs_are_unique_kebab_case() {
        let slugs: HashSet<_> = QuestId::ALL.iter().map(|q| q.slug()).collect();
        assert_eq!(slugs.len(), QuestId::ALL.len());
        for quest in QuestId::ALL {
            assert!(quest.slug().chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn badge_pools_hold_three_distinct_names() {
        let mut all = HashSet::new();
        for quest in QuestId::ALL {
            let pool = quest.badge_pool();
            assert_eq!(pool.len(), 3);
            for badge in pool {
                assert!(all.insert(*badge), "{badge} appears in two pools");
            }
        }
    }

    #[test]
    fn every_quest_has_five_lessons() {
        for quest in QuestId::ALL {
            let lessons = quest.lessons();
            assert_eq!(lessons.len(), 5, "{}", quest.slug());
            assert!(lessons.iter().all(|l| !l.key_points.is_empty()));
        }
    }

    #[test]
    fn lookup_by_title() {
        for quest in QuestId::ALL {
            assert_eq!(QuestId::from_title(quest.title()), Some(quest));
        }
        assert_eq!(QuestId::from_title("five pillars"), None);
        assert_eq!(QuestId::from_title("Notability"), None);
    }

    #[test]
    fn lookup_by_slug() {
        for quest in QuestId::ALL {
            assert_eq!(QuestId::from_slug(quest.slug()), Some(quest));
        }
        assert_eq!(QuestId::from_slug("Five-Pillars"), None);
        assert_eq!(QuestId::from_slug("The Five Pillars of Wikipedia"), None);
    }
}
