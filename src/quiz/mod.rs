pub mod lesson;
pub mod quest;
pub mod reward;
mod topics;

use std::collections::BTreeSet;

use rand::Rng;

use quest::QuestId;
use reward::Reward;

/// Share of correct answers (in percent) needed to pass any quiz.
pub const PASS_THRESHOLD_PERCENT: usize = 80;

/// Link to the policy page a question is about, e.g. `WP:V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyRef {
    pub code: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct_option: &'static str,
    pub explanation: &'static str,
    pub policy: Option<PolicyRef>,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| *o == option)
    }
}

/// A fixed question list plus the badges a correct answer can earn.
#[derive(Debug, Clone, Copy)]
pub struct Quiz {
    pub questions: &'static [Question],
    pub badge_pool: &'static [&'static str],
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// What the learner sees right after locking in an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect {
        correct_answer: &'static str,
        explanation: &'static str,
        policy: Option<PolicyRef>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub reward: Reward,
    /// False when the badge was already in the session's collection.
    pub new_badge: bool,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, Outcome::Correct)
    }
}

/// One learner's pass through one quest's quiz.
///
/// Every operation consumes the session and hands back the updated one, so the
/// caller decides where the state lives (the bot keeps it in dialogue storage).
/// Operations that are not valid in the current state return the session
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizSession {
    quest: QuestId,
    current_index: usize,
    selected_option: Option<String>,
    submitted: bool,
    score: usize,
    coins: u32,
    badges: BTreeSet<String>,
    completed: bool,
}

impl QuizSession {
    pub fn new(quest: QuestId) -> Self {
        Self {
            quest,
            current_index: 0,
            selected_option: None,
            submitted: false,
            score: 0,
            coins: 0,
            badges: BTreeSet::new(),
            completed: false,
        }
    }

    pub fn quest(&self) -> QuestId {
        self.quest
    }

    pub fn quiz(&self) -> Quiz {
        self.quest.quiz()
    }

    pub fn current_question(&self) -> &'static Question {
        &self.quest.quiz().questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn badges(&self) -> &BTreeSet<String> {
        &self.badges
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.quiz().question_count()
    }

    pub fn is_passing(&self) -> bool {
        self.score * 100 >= self.quiz().question_count() * PASS_THRESHOLD_PERCENT
    }

    pub fn score_percent(&self) -> usize {
        match self.quiz().question_count() {
            0 => 0,
            len => self.score * 100 / len,
        }
    }

    #[must_use]
    pub fn select_option(mut self, option: &str) -> Self {
        if self.submitted || self.completed || !self.current_question().has_option(option) {
            return self;
        }
        self.selected_option = Some(option.to_string());
        self
    }

    /// Locks in the selected option and pays out the reward.
    ///
    /// Returns `None` for the feedback when nothing is selected or the answer
    /// was already submitted.
    #[must_use]
    pub fn submit_answer<R: Rng>(mut self, rng: &mut R) -> (Self, Option<Feedback>) {
        if self.submitted || self.completed {
            return (self, None);
        }
        let Some(selected) = self.selected_option.as_deref() else {
            return (self, None);
        };

        let question = self.current_question();
        let correct = question.is_correct(selected);
        self.submitted = true;

        let reward = reward::draw(correct, self.quiz().badge_pool, rng);
        self.coins += reward.coins;
        let new_badge = self.badges.insert(reward.badge.to_string());

        let outcome = if correct {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect {
                correct_answer: question.correct_option,
                explanation: question.explanation,
                policy: question.policy,
            }
        };

        let feedback = Feedback {
            outcome,
            reward,
            new_badge,
        };
        (self, Some(feedback))
    }

    #[must_use]
    pub fn advance(mut self) -> Self {
        if !self.submitted || self.completed {
            return self;
        }
        if self.is_last_question() {
            self.completed = true;
            return self;
        }
        self.current_index += 1;
        self.selected_option = None;
        self.submitted = false;
        self
    }

    /// Starts the quiz over. Coins and badges earned so far are kept.
    #[must_use]
    pub fn restart(mut self) -> Self {
        self.current_index = 0;
        self.score = 0;
        self.selected_option = None;
        self.submitted = false;
        self.completed = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::reward::{CONSOLATION_BADGE, CORRECT_COINS, INCORRECT_COINS};
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn wrong_option(question: &Question) -> &'static str {
        question
            .options
            .iter()
            .copied()
            .find(|o| !question.is_correct(o))
            .expect("every question has a wrong option")
    }

    fn answer(session: QuizSession, correct: bool, rng: &mut StdRng) -> QuizSession {
        let question = session.current_question();
        let pick = if correct {
            question.correct_option
        } else {
            wrong_option(question)
        };
        let (session, feedback) = session.select_option(pick).submit_answer(rng);
        assert!(feedback.is_some());
        session.advance()
    }

    fn play(pattern: [bool; 5]) -> QuizSession {
        let mut rng = rng();
        pattern
            .into_iter()
            .fold(QuizSession::new(QuestId::FivePillars), |s, correct| {
                answer(s, correct, &mut rng)
            })
    }

    #[test]
    fn every_quiz_has_five_questions() {
        for quest in QuestId::ALL {
            assert_eq!(quest.quiz().question_count(), 5, "{}", quest.slug());
        }
    }

    #[test]
    fn later_selection_replaces_earlier_one() {
        let session = QuizSession::new(QuestId::Verifiability);
        let [a, b, ..] = session.current_question().options;
        let session = session.select_option(a).select_option(b);
        assert_eq!(session.selected_option(), Some(b));
    }

    #[test]
    fn unknown_option_is_ignored() {
        let session = QuizSession::new(QuestId::Verifiability).select_option("not an option");
        assert_eq!(session.selected_option(), None);
    }

    #[test]
    fn submit_without_selection_changes_nothing() {
        let session = QuizSession::new(QuestId::Copyrights);
        let (after, feedback) = session.clone().submit_answer(&mut rng());
        assert!(feedback.is_none());
        assert_eq!(after, session);
    }

    #[test]
    fn second_submit_changes_nothing() {
        let session = QuizSession::new(QuestId::Copyrights);
        let correct = session.current_question().correct_option;
        let (once, _) = session.select_option(correct).submit_answer(&mut rng());
        let (twice, feedback) = once.clone().submit_answer(&mut rng());
        assert!(feedback.is_none());
        assert_eq!(twice, once);
    }

    #[test]
    fn selection_is_locked_after_submit() {
        let session = QuizSession::new(QuestId::Copyrights);
        let question = session.current_question();
        let (session, _) = session
            .select_option(question.correct_option)
            .submit_answer(&mut rng());
        let session = session.select_option(wrong_option(question));
        assert_eq!(session.selected_option(), Some(question.correct_option));
    }

    #[test]
    fn correct_answer_scores_and_pays_ten_to_twenty() {
        let mut rng = rng();
        for _ in 0..50 {
            let session = QuizSession::new(QuestId::NoOriginalResearch);
            let correct = session.current_question().correct_option;
            let (session, feedback) = session.select_option(correct).submit_answer(&mut rng);
            let feedback = feedback.expect("answer was selected");

            assert!(feedback.is_correct());
            assert_eq!(session.score(), 1);
            assert!(CORRECT_COINS.contains(&session.coins()));
            assert!(QuestId::NoOriginalResearch
                .badge_pool()
                .contains(&feedback.reward.badge));
            assert!(session.badges().contains(feedback.reward.badge));
        }
    }

    #[test]
    fn incorrect_answer_pays_two_and_reveals_answer() {
        let session = QuizSession::new(QuestId::NeutralPointOfView);
        let question = session.current_question();
        let (session, feedback) = session
            .select_option(wrong_option(question))
            .submit_answer(&mut rng());
        let feedback = feedback.expect("answer was selected");

        assert_eq!(session.score(), 0);
        assert_eq!(session.coins(), INCORRECT_COINS);
        assert_eq!(feedback.reward.badge, CONSOLATION_BADGE);
        assert!(feedback.new_badge);
        match feedback.outcome {
            Outcome::Incorrect {
                correct_answer,
                explanation,
                policy,
            } => {
                assert_eq!(correct_answer, question.correct_option);
                assert_eq!(explanation, question.explanation);
                assert_eq!(policy, question.policy);
            }
            Outcome::Correct => panic!("expected an incorrect outcome"),
        }
    }

    #[test]
    fn consolation_badge_is_not_duplicated() {
        let session = play([false, false, false, false, false]);
        assert_eq!(session.coins(), 5 * INCORRECT_COINS);
        assert_eq!(session.badges().len(), 1);
        assert!(session.badges().contains(CONSOLATION_BADGE));
    }

    #[test]
    fn advance_requires_submission() {
        let session = QuizSession::new(QuestId::FivePillars);
        let correct = session.current_question().correct_option;
        let session = session.select_option(correct).advance();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_option(), Some(correct));
    }

    #[test]
    fn advance_moves_to_next_question_and_clears_answer() {
        let session = QuizSession::new(QuestId::FivePillars);
        let correct = session.current_question().correct_option;
        let (session, _) = session.select_option(correct).submit_answer(&mut rng());
        let session = session.advance();

        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_option(), None);
        assert!(!session.is_submitted());
        assert!(!session.is_completed());
    }

    #[test]
    fn advance_on_last_question_completes_in_place() {
        let session = play([true, true, true, true, true]);
        assert!(session.is_completed());
        assert_eq!(session.current_index(), 4);

        let again = session.clone().advance();
        assert_eq!(again, session);
    }

    #[test]
    fn finished_quiz_ignores_selection_and_submission() {
        let session = play([true, false, true, true, false]);
        assert!(session.is_completed());
        let last = session.current_question();

        let picked = session.clone().select_option(last.correct_option);
        assert_eq!(picked, session);

        let (after, feedback) = session
            .clone()
            .select_option(wrong_option(last))
            .submit_answer(&mut rng());
        assert!(feedback.is_none());
        assert_eq!(after, session);
        assert_eq!(after.score(), 3);
    }

    #[test]
    fn score_never_runs_ahead_of_progress() {
        let mut rng = rng();
        let mut session = QuizSession::new(QuestId::Copyrights);
        while !session.is_completed() {
            let correct = session.current_question().correct_option;
            let (next, _) = session.select_option(correct).submit_answer(&mut rng);
            assert!(next.score() <= next.current_index() + usize::from(next.is_submitted()));
            session = next.advance();
        }
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn all_correct_passes() {
        let session = play([true, true, true, true, true]);
        assert_eq!(session.score(), 5);
        assert_eq!(session.score_percent(), 100);
        assert!(session.is_passing());
    }

    #[test]
    fn four_of_five_is_exactly_the_threshold() {
        let session = play([true, true, false, true, true]);
        assert_eq!(session.score(), 4);
        assert_eq!(session.score_percent(), 80);
        assert!(session.is_passing());
    }

    #[test]
    fn three_of_five_fails() {
        let session = play([true, false, true, false, true]);
        assert_eq!(session.score(), 3);
        assert!(!session.is_passing());
    }

    #[test]
    fn restart_after_failing_keeps_rewards() {
        let failed = play([false, true, false, true, false]);
        let coins = failed.coins();
        let badges = failed.badges().clone();

        let session = failed.restart();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_completed());
        assert!(!session.is_submitted());
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.coins(), coins);
        assert_eq!(session.badges(), &badges);
    }

    #[test]
    fn seeded_rewards_are_reproducible() {
        let first = play([true, true, true, false, true]);
        let second = play([true, true, true, false, true]);
        assert_eq!(first.coins(), second.coins());
        assert_eq!(first.badges(), second.badges());
    }
}
