//! Chat text for every screen the bot shows. All output is Telegram HTML.

use teloxide::utils::html::escape;

use crate::quiz::lesson::LessonProgress;
use crate::quiz::quest::QuestId;
use crate::quiz::{Feedback, Outcome, QuizSession, PASS_THRESHOLD_PERCENT};

pub fn welcome() -> String {
    format!(
        "<b>Begin your Wikipedia editor journey!</b>\n\n\
         Each quest has a few short lessons and a {}-question quiz. \
         Answer correctly to earn coins and badges, and score at least {}% to master the quest.\n\n\
         Pick a quest to start:",
        QuestId::FivePillars.quiz().question_count(),
        PASS_THRESHOLD_PERCENT
    )
}

pub fn quest_menu() -> String {
    let quests = QuestId::ALL
        .iter()
        .enumerate()
        .map(|(i, q)| {
            format!(
                "{}. <b>{}</b>\n{}",
                i + 1,
                escape(q.title()),
                escape(q.description())
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("Available quests:\n\n{quests}")
}

pub fn lesson_card(progress: &LessonProgress) -> String {
    let lesson = progress.lesson();
    let key_points = lesson
        .key_points
        .iter()
        .map(|p| format!("✅ {}", escape(p)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<b>{}</b> · lesson {} of {}\n\n<b>{}</b>\n<i>{}</i>\n\nKey points:\n{}\n\nProgress: {}%",
        escape(progress.quest().title()),
        progress.current_index() + 1,
        progress.total(),
        escape(lesson.title),
        escape(lesson.description),
        key_points,
        progress.percent()
    )
}

pub fn quiz_intro(quest: QuestId) -> String {
    format!(
        "<b>Test your knowledge</b>\n\nThe quiz has {} questions about {}. \
         Score at least {}% to earn the <b>{}</b> badge.",
        quest.quiz().question_count(),
        escape(quest.title()),
        PASS_THRESHOLD_PERCENT,
        escape(quest.mastery_badge())
    )
}

pub fn question(session: &QuizSession) -> String {
    format!(
        "<b>Question {} of {}</b> · score {}/{}\n\n{}",
        session.current_index() + 1,
        session.quiz().question_count(),
        session.score(),
        session.current_index(),
        escape(session.current_question().text)
    )
}

pub fn selection(option: &str) -> String {
    format!(
        "Your pick: <i>{}</i>\nTap <b>Submit answer</b> to lock it in, or pick another option.",
        escape(option)
    )
}

pub fn feedback(feedback: &Feedback) -> String {
    let mut text = match &feedback.outcome {
        Outcome::Correct => "🎯 <b>Correct! Excellent job!</b>".to_string(),
        Outcome::Incorrect {
            correct_answer,
            explanation,
            policy,
        } => {
            let mut text = format!(
                "🤔 <b>Not quite right, but that's okay!</b>\n\n\
                 <b>The correct answer is:</b> {}\n{}",
                escape(correct_answer),
                escape(explanation)
            );
            if let Some(policy) = policy {
                text.push_str(&format!(
                    "\nLearn more: <a href=\"{}\">{}</a>",
                    escape(policy.url),
                    escape(policy.code)
                ));
            }
            text
        }
    };

    let reward = &feedback.reward;
    let badge_note = if feedback.new_badge { " (new!)" } else { "" };
    text.push_str(&format!(
        "\n\n🪙 +{} coins · 🏅 {}{}\n\n<i>{}</i>",
        reward.coins,
        escape(reward.badge),
        badge_note,
        escape(reward.cheer)
    ));
    text
}

pub fn results(session: &QuizSession) -> String {
    let quest = session.quest();
    let mut text = format!(
        "<b>Quiz results</b>\n\nYou scored {} out of {} ({}%).\n\n",
        session.score(),
        session.quiz().question_count(),
        session.score_percent()
    );

    if session.is_passing() {
        text.push_str(&format!(
            "🏆 <b>Congratulations!</b>\nYou've earned the \"{}\" badge! You now understand {}.",
            escape(quest.mastery_badge()),
            escape(quest.title())
        ));
    } else {
        text.push_str(&format!(
            "📚 <b>Almost there!</b>\nYou need to score at least {}% to earn the badge. \
             Review the material and try again.",
            PASS_THRESHOLD_PERCENT
        ));
    }

    text.push_str(&format!("\n\n🪙 Coins: {}", session.coins()));
    if !session.badges().is_empty() {
        let badges = session
            .badges()
            .iter()
            .map(|b| escape(b))
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!("\n🏅 Badges: {badges}"));
    }
    text
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::quiz::lesson::Next;

    fn finish(quest: QuestId, correct: usize) -> QuizSession {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new(quest);
        let mut answered = 0;
        while !session.is_completed() {
            let question = session.current_question();
            let pick = if answered < correct {
                question.correct_option
            } else {
                question
                    .options
                    .iter()
                    .copied()
                    .find(|o| !question.is_correct(o))
                    .unwrap()
            };
            answered += 1;
            let (next, _) = session.select_option(pick).submit_answer(&mut rng);
            session = next.advance();
        }
        session
    }

    #[test]
    fn menu_lists_every_quest() {
        let menu = quest_menu();
        for quest in QuestId::ALL {
            assert!(menu.contains(&escape(quest.title())));
        }
    }

    #[test]
    fn lesson_card_shows_position_and_progress() {
        let progress = match LessonProgress::new(QuestId::Verifiability).next() {
            Next::Lesson(progress) => progress,
            Next::Quiz(_) => unreachable!(),
        };
        let card = lesson_card(&progress);
        assert!(card.contains("lesson 2 of 5"));
        assert!(card.contains("Progress: 20%"));
        assert!(card.contains(&escape(progress.lesson().title)));
    }

    #[test]
    fn question_shows_counter() {
        let session = QuizSession::new(QuestId::Copyrights);
        let text = question(&session);
        assert!(text.starts_with("<b>Question 1 of 5</b> · score 0/0"));
    }

    #[test]
    fn incorrect_feedback_reveals_answer_and_policy() {
        let session = QuizSession::new(QuestId::NoOriginalResearch);
        let q = session.current_question();
        let wrong = q.options.iter().copied().find(|o| !q.is_correct(o)).unwrap();
        let (_, fb) = session
            .select_option(wrong)
            .submit_answer(&mut StdRng::seed_from_u64(1));
        let text = feedback(&fb.unwrap());

        assert!(text.contains("Not quite right"));
        assert!(text.contains(&escape(q.correct_option)));
        assert!(text.contains("WP:NOR"));
        assert!(text.contains("+2 coins"));
        assert!(text.contains("Curious Explorer (new!)"));
    }

    #[test]
    fn correct_feedback_hides_answer() {
        let session = QuizSession::new(QuestId::NoOriginalResearch);
        let q = session.current_question();
        let (_, fb) = session
            .select_option(q.correct_option)
            .submit_answer(&mut StdRng::seed_from_u64(1));
        let text = feedback(&fb.unwrap());

        assert!(text.contains("Correct!"));
        assert!(!text.contains("The correct answer is"));
        assert!(!text.contains("Learn more"));
    }

    #[test]
    fn passing_results_name_mastery_badge() {
        let text = results(&finish(QuestId::FivePillars, 4));
        assert!(text.contains("You scored 4 out of 5 (80%)"));
        assert!(text.contains("\"Five Pillars\" badge"));
    }

    #[test]
    fn failing_results_ask_for_another_try() {
        let text = results(&finish(QuestId::Copyrights, 3));
        assert!(text.contains("You scored 3 out of 5 (60%)"));
        assert!(text.contains("Almost there!"));
        assert!(text.contains("Curious Explorer"));
    }
}
