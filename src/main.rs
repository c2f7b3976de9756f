mod config;
mod messages;
mod quiz;

use std::sync::{Arc, Mutex, PoisonError};

use config::Config;
use log::{debug, error, info};
use quiz::{
    lesson::{LessonProgress, Next},
    quest::QuestId,
    QuizSession,
};
use rand::rngs::StdRng;
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup, ParseMode},
    utils::command::BotCommands,
};

type QuizDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Shared source of reward randomness for every chat.
type RewardRng = Arc<Mutex<StdRng>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveQuestChoice,
    Learning {
        progress: LessonProgress,
    },
    Quiz {
        session: QuizSession,
    },
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
enum Command {
    #[command(description = "show the welcome message and the quest list.")]
    Start,
    #[command(description = "show this text.")]
    Help,
    #[command(description = "leave the current quest and pick another one.")]
    Quests,
}

#[tokio::main]
async fn main() {
    if let Err(err) = dotenv::dotenv() {
        eprintln!("No .env file loaded: {err}");
    }

    pretty_env_logger::init();
    info!("Starting wikiquest bot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    debug!("Loaded {config:?}");

    let rewards: RewardRng = Arc::new(Mutex::new(config.reward_rng()));
    let bot = Bot::new(config.token);

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(command),
            )
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceiveQuestChoice].endpoint(receive_quest_choice))
            .branch(dptree::case![State::Learning { progress }].endpoint(learning))
            .branch(dptree::case![State::Quiz { session }].endpoint(quiz)),
    )
    .dependencies(dptree::deps![InMemStorage::<State>::new(), rewards])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const LESSON_PREVIOUS: &str = "⬅️ Previous";
const LESSON_NEXT: &str = "Next ➡️";
const TAKE_QUIZ: &str = "Take the quiz 🏆";
const SUBMIT_ANSWER: &str = "Submit answer";
const NEXT_QUESTION: &str = "Next question";
const SEE_RESULTS: &str = "See results";
const TRY_AGAIN: &str = "Try again";
const BACK_TO_QUESTS: &str = "Back to quests";

/// What a message on the results screen asks for.
#[derive(Debug, PartialEq, Eq)]
enum ResultsChoice {
    Retry,
    Quests,
    Stay,
}

/// A quest is picked by its button title or by typing its slug.
fn quest_choice(text: &str) -> Option<QuestId> {
    QuestId::from_title(text).or_else(|| QuestId::from_slug(text.trim()))
}

/// Retrying is only offered after a failed quiz.
fn results_choice(session: &QuizSession, text: &str) -> ResultsChoice {
    match text {
        TRY_AGAIN if !session.is_passing() => ResultsChoice::Retry,
        BACK_TO_QUESTS => ResultsChoice::Quests,
        _ => ResultsChoice::Stay,
    }
}

fn quest_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(
        QuestId::ALL
            .iter()
            .map(|q| vec![KeyboardButton::new(q.title())])
            .collect::<Vec<_>>(),
    )
}

fn lesson_keyboard(progress: &LessonProgress) -> KeyboardMarkup {
    let mut row = Vec::new();
    if !progress.is_first() {
        row.push(KeyboardButton::new(LESSON_PREVIOUS));
    }
    if progress.is_last() {
        row.push(KeyboardButton::new(TAKE_QUIZ));
    } else {
        row.push(KeyboardButton::new(LESSON_NEXT));
    }
    KeyboardMarkup::new(vec![row, vec![KeyboardButton::new(BACK_TO_QUESTS)]])
}

fn options_keyboard(session: &QuizSession) -> KeyboardMarkup {
    let mut rows = session
        .current_question()
        .options
        .iter()
        .map(|o| vec![KeyboardButton::new(*o)])
        .collect::<Vec<_>>();
    if session.selected_option().is_some() {
        rows.push(vec![KeyboardButton::new(SUBMIT_ANSWER)]);
    }
    KeyboardMarkup::new(rows)
}

fn next_keyboard(session: &QuizSession) -> KeyboardMarkup {
    let label = if session.is_last_question() {
        SEE_RESULTS
    } else {
        NEXT_QUESTION
    };
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(label)]])
}

fn results_keyboard(session: &QuizSession) -> KeyboardMarkup {
    let mut row = Vec::new();
    if !session.is_passing() {
        row.push(KeyboardButton::new(TRY_AGAIN));
    }
    row.push(KeyboardButton::new(BACK_TO_QUESTS));
    KeyboardMarkup::new(vec![row])
}

async fn show_quests(
    bot: &Bot,
    dialogue: &QuizDialogue,
    chat: ChatId,
    text: String,
) -> HandlerResult {
    bot.send_message(chat, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(quest_keyboard())
        .await?;
    dialogue.update(State::ReceiveQuestChoice).await?;
    Ok(())
}

async fn show_lesson(bot: &Bot, chat: ChatId, progress: &LessonProgress) -> HandlerResult {
    bot.send_message(chat, messages::lesson_card(progress))
        .parse_mode(ParseMode::Html)
        .reply_markup(lesson_keyboard(progress))
        .await?;
    Ok(())
}

async fn show_question(bot: &Bot, chat: ChatId, session: &QuizSession) -> HandlerResult {
    bot.send_message(chat, messages::question(session))
        .parse_mode(ParseMode::Html)
        .reply_markup(options_keyboard(session))
        .await?;
    Ok(())
}

async fn command(bot: Bot, dialogue: QuizDialogue, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start => show_quests(&bot, &dialogue, msg.chat.id, messages::welcome()).await,
        Command::Quests => show_quests(&bot, &dialogue, msg.chat.id, messages::quest_menu()).await,
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
            Ok(())
        }
    }
}

async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    show_quests(&bot, &dialogue, msg.chat.id, messages::welcome()).await
}

async fn receive_quest_choice(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let Some(quest) = msg.text().and_then(quest_choice) else {
        bot.send_message(msg.chat.id, "Please pick one of the quests below.")
            .reply_markup(quest_keyboard())
            .await?;
        return Ok(());
    };

    info!("Chat {} started quest {}", msg.chat.id.0, quest.slug());
    let progress = LessonProgress::new(quest);
    show_lesson(&bot, msg.chat.id, &progress).await?;
    dialogue.update(State::Learning { progress }).await?;
    Ok(())
}

async fn learning(
    bot: Bot,
    dialogue: QuizDialogue,
    progress: LessonProgress,
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(LESSON_NEXT) | Some(TAKE_QUIZ) => match progress.next() {
            Next::Lesson(progress) => {
                show_lesson(&bot, msg.chat.id, &progress).await?;
                dialogue.update(State::Learning { progress }).await?;
            }
            Next::Quiz(quest) => {
                debug!("Chat {} finished the lessons of {}", msg.chat.id.0, quest.slug());
                let session = QuizSession::new(quest);
                bot.send_message(msg.chat.id, messages::quiz_intro(quest))
                    .parse_mode(ParseMode::Html)
                    .await?;
                show_question(&bot, msg.chat.id, &session).await?;
                dialogue.update(State::Quiz { session }).await?;
            }
        },
        Some(LESSON_PREVIOUS) => {
            let progress = progress.previous();
            show_lesson(&bot, msg.chat.id, &progress).await?;
            dialogue.update(State::Learning { progress }).await?;
        }
        Some(BACK_TO_QUESTS) => {
            show_quests(&bot, &dialogue, msg.chat.id, messages::quest_menu()).await?;
        }
        _ => {
            bot.send_message(msg.chat.id, "Please use the buttons below.")
                .reply_markup(lesson_keyboard(&progress))
                .await?;
        }
    }
    Ok(())
}

async fn quiz(
    bot: Bot,
    dialogue: QuizDialogue,
    session: QuizSession,
    rewards: RewardRng,
    msg: Message,
) -> HandlerResult {
    let chat = msg.chat.id;
    let Some(text) = msg.text() else {
        bot.send_message(chat, "Please answer with one of the buttons.")
            .await?;
        return Ok(());
    };

    if session.is_completed() {
        return quiz_results(bot, dialogue, session, chat, text).await;
    }

    match text {
        SUBMIT_ANSWER => {
            let (session, feedback) = {
                let mut rng = rewards.lock().unwrap_or_else(PoisonError::into_inner);
                session.submit_answer(&mut *rng)
            };
            let Some(feedback) = feedback else {
                let hint = if session.is_submitted() {
                    "You've already answered this one."
                } else {
                    "Pick an option first."
                };
                bot.send_message(chat, hint).await?;
                return Ok(());
            };

            debug!(
                "Chat {} answered question {} of {}: correct={}, +{} coins",
                chat.0,
                session.current_index() + 1,
                session.quest().slug(),
                feedback.is_correct(),
                feedback.reward.coins
            );
            bot.send_message(chat, messages::feedback(&feedback))
                .parse_mode(ParseMode::Html)
                .disable_web_page_preview(true)
                .reply_markup(next_keyboard(&session))
                .await?;
            dialogue.update(State::Quiz { session }).await?;
        }
        NEXT_QUESTION | SEE_RESULTS => {
            if !session.is_submitted() {
                bot.send_message(chat, "Submit your answer first.")
                    .reply_markup(options_keyboard(&session))
                    .await?;
                return Ok(());
            }

            let session = session.advance();
            if session.is_completed() {
                info!(
                    "Chat {} completed {} with {}/{}",
                    chat.0,
                    session.quest().slug(),
                    session.score(),
                    session.quiz().question_count()
                );
                bot.send_message(chat, messages::results(&session))
                    .parse_mode(ParseMode::Html)
                    .reply_markup(results_keyboard(&session))
                    .await?;
            } else {
                show_question(&bot, chat, &session).await?;
            }
            dialogue.update(State::Quiz { session }).await?;
        }
        option => {
            if session.is_submitted() {
                bot.send_message(chat, "Your answer is locked in. Move on to the next question.")
                    .reply_markup(next_keyboard(&session))
                    .await?;
                return Ok(());
            }

            let session = session.select_option(option);
            if session.selected_option() != Some(option) {
                bot.send_message(chat, "Please tap one of the options.")
                    .reply_markup(options_keyboard(&session))
                    .await?;
                return Ok(());
            }

            bot.send_message(chat, messages::selection(option))
                .parse_mode(ParseMode::Html)
                .reply_markup(options_keyboard(&session))
                .await?;
            dialogue.update(State::Quiz { session }).await?;
        }
    }
    Ok(())
}

async fn quiz_results(
    bot: Bot,
    dialogue: QuizDialogue,
    session: QuizSession,
    chat: ChatId,
    text: &str,
) -> HandlerResult {
    match results_choice(&session, text) {
        ResultsChoice::Retry => {
            debug!("Chat {} restarted {}", chat.0, session.quest().slug());
            let session = session.restart();
            show_question(&bot, chat, &session).await?;
            dialogue.update(State::Quiz { session }).await?;
        }
        ResultsChoice::Quests => {
            show_quests(&bot, &dialogue, chat, messages::quest_menu()).await?;
        }
        ResultsChoice::Stay => {
            bot.send_message(chat, "The quiz is over. Choose what to do next.")
                .reply_markup(results_keyboard(&session))
                .await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn finish(quest: QuestId, correct: usize) -> QuizSession {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new(quest);
        for i in 0.. {
            if session.is_completed() {
                break;
            }
            let question = session.current_question();
            let pick = if i < correct {
                question.correct_option
            } else {
                question
                    .options
                    .iter()
                    .copied()
                    .find(|o| !question.is_correct(o))
                    .unwrap()
            };
            let (next, _) = session.select_option(pick).submit_answer(&mut rng);
            session = next.advance();
        }
        session
    }

    #[test]
    fn quest_is_chosen_by_title_or_slug() {
        assert_eq!(quest_choice("Copyrights"), Some(QuestId::Copyrights));
        assert_eq!(quest_choice("no-original-research"), Some(QuestId::NoOriginalResearch));
        assert_eq!(quest_choice("Neutrality"), None);
    }

    #[test]
    fn failed_quiz_can_be_retried() {
        let session = finish(QuestId::Verifiability, 3);
        assert!(!session.is_passing());
        assert_eq!(results_choice(&session, TRY_AGAIN), ResultsChoice::Retry);
        assert_eq!(results_choice(&session, BACK_TO_QUESTS), ResultsChoice::Quests);
    }

    #[test]
    fn passed_quiz_ignores_typed_retry() {
        let session = finish(QuestId::Verifiability, 4);
        assert!(session.is_passing());
        assert_eq!(results_choice(&session, TRY_AGAIN), ResultsChoice::Stay);
        assert_eq!(results_choice(&session, BACK_TO_QUESTS), ResultsChoice::Quests);
        assert_eq!(results_choice(&session, "hello"), ResultsChoice::Stay);
    }
}
