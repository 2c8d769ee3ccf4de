use dioxus::prelude::*;
use quiz_core::model::Question;
use quiz_core::session::{AnswerOutcome, QuizSession};
use services::QuizLoopService;
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::views::{SETTLE_DELAY, ViewError};
use crate::vm::Settling;

/// Everything a screen can ask the session to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Enter,
    SetName(String),
    SetAge(String),
    Start,
    Answer { question_index: usize, choice: usize },
    Reset,
}

/// Single entry point for screen actions.
///
/// `Start` spawns the question fetch and `Answer` spawns the settle timer;
/// both write back into the same signals the screens render from.
pub fn use_quiz_dispatcher(
    session: Signal<QuizSession>,
    settling: Signal<Option<Settling>>,
    notice: Signal<Option<ViewError>>,
) -> Callback<QuizIntent> {
    let ctx = use_context::<AppContext>();

    use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let mut settling = settling;
        let mut notice = notice;

        match intent {
            QuizIntent::Enter => {
                if let Err(err) = session.write().enter() {
                    debug!(error = %err, "enter ignored");
                }
            }
            QuizIntent::SetName(name) => session.write().set_name(name),
            QuizIntent::SetAge(age) => session.write().set_age(age),
            QuizIntent::Start => {
                let started = session.write().begin_start();
                if let Err(err) = started {
                    debug!(error = %err, "start ignored");
                    return;
                }
                notice.set(None);

                let quiz_loop = ctx.quiz_loop();
                spawn(async move {
                    let fetched = quiz_loop.fetch_questions().await;
                    if QuizLoopService::apply_fetch(&mut session.write(), fetched).is_err() {
                        warn!("start aborted, staying on registration");
                        notice.set(Some(ViewError::FetchFailed));
                    }
                });
            }
            QuizIntent::Answer {
                question_index,
                choice,
            } => {
                let question = session.read().question(question_index).map(Question::id);
                let outcome = session.write().answer(question_index, choice);
                match outcome {
                    AnswerOutcome::Recorded { correct, finished } => {
                        debug!(?question, correct, finished, "answer recorded");
                        settling.set(Some(Settling { question_index }));
                        spawn(async move {
                            tokio::time::sleep(SETTLE_DELAY).await;
                            settling.set(None);
                        });
                    }
                    AnswerOutcome::Ignored | AnswerOutcome::InvalidChoice => {
                        debug!(question_index, choice, ?outcome, "answer ignored");
                    }
                }
            }
            QuizIntent::Reset => {
                settling.set(None);
                notice.set(None);
                if let Err(err) = session.write().reset() {
                    debug!(error = %err, "reset ignored");
                }
            }
        }
    })
}
