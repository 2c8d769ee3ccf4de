use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Question, QuestionId, QuestionSet};
use quiz_core::session::QuizSession;
use services::{ProviderError, QuestionProvider, QuizLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::shell::ScreensTestHandles;
use crate::views::{QuizIntent, Screens, ViewError};
use crate::vm::Settling;

struct FixedProvider(QuestionSet);

#[async_trait::async_trait]
impl QuestionProvider for FixedProvider {
    async fn fetch(&self) -> Result<QuestionSet, ProviderError> {
        Ok(self.0.clone())
    }
}

struct BrokenProvider;

#[async_trait::async_trait]
impl QuestionProvider for BrokenProvider {
    async fn fetch(&self) -> Result<QuestionSet, ProviderError> {
        Err(ProviderError::Internal("provider offline".into()))
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<dyn UiApp>,
    seed: QuizSession,
    handles: ScreensTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: HarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| props.handles.clone());
    let session = use_signal(|| props.seed.clone());
    rsx! { Screens { session } }
}

pub fn question_set(correct: &[i64]) -> QuestionSet {
    let questions = correct
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            Question::new(
                QuestionId::new(i as i64 + 1),
                format!("Question {}", i + 1),
                vec![
                    "first".into(),
                    "second".into(),
                    "third".into(),
                    "fourth".into(),
                ],
                *answer,
            )
            .expect("valid question")
        })
        .collect();
    QuestionSet::new(questions).expect("non-empty set")
}

/// Session on the registration screen with the given profile.
pub fn registered(name: &str, age: &str) -> QuizSession {
    let mut session = QuizSession::new();
    session.enter().expect("enter");
    session.set_name(name);
    session.set_age(age);
    session
}

/// Session on the quiz screen after `answers`, playing `correct`.
pub fn playing(correct: &[i64], answers: &[usize]) -> QuizSession {
    let mut session = registered("Ahmad", "20");
    session.begin_start().expect("start");
    session
        .complete_start(question_set(correct))
        .expect("complete start");
    for (index, choice) in answers.iter().enumerate() {
        session.answer(index, *choice);
    }
    session
}

pub struct ScreenHarnessDom {
    pub dom: VirtualDom,
    handles: ScreensTestHandles,
}

impl ScreenHarnessDom {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Fire an intent as a click or keystroke would, then flush renders.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks run for `duration`, re-rendering as they finish.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
    }

    pub fn session(&self) -> QuizSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().clone())
    }

    pub fn settling(&self) -> Option<Settling> {
        let settling = self.handles.settling();
        self.dom.in_runtime(|| *settling.peek())
    }

    pub fn notice(&self) -> Option<ViewError> {
        let notice = self.handles.notice();
        self.dom.in_runtime(|| *notice.peek())
    }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn mount(seed: QuizSession, provider: Arc<dyn QuestionProvider>) -> ScreenHarnessDom {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        quiz_loop: Arc::new(QuizLoopService::new(provider)),
    });
    let handles = ScreensTestHandles::default();

    let mut dom = VirtualDom::new_with_props(
        ScreenHarness,
        HarnessProps {
            app,
            seed,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    ScreenHarnessDom { dom, handles }
}

/// Screens seeded with `seed`, backed by a provider serving five questions.
pub fn render_session(seed: QuizSession) -> ScreenHarnessDom {
    mount(seed, Arc::new(FixedProvider(question_set(&[0, 1, 2, 3, 0]))))
}

/// Screens seeded with `seed`, backed by a provider that always fails.
pub fn render_with_broken_provider(seed: QuizSession) -> ScreenHarnessDom {
    mount(seed, Arc::new(BrokenProvider))
}
