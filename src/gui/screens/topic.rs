use std::collections::HashSet;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, checkbox, column, container, space::horizontal as horizontal_space, row, scrollable, text,
        text_input},
};

use crate::api::{ApiError, Backend};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};
use crate::models::{self, Difficulty, Question, StatsSummary};
use crate::router::{Mount, Route};

#[derive(Debug, Clone)]
pub struct TopicScreen {
    mount: Mount,
    topic: String,
    questions: Vec<Question>,
    stats: StatsSummary,
    search: String,
    /// Difficulty sections start expanded; entries here are collapsed.
    collapsed: HashSet<Difficulty>,
    loading: bool,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TopicMessage {
    QuestionsLoaded(Result<Vec<Question>, ApiError>),
    StatsLoaded(Result<StatsSummary, ApiError>),
    SearchChanged(String),
    ToggleSection(Difficulty),
    SetCompleted { id: String, completed: bool },
    SaveCompleted {
        id: String,
        completed: bool,
        result: Result<(), ApiError>,
    },
    Back,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SessionExpired,
    Navigate(Route),
}

impl TopicScreen {
    pub fn new(mount: Mount, topic: String, state: &AppState) -> (Self, Task<TopicMessage>) {
        let token = state.session.token().unwrap_or_default().to_string();
        let backend = state.backend.clone();

        let fetch_questions = {
            let backend = backend.clone();
            let token = token.clone();
            let topic = topic.clone();
            Task::perform(
                async move { backend.questions(token, topic).await },
                TopicMessage::QuestionsLoaded,
            )
        };
        let fetch_stats = Task::perform(
            async move { backend.stats_summary(token).await },
            TopicMessage::StatsLoaded,
        );

        (
            Self {
                mount,
                topic,
                questions: Vec::new(),
                stats: StatsSummary::default(),
                search: String::new(),
                collapsed: HashSet::new(),
                loading: true,
                notice: None,
            },
            Task::batch([fetch_questions, fetch_stats]),
        )
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    fn auth_guard(&self, err: &ApiError) -> Option<Task<ScreenMessage<Self>>> {
        err.is_auth()
            .then(|| Task::done(ScreenMessage::ParentMessage(ParentMessage::SessionExpired)))
    }

    /// Transient failure: tell the user, keep whatever is already loaded.
    fn fetch_failed(&mut self, what: &str, err: ApiError) -> Task<ScreenMessage<Self>> {
        if let Some(task) = self.auth_guard(&err) {
            return task;
        }
        log::error!("failed to fetch {what}: {err}");
        self.notice = Some("Couldn't reach the backend; showing the last known data.".to_string());
        Task::none()
    }

    fn section(&self, difficulty: Difficulty, questions: &[Question]) -> Element<'_, ScreenMessage<Self>> {
        let completed = models::completed_count(questions);
        let expanded = !self.collapsed.contains(&difficulty);
        let marker = if expanded { "−" } else { "+" };

        let header = button(
            row![
                text(difficulty.label())
                    .size(20)
                    .color(widgets::difficulty_color(difficulty)),
                horizontal_space(),
                text(format!("{completed} / {}", questions.len())).size(13),
                text(marker).size(20),
            ]
            .spacing(10)
            .align_y(Center),
        )
        .style(button::text)
        .width(Length::Fill)
        .on_press(ScreenMessage::ScreenMessage(TopicMessage::ToggleSection(
            difficulty,
        )));

        let mut section = column![header].spacing(8);
        if expanded {
            for question in questions {
                section = section.push(self.question_row(question));
            }
        }
        section.into()
    }

    fn question_row(&self, question: &Question) -> Element<'_, ScreenMessage<Self>> {
        let id = question.id.clone();
        let toggle = checkbox(question.completed).on_toggle(move |completed| {
            ScreenMessage::ScreenMessage(TopicMessage::SetCompleted {
                id: id.clone(),
                completed,
            })
        });

        let name_color = if question.completed {
            widgets::TEXT_DIM
        } else {
            widgets::TEXT_BRIGHT
        };
        let mut links = row![].spacing(8);
        if question.leetcode_link.is_some() {
            links = links.push(text("LeetCode").size(11).color(widgets::TEXT_DIM));
        }
        if question.gfg_link.is_some() {
            links = links.push(text("GFG").size(11).color(widgets::TEXT_DIM));
        }

        widgets::panel(
            row![
                toggle,
                text(question.name.clone()).size(15).color(name_color),
                links,
                horizontal_space(),
                text(question.difficulty.label())
                    .size(14)
                    .color(widgets::difficulty_color(question.difficulty)),
            ]
            .spacing(12)
            .align_y(Center),
        )
    }
}

impl Screen for TopicScreen {
    type Message = TopicMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        if self.loading {
            return container(text("Loading questions..."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let header = row![
            button(text("< Back"))
                .style(button::text)
                .on_press(ScreenMessage::ScreenMessage(TopicMessage::Back)),
            text(format!("{} Sheet", self.topic)).size(32),
            horizontal_space(),
            text(format!(
                "{} / {} overall",
                self.stats.completed, self.stats.total
            ))
            .size(13)
            .color(widgets::TEXT_DIM),
        ]
        .spacing(15)
        .align_y(Center);

        let search = text_input("Search questions...", &self.search).on_input(|value| {
            ScreenMessage::ScreenMessage(TopicMessage::SearchChanged(value))
        });

        let grouped = models::group_by_difficulty(&self.questions).filtered(&self.search);
        let mut sections = column![].spacing(20);
        for difficulty in Difficulty::ALL {
            let bucket = grouped.bucket(difficulty);
            if bucket.is_empty() {
                continue;
            }
            sections = sections.push(self.section(difficulty, bucket));
        }

        let mut content = column![header, search].spacing(20).padding(30);
        if let Some(notice) = &self.notice {
            content = content.push(text(notice.clone()).size(12).color(widgets::TEXT_DIM));
        }
        content = content.push(sections);

        scrollable(content).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            TopicMessage::QuestionsLoaded(Ok(questions)) => {
                self.questions = questions;
                self.loading = false;
                Task::none()
            }
            TopicMessage::QuestionsLoaded(Err(err)) => {
                self.loading = false;
                self.fetch_failed("questions", err)
            }
            TopicMessage::StatsLoaded(Ok(stats)) => {
                self.stats = stats;
                Task::none()
            }
            TopicMessage::StatsLoaded(Err(err)) => self.fetch_failed("stats", err),
            TopicMessage::SearchChanged(value) => {
                self.search = value;
                Task::none()
            }
            TopicMessage::ToggleSection(difficulty) => {
                if !self.collapsed.remove(&difficulty) {
                    self.collapsed.insert(difficulty);
                }
                Task::none()
            }
            TopicMessage::SetCompleted { id, completed } => {
                let backend = state.backend.clone();
                let token = state.session.token().unwrap_or_default().to_string();
                let request_id = id.clone();
                Task::perform(
                    async move { backend.set_completed(token, request_id, completed).await },
                    move |result| {
                        ScreenMessage::ScreenMessage(TopicMessage::SaveCompleted {
                            id: id.clone(),
                            completed,
                            result,
                        })
                    },
                )
            }
            TopicMessage::SaveCompleted {
                id,
                completed,
                result: Ok(()),
            } => {
                if let Some(question) = self.questions.iter_mut().find(|q| q.id == id) {
                    question.completed = completed;
                }
                // The summary changed server-side; refresh it.
                let backend = state.backend.clone();
                let token = state.session.token().unwrap_or_default().to_string();
                Task::perform(
                    async move { backend.stats_summary(token).await },
                    |result| ScreenMessage::ScreenMessage(TopicMessage::StatsLoaded(result)),
                )
            }
            TopicMessage::SaveCompleted {
                result: Err(err), ..
            } => {
                if let Some(task) = self.auth_guard(&err) {
                    return task;
                }
                log::error!("failed to update question: {err}");
                Task::none()
            }
            TopicMessage::Back => {
                let route = self.mount.home();
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Navigate(route)))
            }
        }
    }
}
