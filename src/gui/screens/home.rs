use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, space::horizontal as horizontal_space, row, scrollable, text},
};

use crate::api::{ApiError, Backend};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};
use crate::heatmap::{self, HeatmapCell};
use crate::models::{ActivityRecord, StatsSummary};
use crate::progress;
use crate::router::{Mount, Page, Route};

/// Topic catalogue shown on the home grid.
pub const TOPICS: [(&str, &str); 3] = [
    ("Sorting", "Master sorting algorithms and techniques"),
    ("Array", "Master array manipulation, searching, and sorting"),
    (
        "Binary Search",
        "Master binary search on 1D, 2D arrays, and search space",
    ),
];

const COMING_SOON: [&str; 7] = [
    "Strings",
    "Linked List",
    "Stacks & Queues",
    "Trees",
    "Graphs",
    "Dynamic Programming",
    "Greedy",
];

#[derive(Debug, Clone)]
pub struct HomeScreen {
    mount: Mount,
    username: String,
    stats: StatsSummary,
    activity: ActivityRecord,
    hovered: Option<HeatmapCell>,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    StatsLoaded(Result<StatsSummary, ApiError>),
    ActivityLoaded(Result<ActivityRecord, ApiError>),
    OpenTopic(String),
    CellHovered(Option<HeatmapCell>),
    SyncActivity,
    SyncCompleted(Result<(), ApiError>),
    Logout,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    LoggedOut,
    SessionExpired,
    Navigate(Route),
}

impl HomeScreen {
    /// Builds the screen and kicks off the stats and activity fetches. The
    /// two calls are independent and may settle in either order; each one
    /// updates only its own field.
    pub fn new(mount: Mount, state: &AppState) -> (Self, Task<HomeMessage>) {
        let username = state
            .session
            .user()
            .map(|user| user.username.clone())
            .unwrap_or_default();
        let token = state.session.token().unwrap_or_default().to_string();
        let backend = state.backend.clone();

        let fetch_stats = {
            let backend = backend.clone();
            let token = token.clone();
            Task::perform(
                async move { backend.stats_summary(token).await },
                HomeMessage::StatsLoaded,
            )
        };
        let fetch_activity = Task::perform(
            async move { backend.activity(token).await },
            HomeMessage::ActivityLoaded,
        );

        (
            Self {
                mount,
                username,
                stats: StatsSummary::default(),
                activity: ActivityRecord::default(),
                hovered: None,
                notice: None,
            },
            Task::batch([fetch_stats, fetch_activity]),
        )
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Transient failure: tell the user, keep the data we already have. An
    /// unauthorized response instead forces a logout.
    fn fetch_failed(&mut self, what: &str, err: &ApiError) -> Task<ScreenMessage<Self>> {
        if err.is_auth() {
            return Task::done(ScreenMessage::ParentMessage(ParentMessage::SessionExpired));
        }
        log::error!("failed to fetch {what}: {err}");
        self.notice = Some("Couldn't reach the backend; showing the last known data.".to_string());
        Task::none()
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            column![
                text("DSA Practice Sheet").size(40),
                text(format!("Welcome, {}", self.username)).size(16),
            ]
            .spacing(5),
            horizontal_space(),
            button(text("Logout"))
                .on_press(ScreenMessage::ScreenMessage(HomeMessage::Logout)),
        ]
        .align_y(Center);

        let cards = row![
            widgets::stat_card(TOPICS.len().to_string(), "Series Available"),
            widgets::stat_card(
                format!("{}/{}", self.stats.completed, self.stats.total),
                "Questions Completed",
            ),
        ]
        .spacing(20);

        let percentage = progress::progress_percentage(&self.stats);
        let rank = progress::current_rank(percentage);
        let mut ranks = row![].spacing(15);
        for (index, achievement) in progress::ACHIEVEMENT_RANKS.iter().enumerate() {
            let color = if index <= rank {
                widgets::TEXT_BRIGHT
            } else {
                widgets::TEXT_DIM
            };
            ranks = ranks.push(text(achievement.name).size(12).color(color));
        }
        let progress_panel = widgets::panel(
            column![
                text(format!("{percentage}%")).size(40),
                text("Overall Progress").size(16),
                ranks,
            ]
            .spacing(10),
        );

        // Derived fresh from the current record on every render; never
        // cached across calls.
        let graph = heatmap::derive_heatmap(&self.activity, heatmap::local_today());
        let tooltip = self
            .hovered
            .as_ref()
            .map(HeatmapCell::tooltip)
            .unwrap_or_else(|| "Hover a day to see its count".to_string());
        let graph_header = row![
            column![
                text("Activity Graph").size(18),
                text("Your daily question completion streak").size(12),
            ]
            .spacing(2),
            horizontal_space(),
            button(text("Sync Activity").size(12))
                .on_press(ScreenMessage::ScreenMessage(HomeMessage::SyncActivity)),
            widgets::heatmap_legend(),
        ]
        .spacing(15)
        .align_y(Center);
        let mut graph_panel = column![
            graph_header,
            widgets::heatmap_grid(&graph, |cell| {
                ScreenMessage::ScreenMessage(HomeMessage::CellHovered(cell))
            }),
            text(tooltip).size(12),
        ]
        .spacing(12);
        if let Some(notice) = &self.notice {
            graph_panel = graph_panel.push(text(notice.clone()).size(12));
        }

        let mut topics = column![text("Available Topics").size(22)].spacing(15);
        for (name, description) in TOPICS {
            topics = topics.push(
                button(
                    column![text(name).size(20), text(description).size(13)].spacing(5),
                )
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(HomeMessage::OpenTopic(
                    name.to_string(),
                ))),
            );
        }

        let mut coming_soon = row![].spacing(10);
        for name in COMING_SOON {
            coming_soon = coming_soon.push(text(name).size(12).color(widgets::TEXT_DIM));
        }

        let content = column![
            header,
            cards,
            progress_panel,
            widgets::panel(graph_panel),
            topics,
            widgets::panel(column![text("Coming Soon").size(16), coming_soon].spacing(10)),
        ]
        .spacing(25)
        .padding(30);

        scrollable(content).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::StatsLoaded(Ok(stats)) => {
                self.stats = stats;
                Task::none()
            }
            HomeMessage::StatsLoaded(Err(err)) => self.fetch_failed("stats", &err),
            HomeMessage::ActivityLoaded(Ok(activity)) => {
                self.activity = activity;
                Task::none()
            }
            HomeMessage::ActivityLoaded(Err(err)) => self.fetch_failed("activity", &err),
            HomeMessage::OpenTopic(name) => {
                let route = self.mount.page(Page::Topic(name));
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Navigate(route)))
            }
            HomeMessage::CellHovered(cell) => {
                self.hovered = cell;
                Task::none()
            }
            HomeMessage::SyncActivity => {
                let backend = state.backend.clone();
                let token = state.session.token().unwrap_or_default().to_string();
                Task::perform(async move { backend.sync_activity(token).await }, |result| {
                    ScreenMessage::ScreenMessage(HomeMessage::SyncCompleted(result))
                })
            }
            HomeMessage::SyncCompleted(Ok(())) => {
                self.notice = Some(
                    "Activity graph updated! Completed questions now show on today's date."
                        .to_string(),
                );
                // Refresh the graph with the re-stamped data.
                let backend = state.backend.clone();
                let token = state.session.token().unwrap_or_default().to_string();
                Task::perform(async move { backend.activity(token).await }, |result| {
                    ScreenMessage::ScreenMessage(HomeMessage::ActivityLoaded(result))
                })
            }
            HomeMessage::SyncCompleted(Err(err)) => {
                if err.is_auth() {
                    return Task::done(ScreenMessage::ParentMessage(
                        ParentMessage::SessionExpired,
                    ));
                }
                log::error!("failed to sync activity timestamps: {err}");
                self.notice = Some("Failed to update activity graph".to_string());
                Task::none()
            }
            HomeMessage::Logout => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::LoggedOut))
            }
        }
    }
}
