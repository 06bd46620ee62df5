use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, space::horizontal as horizontal_space, row, scrollable, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};

const SECTION_HEIGHT: f32 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    fn offset(self) -> f32 {
        let index = Section::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0);
        index as f32 * SECTION_HEIGHT
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Home
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioScreen {
    active: Section,
}

#[derive(Debug, Clone)]
pub enum PortfolioMessage {
    JumpTo(Section),
    OpenSheet,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenSheet,
}

fn scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("portfolio")
}

impl PortfolioScreen {
    fn section(&self, section: Section) -> Element<'_, ScreenMessage<Self>> {
        let body: Element<'_, ScreenMessage<Self>> = match section {
            Section::Home => column![
                text("Hi, I build things for the web.").size(36),
                text("Developer portfolio and practice tracker.").size(16),
            ]
            .spacing(10)
            .into(),
            Section::About => column![
                text("About").size(28),
                text(
                    "Software developer with a focus on clean interfaces and \
                     steady, measurable practice.",
                )
                .size(15),
            ]
            .spacing(10)
            .into(),
            Section::Skills => {
                let mut skills = row![].spacing(12);
                for skill in ["Rust", "Systems", "Algorithms", "UI", "APIs"] {
                    skills = skills.push(text(skill).size(14).color(widgets::TEXT_DIM));
                }
                column![text("Skills").size(28), skills].spacing(10).into()
            }
            Section::Projects => column![
                text("Projects").size(28),
                text("DSA Practice Sheet - track problems, streaks and progress.")
                    .size(15),
                button(text("Open the DSA Sheet")).on_press(ScreenMessage::ScreenMessage(
                    PortfolioMessage::OpenSheet
                )),
            ]
            .spacing(10)
            .into(),
            Section::Contact => column![
                text("Contact").size(28),
                text("Reach out by mail or through the usual code forges.").size(15),
            ]
            .spacing(10)
            .into(),
        };

        container(body)
            .height(Length::Fixed(SECTION_HEIGHT))
            .width(Length::Fill)
            .padding(30)
            .into()
    }
}

impl Screen for PortfolioScreen {
    type Message = PortfolioMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut nav = row![].spacing(10).padding(10).align_y(Center);
        for section in Section::ALL {
            let color = if section == self.active {
                widgets::TEXT_BRIGHT
            } else {
                widgets::TEXT_DIM
            };
            nav = nav.push(
                button(text(section.label()).size(14).color(color))
                    .style(button::text)
                    .on_press(ScreenMessage::ScreenMessage(PortfolioMessage::JumpTo(
                        section,
                    ))),
            );
        }
        nav = nav.push(horizontal_space()).push(
            button(text("DSA Sheet").size(14))
                .on_press(ScreenMessage::ScreenMessage(PortfolioMessage::OpenSheet)),
        );

        let mut sections = column![];
        for section in Section::ALL {
            sections = sections.push(self.section(section));
        }

        column![nav, scrollable(sections).id(scroll_id())].into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            PortfolioMessage::JumpTo(section) => {
                self.active = section;
                iced::widget::operation::scroll_to(
                    scroll_id(),
                    scrollable::AbsoluteOffset {
                        x: 0.0,
                        y: section.offset(),
                    },
                )
            }
            PortfolioMessage::OpenSheet => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::OpenSheet))
            }
        }
    }
}
