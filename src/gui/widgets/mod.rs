use iced::{
    Alignment::Center,
    Border, Color, Element, Length,
    widget::{Space, column, container, mouse_area, row, text},
};

use crate::heatmap::{Heatmap, HeatmapCell};
use crate::models::Difficulty;

/// GitHub-style intensity ramp, level 0 through 4.
pub const LEVEL_COLORS: [Color; 5] = [
    Color::from_rgb8(0x16, 0x1b, 0x22),
    Color::from_rgb8(0x0e, 0x44, 0x29),
    Color::from_rgb8(0x00, 0x6d, 0x32),
    Color::from_rgb8(0x26, 0xa6, 0x41),
    Color::from_rgb8(0x39, 0xd3, 0x53),
];

pub const TEXT_BRIGHT: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
pub const TEXT_DIM: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
const ERROR_RED: Color = Color::from_rgb8(0xff, 0x37, 0x5f);
const PANEL_BG: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
const PANEL_BORDER: Color = Color::from_rgb8(0x2a, 0x2a, 0x2a);

const CELL: f32 = 13.0;
const CELL_GAP: f32 = 3.0;
const GUTTER: f32 = 48.0;

/// Rounded bordered box every card-like element sits in.
pub fn panel<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(PANEL_BG.into()),
            border: Border {
                color: PANEL_BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

pub fn stat_card<'a, Message: 'a>(value: String, label: &'a str) -> Element<'a, Message> {
    panel(
        column![
            text(value).size(34),
            text(label).size(14).color(TEXT_DIM),
        ]
        .spacing(5),
    )
}

pub fn error_banner<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(14).color(ERROR_RED))
        .padding(10)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            border: Border {
                color: ERROR_RED,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::from_rgb8(0x4a, 0xde, 0x80),
        Difficulty::Medium => Color::from_rgb8(0xfa, 0xcc, 0x15),
        Difficulty::Hard => Color::from_rgb8(0xf8, 0x71, 0x71),
    }
}

fn level_swatch<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container(Space::new().width(Length::Fixed(CELL)).height(Length::Fixed(CELL)))
        .style(move |_theme| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Less-to-more swatch strip next to the graph.
pub fn heatmap_legend<'a, Message: 'a>() -> Element<'a, Message> {
    let mut swatches = row![].spacing(CELL_GAP);
    for color in LEVEL_COLORS {
        swatches = swatches.push(level_swatch(color));
    }
    row![
        text("Less").size(12).color(TEXT_DIM),
        swatches,
        text("More").size(12).color(TEXT_DIM),
    ]
    .spacing(8)
    .align_y(Center)
    .into()
}

/// The 53-column heatmap grid with month labels on top and day labels in
/// the left gutter. Cells report hover enter/leave through `on_hover` so
/// the caller can show the `{date, count}` tooltip.
pub fn heatmap_grid<'a, Message: Clone + 'a>(
    heatmap: &Heatmap,
    on_hover: impl Fn(Option<HeatmapCell>) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    let mut labels = row![Space::new().width(Length::Fixed(GUTTER)).height(Length::Shrink)].spacing(CELL_GAP);
    for label in &heatmap.month_labels {
        labels = labels.push(
            container(text(label.clone()).size(11).color(TEXT_DIM))
                .width(Length::Fixed(CELL))
                .clip(true),
        );
    }

    let mut gutter = column![].spacing(CELL_GAP).width(Length::Fixed(GUTTER));
    for label in ["Mon", "", "Wed", "", "Fri", "", "Sun"] {
        gutter = gutter.push(
            container(text(label).size(11).color(TEXT_DIM)).height(Length::Fixed(CELL)),
        );
    }

    let mut grid = row![gutter].spacing(CELL_GAP);
    for week in &heatmap.weeks {
        let mut week_column = column![].spacing(CELL_GAP);
        for cell in week {
            let color = LEVEL_COLORS[usize::from(cell.level.min(4))];
            let on_hover = on_hover.clone();
            week_column = week_column.push(
                mouse_area(
                    container(Space::new().width(Length::Fixed(CELL)).height(Length::Fixed(CELL))).style(
                        move |_theme| container::Style {
                            background: Some(color.into()),
                            border: Border {
                                radius: 2.0.into(),
                                ..Border::default()
                            },
                            ..container::Style::default()
                        },
                    ),
                )
                .on_enter(on_hover(Some(cell.clone())))
                .on_exit(on_hover(None)),
            );
        }
        grid = grid.push(week_column);
    }

    column![labels, grid].spacing(8).into()
}
