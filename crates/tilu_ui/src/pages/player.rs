//! Player window view.
//!
//! Layout:
//! - Video 1 and Video 2 side by side, Video 3 below them
//! - Transport row (play button, position slider, time)
//! - Error label
//! - Sidebar on the right (open button, checkboxes, display button)

use iced::widget::{
    button, checkbox, column, container, row, slider, text, tooltip, vertical_space, Column, Row,
};
use iced::{Alignment, Border, ContentFit, Element, Length, Theme};
use iced_video_player::VideoPlayer;

use tilu_core::transport::format_time;
use tilu_core::{Channel, ChannelId};

use crate::app::{App, Message};
use crate::backend::VideoSource;
use crate::theme::{self, colors, font, spacing};

/// Channels laid out on the top row; the rest go below.
const TOP_ROW: usize = 2;

/// Build the player window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![video_area(app), transport_row(app), error_label(app)]
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill);

    row![content, sidebar(app)]
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .into()
}

/// Where a channel's surface goes in the video area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Top,
    Bottom,
    /// Hidden but loaded: mounted at zero size so the widget keeps
    /// reporting end-of-stream and pipeline errors.
    Parked,
    Omitted,
}

fn slot(id: ChannelId, visible: bool, loaded: bool) -> Slot {
    match (visible, loaded) {
        (true, _) if id.index() < TOP_ROW => Slot::Top,
        (true, _) => Slot::Bottom,
        (false, true) => Slot::Parked,
        (false, false) => Slot::Omitted,
    }
}

/// Video surfaces. Hidden channels take no space so the rest reflow.
fn video_area(app: &App) -> Element<'_, Message> {
    let generation = app.player.generation();
    let mut top = Row::new().spacing(spacing::XS);
    let mut bottom = Row::new().spacing(spacing::XS);
    let mut parked = Row::new()
        .width(Length::Fixed(0.0))
        .height(Length::Fixed(0.0));
    let mut top_count = 0;
    let mut bottom_count = 0;

    for (id, channel) in app.player.channels() {
        match slot(id, channel.is_visible(), channel.has_source()) {
            Slot::Top => {
                top = top.push(video_surface(id, channel, generation));
                top_count += 1;
            }
            Slot::Bottom => {
                bottom = bottom.push(video_surface(id, channel, generation));
                bottom_count += 1;
            }
            Slot::Parked => {
                parked = parked.push(surface(id, channel, generation, Length::Fixed(0.0)));
            }
            Slot::Omitted => {}
        }
    }

    let mut area = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill);
    if top_count > 0 {
        area = area.push(top.height(Length::Fill));
    }
    if bottom_count > 0 {
        area = area.push(bottom.height(Length::Fill));
    }
    area.push(parked).into()
}

/// One visible surface, with the channel's error text under it.
fn video_surface(
    id: ChannelId,
    channel: &Channel<VideoSource>,
    generation: u64,
) -> Element<'_, Message> {
    let surface = surface(id, channel, generation, Length::Fill);

    match channel.error() {
        Some(error) => column![
            surface,
            text(format!("{}: {}", id, error))
                .size(font::SM)
                .color(colors::ERROR_TEXT),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

/// The render widget, or an empty placeholder when no file is loaded.
fn surface(
    id: ChannelId,
    channel: &Channel<VideoSource>,
    generation: u64,
    size: Length,
) -> Element<'_, Message> {
    match channel.source() {
        Some(source) => VideoPlayer::new(source.video())
            .width(size)
            .height(size)
            .content_fit(ContentFit::Contain)
            .on_end_of_stream(Message::EndOfStream(id, generation))
            .on_error(move |err| Message::PlaybackFailed(id, generation, err.to_string()))
            .into(),
        None => container(text(id.to_string()).size(font::NORMAL).color(colors::TEXT_MUTED))
            .center(size)
            .style(placeholder_style)
            .into(),
    }
}

fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::SURFACE.into()),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}

/// Play button, position slider and elapsed/total time.
fn transport_row(app: &App) -> Element<'_, Message> {
    let transport = app.player.transport();

    let play_button = button(text(app.player.icon().label()).size(font::NORMAL))
        .on_press_maybe(transport.enabled.then_some(Message::TogglePlayback))
        .padding([spacing::XS, spacing::LG]);

    let duration = transport.duration_ms as f64;
    let position = transport.position_ms.min(transport.duration_ms) as f64;
    let position_slider = slider(0.0..=duration, position, Message::Seek)
        .step(100.0)
        .width(Length::Fill);

    let time = text(format!(
        "{} / {}",
        format_time(transport.position_ms),
        format_time(transport.duration_ms)
    ))
    .size(font::SM)
    .color(colors::TEXT_SECONDARY);

    row![play_button, position_slider, time]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
}

/// Status label; empty until the leader channel fails.
fn error_label(app: &App) -> Element<'_, Message> {
    text(app.player.error_message().unwrap_or_default())
        .size(font::NORMAL)
        .color(colors::ERROR_TEXT)
        .into()
}

/// Open button, per-channel checkboxes and the "Display Selected" button.
fn sidebar(app: &App) -> Element<'_, Message> {
    let open_button = tooltip(
        button(text("Open Video").size(font::NORMAL))
            .on_press_maybe((!app.dialog_open).then_some(Message::OpenFiles))
            .width(Length::Fill),
        text("Open movie").size(font::SM),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box);

    let mut sidebar = Column::new()
        .push(vertical_space().height(theme::SIDEBAR_TOP_GAP))
        .push(open_button)
        .spacing(spacing::SM)
        .width(Length::Fixed(theme::SIDEBAR_WIDTH));

    for (id, channel) in app.player.channels() {
        sidebar = sidebar.push(
            checkbox(id.to_string(), channel.is_selected())
                .on_toggle(move |checked| Message::SelectionToggled(id, checked))
                .text_size(font::NORMAL),
        );
    }

    let display_button = tooltip(
        button(text("Display Selected").size(font::NORMAL))
            .on_press(Message::ApplySelection)
            .width(Length::Fill),
        text("Display only selected videos on screen").size(font::SM),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box);

    sidebar.push(display_button).into()
}
