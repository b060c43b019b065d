// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    // A button without `on_press` renders disabled; the dialog stays
    // unavailable while a decode is in flight.
    let mut open_button = button(text(app.i18n.tr("toolbar-open")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM]);
    if !app.loading {
        open_button = open_button.on_press(Message::OpenFileDialog);
    }

    let toolbar = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(open_button);

    let body: Element<'_, Message> = if app.zoomer.has_media() {
        app.zoomer.view(&app.i18n).map(Message::Zoomer)
    } else {
        empty_state(app)
    };

    let mut column = Column::new()
        .push(toolbar)
        .push(container(body).width(Length::Fill).height(Length::Fill));

    if let Some(key) = app.notice_key {
        column = column.push(
            container(
                text(app.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            )
            .width(Length::Fill)
            .padding(spacing::XS)
            .align_x(alignment::Horizontal::Center),
        );
    }

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Empty state shown when no image is loaded: a short explanation, an
/// open button, and a drop hint.
fn empty_state(app: &App) -> Element<'_, Message> {
    let title = text(app.i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = text(app.i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let mut open_button =
        button(text(app.i18n.tr("empty-state-button"))).padding([spacing::SM, spacing::LG]);
    if !app.loading {
        open_button = open_button.on_press(Message::OpenFileDialog);
    }

    let drop_hint = text(app.i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_700);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
