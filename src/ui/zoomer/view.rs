// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering for the zoom widget.
//!
//! Collapsed mode is a single canvas: the thumbnail drawn inset by the
//! expansion margin, the overlay port frame around it, and the lens — a
//! clipped window into the magnified rendering — on top. Expanded mode
//! is the image at full size with contain fit.

use super::{Message, Mode, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::widget::canvas::{self, Canvas};
use iced::widget::{container, image as iced_image, mouse_area, text, Column};
use iced::{alignment, mouse, Color, ContentFit, Element, Length, Point, Rectangle, Size, Theme};

pub(super) fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    match state.mode() {
        Mode::Collapsed => collapsed(state, i18n),
        Mode::Expanded => expanded(state, i18n),
    }
}

fn collapsed<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let small = state.small_size();
    let margin = state.options().expansion_size;

    let canvas = Canvas::new(Magnifier { state })
        .width(Length::Fixed(small.width + margin * 2.0))
        .height(Length::Fixed(small.height + margin * 2.0));

    let hint = text(i18n.tr("hint-collapsed"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(canvas)
        .push(hint);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn expanded<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(media) = state.media_data() else {
        return container(text("")).into();
    };

    let full_image = iced_image(media.handle.clone())
        .content_fit(ContentFit::Contain)
        .opacity(state.lens_alpha())
        .width(Length::Fill)
        .height(Length::Fill);

    let hint = text(i18n.tr("hint-expanded"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            container(full_image)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(hint)
        .padding(spacing::MD);

    // The expanded display is the only click target in this mode, so a
    // double-click anywhere on it returns to the magnifier.
    mouse_area(content).on_press(Message::Clicked).into()
}

/// Canvas program for Collapsed mode. Publishes pointer positions
/// relative to the thumbnail (which sits `expansion_size` inside the
/// canvas, so the lens can overhang the image edges) and draws all
/// three regions.
struct Magnifier<'a> {
    state: &'a State,
}

impl<'a> canvas::Program<Message> for Magnifier<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let margin = self.state.options().expansion_size;

        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Deliberately not bounded to the canvas: positions
                // outside still drive the out-of-zone fade-out.
                let position = cursor.position()?;
                let relative = Point::new(
                    position.x - bounds.x - margin,
                    position.y - bounds.y - margin,
                );
                let small = Size::new(
                    bounds.width - margin * 2.0,
                    bounds.height - margin * 2.0,
                );
                Some(Action::publish(Message::PointerMoved {
                    position: relative,
                    small,
                }))
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)?;
                Some(Action::publish(Message::Clicked).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let Some(media) = self.state.media_data() else {
            return vec![];
        };

        let margin = self.state.options().expansion_size;
        let small = Size::new(
            bounds.width - margin * 2.0,
            bounds.height - margin * 2.0,
        );
        let thumb = Rectangle::new(Point::new(margin, margin), small);

        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // smallArea: the thumbnail itself.
        frame.draw_image(thumb, canvas::Image::new(media.handle.clone()));

        // zoomPort: overlay frame around the thumbnail.
        let port_alpha = self.state.port_alpha();
        if port_alpha > 0.0 {
            let outset = sizing::PORT_FRAME;
            frame.stroke_rectangle(
                Point::new(thumb.x - outset, thumb.y - outset),
                Size::new(small.width + outset * 2.0, small.height + outset * 2.0),
                canvas::Stroke::default()
                    .with_width(sizing::PORT_FRAME)
                    .with_color(Color {
                        a: port_alpha,
                        ..palette::PRIMARY_500
                    }),
            );
        }

        // mover: the lens, clipping the magnified rendering.
        let lens_alpha = self.state.lens_alpha();
        if lens_alpha > 0.0 {
            let lens_pos = self.state.lens_position();
            let lens_size = self.state.lens_size();
            let lens = Rectangle::new(
                Point::new(thumb.x + lens_pos.x, thumb.y + lens_pos.y),
                lens_size,
            );
            let pan = self.state.pan();
            let large = self.state.large_size(small);

            frame.with_clip(lens, |frame| {
                frame.fill_rectangle(
                    Point::ORIGIN,
                    lens_size,
                    Color {
                        a: lens_alpha,
                        ..palette::GRAY_900
                    },
                );
                frame.draw_image(
                    Rectangle::new(Point::new(pan.x, pan.y), large),
                    canvas::Image::new(media.handle.clone()).opacity(lens_alpha),
                );
                frame.fill_rectangle(
                    Point::ORIGIN,
                    lens_size,
                    Color {
                        a: opacity::LENS_WASH * lens_alpha,
                        ..palette::PRIMARY_400
                    },
                );
            });

            frame.stroke_rectangle(
                lens.position(),
                lens_size,
                canvas::Stroke::default()
                    .with_width(sizing::LENS_BORDER)
                    .with_color(Color {
                        a: lens_alpha,
                        ..palette::WHITE
                    }),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
