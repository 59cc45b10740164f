// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay drawn above the page while a gallery session is open.
//!
//! Layers, bottom to top: the dimmed backdrop (press closes), the centered
//! image with counter and caption (press closes only on `any-click`), the
//! navigation arrows and the close control.
//!
//! The whole overlay relays finger press and lift positions, so swipes work
//! anywhere on it and are seen before any press they cause.

use crate::gallery::lightbox::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::input_guard;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Image, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the overlay, or nothing when the lightbox is closed.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    let ViewContext { i18n, state } = ctx;
    let (current, total) = state.counter()?;

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackgroundPressed);

    let counter = Container::new(
        Text::new(i18n.tr_with_args(
            "lightbox-counter",
            &[
                ("current", current.to_string().as_str()),
                ("total", total.to_string().as_str()),
            ],
        ))
        .size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(counter)
        .push(picture(i18n, state));

    if let Some(caption) = state.caption().filter(|c| !c.is_empty()) {
        content = content.push(
            Container::new(Text::new(caption.to_string()).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    let centered = Container::new(mouse_area(content).on_press(Message::ContentPressed))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let previous = nav_button("◀", i18n.tr("lightbox-previous"), Message::Previous);
    let next = nav_button("▶", i18n.tr("lightbox-next"), Message::Next);
    let close = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button::overlay)
        .on_press(Message::ClosePressed);

    let overlay = Stack::new()
        .push(backdrop)
        .push(centered)
        .push(
            Container::new(previous)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_y(Vertical::Center),
        )
        .push(
            Container::new(next)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        )
        .push(
            Container::new(close)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Some(
        input_guard(overlay)
            .on_finger_pressed(Message::TouchStart)
            .on_finger_lifted(Message::TouchEnd)
            .into(),
    )
}

fn nav_button<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(
            button(
                Container::new(Text::new(glyph).size(typography::TITLE_MD))
                    .center_x(Length::Fixed(sizing::NAV_BUTTON))
                    .center_y(Length::Fixed(sizing::NAV_BUTTON)),
            )
            .padding(0)
            .style(styles::button::overlay)
            .on_press(message),
        )
        .push(Text::new(label).size(typography::CAPTION))
        .into()
}

/// The displayed image, the loading indicator or the error placeholder.
fn picture<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    if state.load_error().is_some() {
        return Text::new(i18n.tr("lightbox-load-error"))
            .size(typography::TITLE_MD)
            .into();
    }

    let mut layers = Stack::new();
    if let Some(displayed) = state.displayed() {
        layers = layers.push(
            Image::new(displayed.image.handle.clone())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .opacity(state.image_opacity()),
        );
    }
    if state.is_loading() {
        layers = layers.push(
            Container::new(Text::new(i18n.tr("lightbox-loading")).size(typography::BODY))
                .padding(spacing::MD)
                .style(styles::overlay::indicator(radius::MD)),
        );
    }
    layers.into()
}
