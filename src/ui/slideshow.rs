// SPDX-License-Identifier: MPL-2.0
//! Hero slideshow view.

use crate::i18n::fluent::I18n;
use crate::site::Slide;
use crate::slideshow::{Message, State};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Column, Container, Image, Row, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slides: &'a [Slide],
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        slides,
        state,
    } = ctx;

    let Some(slide) = slides.get(state.current()) else {
        return Text::new(i18n.tr("slideshow-empty")).into();
    };

    let picture = Image::new(image::Handle::from_path(&slide.image))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SLIDE_HEIGHT));

    let mut stack = Stack::new().push(picture);

    if !slide.caption.is_empty() {
        stack = stack.push(
            Container::new(
                Container::new(Text::new(slide.caption.as_str()).size(typography::TITLE_MD))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::overlay::indicator(radius::SM)),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDE_HEIGHT))
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom),
        );
    }

    if slides.len() > 1 {
        stack = stack.push(
            Row::new()
                .push(arrow("◀", Message::Previous))
                .push(iced::widget::Space::new().width(Length::Fill))
                .push(arrow("▶", Message::Next))
                .padding(spacing::MD)
                .height(Length::Fixed(sizing::SLIDE_HEIGHT))
                .align_y(Vertical::Center),
        );
    }

    let dots = (0..slides.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
        let glyph = if index == state.current() { "●" } else { "○" };
        row.push(
            button(Text::new(glyph).size(typography::BODY))
                .padding(spacing::XXS)
                .style(styles::button::overlay)
                .on_press(Message::GoTo(index)),
        )
    });

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(stack)
        .push(dots);

    mouse_area(content)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .into()
}

fn arrow(glyph: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button::overlay)
        .on_press(message)
        .into()
}
