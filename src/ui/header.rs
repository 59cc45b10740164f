// SPDX-License-Identifier: MPL-2.0
//! Page header (shop name, clock, section navigation) and footer.

use crate::app::{Message, Section};
use crate::clock::{Clock, YearSlot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site_name: &'a str,
    pub clock: &'a Clock,
    pub section: Section,
    pub menu_open: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        site_name,
        clock,
        section,
        menu_open,
    } = ctx;

    let mut title = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(Text::new(site_name).size(typography::TITLE_LG));
    if let Some(year) = clock.year_text(YearSlot::Header) {
        title = title.push(Text::new(year).size(typography::BODY));
    }

    let mut bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));
    if let Some(now) = clock.date_time_text() {
        bar = bar.push(Text::new(now).size(typography::BODY));
    }
    let menu_key = if menu_open { "nav-menu-close" } else { "nav-menu-open" };
    bar = bar.push(
        button(Text::new(i18n.tr(menu_key)))
            .style(styles::button::secondary)
            .on_press(Message::ToggleMenu),
    );

    let mut column = Column::new().spacing(spacing::SM).push(bar);
    if menu_open {
        let nav = Section::ALL
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, target| {
                let style: fn(&iced::Theme, button::Status) -> button::Style =
                    if target == section {
                        styles::button::primary
                    } else {
                        styles::button::secondary
                    };
                row.push(
                    button(Text::new(i18n.tr(target.i18n_key())))
                        .style(style)
                        .on_press(Message::ShowSection(target)),
                )
            });
        column = column.push(nav);
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::header)
        .into()
}

pub fn footer<'a>(i18n: &'a I18n, site_name: &'a str, clock: &'a Clock) -> Element<'a, Message> {
    let year = clock.year_text(YearSlot::Footer).unwrap_or_default();
    Container::new(
        Text::new(i18n.tr_with_args(
            "footer-copyright",
            &[("year", year.as_str()), ("name", site_name)],
        ))
        .size(typography::CAPTION),
    )
    .padding(spacing::SM)
    .center_x(Length::Fill)
    .into()
}
