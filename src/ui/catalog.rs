// SPDX-License-Identifier: MPL-2.0
//! Product section: category buttons, search box and the product grid.

use crate::app::Message;
use crate::catalog::{Category, CategoryFilter, ProductFilter, Reveal, Visibility};
use crate::gallery::lightbox;
use crate::i18n::fluent::I18n;
use crate::site::Product;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, text_input, Column, Container, Image, Row, Text};
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub products: &'a [Product],
    pub filter: &'a ProductFilter,
    pub visibility: &'a [Visibility],
    pub reveal: &'a Reveal,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        products,
        filter,
        visibility,
        reveal,
    } = ctx;

    let filters = std::iter::once(("category-all", CategoryFilter::All))
        .chain(
            Category::ALL
                .into_iter()
                .map(|c| (c.i18n_key(), CategoryFilter::Only(c))),
        )
        .fold(Row::new().spacing(spacing::XS), |row, (key, choice)| {
            let style: fn(&Theme, button::Status) -> button::Style =
                if filter.category() == choice {
                    styles::button::primary
                } else {
                    styles::button::secondary
                };
            row.push(
                button(Text::new(i18n.tr(key)).size(typography::BODY))
                    .style(style)
                    .on_press(Message::CategorySelected(choice)),
            )
        });

    let search = text_input(&i18n.tr("product-search-placeholder"), filter.search_term())
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let toolbar = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .push(filters)
            .push(search)
            .wrap(),
    )
    .padding(spacing::SM)
    .style(styles::container::panel);

    let cards = products
        .iter()
        .zip(visibility.iter().copied())
        .filter(|(_, v)| reveal.is_revealed(*v))
        .map(|(product, _)| card(i18n, product));

    let grid = cards
        .fold(Row::new().spacing(spacing::MD), |row, card| row.push(card))
        .wrap();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(toolbar)
        .push(grid);

    if !visibility.iter().any(|v| v.is_shown()) {
        column = column.push(Text::new(i18n.tr("product-no-results")));
    }

    column.into()
}

fn card<'a>(i18n: &'a I18n, product: &'a Product) -> Element<'a, Message> {
    let thumbnail = button(
        Image::new(image::Handle::from_path(&product.image))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL)),
    )
    .padding(0)
    .style(styles::button::thumbnail)
    .on_press(Message::Lightbox(lightbox::Message::Open(product.trigger)));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .width(Length::Fixed(sizing::THUMBNAIL))
            .push(thumbnail)
            .push(Text::new(product.info.name.as_str()).size(typography::TITLE_MD))
            .push(Text::new(product.info.description.as_str()).size(typography::BODY))
            .push(
                Text::new(i18n.tr(product.info.category.i18n_key()))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.base.color),
                    }),
            ),
    )
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}
