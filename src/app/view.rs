// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the header, the current section and the footer. While the
//! lightbox is open its overlay is stacked on top and the page ignores input,
//! so the background cannot scroll. The scrollable stays in the tree and
//! keeps its offset.

use super::{Message, Section};
use crate::catalog::{ProductFilter, Reveal, Visibility};
use crate::clock::Clock;
use crate::enquiry;
use crate::gallery::lightbox;
use crate::i18n::fluent::I18n;
use crate::site::Site;
use crate::slideshow;
use crate::ui::design_tokens::spacing;
use crate::ui::widgets::input_guard;
use crate::ui::{self, header};
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a Site,
    pub site_name: &'a str,
    pub lightbox: &'a lightbox::State,
    pub slideshow: &'a slideshow::State,
    pub filter: &'a ProductFilter,
    pub visibility: &'a [Visibility],
    pub reveal: &'a Reveal,
    pub enquiry: &'a enquiry::State,
    pub contact: &'a enquiry::State,
    pub clock: &'a Clock,
    pub section: Section,
    pub menu_open: bool,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        site_name: ctx.site_name,
        clock: ctx.clock,
        section: ctx.section,
        menu_open: ctx.menu_open,
    });

    let mut page = Column::new().spacing(spacing::LG).width(Length::Fill);
    if let Some(key) = ctx.warning {
        page = page.push(
            Container::new(Text::new(ctx.i18n.tr(key)))
                .padding(spacing::SM)
                .style(crate::ui::styles::container::field_error),
        );
    }
    page = page
        .push(Container::new(section_view(&ctx)).padding(spacing::MD))
        .push(header::footer(ctx.i18n, ctx.site_name, ctx.clock));

    let body = input_guard(scrollable(page).height(Length::Fill))
        .blocked(ctx.lightbox.scroll_locked());

    let base = Column::new()
        .push(header)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    match ui::lightbox::view(ui::lightbox::ViewContext {
        i18n: ctx.i18n,
        state: ctx.lightbox,
    }) {
        Some(overlay) => Stack::new()
            .push(base)
            .push(overlay.map(Message::Lightbox))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base.into(),
    }
}

fn section_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.section {
        Section::Home => ui::slideshow::view(ui::slideshow::ViewContext {
            i18n: ctx.i18n,
            slides: &ctx.site.slides,
            state: ctx.slideshow,
        })
        .map(Message::Slideshow),
        Section::Products => ui::catalog::view(ui::catalog::ViewContext {
            i18n: ctx.i18n,
            products: &ctx.site.products,
            filter: ctx.filter,
            visibility: ctx.visibility,
            reveal: ctx.reveal,
        }),
        Section::Gallery => ui::gallery::view(ui::gallery::ViewContext {
            i18n: ctx.i18n,
            registry: &ctx.site.registry,
            triggers: &ctx.site.gallery,
        })
        .map(Message::Lightbox),
        Section::Enquiry => ui::forms::view(ui::forms::ViewContext {
            i18n: ctx.i18n,
            state: ctx.enquiry,
        })
        .map(Message::Enquiry),
        Section::Contact => ui::forms::view(ui::forms::ViewContext {
            i18n: ctx.i18n,
            state: ctx.contact,
        })
        .map(Message::Contact),
    }
}
