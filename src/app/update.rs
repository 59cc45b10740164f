// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component effects are turned into `Task`s here: image loads for the
//! lightbox and the simulated form submissions.

use super::{Message, Section};
use crate::catalog::{CategoryFilter, ProductFilter, Reveal, Visibility};
use crate::clock::Clock;
use crate::enquiry;
use crate::gallery::{lightbox, loader};
use crate::site::Site;
use crate::slideshow;
use chrono::Local;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub site: &'a Site,
    pub lightbox: &'a mut lightbox::State,
    pub slideshow: &'a mut slideshow::State,
    pub filter: &'a mut ProductFilter,
    pub visibility: &'a mut Vec<Visibility>,
    pub reveal: &'a mut Reveal,
    pub enquiry: &'a mut enquiry::State,
    pub contact: &'a mut enquiry::State,
    pub clock: &'a mut Clock,
    pub section: &'a mut Section,
    pub menu_open: &'a mut bool,
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    let effect = ctx.lightbox.handle(message, &ctx.site.registry);
    lightbox_task(effect)
}

/// Arrow keys drive the lightbox while it is open, the slideshow otherwise.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: lightbox::Key) -> Task<Message> {
    if ctx.lightbox.is_active() {
        return handle_lightbox_message(ctx, lightbox::Message::Key(key));
    }
    if *ctx.section == Section::Home {
        match key {
            lightbox::Key::ArrowLeft => ctx.slideshow.handle(slideshow::Message::Previous),
            lightbox::Key::ArrowRight => ctx.slideshow.handle(slideshow::Message::Next),
            lightbox::Key::Escape => {}
        }
    }
    Task::none()
}

pub fn handle_form_message(
    form: &mut enquiry::State,
    message: enquiry::Message,
    wrap: fn(enquiry::Message) -> Message,
) -> Task<Message> {
    match form.handle(message) {
        enquiry::Effect::None => Task::none(),
        enquiry::Effect::Submit { submission, delay } => {
            tracing::info!(kind = ?form.kind(), "submitting form");
            Task::perform(enquiry::submit(submission, delay), move |outcome| {
                wrap(enquiry::Message::Completed(outcome))
            })
        }
        enquiry::Effect::OpenMailClient(uri) => {
            Task::perform(enquiry::open_mail_client(uri), move |opened| {
                wrap(enquiry::Message::MailClientOpened(opened))
            })
        }
        enquiry::Effect::CopyToClipboard(contents) => iced::clipboard::write(contents),
    }
}

pub fn handle_category_selected(ctx: &mut UpdateContext<'_>, category: CategoryFilter) {
    ctx.filter.select_category(category);
    refilter(ctx);
}

pub fn handle_search_changed(ctx: &mut UpdateContext<'_>, input: &str) {
    ctx.filter.set_search(input);
    refilter(ctx);
}

pub fn handle_section(ctx: &mut UpdateContext<'_>, section: Section) {
    *ctx.section = section;
    *ctx.menu_open = false;
    if section == Section::Products {
        *ctx.reveal = Reveal::start(Instant::now());
    }
}

pub fn handle_clock_tick(ctx: &mut UpdateContext<'_>) {
    ctx.clock.tick(Local::now());
}

fn refilter(ctx: &mut UpdateContext<'_>) {
    *ctx.visibility = ctx.filter.apply(ctx.site.product_infos());
    *ctx.reveal = Reveal::start(Instant::now());
}

fn lightbox_task(effect: lightbox::Effect) -> Task<Message> {
    match effect {
        lightbox::Effect::LoadImage(request) => Task::perform(loader::perform(request), |outcome| {
            Message::Lightbox(lightbox::Message::ImageLoaded(outcome))
        }),
        lightbox::Effect::Closed | lightbox::Effect::None => Task::none(),
    }
}
