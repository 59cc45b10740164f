// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections and
//! the lightbox.
//!
//! The `App` struct owns the site content and every component state, and
//! translates component effects into tasks (image loads, simulated form
//! submissions).

mod message;
pub mod paths;
mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::catalog::{CategoryFilter, ProductFilter, Reveal, Visibility};
use crate::clock::Clock;
use crate::config::{self, Config};
use crate::enquiry::{self, FormKind};
use crate::gallery::lightbox;
use crate::i18n::fluent::I18n;
use crate::site::Site;
use crate::slideshow;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    site: Site,
    /// Display name, falling back to the localized default.
    site_name: String,
    lightbox: lightbox::State,
    slideshow: slideshow::State,
    filter: ProductFilter,
    visibility: Vec<Visibility>,
    reveal: Reveal,
    enquiry: enquiry::State,
    contact: enquiry::State,
    clock: Clock,
    section: Section,
    menu_open: bool,
    /// i18n key of a startup problem shown above the page.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("lightbox_active", &self.lightbox.is_active())
            .field("products", &self.site.products.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and site content, then builds every component.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let site_dir = flags.site_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let (site, site_warning) = match Site::load(&site_dir) {
            Ok(site) => (site, None),
            Err(err) => {
                tracing::error!(dir = %site_dir.display(), %err, "failed to load site");
                (Site::default(), Some(err.i18n_key().to_string()))
            }
        };

        let cli_category = flags.category.as_deref().and_then(|anchor| {
            let parsed = CategoryFilter::from_anchor(anchor);
            if parsed.is_none() {
                tracing::warn!(anchor, "ignoring unknown --category");
            }
            parsed
        });

        let app = Self::from_site(
            &config,
            i18n,
            site,
            cli_category,
            site_warning.or(config_warning),
        );
        (app, Task::none())
    }

    /// Builds every component around already loaded content.
    fn from_site(
        config: &Config,
        i18n: I18n,
        site: Site,
        category: Option<CategoryFilter>,
        warning: Option<String>,
    ) -> Self {
        let mut filter = ProductFilter::new();
        if let Some(category) = category.or(site.initial_category) {
            filter.select_category(category);
        }
        let visibility = filter.apply(site.product_infos());
        // An explicit category request lands on the catalog.
        let section = if category.is_some() {
            Section::Products
        } else {
            Section::Home
        };
        let site_name = site
            .name
            .clone()
            .unwrap_or_else(|| i18n.tr("site-default-name"));

        tracing::info!(
            slides = site.slides.len(),
            products = site.products.len(),
            gallery = site.gallery.len(),
            "storefront ready"
        );

        App {
            i18n,
            site_name,
            slideshow: slideshow::State::new(site.slides.len(), &config.slideshow),
            lightbox: lightbox::State::new(config.lightbox.close_activation),
            filter,
            visibility,
            reveal: Reveal::start(Instant::now()),
            enquiry: enquiry::State::new(FormKind::Enquiry),
            contact: enquiry::State::new(FormKind::Contact),
            clock: Clock::new(&config.clock),
            section,
            menu_open: false,
            warning,
            site,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.lightbox.caption().filter(|c| !c.is_empty()) {
            Some(caption) => format!("{caption} - {app_name}"),
            None => format!("{} - {app_name}", self.site_name),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let revealing =
            self.section == Section::Products && !self.reveal.is_settled(&self.visibility);
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_loading_subscription(self.lightbox.is_loading()),
            subscription::create_slideshow_subscription(
                self.section == Section::Home
                    && !self.lightbox.is_active()
                    && self.slideshow.wants_ticks(),
                self.slideshow.interval(),
            ),
            subscription::create_reveal_subscription(revealing),
            subscription::create_clock_subscription(self.clock.date_time_text().is_some()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            site: &self.site,
            lightbox: &mut self.lightbox,
            slideshow: &mut self.slideshow,
            filter: &mut self.filter,
            visibility: &mut self.visibility,
            reveal: &mut self.reveal,
            enquiry: &mut self.enquiry,
            contact: &mut self.contact,
            clock: &mut self.clock,
            section: &mut self.section,
            menu_open: &mut self.menu_open,
        };

        match message {
            Message::Lightbox(message) => update::handle_lightbox_message(&mut ctx, message),
            Message::Slideshow(message) => {
                ctx.slideshow.handle(message);
                Task::none()
            }
            Message::Enquiry(message) => {
                update::handle_form_message(ctx.enquiry, message, Message::Enquiry)
            }
            Message::Contact(message) => {
                update::handle_form_message(ctx.contact, message, Message::Contact)
            }
            Message::CategorySelected(category) => {
                update::handle_category_selected(&mut ctx, category);
                Task::none()
            }
            Message::SearchChanged(input) => {
                update::handle_search_changed(&mut ctx, &input);
                Task::none()
            }
            Message::ShowSection(section) => {
                update::handle_section(&mut ctx, section);
                Task::none()
            }
            Message::ToggleMenu => {
                *ctx.menu_open = !*ctx.menu_open;
                Task::none()
            }
            Message::KeyPressed(key) => update::handle_key(&mut ctx, key),
            Message::LoadingTick(now) => {
                update::handle_lightbox_message(&mut ctx, lightbox::Message::Tick(now))
            }
            Message::RevealTick(now) => {
                ctx.reveal.tick(now);
                Task::none()
            }
            Message::ClockTick => {
                update::handle_clock_tick(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            site: &self.site,
            site_name: &self.site_name,
            lightbox: &self.lightbox,
            slideshow: &self.slideshow,
            filter: &self.filter,
            visibility: &self.visibility,
            reveal: &self.reveal,
            enquiry: &self.enquiry,
            contact: &self.contact,
            clock: &self.clock,
            section: self.section,
            menu_open: self.menu_open,
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::site::SiteManifest;
    use std::path::Path;

    const MANIFEST: &str = r#"
name = "MeatMasters"

[[slides]]
image = "one.jpg"

[[slides]]
image = "two.jpg"

[[products]]
name = "Ribeye"
category = "beef"
image = "ribeye.jpg"
gallery = "products"

[[products]]
name = "Drumsticks"
category = "chicken"
image = "drumsticks.jpg"
gallery = "products"
"#;

    fn app(category: Option<CategoryFilter>) -> App {
        let config = Config::default();
        let site = Site::from_manifest(
            Path::new("/shop"),
            SiteManifest::parse(MANIFEST).expect("manifest should parse"),
        );
        App::from_site(
            &config,
            I18n::new(Some("en-US".to_string()), &config),
            site,
            category,
            None,
        )
    }

    fn open_first_product(app: &mut App) {
        let trigger = app.site.products[0].trigger;
        let _ = app.update(Message::Lightbox(lightbox::Message::Open(trigger)));
    }

    #[test]
    fn title_shows_site_name_then_caption() {
        let mut app = app(None);
        assert_eq!(app.title(), "MeatMasters - Iced Storefront");

        open_first_product(&mut app);
        assert_eq!(app.title(), "Ribeye - Iced Storefront");
    }

    #[test]
    fn arrows_drive_slideshow_while_lightbox_closed() {
        let mut app = app(None);
        let _ = app.update(Message::KeyPressed(lightbox::Key::ArrowRight));
        assert_eq!(app.slideshow.current(), 1);
        assert!(!app.lightbox.is_active());
    }

    #[test]
    fn arrows_drive_lightbox_while_open() {
        let mut app = app(None);
        open_first_product(&mut app);
        let _ = app.update(Message::KeyPressed(lightbox::Key::ArrowRight));
        assert_eq!(app.lightbox.counter(), Some((2, 2)));
        assert_eq!(app.slideshow.current(), 0);

        let _ = app.update(Message::KeyPressed(lightbox::Key::Escape));
        assert!(!app.lightbox.is_active());
    }

    #[test]
    fn category_request_opens_catalog() {
        let app = app(Some(CategoryFilter::Only(Category::Chicken)));
        assert_eq!(app.section, Section::Products);
        let shown: Vec<bool> = app.visibility.iter().map(|v| v.is_shown()).collect();
        assert_eq!(shown, vec![false, true]);
    }

    #[test]
    fn search_refilters_products() {
        let mut app = app(None);
        let _ = app.update(Message::SearchChanged("  RIB ".to_string()));
        let shown: Vec<bool> = app.visibility.iter().map(|v| v.is_shown()).collect();
        assert_eq!(shown, vec![true, false]);
    }

    #[test]
    fn choosing_a_section_closes_the_menu() {
        let mut app = app(None);
        let _ = app.update(Message::ToggleMenu);
        assert!(app.menu_open);

        let _ = app.update(Message::ShowSection(Section::Gallery));
        assert!(!app.menu_open);
        assert_eq!(app.section, Section::Gallery);
    }
}
