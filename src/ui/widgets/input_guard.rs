// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that filters and relays input before its content sees it.
//!
//! Two uses:
//! - the page behind the lightbox is wrapped with input [`blocked`](InputGuard::blocked)
//!   so it cannot scroll or take focus, while the `Scrollable` stays in the
//!   widget tree and keeps its offset;
//! - the lightbox overlay relays finger press/lift x-coordinates *before* and
//!   *after* its content handles them, so a swipe is always announced ahead of
//!   any press the same finger triggers inside the overlay.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Rectangle, Size};

/// Wraps content, optionally blocking pointer and keyboard input and
/// relaying touch positions as messages.
pub struct InputGuard<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    blocked: bool,
    on_finger_pressed: Option<fn(f32) -> Message>,
    on_finger_lifted: Option<fn(f32) -> Message>,
}

impl<'a, Message, Theme, Renderer> InputGuard<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            blocked: false,
            on_finger_pressed: None,
            on_finger_lifted: None,
        }
    }

    /// Drops mouse, touch and keyboard events while `blocked` is true.
    #[must_use]
    pub fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Published with the x-coordinate of a finger landing inside the
    /// widget, before the content handles the press.
    #[must_use]
    pub fn on_finger_pressed(mut self, message: fn(f32) -> Message) -> Self {
        self.on_finger_pressed = Some(message);
        self
    }

    /// Published with the x-coordinate of a lifted finger, after the
    /// content handled the lift.
    #[must_use]
    pub fn on_finger_lifted(mut self, message: fn(f32) -> Message) -> Self {
        self.on_finger_lifted = Some(message);
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for InputGuard<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.blocked && is_user_input(event) {
            return;
        }

        if let (Some(on_pressed), Some(x)) = (
            self.on_finger_pressed,
            finger_pressed_x(event, layout.bounds()),
        ) {
            shell.publish(on_pressed(x));
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if let (Some(on_lifted), Some(x)) = (self.on_finger_lifted, finger_lifted_x(event)) {
            shell.publish(on_lifted(x));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.blocked {
            return mouse::Interaction::default();
        }
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<InputGuard<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(guard: InputGuard<'a, Message, Theme, Renderer>) -> Self {
        Self::new(guard)
    }
}

/// Helper function to create an input guard.
pub fn input_guard<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> InputGuard<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    InputGuard::new(content)
}

/// Events a locked page must not react to. Window events still pass so
/// layout and redraws keep working.
fn is_user_input(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(_) | Event::Touch(_) | Event::Keyboard(_)
    )
}

fn finger_pressed_x(event: &Event, bounds: Rectangle) -> Option<f32> {
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) if bounds.contains(*position) => {
            Some(position.x)
        }
        _ => None,
    }
}

fn finger_lifted_x(event: &Event) -> Option<f32> {
    match event {
        Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(position.x),
        _ => None,
    }
}
