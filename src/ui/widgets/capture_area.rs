// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that withholds autoscroll-related events from its content.
//! Middle-button presses and releases never reach the wrapped content, and
//! while a scroll session is active every pointer event is consumed by the
//! session (steering moves, cancel clicks, the secondary-button context
//! sequence) instead of the page underneath.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// A widget that wraps content and withholds intercepted pointer events from
/// it.
pub struct CaptureArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    session_active: bool,
}

impl<'a, Message, Theme, Renderer> CaptureArea<'a, Message, Theme, Renderer> {
    /// Creates a new `CaptureArea` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        session_active: bool,
    ) -> Self {
        Self {
            content: content.into(),
            session_active,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for CaptureArea<'_, Message, Theme, Renderer>
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
        if is_withheld(event, self.session_active) {
            return;
        }

        // Pass through all other events
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
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
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

impl<'a, Message, Theme, Renderer> From<CaptureArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: CaptureArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a capture area wrapper.
pub fn capture_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    session_active: bool,
) -> CaptureArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    CaptureArea::new(content, session_active)
}

fn is_withheld(event: &Event, session_active: bool) -> bool {
    match event {
        Event::Mouse(
            mouse::Event::ButtonPressed(mouse::Button::Middle)
            | mouse::Event::ButtonReleased(mouse::Button::Middle),
        ) => true,
        Event::Mouse(_) => session_active,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_button_events_are_always_withheld() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Middle));
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Middle));

        assert!(is_withheld(&press, false));
        assert!(is_withheld(&press, true));
        assert!(is_withheld(&release, false));
        assert!(is_withheld(&release, true));
    }

    #[test]
    fn other_buttons_pass_through_while_idle() {
        let left = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let right = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));

        assert!(!is_withheld(&left, false));
        assert!(!is_withheld(&right, false));
    }

    #[test]
    fn pointer_events_are_withheld_during_a_session() {
        let left = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let right = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right));
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: iced::Point::new(10.0, 10.0),
        });

        assert!(is_withheld(&left, true));
        assert!(is_withheld(&right, true));
        assert!(is_withheld(&moved, true));
        assert!(!is_withheld(&moved, false));
    }

    #[test]
    fn non_mouse_events_always_pass_through() {
        let resized = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));

        assert!(!is_withheld(&resized, false));
        assert!(!is_withheld(&resized, true));
    }
}
