// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the demo document inside a both-axis scrollable wrapped in the
//! capture area, with the session marker and a usage hint layered on top.

use super::Message;
use crate::ui::autoscroll::{component, indicator};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::capture_area::capture_area;
use iced::alignment::Horizontal;
use iced::mouse;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, Column, Container, Id, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Width of the generated document, wide enough to pan on both axes.
const DOCUMENT_WIDTH: f32 = 2400.0;
const PARAGRAPH_COUNT: usize = 40;

const HINT: &str =
    "Hold the middle button and drag to pan. A quick middle click keeps scrolling until the next click.";

const SAMPLE_PARAGRAPH: &str =
    "The further the pointer drifts from the press point, the faster the page moves underneath it. \
     Steer by dragging in any direction; the marker at the press point shows the dominant axis. \
     Release after holding to stop, or release quickly and let the page carry on by itself.";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub autoscroll: &'a component::State,
}

/// Renders the document pane with the autoscroll overlay stack.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let session_active = ctx.autoscroll.is_session_active();

    let scrollable = Scrollable::new(document())
        .id(Id::new(component::SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    let captured = capture_area(scrollable, ctx.autoscroll.withholds_content_events());

    let cursor_interaction = if session_active {
        mouse::Interaction::Move
    } else {
        mouse::Interaction::default()
    };
    let content = mouse_area(captured).interaction(cursor_interaction);

    let mut stack = Stack::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(marker) = ctx.autoscroll.indicator() {
        stack = stack.push(indicator::layer(marker));
    }

    stack.push(hint_overlay()).into()
}

/// Generated multi-paragraph document, wider than any reasonable window.
fn document() -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(Text::new("iced_drift").size(typography::TITLE_MD));

    for index in 0..PARAGRAPH_COUNT {
        column = column.push(
            Text::new(format!("{}. {SAMPLE_PARAGRAPH}", index + 1)).size(typography::BODY),
        );
    }

    Container::new(column)
        .width(Length::Fixed(DOCUMENT_WIDTH))
        .into()
}

fn hint_overlay() -> Element<'static, Message> {
    let pill = Container::new(Text::new(HINT).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::hint(radius::SM));

    Container::new(pill)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::MD)
        .into()
}
