// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driven through the autoscroll component with
//! synthetic events and explicit timestamps.

use iced::{event, mouse, Point, Vector};
use iced_drift::ui::autoscroll::component::{Effect, State};
use iced_drift::ui::autoscroll::indicator::Direction;
use std::time::{Duration, Instant};

fn moved(x: f32, y: f32) -> event::Event {
    event::Event::Mouse(mouse::Event::CursorMoved {
        position: Point::new(x, y),
    })
}

fn pressed(button: mouse::Button) -> event::Event {
    event::Event::Mouse(mouse::Event::ButtonPressed(button))
}

fn released(button: mouse::Button) -> event::Event {
    event::Event::Mouse(mouse::Event::ButtonReleased(button))
}

fn assert_velocity(actual: Vector, expected: Vector) {
    assert!(
        (actual.x - expected.x).abs() < 1e-4 && (actual.y - expected.y).abs() < 1e-4,
        "expected velocity {expected:?}, got {actual:?}"
    );
}

#[test]
fn long_press_pans_and_ends_on_release() {
    let mut state = State::default();
    let start = Instant::now();

    state.handle_raw_event(moved(100.0, 100.0), start);
    let (effect, _) = state.handle_raw_event(pressed(mouse::Button::Middle), start);
    assert_eq!(effect, Effect::SessionStarted);
    assert!(state.is_session_active());
    assert!(!state.session().is_toggle_mode());
    assert_eq!(state.session().origin(), Some(Point::new(100.0, 100.0)));

    let indicator = state.indicator().expect("marker appears at the press point");
    assert_eq!(indicator.origin(), Point::new(100.0, 100.0));
    assert_eq!(indicator.direction(), None);

    state.handle_raw_event(moved(100.0, 150.0), start + Duration::from_millis(220));
    assert_velocity(state.session().velocity(), Vector::new(0.0, 5.0));
    assert_eq!(state.indicator().unwrap().direction(), Some(Direction::Down));

    let (effect, _) = state.handle_raw_event(
        released(mouse::Button::Middle),
        start + Duration::from_millis(250),
    );
    assert_eq!(effect, Effect::SessionEnded);
    assert!(!state.is_session_active());
    assert!(state.indicator().is_none());
    assert_velocity(state.session().velocity(), Vector::new(0.0, 0.0));
    assert_eq!(state.scroll_step(), None);
}

#[test]
fn quick_click_enters_toggle_mode_and_an_ordinary_click_cancels() {
    let mut state = State::default();
    let start = Instant::now();

    state.handle_raw_event(moved(100.0, 100.0), start);
    state.handle_raw_event(pressed(mouse::Button::Middle), start);
    let (effect, _) = state.handle_raw_event(
        released(mouse::Button::Middle),
        start + Duration::from_millis(150),
    );
    assert_eq!(effect, Effect::SessionPromoted);
    assert!(state.is_session_active());
    assert!(state.session().is_toggle_mode());
    assert!(state.indicator().is_some());

    state.handle_raw_event(moved(50.0, 100.0), start + Duration::from_millis(300));
    assert_velocity(state.session().velocity(), Vector::new(-5.0, 0.0));
    assert_eq!(state.indicator().unwrap().direction(), Some(Direction::Left));

    // A left click elsewhere on the page ends toggle-mode scrolling.
    let (effect, _) =
        state.handle_raw_event(pressed(mouse::Button::Left), start + Duration::from_millis(400));
    assert_eq!(effect, Effect::None);
    assert!(state.is_session_active());

    let (effect, _) = state.handle_raw_event(
        released(mouse::Button::Left),
        start + Duration::from_millis(450),
    );
    assert_eq!(effect, Effect::SessionEnded);
    assert!(!state.is_session_active());
    assert!(state.indicator().is_none());
    assert_velocity(state.session().velocity(), Vector::new(0.0, 0.0));
}

#[test]
fn middle_press_stops_a_toggle_session() {
    let mut state = State::default();
    let start = Instant::now();

    state.handle_raw_event(moved(200.0, 200.0), start);
    state.handle_raw_event(pressed(mouse::Button::Middle), start);
    state.handle_raw_event(
        released(mouse::Button::Middle),
        start + Duration::from_millis(100),
    );
    assert!(state.session().is_toggle_mode());

    let (effect, _) = state.handle_raw_event(
        pressed(mouse::Button::Middle),
        start + Duration::from_secs(2),
    );
    assert_eq!(effect, Effect::SessionEnded);
    assert!(!state.is_session_active());
    assert!(state.indicator().is_none());

    // The release of the stopping press is a no-op on the idle session.
    let (effect, _) = state.handle_raw_event(
        released(mouse::Button::Middle),
        start + Duration::from_secs(2) + Duration::from_millis(50),
    );
    assert_eq!(effect, Effect::None);
    assert!(!state.is_session_active());
}

#[test]
fn clicks_outside_toggle_mode_never_end_the_session() {
    let mut state = State::default();
    let start = Instant::now();

    state.handle_raw_event(moved(100.0, 100.0), start);
    state.handle_raw_event(pressed(mouse::Button::Middle), start);

    // A left press+release while the middle button is held leaves the
    // session running.
    state.handle_raw_event(pressed(mouse::Button::Left), start + Duration::from_millis(50));
    let (effect, _) = state.handle_raw_event(
        released(mouse::Button::Left),
        start + Duration::from_millis(80),
    );
    assert_eq!(effect, Effect::None);
    assert!(state.is_session_active());
}

#[test]
fn velocity_scales_linearly_without_a_clamp() {
    let mut state = State::default();
    let start = Instant::now();

    state.handle_raw_event(moved(100.0, 100.0), start);
    state.handle_raw_event(pressed(mouse::Button::Middle), start);

    state.handle_raw_event(moved(100.0, 1100.0), start);
    assert_velocity(state.session().velocity(), Vector::new(0.0, 100.0));
    assert_eq!(state.indicator().unwrap().direction(), Some(Direction::Down));

    state.handle_raw_event(moved(2100.0, 100.0), start);
    assert_velocity(state.session().velocity(), Vector::new(200.0, 0.0));
    assert_eq!(
        state.indicator().unwrap().direction(),
        Some(Direction::Right)
    );
}
