use std::time::{Duration, Instant};

use iced::Size;
use jupiter_core::{Direction, LoadState, SettleTarget};
use jupiter_model::{CategoryPayload, Item, Photo, Row};
use jupiter_player::app::{AppConfig, bootstrap};
use jupiter_player::carousel::CarouselMessage;
use jupiter_player::messages::Message;
use jupiter_player::state::State;
use jupiter_player::subscriptions::{Listener, listeners, window_event};
use jupiter_player::update::update;

fn media_row(header: &str, high_timeline: bool, items: usize) -> Row {
    Row {
        header: Some(header.to_string()),
        high_timeline,
        data: (0..items)
            .map(|i| Item {
                heading: Some(format!("{header} {i}")),
                vertical_photos: vec![Photo::new(format!(
                    "http://127.0.0.1:9/{header}/{i}.jpg"
                ))],
            })
            .collect(),
    }
}

fn payload() -> CategoryPayload {
    CategoryPayload::from_rows(vec![
        media_row("row1", true, 12),
        media_row("row2", false, 12),
        media_row("row3", true, 2),
    ])
}

fn mounted_state() -> State {
    bootstrap::base_state(&AppConfig::new("http://127.0.0.1:9/front"))
}

fn state_with(payload: CategoryPayload) -> State {
    let mut state = mounted_state();
    let _ = update(
        &mut state,
        CarouselMessage::FrontPageLoaded(Ok(payload)).into(),
    );
    state
}

fn loaded_state() -> State {
    state_with(payload())
}

fn settle_all(state: &mut State) {
    let _ = update(
        state,
        CarouselMessage::SettleDue(SettleTarget::AllRows).into(),
    );
}

#[test]
fn loaded_payload_keeps_high_timeline_rows_and_schedules_settle() {
    let state = loaded_state();
    let view = state.carousel.as_ref().expect("carousel mounted");

    assert_eq!(view.carousel.load_state(), &LoadState::Loaded);
    let titles: Vec<_> = view.carousel.rows().iter().map(Row::title).collect();
    assert_eq!(titles, vec!["row1", "row3"]);
    assert!(view.has_timer(SettleTarget::AllRows));
    assert!(view.scrollable_id(1).is_some());
    assert!(view.scrollable_id(2).is_none());
}

#[test]
fn arrows_follow_strip_width_after_settle() {
    let mut state = loaded_state();
    settle_all(&mut state);
    let view = state.carousel.as_ref().unwrap();

    assert!(!view.has_timer(SettleTarget::AllRows));
    // 12 cards overflow the strip, 2 cards do not
    assert!(!view.carousel.arrow_visible(0, Direction::Left));
    assert!(view.carousel.arrow_visible(0, Direction::Right));
    assert!(!view.carousel.arrow_visible(1, Direction::Left));
    assert!(!view.carousel.arrow_visible(1, Direction::Right));
}

#[test]
fn fetch_error_surfaces_failed_state() {
    let mut state = mounted_state();
    let _ = update(
        &mut state,
        CarouselMessage::FrontPageLoaded(Err("HTTP 503".into())).into(),
    );
    let view = state.carousel.as_ref().unwrap();

    assert_eq!(
        view.carousel.load_state(),
        &LoadState::Failed("HTTP 503".into())
    );
    assert!(view.carousel.rows().is_empty());
    assert_eq!(view.pending_timers(), 0);
}

#[test]
fn resize_recomputes_layout_and_holds_one_timer() {
    let mut state = loaded_state();
    settle_all(&mut state);

    let _ = update(&mut state, Message::WindowResized(Size::new(700.0, 600.0)));
    let _ = update(&mut state, Message::WindowResized(Size::new(800.0, 600.0)));

    assert_eq!(state.window_width, 800.0);
    let view = state.carousel.as_ref().unwrap();
    assert_eq!(view.carousel.layout().cards_per_slide, 3);
    assert!(view.has_timer(SettleTarget::AllRows));
    assert_eq!(view.pending_timers(), 1);
}

#[test]
fn arrow_press_animates_then_settles_row() {
    let mut state = loaded_state();
    settle_all(&mut state);

    let _ = update(
        &mut state,
        CarouselMessage::ScrollRequested(0, Direction::Right).into(),
    );
    {
        let view = state.carousel.as_ref().unwrap();
        assert!(view.is_row_animating(0));
        assert!(!view.is_row_animating(1));
        assert!(!view.has_timer(SettleTarget::Row(0)));
    }

    let _ = update(
        &mut state,
        CarouselMessage::AnimationTick(Instant::now() + Duration::from_secs(1))
            .into(),
    );
    let view = state.carousel.as_ref().unwrap();
    let scroll_amount = view.carousel.layout().scroll_amount;

    assert!(!view.is_animating());
    let geometry = view.carousel.geometry(0).unwrap();
    assert!((geometry.scroll_offset - scroll_amount).abs() < 0.01);
    assert!(view.carousel.arrow_visible(0, Direction::Left));
    assert!(view.carousel.arrow_visible(0, Direction::Right));
}

#[test]
fn arrow_press_without_distance_falls_back_to_timer() {
    let mut state = loaded_state();
    settle_all(&mut state);

    // already at the left edge
    let _ = update(
        &mut state,
        CarouselMessage::ScrollRequested(0, Direction::Left).into(),
    );
    let view = state.carousel.as_ref().unwrap();

    assert!(!view.is_animating());
    assert!(view.has_timer(SettleTarget::Row(0)));
}

#[test]
fn scroll_request_for_unknown_row_is_ignored() {
    let mut state = loaded_state();
    settle_all(&mut state);

    let _ = update(
        &mut state,
        CarouselMessage::ScrollRequested(7, Direction::Right).into(),
    );
    let view = state.carousel.as_ref().unwrap();

    assert!(!view.is_animating());
    assert!(!view.has_timer(SettleTarget::Row(7)));
}

#[test]
fn close_request_unmounts_carousel() {
    let mut state = loaded_state();
    assert!(state.is_mounted());

    let _ = update(&mut state, Message::CloseRequested(iced::window::Id::unique()));

    assert!(!state.is_mounted());
    // late messages for the torn down carousel are dropped
    let _ = update(
        &mut state,
        CarouselMessage::SettleDue(SettleTarget::AllRows).into(),
    );
    let _ = update(&mut state, Message::WindowResized(Size::new(900.0, 600.0)));
    assert!(state.carousel.is_none());
}

#[test]
fn opened_window_size_replaces_requested_width() {
    let mut state = mounted_state();
    assert_eq!(
        state.carousel.as_ref().unwrap().carousel.layout().cards_per_slide,
        5
    );

    let message = window_event(iced::window::Event::Opened {
        position: None,
        size: Size::new(1600.0, 900.0),
    });
    assert!(matches!(message, Message::WindowResized(size) if size.width == 1600.0));
    let _ = update(&mut state, message);

    assert_eq!(state.window_width, 1600.0);
    let layout = *state.carousel.as_ref().unwrap().carousel.layout();
    assert_eq!(layout.cards_per_slide, 7);
    assert_eq!(layout.viewport_width, 1600.0);
    assert!(matches!(
        window_event(iced::window::Event::Focused),
        Message::NoOp
    ));
}

#[test]
fn listeners_follow_carousel_lifecycle() {
    let mut state = loaded_state();
    settle_all(&mut state);
    assert_eq!(
        listeners(&state),
        vec![Listener::CloseRequests, Listener::WindowOpened, Listener::Resize]
    );

    let _ = update(
        &mut state,
        CarouselMessage::ScrollRequested(0, Direction::Right).into(),
    );
    assert!(listeners(&state).contains(&Listener::AnimationTick));

    let _ = update(&mut state, Message::CloseRequested(iced::window::Id::unique()));
    let after = listeners(&state);
    assert!(!after.contains(&Listener::Resize));
    assert!(!after.contains(&Listener::AnimationTick));
    assert_eq!(after, vec![Listener::CloseRequests, Listener::WindowOpened]);
}

#[test]
fn row_settle_fallback_rechecks_arrows() {
    let mut state =
        state_with(CategoryPayload::from_rows(vec![media_row("short", true, 6)]));
    settle_all(&mut state);
    assert!(
        state
            .carousel
            .as_ref()
            .unwrap()
            .carousel
            .arrow_visible(0, Direction::Right)
    );

    // nothing to the left, so no tween runs and the row timer is held
    let _ = update(
        &mut state,
        CarouselMessage::ScrollRequested(0, Direction::Left).into(),
    );
    // six cards fit once the slide holds seven
    let _ = update(&mut state, Message::WindowResized(Size::new(1500.0, 900.0)));
    {
        let view = state.carousel.as_ref().unwrap();
        assert!(view.has_timer(SettleTarget::Row(0)));
        assert!(view.carousel.arrow_visible(0, Direction::Right));
    }

    let _ = update(
        &mut state,
        CarouselMessage::SettleDue(SettleTarget::Row(0)).into(),
    );
    let view = state.carousel.as_ref().unwrap();
    assert!(!view.has_timer(SettleTarget::Row(0)));
    assert!(view.has_timer(SettleTarget::AllRows));
    assert!(!view.carousel.arrow_visible(0, Direction::Left));
    assert!(!view.carousel.arrow_visible(0, Direction::Right));
}
