//! Root-level subscription composition

use iced::{Subscription, window};

use crate::carousel::CarouselMessage;
use crate::messages::Message;
use crate::state::State;

/// ~120 FPS tween ticks while a row is animating.
const ANIMATION_TICK_NS: u64 = 8_333_333;

/// Environment listeners the application can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    CloseRequests,
    WindowOpened,
    Resize,
    AnimationTick,
}

impl Listener {
    fn subscribe(self) -> Subscription<Message> {
        match self {
            Listener::CloseRequests => {
                window::close_requests().map(Message::CloseRequested)
            }
            Listener::WindowOpened => {
                window::events().map(|(_id, event)| window_event(event))
            }
            Listener::Resize => window::resize_events()
                .map(|(_id, size)| Message::WindowResized(size)),
            Listener::AnimationTick => iced::time::every(
                std::time::Duration::from_nanos(ANIMATION_TICK_NS),
            )
            .map(|now| Message::Carousel(CarouselMessage::AnimationTick(now))),
        }
    }
}

/// Listeners active for `state`. Resize and tick listeners exist only
/// while the carousel is mounted.
pub fn listeners(state: &State) -> Vec<Listener> {
    let mut listeners = vec![Listener::CloseRequests, Listener::WindowOpened];

    if let Some(view) = &state.carousel {
        listeners.push(Listener::Resize);
        if view.is_animating() {
            listeners.push(Listener::AnimationTick);
        }
    }

    listeners
}

pub fn subscription(state: &State) -> Subscription<Message> {
    Subscription::batch(listeners(state).into_iter().map(Listener::subscribe))
}

/// The opened window reports its real size; layout starts from that
/// instead of the requested one.
pub fn window_event(event: window::Event) -> Message {
    match event {
        window::Event::Opened { size, .. } => Message::WindowResized(size),
        _ => Message::NoOp,
    }
}
