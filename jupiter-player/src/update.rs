use iced::{Size, Task};

use crate::carousel::update::{handle_carousel_message, schedule_settle};
use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update::{}", message.name());

    match message {
        Message::Carousel(msg) => handle_carousel_message(state, msg),
        Message::WindowResized(size) => handle_window_resized(state, size),
        Message::CloseRequested(id) => {
            log::debug!("Close requested for window {:?}", id);
            state.unmount_carousel();
            iced::exit()
        }
        Message::NoOp => Task::none(),
    }
}

pub fn handle_window_resized(state: &mut State, size: Size) -> Task<Message> {
    log::debug!("Window resized to: {}x{}", size.width, size.height);

    state.window_width = size.width;

    match state.carousel.as_mut() {
        Some(view) => {
            let check = view.carousel.resize(size.width);
            schedule_settle(view, check)
        }
        None => Task::none(),
    }
}
