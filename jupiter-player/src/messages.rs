//! Root message type

use iced::{Size, window};

use crate::carousel::CarouselMessage;

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    WindowResized(Size),
    CloseRequested(window::Id),
    NoOp,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::Carousel(msg) => msg.name(),
            Message::WindowResized(_) => "WindowResized",
            Message::CloseRequested(_) => "CloseRequested",
            Message::NoOp => "NoOp",
        }
    }
}

impl From<CarouselMessage> for Message {
    fn from(msg: CarouselMessage) -> Self {
        Message::Carousel(msg)
    }
}
