use iced::{
    Element, Length,
    widget::{Space, column, container, text},
};

use crate::carousel;
use crate::messages::Message;
use crate::state::State;

const PAGE_TITLE_SIZE: f32 = 28.0;

/// Root shell: a page title above the carousel.
pub fn view(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &state.carousel {
        Some(view) => carousel::front_page(view),
        None => Space::new().width(Length::Fill).into(),
    };

    let margin = state.config.settings.margin_left as u16;
    let header = container(text("Jupiter").size(PAGE_TITLE_SIZE))
        .padding([12, margin]);

    column![header, content]
        .spacing(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
