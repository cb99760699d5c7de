//! View builders for the front page carousel

use iced::{
    Alignment, ContentFit, Element, Length,
    widget::{
        Space, button, column, container, image, row, scrollable, text,
    },
};
use jupiter_core::{Direction, LayoutVars, LoadState};
use jupiter_model::{Item, Row};
use lucide_icons::Icon;

use super::messages::CarouselMessage;
use super::state::CarouselView;
use crate::messages::Message;

/// Posters are portrait 2:3.
const POSTER_ASPECT: f32 = 1.5;
const ROW_SPACING: f32 = 28.0;
const TITLE_SIZE: f32 = 20.0;
const ARROW_ICON_SIZE: f32 = 28.0;

/// The whole front page: a notice while loading or on failure, otherwise
/// one strip per qualifying row.
pub fn front_page(view: &CarouselView) -> Element<'_, Message> {
    match view.carousel.load_state() {
        LoadState::Loading => notice("Loading front page…".to_string()),
        LoadState::Failed(err) => {
            notice(format!("The front page could not be loaded: {err}"))
        }
        LoadState::Loaded if view.carousel.rows().is_empty() => {
            notice("Nothing to show right now.".to_string())
        }
        LoadState::Loaded => {
            let rows = view
                .carousel
                .rows()
                .iter()
                .enumerate()
                .map(|(index, row)| media_row(view, index, row));

            scrollable(column(rows).spacing(ROW_SPACING).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}

fn media_row<'a>(
    view: &'a CarouselView,
    index: usize,
    media: &'a Row,
) -> Element<'a, Message> {
    let vars = view.carousel.layout_vars();
    let card_width = view.carousel.layout().render_card_width();
    let card_height = card_width * POSTER_ASPECT;

    let cards = media
        .data
        .iter()
        .map(|item| card(view, item, card_width, card_height));
    let strip = row(cards).spacing(vars.card_gap);

    let mut strip_scroll = scrollable(strip)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(move |viewport| {
            CarouselMessage::RowViewportChanged(index, viewport).into()
        })
        .width(Length::Fill)
        .height(Length::Fixed(card_height));
    if let Some(id) = view.scrollable_id(index) {
        strip_scroll = strip_scroll.id(id.clone());
    }

    let strip_with_arrows = row![
        arrow(view, index, Direction::Left, &vars, card_height),
        strip_scroll,
        arrow(view, index, Direction::Right, &vars, card_height),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let title = container(text(media.title()).size(TITLE_SIZE))
        .padding([0, vars.button_width as u16]);

    container(column![title, strip_with_arrows].spacing(8))
        .padding([0, vars.margin_left as u16])
        .width(Length::Fill)
        .into()
}

/// Arrow control; hidden arrows keep their slot so the strip never shifts.
fn arrow<'a>(
    view: &'a CarouselView,
    index: usize,
    direction: Direction,
    vars: &LayoutVars,
    height: f32,
) -> Element<'a, Message> {
    let width = Length::Fixed(vars.button_width);

    if !view.carousel.arrow_visible(index, direction) {
        return Space::new().width(width).into();
    }

    let icon = match direction {
        Direction::Left => Icon::ChevronLeft,
        Direction::Right => Icon::ChevronRight,
    };

    button(
        container(
            text(icon.unicode().to_string())
                .font(lucide_font())
                .size(ARROW_ICON_SIZE),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    )
    .on_press(CarouselMessage::ScrollRequested(index, direction).into())
    .padding(0)
    .width(width)
    .height(Length::Fixed(height))
    .style(button::text)
    .into()
}

fn card<'a>(
    view: &'a CarouselView,
    item: &'a Item,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let handle = item.photo_url().and_then(|url| view.posters.handle(url));

    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(
            text(item.heading.as_deref().unwrap_or_default()).size(14),
        )
        .padding(8)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(container::rounded_box)
        .into(),
    }
}

fn notice<'a>(message: String) -> Element<'a, Message> {
    container(text(message).size(18))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}
