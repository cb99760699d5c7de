//! Carousel message handling

use std::time::Instant;

use iced::{
    Task,
    widget::{image, operation::scroll_to, scrollable, scrollable::AbsoluteOffset},
};
use jupiter_core::{
    Direction, FrontPageClient, FrontPageSource, RowGeometry, SettleCheck,
    SettleTarget,
};
use jupiter_model::CategoryPayload;

use super::messages::CarouselMessage;
use super::state::CarouselView;
use crate::messages::Message;
use crate::state::State;

/// Scroll distances below this are treated as "already there".
const MIN_SCROLL_DISTANCE: f32 = 0.5;

/// Fetch the front page once and report the result as a message.
pub fn load_front_page<S>(source: S) -> Task<Message>
where
    S: FrontPageSource + 'static,
{
    Task::perform(
        async move {
            source
                .fetch_front_page()
                .await
                .map_err(|err| err.to_string())
        },
        |result| CarouselMessage::FrontPageLoaded(result).into(),
    )
}

/// Start the front page fetch for a mounted carousel. The fetch is aborted
/// if the carousel is unmounted before it completes.
pub fn start_fetch(view: &mut CarouselView, client: FrontPageClient) -> Task<Message> {
    log::info!("Fetching front page from {}", client.url());
    let (task, handle) = load_front_page(client).abortable();
    view.hold_download(handle.abort_on_drop());
    task
}

/// Schedule a settle check; replaces any pending check for the same target.
pub fn schedule_settle(view: &mut CarouselView, check: SettleCheck) -> Task<Message> {
    let (task, handle) = Task::perform(
        async move {
            tokio::time::sleep(check.after).await;
        },
        move |_| CarouselMessage::SettleDue(check.target).into(),
    )
    .abortable();
    view.hold_timer(check.target, handle.abort_on_drop());
    task
}

/// Handle carousel messages
pub fn handle_carousel_message(
    state: &mut State,
    msg: CarouselMessage,
) -> Task<Message> {
    let client = state.client.clone();
    let Some(view) = state.carousel.as_mut() else {
        log::debug!("Dropping {} for unmounted carousel", msg.name());
        return Task::none();
    };

    match msg {
        CarouselMessage::FrontPageLoaded(Ok(payload)) => {
            handle_front_page(view, payload, client)
        }
        CarouselMessage::FrontPageLoaded(Err(err)) => {
            log::warn!("Front page failed to load: {}", err);
            view.carousel.apply_fetch_error(err);
            view.sync_rows();
            Task::none()
        }
        CarouselMessage::PosterLoaded(url, result) => {
            view.posters.complete(url, result);
            Task::none()
        }
        CarouselMessage::ScrollRequested(row, direction) => {
            handle_scroll_request(view, row, direction, Instant::now())
        }
        CarouselMessage::AnimationTick(now) => handle_animation_tick(view, now),
        CarouselMessage::RowViewportChanged(row, viewport) => {
            view.carousel.report_geometry(row, geometry_from_viewport(&viewport));
            Task::none()
        }
        CarouselMessage::SettleDue(target) => {
            view.release_timer(target);
            view.carousel.settle(target);
            Task::none()
        }
    }
}

fn handle_front_page(
    view: &mut CarouselView,
    payload: CategoryPayload,
    client: Option<FrontPageClient>,
) -> Task<Message> {
    let check = view.carousel.apply_payload(payload);
    view.sync_rows();
    log::info!("Front page loaded with {} rows", view.carousel.rows().len());

    let mut tasks = vec![schedule_settle(view, check)];

    if let Some(client) = client {
        let urls = view.posters.queue_rows(view.carousel.rows());
        if !urls.is_empty() {
            log::debug!("Loading {} posters", urls.len());
            let (posters, handle) = Task::batch(
                urls.into_iter()
                    .map(|url| load_poster(client.clone(), url)),
            )
            .abortable();
            view.hold_download(handle.abort_on_drop());
            tasks.push(posters);
        }
    }

    Task::batch(tasks)
}

fn load_poster(client: FrontPageClient, url: String) -> Task<Message> {
    Task::perform(
        async move {
            let result = client
                .fetch_poster(&url)
                .await
                .map(image::Handle::from_bytes)
                .map_err(|err| err.to_string());
            (url, result)
        },
        |(url, result)| CarouselMessage::PosterLoaded(url, result).into(),
    )
}

/// Arrow press: animate towards the target, or fall back to a delayed
/// re-measure when there is nothing to animate.
pub fn handle_scroll_request(
    view: &mut CarouselView,
    row: usize,
    direction: Direction,
    now: Instant,
) -> Task<Message> {
    let Some(command) = view.carousel.scroll(row, direction) else {
        log::debug!("Scroll request for unknown row {}", row);
        return Task::none();
    };

    if command.distance() < MIN_SCROLL_DISTANCE {
        return schedule_settle(view, command.settle);
    }

    log::debug!(
        "Scrolling row {} {:?} from {:.1} to {:.1}",
        row,
        direction,
        command.from,
        command.to
    );

    // completion of the tween is the settle signal
    view.release_timer(command.settle.target);
    if let Some(animator) = view.animator_mut(row) {
        animator.start(command.from, command.to, now);
    }
    Task::none()
}

pub fn handle_animation_tick(view: &mut CarouselView, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();

    for (row, offset, finished) in view.tick_animations(now) {
        if let Some(geometry) = view.carousel.geometry(row) {
            view.carousel.report_geometry(row, geometry.with_offset(offset));
        }
        if let Some(id) = view.scrollable_id(row) {
            tasks.push(scroll_to::<Message>(
                id.clone(),
                AbsoluteOffset { x: offset, y: 0.0 },
            ));
        }
        if finished {
            view.carousel.settle(SettleTarget::Row(row));
            log::debug!("Row {} scroll settled at {:.1}", row, offset);
        }
    }

    Task::batch(tasks)
}

/// Scrollables carry no inner padding; margins live outside the container.
pub fn geometry_from_viewport(viewport: &scrollable::Viewport) -> RowGeometry {
    RowGeometry {
        padding_left: 0.0,
        padding_right: 0.0,
        scroll_offset: viewport.absolute_offset().x,
        visible_width: viewport.bounds().width,
        scroll_width: viewport.content_bounds().width,
    }
}
