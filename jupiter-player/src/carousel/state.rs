//! CarouselView: the mounted carousel widget and the resources it holds

use std::collections::HashMap;

use iced::task;
use iced::widget::Id as ScrollableId;
use jupiter_core::{CarouselSettings, MediaRowCarousel, SettleTarget};

use super::animator::ScrollAnimator;
use super::posters::PosterCache;

/// Everything that lives exactly as long as the carousel is mounted.
///
/// Pending settle timers, the front page fetch and poster downloads are held
/// as abort-on-drop handles, so dropping the view cancels all of them.
pub struct CarouselView {
    pub carousel: MediaRowCarousel,
    pub posters: PosterCache,
    scrollable_ids: Vec<ScrollableId>,
    animators: Vec<ScrollAnimator>,
    timers: HashMap<SettleTarget, task::Handle>,
    downloads: Vec<task::Handle>,
}

impl std::fmt::Debug for CarouselView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselView")
            .field("carousel", &self.carousel)
            .field("rows", &self.scrollable_ids.len())
            .field("posters", &self.posters.len())
            .field("pending_timers", &self.timers.len())
            .field("downloads", &self.downloads.len())
            .finish()
    }
}

impl CarouselView {
    pub fn new(settings: CarouselSettings, viewport_width: f32) -> Self {
        Self {
            carousel: MediaRowCarousel::new(settings, viewport_width),
            posters: PosterCache::default(),
            scrollable_ids: Vec::new(),
            animators: Vec::new(),
            timers: HashMap::new(),
            downloads: Vec::new(),
        }
    }

    /// Give every current row a fresh scroll container id and an idle
    /// animator. Called whenever the set of rows is replaced.
    pub fn sync_rows(&mut self) {
        let count = self.carousel.rows().len();
        self.scrollable_ids = (0..count).map(|_| ScrollableId::unique()).collect();
        self.animators = vec![ScrollAnimator::new(); count];
        self.timers
            .retain(|target, _| matches!(target, SettleTarget::AllRows));
    }

    pub fn scrollable_id(&self, row: usize) -> Option<&ScrollableId> {
        self.scrollable_ids.get(row)
    }

    pub fn animator_mut(&mut self, row: usize) -> Option<&mut ScrollAnimator> {
        self.animators.get_mut(row)
    }

    pub fn is_animating(&self) -> bool {
        self.animators.iter().any(ScrollAnimator::is_active)
    }

    pub fn is_row_animating(&self, row: usize) -> bool {
        self.animators
            .get(row)
            .is_some_and(ScrollAnimator::is_active)
    }

    /// Advance every running animation; yields `(row, offset, finished)`.
    pub fn tick_animations(
        &mut self,
        now: std::time::Instant,
    ) -> Vec<(usize, f32, bool)> {
        self.animators
            .iter_mut()
            .enumerate()
            .filter_map(|(row, animator)| {
                animator
                    .tick(now)
                    .map(|offset| (row, offset, !animator.is_active()))
            })
            .collect()
    }

    /// Hold a settle timer. A timer already pending for the same target is
    /// replaced, which aborts it.
    pub fn hold_timer(&mut self, target: SettleTarget, handle: task::Handle) {
        self.timers.insert(target, handle);
    }

    /// Forget the timer for `target` once it fired.
    pub fn release_timer(&mut self, target: SettleTarget) {
        self.timers.remove(&target);
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn has_timer(&self, target: SettleTarget) -> bool {
        self.timers.contains_key(&target)
    }

    /// Hold a fetch or poster download so it is cancelled on unmount.
    pub fn hold_download(&mut self, handle: task::Handle) {
        self.downloads.push(handle);
    }
}
