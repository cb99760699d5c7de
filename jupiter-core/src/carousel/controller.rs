//! MediaRowCarousel: per-row state of the front page carousel

use std::time::Duration;

use jupiter_model::{CategoryPayload, Row};
use tracing::{debug, warn};

use super::arrows::{ArrowVisibility, Direction, RowGeometry};
use super::layout::{LayoutVars, ResponsiveLayout};
use super::rows::filter_rows;
use super::settings::CarouselSettings;

/// Progress of the single front page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    /// The fetch failed; the message is shown instead of the rows.
    Failed(String),
}

/// Which rows a delayed re-measure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettleTarget {
    AllRows,
    Row(usize),
}

/// Request to re-measure rows once layout or motion has settled.
///
/// The caller schedules it and later calls [`MediaRowCarousel::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleCheck {
    pub target: SettleTarget,
    pub after: Duration,
}

/// A row scroll the renderer should perform with smooth motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub row: usize,
    pub from: f32,
    /// Target offset, clamped to the container's scroll range.
    pub to: f32,
    pub settle: SettleCheck,
}

impl ScrollCommand {
    pub fn distance(&self) -> f32 {
        (self.to - self.from).abs()
    }
}

#[derive(Debug, Clone, Default)]
struct RowSlot {
    arrows: ArrowVisibility,
    /// Last geometry reported by the row's scroll container.
    measured: Option<RowGeometry>,
    /// Set once the renderer has attached the row's container.
    mounted: bool,
}

/// Toolkit independent controller for the carousel widget.
///
/// Owns the filtered rows, the responsive layout and per-row arrow state.
/// Every method is a reaction to one environment event; methods that need a
/// delayed follow-up return a [`SettleCheck`] instead of sleeping.
#[derive(Debug, Clone)]
pub struct MediaRowCarousel {
    settings: CarouselSettings,
    layout: ResponsiveLayout,
    rows: Vec<Row>,
    slots: Vec<RowSlot>,
    load_state: LoadState,
}

impl MediaRowCarousel {
    pub fn new(settings: CarouselSettings, viewport_width: f32) -> Self {
        let layout = ResponsiveLayout::compute(viewport_width, &settings);
        Self {
            settings,
            layout,
            rows: Vec::new(),
            slots: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn layout(&self) -> &ResponsiveLayout {
        &self.layout
    }

    pub fn layout_vars(&self) -> LayoutVars {
        self.layout.vars(&self.settings)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Replace the rows with the qualifying rows of a freshly fetched payload.
    ///
    /// Every row starts unmeasured. The returned check fires once the renderer
    /// has attached the new containers.
    pub fn apply_payload(&mut self, payload: CategoryPayload) -> SettleCheck {
        let total = payload.front_page().len();
        self.rows = filter_rows(payload.into_front_page());
        self.slots = vec![RowSlot::default(); self.rows.len()];
        self.load_state = LoadState::Loaded;

        debug!(total, kept = self.rows.len(), "Front page rows filtered");

        SettleCheck {
            target: SettleTarget::AllRows,
            after: Duration::ZERO,
        }
    }

    /// Record a failed fetch. Rows stay empty and the failure is surfaced.
    pub fn apply_fetch_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "Front page fetch failed");
        self.rows.clear();
        self.slots.clear();
        self.load_state = LoadState::Failed(message);
    }

    /// Viewport width changed: recompute the layout and ask for a re-measure
    /// of every row once the new layout settled.
    pub fn resize(&mut self, viewport_width: f32) -> SettleCheck {
        self.layout = ResponsiveLayout::compute(viewport_width, &self.settings);
        self.rebase_measurements();

        debug!(
            viewport_width,
            cards_per_slide = self.layout.cards_per_slide,
            scroll_amount = self.layout.scroll_amount,
            "Carousel layout recomputed"
        );

        SettleCheck {
            target: SettleTarget::AllRows,
            after: self.settings.resize_settle,
        }
    }

    /// A row container reported its scroll geometry (first layout or scroll).
    ///
    /// Returns the recomputed visibility, or `None` for unknown rows.
    pub fn report_geometry(
        &mut self,
        row: usize,
        geometry: RowGeometry,
    ) -> Option<ArrowVisibility> {
        let slot = self.slots.get_mut(row)?;
        slot.mounted = true;
        slot.measured = Some(geometry);
        self.recheck_row(row)
    }

    /// Mark every current row container as attached.
    pub fn mount_all(&mut self) {
        for slot in &mut self.slots {
            slot.mounted = true;
        }
    }

    /// Handle a due [`SettleCheck`].
    pub fn settle(&mut self, target: SettleTarget) {
        match target {
            SettleTarget::AllRows => {
                self.mount_all();
                let updated = self.recheck_all();
                debug!(updated, "Arrow visibility re-measured for all rows");
            }
            SettleTarget::Row(row) => {
                self.recheck_row(row);
            }
        }
    }

    /// Recompute one row from its best known geometry. Rows whose container
    /// is not attached yet keep their current state.
    pub fn recheck_row(&mut self, row: usize) -> Option<ArrowVisibility> {
        let geometry = self.geometry(row)?;
        let arrows = ArrowVisibility::from_geometry(
            &geometry,
            self.settings.edge_tolerance,
        );
        let slot = self.slots.get_mut(row)?;
        slot.arrows = arrows;
        Some(arrows)
    }

    /// Recompute every attached row; returns how many were updated.
    pub fn recheck_all(&mut self) -> usize {
        (0..self.slots.len())
            .filter_map(|row| self.recheck_row(row))
            .count()
    }

    /// Geometry used for `row`: the last measurement, or the layout's
    /// prediction for an attached but not yet measured container.
    pub fn geometry(&self, row: usize) -> Option<RowGeometry> {
        let slot = self.slots.get(row)?;
        if !slot.mounted {
            return None;
        }
        match slot.measured {
            Some(measured) => Some(measured),
            None => {
                let items = self.rows.get(row)?.data.len();
                Some(self.layout.strip_geometry(items))
            }
        }
    }

    /// Compute the scroll command for an arrow press.
    ///
    /// `None` for unknown or unattached rows, mirroring a missing container.
    pub fn scroll(&self, row: usize, direction: Direction) -> Option<ScrollCommand> {
        let geometry = self.geometry(row)?;
        let from = geometry.scroll_offset;
        let to = (from + direction.sign() * self.layout.scroll_amount)
            .clamp(0.0, geometry.max_offset());

        Some(ScrollCommand {
            row,
            from,
            to,
            settle: SettleCheck {
                target: SettleTarget::Row(row),
                after: self.settings.scroll_settle,
            },
        })
    }

    pub fn arrows(&self, row: usize) -> Option<ArrowVisibility> {
        self.slots.get(row).map(|slot| slot.arrows)
    }

    /// Whether the control for `direction` renders; `false` for unknown rows.
    pub fn arrow_visible(&self, row: usize, direction: Direction) -> bool {
        self.arrows(row)
            .is_some_and(|arrows| arrows.is_visible(direction))
    }

    /// Measurements taken under the previous layout keep their offset,
    /// clamped to the new range, but take the widths the new layout produces.
    /// Any later report from the container replaces them as is.
    fn rebase_measurements(&mut self) {
        for (slot, row) in self.slots.iter_mut().zip(&self.rows) {
            if let Some(measured) = slot.measured {
                let predicted = self.layout.strip_geometry(row.data.len());
                slot.measured = Some(predicted.with_offset(
                    measured.scroll_offset.clamp(0.0, predicted.max_offset()),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jupiter_model::{Item, Photo};

    fn row(header: &str, flag: bool, items: usize) -> Row {
        Row {
            header: Some(header.to_string()),
            high_timeline: flag,
            data: vec![
                Item {
                    heading: None,
                    vertical_photos: vec![Photo::new("https://img.example/p.jpg")],
                };
                items
            ],
        }
    }

    fn carousel_with(width: f32, rows: Vec<Row>) -> MediaRowCarousel {
        let mut carousel =
            MediaRowCarousel::new(CarouselSettings::default(), width);
        carousel.apply_payload(CategoryPayload::from_rows(rows));
        carousel
    }

    #[test]
    fn payload_is_filtered_and_rows_start_unmeasured() {
        let mut carousel = carousel_with(
            1920.0,
            vec![row("one", true, 10), row("two", false, 10), row("three", true, 3)],
        );

        assert_eq!(carousel.load_state(), &LoadState::Loaded);
        let titles: Vec<_> = carousel.rows().iter().map(Row::title).collect();
        assert_eq!(titles, vec!["one", "three"]);
        assert_eq!(carousel.arrows(0), Some(ArrowVisibility::default()));
        assert_eq!(carousel.geometry(0), None);
        assert!(carousel.scroll(0, Direction::Right).is_none());
        assert_eq!(carousel.recheck_all(), 0);

        carousel.settle(SettleTarget::AllRows);
        assert_eq!(
            carousel.arrows(0),
            Some(ArrowVisibility {
                left: false,
                right: true
            })
        );
        // three cards fit on a seven card slide
        assert_eq!(carousel.arrows(1), Some(ArrowVisibility::HIDDEN));
    }

    #[test]
    fn fetch_error_clears_rows_and_surfaces_message() {
        let mut carousel = carousel_with(1280.0, vec![row("one", true, 2)]);
        carousel.apply_fetch_error("connection refused");
        assert!(carousel.rows().is_empty());
        assert_eq!(
            carousel.load_state(),
            &LoadState::Failed("connection refused".into())
        );
        assert!(!carousel.arrow_visible(0, Direction::Right));
    }

    #[test]
    fn scroll_moves_by_scroll_amount_and_clamps() {
        let mut carousel = carousel_with(1280.0, vec![row("one", true, 20)]);
        carousel.settle(SettleTarget::AllRows);
        let amount = carousel.layout().scroll_amount;
        let max = carousel.geometry(0).unwrap().max_offset();

        let right = carousel.scroll(0, Direction::Right).unwrap();
        assert_eq!(right.from, 0.0);
        assert!((right.to - amount).abs() < 1e-3);
        assert_eq!(right.settle.target, SettleTarget::Row(0));
        assert_eq!(right.settle.after, Duration::from_millis(400));

        let left = carousel.scroll(0, Direction::Left).unwrap();
        assert_eq!(left.to, 0.0);
        assert_eq!(left.distance(), 0.0);

        let near_end = carousel.geometry(0).unwrap().with_offset(max - 10.0);
        carousel.report_geometry(0, near_end);
        let right = carousel.scroll(0, Direction::Right).unwrap();
        assert!((right.to - max).abs() < 1e-3);
    }

    #[test]
    fn reported_geometry_drives_visibility() {
        let mut carousel = carousel_with(1280.0, vec![row("one", true, 20)]);
        let predicted = carousel.layout().strip_geometry(20);

        let middle = carousel
            .report_geometry(0, predicted.with_offset(300.0))
            .unwrap();
        assert_eq!(
            middle,
            ArrowVisibility {
                left: true,
                right: true
            }
        );

        let end = carousel
            .report_geometry(0, predicted.with_offset(predicted.max_offset()))
            .unwrap();
        assert_eq!(
            end,
            ArrowVisibility {
                left: true,
                right: false
            }
        );
        assert!(carousel.arrow_visible(0, Direction::Left));
        assert!(!carousel.arrow_visible(0, Direction::Right));
        assert!(carousel.report_geometry(5, predicted).is_none());
    }

    #[test]
    fn resize_requests_delayed_recheck_with_new_layout() {
        let mut carousel = carousel_with(1920.0, vec![row("one", true, 7)]);
        carousel.settle(SettleTarget::AllRows);
        assert_eq!(carousel.arrows(0), Some(ArrowVisibility::HIDDEN));

        let check = carousel.resize(800.0);
        assert_eq!(check.target, SettleTarget::AllRows);
        assert_eq!(check.after, Duration::from_millis(100));
        assert_eq!(carousel.layout().cards_per_slide, 3);
        // nothing changes until the settle check runs
        assert_eq!(carousel.arrows(0), Some(ArrowVisibility::HIDDEN));

        carousel.settle(check.target);
        assert_eq!(
            carousel.arrows(0),
            Some(ArrowVisibility {
                left: false,
                right: true
            })
        );
    }

    #[test]
    fn stale_measurement_keeps_offset_within_new_range() {
        let mut carousel = carousel_with(800.0, vec![row("one", true, 10)]);
        let before = carousel.layout().strip_geometry(10);
        carousel.report_geometry(0, before.with_offset(before.max_offset()));

        carousel.resize(1920.0);
        let after = carousel.geometry(0).unwrap();
        assert_eq!(after.visible_width, carousel.layout().available_width);
        assert!(after.scroll_offset <= after.max_offset());
    }

    #[test]
    fn fresh_report_wins_over_predicted_strip() {
        let mut carousel = carousel_with(1280.0, vec![row("one", true, 20)]);
        let reported = RowGeometry {
            padding_left: 0.0,
            padding_right: 0.0,
            scroll_offset: 2000.0,
            visible_width: 1000.0,
            scroll_width: 3000.0,
        };

        let arrows = carousel.report_geometry(0, reported).unwrap();
        assert_eq!(arrows, ArrowVisibility::from_geometry(&reported, 2.0));
        assert_eq!(
            arrows,
            ArrowVisibility {
                left: true,
                right: false
            }
        );
        assert_eq!(carousel.geometry(0), Some(reported));

        carousel.settle(SettleTarget::Row(0));
        assert!(!carousel.arrow_visible(0, Direction::Right));
        let right = carousel.scroll(0, Direction::Right).unwrap();
        assert_eq!(right.distance(), 0.0);
    }

    #[test]
    fn arrow_visible_is_false_for_unknown_rows() {
        let carousel = carousel_with(1280.0, Vec::new());
        assert!(!carousel.arrow_visible(0, Direction::Left));
        assert!(!carousel.arrow_visible(3, Direction::Right));
    }
}
