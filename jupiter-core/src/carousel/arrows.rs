//! Arrow visibility calculator

/// Scroll direction of a row's arrow control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Measured scroll geometry of one row container.
///
/// `scroll_width` is the raw content width including padding, as reported by
/// the scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowGeometry {
    pub padding_left: f32,
    pub padding_right: f32,
    pub scroll_offset: f32,
    pub visible_width: f32,
    pub scroll_width: f32,
}

impl RowGeometry {
    /// Content width with padding excluded.
    pub fn scrollable_width(&self) -> f32 {
        self.scroll_width - self.padding_left - self.padding_right
    }

    /// Largest offset the container accepts.
    pub fn max_offset(&self) -> f32 {
        (self.scroll_width - self.visible_width).max(0.0)
    }

    pub fn with_offset(self, scroll_offset: f32) -> Self {
        Self {
            scroll_offset,
            ..self
        }
    }
}

/// Whether the left and right controls of a row should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub left: bool,
    pub right: bool,
}

impl Default for ArrowVisibility {
    /// State of a row that has not been measured yet.
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

impl ArrowVisibility {
    pub const HIDDEN: Self = Self {
        left: false,
        right: false,
    };

    /// Derive visibility from measured geometry. `tolerance` absorbs sub-pixel
    /// rounding at both edges.
    pub fn from_geometry(geometry: &RowGeometry, tolerance: f32) -> Self {
        let scrollable = geometry.scrollable_width();
        let offset = geometry.scroll_offset;
        let visible = geometry.visible_width;

        let fits_entirely = scrollable <= visible + tolerance;
        if fits_entirely {
            return Self::HIDDEN;
        }

        let at_start = offset <= tolerance;
        let at_end = offset + visible >= scrollable - tolerance;
        Self {
            left: !at_start,
            right: !at_end,
        }
    }

    pub fn is_visible(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}
