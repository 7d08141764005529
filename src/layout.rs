use crate::config::CardStyle;
use svgio::model::Pos;

pub const GRID: usize = 3;
pub const CARDS_PER_PAGE: usize = GRID * GRID;

/// Grid cell on a page. Column 0 is leftmost, row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

/// Slots fill a column bottom to top before moving right.
pub fn cell_for_slot(slot: usize) -> Cell {
    Cell {
        col: slot / GRID,
        row: slot % GRID,
    }
}

pub fn page_count(cards: usize) -> usize {
    (cards + CARDS_PER_PAGE - 1) / CARDS_PER_PAGE
}

/// Number of cards drawn on the zero-based `page`.
pub fn cards_on_page(cards: usize, page: usize) -> usize {
    cards
        .saturating_sub(page * CARDS_PER_PAGE)
        .min(CARDS_PER_PAGE)
}

/// Placement of one card on its page.
#[derive(Debug, Clone, Copy)]
pub struct CardFrame {
    pub center: Pos,
    pub outer: (f64, f64),
    pub inner: (f64, f64),
    aspect: f64,
}

impl CardFrame {
    pub fn new(style: &CardStyle, cell: Cell) -> Self {
        let (w, h) = style.outer_size();
        let center = Pos::new(
            style.margin.0 + w / 2.0 + (w + style.spacing) * cell.col as f64,
            style.margin.1 + h / 2.0 + (h + style.spacing) * cell.row as f64,
        );
        CardFrame {
            center,
            outer: (w, h),
            inner: style.inner_size(),
            aspect: style.aspect(),
        }
    }

    fn inner_left(&self) -> f64 {
        self.center.x - self.inner.0 / 2.0
    }

    fn inner_bottom(&self) -> f64 {
        self.center.y - self.inner.1 / 2.0
    }

    fn inner_top(&self) -> f64 {
        self.center.y + self.inner.1 / 2.0
    }

    /// Width and height of a circle of page-height fraction `size`.
    pub fn round(&self, size: f64) -> (f64, f64) {
        (size * self.aspect, size)
    }

    pub fn badge_center(&self, style: &CardStyle) -> Pos {
        Pos::new(
            self.inner_left() + style.badge_offset.0,
            self.inner_bottom() + style.badge_offset.1,
        )
    }

    pub fn label_bar(&self, style: &CardStyle) -> (Pos, f64, f64) {
        let width = self.inner.0 * style.label_bar_width;
        let lower_left = Pos::new(
            self.center.x - width / 2.0,
            self.inner_top() - style.label_bar_drop,
        );
        (lower_left, width, style.label_bar_height)
    }

    pub fn label_anchor(&self, style: &CardStyle) -> Pos {
        Pos::new(self.center.x, self.inner_top() - style.label_text_drop)
    }

    /// Places a normalised map position on this card's mini-map.
    pub fn map_station(&self, style: &CardStyle, p: Pos) -> Pos {
        Pos::new(
            self.inner_left() + style.map_offset.0 + p.x * self.inner.0 * style.map_scale.0,
            self.inner_bottom() + style.map_offset.1 + p.y * self.inner.1 * style.map_scale.1,
        )
    }
}
