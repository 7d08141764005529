use std::path::PathBuf;
use svgio::model::Style;

/// A4 landscape.
pub const PAGE_MM: (f64, f64) = (297.0, 210.0);
/// Standard playing card, long side horizontal.
pub const CARD_MM: (f64, f64) = (88.0, 57.0);
/// Declared height of the county map drawing, used to flip its y axis.
pub const MAP_CANVAS_HEIGHT: f64 = 804.33073;

#[derive(Debug, Clone)]
pub struct Config {
    pub map_path: PathBuf,
    pub routes_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_prefix: String,
    pub canvas_height: f64,
    pub card: CardStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            map_path: PathBuf::from("TicketToRideCountyDurham.svg"),
            routes_path: PathBuf::from("RouteList.csv"),
            output_dir: PathBuf::from("."),
            output_prefix: "Tickets_".to_string(),
            canvas_height: MAP_CANVAS_HEIGHT,
            card: CardStyle::default(),
        }
    }
}

/// Card geometry and colours. Lengths are normalised page units unless
/// noted; font sizes and stroke widths are in points.
#[derive(Debug, Clone)]
pub struct CardStyle {
    pub page_mm: (f64, f64),
    pub card_mm: (f64, f64),
    pub inner_scale: f64,
    pub spacing: f64,
    pub margin: (f64, f64),
    pub font_family: String,

    pub outline: Style,
    pub background: Style,

    pub badge: Style,
    pub badge_size: f64,
    pub badge_offset: (f64, f64),
    pub value_nudge: (f64, f64),
    pub value_font_pt: f64,

    pub label_bar: Style,
    pub label_bar_width: f64,
    pub label_bar_height: f64,
    pub label_bar_drop: f64,
    pub label_text_drop: f64,
    pub label_font_pt: f64,

    pub map_offset: (f64, f64),
    pub map_scale: (f64, f64),
    pub station: Style,
    pub station_size: f64,
    pub highlight: Style,
    pub highlight_size: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        CardStyle {
            page_mm: PAGE_MM,
            card_mm: CARD_MM,
            inner_scale: 0.9,
            spacing: 0.02,
            margin: (0.05, 0.07),
            font_family: "fantasy".to_string(),

            outline: Style::new("white", "black", 1.0),
            background: Style::new("#ffe9b7", "#b57d00", 1.0),

            badge: Style::new("#dbffeb", "#009141", 3.0),
            badge_size: 0.07,
            badge_offset: (0.03, 0.04),
            value_nudge: (0.001, -0.001),
            value_font_pt: 24.0,

            label_bar: Style::new("white", "black", 1.0),
            label_bar_width: 0.94,
            label_bar_height: 0.03,
            label_bar_drop: 0.04,
            label_text_drop: 0.03,
            label_font_pt: 10.0,

            map_offset: (0.015, 0.033),
            map_scale: (0.86, 0.9),
            station: Style::new("#d8ecf6", "#1f6587", 2.0),
            station_size: 0.007,
            highlight: Style::new("red", "black", 2.0),
            highlight_size: 0.015,
        }
    }
}

impl CardStyle {
    /// Page height over page width; keeps round shapes round on the page.
    pub fn aspect(&self) -> f64 {
        self.page_mm.1 / self.page_mm.0
    }

    pub fn outer_size(&self) -> (f64, f64) {
        (
            self.card_mm.0 / self.page_mm.0,
            self.card_mm.1 / self.page_mm.1,
        )
    }

    pub fn inner_size(&self) -> (f64, f64) {
        let (w, h) = self.outer_size();
        (w * self.inner_scale, h * self.inner_scale)
    }
}
