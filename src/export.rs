use std::path::PathBuf;

use log::*;
use svgio::model::{Baseline, Page, StationMap};

use crate::config::{CardStyle, Config};
use crate::file;
use crate::layout::{self, CardFrame, Cell, CARDS_PER_PAGE};
use crate::routes::Route;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("route endpoint {0:?} is not on the station map")]
    UnknownStation(String),
}

fn page_title(number: usize) -> String {
    format!("Tickets page {}", number)
}

/// Draws one ticket into `cell`. Shapes are added bottom layer first.
pub fn draw_card(
    page: &mut Page,
    style: &CardStyle,
    stations: &StationMap,
    route: &Route,
    cell: Cell,
) -> Result<(), RenderError> {
    let lookup = |name: &str| {
        stations
            .get(name)
            .ok_or_else(|| RenderError::UnknownStation(name.to_string()))
    };
    let endpoints = [lookup(&route.start)?, lookup(&route.end)?];

    let frame = CardFrame::new(style, cell);

    page.centered_rect(frame.center, frame.outer.0, frame.outer.1, &style.outline);
    page.centered_rect(frame.center, frame.inner.0, frame.inner.1, &style.background);

    let badge = frame.badge_center(style);
    let (bw, bh) = frame.round(style.badge_size);
    page.ellipse(badge, bw, bh, &style.badge);
    let mut value_at = badge;
    value_at.x += style.value_nudge.0;
    value_at.y += style.value_nudge.1;
    page.text(value_at, &route.value, style.value_font_pt, Baseline::Central);

    let (bar, width, height) = frame.label_bar(style);
    page.rect(bar, width, height, &style.label_bar);
    page.text(
        frame.label_anchor(style),
        &format!("{} - {}", route.start, route.end),
        style.label_font_pt,
        Baseline::Alphabetic,
    );

    let (sw, sh) = frame.round(style.station_size);
    for (_, pos) in stations.iter() {
        page.ellipse(frame.map_station(style, pos), sw, sh, &style.station);
    }

    let (hw, hh) = frame.round(style.highlight_size);
    for pos in endpoints.iter() {
        page.ellipse(frame.map_station(style, *pos), hw, hh, &style.highlight);
    }

    Ok(())
}

/// Lays out the cards of the zero-based `page_idx` on a fresh page.
pub fn draw_page(
    style: &CardStyle,
    stations: &StationMap,
    routes: &[Route],
    page_idx: usize,
) -> Result<Page, RenderError> {
    let mut page = Page::new(page_title(page_idx + 1), style.page_mm, &style.font_family);
    debug!(
        "Page {} holds {} cards",
        page_idx + 1,
        layout::cards_on_page(routes.len(), page_idx)
    );

    for slot in 0..CARDS_PER_PAGE {
        let idx = page_idx * CARDS_PER_PAGE + slot;
        let route = match routes.get(idx) {
            Some(route) => route,
            None => continue,
        };
        println!("Card {}/{}", idx + 1, routes.len());
        draw_card(&mut page, style, stations, route, layout::cell_for_slot(slot))?;
    }

    Ok(page)
}

/// Renders every route, nine to a page, writing each page before starting
/// the next. Returns the written file names in page order.
pub fn export_tickets(
    config: &Config,
    stations: &StationMap,
    routes: &[Route],
) -> anyhow::Result<Vec<PathBuf>> {
    let pages = layout::page_count(routes.len());
    info!("Exporting {} cards on {} pages", routes.len(), pages);

    let mut written = Vec::new();
    for page_idx in 0..pages {
        let page = draw_page(&config.card, stations, routes, page_idx)?;
        written.push(file::save_page(config, page_idx + 1, &page)?);
    }
    Ok(written)
}
