//! File-system side of the run: the SVG station map and the CSV route table
//! come in, and each finished page goes out as a standalone A4-landscape SVG
//! document named `<prefix><n>.svg`.

use crate::config::Config;
use crate::routes::{self, Route};
use anyhow::Context;
use log::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use svgio::model::{Page, StationMap};

pub fn load_station_map(filename: &Path, canvas_height: f64) -> anyhow::Result<StationMap> {
    info!("Reading station map from {:?}", filename);
    let s = std::fs::read_to_string(filename)
        .with_context(|| format!("cannot read station map {:?}", filename))?;
    let stations = svgio::xml::parse_station_map(&s, canvas_height)
        .with_context(|| format!("cannot parse station map {:?}", filename))?;
    info!("Found {} stations", stations.len());
    Ok(stations)
}

pub fn load_routes(filename: &Path) -> anyhow::Result<Vec<Route>> {
    info!("Reading route table from {:?}", filename);
    let f = File::open(filename).with_context(|| format!("cannot open route table {:?}", filename))?;
    let routes = routes::parse_routes(f).with_context(|| format!("cannot parse route table {:?}", filename))?;
    info!("Found {} routes", routes.len());
    Ok(routes)
}

pub fn page_filename(config: &Config, number: usize) -> PathBuf {
    config
        .output_dir
        .join(format!("{}{}.svg", config.output_prefix, number))
}

pub fn save_page(config: &Config, number: usize, page: &Page) -> anyhow::Result<PathBuf> {
    let filename = page_filename(config, number);
    info!("Will save page {} to file name {:?}", number, filename);
    std::fs::write(&filename, svgio::write::write_page(page))
        .with_context(|| format!("cannot write page {:?}", filename))?;
    Ok(filename)
}
