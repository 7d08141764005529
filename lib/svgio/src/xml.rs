use crate::model::*;
use log::*;
use roxmltree as xml;

/// Attribute value prefix marking a circle as a named station.
pub const STATION_MARKER: &str = "station:";

pub type ByteOffset = usize;

#[derive(Debug, thiserror::Error)]
pub enum DocErr {
    #[error("malformed map source: {0}")]
    Xml(#[from] xml::Error),
    #[error("station circle at byte {1} has no `{0}` attribute")]
    AttributeMissing(&'static str, ByteOffset),
    #[error("station circle at byte {1} has a non-numeric `{0}` attribute")]
    NumberError(&'static str, ByteOffset),
    #[error("map source contains no station circles")]
    NoStations,
    #[error("station coordinates cannot be normalised by extent {0}")]
    DegenerateExtent(f64),
}

/// Reads every station circle from an SVG map. The vertical axis is flipped
/// against `canvas_height` and all positions are divided by the largest
/// resulting coordinate, so the station set fits the unit square.
pub fn parse_station_map(data: &str, canvas_height: f64) -> Result<StationMap, DocErr> {
    let doc = xml::Document::parse(data)?;
    let mut stations = StationMap::new();

    for circle in doc.descendants().filter(|n| n.has_tag_name("circle")) {
        let name = match station_name(&circle) {
            Some(name) => name,
            None => continue,
        };
        let x = parse_coord(&circle, "cx")?;
        let y = parse_coord(&circle, "cy")?;
        debug!("Station {:?} at ({}, {})", name, x, y);
        stations.insert(name, Pos::new(x, canvas_height - y));
    }

    normalize(&mut stations)?;
    Ok(stations)
}

fn station_name(circle: &xml::Node) -> Option<String> {
    circle
        .attributes()
        .iter()
        .find_map(|a| {
            let value = a.value();
            value
                .find(STATION_MARKER)
                .map(|i| &value[i + STATION_MARKER.len()..])
        })
        .map(|raw| raw.replace('_', " "))
}

fn parse_coord(circle: &xml::Node, attr: &'static str) -> Result<f64, DocErr> {
    circle
        .attribute(attr)
        .ok_or(DocErr::AttributeMissing(attr, circle.range().start))?
        .trim()
        .parse::<f64>()
        .map_err(|_e| DocErr::NumberError(attr, circle.range().start))
}

fn normalize(stations: &mut StationMap) -> Result<(), DocErr> {
    let extent = stations.extent().ok_or(DocErr::NoStations)?;
    if !(extent > 0.0) {
        return Err(DocErr::DegenerateExtent(extent));
    }
    stations.scale_down(extent);
    Ok(())
}
