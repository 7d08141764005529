use std::collections::BTreeSet;
use std::io;

use itertools::Itertools;
use log::*;
use serde::Deserialize;
use svgio::model::StationMap;

pub const ROUTE_COLUMNS: usize = 3;

/// One destination ticket. The point value is kept as written in the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub value: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route table: {0}")]
    Csv(#[from] csv::Error),
    #[error("route table row {row} has {found} columns, expected {}", ROUTE_COLUMNS)]
    ColumnCount { row: usize, found: usize },
}

/// Reads headerless `start,end,value` rows in file order. Blank lines are
/// not rows and are skipped.
pub fn parse_routes<R: io::Read>(reader: R) -> Result<Vec<Route>, RouteError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut routes = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() != ROUTE_COLUMNS {
            return Err(RouteError::ColumnCount {
                row: idx + 1,
                found: record.len(),
            });
        }
        routes.push(record.deserialize::<Route>(None)?);
    }
    Ok(routes)
}

#[derive(Debug)]
pub struct Reconciled {
    pub routes: Vec<Route>,
    /// Names used by some route but absent from the station map.
    pub missing: BTreeSet<String>,
}

/// Drops every route with an endpoint that is not on the map. Stations
/// that no route uses are fine and not reported.
pub fn reconcile(stations: &StationMap, routes: Vec<Route>) -> Reconciled {
    let missing: BTreeSet<String> = routes
        .iter()
        .flat_map(|r| vec![&r.start, &r.end])
        .filter(|name| !stations.contains(name))
        .cloned()
        .collect();

    if missing.is_empty() {
        return Reconciled { routes, missing };
    }

    warn!(
        "Station list does not match stations in route list; missing stations {{{}}}. \
         Dropping routes that use them.",
        missing.iter().map(|s| format!("{:?}", s)).join(", ")
    );

    let before = routes.len();
    let routes: Vec<Route> = routes
        .into_iter()
        .filter(|r| !missing.contains(&r.start) && !missing.contains(&r.end))
        .collect();
    info!("Kept {} of {} routes", routes.len(), before);

    Reconciled { routes, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgio::model::Pos;

    fn route(start: &str, end: &str, value: &str) -> Route {
        Route {
            start: start.to_string(),
            end: end.to_string(),
            value: value.to_string(),
        }
    }

    fn stations(names: &[&str]) -> StationMap {
        let mut m = StationMap::new();
        for (i, n) in names.iter().enumerate() {
            m.insert(n.to_string(), Pos::new(i as f64, 0.0));
        }
        m
    }

    #[test]
    fn rows_are_read_in_order_without_header() {
        let data = "Durham,Consett,7\nStanley,Bishop Auckland,12\n";
        let routes = parse_routes(data.as_bytes()).expect("route parse failed");
        assert_eq!(
            routes,
            vec![
                route("Durham", "Consett", "7"),
                route("Stanley", "Bishop Auckland", "12"),
            ]
        );
    }

    #[test]
    fn value_is_kept_verbatim() {
        let routes = parse_routes("A,B,07\nB,C,?\n".as_bytes()).expect("route parse failed");
        assert_eq!(routes[0].value, "07");
        assert_eq!(routes[1].value, "?");
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let routes = parse_routes("A,B,3\n\nB,C,4\n\n".as_bytes()).expect("route parse failed");
        assert_eq!(routes, vec![route("A", "B", "3"), route("B", "C", "4")]);
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        match parse_routes("A,B,3\nA,B\n".as_bytes()) {
            Err(RouteError::ColumnCount { row: 2, found: 2 }) => {}
            other => panic!("expected column count error, got {:?}", other),
        }
    }

    #[test]
    fn known_stations_leave_routes_untouched() {
        let routes = vec![route("A", "B", "3"), route("B", "A", "4"), route("A", "A", "1")];
        let rec = reconcile(&stations(&["A", "B", "C"]), routes.clone());
        assert_eq!(rec.routes, routes);
        assert!(rec.missing.is_empty());
    }

    #[test]
    fn routes_with_unknown_endpoint_are_dropped() {
        let routes = vec![route("A", "B", "3"), route("X", "B", "4")];
        let rec = reconcile(&stations(&["A", "B"]), routes);
        assert_eq!(rec.routes, vec![route("A", "B", "3")]);
        assert_eq!(rec.missing.into_iter().collect::<Vec<_>>(), vec!["X".to_string()]);
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let routes = vec![
            route("A", "B", "1"),
            route("B", "Y", "2"),
            route("C", "A", "3"),
            route("X", "Y", "4"),
            route("B", "C", "5"),
        ];
        let rec = reconcile(&stations(&["A", "B", "C"]), routes);
        let values: Vec<&str> = rec.routes.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["1", "3", "5"]);
        assert_eq!(rec.missing.len(), 2);
    }
}
