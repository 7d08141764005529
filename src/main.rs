mod config;
mod export;
mod file;
mod layout;
mod routes;

use std::path::PathBuf;

use config::Config;
use log::*;

/// Reads the map and route table named in `config` and writes the ticket pages.
fn run(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let stations = file::load_station_map(&config.map_path, config.canvas_height)?;
    let table = file::load_routes(&config.routes_path)?;
    let reconciled = routes::reconcile(&stations, table);
    if !reconciled.missing.is_empty() {
        info!("{} unknown stations referenced by the route table", reconciled.missing.len());
    }
    let written = export::export_tickets(config, &stations, &reconciled.routes)?;
    info!("Wrote {} pages", written.len());
    Ok(written)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(&Config::default())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg
   xmlns="http://www.w3.org/2000/svg"
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   width="10"
   height="10">
  <g
     inkscape:label="Layer 1"
     id="layer1">
    <circle
       id="circle1"
       inkscape:label="station:A"
       cx="0"
       cy="0"
       r="1" />
    <circle
       id="circle2"
       cx="5"
       cy="5"
       r="1" />
    <circle
       id="circle3"
       inkscape:label="station:B"
       cx="10"
       cy="0"
       r="1" />
    <circle
       id="circle4"
       inkscape:label="station:C"
       cx="0"
       cy="10"
       r="1" />
  </g>
</svg>
"#;

    fn setup(routes: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("map.svg"), MAP).unwrap();
        fs::write(dir.path().join("routes.csv"), routes).unwrap();
        let config = Config {
            map_path: dir.path().join("map.svg"),
            routes_path: dir.path().join("routes.csv"),
            output_dir: dir.path().to_path_buf(),
            canvas_height: 10.0,
            ..Config::default()
        };
        (dir, config)
    }

    fn count(svg: &str, needle: &str) -> usize {
        svg.matches(needle).count()
    }

    #[test]
    fn two_routes_make_one_page() {
        let (dir, config) = setup("A,B,5\nB,C,2\n");
        let written = run(&config).expect("run failed");

        assert_eq!(written, vec![dir.path().join("Tickets_1.svg")]);
        assert!(!dir.path().join("Tickets_2.svg").exists());

        let svg = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(count(&svg, "fill=\"#ffe9b7\""), 2);
        assert_eq!(count(&svg, "fill=\"red\""), 4);
        assert_eq!(count(&svg, "fill=\"#d8ecf6\""), 6);
        assert!(svg.contains(">A - B</text>"));
        assert!(svg.contains(">B - C</text>"));
    }

    #[test]
    fn unknown_stations_are_dropped_before_layout() {
        let (dir, config) = setup("A,B,5\nX,C,4\nB,Y,3\nC,A,1\n");
        let written = run(&config).expect("run failed");

        assert_eq!(written.len(), 1);
        let svg = fs::read_to_string(dir.path().join("Tickets_1.svg")).unwrap();
        assert_eq!(count(&svg, "fill=\"#ffe9b7\""), 2);
        assert!(svg.contains(">C - A</text>"));
        assert!(!svg.contains("X - C"));
    }

    #[test]
    fn nineteen_routes_make_three_pages() {
        let rows: String = (0..19).map(|i| format!("A,B,{}\n", i)).collect();
        let (dir, config) = setup(&rows);
        let written = run(&config).expect("run failed");

        assert_eq!(written.len(), 3);
        let cards: Vec<usize> = written
            .iter()
            .map(|p| count(&fs::read_to_string(p).unwrap(), "fill=\"#ffe9b7\""))
            .collect();
        assert_eq!(cards, vec![9, 9, 1]);
        assert!(dir.path().join("Tickets_3.svg").exists());
    }

    #[test]
    fn malformed_map_aborts() {
        let (dir, config) = setup("A,B,5\n");
        fs::write(dir.path().join("map.svg"), MAP.replace("cx=\"10\"", "cx=\"ten\"")).unwrap();
        assert!(run(&config).is_err());
        assert!(!dir.path().join("Tickets_1.svg").exists());
    }
}
