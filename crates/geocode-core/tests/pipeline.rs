use geocode_core::{run, Candidate, EnrichConfig, GeoError, OutputStyle, Result, SearchQuery};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

fn config_in(dir: &Path, input: &str) -> EnrichConfig {
    let input_path = dir.join("nations.json");
    fs::write(&input_path, input).unwrap();
    EnrichConfig {
        input: input_path,
        output: dir.join("nations_geo.json"),
        ..EnrichConfig::default()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Primary misses, fallback answers.
fn wakanda_geocoder(q: &SearchQuery) -> Result<Vec<Candidate>> {
    Ok(match q {
        SearchQuery::FreeText(name) if name == "Wakanda" => vec![Candidate::new("1.5", "2.5")],
        _ => vec![],
    })
}

#[test]
fn fallback_result_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), r#"[{"name": "Wakanda"}]"#);
    let mut diag = Vec::<u8>::new();

    let summary = run(&cfg, &wakanda_geocoder, &mut diag).unwrap();

    assert_eq!(summary.fallback, 1);
    assert!(diag.is_empty());
    assert_eq!(
        read_json(&cfg.output),
        json!([{"name": "Wakanda", "lat": 1.5, "lon": 2.5}])
    );
}

#[test]
fn unresolved_country_is_reported_and_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), r#"[{"name": "Atlantis"}]"#);
    let mut diag = Vec::<u8>::new();

    let summary = run(&cfg, &wakanda_geocoder, &mut diag).unwrap();

    assert_eq!(summary.unresolved, vec!["Atlantis".to_string()]);
    assert_eq!(String::from_utf8(diag).unwrap(), "Atlantis\n");
    assert_eq!(read_json(&cfg.output), json!([{"name": "Atlantis"}]));
}

#[test]
fn output_preserves_length_order_names_and_extra_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = json!([
        {"name": "Sri Lanka", "region": "South Asia", "population": [[1800, 4]]},
        {"name": "Atlantis"},
        {"name": "Wakanda", "region": "Africa"},
    ]);
    let cfg = config_in(dir.path(), &input.to_string());
    let geocoder = |q: &SearchQuery| -> Result<Vec<Candidate>> {
        match q {
            SearchQuery::Country(name) if name == "Sri Lanka" => {
                Ok(vec![Candidate::new("7.5554942", "80.7137847")])
            }
            other => wakanda_geocoder(other),
        }
    };

    run(&cfg, &geocoder, &mut std::io::sink()).unwrap();

    let output = read_json(&cfg.output);
    let rows = output.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Sri Lanka", "Atlantis", "Wakanda"]);
    assert_eq!(rows[0]["region"], "South Asia");
    assert_eq!(rows[0]["population"], json!([[1800, 4]]));
    assert_eq!(rows[0]["lat"], 7.5554942);
    assert!(rows[1].get("lat").is_none());
    assert_eq!(rows[2]["lon"], 2.5);
}

#[test]
fn existing_lat_lon_pass_through_or_get_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(
        dir.path(),
        r#"[{"name":"Atlantis","lat":null,"lon":null},
            {"name":"Atlantis","lat":"12.5","lon":"3"},
            {"lat":1,"name":"Atlantis","lon":2},
            {"name":"Wakanda","lat":"old","lon":7,"region":"Africa"}]"#,
    );
    let mut diag = Vec::<u8>::new();

    let summary = run(&cfg, &wakanda_geocoder, &mut diag).unwrap();

    assert_eq!(summary.unresolved.len(), 3);
    assert_eq!(String::from_utf8(diag).unwrap(), "Atlantis\nAtlantis\nAtlantis\n");
    assert_eq!(
        read_json(&cfg.output),
        json!([
            {"name": "Atlantis", "lat": null, "lon": null},
            {"name": "Atlantis", "lat": "12.5", "lon": "3"},
            {"name": "Atlantis", "lat": 1, "lon": 2},
            {"name": "Wakanda", "lat": 1.5, "lon": 2.5, "region": "Africa"}
        ])
    );

    let text = fs::read_to_string(&cfg.output).unwrap();
    assert!(text.contains(r#"{"name":"Atlantis","lat":1,"lon":2}"#), "{text}");
    assert!(text.contains(r#"{"name":"Wakanda","lat":1.5,"lon":2.5,"region":"Africa"}"#), "{text}");
}

#[test]
fn failure_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), r#"[{"name": "Peru"}, {"name": "Chad"}]"#);
    let geocoder = |q: &SearchQuery| -> Result<Vec<Candidate>> {
        if q.name() == "Chad" {
            Err(GeoError::Status { status: 500, url: "stub".into() })
        } else {
            Ok(vec![Candidate::new("-9.19", "-75.01")])
        }
    };

    let err = run(&cfg, &geocoder, &mut std::io::sink()).unwrap_err();

    assert_eq!(err.country(), Some("Chad"));
    assert!(!cfg.output.exists());
}

#[test]
fn malformed_input_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), r#"{"name": "not an array"}"#);
    let geocoder = |_: &SearchQuery| -> Result<Vec<Candidate>> {
        panic!("no request expected")
    };

    let err = run(&cfg, &geocoder, &mut std::io::sink()).unwrap_err();

    assert!(matches!(err, GeoError::Json(_)));
    assert!(!cfg.output.exists());
}

#[test]
fn pretty_style_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), r#"[{"name": "Atlantis"}]"#);
    cfg.style = OutputStyle::Pretty;

    run(&cfg, &wakanda_geocoder, &mut std::io::sink()).unwrap();

    let text = fs::read_to_string(&cfg.output).unwrap();
    assert_eq!(text, "[\n  {\n    \"name\": \"Atlantis\"\n  }\n]");
}
