//! End-to-end regression tests over JSON request documents.

use std::process::Command;

use serde_json::{Value, json};
use transit_catalogue::document::{process, read_document, write_responses};

const LOOP_AND_LINE: &str = include_str!("fixtures/loop_and_line.json");
const REBOARDING: &str = include_str!("fixtures/reboarding.json");

fn answer(fixture: &str, parallel: bool) -> Value {
    let document = read_document(fixture.as_bytes()).unwrap();
    let responses = process(document, parallel).unwrap();
    serde_json::to_value(&responses).unwrap()
}

fn render(fixture: &str) -> String {
    let document = read_document(fixture.as_bytes()).unwrap();
    let responses = process(document, false).unwrap();
    let mut out = Vec::new();
    write_responses(&mut out, &responses).unwrap();
    String::from_utf8(out).unwrap()
}

fn assert_close(value: &Value, expected: f64, tolerance: f64) {
    let actual = value.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Times must reproduce the reference output bit for bit.
fn assert_exact(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap();
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "expected {expected}, got {actual}"
    );
}

/// Ride time computed the way the router weighs edges.
fn ride_minutes(meters: f64, km_per_hour: f64) -> f64 {
    meters / (km_per_hour * 1000.0 / 60.0)
}

#[test]
fn loop_and_line_statistics() {
    let out = answer(LOOP_AND_LINE, false);
    let out = out.as_array().unwrap();
    assert_eq!(out.len(), 8);

    let bus_297 = &out[0];
    assert_eq!(bus_297["request_id"], 1);
    assert_eq!(bus_297["stop_count"], 4);
    assert_eq!(bus_297["unique_stop_count"], 3);
    assert_eq!(bus_297["route_length"], 5990);
    assert_close(&bus_297["curvature"], 1.42963, 1e-5);

    let bus_635 = &out[1];
    assert_eq!(bus_635["request_id"], 2);
    assert_eq!(bus_635["stop_count"], 5);
    assert_eq!(bus_635["unique_stop_count"], 3);
    assert_eq!(bus_635["route_length"], 11570);
    assert_close(&bus_635["curvature"], 1.30156, 1e-5);

    assert_eq!(out[2], json!({"request_id": 3, "buses": ["297", "635"]}));
}

#[test]
fn loop_and_line_routes() {
    let out = answer(LOOP_AND_LINE, false);

    let direct = &out[3];
    assert_eq!(direct["request_id"], 4);
    assert_exact(&direct["total_time"], 11.235);
    let items = direct["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "Wait");
    assert_eq!(items[0]["stop_name"], "Biryulyovo Zapadnoye");
    assert_exact(&items[0]["time"], 6.0);
    assert_eq!(items[1]["type"], "Bus");
    assert_eq!(items[1]["bus"], "297");
    assert_eq!(items[1]["span_count"], 2);
    assert_exact(&items[1]["time"], ride_minutes(2600.0 + 890.0, 40.0));

    let transfer = &out[4];
    assert_eq!(transfer["request_id"], 5);
    assert_exact(&transfer["total_time"], 24.21);
    assert_eq!(transfer["items"].as_array().unwrap().len(), 4);
}

#[test]
fn loop_and_line_failures() {
    let out = answer(LOOP_AND_LINE, false);

    assert_eq!(out[5], json!({"request_id": 6, "error_message": "not found"}));
    assert_eq!(out[6], json!({"request_id": 7, "error_message": "not found"}));
    assert_eq!(out[7]["request_id"], 8);
    assert!(out[7]["error_message"].is_string());
}

#[test]
fn reboarding_routes() {
    let out = answer(REBOARDING, false);

    let bus = &out[0];
    assert_eq!(bus["stop_count"], 7);
    assert_eq!(bus["unique_stop_count"], 4);
    assert_eq!(bus["route_length"], 24490);

    let there = &out[1];
    assert_exact(&there["total_time"], 29.26);
    let items = there["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["stop_name"], "Zagorie");
    assert_eq!(items[1]["bus"], "289");
    assert_eq!(items[1]["span_count"], 1);
    assert_exact(&items[1]["time"], 0.46);
    assert_eq!(items[2]["stop_name"], "Lipetskaya ulitsa 46");
    assert_eq!(items[3]["span_count"], 1);
    assert_exact(&items[3]["time"], 24.8);

    assert_exact(&out[2]["total_time"], 22.0);

    assert_eq!(out[3], json!({"request_id": 4, "total_time": 0.0, "items": []}));
}

#[test]
fn reprocessing_gives_identical_output() {
    for fixture in [LOOP_AND_LINE, REBOARDING] {
        assert_eq!(render(fixture), render(fixture));
        assert_eq!(answer(fixture, false), answer(fixture, true));
    }
}

#[test]
fn binary_reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    std::fs::write(&path, REBOARDING).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_transit-catalogue"))
        .arg("--input")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let printed = printed.as_array().unwrap();
    let expected = answer(REBOARDING, false);
    assert_eq!(printed.len(), 4);
    for (got, want) in printed.iter().zip(expected.as_array().unwrap()) {
        assert_eq!(got["request_id"], want["request_id"]);
    }
    assert_exact(&printed[1]["total_time"], 29.26);
}

#[test]
fn binary_fails_on_missing_distance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    std::fs::write(
        &path,
        r#"{"routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
            "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0},
            {"type": "Stop", "name": "B", "latitude": 55.1, "longitude": 37.0},
            {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
        ]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_transit-catalogue"))
        .arg("--input")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let log = String::from_utf8_lossy(&output.stderr);
    assert!(log.contains("no distance data"), "{log}");
}

#[test]
fn binary_rejects_missing_routing_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    std::fs::write(
        &path,
        r#"{"base_requests": [], "stat_requests": [{"id": 1, "type": "Map"}]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_transit-catalogue"))
        .arg("--input")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
