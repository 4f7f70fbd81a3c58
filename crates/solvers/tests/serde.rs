#![cfg(feature = "serde")]

use rootfind_core::from_fn;
use rootfind_solvers::{Config, Method, Solution, Start, Status, method};

#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: Config = serde_json::from_str(r#"{ "tolerance": 1e-8 }"#).expect("valid json");

    assert_eq!(config.max_iters, Config::default().max_iters);
    assert_eq!(config.tolerance.to_bits(), 1e-8_f64.to_bits());
}

#[test]
fn request_fields_deserialize() {
    let method: Method = serde_json::from_str(r#""fixed-point""#).expect("valid json");
    assert_eq!(method, Method::FixedPoint);

    let start: Start = serde_json::from_str(r#"{ "bracket": [0.0, 2.0] }"#).expect("valid json");
    assert_eq!(start, Start::Bracket([0.0, 2.0]));

    let start: Start = serde_json::from_str(r#"{ "guess": 1.0 }"#).expect("valid json");
    assert_eq!(start, Start::Guess(1.0));
}

#[test]
fn solution_serializes_with_status() {
    let f = from_fn(|x: f64| x - 1.0);
    let solution = method::solve(
        Method::Bisection,
        &f,
        &f,
        Start::Bracket([0.0, 2.0]),
        &Config::default(),
    )
    .expect("root");

    let json = serde_json::to_value(solution).expect("serializable");
    assert_eq!(json["status"], "Converged");
    assert_eq!(json["x"], 1.0);
    assert_eq!(json["iters"], 1);

    let back: Solution = serde_json::from_value(json).expect("round trip");
    assert_eq!(back.status, Status::Converged);
}
