//! Runs the classic root-finding scenarios through the method selector.
//!
//! ```text
//! cargo run -p rootfind-solvers --example roots
//! ```

use rootfind_core::from_fn;
use rootfind_solvers::{Config, Method, Start, method};

fn main() {
    let square = from_fn(|x: f64| x * x - 2.0);
    let square_prime = from_fn(|x: f64| 2.0 * x);
    let cos = from_fn(f64::cos);
    let cube = from_fn(|x: f64| x.powi(3));
    let cube_prime = from_fn(|x: f64| 3.0 * x * x);

    let config = Config::default();

    let runs = [
        (
            "x^2 - 2 on [0, 2]",
            method::solve(
                Method::Bisection,
                &square,
                &square_prime,
                Start::Bracket([0.0, 2.0]),
                &config,
            ),
        ),
        (
            "x^2 - 2 on [3, 5]",
            method::solve(
                Method::Bisection,
                &square,
                &square_prime,
                Start::Bracket([3.0, 5.0]),
                &config,
            ),
        ),
        (
            "cos(x) from 1",
            method::solve(Method::FixedPoint, &cos, &cos, Start::Guess(1.0), &config),
        ),
        (
            "x^2 - 2 from 1",
            method::solve(
                Method::Newton,
                &square,
                &square_prime,
                Start::Guess(1.0),
                &config,
            ),
        ),
        (
            "x^3 from 0",
            method::solve(Method::Newton, &cube, &cube_prime, Start::Guess(0.0), &config),
        ),
    ];

    for (label, result) in runs {
        match result {
            Ok(solution) => println!(
                "{label:>18}: x = {:.5} ({:?} after {} iterations)",
                solution.x, solution.status, solution.iters
            ),
            Err(err) => println!("{label:>18}: {err} [{:?}]", err.kind()),
        }
    }
}
