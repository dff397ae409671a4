use crout::codec::*;
use crout::frontend::*;
use crout::solver::*;
use std::env;

fn main() {
    // domain may be given as first argument: float, precision or interval
    let domain: ScalarDomain = env::args()
        .nth(1)
        .map(|s| s.parse().unwrap())
        .unwrap_or(ScalarDomain::Interval);

    let system = TextSystem::new(
        vec![
            vec!["4", "1", "0"],
            vec!["1", "4", "1"],
            vec!["0", "1", "4"],
        ],
        vec!["0.1", "0.2", "0.3"],
    );

    let settings = SolverSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();

    let codec = CodecSettings::default();

    for factorization in [
        Factorization::General,
        Factorization::Symmetric,
        Factorization::Tridiagonal,
    ] {
        match solve_text(&system, domain, factorization, &settings, &codec) {
            Ok(report) => print!("{report}"),
            Err(e) => println!("{}", render_error(&e)),
        }
    }

    // a singular system is reported, not fatal
    let singular = TextSystem::new(vec![vec!["0", "1"], vec!["1", "0"]], vec!["1", "1"]);
    for factorization in [Factorization::General, Factorization::Symmetric] {
        match solve_text(&singular, domain, factorization, &settings, &codec) {
            Ok(report) => print!("{report}"),
            Err(e) => println!("{}", render_error(&e)),
        }
    }
}
