#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use crout::{codec::*, frontend::*, solver::*};
    use std::io::{Seek, SeekFrom};

    let problem = TextProblem {
        system: TextSystem::new(
            vec![vec!["4", "1"], vec!["1", "3"]],
            vec!["1", "2"],
        ),
        domain: ScalarDomain::Precision,
        factorization: Factorization::Symmetric,
        settings: SolverSettingsBuilder::default()
            .pivot_tolerance(1e-30)
            .build()
            .unwrap(),
        codec: CodecSettingsBuilder::default()
            .precision_digits(20)
            .build()
            .unwrap(),
    };
    let report = problem.solve().unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = TextProblem::read_from_file(&mut file).unwrap();
    assert_eq!(problem2, problem);

    let report2 = problem2.solve().unwrap();
    assert_eq!(report.lines(), report2.lines());
    assert_eq!(report2.status(), SolveStatus::Solved);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_defaults_fill_missing_fields() {
    use crout::{codec::*, frontend::*, solver::*};
    use std::io::{Seek, SeekFrom, Write};

    let json = r#"{
        "system": {"matrix": [["2"]], "rhs": ["1"]},
        "domain": "Interval"
    }"#;
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let problem = TextProblem::read_from_file(&mut file).unwrap();
    assert_eq!(problem.factorization, Factorization::General);
    assert_eq!(problem.settings, SolverSettings::default());
    assert_eq!(problem.codec, CodecSettings::default());

    let report = problem.solve().unwrap();
    assert_eq!(
        report.lines(),
        vec!["x[1] = [5.0000000000000E-001 , 5.0000000000000E-001]   width = 0.0000000000000E+000"]
    );
}
