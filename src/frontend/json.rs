use super::{solve_text, ScalarDomain, SolveReport, TextSystem};
use crate::codec::CodecSettings;
use crate::solver::{Factorization, SolverError, SolverSettings};

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// A text system together with everything needed to solve it again
/// later: domain, factorization and both settings objects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TextProblem {
    pub system: TextSystem,
    pub domain: ScalarDomain,
    pub factorization: Factorization,
    pub settings: SolverSettings,
    pub codec: CodecSettings,
}

impl TextProblem {
    pub fn solve(&self) -> Result<SolveReport, SolverError> {
        solve_text(
            &self.system,
            self.domain,
            self.factorization,
            &self.settings,
            &self.codec,
        )
    }

    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Reads a problem written by [`write_to_file`](TextProblem::write_to_file).
    /// Settings that fail validation are rejected.
    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let problem: TextProblem = serde_json::from_str(&buffer)?;

        problem
            .settings
            .validate()
            .and_then(|_| problem.codec.validate())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(problem)
    }
}

#[test]
fn test_json_io() {
    use crate::codec::{CodecSettingsBuilder, DecimalSeparator};
    use crate::solver::SolveStatus;
    use std::io::{Seek, SeekFrom};

    let problem = TextProblem {
        system: TextSystem::new(
            vec![vec!["2", "-1", "0"], vec!["-1", "2", "-1"], vec!["0", "-1", "2"]],
            vec!["1", "0", "1"],
        ),
        domain: ScalarDomain::Interval,
        factorization: Factorization::Tridiagonal,
        settings: SolverSettings::default(),
        codec: CodecSettingsBuilder::default()
            .decimal_separator(DecimalSeparator::Auto)
            .interval_digits(8)
            .build()
            .unwrap(),
    };

    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = TextProblem::read_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);

    let report = problem2.solve().unwrap();
    assert_eq!(report.status(), SolveStatus::Solved);
    assert_eq!(report.lines().len(), 3);
}

#[test]
fn test_json_rejects_bad_settings() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    let json = r#"{"settings": {"pivot_tolerance": -1.0}}"#;
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let err = TextProblem::read_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
