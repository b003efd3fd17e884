//! Worked examples with known castle counts.
//! The regression harness and the integration tests both run this table.

use crate::castles::count_castles;
use crate::error::ScenarioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// 1-based position in [`SCENARIOS`].
    pub number: usize,
    pub topography: &'static [i32],
    pub expected: usize,
}

impl Scenario {
    pub fn run(&self) -> usize {
        count_castles(self.topography)
    }

    /// Run the scenario and compare with the recorded count.
    pub fn check(&self) -> Result<usize, ScenarioError> {
        self.check_with(count_castles)
    }

    /// Like [`Scenario::check`], with the counting function supplied by the caller.
    pub fn check_with<F>(&self, count: F) -> Result<usize, ScenarioError>
    where
        F: FnOnce(&[i32]) -> usize,
    {
        let result = count(self.topography);
        if result != self.expected {
            return Err(ScenarioError::Mismatch {
                number: self.number,
                result,
                expected: self.expected,
            });
        }
        Ok(result)
    }
}

const fn scenario(number: usize, topography: &'static [i32], expected: usize) -> Scenario {
    Scenario { number, topography, expected }
}

pub const SCENARIOS: [Scenario; 13] = [
    scenario(1, &[], 0),
    scenario(2, &[1], 1),
    scenario(3, &[2, 2, 2], 1),
    scenario(4, &[-1, 1, 2], 1),
    scenario(5, &[-2, 0, 2, 3, 4], 1),
    scenario(6, &[9, 6, 6, 5, 4, -1, -3], 1),
    scenario(7, &[-4, -4, -3, 5, -2], 2),
    scenario(8, &[1, -3, -1], 2),
    scenario(9, &[9, -4, 5], 2),
    scenario(10, &[-1, 1, 1, 3, 3, 3, 1, 1, -8], 2),
    scenario(11, &[9, 9, 9, 9, 4, 4, 4, -8, -5, 5, 5, 5], 2),
    scenario(12, &[9, -4, 5, 6, -7, 3, 4, 5, 6, 7, 2, 2, -3, 3], 6),
    scenario(13, &[4, 4, 5, 5, 6, 7, -2, -2, 6, 2, 9, 3, 4, -7, 3], 9),
];

/// Look up a scenario by its 1-based number.
pub fn find_scenario(number: usize) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_sequential_from_one() {
        for (i, s) in SCENARIOS.iter().enumerate() {
            assert_eq!(s.number, i + 1);
        }
    }

    #[test]
    fn find_scenario_bounds() {
        assert!(find_scenario(0).is_none());
        assert_eq!(find_scenario(1).map(|s| s.expected), Some(0));
        assert_eq!(find_scenario(13).map(|s| s.expected), Some(9));
        assert!(find_scenario(14).is_none());
    }

    #[test]
    fn check_reports_mismatch() {
        let wrong = Scenario { number: 99, topography: &[9, -4, 5], expected: 3 };
        let err = wrong.check().unwrap_err();
        assert_eq!(err, ScenarioError::Mismatch { number: 99, result: 2, expected: 3 });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Failed test #99: result=2, expectedResult=3");
    }

    #[test]
    fn check_with_uses_supplied_counter() {
        assert_eq!(SCENARIOS[1].check_with(|t| t.len()), Ok(1));
        assert_eq!(
            SCENARIOS[2].check_with(|t| t.len()),
            Err(ScenarioError::Mismatch { number: 3, result: 3, expected: 1 })
        );
    }

    #[test]
    fn check_returns_count_on_success() {
        assert_eq!(SCENARIOS[11].check(), Ok(6));
    }
}
