use std::fmt::Display;
use std::fmt::Formatter;

use super::SaturationRule;

/// Counters which are maintained by the saturation engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaturationStatistics {
    num_calls: u64,
    num_successes: u64,
    num_bisections: u64,
    rule_successes: [u64; SaturationRule::ORDER.len()],
}

impl SaturationStatistics {
    /// The number of times saturation was attempted.
    pub fn num_calls(&self) -> u64 {
        self.num_calls
    }

    /// The number of attempts which extended the conflict core.
    pub fn num_successes(&self) -> u64 {
        self.num_successes
    }

    /// The number of non-overflow premises which required a bisection search.
    pub fn num_bisections(&self) -> u64 {
        self.num_bisections
    }

    pub fn num_successes_of(&self, rule: SaturationRule) -> u64 {
        self.rule_successes[rule as usize]
    }

    pub(crate) fn record_call(&mut self) {
        self.num_calls += 1;
    }

    pub(crate) fn record_success(&mut self, rule: SaturationRule) {
        self.num_successes += 1;
        self.rule_successes[rule as usize] += 1;
    }

    pub(crate) fn record_bisection(&mut self) {
        self.num_bisections += 1;
    }
}

impl Display for SaturationStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "%% saturationCalls={}", self.num_calls)?;
        writeln!(f, "%% saturationSuccesses={}", self.num_successes)?;
        writeln!(f, "%% saturationBisections={}", self.num_bisections)?;
        for rule in SaturationRule::ORDER {
            writeln!(
                f,
                "%% saturationRule_{rule}={}",
                self.num_successes_of(rule)
            )?;
        }

        Ok(())
    }
}
