use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_key: String,
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run(&self, scenario: &Scenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Running scenario: {}", scenario.name.bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let start = Instant::now();
            let outcome = scenario.run();
            timings.push(start.elapsed());

            match outcome {
                Ok(()) => successes += 1,
                Err(err) => {
                    let message = format!("Iteration {}: {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.red());
                    }
                    log::debug!("{} failed: {err:?}", scenario.key);
                    failures.push(message);
                }
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_key: scenario.key.to_string(),
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(secs.max(0.0)))
    }
}
