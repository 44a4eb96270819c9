//! Headless popup lifecycle scenarios.

mod catalog;
pub mod harness;

use anyhow::Result;

pub use harness::Harness;

pub type ScenarioFn = fn(&mut Harness) -> Result<()>;

#[derive(Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

impl Scenario {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        run: ScenarioFn,
    ) -> Self {
        Self {
            key,
            name,
            description,
            run,
        }
    }

    /// Run against a freshly mounted popup.
    pub fn run(&self) -> Result<()> {
        let mut harness = Harness::mount()?;
        (self.run)(&mut harness)
    }
}

pub fn all_scenarios() -> Vec<Scenario> {
    catalog::catalog()
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    all_scenarios().into_iter().find(|s| s.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .into_iter()
        .map(|s| (s.key, s.description))
        .collect()
}
