//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read their case count, fork mode and input size cap from here so a
//! CI job can tune every suite through one set of variables.

use std::{env, num::NonZeroUsize};

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const DENSA_PBT_FORK_ENV_KEY: &str = "DENSA_PBT_FORK";
/// Environment variable capping the number of points a generated input holds.
pub const DENSA_PBT_MAX_POINTS_ENV_KEY: &str = "DENSA_PBT_MAX_POINTS";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_points: Option<NonZeroUsize>,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: env_override(DENSA_PBT_FORK_ENV_KEY, parse_bool).unwrap_or(default_fork),
            max_points: env_override(DENSA_PBT_MAX_POINTS_ENV_KEY, parse_max_points),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }

    /// Clamps a suite's own input size limit to the configured cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use densa_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(8, false);
    /// assert!(profile.max_points(96) <= 96);
    /// assert!(profile.max_points(96) >= 1);
    /// ```
    #[must_use]
    pub fn max_points(&self, suite_limit: usize) -> usize {
        let limit = suite_limit.max(1);
        self.max_points
            .map_or(limit, |cap| limit.min(cap.get()))
    }
}

fn env_override<T>(key: &'static str, parse: fn(&str) -> Result<T, &'static str>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(raw.trim())
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason,
                "invalid property-test profile override; using default",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("cases must be > 0"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be a positive integer"),
    }
}

fn parse_max_points(raw: &str) -> Result<NonZeroUsize, &'static str> {
    raw.parse::<NonZeroUsize>()
        .map_err(|_| "max points must be a positive integer")
}

fn parse_bool(raw: &str) -> Result<bool, &'static str> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off"),
    }
}
