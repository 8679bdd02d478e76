//! Shared test utilities for `densa-core`.

use std::num::NonZeroUsize;

use densa_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `DENSA_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Applies the CI point cap to a suite's own input size limit.
#[must_use]
pub(crate) fn suite_point_limit(suite_limit: usize) -> usize {
    ProptestRunProfile::load(1, false).max_points(suite_limit)
}

/// Wraps a test's `min_pts`, which is never zero.
#[must_use]
pub(crate) fn min_pts(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).expect("test min_pts is non-zero")
}
