//! Runs the whole registry against the reference GL: a conformant profile
//! must pass everything it can run, and every quirk must be caught.

use gl_conform_core::harness::run_all;
use gl_conform_core::{ConformanceTest, Profile, RunResults, Status};
use gl_conform_reference::{Quirk, ReferenceGl, ReferenceProfile};
use gl_conform_suites::TestKind;
use proptest::prelude::*;

fn run_registry(profile: ReferenceProfile) -> RunResults {
    let kinds = TestKind::all();
    let mut gl = ReferenceGl::new(profile);
    run_all("reference", kinds.iter().map(|k| k as &dyn ConformanceTest), &mut gl)
}

fn failing_tests(results: &RunResults) -> Vec<&str> {
    results
        .tests
        .iter()
        .filter(|(_, r)| r.result == Status::Fail)
        .map(|(name, _)| name.as_str())
        .collect()
}

#[test]
fn conformant_profile_passes_everything() {
    let results = run_registry(ReferenceProfile::conformant());
    assert_eq!(results.tests.len(), TestKind::list_tests().len());
    assert!(failing_tests(&results).is_empty(), "{:?}", failing_tests(&results));
    assert_eq!(results.verdict(), Status::Pass);
    assert_eq!(results.totals().pass, TestKind::list_tests().len());
}

#[test]
fn fbo_window_passes_everything() {
    let mut profile = ReferenceProfile::conformant();
    profile.surface.uses_fbo = true;
    let results = run_registry(profile);
    assert_eq!(results.verdict(), Status::Pass, "{:?}", failing_tests(&results));
}

#[test]
fn core_profiles_skip_what_they_cannot_run() {
    let results = run_registry(ReferenceProfile::with_version(3, 3, Profile::Core));
    let totals = results.totals();
    assert_eq!(totals.fail, 0, "{:?}", failing_tests(&results));
    // Compat-only tests and the 4.5 draw buffers test skip on core 3.3.
    assert_eq!(
        results.tests["gl-4.5/named-framebuffer-draw-buffers-errors"].result,
        Status::Skip
    );
    assert_eq!(results.tests["gl-1.0/simple-readbuffer"].result, Status::Skip);
    assert_eq!(
        results.tests["arb_vertex_attrib_64bit/zero-vertex-attrib"].result,
        Status::Pass
    );
    assert_eq!(results.verdict(), Status::Pass);
}

#[test]
fn no_error_context_skips_error_tests() {
    let mut profile = ReferenceProfile::conformant();
    profile.surface.no_error = true;
    let results = run_registry(profile);
    assert_eq!(results.tests["gl-1.0/simple-readbuffer"].result, Status::Pass);
    assert_eq!(results.tests["arb_texture_multisample/errors"].result, Status::Skip);
}

#[test]
fn every_quirk_is_caught_by_some_test() {
    for quirk in Quirk::catalogue() {
        let results = run_registry(ReferenceProfile::conformant().with_quirk(quirk));
        assert_eq!(results.verdict(), Status::Fail, "{quirk:?} went unnoticed");
        assert_eq!(failing_tests(&results).len(), 1, "{quirk:?}: {:?}", failing_tests(&results));
    }
}

#[test]
fn quirks_name_the_test_that_catches_them() {
    let cases = [
        (Quirk::RejectFrontReadBuffer, "gl-1.0/simple-readbuffer"),
        (Quirk::AcceptDuplicateDrawBuffers, "gl-4.5/named-framebuffer-draw-buffers-errors"),
        (Quirk::AcceptNegativeLayer, "arb_texture_multisample/errors"),
        (Quirk::NonzeroUnsupportedAnswer, "arb_internalformat_query2/generic-pname-checks"),
        (Quirk::AcceptZeroAttribIndex, "arb_vertex_attrib_64bit/zero-vertex-attrib"),
    ];
    for (quirk, test) in cases {
        let results = run_registry(ReferenceProfile::conformant().with_quirk(quirk));
        assert_eq!(failing_tests(&results), vec![test], "{quirk:?}");
    }
}

#[test]
fn running_twice_gives_the_same_verdicts() {
    let kinds = TestKind::all();
    let mut gl = ReferenceGl::new(ReferenceProfile::conformant().with_quirk(Quirk::AcceptBackWithOthers));
    let first = run_all("first", kinds.iter().map(|k| k as &dyn ConformanceTest), &mut gl);
    let second = run_all("second", kinds.iter().map(|k| k as &dyn ConformanceTest), &mut gl);
    for (name, result) in &first.tests {
        let again = &second.tests[name];
        assert_eq!(result.result, again.result, "{name}");
        assert_eq!(result.subtests, again.subtests, "{name}");
        assert_eq!(result.out, again.out, "{name}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn run_fails_iff_a_quirk_is_present(mask in 0u32..(1 << 11)) {
        let catalogue = Quirk::catalogue();
        let mut profile = ReferenceProfile::conformant();
        for (bit, quirk) in catalogue.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                profile = profile.with_quirk(*quirk);
            }
        }
        let results = run_registry(profile);
        let expected = if mask == 0 { Status::Pass } else { Status::Fail };
        prop_assert_eq!(results.verdict(), expected);
    }
}
