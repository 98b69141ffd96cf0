// Copyright (c) Contributors to the runenv project.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use rstest::rstest;

use super::*;

#[rstest]
#[case(Env::DEVELOPMENT, "development")]
#[case(Env::TESTING, "testing")]
#[case(Env::PRERELEASE, "prerelease")]
#[case(Env::PRODUCTION, "production")]
fn test_builtin_environment_names(#[case] env: Env, #[case] expected: &str) {
    assert_eq!(env.as_str(), expected);
    assert_eq!(env.to_string(), expected);
}

#[rstest]
fn test_default_environment_is_the_empty_name() {
    let env = Env::default();
    assert_eq!(env.as_str(), "");
    assert!(env.is(&Env::from_static("")));
    assert!(!env.is(&Env::DEVELOPMENT));
}

#[rstest]
fn test_is_compares_exact_names() {
    assert!(Env::TESTING.is(&Env::TESTING));
    assert!(Env::TESTING.is(&Env::from("testing")));
    assert!(!Env::TESTING.is(&Env::PRODUCTION));
    // No case folding or trimming
    assert!(!Env::TESTING.is(&Env::from("Testing")));
    assert!(!Env::TESTING.is(&Env::from("testing ")));
}

#[rstest]
fn test_is_in_matches_membership() {
    let registered = vec![Env::DEVELOPMENT, Env::TESTING];
    assert!(Env::TESTING.is_in(&registered));
    assert!(!Env::PRODUCTION.is_in(&registered));
    assert!(!Env::default().is_in(&registered));
    assert!(!Env::TESTING.is_in(&[]));
}

#[rstest]
fn test_owned_and_static_names_compare_equal() {
    let owned = Env::from(String::from("staging"));
    let borrowed = Env::from("staging");
    assert_eq!(owned, borrowed);
    assert_eq!(owned, "staging");
    assert_eq!("staging", borrowed);
}

#[rstest]
fn test_hashing_is_consistent_across_representations() {
    let mut set = HashSet::new();
    set.insert(Env::from(String::from("testing")));
    assert!(set.contains(&Env::TESTING));
}

#[rstest]
fn test_serializes_as_a_bare_string() {
    let json = serde_json::to_string(&Env::PRODUCTION).expect("Should serialize");
    assert_eq!(json, r#""production""#);
    let parsed: Env = serde_json::from_str(r#""staging""#).expect("Should deserialize");
    assert_eq!(parsed, "staging");
}
