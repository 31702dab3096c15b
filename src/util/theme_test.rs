#![cfg(not(feature = "web"))]

use super::*;

#[test]
fn read_preference_defaults_to_light_without_a_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(Theme::Dark);
    persist(Theme::Dark);
    apply(Theme::Light);
    persist(Theme::Light);
}
