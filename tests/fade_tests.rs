// Host-side tests for one-shot scroll reveal bookkeeping.

#![allow(dead_code)]
mod fade {
    include!("../src/core/fade.rs");
}

use fade::*;

fn watching(keys: &[&'static str]) -> FadeWatch<&'static str> {
    let mut w = FadeWatch::new();
    for k in keys {
        w.watch(*k);
    }
    w
}

#[test]
fn intersecting_entry_reveals_and_unwatches() {
    let mut w = watching(&["hero", "about"]);
    let revealed = w.on_entries([("hero", true), ("about", false)]);
    assert_eq!(revealed, vec!["hero"]);
    assert!(!w.is_watched(&"hero"));
    assert!(w.is_watched(&"about"));
    assert_eq!(w.pending(), 1);
}

#[test]
fn revealed_element_is_never_reprocessed() {
    let mut w = watching(&["hero"]);
    assert_eq!(w.on_entries([("hero", true)]), vec!["hero"]);
    // leaves and re-enters the viewport
    assert!(w.on_entries([("hero", false)]).is_empty());
    assert!(w.on_entries([("hero", true)]).is_empty());
}

#[test]
fn duplicate_entries_in_one_batch_reveal_once() {
    let mut w = watching(&["a", "b"]);
    let revealed = w.on_entries([("b", true), ("a", true), ("b", true)]);
    assert_eq!(revealed, vec!["b", "a"]);
    assert_eq!(w.pending(), 0);
}

#[test]
fn unknown_keys_and_double_watch_are_ignored() {
    let mut w = watching(&["a", "a"]);
    assert_eq!(w.pending(), 1);
    assert!(w.on_entries([("zzz", true)]).is_empty());
    assert_eq!(w.pending(), 1);
}
