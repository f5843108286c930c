use lipi_core::{transliterate, Scheme};

use super::example;
use crate::{Action, Counts, Session};

// --- Live mode ---

#[test]
fn test_live_input_transliterates() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    assert!(session.is_auto());

    let resp = session.handle(Action::Input("namaste".into()));
    assert!(resp.output_changed);
    assert_eq!(session.output(), transliterate("namaste"));
}

#[test]
fn test_every_keystroke_retransliterates() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    session.set_input("k".into());
    assert_eq!(session.output(), "क\u{094D}");
    session.set_input("ka".into());
    assert_eq!(session.output(), "क");
}

// --- Manual mode ---

#[test]
fn test_manual_mode_waits_for_request() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    session.handle(Action::SetAuto(false));

    let resp = session.handle(Action::Input("dharma".into()));
    assert!(!resp.output_changed);
    assert_eq!(session.output(), "");

    let resp = session.handle(Action::Transliterate);
    assert!(resp.output_changed);
    assert_eq!(session.output(), "धर\u{094D}म");
}

#[test]
fn test_enabling_live_mode_refreshes_pending_input() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    session.set_auto(false);
    session.set_input("ka".into());
    assert_eq!(session.output(), "");

    let resp = session.handle(Action::SetAuto(true));
    assert!(resp.output_changed);
    assert_eq!(session.output(), "क");
}

#[test]
fn test_enabling_live_mode_with_empty_input_keeps_output() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    session.set_auto(false);
    let resp = session.handle(Action::SetAuto(true));
    assert!(!resp.output_changed);
    assert_eq!(session.output(), "");
}

#[test]
fn test_example_ignores_manual_mode() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    session.set_auto(false);
    session.handle(Action::LoadExample(example("yoga")));
    assert_eq!(session.input(), "yoga");
    assert_eq!(session.output(), "योग");
}

// --- Clear and counts ---

#[test]
fn test_clear_resets_both_boxes() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    session.set_input("oM".into());
    let resp = session.handle(Action::Clear);
    assert!(resp.output_changed);
    assert_eq!(session.input(), "");
    assert_eq!(session.output(), "");
    assert_eq!(resp.counts, Counts::default());
}

#[test]
fn test_counts_use_chars() {
    let mut session = Session::new(Some(Scheme::harvard_kyoto()));
    let resp = session.handle(Action::Input("ki".into()));
    assert_eq!(
        resp.counts,
        Counts {
            input_chars: 2,
            output_chars: 2,
        }
    );
}

// --- Missing scheme ---

#[test]
fn test_missing_scheme_passes_input_through() {
    let mut session = Session::new(None);
    session.set_input("namaste".into());
    assert_eq!(session.output(), "namaste");
    session.handle(Action::LoadExample(example("dharma")));
    assert_eq!(session.output(), "dharma");
}

#[test]
fn test_other_scheme() {
    let mut session = Session::new(Some(Scheme::iast()));
    session.set_input("r\u{0101}ma".into());
    assert_eq!(session.output(), "राम");
}
