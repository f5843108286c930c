//! Property-based tests for the session state machine.
//!
//! Generates random action sequences and verifies that the output box always
//! agrees with the transform after every action.

use proptest::prelude::*;

use lipi_core::unicode::char_count;
use lipi_core::{transliterate, Scheme};

use super::example;
use crate::{Action, Session};

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'i', 'k', 'h', 'R', 'r', 'M', ' ', '1', '.']),
        0..16,
    )
    .prop_map(|v| v.into_iter().collect())
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arb_text().prop_map(Action::Input),
        1 => any::<bool>().prop_map(Action::SetAuto),
        1 => Just(Action::Transliterate),
        1 => Just(Action::Clear),
        1 => arb_text()
            .prop_filter("non-empty", |t| !t.is_empty())
            .prop_map(|t| Action::LoadExample(example(&t))),
    ]
}

proptest! {
    #[test]
    fn output_tracks_input(actions in prop::collection::vec(arb_action(), 1..32)) {
        let mut session = Session::new(Some(Scheme::harvard_kyoto()));
        // Last input for which the output was produced.
        let mut rendered = String::new();

        for action in actions {
            let forces = match &action {
                Action::Transliterate | Action::LoadExample(_) | Action::Clear => true,
                Action::Input(_) => session.is_auto(),
                Action::SetAuto(enabled) => {
                    *enabled && !session.is_auto() && !session.input().is_empty()
                }
            };
            let resp = session.handle(action);

            if forces {
                rendered = session.input().to_string();
            }
            prop_assert_eq!(session.output(), transliterate(&rendered));
            prop_assert_eq!(resp.counts.input_chars, char_count(session.input()));
            prop_assert_eq!(resp.counts.output_chars, char_count(session.output()));
        }
    }
}
