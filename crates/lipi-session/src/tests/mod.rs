mod basic;
mod proptest_session;

use lipi_core::settings::Example;

pub(super) fn example(text: &str) -> Example {
    Example {
        label: text.to_string(),
        text: text.to_string(),
    }
}
