/// Character counts shown next to the input and output boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub input_chars: usize,
    pub output_chars: usize,
}

/// Result of one [`Action`](crate::Action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The caller should redraw the output box.
    pub output_changed: bool,
    pub counts: Counts,
}
