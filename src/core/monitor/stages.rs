//! Simulated submit-phase stage labels
//!
//! While the submit request is in flight there is no task handle to poll, so
//! the client rotates through a fixed sequence of stage labels on a timer.
//! The labels are cosmetic and not connected to actual server progress.

/// Stage labels shown while waiting for the submit response, in order
pub const SUBMIT_STAGES: [&str; 6] = [
    "Validating repository info...",
    "Fetching file list...",
    "Filtering files...",
    "Downloading file contents...",
    "Merging output files...",
    "Almost done...",
];

/// Advances through [`SUBMIT_STAGES`] once per call, then stops
///
/// After the last label has been handed out, `advance` returns `None` so the
/// display holds on the final label instead of cycling.
#[derive(Debug, Default)]
pub struct StageRotation {
    next: usize,
}

impl StageRotation {
    /// Creates a rotation positioned before the first label
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next label, or `None` once the sequence is exhausted
    pub fn advance(&mut self) -> Option<&'static str> {
        let label = SUBMIT_STAGES.get(self.next).copied();
        if label.is_some() {
            self.next += 1;
        }
        label
    }
}
