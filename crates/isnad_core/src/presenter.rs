//! Plain-text rendering of the submission state for a hosting interface.

use crate::{Phase, SubmissionState};

/// Indicator line shown while a submission is in flight.
pub const LOADING_INDICATOR: &str = "Loading chains...";

/// Renders the state as display lines: nothing while idle, a loading
/// indicator while in flight, the error text on failure, and on success
/// each chain under a 1-based "Chain N:" heading with its narrators in
/// order.
pub fn render_lines(state: &SubmissionState) -> Vec<String> {
    match &state.phase {
        Phase::Idle => Vec::new(),
        Phase::Loading => vec![LOADING_INDICATOR.to_string()],
        Phase::Error { message } => vec![message.clone()],
        Phase::Success { chains } => {
            let mut lines = Vec::new();
            for (index, chain) in chains.iter().enumerate() {
                lines.push(format!("Chain {}:", index + 1));
                for narrator in &chain.narrators {
                    lines.push(format!("  {}", narrator.name));
                }
            }
            lines
        }
    }
}
