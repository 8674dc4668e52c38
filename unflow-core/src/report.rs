//! Human-readable summaries of a transform run

/// Closing flourishes for runs that removed more than one return. The pick
/// is keyed off the count so summaries stay deterministic.
const FLOURISHES: &[&str] = &["Tidy.", "Much better.", "Smooth reading ahead.", "Unflowed."];

/// One-line summary of a removed-return count.
pub fn summary(returns_removed: usize) -> String {
    match returns_removed {
        0 => String::from("No extra hard returns to remove."),
        1 => String::from("Removed 1 extra hard return."),
        n => {
            let flourish = FLOURISHES[n % FLOURISHES.len()];
            format!("Removed {n} extra hard returns. {flourish}")
        }
    }
}
