use std::time::Duration;

/// One timed display action emitted during the evaluation walk.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Overwrite the live display region with `content`, then hold it.
    Show { content: String, hold: Duration },
    /// Pure pacing delay; the display is left as-is.
    Pause(Duration),
}

/// What happens after every timed step has played.
#[derive(Debug, Clone, PartialEq)]
pub enum Finale {
    /// Print the accumulated scene once and return.
    Static(String),
    /// Cycle the collected frames forever, holding each for `hold`.
    /// Entered whenever the program declared at least one `frame`; the loop
    /// has no exit of its own.
    Loop { frames: Vec<String>, hold: Duration },
}

/// Complete description of what to display and when, produced by one
/// evaluation walk. Driving it against a terminal is the player's job, which
/// keeps evaluation itself headless and testable.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePlan {
    pub steps: Vec<Step>,
    pub finale: Finale,
}

impl ScenePlan {
    /// True when playback would never return on its own.
    pub fn loops_forever(&self) -> bool {
        matches!(self.finale, Finale::Loop { .. })
    }
}
