use std::fmt;

/// Why the simulation worker stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A presentation sent `QuitGame`, or the runtime was shut down.
    Quit,
    /// The last registered presentation closed its window.
    AllWindowsClosed,
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionOutcome::Quit => "quit",
            SessionOutcome::AllWindowsClosed => "all windows closed",
        };
        write!(f, "{}", label)
    }
}
