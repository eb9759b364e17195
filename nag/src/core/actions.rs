//! The response action table for due-entry prompts.
//!
//! A statically declared ordered table, not naming-convention dispatch: each
//! row pairs its trigger strings with an action, a help line, and whether
//! the prompt repeats. The prompt legend and the help text are both derived
//! from this table, so it is the single source of truth for what a keystroke
//! does.

/// What to do with a due entry after reading one response line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Invoke the command, then mark the entry run.
    Run,
    /// Leave history untouched; nag again next time.
    Defer,
    /// Mark the entry run now without invoking the command.
    Reset,
    /// Show the action table, then prompt again for the same entry.
    Help,
}

/// One row of the action table.
pub struct Response {
    /// Exact-match trigger strings. The first one is the symbol shown in
    /// the prompt legend and the help text.
    pub triggers: &'static [&'static str],
    pub action: Action,
    pub help: &'static str,
    pub reprompt: bool,
}

/// Evaluated in order against the raw response line; first row wins.
pub const RESPONSES: &[Response] = &[
    Response {
        triggers: &["Y", "y", ""],
        action: Action::Run,
        help: "run the command now",
        reprompt: false,
    },
    Response {
        triggers: &["n", "N"],
        action: Action::Defer,
        help: "don't run the command, but still nag me next time",
        reprompt: false,
    },
    Response {
        triggers: &["d"],
        action: Action::Reset,
        help: "don't run the command and reset the interval (use when you already ran it yourself)",
        reprompt: false,
    },
    Response {
        triggers: &["?"],
        action: Action::Help,
        help: "show this help message",
        reprompt: true,
    },
];

/// Map a response line (trailing newline removed) to an action.
///
/// Anything outside the table resolves to [`Action::Defer`]: the fallthrough
/// mirrors the default branch of the original behavior and is pinned by
/// tests so a future change has to be deliberate.
pub fn resolve(response: &str) -> Action {
    RESPONSES
        .iter()
        .find(|row| row.triggers.contains(&response))
        .map(|row| row.action)
        .unwrap_or(Action::Defer)
}

/// Choice legend for the prompt, e.g. `Y/n/d/?`.
pub fn legend() -> String {
    RESPONSES
        .iter()
        .map(|row| row.triggers[0])
        .collect::<Vec<_>>()
        .join("/")
}

/// Render the table as the help text shown for `?`.
pub fn help_text() -> String {
    let mut out = String::from("Possible responses are:\n");
    for row in RESPONSES {
        out.push_str(&format!("  {}: {}\n", row.triggers[0], row.help));
    }
    out
}
