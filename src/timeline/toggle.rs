use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::foundation::error::RevealError;
use crate::viewport::progress::Phase;

/// Playback command issued when a one-shot reveal crosses a window boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Play forward from the current position.
    Play,
    /// Freeze at the current position.
    Pause,
    /// Continue in the direction used before the last pause.
    Resume,
    /// Play backward toward the start.
    Reverse,
    /// Jump to the start and play forward.
    Restart,
    /// Jump to the start and stop.
    Reset,
    /// Jump to the end and stop.
    Complete,
    /// Do nothing.
    None,
}

impl ToggleAction {
    fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        }
    }
}

impl FromStr for ToggleAction {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => {
                return Err(RevealError::config(format!("unknown toggle action '{other}'")));
            }
        })
    }
}

/// Actions for the four window transitions, written as
/// `"onEnter onLeave onEnterBack onLeaveBack"`.
///
/// The default, `play none none none`, plays once and never replays or reverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    /// Scrolling down into the window.
    pub on_enter: ToggleAction,
    /// Scrolling down past the end.
    pub on_leave: ToggleAction,
    /// Scrolling back up into the window from below.
    pub on_enter_back: ToggleAction,
    /// Scrolling back up above the start.
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl ToggleActions {
    /// Actions to run, in order, for a move from `from` to `to`.
    ///
    /// `from == None` is the first observation; a reveal loaded mid-page behaves as if it had
    /// scrolled there from the top.
    pub fn for_transition(&self, from: Option<Phase>, to: Phase) -> SmallVec<[ToggleAction; 2]> {
        use Phase::*;
        let from = from.unwrap_or(Before);
        let mut out = SmallVec::new();
        match (from, to) {
            (Before, Active) => out.push(self.on_enter),
            (Active, After) => out.push(self.on_leave),
            (Before, After) => out.extend([self.on_enter, self.on_leave]),
            (After, Active) => out.push(self.on_enter_back),
            (Active, Before) => out.push(self.on_leave_back),
            (After, Before) => out.extend([self.on_enter_back, self.on_leave_back]),
            (Before, Before) | (Active, Active) | (After, After) => {}
        }
        out.retain(|a| *a != ToggleAction::None);
        out
    }
}

impl FromStr for ToggleActions {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [enter, leave, enter_back, leave_back] = parts.as_slice() else {
            return Err(RevealError::config(format!(
                "toggle actions need four entries, got '{s}'"
            )));
        };
        Ok(Self {
            on_enter: enter.parse()?,
            on_leave: leave.parse()?,
            on_enter_back: enter_back.parse()?,
            on_leave_back: leave_back.parse()?,
        })
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.name(),
            self.on_leave.name(),
            self.on_enter_back.name(),
            self.on_leave_back.name()
        )
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = RevealError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(t: ToggleActions) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/toggle.rs"]
mod tests;
