use crate::timeline::stagger::Timing;
use crate::timeline::toggle::ToggleAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Time-based playhead for one-shot reveals.
///
/// Starts paused at 0. The playhead only moves while playing and always stays in `[0, total]`.
#[derive(Clone, Debug)]
pub struct Player {
    head: f64,
    total: f64,
    direction: Direction,
    paused: bool,
    played: bool,
}

impl Player {
    /// Paused player for a timeline of `total` seconds.
    pub fn new(total: f64) -> Self {
        Self {
            head: 0.0,
            total: total.max(0.0),
            direction: Direction::Forward,
            paused: true,
            played: false,
        }
    }

    /// Current playhead in seconds.
    pub fn head(&self) -> f64 {
        self.head
    }

    /// Timeline length in seconds.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// `true` while the playhead still has somewhere to go.
    pub fn is_running(&self) -> bool {
        if self.paused {
            return false;
        }
        match self.direction {
            Direction::Forward => self.head < self.total,
            Direction::Backward => self.head > 0.0,
        }
    }

    /// `true` once a forward play reached the end.
    pub fn is_complete(&self) -> bool {
        self.played && self.direction == Direction::Forward && self.head >= self.total
    }

    /// Progress of target `index` of `timing` at the current playhead.
    pub fn local_progress(&self, timing: &Timing, index: usize) -> f64 {
        if self.total <= 0.0 {
            // Zero-length timelines jump straight between the endpoints.
            return if self.is_complete() { 1.0 } else { 0.0 };
        }
        timing.local_progress(index, self.head)
    }

    /// Apply a toggle action.
    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.run(Direction::Forward),
            ToggleAction::Reverse => self.run(Direction::Backward),
            ToggleAction::Pause => self.paused = true,
            ToggleAction::Resume => self.paused = false,
            ToggleAction::Restart => {
                self.head = 0.0;
                self.run(Direction::Forward);
            }
            ToggleAction::Reset => {
                self.head = 0.0;
                self.paused = true;
                self.played = false;
            }
            ToggleAction::Complete => {
                self.head = self.total;
                self.direction = Direction::Forward;
                self.paused = true;
                self.played = true;
            }
            ToggleAction::None => {}
        }
    }

    fn run(&mut self, direction: Direction) {
        self.direction = direction;
        self.paused = false;
        if direction == Direction::Forward {
            self.played = true;
        }
    }

    /// Move the playhead by `dt` seconds in the current direction.
    pub fn advance(&mut self, dt: f64) {
        if self.paused || !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.head = match self.direction {
            Direction::Forward => (self.head + dt).min(self.total),
            Direction::Backward => (self.head - dt).max(0.0),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;
