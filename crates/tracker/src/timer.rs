/// Elapsed-time state of a workout session.
///
/// Time only advances through [`SessionTimer::tick`], which the owner calls
/// once per second; the timer itself never reads a clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimer {
    elapsed_seconds: u64,
    started: bool,
    paused: bool,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = true;
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Zeroes the clock without touching the started/paused flags.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
    }

    /// Stops the session clock after a save; the paused flag is left as is.
    pub fn stop(&mut self) {
        self.started = false;
        self.elapsed_seconds = 0;
    }

    pub fn tick(&mut self) {
        if self.is_running() {
            self.elapsed_seconds += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.paused
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn formatted(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

/// `MM:SS` under an hour, `HH:MM:SS` from one hour on.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
