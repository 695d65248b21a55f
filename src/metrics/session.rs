use std::time::{Duration, Instant};

/// Play statistics for the current session. Lives in memory only and dies
/// with the process.
pub struct SessionStats {
    run_started: Instant,
    pub games_played: u32,
    pub high_score: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            run_started: Instant::now(),
            games_played: 0,
            high_score: 0,
        }
    }

    /// Called when a fresh run begins
    pub fn start_run(&mut self) {
        self.run_started = Instant::now();
    }

    /// Called once per terminal transition
    pub fn finish_run(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn run_time(&self) -> Duration {
        self.run_started.elapsed()
    }

    /// Elapsed run time as mm:ss
    pub fn format_run_time(&self) -> String {
        let total_secs = self.run_time().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
