//! `Stats` tracks candidate and improvement counts for a search run without
//! any logging or persistence of its own.

pub struct Stats {
    pub iterations: u64,
    pub improvements: u64,
    pub best_score: f64,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            iterations: 0,
            improvements: 0,
            best_score: 0.0,
        }
    }

    pub fn log_improvement(&mut self, score: f64) {
        self.improvements += 1;
        self.best_score = score;
    }

    pub fn report(&self) {
        eprintln!(
            "Evaluated {} candidates, {} improvements, best score {}",
            self.iterations, self.improvements, self.best_score
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
