//! The search loop: a lazy stream of best-so-far improvements.
//!
//! Each step draws one candidate, scores it against the goal and, when the
//! score ties or beats the best seen so far, yields the pair. The candidate
//! that first reaches a perfect score is scored, recorded and yielded on the
//! same pass before the stream ends; no further candidate is drawn after it.

use rand::Rng;

use crate::config::SearchConfig;
use crate::generate::generate;
use crate::score;
use crate::stats::Stats;
use crate::MarmosetError;

/// A new best (score, candidate) pair surfaced by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    /// 1-based count of candidates evaluated up to and including this one.
    pub iteration: u64,
    /// Fraction of goal positions this candidate matches, in `[0.0, 1.0]`.
    pub score: f64,
    /// The candidate string itself.
    pub candidate: String,
}

/// How a driven search run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A candidate matched the goal on every position.
    Matched { iterations: u64 },
    /// The iteration cap ran out before an exact match appeared.
    Exhausted { iterations: u64, best_score: f64 },
}

/// Iterator over [`Improvement`]s for a fixed goal string.
///
/// Unbounded by default; bound it with [`Search::with_max_iterations`] or by
/// limiting consumption, e.g. with `take`.
pub struct Search<R: Rng> {
    goal: String,
    goal_len: usize,
    rng: R,
    best: f64,
    /// Candidate drawn at the end of the previous pass, awaiting evaluation.
    pending: Option<(String, f64)>,
    iterations: u64,
    max_iterations: Option<u64>,
    status_interval: u64,
    matched: bool,
}

impl<R: Rng> Search<R> {
    /// Start a search for `goal`, drawing candidates from `rng`.
    ///
    /// Draws and scores the initial candidate. Fails with
    /// [`MarmosetError::InvalidArgument`] on an empty goal.
    pub fn new(goal: &str, mut rng: R) -> Result<Self, MarmosetError> {
        if goal.is_empty() {
            return Err(MarmosetError::InvalidArgument(
                "goal string must not be empty".into(),
            ));
        }
        let goal_len = goal.chars().count();
        let first = generate(&mut rng, goal_len);
        let first_score = score::fraction(goal, &first, goal_len);
        Ok(Self {
            goal: goal.to_string(),
            goal_len,
            rng,
            best: 0.0,
            pending: Some((first, first_score)),
            iterations: 0,
            max_iterations: None,
            status_interval: 0,
            matched: false,
        })
    }

    /// Cap the number of candidates evaluated. A cap of 0 stops the search
    /// before any candidate is evaluated.
    pub fn with_max_iterations(mut self, cap: Option<u64>) -> Self {
        self.max_iterations = cap;
        self
    }

    /// Emit a status line to stderr every `interval` candidates; 0 disables.
    pub fn with_status_interval(mut self, interval: u64) -> Self {
        self.status_interval = interval;
        self
    }

    /// Whether a perfect-score candidate has been seen.
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Best score seen so far.
    pub fn best_score(&self) -> f64 {
        self.best
    }

    /// Candidates evaluated so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl<R: Rng> Iterator for Search<R> {
    type Item = Improvement;

    fn next(&mut self) -> Option<Improvement> {
        loop {
            let (candidate, current) = self.pending.take()?;
            if let Some(cap) = self.max_iterations {
                if self.iterations >= cap {
                    return None;
                }
            }
            self.iterations += 1;

            let improved = current >= self.best;
            if improved {
                self.best = current;
            }
            if self.status_interval != 0 && self.iterations % self.status_interval == 0 {
                eprintln!(
                    "[{} candidates] best score {} for goal {:?}",
                    self.iterations, self.best, self.goal
                );
            }

            // Evaluate best-so-far before drawing the next candidate: the
            // perfect match must be recorded on the pass that ends the loop.
            if current >= 1.0 {
                self.matched = true;
            } else {
                let next = generate(&mut self.rng, self.goal_len);
                debug_assert_eq!(next.chars().count(), self.goal_len);
                let next_score = score::fraction(&self.goal, &next, self.goal_len);
                self.pending = Some((next, next_score));
            }

            if improved {
                return Some(Improvement {
                    iteration: self.iterations,
                    score: current,
                    candidate,
                });
            }
        }
    }
}

/// Drive a search to completion, invoking `on_improvement` for every new
/// best pair and reporting run totals to stderr unless status output is
/// disabled.
pub fn run_search<R, F>(
    config: &SearchConfig,
    rng: R,
    mut on_improvement: F,
) -> Result<SearchOutcome, MarmosetError>
where
    R: Rng,
    F: FnMut(&Improvement),
{
    let mut search = Search::new(&config.goal, rng)?
        .with_max_iterations(config.max_iterations)
        .with_status_interval(config.status_interval);

    let mut stats = Stats::new();
    for improvement in &mut search {
        stats.log_improvement(improvement.score);
        on_improvement(&improvement);
    }
    stats.iterations = search.iterations();
    if config.status_interval != 0 {
        stats.report();
    }

    if search.matched() {
        Ok(SearchOutcome::Matched {
            iterations: search.iterations(),
        })
    } else {
        Ok(SearchOutcome::Exhausted {
            iterations: search.iterations(),
            best_score: search.best_score(),
        })
    }
}
