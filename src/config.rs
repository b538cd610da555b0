/// Runtime parameters for a search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Goal string the search converges towards.
    pub goal: String,
    /// Stop after this many candidates if no exact match appears. `None`
    /// leaves the search unbounded.
    pub max_iterations: Option<u64>,
    /// Emit a status line to stderr every this many candidates. `0` disables
    /// status output.
    pub status_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            goal: "he".to_string(),
            max_iterations: None,
            status_interval: 100_000,
        }
    }
}
