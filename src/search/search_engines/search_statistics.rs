use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: u64,
    /// Number of nodes generated, including the root and rejected duplicates
    generated_nodes: u64,
    /// Number of generated nodes rejected as duplicates
    duplicate_nodes: u64,
    /// Largest number of nodes in the frontier at any time
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            duplicate_nodes: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_duplicate_nodes(&mut self) {
        self.duplicate_nodes += 1;
    }

    pub fn record_frontier_size(&mut self, frontier_size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(frontier_size);
    }

    pub fn get_expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn get_generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn get_duplicate_nodes(&self) -> u64 {
        self.duplicate_nodes
    }

    pub fn get_peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    pub fn get_search_duration(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            duplicate_nodes = self.duplicate_nodes,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        // Sub-millisecond precision only adds noise to the log
        let duration = Duration::from_millis(self.get_search_duration().as_millis() as u64);
        info!(search_duration = %humantime::format_duration(duration));
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
