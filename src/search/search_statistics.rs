use crate::search::{Cost, HeuristicValue};
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const PROGRESS_LOG_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes evaluated by a heuristic
    evaluated_nodes: usize,
    /// Number of unique nodes generated
    generated_nodes: usize,
    /// Number of nodes whose path cost was lowered after they were opened
    reopened_nodes: usize,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Cost of the plan found, if any
    plan_cost: Option<Cost>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Set by [`SearchStatistics::finalise_search`]
    search_duration: Option<Duration>,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            plan_cost: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            debug!(best_heuristic_value = self.best_heuristic_value.into_inner());
        }
    }

    pub fn register_plan_cost(&mut self, cost: Cost) {
        self.plan_cost = Some(cost);
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn plan_cost(&self) -> Option<Cost> {
        self.plan_cost
    }

    /// Wall-clock time of the search so far, or of the whole search once it
    /// has been finalised.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > PROGRESS_LOG_INTERVAL {
            self.last_log_time = Instant::now();
            info!(
                expanded_nodes = self.expanded_nodes,
                generated_nodes = self.generated_nodes,
                elapsed = %humantime::format_duration(self.search_start_time.elapsed()),
                "search progress"
            );
        }
    }

    /// Stops the clock and logs the final counters.
    pub fn finalise_search(&mut self) {
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            plan_cost = ?self.plan_cost,
            search_duration = duration.as_secs_f64(),
            "search finished"
        );
    }
}
