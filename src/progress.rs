use crate::ui;
use std::time::{Duration, Instant};

/// Step tracker for verbose runs; silent unless enabled
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
    enabled: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker with the given operation name
    pub fn new(operation_name: &str, enabled: bool) -> Self {
        if enabled {
            ui::section_header(operation_name);
        }
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
            enabled,
        }
    }

    /// Add steps to the tracker
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Start the next step
    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            if self.enabled {
                ui::status_message(step);
            }
        }
    }

    /// Complete the current step
    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            if self.enabled {
                ui::success_message(step);
            }
            self.current_step += 1;
        }
    }

    /// Complete the operation
    pub fn complete(&self) {
        if self.enabled {
            ui::success_message(&format!(
                "{} completed in {}",
                self.operation_name,
                Self::format_duration(self.start_time.elapsed())
            ));
        }
    }

    /// Format a duration in a human-readable way
    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            return format!("{millis} ms");
        }

        let seconds = duration.as_secs();
        if seconds < 60 {
            format!("{seconds} seconds")
        } else {
            format!(
                "{} minutes {seconds_remainder} seconds",
                seconds / 60,
                seconds_remainder = seconds % 60
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(ProgressTracker::format_duration(Duration::from_millis(250)), "250 ms");
        assert_eq!(ProgressTracker::format_duration(Duration::from_secs(42)), "42 seconds");
        assert_eq!(
            ProgressTracker::format_duration(Duration::from_secs(125)),
            "2 minutes 5 seconds"
        );
    }

    #[test]
    fn test_steps_advance_when_disabled() {
        let mut progress = ProgressTracker::new("Test", false)
            .with_steps(vec!["one".to_string(), "two".to_string()]);
        progress.start_step();
        progress.complete_step();
        progress.complete_step();
        progress.complete_step();
        assert_eq!(progress.current_step, 2);
    }
}
