//! Spinner shown while a request to the generation service is in flight

use colored::Colorize;
use dslgen_application::ports::progress::{ProgressNotifier, RequestKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports request progress with an indicatif spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finished_message(request: RequestKind, success: bool) -> String {
        let label = match request {
            RequestKind::Examples(kind) => format!("Example {}", kind.as_str()),
            RequestKind::Generation => "Generation".to_string(),
        };
        if success {
            format!("{} {}", "v".green(), label)
        } else {
            format!("{} {} failed", "x".red(), label)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, request: RequestKind) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(request.description());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_request_complete(&self, request: RequestKind, success: bool) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            match request {
                // Example fetches are incidental; only keep a line when they failed
                RequestKind::Examples(_) if success => pb.finish_and_clear(),
                _ => pb.finish_with_message(Self::finished_message(request, success)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dslgen_domain::ExampleKind;

    #[test]
    fn test_start_and_complete_without_terminal() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(RequestKind::Generation);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_request_complete(RequestKind::Generation, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_finished_message() {
        let failed = ProgressReporter::finished_message(
            RequestKind::Examples(ExampleKind::Relationships),
            false,
        );
        assert!(failed.contains("Example relationships failed"));
        assert!(ProgressReporter::finished_message(RequestKind::Generation, true).contains("Generation"));
    }
}
