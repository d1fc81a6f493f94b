//! Formats PASS/FAIL output and prints a summary.

use std::process::ExitCode;

use crate::scenario::StepResult;

#[derive(Default)]
pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &StepResult) {
        if result.passed() {
            self.passed += 1;
            println!("PASS  {} ({:?})", result.name, result.elapsed);
            return;
        }

        self.failed += 1;
        println!("FAIL  {} ({:?})", result.name, result.elapsed);
        if let Some(err) = &result.error {
            println!("        error: {err}");
            return;
        }
        if let Some(actual) = result.actual_status {
            if actual != result.expected_status {
                println!(
                    "        {} {} → expected {}, got {}",
                    result.method, result.path, result.expected_status, actual
                );
            }
        }
        for problem in &result.problems {
            println!("        {problem}");
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Exit status for the process: success only when every step passed.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
