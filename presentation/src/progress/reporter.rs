//! Progress reporting while a debate runs

use agora_application::ports::progress::DebateProgressNotifier;
use agora_domain::{Action, AgentResponse, DebateStatus, PersonaProfile};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner per turn, cleared once the persona has spoken
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
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn action_display_name(action: Action) -> &'static str {
        match action {
            Action::Initialize => "Opening the floor",
            Action::Respond => "Next speaker",
            Action::FactCheck => "Fact-checking",
            Action::Summarize => "Summarizing",
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_turn_start(&self, action: Action, debate_id: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::action_display_name(action));
        pb.set_message(format!("debate {}", debate_id));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_turn_complete(&self, speaker: &PersonaProfile, response: &AgentResponse) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_with_message(format!(
                "{} {} ({} words)",
                "v".green(),
                speaker.name,
                response.metadata.word_count
            ));
        }
    }

    fn on_turn_failed(&self, action: Action, error: &str) {
        if let Some(pb) = self.take_spinner() {
            pb.abandon_with_message(format!("{} {}: {}", "x".red(), action, error));
        }
    }

    fn on_status_change(&self, _from: DebateStatus, to: DebateStatus) {
        eprintln!("{} {}", "->".cyan(), to.as_str().bold());
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_turn_start(&self, action: Action, _debate_id: &str) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::action_display_name(action).bold()
        );
    }

    fn on_turn_complete(&self, speaker: &PersonaProfile, response: &AgentResponse) {
        eprintln!(
            "  {} {} ({} words)",
            "v".green(),
            speaker.name,
            response.metadata.word_count
        );
    }

    fn on_turn_failed(&self, action: Action, error: &str) {
        eprintln!("  {} {} failed: {}", "x".red(), action, error);
    }
}
