//! Console output formatter for finished debates

use agora_domain::{
    DebateMessage, DebateSession, DebateStatus, Persona, PersonaRoster, transcript, truncate,
};
use colored::Colorize;

const LISTING_PROPOSITION_LEN: usize = 60;

/// Formats debate sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete transcript
    pub fn format(session: &DebateSession, roster: &PersonaRoster) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agora Debate"));
        output.push('\n');
        output.push_str(&Self::preamble(session, roster));

        output.push_str(&Self::section_header("Transcript"));
        for message in session.messages() {
            output.push_str(&Self::format_message(message, roster));
        }

        output.push_str(&Self::outcome(session));
        output.push_str(&Self::footer());

        output
    }

    /// Format the summariser's verdict only (concise output)
    pub fn format_summary(session: &DebateSession, roster: &PersonaRoster) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Agora Verdict ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Proposition:".bold(), session.proposition()));

        match transcript::last_from(session.messages(), Persona::Summariser) {
            Some(summary) => {
                output.push_str(&format!(
                    "{}\n\n",
                    format!("Summary by {}", roster.get(Persona::Summariser).name).dimmed()
                ));
                output.push_str(&summary.content);
                output.push('\n');
            }
            None => {
                output.push_str(&format!(
                    "{} debate is {} after {} round(s)\n",
                    "No summary yet:".yellow(),
                    session.status(),
                    session.current_round()
                ));
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(session: &DebateSession) -> String {
        serde_json::to_string_pretty(session).unwrap_or_else(|_| "{}".to_string())
    }

    /// One transcript entry with the speaker's name and position
    pub fn format_message(message: &DebateMessage, roster: &PersonaRoster) -> String {
        let name = &roster.get(message.persona).name;
        let heading = format!("── {} ({}) ──", name, message.persona);
        let heading = match message.persona {
            Persona::Orchestrator => heading.cyan().bold(),
            Persona::DebaterA => heading.green().bold(),
            Persona::DebaterB => heading.magenta().bold(),
            Persona::FactChecker | Persona::Summariser => heading.yellow().bold(),
        };
        format!(
            "\n{}\n{}\n{}\n",
            heading,
            message.content,
            format!("{} words", message.word_count).dimmed()
        )
    }

    /// One-line list entry for stored debates
    pub fn format_listing(session: &DebateSession) -> String {
        format!(
            "{}  {:<16} round {}/{}  {}",
            session.id().bold(),
            Self::status_label(session.status()),
            session.current_round(),
            session.max_rounds(),
            truncate(session.proposition(), LISTING_PROPOSITION_LEN)
        )
    }

    fn preamble(session: &DebateSession, roster: &PersonaRoster) -> String {
        let mut output = format!(
            "{} {}\n",
            "Proposition:".cyan().bold(),
            session.proposition()
        );

        if let Some(positions) = session.debater_positions() {
            for persona in [Persona::DebaterA, Persona::DebaterB] {
                if let Some(position) = positions.position_of(persona) {
                    output.push_str(&format!(
                        "{} {} argues {}\n",
                        "Debater:".cyan().bold(),
                        roster.get(persona).name,
                        position.label()
                    ));
                }
            }
        }

        output.push_str(&format!(
            "{} {}\n",
            "Debate id:".dimmed(),
            session.id().dimmed()
        ));
        output
    }

    fn outcome(session: &DebateSession) -> String {
        format!(
            "\n{} {} after {} of {} round(s), {} message(s)\n",
            "Status:".cyan().bold(),
            Self::status_label(session.status()),
            session.current_round(),
            session.max_rounds(),
            session.messages().len()
        )
    }

    fn status_label(status: DebateStatus) -> String {
        match status {
            DebateStatus::Completed => status.as_str().green().to_string(),
            _ => status.as_str().yellow().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
