//! Read-only queries over an ordered transcript slice.

use super::message::DebateMessage;
use super::persona::Persona;

/// Persona of the most recent message
pub fn last_persona(messages: &[DebateMessage]) -> Option<Persona> {
    messages.last().map(|m| m.persona)
}

/// Whether `persona` has spoken at least once
pub fn has_spoken(messages: &[DebateMessage], persona: Persona) -> bool {
    messages.iter().any(|m| m.persona == persona)
}

/// Messages authored by either debater, in order
pub fn debater_messages(messages: &[DebateMessage]) -> impl Iterator<Item = &DebateMessage> {
    messages.iter().filter(|m| m.persona.is_debater())
}

/// First message from `persona`
pub fn first_from(messages: &[DebateMessage], persona: Persona) -> Option<&DebateMessage> {
    messages.iter().find(|m| m.persona == persona)
}

/// Most recent message from `persona`
pub fn last_from(messages: &[DebateMessage], persona: Persona) -> Option<&DebateMessage> {
    messages.iter().rev().find(|m| m.persona == persona)
}

/// The last `n` messages (all of them when fewer exist)
pub fn recent(messages: &[DebateMessage], n: usize) -> &[DebateMessage] {
    &messages[messages.len().saturating_sub(n)..]
}

/// Sequence number the next appended message must carry
pub fn next_sequence(messages: &[DebateMessage]) -> u64 {
    messages.last().map(|m| m.sequence + 1).unwrap_or(1)
}

/// Whether debater-authored messages alternate between the two debaters
pub fn debaters_alternate(messages: &[DebateMessage]) -> bool {
    let speakers: Vec<Persona> = debater_messages(messages).map(|m| m.persona).collect();
    speakers.windows(2).all(|pair| pair[0] != pair[1])
}

/// Whether sequence numbers strictly increase
pub fn sequences_increase(messages: &[DebateMessage]) -> bool {
    messages.windows(2).all(|pair| pair[0].sequence < pair[1].sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn msg(sequence: u64, persona: Persona) -> DebateMessage {
        DebateMessage::new("T1", sequence, persona, format!("turn {sequence}"), Utc::now())
    }

    #[test]
    fn test_alternation_ignores_non_debaters() {
        let messages = vec![
            msg(1, Persona::Orchestrator),
            msg(2, Persona::DebaterA),
            msg(3, Persona::DebaterB),
            msg(4, Persona::Orchestrator),
            msg(5, Persona::DebaterA),
        ];
        assert!(debaters_alternate(&messages));
    }

    #[test]
    fn test_alternation_detects_repeat() {
        let messages = vec![
            msg(1, Persona::DebaterA),
            msg(2, Persona::Orchestrator),
            msg(3, Persona::DebaterA),
        ];
        assert!(!debaters_alternate(&messages));
    }

    #[test]
    fn test_recent_and_next_sequence() {
        assert_eq!(next_sequence(&[]), 1);
        let messages: Vec<_> = (1..=6).map(|i| msg(i, Persona::DebaterA)).collect();
        assert_eq!(recent(&messages, 4).len(), 4);
        assert_eq!(recent(&messages, 4)[0].sequence, 3);
        assert_eq!(recent(&messages[..2], 4).len(), 2);
        assert_eq!(next_sequence(&messages), 7);
    }

    #[test]
    fn test_first_and_last_from() {
        let messages = vec![
            msg(1, Persona::Orchestrator),
            msg(2, Persona::DebaterA),
            msg(3, Persona::Orchestrator),
        ];
        assert_eq!(first_from(&messages, Persona::Orchestrator).unwrap().sequence, 1);
        assert_eq!(last_from(&messages, Persona::Orchestrator).unwrap().sequence, 3);
        assert!(last_from(&messages, Persona::Summariser).is_none());
    }
}
