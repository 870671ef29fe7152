//! Debate session aggregate

use super::action::{Action, NextAction};
use super::message::DebateMessage;
use super::persona::Persona;
use super::position::DebaterPositions;
use super::response::AgentResponse;
use super::status::DebateStatus;
use super::transcript;
use crate::core::error::DomainError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One active debate (Aggregate Root)
///
/// All mutation goes through [`DebateSession::record_turn`], which applies
/// an utterance to a snapshot and yields the next snapshot. Each successful
/// call bumps `version`, which stores use for conditional writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateSession {
    id: String,
    channel_id: String,
    proposition: String,
    status: DebateStatus,
    current_round: u32,
    max_rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    debater_positions: Option<DebaterPositions>,
    #[serde(default)]
    messages: Vec<DebateMessage>,
    #[serde(default)]
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl DebateSession {
    /// Create a session in `initializing` status.
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        proposition: impl Into<String>,
        max_rounds: u32,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let proposition = proposition.into().trim().to_string();
        if proposition.is_empty() {
            return Err(DomainError::EmptyProposition);
        }

        Ok(Self {
            id: id.into(),
            channel_id: channel_id.into(),
            proposition,
            status: DebateStatus::Initializing,
            current_round: 0,
            max_rounds,
            debater_positions: None,
            messages: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn proposition(&self) -> &str {
        &self.proposition
    }

    pub fn status(&self) -> DebateStatus {
        self.status
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn debater_positions(&self) -> Option<DebaterPositions> {
        self.debater_positions
    }

    pub fn messages(&self) -> &[DebateMessage] {
        &self.messages
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Action the session needs next, `None` once completed
    pub fn next_action(&self) -> Option<Action> {
        match self.status {
            DebateStatus::Initializing => Some(Action::Initialize),
            DebateStatus::Opening | DebateStatus::Debating | DebateStatus::Closing => {
                Some(Action::Respond)
            }
            DebateStatus::FactChecking => Some(Action::FactCheck),
            DebateStatus::Summarizing => Some(Action::Summarize),
            DebateStatus::Completed => None,
        }
    }

    /// Sequence number the next message will carry
    pub fn next_sequence(&self) -> u64 {
        transcript::next_sequence(&self.messages)
    }

    /// Attach the chat-surface id to an already recorded message.
    pub fn mark_posted(&mut self, sequence: u64, chat_ts: impl Into<String>) -> bool {
        match self.messages.iter_mut().find(|m| m.sequence == sequence) {
            Some(message) => {
                message.chat_ts = Some(chat_ts.into());
                true
            }
            None => false,
        }
    }

    /// Apply one utterance to the session.
    ///
    /// Appends the message with the next sequence number, then advances
    /// status and round. On error the session is left unchanged.
    pub fn record_turn(
        &mut self,
        response: &AgentResponse,
        now: DateTime<Utc>,
    ) -> Result<&DebateMessage, DomainError> {
        let persona = response.persona;
        let (next_status, completes_round) = self.plan_transition(response)?;

        if persona == Persona::Orchestrator && self.status == DebateStatus::Initializing {
            let positions = response
                .metadata
                .debater_positions
                .ok_or(DomainError::PositionsMissing)?;
            if self.debater_positions.is_some() {
                return Err(DomainError::PositionsAlreadyAssigned);
            }
            self.debater_positions = Some(positions);
        }

        let message = DebateMessage::new(
            self.id.clone(),
            self.next_sequence(),
            persona,
            response.content.clone(),
            now,
        );
        self.messages.push(message);

        if completes_round {
            self.current_round += 1;
        }
        self.status = next_status;
        self.updated_at = now;
        self.version += 1;

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Work out the status after `response` without mutating anything.
    ///
    /// Returns the next status and whether the utterance completes a round.
    fn plan_transition(
        &self,
        response: &AgentResponse,
    ) -> Result<(DebateStatus, bool), DomainError> {
        let persona = response.persona;
        let status = self.status;

        if status.is_terminal() {
            return Err(DomainError::DebateCompleted(self.id.clone()));
        }

        if persona.is_debater()
            && transcript::debater_messages(&self.messages)
                .last()
                .is_some_and(|m| m.persona == persona)
        {
            return Err(DomainError::AlternationViolated(persona));
        }

        let unexpected = || DomainError::UnexpectedSpeaker { persona, status };

        let planned = match (status, persona) {
            (DebateStatus::Initializing, Persona::Orchestrator) => (DebateStatus::Opening, false),
            (_, Persona::DebaterA) if status.is_exchange() => (status, false),
            (_, Persona::DebaterB) if status.is_exchange() => (DebateStatus::Debating, true),
            (_, Persona::Orchestrator) if status.is_exchange() => {
                let after_round = transcript::last_persona(&self.messages) == Some(Persona::DebaterB);
                if response.next_action != Some(NextAction::ClosingStatements) || !after_round {
                    return Err(unexpected());
                }
                (DebateStatus::Closing, false)
            }
            (DebateStatus::Closing, Persona::DebaterA) => (status, false),
            (DebateStatus::Closing, Persona::DebaterB) => (DebateStatus::FactChecking, false),
            (DebateStatus::FactChecking, Persona::FactChecker) => (DebateStatus::Summarizing, false),
            (DebateStatus::Summarizing, Persona::Summariser) => (DebateStatus::Completed, false),
            _ => return Err(unexpected()),
        };

        // Staying in place is allowed within the exchange and closing phases;
        // any change of status must move forward.
        if planned.0 != status && !status.can_transition_to(planned.0) {
            return Err(DomainError::InvalidTransition {
                from: status,
                to: planned.0,
            });
        }

        Ok(planned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::position::Position;

    fn session() -> DebateSession {
        DebateSession::new(
            "1700000000.000100",
            "C123",
            "Remote work improves productivity",
            8,
            Duration::days(30),
            Utc::now(),
        )
        .unwrap()
    }

    fn say(persona: Persona, next_action: Option<NextAction>) -> AgentResponse {
        AgentResponse::new(persona, persona.as_str(), "some words here", next_action)
    }

    fn welcome() -> AgentResponse {
        say(Persona::Orchestrator, Some(NextAction::Continue))
            .with_positions(DebaterPositions::new(Position::Against))
    }

    #[test]
    fn test_new_rejects_blank_proposition() {
        let result = DebateSession::new("T", "C", "   ", 8, Duration::days(30), Utc::now());
        assert_eq!(result.unwrap_err(), DomainError::EmptyProposition);
    }

    #[test]
    fn test_expiry_is_ttl_after_creation() {
        let now = Utc::now();
        let session =
            DebateSession::new("T", "C", "Tea beats coffee", 8, Duration::days(30), now).unwrap();
        assert_eq!(session.expires_at(), now + Duration::days(30));
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::days(31)));
    }

    #[test]
    fn test_initialize_assigns_positions_and_opens() {
        let mut session = session();
        assert_eq!(session.next_action(), Some(Action::Initialize));
        session.record_turn(&welcome(), Utc::now()).unwrap();
        assert_eq!(session.status(), DebateStatus::Opening);
        let positions = session.debater_positions().unwrap();
        assert_eq!(positions.debater_a(), Position::Against);
        assert_eq!(positions.debater_b(), Position::For);
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_initialize_without_positions_fails_cleanly() {
        let mut session = session();
        let before = session.clone();
        let err = session
            .record_turn(&say(Persona::Orchestrator, None), Utc::now())
            .unwrap_err();
        assert_eq!(err, DomainError::PositionsMissing);
        assert_eq!(session, before);
    }

    #[test]
    fn test_round_increments_after_debater_b() {
        let mut session = session();
        session.record_turn(&welcome(), Utc::now()).unwrap();
        session
            .record_turn(&say(Persona::DebaterA, Some(NextAction::Continue)), Utc::now())
            .unwrap();
        assert_eq!(session.current_round(), 0);
        session
            .record_turn(&say(Persona::DebaterB, Some(NextAction::Continue)), Utc::now())
            .unwrap();
        assert_eq!(session.current_round(), 1);
        assert_eq!(session.status(), DebateStatus::Debating);
        let sequences: Vec<u64> = session.messages().iter().map(|m| m.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_debater_cannot_speak_twice() {
        let mut session = session();
        session.record_turn(&welcome(), Utc::now()).unwrap();
        session
            .record_turn(&say(Persona::DebaterA, None), Utc::now())
            .unwrap();
        let err = session
            .record_turn(&say(Persona::DebaterA, None), Utc::now())
            .unwrap_err();
        assert_eq!(err, DomainError::AlternationViolated(Persona::DebaterA));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_full_lifecycle_reaches_completed() {
        let mut session = session();
        session.record_turn(&welcome(), Utc::now()).unwrap();
        session.record_turn(&say(Persona::DebaterA, None), Utc::now()).unwrap();
        session.record_turn(&say(Persona::DebaterB, None), Utc::now()).unwrap();
        session
            .record_turn(
                &say(Persona::Orchestrator, Some(NextAction::ClosingStatements)),
                Utc::now(),
            )
            .unwrap();
        assert_eq!(session.status(), DebateStatus::Closing);
        assert_eq!(session.next_action(), Some(Action::Respond));

        session.record_turn(&say(Persona::DebaterA, None), Utc::now()).unwrap();
        assert_eq!(session.status(), DebateStatus::Closing);
        session.record_turn(&say(Persona::DebaterB, None), Utc::now()).unwrap();
        assert_eq!(session.status(), DebateStatus::FactChecking);
        assert_eq!(session.current_round(), 1);

        session
            .record_turn(&say(Persona::FactChecker, Some(NextAction::Summarize)), Utc::now())
            .unwrap();
        assert_eq!(session.next_action(), Some(Action::Summarize));
        session
            .record_turn(&say(Persona::Summariser, Some(NextAction::Complete)), Utc::now())
            .unwrap();
        assert_eq!(session.status(), DebateStatus::Completed);
        assert_eq!(session.next_action(), None);
        assert!(transcript::debaters_alternate(session.messages()));

        let err = session
            .record_turn(&say(Persona::Summariser, None), Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::DebateCompleted(_)));
    }

    #[test]
    fn test_closing_call_requires_round_boundary() {
        let mut session = session();
        session.record_turn(&welcome(), Utc::now()).unwrap();
        session.record_turn(&say(Persona::DebaterA, None), Utc::now()).unwrap();
        let err = session
            .record_turn(
                &say(Persona::Orchestrator, Some(NextAction::ClosingStatements)),
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedSpeaker { .. }));
    }

    #[test]
    fn test_fact_checker_out_of_phase() {
        let mut session = session();
        let err = session
            .record_turn(&say(Persona::FactChecker, None), Utc::now())
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnexpectedSpeaker {
                persona: Persona::FactChecker,
                status: DebateStatus::Initializing,
            }
        );
    }

    #[test]
    fn test_debater_before_welcome_is_rejected() {
        let mut session = session();
        let err = session
            .record_turn(&say(Persona::DebaterA, Some(NextAction::Continue)), Utc::now())
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnexpectedSpeaker {
                persona: Persona::DebaterA,
                status: DebateStatus::Initializing,
            }
        );
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_serde_roundtrip_preserves_snapshot() {
        let mut session = session();
        session.record_turn(&welcome(), Utc::now()).unwrap();
        let json = serde_json::to_string(&session).unwrap();
        let back: DebateSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_mark_posted() {
        let mut session = session();
        session.record_turn(&welcome(), Utc::now()).unwrap();
        assert!(session.mark_posted(1, "1700000001.000200"));
        assert!(!session.mark_posted(9, "x"));
        assert_eq!(
            session.messages()[0].chat_ts.as_deref(),
            Some("1700000001.000200")
        );
    }
}
