//! Prompt templates for the debate flow

use crate::config::{DebateRules, PersonaProfile};
use crate::debate::{DebaterPositions, Position};

/// Templates for generating prompts at each turn
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    // ==================== System prompts ====================

    /// System prompt for the host
    pub fn orchestrator_system(profile: &PersonaProfile) -> String {
        format!(
            r#"You are {name}, the host of a formal debate held in a team chat.
Your personality: {traits}.
You welcome participants, explain the rules, keep order and decide when the
debate has run its course. You never argue either side yourself.
Use British English."#,
            name = profile.name,
            traits = profile.personality,
        )
    }

    /// System prompt for a debater holding `position` on `proposition`
    pub fn debater_system(
        profile: &PersonaProfile,
        position: Position,
        proposition: &str,
    ) -> String {
        format!(
            r#"You are {name}, a debater.
Your personality: {traits}.
The proposition is: "{proposition}"
You argue {position} the proposition, whatever your private view.
Engage directly with your opponent's strongest points, support claims with
evidence and stay within the word limit you are given.
Use British English."#,
            name = profile.name,
            traits = profile.personality,
            position = position.label(),
        )
    }

    /// System prompt for the fact-checker
    pub fn fact_checker_system(profile: &PersonaProfile) -> String {
        format!(
            r#"You are {name}, the debate's fact-checker.
Your personality: {traits}.
You verify factual claims only. Opinions, values and predictions are out of
scope. Classify each problematic claim as FALSE, MISLEADING or UNVERIFIABLE
and cite your reasoning.
Use British English."#,
            name = profile.name,
            traits = profile.personality,
        )
    }

    /// System prompt for the summariser
    pub fn summariser_system(profile: &PersonaProfile) -> String {
        format!(
            r#"You are {name}, the debate's summariser.
Your personality: {traits}.
Your summary always has four parts:
1. Main arguments FOR the proposition
2. Main arguments AGAINST the proposition
3. Analysis of argument quality and strength
4. Summary opinion focused on truth-seeking
Favour intellectual honesty over politeness.
Use British English."#,
            name = profile.name,
            traits = profile.personality,
        )
    }

    // ==================== Host prompts ====================

    /// Welcome message introducing the proposition, positions and rules
    pub fn welcome(
        proposition: &str,
        positions: DebaterPositions,
        debater_a: &PersonaProfile,
        debater_b: &PersonaProfile,
        rules: &DebateRules,
    ) -> String {
        format!(
            r#"A new debate has been initiated with the following proposition:

"{proposition}"

Please provide a warm welcome to participants and introduce the debate with the following details:
- Proposition: "{proposition}"
- Debater positions:
  - {a_name}: {a_position} ({a_traits})
  - {b_name}: {b_position} ({b_traits})
- Rules:
  - Opening statements: {opening} words maximum
  - Follow-up statements: {followup} words maximum
  - Maximum {rounds} rounds

Set the stage for an engaging debate. Maintain your welcoming, diplomatic persona."#,
            a_name = debater_a.name,
            a_position = positions.debater_a().label(),
            a_traits = debater_a.personality,
            b_name = debater_b.name,
            b_position = positions.debater_b().label(),
            b_traits = debater_b.personality,
            opening = rules.opening_word_limit,
            followup = rules.followup_word_limit,
            rounds = rules.max_rounds,
        )
    }

    /// Continue-or-close query over the most recent exchanges.
    ///
    /// `recent` holds `(speaker, content)` pairs, oldest first.
    pub fn continue_check(recent: &[(String, String)], round: u32, max_rounds: u32) -> String {
        let exchanges = recent
            .iter()
            .enumerate()
            .map(|(i, (speaker, content))| format!("{}. {}: {}", i + 1, speaker, content))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"You are monitoring a debate. Here are the last few exchanges:

{exchanges}

Current round: {round}/{max_rounds}

Determine if the debate should continue or if it's time to call for closing statements.
Call for closing statements if:
- Arguments are becoming circular
- Debaters are repeating themselves
- An impasse has been reached
- We're approaching max rounds (within 1-2 rounds)

Respond with ONLY "CONTINUE" or "CLOSE"."#
        )
    }

    /// Solicitation of closing statements
    pub fn closing_call(closing_word_limit: u32) -> String {
        format!(
            r#"The debate has reached a point where closing statements are appropriate.

Please provide a message that:
1. Acknowledges the substantive arguments made by both sides
2. Calls for closing statements from each debater
3. Reminds them of the {closing_word_limit}-word limit for closing statements
4. Maintains your warm, diplomatic tone"#
        )
    }

    // ==================== Debater prompts ====================

    pub fn opening_statement(position: Position, word_limit: u32) -> String {
        format!(
            "Provide your opening statement arguing {} the proposition. Maximum {} words.",
            position.label(),
            word_limit
        )
    }

    pub fn rebuttal(history: &str, word_limit: u32) -> String {
        format!(
            r#"Previous debate exchanges:
{history}

Provide your response to your opponent's arguments. Maximum {word_limit} words."#
        )
    }

    pub fn closing_statement(history: &str, position: Position, word_limit: u32) -> String {
        format!(
            r#"Previous debate exchanges:
{history}

The host has called for closing statements. Summarise your case {position} the
proposition and answer your opponent's strongest point. Do not introduce new
arguments. Maximum {word_limit} words."#,
            position = position.label(),
        )
    }

    // ==================== Review prompts ====================

    /// Fact-check request over every labelled debater statement
    pub fn fact_check(statements: &str, signature: &str) -> String {
        format!(
            r#"Review the following debate statements and identify any factual claims that are:
1. FALSE (demonstrably incorrect)
2. MISLEADING (technically true but deceptive)
3. UNVERIFIABLE (cannot be confirmed with available sources)

Debate statements:
{statements}

Provide your fact-check report.
Only report problematic claims - if everything is accurate, state that briefly.

Remember to:
- Be concise and bureaucratic in tone
- Provide citations where you can
- Sign with "-{signature}""#
        )
    }

    /// Final summary request
    pub fn summary(
        proposition: &str,
        transcript: &str,
        fact_check: Option<&str>,
        signature: &str,
    ) -> String {
        let fact_check = fact_check
            .map(|report| format!("\n\nFact-check report:\n{report}"))
            .unwrap_or_default();

        format!(
            r#"Proposition: "{proposition}"

Debate transcript:
{transcript}{fact_check}

Provide a comprehensive summary following the format specified in your system prompt:
1. Main arguments FOR the proposition
2. Main arguments AGAINST the proposition
3. Analysis of argument quality and strength
4. Summary opinion focused on truth-seeking

Remember to:
- Be rigorously impartial
- Focus on intellectual honesty over politeness
- Exclude claims the fact-check found to be false
- Sign with "-{signature}""#
        )
    }
}
