//! Continue/close verdict parsing.

/// The host's decision at a round boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Close,
}

impl Verdict {
    /// Parse a continue/close response.
    ///
    /// Only an exact, case-insensitive `CONTINUE` (surrounding whitespace
    /// ignored) continues the debate; anything else closes it. Case folding
    /// is Unicode-aware.
    pub fn parse(response: &str) -> Verdict {
        if response.trim().to_uppercase() == "CONTINUE" {
            Verdict::Continue
        } else {
            Verdict::Close
        }
    }

    pub fn should_continue(&self) -> bool {
        matches!(self, Verdict::Continue)
    }
}
