//! Lead pipeline state machine
//!
//! A contractor-side lead moves through a fixed transition graph instead of
//! a free-form status picker:
//!
//! ```text
//! new -> responded | lost
//! responded -> negotiating | lost
//! negotiating -> won | lost
//! ```
//!
//! `won` and `lost` are terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage of a lead in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    #[default]
    New,
    Responded,
    Negotiating,
    Won,
    Lost,
}

impl std::fmt::Display for LeadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStage::New => write!(f, "new"),
            LeadStage::Responded => write!(f, "responded"),
            LeadStage::Negotiating => write!(f, "negotiating"),
            LeadStage::Won => write!(f, "won"),
            LeadStage::Lost => write!(f, "lost"),
        }
    }
}

impl LeadStage {
    /// Check if a stage transition is valid
    pub fn can_transition(self, to: LeadStage) -> bool {
        matches!(
            (self, to),
            (LeadStage::New, LeadStage::Responded)
                | (LeadStage::New, LeadStage::Lost)
                | (LeadStage::Responded, LeadStage::Negotiating)
                | (LeadStage::Responded, LeadStage::Lost)
                | (LeadStage::Negotiating, LeadStage::Won)
                | (LeadStage::Negotiating, LeadStage::Lost)
        )
    }

    /// Stages reachable from the current stage
    pub fn allowed_transitions(self) -> Vec<LeadStage> {
        match self {
            LeadStage::New => vec![LeadStage::Responded, LeadStage::Lost],
            LeadStage::Responded => vec![LeadStage::Negotiating, LeadStage::Lost],
            LeadStage::Negotiating => vec![LeadStage::Won, LeadStage::Lost],
            LeadStage::Won | LeadStage::Lost => vec![],
        }
    }

    /// Whether the lead can no longer move
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

/// Errors from lead stage transitions
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("invalid lead transition: {from} -> {to}")]
    InvalidTransition { from: LeadStage, to: LeadStage },
}

/// A contractor-side lead on a posted job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier within the session's lead list
    pub id: u32,

    /// Short description of the job
    pub title: String,

    /// Display name of the posting customer
    pub client: String,

    /// Current pipeline stage
    #[serde(default)]
    pub stage: LeadStage,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Timestamp of the last stage change
    pub updated: DateTime<Utc>,
}

impl Lead {
    /// Create a new lead in the `new` stage
    pub fn new(id: u32, title: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            client: client.into(),
            stage: LeadStage::New,
            created: now,
            updated: now,
        }
    }

    /// Move the lead to a new stage, enforcing the transition table
    pub fn advance(&mut self, to: LeadStage) -> Result<(), LeadError> {
        if !self.stage.can_transition(to) {
            return Err(LeadError::InvalidTransition {
                from: self.stage,
                to,
            });
        }
        self.stage = to;
        self.updated = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(LeadStage::New.can_transition(LeadStage::Responded));
        assert!(LeadStage::New.can_transition(LeadStage::Lost));
        assert!(LeadStage::Responded.can_transition(LeadStage::Negotiating));
        assert!(LeadStage::Responded.can_transition(LeadStage::Lost));
        assert!(LeadStage::Negotiating.can_transition(LeadStage::Won));
        assert!(LeadStage::Negotiating.can_transition(LeadStage::Lost));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!LeadStage::New.can_transition(LeadStage::Negotiating));
        assert!(!LeadStage::New.can_transition(LeadStage::Won));
        assert!(!LeadStage::Responded.can_transition(LeadStage::Won));
        assert!(!LeadStage::Won.can_transition(LeadStage::New));
        assert!(!LeadStage::Lost.can_transition(LeadStage::Responded));
        // No self-loops
        assert!(!LeadStage::New.can_transition(LeadStage::New));
    }

    #[test]
    fn test_allowed_transitions() {
        assert_eq!(
            LeadStage::New.allowed_transitions(),
            vec![LeadStage::Responded, LeadStage::Lost]
        );
        assert_eq!(
            LeadStage::Responded.allowed_transitions(),
            vec![LeadStage::Negotiating, LeadStage::Lost]
        );
        assert_eq!(
            LeadStage::Negotiating.allowed_transitions(),
            vec![LeadStage::Won, LeadStage::Lost]
        );
        assert!(LeadStage::Won.allowed_transitions().is_empty());
        assert!(LeadStage::Lost.allowed_transitions().is_empty());
    }

    #[test]
    fn test_terminal_stages() {
        assert!(LeadStage::Won.is_terminal());
        assert!(LeadStage::Lost.is_terminal());
        assert!(!LeadStage::New.is_terminal());
        assert!(!LeadStage::Negotiating.is_terminal());
    }

    #[test]
    fn test_lead_advance_happy_path() {
        let mut lead = Lead::new(1, "Logo redesign", "Aynur M.");
        assert_eq!(lead.stage, LeadStage::New);

        lead.advance(LeadStage::Responded).unwrap();
        lead.advance(LeadStage::Negotiating).unwrap();
        lead.advance(LeadStage::Won).unwrap();
        assert_eq!(lead.stage, LeadStage::Won);
    }

    #[test]
    fn test_lead_advance_rejects_skips() {
        let mut lead = Lead::new(2, "Kitchen renovation quote", "Rustam K.");
        let err = lead.advance(LeadStage::Won).unwrap_err();
        assert!(matches!(
            err,
            LeadError::InvalidTransition {
                from: LeadStage::New,
                to: LeadStage::Won,
            }
        ));
        // Stage is untouched after a rejected transition
        assert_eq!(lead.stage, LeadStage::New);
    }

    #[test]
    fn test_lead_terminal_stage_is_frozen() {
        let mut lead = Lead::new(3, "Wedding photography", "Leyla H.");
        lead.advance(LeadStage::Lost).unwrap();
        assert!(lead.advance(LeadStage::Responded).is_err());
        assert!(lead.advance(LeadStage::Won).is_err());
    }
}
