//! Structured reporting events
//!
//! Every activity an actor starts is reported as an
//! `ActivityStarts`/`ActivityFinished` pair sharing a correlation id.
//! Reporters are pure observers; reporting never alters activity semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and description of one reported activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    /// Correlation id shared by the start/finish pair
    pub id: Uuid,

    /// Name of the performing actor
    pub actor: String,

    /// Rendered description, with `#actor` already substituted
    pub description: String,

    /// When the event was emitted (UTC)
    pub timestamp: DateTime<Utc>,
}

impl ActivityDetails {
    /// Stamp fresh details for an activity that is about to start.
    pub fn new(actor: &str, description: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor: actor.to_string(),
            description: description.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// The same activity identity with the timestamp moved to now.
    pub fn stamped_now(&self) -> Self {
        Self {
            timestamp: Utc::now(),
            ..self.clone()
        }
    }
}

/// How a reported activity ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// The activity completed
    Success,
    /// The activity rejected
    Failure {
        /// The failure message, original driver/resolution text preserved
        error: String,
    },
}

/// A reported stage event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StageEvent {
    /// An actor is about to perform an activity
    ActivityStarts {
        /// Activity identity and description
        details: ActivityDetails,
    },

    /// An activity finished, successfully or not
    ActivityFinished {
        /// Activity identity and description
        details: ActivityDetails,
        /// How it ended
        outcome: Outcome,
    },
}

impl StageEvent {
    /// The details carried by this event.
    pub fn details(&self) -> &ActivityDetails {
        match self {
            Self::ActivityStarts { details } | Self::ActivityFinished { details, .. } => details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_finish_share_the_correlation_id() {
        let details = ActivityDetails::new("Nick", "Nick clicks on the trigger button");
        let finished = details.stamped_now();
        assert_eq!(details.id, finished.id);
        assert_eq!(details.description, finished.description);
    }

    #[test]
    fn events_round_trip_through_json() {
        let event = StageEvent::ActivityFinished {
            details: ActivityDetails::new("Nick", "Nick selects value 'FR' from the country selector"),
            outcome: Outcome::Failure {
                error: "browser session error: lost".to_string(),
            },
        };

        let encoded = serde_json::to_string(&event).unwrap();
        let decoded: StageEvent = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, event);
    }
}
