//! Actors: test personas that hold abilities and perform activities
//!
//! An actor is created per test, endowed with abilities, and discarded at
//! test end. Activities for one actor execute strictly in sequence; the whole
//! `attempts_to` call fails fast at the first activity that rejects, with
//! later activities never started.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use super::ability::Ability;
use super::activity::{IntoActivities, Performable, Question};
use super::answerable::Answerable;
use super::description::with_actor_name;
use super::error::{MissingAbilityError, ScreenplayError, ScreenplayResult};
use super::events::{ActivityDetails, Outcome, StageEvent};
use super::reporter::Reporter;

/// A test-DSL persona that holds abilities and performs activities.
pub struct Actor {
    name: String,
    abilities: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    reporters: Vec<Arc<dyn Reporter>>,
}

impl Actor {
    /// Create an actor with the given name and no abilities.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abilities: HashMap::new(),
            reporters: Vec::new(),
        }
    }

    /// The actor's name, as used in descriptions and reported events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endow this actor with an ability.
    ///
    /// At most one instance per concrete ability type; a second `who_can`
    /// with the same type replaces the first.
    pub fn who_can<A: Ability>(mut self, ability: A) -> Self {
        self.abilities.insert(TypeId::of::<A>(), Box::new(ability));
        self
    }

    /// Attach a reporter that observes this actor's activity events.
    pub fn reporting_to(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporters.push(reporter);
        self
    }

    /// Look up an ability by its type.
    ///
    /// Fails with [`MissingAbilityError`] naming the capability when the
    /// actor was never given it.
    pub fn ability<A: Ability>(&self) -> Result<&A, MissingAbilityError> {
        self.abilities
            .get(&TypeId::of::<A>())
            .and_then(|ability| ability.downcast_ref::<A>())
            .ok_or_else(|| MissingAbilityError {
                actor: self.name.clone(),
                ability: A::name(),
            })
    }

    /// Perform the given activities strictly in sequence.
    ///
    /// Execution order is declaration order; the first activity whose
    /// `perform_as` rejects aborts the whole call, and later activities never
    /// start. Each started activity is reported as an
    /// `ActivityStarts`/`ActivityFinished` pair.
    pub async fn attempts_to<A: IntoActivities>(&self, activities: A) -> ScreenplayResult<()> {
        self.perform_each(&activities.into_activities()).await
    }

    /// Answer a single question-or-value.
    ///
    /// Literal values are returned immediately; deferred questions are
    /// delegated to [`Question::answered_by`] with this actor. A rejecting
    /// question is wrapped with its declared description, preserving the
    /// original message.
    pub async fn answer<T>(&self, answerable: &Answerable<T>) -> ScreenplayResult<T>
    where
        T: Clone + Send + Sync,
    {
        match answerable {
            Answerable::Value(value) => Ok(value.clone()),
            Answerable::Question(question) => question.answered_by(self).await.map_err(|source| {
                ScreenplayError::Resolution {
                    description: question.to_string(),
                    source: Box::new(source),
                }
            }),
        }
    }

    /// Answer a concrete question directly.
    pub async fn asks<Q: Question>(&self, question: &Q) -> ScreenplayResult<Q::Answer> {
        question.answered_by(self).await
    }

    pub(crate) async fn perform_each(
        &self,
        activities: &[Box<dyn Performable>],
    ) -> ScreenplayResult<()> {
        for activity in activities {
            self.perform(activity.as_ref()).await?;
        }
        Ok(())
    }

    async fn perform(&self, activity: &dyn Performable) -> ScreenplayResult<()> {
        let description = with_actor_name(&activity.to_string(), &self.name);
        let details = ActivityDetails::new(&self.name, &description);

        tracing::debug!(actor = %self.name, activity = %description, "activity starts");
        self.broadcast(StageEvent::ActivityStarts {
            details: details.clone(),
        });

        match activity.perform_as(self).await {
            Ok(()) => {
                self.broadcast(StageEvent::ActivityFinished {
                    details: details.stamped_now(),
                    outcome: Outcome::Success,
                });
                Ok(())
            }
            Err(source) => {
                tracing::warn!(actor = %self.name, activity = %description, error = %source, "activity failed");
                self.broadcast(StageEvent::ActivityFinished {
                    details: details.stamped_now(),
                    outcome: Outcome::Failure {
                        error: source.to_string(),
                    },
                });
                Err(ScreenplayError::Activity {
                    description,
                    source: Box::new(source),
                })
            }
        }
    }

    fn broadcast(&self, event: StageEvent) {
        for reporter in &self.reporters {
            reporter.notify(&event);
        }
    }
}
