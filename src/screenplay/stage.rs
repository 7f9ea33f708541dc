//! The stage: an explicit, test-scoped actor context
//!
//! Instead of a process-wide actor registry, each test run constructs its own
//! [`Stage`]. The stage creates actors on demand through a [`Cast`], attaches
//! the stage's reporters, and discards every engaged actor when the curtain
//! drops. Lifecycle: build one stage in test setup, drop it (or call
//! [`Stage::drop_the_curtain`]) at test end; never share a stage across
//! concurrent tests.

use std::collections::HashMap;
use std::sync::Arc;

use super::actor::Actor;
use super::reporter::Reporter;

/// Prepares freshly engaged actors, typically by endowing abilities.
pub trait Cast: Send + Sync {
    /// Endow a newly created actor with whatever it needs for this test run.
    fn prepare(&self, actor: Actor) -> Actor;
}

impl<F> Cast for F
where
    F: Fn(Actor) -> Actor + Send + Sync,
{
    fn prepare(&self, actor: Actor) -> Actor {
        self(actor)
    }
}

/// A per-test context that engages and scopes actors.
pub struct Stage {
    cast: Box<dyn Cast>,
    reporters: Vec<Arc<dyn Reporter>>,
    actors: HashMap<String, Arc<Actor>>,
    spotlight: Option<String>,
}

impl Stage {
    /// Set the stage with the cast that will prepare its actors.
    pub fn with_cast(cast: impl Cast + 'static) -> Self {
        Self {
            cast: Box::new(cast),
            reporters: Vec::new(),
            actors: HashMap::new(),
            spotlight: None,
        }
    }

    /// Attach a reporter to every actor engaged from now on.
    pub fn register_reporter(&mut self, reporter: Arc<dyn Reporter>) {
        self.reporters.push(reporter);
    }

    /// Engage the actor with the given name, or return the one already
    /// engaged under that name, and move them into the spotlight.
    pub fn actor_called(&mut self, name: &str) -> Arc<Actor> {
        self.spotlight = Some(name.to_string());

        if let Some(actor) = self.actors.get(name) {
            return Arc::clone(actor);
        }

        let mut actor = Actor::named(name);
        for reporter in &self.reporters {
            actor = actor.reporting_to(Arc::clone(reporter));
        }
        let actor = Arc::new(self.cast.prepare(actor));

        self.actors.insert(name.to_string(), Arc::clone(&actor));
        actor
    }

    /// The most recently engaged actor, if any.
    pub fn the_actor_in_the_spotlight(&self) -> Option<Arc<Actor>> {
        self.spotlight
            .as_ref()
            .and_then(|name| self.actors.get(name))
            .map(Arc::clone)
    }

    /// Discard every engaged actor; the stage can be reused afterwards.
    pub fn drop_the_curtain(&mut self) {
        self.actors.clear();
        self.spotlight = None;
    }
}
