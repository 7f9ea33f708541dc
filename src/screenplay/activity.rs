//! Activity abstractions: interactions, questions, and tasks
//!
//! An activity is either a `Performable` (do something, side effects only),
//! a `Question` (ask something, produces a value), or a `Task` (a named
//! sequence of performables). Activities are immutable once constructed and
//! render their own business-readable description via `Display`.

use std::fmt;

use async_trait::async_trait;

use super::actor::Actor;
use super::error::ScreenplayResult;

/// An activity with a browser-level side effect and no return value.
///
/// Concrete interactions are small state-free objects holding only their
/// construction-time parameters; `perform_as` resolves those parameters via
/// the passed actor and invokes exactly one browser-level operation (or a
/// minimal deterministic sequence of them).
#[async_trait]
pub trait Performable: fmt::Display + Send + Sync {
    /// Make the given actor perform this activity.
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()>;
}

/// An activity that produces a value, with no required side effect.
///
/// A question is a deferred computation: nothing touches the browser until an
/// actor is asked to answer it. The `Display` implementation is the
/// question's declared description, used whenever the question appears inside
/// another activity's sentence.
#[async_trait]
pub trait Question: fmt::Display + Send + Sync {
    /// The type of value this question resolves to.
    type Answer: Send;

    /// Resolve this question using the given actor's abilities.
    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Self::Answer>;
}

/// A named, immutable sequence of performables.
///
/// Performing a task performs its steps strictly in order against the same
/// actor, failing fast at the first step that rejects. Each step is reported
/// individually, nested under the task's own activity events.
pub struct Task {
    description: String,
    steps: Vec<Box<dyn Performable>>,
}

impl Task {
    /// Compose a task from a description and its steps.
    ///
    /// The description may contain the `#actor` placeholder, e.g.
    /// `"#actor picks their country of interest"`.
    pub fn named<A: IntoActivities>(description: impl Into<String>, steps: A) -> Self {
        Self {
            description: description.into(),
            steps: steps.into_activities(),
        }
    }
}

#[async_trait]
impl Performable for Task {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        actor.perform_each(&self.steps).await
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Conversion into the ordered activity list consumed by
/// [`Actor::attempts_to`](super::actor::Actor::attempts_to).
///
/// Implemented for tuples of performables (heterogeneous, up to twelve) and
/// for an already-boxed `Vec`. Order of execution is the textual left-to-right
/// order of declaration.
pub trait IntoActivities {
    /// Box the activities, preserving declaration order.
    fn into_activities(self) -> Vec<Box<dyn Performable>>;
}

impl IntoActivities for Vec<Box<dyn Performable>> {
    fn into_activities(self) -> Vec<Box<dyn Performable>> {
        self
    }
}

macro_rules! impl_into_activities {
    ($($name:ident),+) => {
        impl<$($name: Performable + 'static),+> IntoActivities for ($($name,)+) {
            fn into_activities(self) -> Vec<Box<dyn Performable>> {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                vec![$(Box::new($name) as Box<dyn Performable>),+]
            }
        }
    };
}

impl_into_activities!(A);
impl_into_activities!(A, B);
impl_into_activities!(A, B, C);
impl_into_activities!(A, B, C, D);
impl_into_activities!(A, B, C, D, E);
impl_into_activities!(A, B, C, D, E, F);
impl_into_activities!(A, B, C, D, E, F, G);
impl_into_activities!(A, B, C, D, E, F, G, H);
impl_into_activities!(A, B, C, D, E, F, G, H, I);
impl_into_activities!(A, B, C, D, E, F, G, H, I, J);
impl_into_activities!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_activities!(A, B, C, D, E, F, G, H, I, J, K, L);
