//! The answerable-resolution engine
//!
//! An [`Answerable`] is any value that is either already known or requires
//! asynchronous resolution before use. Plural operations accept an ordered
//! [`AnswerableList`] mixing single values and whole collections; resolution
//! flattens the list into one sequence whose order is exactly the textual
//! left-to-right order of declaration, even though the individual awaits may
//! overlap in time.

use std::fmt;
use std::sync::Arc;

use futures::future::try_join_all;

use super::activity::Question;
use super::actor::Actor;
use super::description::{Describe, join_with_and};
use super::error::ScreenplayResult;

/// A value that is either already known or still a deferred question.
///
/// Cloneable and immutable: questions are shared behind an `Arc`, so an
/// answerable can be stored in an activity, replayed, and rendered any number
/// of times.
pub enum Answerable<T> {
    /// A literal, already-known value
    Value(T),
    /// A deferred computation resolved through an actor's abilities
    Question(Arc<dyn Question<Answer = T>>),
}

impl<T> Answerable<T> {
    /// Wrap a deferred question.
    pub fn question<Q>(question: Q) -> Self
    where
        Q: Question<Answer = T> + 'static,
    {
        Self::Question(Arc::new(question))
    }

    /// Whether this answerable still requires resolution.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Question(_))
    }
}

impl<T: Clone> Clone for Answerable<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.clone()),
            Self::Question(q) => Self::Question(Arc::clone(q)),
        }
    }
}

impl<T: Describe> fmt::Display for Answerable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&v.describe()),
            Self::Question(q) => write!(f, "{}", q),
        }
    }
}

impl From<&str> for Answerable<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for Answerable<String> {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// One declared entry of a plural argument list.
///
/// Plural operations such as `Select::values` accept a heterogeneous mix of
/// single answerables and answerable collections; each entry keeps track of
/// which kind it was declared as, so scalar entries are never confused with
/// one-element collections.
pub enum OneOrMany<T> {
    /// A single value contributing one element to the flattened sequence
    One(Answerable<T>),
    /// A collection contributing all of its elements, in their own order
    Many(Answerable<Vec<T>>),
}

impl<T: Clone> Clone for OneOrMany<T> {
    fn clone(&self) -> Self {
        match self {
            Self::One(a) => Self::One(a.clone()),
            Self::Many(a) => Self::Many(a.clone()),
        }
    }
}

impl<T> OneOrMany<T>
where
    T: Clone + Send + Sync,
{
    async fn resolved_by(&self, actor: &Actor) -> ScreenplayResult<Vec<T>> {
        match self {
            Self::One(answerable) => Ok(vec![actor.answer(answerable).await?]),
            Self::Many(answerable) => actor.answer(answerable).await,
        }
    }
}

impl<T: Describe> OneOrMany<T> {
    /// The description fragments this entry contributes to a sentence.
    ///
    /// A literal collection contributes one fragment per element; a deferred
    /// question contributes its declared description, never its resolved
    /// value.
    pub fn fragments(&self) -> Vec<String> {
        match self {
            Self::One(Answerable::Value(v)) => vec![v.describe()],
            Self::One(Answerable::Question(q)) => vec![q.to_string()],
            Self::Many(Answerable::Value(vs)) => vs.iter().map(Describe::describe).collect(),
            Self::Many(Answerable::Question(q)) => vec![q.to_string()],
        }
    }
}

impl<T> From<Answerable<T>> for OneOrMany<T> {
    fn from(answerable: Answerable<T>) -> Self {
        Self::One(answerable)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.into())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value.into())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(Answerable::Value(
            values.iter().map(|v| v.to_string()).collect(),
        ))
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(Answerable::Value(
            values.iter().map(|v| v.to_string()).collect(),
        ))
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(Answerable::Value(values))
    }
}

/// An ordered list of scalar-or-collection answerables.
///
/// This is the input to the resolution engine: resolution produces a single
/// flattened sequence preserving declaration order across mixed literal and
/// deferred sources. Zero entries resolve to an empty sequence, not an error.
pub struct AnswerableList<T> {
    entries: Vec<OneOrMany<T>>,
}

impl<T: Clone> Clone for AnswerableList<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> AnswerableList<T> {
    /// Build a list directly from its entries.
    pub fn new(entries: Vec<OneOrMany<T>>) -> Self {
        Self { entries }
    }

    /// Number of declared entries (before flattening).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> AnswerableList<T>
where
    T: Clone + Send + Sync,
{
    /// Resolve every entry and flatten the results in declaration order.
    ///
    /// The awaits for individual entries may overlap, but the output order
    /// matches the input declaration order exactly; concatenation never
    /// reorders or interleaves results across entries. The first rejection
    /// fails the whole list.
    pub async fn resolved_by(&self, actor: &Actor) -> ScreenplayResult<Vec<T>> {
        let parts =
            try_join_all(self.entries.iter().map(|entry| entry.resolved_by(actor))).await?;
        Ok(parts.into_iter().flatten().collect())
    }
}

impl<T: Describe> fmt::Display for AnswerableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fragments: Vec<String> = self
            .entries
            .iter()
            .flat_map(OneOrMany::fragments)
            .collect();
        f.write_str(&join_with_and(&fragments))
    }
}

/// Conversion into an [`AnswerableList`].
///
/// Implemented for homogeneous arrays and `Vec`s of convertible entries, and
/// for heterogeneous tuples up to arity eight, so call sites can mix literal
/// scalars, literal collections, and questions freely:
/// `Select::values((["UK", "PL"], "DE", "FR"))`.
pub trait IntoAnswerableList<T> {
    /// Build the list, preserving declaration order.
    fn into_answerable_list(self) -> AnswerableList<T>;
}

impl<T> IntoAnswerableList<T> for AnswerableList<T> {
    fn into_answerable_list(self) -> AnswerableList<T> {
        self
    }
}

impl<T, E, const N: usize> IntoAnswerableList<T> for [E; N]
where
    E: Into<OneOrMany<T>>,
{
    fn into_answerable_list(self) -> AnswerableList<T> {
        AnswerableList::new(self.into_iter().map(Into::into).collect())
    }
}

impl<T, E> IntoAnswerableList<T> for Vec<E>
where
    E: Into<OneOrMany<T>>,
{
    fn into_answerable_list(self) -> AnswerableList<T> {
        AnswerableList::new(self.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_into_answerable_list {
    ($($name:ident),+) => {
        impl<T, $($name),+> IntoAnswerableList<T> for ($($name,)+)
        where
            $($name: Into<OneOrMany<T>>),+
        {
            fn into_answerable_list(self) -> AnswerableList<T> {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                AnswerableList::new(vec![$($name.into()),+])
            }
        }
    };
}

impl_into_answerable_list!(A);
impl_into_answerable_list!(A, B);
impl_into_answerable_list!(A, B, C);
impl_into_answerable_list!(A, B, C, D);
impl_into_answerable_list!(A, B, C, D, E);
impl_into_answerable_list!(A, B, C, D, E, F);
impl_into_answerable_list!(A, B, C, D, E, F, G);
impl_into_answerable_list!(A, B, C, D, E, F, G, H);
