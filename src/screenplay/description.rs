//! Lazily rendered activity descriptions
//!
//! Activities and questions describe themselves in business-readable prose.
//! A literal value renders as itself quoted (`'FR'`), a nested question
//! renders as its own declared description rather than its resolved value,
//! and lists join with commas and a final " and ".

/// How a resolved-literal value renders inside an activity description.
pub trait Describe {
    /// Render this value the way a report would show it.
    fn describe(&self) -> String;
}

impl Describe for str {
    fn describe(&self) -> String {
        format!("'{}'", self)
    }
}

impl Describe for String {
    fn describe(&self) -> String {
        self.as_str().describe()
    }
}

impl Describe for &str {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl Describe for bool {
    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! describe_as_display {
    ($($ty:ty),+) => {
        $(
            impl Describe for $ty {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

describe_as_display!(i32, i64, u32, u64, usize, f64);

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> String {
        let parts: Vec<String> = self.iter().map(Describe::describe).collect();
        join_with_and(&parts)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}

/// Join rendered fragments into one sentence-friendly list.
///
/// Fragments are comma-joined with " and " before the final element; a
/// two-element list uses " and " alone, with no comma.
pub fn join_with_and<S: AsRef<str>>(parts: &[S]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", init.join(", "), last.as_ref())
        }
    }
}

/// Substitute the `#actor` placeholder once a concrete actor is known.
///
/// Descriptions are authored actor-agnostically; failure messages and
/// reported events use this to name the actor actually performing.
pub fn with_actor_name(description: &str, name: &str) -> String {
    description.replace("#actor", name)
}
