//! Interactions: activities with browser-level side effects

pub mod click;
pub mod dialog;
pub mod navigate;
pub mod select;

pub use click::Click;
pub use dialog::{Accept, Dismiss};
pub use navigate::Navigate;
pub use select::{FromTarget, Select, SelectOption, SelectOptions, SelectValue, SelectValues};
