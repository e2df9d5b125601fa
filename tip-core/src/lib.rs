pub mod calculations;
pub mod form;
pub mod models;
pub mod sanitize;
pub mod view;

pub use calculations::{TipSplit, TipSplitError, TipSplitInput, TipSplitResult};
pub use form::{CalculatorForm, FocusFlags, Recompute};
pub use models::*;
pub use view::FormView;
