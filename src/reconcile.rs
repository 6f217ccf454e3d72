mod digits;
mod text;

pub use digits::{DigitReconciliation, reconcile_digits};
pub use text::{TextReconciliation, reconcile_text};
