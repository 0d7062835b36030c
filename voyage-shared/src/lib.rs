pub mod money;
pub mod pii;

pub use money::format_minor_units;
pub use pii::Masked;
