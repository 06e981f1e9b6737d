pub mod anchor;
pub mod coverage;
pub mod dates;
pub mod frequency;
pub mod money;
pub mod names;
pub mod receipts;
