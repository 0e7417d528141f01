pub mod ai;
pub mod random_ai;
