pub mod frankfurter;
pub mod traits;
pub mod yahoo;
