pub mod budget;
pub mod selection;
pub mod summary;
pub mod transaction;
