pub mod add;
pub mod budget;
pub mod edit;
pub mod export;
pub mod import;
pub mod remove;
pub mod search_by_category;
pub mod sort;
pub mod summary;
