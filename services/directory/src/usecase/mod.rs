pub mod credential;
pub mod listing;
pub mod lookup;
pub mod provision;
