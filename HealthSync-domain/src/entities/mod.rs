// Domain entities
pub mod vitals;
pub mod assessment;
pub mod account;
