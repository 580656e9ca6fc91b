//! sea-orm entities for the user directory tables.

pub mod accounts;
pub mod label_roles;
pub mod organizations;
pub mod users;
