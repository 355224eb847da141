//! Plain data records read back with statements built by [`SqlQuery`](crate::SqlQuery).

pub mod person;

pub use person::Person;
