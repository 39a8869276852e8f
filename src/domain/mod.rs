pub mod common;
pub mod expense;
pub mod group;
pub mod user;

pub use common::Identifiable;
pub use expense::Expense;
pub use group::Group;
pub use user::User;
