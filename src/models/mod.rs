pub mod ride;
pub mod role;
