pub mod rides;
pub mod status_update;
