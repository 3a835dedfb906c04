pub mod organizer;
pub mod ranking;
