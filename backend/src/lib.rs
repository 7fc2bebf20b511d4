pub mod config;
pub mod error;
pub mod event_loop;
pub mod keys;
pub mod media;
pub mod system;
