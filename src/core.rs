pub mod clock;
pub mod command;
pub mod domain;
pub mod events;
pub mod library;
pub mod repository;
pub mod state;
