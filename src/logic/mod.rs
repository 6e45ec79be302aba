pub mod app_data;
pub mod database;
pub mod io;
pub mod player;
pub mod team;
pub mod types;
