pub mod config;
pub mod constants;
pub mod coordinates;
pub mod models;
pub mod radiation;
pub mod trajectory;
