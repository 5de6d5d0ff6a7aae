pub mod data;
pub mod services;
pub mod utils;
