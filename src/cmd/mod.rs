pub mod direct;
pub mod interactive;
