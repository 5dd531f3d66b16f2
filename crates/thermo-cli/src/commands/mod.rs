pub mod optimize;
pub mod rules;
