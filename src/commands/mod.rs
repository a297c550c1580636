pub mod drivers;
pub mod setup;
pub mod templates;
