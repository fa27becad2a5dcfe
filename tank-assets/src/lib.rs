pub mod configs;
pub mod plugin;
pub mod prelude;
