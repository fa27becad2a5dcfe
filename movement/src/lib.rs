pub mod paths;
pub mod plugin;
pub mod prelude;
pub mod tank;
