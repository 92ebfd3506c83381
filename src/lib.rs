pub mod dashboard;
pub mod repl;
pub mod store;
