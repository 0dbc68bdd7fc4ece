//! CLI command implementations

pub mod make_crud;

pub use make_crud::MakeCrudCommand;
