//! Name derivation for scaffolded resources
//!
//! Resolves a user-supplied identifier into the class name, namespace path
//! and plural form that the generators, routes and views are named after.

pub mod inflector;
pub mod resolver;

pub use self::inflector::{EnglishInflector, Inflector};
pub use self::resolver::{resolve, NameResolver, ResourceName};
