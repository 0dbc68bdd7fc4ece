//! make-crud library
//!
//! Resolves a resource identifier and a set of flags into a scaffold plan,
//! then drives the host framework's generators and appends the resource
//! route.
//!
//! ```
//! use make_crud::naming::resolve;
//! use make_crud::plan::{plan, OptionSet};
//! use make_crud::routes::compose_route;
//!
//! let name = resolve("admin.post").unwrap();
//! let plan = plan(&OptionSet::default());
//! assert_eq!(plan.view_request(&name).unwrap().path, "admin.posts");
//! assert_eq!(compose_route(&name, false).resource_name, "admin/posts");
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod generators;
pub mod naming;
pub mod observability;
pub mod plan;
pub mod routes;
pub mod scaffold;

pub use config::MakeCrudConfig;
pub use error::{CrudError, CrudResult};
pub use generators::{ArtisanGenerators, Generators};
pub use naming::{resolve, EnglishInflector, Inflector, NameResolver, ResourceName};
pub use plan::{plan, GenerationPlan, OptionSet};
pub use routes::{compose_route, FileRouteStore, RouteComposer, RouteStatement, RouteStore};
pub use scaffold::{ScaffoldInput, ScaffoldReport, ScaffoldStep, Scaffolder};
