//! Route declarations and the route table store
//!
//! [`RouteComposer`] builds a [`RouteStatement`] from resolved names; the
//! statement renders to the single `Route::...` line that a [`RouteStore`]
//! appends to `routes/web.php` or `routes/api.php`.
//!
//! Appending is not idempotent: running the scaffold twice registers the
//! route twice. Writes are unsynchronized, so concurrent runs against the
//! same route table may interleave.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{CrudError, CrudResult};
use crate::naming::ResourceName;

/// Default root namespace of generated controllers
pub const DEFAULT_CONTROLLERS_NAMESPACE: &str = "App\\Http\\Controllers";

/// Route table a statement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTable {
    /// `routes/web.php`
    Web,
    /// `routes/api.php`
    Api,
}

impl RouteTable {
    /// File name of the table inside the routes directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Web => "web.php",
            Self::Api => "api.php",
        }
    }
}

/// Registration method used for the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    /// `Route::resource`, all seven actions
    Resource,
    /// `Route::apiResource`, without `create` and `edit`
    ApiResource,
}

impl RouteMethod {
    /// Method name on the `Route` facade
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::ApiResource => "apiResource",
        }
    }
}

/// A resource route ready to be appended to a route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStatement {
    /// Target table
    pub table: RouteTable,
    /// Registration method
    pub method: RouteMethod,
    /// Resource name, e.g. `admin/posts`
    pub resource_name: String,
    /// Fully qualified controller class
    pub controller_class: String,
    /// Named-route prefix for foldered web resources
    pub name_prefix: Option<String>,
}

impl fmt::Display for RouteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route::{}('{}', {}::class",
            self.method.as_str(),
            self.resource_name,
            self.controller_class
        )?;
        if let Some(prefix) = &self.name_prefix {
            write!(f, ", ['as' => '{prefix}']")?;
        }
        f.write_str(");")
    }
}

/// Builds route statements under a controllers namespace
#[derive(Debug, Clone)]
pub struct RouteComposer {
    controllers_namespace: String,
}

impl Default for RouteComposer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLLERS_NAMESPACE)
    }
}

impl RouteComposer {
    /// Create a composer rooted at `controllers_namespace`
    pub fn new(controllers_namespace: impl Into<String>) -> Self {
        let namespace: String = controllers_namespace.into();
        Self {
            controllers_namespace: namespace.trim_end_matches('\\').to_string(),
        }
    }

    /// Compose the route statement for `name`
    ///
    /// # Examples
    ///
    /// ```
    /// use make_crud::naming::resolve;
    /// use make_crud::routes::RouteComposer;
    ///
    /// let name = resolve("admin/post").unwrap();
    /// let route = RouteComposer::default().compose(&name, false);
    /// assert_eq!(
    ///     route.to_string(),
    ///     "Route::resource('admin/posts', App\\Http\\Controllers\\Admin\\PostController::class, ['as' => 'admin']);"
    /// );
    /// ```
    #[must_use]
    pub fn compose(&self, name: &ResourceName, is_api: bool) -> RouteStatement {
        let api_segment = if is_api { "Api\\" } else { "" };
        let controller_class = format!(
            "{}\\{api_segment}{}Controller",
            self.controllers_namespace,
            name.namespace_path().replace('/', "\\")
        );

        let (table, method) = if is_api {
            (RouteTable::Api, RouteMethod::ApiResource)
        } else {
            (RouteTable::Web, RouteMethod::Resource)
        };

        RouteStatement {
            table,
            method,
            resource_name: name.route_resource_name(),
            controller_class,
            name_prefix: if is_api { None } else { name.folder() },
        }
    }
}

/// Compose a route under the default controllers namespace
#[must_use]
pub fn compose_route(name: &ResourceName, is_api: bool) -> RouteStatement {
    RouteComposer::default().compose(name, is_api)
}

/// Append-only storage for route declarations
pub trait RouteStore {
    /// Append `statement` to its table, returning where it was written
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::RouteAppend`] when the table cannot be written.
    fn append(&mut self, statement: &RouteStatement) -> CrudResult<PathBuf>;
}

/// Route tables stored as PHP files in a routes directory
#[derive(Debug, Clone)]
pub struct FileRouteStore {
    routes_dir: PathBuf,
}

impl FileRouteStore {
    /// Store backed by `routes_dir` (usually `<project>/routes`)
    pub fn new(routes_dir: impl Into<PathBuf>) -> Self {
        Self {
            routes_dir: routes_dir.into(),
        }
    }

    /// Path of the file holding `table`
    #[must_use]
    pub fn table_path(&self, table: RouteTable) -> PathBuf {
        self.routes_dir.join(table.file_name())
    }
}

impl RouteStore for FileRouteStore {
    fn append(&mut self, statement: &RouteStatement) -> CrudResult<PathBuf> {
        let path = self.table_path(statement.table);

        // The table must already exist; a missing file means the wrong project root.
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|source| CrudError::RouteAppend {
                path: path.clone(),
                source,
            })?;

        write!(file, "\n{statement}").map_err(|source| CrudError::RouteAppend {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), route = %statement, "Appended route");
        Ok(path)
    }
}
