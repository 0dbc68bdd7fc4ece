//! Resource identifier resolution
//!
//! Turns the raw identifier typed by the user (`admin/post`, `Admin.Post`,
//! `person`) into the canonical names every later step derives from.

use super::inflector::{EnglishInflector, Inflector};
use crate::error::{CrudError, CrudResult};

/// Canonical names derived from a resource identifier
///
/// Every segment of `namespace_path` is non-empty and starts with a
/// capitalized character; `class_name` is its last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    class_name: String,
    namespace_path: String,
    plural_form: String,
}

impl ResourceName {
    /// Class name without namespace (e.g. `Post`)
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Capitalized segments joined with `/` (e.g. `Admin/Post`)
    #[must_use]
    pub fn namespace_path(&self) -> &str {
        &self.namespace_path
    }

    /// Namespace path with its trailing noun pluralized (e.g. `Admin/Posts`)
    #[must_use]
    pub fn plural_form(&self) -> &str {
        &self.plural_form
    }

    /// Iterate over the namespace segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.namespace_path.split('/')
    }

    /// Lowercased first segment when the resource lives in a folder
    ///
    /// `Admin/Post` yields `Some("admin")`, `Post` yields `None`.
    #[must_use]
    pub fn folder(&self) -> Option<String> {
        self.namespace_path
            .split_once('/')
            .map(|(first, _)| first.to_lowercase())
    }

    /// Controller name handed to the controller generator
    ///
    /// ```
    /// use make_crud::naming::resolve;
    ///
    /// let name = resolve("admin/post").unwrap();
    /// assert_eq!(name.controller_name(false), "Admin/PostController");
    /// assert_eq!(name.controller_name(true), "Api/Admin/PostController");
    /// ```
    #[must_use]
    pub fn controller_name(&self, api: bool) -> String {
        let prefix = if api { "Api/" } else { "" };
        format!("{prefix}{}Controller", self.namespace_path)
    }

    /// Name of the resource route (`admin/posts`)
    #[must_use]
    pub fn route_resource_name(&self) -> String {
        self.plural_form.to_lowercase()
    }

    /// Dotted view directory path (`admin.posts`)
    #[must_use]
    pub fn view_path(&self) -> String {
        self.plural_form.replace('/', ".").to_lowercase()
    }
}

/// Resolves raw identifiers with a pluggable [`Inflector`]
#[derive(Debug, Clone, Default)]
pub struct NameResolver<I = EnglishInflector> {
    inflector: I,
}

impl<I: Inflector> NameResolver<I> {
    /// Create a resolver backed by `inflector`
    pub const fn new(inflector: I) -> Self {
        Self { inflector }
    }

    /// Resolve a raw identifier into its canonical names
    ///
    /// `.` is treated as a path separator. Segments are trimmed, empty ones are dropped and
    /// each remaining segment gets its first character upper-cased; the rest
    /// of the segment is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::InvalidIdentifier`] when `raw` is blank or has
    /// no non-empty segment (e.g. `"/"`).
    pub fn resolve(&self, raw: &str) -> CrudResult<ResourceName> {
        let trimmed = raw.trim();

        let segments: Vec<String> = trimmed
            .replace('.', "/")
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.inflector.capitalize(segment))
            .collect();

        let Some(class_name) = segments.last().cloned() else {
            return Err(CrudError::InvalidIdentifier(raw.to_string()));
        };

        let namespace_path = segments.join("/");
        let plural_form = self.inflector.pluralize(&namespace_path);

        tracing::debug!(
            raw,
            class_name = %class_name,
            namespace_path = %namespace_path,
            plural_form = %plural_form,
            "Resolved resource identifier"
        );

        Ok(ResourceName {
            class_name,
            namespace_path,
            plural_form,
        })
    }
}

/// Resolve `raw` with English inflection rules
///
/// # Errors
///
/// See [`NameResolver::resolve`].
///
/// # Examples
///
/// ```
/// use make_crud::naming::resolve;
///
/// let name = resolve("admin.post").unwrap();
/// assert_eq!(name.class_name(), "Post");
/// assert_eq!(name.namespace_path(), "Admin/Post");
/// assert_eq!(name.plural_form(), "Admin/Posts");
/// ```
pub fn resolve(raw: &str) -> CrudResult<ResourceName> {
    NameResolver::<EnglishInflector>::default().resolve(raw)
}
