//! Framework generator collaborators
//!
//! Model, controller and view generation is delegated to the host
//! framework. Each generator receives a typed request; [`ArtisanGenerators`]
//! turns them into `php artisan make:*` invocations.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{CrudError, CrudResult};

/// Arguments for the model generator
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    /// Model class name, without namespace
    pub name: String,
    /// Create a migration
    pub migration: bool,
    /// Create a seeder
    pub seeder: bool,
    /// Create a factory
    pub factory: bool,
    /// Create a policy
    pub policy: bool,
    /// Create form requests
    pub requests: bool,
}

impl ModelRequest {
    /// `make:model` arguments
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["make:model".to_string(), self.name.clone()];
        let flags = [
            (self.migration, "--migration"),
            (self.seeder, "--seed"),
            (self.factory, "--factory"),
            (self.policy, "--policy"),
            (self.requests, "--requests"),
        ];
        args.extend(
            flags
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, flag)| flag.to_string()),
        );
        args
    }
}

/// Arguments for the controller generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerRequest {
    /// Controller path, e.g. `Api/Admin/PostController`
    pub name: String,
    /// Model the controller is bound to
    pub model: String,
    /// Generate resource actions
    pub resource: bool,
    /// Generate an API controller
    pub api: bool,
}

impl ControllerRequest {
    /// `make:controller` arguments
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "make:controller".to_string(),
            self.name.clone(),
            format!("--model={}", self.model),
        ];
        if self.resource {
            args.push("--resource".to_string());
        }
        if self.api {
            args.push("--api".to_string());
        }
        args
    }
}

/// Arguments for the view generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// Dotted view path, e.g. `admin.posts`
    pub path: String,
    /// Create one view per CRUD action inside a sub-folder
    pub create_subfolder: bool,
}

impl ViewRequest {
    /// `make:view` arguments
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["make:view".to_string(), self.path.clone()];
        if self.create_subfolder {
            args.push("-c".to_string());
        }
        args
    }
}

/// The host framework's generators
pub trait Generators {
    /// Generate the model and its companion classes
    ///
    /// # Errors
    ///
    /// Returns an error if the generator fails.
    fn make_model(&mut self, request: &ModelRequest) -> CrudResult<()>;

    /// Generate the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the generator fails.
    fn make_controller(&mut self, request: &ControllerRequest) -> CrudResult<()>;

    /// Generate the view templates
    ///
    /// # Errors
    ///
    /// Returns an error if the generator fails.
    fn make_view(&mut self, request: &ViewRequest) -> CrudResult<()>;
}

/// Runs generators through `php artisan` in a project directory
#[derive(Debug, Clone)]
pub struct ArtisanGenerators {
    php_binary: PathBuf,
    artisan: PathBuf,
    project_root: PathBuf,
}

impl ArtisanGenerators {
    /// Create a runner for the project at `project_root`
    pub fn new(
        php_binary: impl Into<PathBuf>,
        artisan: impl Into<PathBuf>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            php_binary: php_binary.into(),
            artisan: artisan.into(),
            project_root: project_root.into(),
        }
    }

    /// Full command line for `args`, as shown to the user
    #[must_use]
    pub fn command_line(&self, args: &[String]) -> String {
        let mut parts = vec![
            self.php_binary.display().to_string(),
            self.artisan.display().to_string(),
        ];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }

    fn run(&self, args: &[String]) -> CrudResult<()> {
        let command = self.command_line(args);
        tracing::debug!(%command, cwd = %self.project_root.display(), "Running generator");

        let status = Command::new(&self.php_binary)
            .arg(&self.artisan)
            .args(args)
            .current_dir(&self.project_root)
            .status()
            .map_err(|source| CrudError::GeneratorSpawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(%command, %status, "Generator failed");
            return Err(CrudError::GeneratorFailed { command, status });
        }

        Ok(())
    }
}

impl Generators for ArtisanGenerators {
    fn make_model(&mut self, request: &ModelRequest) -> CrudResult<()> {
        self.run(&request.to_args())
    }

    fn make_controller(&mut self, request: &ControllerRequest) -> CrudResult<()> {
        self.run(&request.to_args())
    }

    fn make_view(&mut self, request: &ViewRequest) -> CrudResult<()> {
        self.run(&request.to_args())
    }
}
