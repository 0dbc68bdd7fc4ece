//! `make-crud` command
//!
//! Generates Model, Migration, Seeder, Resource Controller, routes and views
//! for a given resource by delegating to `php artisan`.
//!
//! # Example
//!
//! ```bash
//! make-crud admin/post          # full web scaffold
//! make-crud Post --api          # API controller and api routes, no views
//! make-crud Post -mfs           # model with migration, factory and seeder
//! ```

use anyhow::{Context, Result};
use console::style;

use crate::config::MakeCrudConfig;
use crate::generators::ArtisanGenerators;
use crate::plan::OptionSet;
use crate::routes::{FileRouteStore, RouteComposer};
use crate::scaffold::{ScaffoldInput, ScaffoldStep, Scaffolder};

/// Scaffold a CRUD resource in a Laravel project
pub struct MakeCrudCommand {
    input: ScaffoldInput,
    config: MakeCrudConfig,
}

impl MakeCrudCommand {
    /// Create the command for `model` with the given flags
    pub fn new(model: String, options: OptionSet, config: MakeCrudConfig) -> Self {
        Self {
            input: ScaffoldInput::new(model, options),
            config,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is invalid, a generator fails, or
    /// the route table cannot be written.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Scaffolding CRUD for").cyan().bold(),
            style(&self.input.identifier).green().bold(),
            style("...").cyan().bold()
        );

        let project_root = &self.config.project_root;
        let generators = ArtisanGenerators::new(
            &self.config.php_binary,
            &self.config.artisan,
            project_root,
        );
        let routes = FileRouteStore::new(self.config.routes_path());

        let mut scaffolder = Scaffolder::new(generators, routes)
            .with_composer(RouteComposer::new(self.config.controllers_namespace.as_str()));

        let report = scaffolder
            .run_with(&self.input, Self::print_step)
            .with_context(|| {
                format!(
                    "Failed to scaffold {} in {}",
                    self.input.identifier,
                    project_root.display()
                )
            })?;

        println!(
            "\n{} CRUD scaffold for {} is ready!",
            style("✨").green().bold(),
            style(report.name.namespace_path()).green().bold()
        );

        Ok(())
    }

    fn print_step(step: &ScaffoldStep) {
        match step {
            ScaffoldStep::Model(request) => {
                println!("  {} Model {}", style("✓").green(), style(&request.name).dim());
            }
            ScaffoldStep::Controller(request) => {
                println!(
                    "  {} Controller {}",
                    style("✓").green(),
                    style(&request.name).dim()
                );
            }
            ScaffoldStep::Route { statement, path } => {
                println!("  {} {}", style("✓").green(), style(statement).dim());
                println!(
                    "  {} ({})",
                    style("Routes registered successfully").green(),
                    style(path.display()).dim()
                );
            }
            ScaffoldStep::Views(request) => {
                println!(
                    "  {} Views {}",
                    style("✓").green(),
                    style(&request.path).dim()
                );
            }
        }
    }
}
