//! CRUD scaffold orchestrator
//!
//! Runs the pipeline for one resource, in order:
//! 1. Model (always, with the planned companion classes)
//! 2. Controller
//! 3. Route registration
//! 4. Views
//!
//! The identifier is validated before any generator runs. After that, a
//! failing step stops the pipeline without undoing earlier steps.

use std::path::PathBuf;

use crate::error::CrudResult;
use crate::generators::{ControllerRequest, Generators, ModelRequest, ViewRequest};
use crate::naming::{EnglishInflector, Inflector, NameResolver, ResourceName};
use crate::plan::{plan, GenerationPlan, OptionSet};
use crate::routes::{RouteComposer, RouteStatement, RouteStore};

/// Input of a single scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldInput {
    /// Raw resource identifier, e.g. `admin/post`
    pub identifier: String,
    /// Scaffold flags
    pub options: OptionSet,
}

impl ScaffoldInput {
    /// Create an input from an identifier and flags
    pub fn new(identifier: impl Into<String>, options: OptionSet) -> Self {
        Self {
            identifier: identifier.into(),
            options,
        }
    }
}

/// A completed pipeline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStep {
    /// Model generator ran
    Model(ModelRequest),
    /// Controller generator ran
    Controller(ControllerRequest),
    /// Route appended to a route table
    Route {
        /// Appended statement
        statement: RouteStatement,
        /// Route table file
        path: PathBuf,
    },
    /// View generator ran
    Views(ViewRequest),
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Resolved resource names
    pub name: ResourceName,
    /// Plan that was executed
    pub plan: GenerationPlan,
    /// Steps in execution order
    pub steps: Vec<ScaffoldStep>,
}

/// Drives generators and the route store for a resource
pub struct Scaffolder<G, S, I = EnglishInflector> {
    resolver: NameResolver<I>,
    composer: RouteComposer,
    generators: G,
    routes: S,
}

impl<G: Generators, S: RouteStore> Scaffolder<G, S> {
    /// Create a scaffolder with English inflection and the default controllers namespace
    pub fn new(generators: G, routes: S) -> Self {
        Self::with_parts(
            NameResolver::default(),
            RouteComposer::default(),
            generators,
            routes,
        )
    }
}

impl<G: Generators, S: RouteStore, I: Inflector> Scaffolder<G, S, I> {
    /// Create a scaffolder from explicit parts
    pub const fn with_parts(
        resolver: NameResolver<I>,
        composer: RouteComposer,
        generators: G,
        routes: S,
    ) -> Self {
        Self {
            resolver,
            composer,
            generators,
            routes,
        }
    }

    /// Replace the route composer
    #[must_use]
    pub fn with_composer(mut self, composer: RouteComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Generators in use
    pub const fn generators(&self) -> &G {
        &self.generators
    }

    /// Route store in use
    pub const fn route_store(&self) -> &S {
        &self.routes
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// See [`Scaffolder::run_with`].
    pub fn run(&mut self, input: &ScaffoldInput) -> CrudResult<ScaffoldReport> {
        self.run_with(input, |_| {})
    }

    /// Run the pipeline, reporting each step as it completes
    ///
    /// # Errors
    ///
    /// Returns [`crate::CrudError::InvalidIdentifier`] before anything runs
    /// if the identifier is unusable, otherwise the first generator or
    /// route store failure. Steps completed before the failure stay done.
    pub fn run_with(
        &mut self,
        input: &ScaffoldInput,
        mut on_step: impl FnMut(&ScaffoldStep),
    ) -> CrudResult<ScaffoldReport> {
        let name = self.resolver.resolve(&input.identifier)?;
        let plan = plan(&input.options);
        tracing::debug!(?plan, "Scaffold plan");

        let mut steps = Vec::new();
        let mut complete = |step: ScaffoldStep| {
            on_step(&step);
            steps.push(step);
        };

        let model = plan.model_request(&name);
        self.generators.make_model(&model)?;
        tracing::info!(model = %model.name, "Model generated");
        complete(ScaffoldStep::Model(model));

        if let Some(controller) = plan.controller_request(&name) {
            self.generators.make_controller(&controller)?;
            tracing::info!(controller = %controller.name, "Controller generated");
            complete(ScaffoldStep::Controller(controller));
        }

        if plan.needs_routes {
            let statement = self.composer.compose(&name, plan.is_api());
            let path = self.routes.append(&statement)?;
            complete(ScaffoldStep::Route { statement, path });
        }

        if let Some(views) = plan.view_request(&name) {
            self.generators.make_view(&views)?;
            tracing::info!(path = %views.path, "Views generated");
            complete(ScaffoldStep::Views(views));
        }

        Ok(ScaffoldReport { name, plan, steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrudError;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_controller: bool,
    }

    impl Generators for Recorder {
        fn make_model(&mut self, request: &ModelRequest) -> CrudResult<()> {
            self.calls.push(request.to_args().join(" "));
            Ok(())
        }

        fn make_controller(&mut self, request: &ControllerRequest) -> CrudResult<()> {
            if self.fail_controller {
                return Err(CrudError::InvalidIdentifier("boom".to_string()));
            }
            self.calls.push(request.to_args().join(" "));
            Ok(())
        }

        fn make_view(&mut self, request: &ViewRequest) -> CrudResult<()> {
            self.calls.push(request.to_args().join(" "));
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryRoutes {
        lines: Vec<String>,
    }

    impl RouteStore for MemoryRoutes {
        fn append(&mut self, statement: &RouteStatement) -> CrudResult<PathBuf> {
            self.lines.push(statement.to_string());
            Ok(PathBuf::from(statement.table.file_name()))
        }
    }

    #[test]
    fn test_default_run_order() {
        let mut scaffolder = Scaffolder::new(Recorder::default(), MemoryRoutes::default());
        let report = scaffolder
            .run(&ScaffoldInput::new("post", OptionSet::default()))
            .unwrap();

        assert_eq!(
            scaffolder.generators().calls,
            vec![
                "make:model Post --migration --seed",
                "make:controller PostController --model=Post --resource",
                "make:view posts -c",
            ]
        );
        assert_eq!(
            scaffolder.route_store().lines,
            vec!["Route::resource('posts', App\\Http\\Controllers\\PostController::class);"]
        );
        assert_eq!(report.steps.len(), 4);
        assert!(matches!(report.steps[2], ScaffoldStep::Route { .. }));
    }

    #[test]
    fn test_invalid_identifier_runs_nothing() {
        let mut scaffolder = Scaffolder::new(Recorder::default(), MemoryRoutes::default());
        let result = scaffolder.run(&ScaffoldInput::new("/", OptionSet::default()));

        assert!(matches!(result, Err(CrudError::InvalidIdentifier(_))));
        assert!(scaffolder.generators().calls.is_empty());
        assert!(scaffolder.route_store().lines.is_empty());
    }

    #[test]
    fn test_failure_keeps_earlier_steps() {
        let generators = Recorder {
            fail_controller: true,
            ..Recorder::default()
        };
        let mut scaffolder = Scaffolder::new(generators, MemoryRoutes::default());
        let mut seen = Vec::new();
        let result = scaffolder.run_with(&ScaffoldInput::new("post", OptionSet::default()), |step| {
            seen.push(step.clone());
        });

        assert!(result.is_err());
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], ScaffoldStep::Model(_)));
        assert!(scaffolder.route_store().lines.is_empty());
    }

    #[test]
    fn test_model_only() {
        let mut scaffolder = Scaffolder::new(Recorder::default(), MemoryRoutes::default());
        let options = OptionSet {
            migration: true,
            ..OptionSet::default()
        };
        let report = scaffolder.run(&ScaffoldInput::new("post", options)).unwrap();

        assert_eq!(scaffolder.generators().calls, vec!["make:model Post --migration"]);
        assert_eq!(report.steps.len(), 1);
    }

    #[test]
    fn test_custom_composer() {
        let mut scaffolder = Scaffolder::new(Recorder::default(), MemoryRoutes::default())
            .with_composer(RouteComposer::new("Shop\\Controllers"));
        let options = OptionSet {
            api: true,
            ..OptionSet::default()
        };
        scaffolder.run(&ScaffoldInput::new("order", options)).unwrap();

        assert_eq!(
            scaffolder.route_store().lines,
            vec!["Route::apiResource('orders', Shop\\Controllers\\Api\\OrderController::class);"]
        );
    }
}
