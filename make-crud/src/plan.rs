//! Flag resolution into a generation plan
//!
//! [`plan`] maps the nine scaffold flags onto the artifacts to produce. When
//! no flag is given the default plan is a full web scaffold (model with
//! migration and seeder, resource controller, routes, views) without the
//! factory, policy and form requests.

use crate::generators::{ControllerRequest, ModelRequest, ViewRequest};
use crate::naming::ResourceName;

/// Scaffold flags accepted on the command line
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::Args)]
pub struct OptionSet {
    /// Adds Migration, Seeder, Resource Controller, Factory, Policy, Form Requests and views
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Adds an API Resource Controller and API routes
    #[arg(long)]
    pub api: bool,

    /// Adds the Controller
    #[arg(short = 'c', long)]
    pub controller: bool,

    /// Adds the Migration
    #[arg(short = 'm', long)]
    pub migration: bool,

    /// Adds the Seeder
    #[arg(short = 's', long)]
    pub seeder: bool,

    /// Adds the Policy
    #[arg(short = 'p', long)]
    pub policy: bool,

    /// Adds the Factory
    #[arg(short = 'f', long)]
    pub factory: bool,

    /// Adds the Form Requests
    #[arg(short = 'R', long)]
    pub requests: bool,

    /// Adds the Views
    #[arg(short = 'b', long)]
    pub views: bool,
}

impl OptionSet {
    /// True when none of the flags is set
    #[must_use]
    pub const fn has_no_options(&self) -> bool {
        !(self.all
            || self.api
            || self.controller
            || self.migration
            || self.seeder
            || self.policy
            || self.factory
            || self.requests
            || self.views)
    }
}

/// Sub-options forwarded to the model generator
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelOptions {
    /// Create a migration
    pub migration: bool,
    /// Create a seeder
    pub seeder: bool,
    /// Create a factory
    pub factory: bool,
    /// Create a policy
    pub policy: bool,
    /// Create store/update form requests
    pub requests: bool,
}

/// Sub-options forwarded to the controller generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Generate a resource controller
    pub resource: bool,
    /// Generate an API controller under the `Api/` namespace
    pub api: bool,
}

/// What to generate for a single invocation
///
/// Computed once from the flags and consumed immediately.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Run the controller generator
    pub needs_controller: bool,
    /// Run the view generator
    pub needs_views: bool,
    /// Append a route declaration
    pub needs_routes: bool,
    /// Model generator options
    pub model: ModelOptions,
    /// Controller generator options
    pub controller: ControllerOptions,
}

/// Resolve flags into a [`GenerationPlan`]
///
/// `api` suppresses views even when `views` or `all` is also set. The
/// default plan grants migration and seeder but not factory, policy or
/// requests; those need `all` or their own flag.
///
/// # Examples
///
/// ```
/// use make_crud::plan::{plan, OptionSet};
///
/// let plan = plan(&OptionSet { api: true, ..OptionSet::default() });
/// assert!(plan.needs_controller);
/// assert!(plan.needs_routes);
/// assert!(!plan.needs_views);
/// ```
#[must_use]
pub const fn plan(options: &OptionSet) -> GenerationPlan {
    let none = options.has_no_options();

    GenerationPlan {
        needs_controller: none || options.all || options.controller || options.api,
        needs_views: none || (!options.api && (options.all || options.views)),
        needs_routes: none || options.all || options.api,
        model: ModelOptions {
            migration: options.all || none || options.migration,
            seeder: options.all || none || options.seeder,
            factory: options.all || options.factory,
            policy: options.all || options.policy,
            requests: options.all || options.requests,
        },
        controller: ControllerOptions {
            resource: true,
            api: options.api,
        },
    }
}

impl GenerationPlan {
    /// Whether routes and controller target the API surface
    #[must_use]
    pub const fn is_api(&self) -> bool {
        self.controller.api
    }

    /// Request for the model generator; the model is always generated
    #[must_use]
    pub fn model_request(&self, name: &ResourceName) -> ModelRequest {
        ModelRequest {
            name: name.class_name().to_string(),
            migration: self.model.migration,
            seeder: self.model.seeder,
            factory: self.model.factory,
            policy: self.model.policy,
            requests: self.model.requests,
        }
    }

    /// Request for the controller generator, if the plan needs one
    #[must_use]
    pub fn controller_request(&self, name: &ResourceName) -> Option<ControllerRequest> {
        self.needs_controller.then(|| ControllerRequest {
            name: name.controller_name(self.controller.api),
            model: name.class_name().to_string(),
            resource: self.controller.resource,
            api: self.controller.api,
        })
    }

    /// Request for the view generator, if the plan needs one
    #[must_use]
    pub fn view_request(&self, name: &ResourceName) -> Option<ViewRequest> {
        self.needs_views.then(|| ViewRequest {
            path: name.view_path(),
            create_subfolder: true,
        })
    }
}
