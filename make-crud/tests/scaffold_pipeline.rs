//! Integration tests for the scaffold pipeline against a project directory

use std::fs;
use std::path::Path;

use make_crud::generators::{ControllerRequest, Generators, ModelRequest, ViewRequest};
use make_crud::plan::OptionSet;
use make_crud::routes::FileRouteStore;
use make_crud::scaffold::{ScaffoldInput, ScaffoldStep, Scaffolder};
use make_crud::CrudResult;
use tempfile::TempDir;

/// Records generator invocations as artisan command lines
#[derive(Default)]
struct RecordingGenerators {
    commands: Vec<String>,
}

impl Generators for RecordingGenerators {
    fn make_model(&mut self, request: &ModelRequest) -> CrudResult<()> {
        self.commands.push(request.to_args().join(" "));
        Ok(())
    }

    fn make_controller(&mut self, request: &ControllerRequest) -> CrudResult<()> {
        self.commands.push(request.to_args().join(" "));
        Ok(())
    }

    fn make_view(&mut self, request: &ViewRequest) -> CrudResult<()> {
        self.commands.push(request.to_args().join(" "));
        Ok(())
    }
}

fn laravel_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let routes = temp_dir.path().join("routes");
    fs::create_dir_all(&routes).unwrap();
    fs::write(routes.join("web.php"), "<?php\n").unwrap();
    fs::write(routes.join("api.php"), "<?php\n").unwrap();
    temp_dir
}

fn read_routes(project: &Path, table: &str) -> String {
    fs::read_to_string(project.join("routes").join(table)).unwrap()
}

#[test]
fn test_default_scaffold_for_namespaced_resource() {
    let project = laravel_project();
    let mut scaffolder = Scaffolder::new(
        RecordingGenerators::default(),
        FileRouteStore::new(project.path().join("routes")),
    );

    let report = scaffolder
        .run(&ScaffoldInput::new("admin.post", OptionSet::default()))
        .unwrap();

    assert_eq!(report.name.namespace_path(), "Admin/Post");
    assert_eq!(
        scaffolder.generators().commands,
        vec![
            "make:model Post --migration --seed",
            "make:controller Admin/PostController --model=Post --resource",
            "make:view admin.posts -c",
        ]
    );
    assert_eq!(
        read_routes(project.path(), "web.php"),
        "<?php\n\nRoute::resource('admin/posts', App\\Http\\Controllers\\Admin\\PostController::class, ['as' => 'admin']);"
    );
    assert_eq!(read_routes(project.path(), "api.php"), "<?php\n");
}

#[test]
fn test_api_scaffold_writes_api_routes_without_views() {
    let project = laravel_project();
    let mut scaffolder = Scaffolder::new(
        RecordingGenerators::default(),
        FileRouteStore::new(project.path().join("routes")),
    );
    let options = OptionSet {
        api: true,
        ..OptionSet::default()
    };

    let report = scaffolder
        .run(&ScaffoldInput::new("admin/post", options))
        .unwrap();

    assert_eq!(
        scaffolder.generators().commands,
        vec![
            "make:model Post",
            "make:controller Api/Admin/PostController --model=Post --resource --api",
        ]
    );
    assert!(!report
        .steps
        .iter()
        .any(|step| matches!(step, ScaffoldStep::Views(_))));
    assert_eq!(
        read_routes(project.path(), "api.php"),
        "<?php\n\nRoute::apiResource('admin/posts', App\\Http\\Controllers\\Api\\Admin\\PostController::class);"
    );
    assert_eq!(read_routes(project.path(), "web.php"), "<?php\n");
}

#[test]
fn test_all_scaffold_requests_every_companion() {
    let project = laravel_project();
    let mut scaffolder = Scaffolder::new(
        RecordingGenerators::default(),
        FileRouteStore::new(project.path().join("routes")),
    );
    let options = OptionSet {
        all: true,
        ..OptionSet::default()
    };

    scaffolder
        .run(&ScaffoldInput::new("person", options))
        .unwrap();

    assert_eq!(
        scaffolder.generators().commands,
        vec![
            "make:model Person --migration --seed --factory --policy --requests",
            "make:controller PersonController --model=Person --resource",
            "make:view people -c",
        ]
    );
    assert!(read_routes(project.path(), "web.php")
        .ends_with("Route::resource('people', App\\Http\\Controllers\\PersonController::class);"));
}

#[test]
fn test_running_twice_appends_route_twice() {
    let project = laravel_project();
    let mut scaffolder = Scaffolder::new(
        RecordingGenerators::default(),
        FileRouteStore::new(project.path().join("routes")),
    );
    let input = ScaffoldInput::new("post", OptionSet::default());

    scaffolder.run(&input).unwrap();
    scaffolder.run(&input).unwrap();

    let line = "Route::resource('posts', App\\Http\\Controllers\\PostController::class);";
    let content = read_routes(project.path(), "web.php");
    assert_eq!(content.matches(line).count(), 2);
    assert_eq!(content, format!("<?php\n\n{line}\n{line}"));
}

#[test]
fn test_missing_route_table_fails_after_generators_ran() {
    let project = TempDir::new().unwrap();
    let mut scaffolder = Scaffolder::new(
        RecordingGenerators::default(),
        FileRouteStore::new(project.path().join("routes")),
    );

    let result = scaffolder.run(&ScaffoldInput::new("post", OptionSet::default()));

    assert!(matches!(
        result,
        Err(make_crud::CrudError::RouteAppend { .. })
    ));
    // Model and controller stay generated; views never ran.
    assert_eq!(scaffolder.generators().commands.len(), 2);
}
