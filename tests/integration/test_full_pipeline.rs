//! Full pipeline tests - whole package directories across repeated runs

use crate::assert_generated_contains;
use crate::common::TestProject;
use crate::fixtures;

#[test]
fn test_every_template_gets_its_own_file() {
    let project = TestProject::new();
    project
        .write_file("main.go", "package main\n")
        .write_file("hello.vue", fixtures::HELLO)
        .write_file("Widget.vue", fixtures::WIDGET)
        .write_file("todo.vue", fixtures::WITH_SCRIPT_AND_STYLE);

    let generated = project.generate().unwrap();

    let mut names: Vec<&str> = generated.iter().map(|g| g.constant.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["hello", "todo", "widget"]);
    assert!(project.file_exists("hello.go"));
    assert!(project.file_exists("Widget.go"));
    assert!(project.file_exists("todo.go"));
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let project = TestProject::new();
    project.write_file("hello.vue", fixtures::HELLO);
    project.generate().unwrap();

    project.write_file("hello.vue", "<template><p>{{ Other }}</p></template>");
    project.generate().unwrap();

    let content = project.read_file("hello.go");
    assert_generated_contains!(content, "const hello = \"<p>{{ Other }}</p>\"");
    assert!(!content.contains("Message"));
}

#[test]
fn test_rerun_is_stable() {
    let project = TestProject::new();
    project.write_file("todo.vue", fixtures::WITH_SCRIPT_AND_STYLE);

    project.generate().unwrap();
    let first = project.read_file("todo.go");
    project.generate().unwrap();

    assert_eq!(project.read_file("todo.go"), first);
}

#[test]
fn test_nested_template_is_part_of_payload() {
    let project = TestProject::new();
    project.write_file("panel.vue", fixtures::NESTED_TEMPLATE);

    let generated = project.generate().unwrap();
    let value = &generated[0].constant.value;

    assert!(value.starts_with("<div>"), "got {}", value);
    assert_generated_contains!(value, r#"<template v-if="Visible"><b>shown</b></template>"#);
}

#[test]
fn test_no_temporary_files_are_left_behind() {
    let project = TestProject::new();
    project
        .write_file("hello.vue", fixtures::HELLO)
        .write_file("Widget.vue", fixtures::WIDGET);

    project.generate().unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(project.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
