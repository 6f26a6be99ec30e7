//! Basic generation tests - one template in, one Go constant out

use crate::assert_generated_contains;
use crate::common::TestProject;
use crate::fixtures;

#[test]
fn test_hello_template_becomes_constant() {
    let project = TestProject::new();
    project.write_file("hello.vue", fixtures::HELLO);

    let generated = project.generate().unwrap();

    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].constant.name, "hello");
    assert_eq!(generated[0].constant.value, "<div>{{ Message }}</div>");
    assert_eq!(
        project.read_file("hello.go"),
        "// The vueg command generated this source from file: hello.vue, do not edit.\n\
         \n\
         package main\n\
         \n\
         const hello = \"<div>{{ Message }}</div>\"\n"
    );
}

#[test]
fn test_capitalised_file_gets_unexported_constant() {
    let project = TestProject::new();
    project.write_file("Widget.vue", fixtures::WIDGET);

    project.generate().unwrap();

    assert!(project.file_exists("Widget.go"));
    let content = project.read_file("Widget.go");
    assert_generated_contains!(content, "from file: Widget.vue, do not edit.");
    assert_generated_contains!(content, "const widget = \"<span>X</span>\"");
}

#[test]
fn test_only_first_template_element_is_kept() {
    let project = TestProject::new();
    project.write_file("todo.vue", fixtures::WITH_SCRIPT_AND_STYLE);

    let generated = project.generate().unwrap();
    let value = &generated[0].constant.value;

    assert!(value.starts_with(r#"<ul class="todos">"#), "got {}", value);
    assert!(value.ends_with("</ul>"), "got {}", value);
    assert_generated_contains!(value, r#"<li v-for="todo in Todos">{{ todo.Text }}</li>"#);
    assert!(!value.contains("footer"));
    assert!(!value.contains("the list"));
    assert!(!value.contains("export default"));
    assert!(!value.contains(".todos"));
}

#[test]
fn test_empty_elements_keep_end_tags() {
    let project = TestProject::new();
    project.write_file("form.vue", fixtures::VOID_AND_EMPTY);

    let generated = project.generate().unwrap();
    let value = &generated[0].constant.value;

    assert_generated_contains!(value, "<span></span><br>");
    assert!(!value.contains("</br>"));
    assert!(value.ends_with("</p>"));
}

#[test]
fn test_package_name_is_taken_from_config() {
    let project = TestProject::new();
    project.write_file("hello.vue", fixtures::HELLO);

    let config = vueg::GenerateConfig::new("views")
        .with_template_dir(project.path())
        .with_go_file("views.go");
    project.generate_with(&config).unwrap();

    assert_generated_contains!(project.read_file("hello.go"), "\npackage views\n");
}

#[test]
fn test_non_template_files_are_ignored() {
    let project = TestProject::new();
    project
        .write_file("hello.vue", fixtures::HELLO)
        .write_file("main.go", "package main\n")
        .write_file("notes.txt", "<template><b></b></template>")
        .write_file("layout.VUE", "<template><b></b></template>");

    let generated = project.generate().unwrap();

    assert_eq!(generated.len(), 1);
    assert!(!project.file_exists("notes.go"));
    assert!(!project.file_exists("layout.go"));
    assert_eq!(project.read_file("main.go"), "package main\n");
}
