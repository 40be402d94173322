use std::fs;

use tempfile::TempDir;
use u_staffing::config::{load_request, save_request, AppConfig, OutputFormat};
use u_staffing::generator::{demo_request, generate_seeded, CoverageGeneratorConfig};
use u_staffing::scheduler::{create_schedule, CoverageKpi};
use u_staffing::validation::{validate_input, validate_input_strict, validate_schedule};
use u_staffing::Error;

#[test]
fn test_schedule_from_toml_problem_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("curriculum.toml");
    fs::write(
        &path,
        r#"
subjects = ["Math", "Physics", "Chemistry"]

[[teachers]]
id = "A"
first_name = "Ada"
last_name = "Byron"
age = 40
email = "ada@example.com"
teachable = ["Math", "Physics"]

[[teachers]]
id = "B"
first_name = "Rosalind"
last_name = "Franklin"
age = 30
teachable = ["Chemistry"]
"#,
    )
    .unwrap();

    let request = load_request(&path).unwrap();
    assert_eq!(request.teachers.len(), 2);

    let schedule = create_schedule(&request.subjects, &request.teachers).unwrap();
    assert_eq!(schedule.teacher_ids(), vec!["A", "B"]);
    assert!(validate_schedule(&schedule, &request.subjects, &request.teachers).is_empty());
}

#[test]
fn test_infeasible_problem_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("curriculum.json");
    fs::write(
        &path,
        r#"{
            "subjects": ["Biology"],
            "teachers": [{ "id": "A", "age": 40, "teachable": ["Math"] }]
        }"#,
    )
    .unwrap();

    let request = load_request(&path).unwrap();
    let err = create_schedule(&request.subjects, &request.teachers).unwrap_err();
    assert!(err.uncovered.contains("Biology"));
}

#[test]
fn test_saved_instances_load_back_identically() {
    let temp_dir = TempDir::new().unwrap();
    let generated = generate_seeded(&CoverageGeneratorConfig::default(), 99);

    for name in ["nested/instance.toml", "instance.json"] {
        let path = temp_dir.path().join(name);
        save_request(&path, &generated).unwrap();
        assert_eq!(load_request(&path).unwrap(), generated);
    }
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("curriculum.yaml");
    fs::write(&path, "subjects: []").unwrap();

    let err = load_request(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));

    let err = save_request(&path, &demo_request()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_request(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_config_file_and_kpi_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("u-staffing.toml");
    fs::write(
        &path,
        r#"
[output]
format = "json"
show_kpi = false

[logging]
verbose = true
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.show_kpi);
    assert!(config.logging.verbose);

    let request = demo_request();
    let schedule = create_schedule(&request.subjects, &request.teachers).unwrap();
    let kpi = CoverageKpi::calculate(&schedule, &request.subjects, &request.teachers);
    let value = serde_json::to_value(&kpi).unwrap();
    assert_eq!(value["teachers_used"], 3);
    assert_eq!(value["load_by_teacher"]["shaw"], 2);
}

#[test]
fn test_idle_teacher_passes_strict_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("curriculum.json");
    fs::write(
        &path,
        r#"{
            "subjects": ["Math"],
            "teachers": [
                { "id": "A", "age": 40, "teachable": ["Math"] },
                { "id": "idle", "age": 25, "teachable": [] }
            ]
        }"#,
    )
    .unwrap();

    let request = load_request(&path).unwrap();
    assert!(validate_input(&request.subjects, &request.teachers).is_err());
    assert!(validate_input_strict(&request.subjects, &request.teachers).is_ok());

    let schedule = create_schedule(&request.subjects, &request.teachers).unwrap();
    assert_eq!(schedule.teacher_ids(), vec!["A"]);
}
