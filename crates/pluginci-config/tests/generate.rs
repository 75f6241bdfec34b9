use pluginci_config::{ConfigError, GenerateOptions, Parameters, generate};
use pluginci_core::{Project, RelativeId, Requirement};
use proptest::prelude::*;

fn base_params(versions: &str) -> Parameters {
    Parameters::new()
        .with("vcs.name", "test-git-repo")
        .with("vcs.url", "https://github.com/rodm/test-repo")
        .with("teamcity.api.versions", versions)
}

fn run(params: &Parameters) -> Project {
    generate(params, &GenerateOptions::default()).unwrap()
}

fn padded(value: &str, left: usize, right: usize) -> String {
    format!("{}{}{}", " ".repeat(left), value, " ".repeat(right))
}

#[test]
fn builds_for_each_api_version() {
    let project = run(&base_params("2018.1,2022.04,2025.03"));

    let names: Vec<&str> = project.build_types.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Build - TeamCity 2018.1",
            "Build - TeamCity 2022.04",
            "Build - TeamCity 2025.03",
            "Report - Code Quality",
        ]
    );

    for (build, version) in project.build_types.iter().zip(["2018.1", "2022.04", "2025.03"]) {
        assert_eq!(
            build.params.get("gradle.opts"),
            Some(format!("-Pteamcity.api.version={}", version).as_str())
        );
    }

    let with_artifacts: Vec<&RelativeId> = project
        .build_types
        .iter()
        .filter(|b| b.artifact_rules.is_some())
        .map(|b| &b.id)
        .collect();
    assert_eq!(with_artifacts, vec![&RelativeId::new("Build1")]);
}

#[test]
fn effective_parameters_merge_template_defaults() {
    let params = base_params("2025.03")
        .with("gradle.tasks", "jar check")
        .with("java.home", "%java17.home%");
    let project = run(&params);
    let template = &project.templates[0];

    let build = &project.build_types[0];
    let effective = build.effective_params(template);
    assert_eq!(effective.get("gradle.opts"), Some("-Pteamcity.api.version=2025.03"));
    assert_eq!(effective.get("gradle.tasks"), Some("jar check"));
    assert_eq!(effective.get("java.home"), Some("%java17.home%"));

    let report = &project.build_types[1];
    let effective = report.effective_params(template);
    assert_eq!(effective.get("gradle.tasks"), Some("clean build sonar"));
}

#[test]
fn docker_requirement_on_every_build() {
    let project = run(&base_params("2018.1,2022.04,2025.03").with("agent.requirements", "docker"));

    for build in &project.build_types {
        assert_eq!(
            build.requirements,
            vec![Requirement::exists("docker.server.version")]
        );
    }
}

#[test]
fn requirement_on_single_build() {
    let project = run(&base_params("2018.1,2022.04,2025.03").with("agent.requirements", "Build1=docker"));

    assert_eq!(project.build_types[0].requirements.len(), 1);
    assert!(project.build_types[1..].iter().all(|b| b.requirements.is_empty()));
}

#[test]
fn invalid_build_id_fails() {
    let params = base_params("2018.1,2022.04,2025.03").with("agent.requirements", "Build4=linux");
    let err = generate(&params, &GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBuildId(_)));
    assert_eq!(err.to_string(), "Invalid build id: Build4");
}

#[test]
fn invalid_authentication_method_fails() {
    let params = base_params("2025.03").with("vcs.auth.method", "invalid");
    let err = generate(&params, &GenerateOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid authentication method: invalid");
}

#[test]
fn empty_api_versions_fail() {
    let err = generate(&base_params(""), &GenerateOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Empty API versions list");
}

#[test]
fn parameters_from_kdl_file_contents() {
    let kdl = r#"
        param "vcs.name" "test-git-repo"
        param "teamcity.api.versions" "2022.04, 2025.03"

        params {
            vcs.auth.method "password"
            vcs.auth.username "git"
            agent.requirements "Build2=windows"
        }
    "#;
    let project = run(&Parameters::from_kdl(kdl).unwrap());

    assert_eq!(project.build_types.len(), 3);
    assert!(project.build_types[0].requirements.is_empty());
    assert_eq!(project.build_types[1].requirements.len(), 1);
}

#[test]
fn serialized_project_shape() {
    let project = run(&base_params("2025.03"));
    let json = serde_json::to_value(&project).unwrap();

    assert_eq!(json["vcs_roots"][0]["id"], "TestGitRepo");
    assert_eq!(json["vcs_roots"][0]["auth_method"]["type"], "anonymous");
    assert_eq!(json["vcs_roots"][0]["branch_spec"][1], "+:refs/tags/(*)");
    assert_eq!(json["build_types"][0]["templates"][0], "Build");
    assert!(json["build_types"][1].get("artifact_rules").is_none());
    assert_eq!(json["build_types_order"][1], "ReportCodeQuality");
}

fn version() -> impl Strategy<Value = String> {
    "20[0-9]{2}\\.[0-9]{1,2}"
}

fn requirement_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["linux", "macos", "solaris", "windows", "docker"])
}

proptest! {
    #[test]
    fn matrix_numbers_builds_in_input_order(versions in prop::collection::vec(version(), 1..8)) {
        let project = run(&base_params(&versions.join(",")));

        prop_assert_eq!(project.build_types.len(), versions.len() + 1);
        for (index, version) in versions.iter().enumerate() {
            let build = &project.build_types[index];
            prop_assert_eq!(build.id.as_str(), format!("Build{}", index + 1));
            prop_assert_eq!(&build.name, &format!("Build - TeamCity {}", version));
            prop_assert_eq!(build.artifact_rules.is_some(), index == 0);
        }
        prop_assert_eq!(
            project.build_types_order.last(),
            Some(&RelativeId::new("ReportCodeQuality"))
        );
    }

    #[test]
    fn whitespace_around_versions_is_ignored(
        versions in prop::collection::vec((version(), 0usize..3, 0usize..3), 1..6)
    ) {
        let plain: Vec<&str> = versions.iter().map(|(v, _, _)| v.as_str()).collect();
        let spaced: Vec<String> = versions.iter().map(|(v, l, r)| padded(v, *l, *r)).collect();

        let expected = run(&base_params(&plain.join(",")));
        let actual = run(&base_params(&spaced.join(",")));
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn whitespace_around_requirement_tokens_is_ignored(
        build in 1usize..4,
        name in requirement_name(),
        left in 0usize..3,
        right in 0usize..3
    ) {
        let versions = "2018.1,2022.04,2025.03";
        let plain = format!("Build{}={}", build, name);
        let spaced = format!(
            "{}={}",
            padded(&format!("Build{}", build), left, right),
            padded(name, right, left)
        );

        let expected = run(&base_params(versions).with("agent.requirements", plain));
        let actual = run(&base_params(versions).with("agent.requirements", spaced));
        prop_assert_eq!(&expected, &actual);
        prop_assert_eq!(expected.build_types[build - 1].requirements.len(), 1);
    }

    #[test]
    fn generation_is_deterministic(
        versions in prop::collection::vec(version(), 1..5),
        names in prop::collection::vec(requirement_name(), 0..4)
    ) {
        let params = base_params(&versions.join(","))
            .with("agent.requirements", names.join(","));

        let first = serde_json::to_string(&run(&params)).unwrap();
        let second = serde_json::to_string(&run(&params)).unwrap();
        prop_assert_eq!(first, second);
    }
}
