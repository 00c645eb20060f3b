//! Library-level end-to-end tests: parse action metadata, update a README
//! document in memory, and compare against the expected serialization.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use readme_content::Document;

const ACTION_YAML: &str = r#"
name: Deploy Preview
description: Deploys a preview environment for the current branch.
inputs:
  api-token:
    description: Token used to authenticate against the deploy API.
    required: true
  environment:
    description: Target environment name.
    default: staging
outputs:
  preview-url:
    description: URL of the deployed preview.
"#;

fn version_env(version: &str) -> HashMap<String, String> {
    HashMap::from([("VERSION".to_string(), version.to_string())])
}

fn doc_from(lines: &[&str]) -> Document {
    Document::from_lines("README.md", lines.iter().map(|l| l.to_string()).collect())
}

#[test]
fn full_update_round_trip() {
    let action = readme_action::parse_str(ACTION_YAML).unwrap();
    let mut doc = doc_from(&[
        "# <!--name--><!--/name-->",
        "",
        "Some hand-written intro that must survive.",
        "",
        "<!--description-->",
        "<!--/description-->",
        "## Inputs",
        "<!--inputs-->",
        "<!--/inputs-->",
        "## Outputs",
        "<!--outputs-->",
        "<!--/outputs-->",
        "## Usage",
        r#"<!--usage action="acme/deploy-preview" version="env:VERSION"-->"#,
        "```yaml",
        "steps:",
        "  - uses: acme/deploy-preview@v1.0.0",
        "```",
        "<!--/usage-->",
    ]);

    doc.update(&action, &version_env("v2.0.0")).unwrap();

    let expected = [
        "# <!--name-->Deploy Preview<!--/name-->",
        "",
        "Some hand-written intro that must survive.",
        "",
        "<!--description-->",
        "Deploys a preview environment for the current branch.",
        "<!--/description-->",
        "## Inputs",
        "<!--inputs-->",
        "| Name          | Description                                        | Required | Default   |",
        "|---------------|----------------------------------------------------|----------|-----------|",
        "| `api-token`   | Token used to authenticate against the deploy API. | `true`   | ` `       |",
        "| `environment` | Target environment name.                           | `false`  | `staging` |",
        "<!--/inputs-->",
        "## Outputs",
        "<!--outputs-->",
        "| Name          | Description                  |",
        "|---------------|------------------------------|",
        "| `preview-url` | URL of the deployed preview. |",
        "<!--/outputs-->",
        "## Usage",
        r#"<!--usage action="acme/deploy-preview" version="env:VERSION"-->"#,
        "```yaml",
        "steps:",
        "  - uses: acme/deploy-preview@v2.0.0",
        "```",
        "<!--/usage-->",
    ]
    .join("\n");

    assert_eq!(doc.to_string(), expected);
}

#[test]
fn update_is_idempotent_end_to_end() {
    let action = readme_action::parse_str(ACTION_YAML).unwrap();
    let mut doc = Document::scaffold("README.md");
    let env = version_env("v2.0.0");

    doc.update(&action, &env).unwrap();
    let once = doc.clone();
    doc.update(&action, &env).unwrap();

    assert_eq!(doc, once);
}

#[test]
fn declaration_order_drives_table_order() {
    let action = readme_action::parse_str(ACTION_YAML).unwrap();
    assert_eq!(action.inputs_order, vec!["api-token", "environment"]);

    let mut doc = doc_from(&["<!--inputs-->", "<!--/inputs-->"]);
    doc.update(&action, &HashMap::new()).unwrap();
    let text = doc.to_string();
    let first = text.find("`api-token`").unwrap();
    let second = text.find("`environment`").unwrap();
    assert!(first < second);
}
