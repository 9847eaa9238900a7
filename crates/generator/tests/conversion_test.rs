//! Integration test for XRD to OpenAPI conversion

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use xrd_openapi_common::{ErrorKind, HttpMethod};
use xrd_openapi_generator::{convert_definition, convert_file, ConvertOptions};
use xrd_openapi_parser::XrdParser;

const WIDGETS_PATH: &str = "/apis/example.org/v1/widgets/{namespace}/{name}";

fn widgets_xrd(versions: &str) -> String {
    format!(
        r#"
apiVersion: apiextensions.crossplane.io/v1
kind: CompositeResourceDefinition
metadata:
  name: widgets.example.org
spec:
  group: example.org
  names:
    kind: XWidget
    plural: xwidgets
  claimNames:
    kind: Widget
    plural: widgets
  versions:
{}"#,
        versions
    )
}

const REFERENCEABLE_V1: &str = r#"    - name: v1
      served: true
      referenceable: true
      schema:
        openAPIV3Schema:
          properties:
            status:
              type: object
            foo:
              type: string
"#;

#[test]
fn test_end_to_end_example() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("widgets.yaml");
    fs::write(&path, widgets_xrd(REFERENCEABLE_V1)).unwrap();

    let conversion = convert_file(&path, &ConvertOptions::default()).unwrap();

    let document: Value = serde_json::from_slice(&conversion.document_json).unwrap();
    let schema = json!({ "properties": { "foo": { "type": "string" } } });
    assert_eq!(
        document,
        json!({
            "openapi": "3.0.0",
            "info": { "title": "XRD openapi", "version": "v0.1.0" },
            "paths": {
                WIDGETS_PATH: {
                    "post": {
                        "parameters": [
                            { "name": "namespace", "in": "path", "required": true, "schema": { "type": "string" } },
                            { "name": "name", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "requestBody": {
                            "content": { "application/json": { "schema": schema } },
                            "required": true
                        },
                        "responses": {
                            "200": {
                                "description": "Success",
                                "content": { "application/json": { "schema": schema } }
                            }
                        }
                    }
                }
            }
        })
    );

    assert_eq!(conversion.config.provider.name, "example_crossplane");
    assert_eq!(conversion.config.resources.len(), 1);
    let resource = &conversion.config.resources["widgets_example_org"];
    let methods: Vec<HttpMethod> = resource
        .operations()
        .iter()
        .map(|(_, op)| op.method)
        .collect();
    assert_eq!(
        methods,
        vec![
            HttpMethod::Post,
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Delete
        ]
    );
    for (_, op) in resource.operations() {
        assert_eq!(op.path, WIDGETS_PATH);
    }
}

#[test]
fn test_document_json_is_compact_and_ordered() {
    let xrd = XrdParser::from_yaml(&widgets_xrd(REFERENCEABLE_V1))
        .unwrap()
        .into_definition();

    let conversion = convert_definition(&xrd, &ConvertOptions::default()).unwrap();
    let text = String::from_utf8(conversion.document_json).unwrap();

    assert!(text.starts_with(
        r#"{"openapi":"3.0.0","info":{"title":"XRD openapi","version":"v0.1.0"},"paths":{"#
    ));
    assert!(!text.contains("status"));
}

#[test]
fn test_path_and_sources_agree() {
    let xrd = XrdParser::from_yaml(&widgets_xrd(REFERENCEABLE_V1))
        .unwrap()
        .into_definition();

    let conversion = convert_definition(&xrd, &ConvertOptions::default()).unwrap();

    let paths: Vec<&String> = conversion.document.paths.keys().collect();
    assert_eq!(paths, vec![WIDGETS_PATH]);
    assert_eq!(conversion.sources.len(), 1);
    assert_eq!(conversion.sources[0].path, WIDGETS_PATH);
    assert_eq!(conversion.sources[0].version, "v1");
    assert!(conversion.document.post_request_schema(WIDGETS_PATH).is_some());
}

#[test]
fn test_first_referenceable_version_is_used() {
    let versions = r#"    - name: v1alpha1
      referenceable: false
      schema:
        openAPIV3Schema:
          properties:
            old:
              type: string
    - name: v1beta1
      referenceable: true
      schema:
        openAPIV3Schema:
          properties:
            beta:
              type: string
    - name: v1
      referenceable: true
      schema:
        openAPIV3Schema:
          properties:
            stable:
              type: string
"#;
    let xrd = XrdParser::from_yaml(&widgets_xrd(versions))
        .unwrap()
        .into_definition();

    let conversion = convert_definition(&xrd, &ConvertOptions::default()).unwrap();

    let path = "/apis/example.org/v1beta1/widgets/{namespace}/{name}";
    let schema = conversion.document.post_request_schema(path).unwrap();
    assert!(schema.has_property("beta"));
    assert!(!schema.has_property("stable"));
}

#[test]
fn test_missing_claim_names_yields_empty_plural_segment() {
    let yaml = r#"
metadata:
  name: widgets.example.org
spec:
  group: example.org
  versions:
    - name: v1
      referenceable: true
      schema:
        openAPIV3Schema:
          type: object
"#;
    let xrd = XrdParser::from_yaml(yaml).unwrap().into_definition();

    let conversion = convert_definition(&xrd, &ConvertOptions::default()).unwrap();

    let path = "/apis/example.org/v1//{namespace}/{name}";
    assert!(conversion.document.paths.contains_key(path));
    assert_eq!(conversion.config.resources["widgets_example_org"].create.path, path);
}

#[test]
fn test_selected_version_reported_once() {
    let versions = r#"    - name: v1beta1
      referenceable: true
      schema:
        openAPIV3Schema:
          type: object
    - name: v1
      referenceable: true
      schema:
        openAPIV3Schema:
          type: object
"#;
    let xrd = XrdParser::from_yaml(&widgets_xrd(versions))
        .unwrap()
        .into_definition();

    let conversion = convert_definition(&xrd, &ConvertOptions::default()).unwrap();
    assert_eq!(conversion.selected_version(), Some("v1beta1"));
}

#[test]
fn test_custom_provider_name() {
    let xrd = XrdParser::from_yaml(&widgets_xrd(REFERENCEABLE_V1))
        .unwrap()
        .into_definition();
    let options = ConvertOptions {
        provider_name: "acme".to_string(),
    };

    let conversion = convert_definition(&xrd, &options).unwrap();
    assert_eq!(conversion.config.provider.name, "acme");
}

#[test]
fn test_no_referenceable_version() {
    let versions = "    - name: v1\n      schema:\n        openAPIV3Schema:\n          type: object\n";
    let xrd = XrdParser::from_yaml(&widgets_xrd(versions))
        .unwrap()
        .into_definition();

    let err = convert_definition(&xrd, &ConvertOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Selection);
    assert_eq!(err.to_string(), "no referenceable version for XRD");
}

#[test]
fn test_referenceable_version_without_schema() {
    let versions = "    - name: v1\n      referenceable: true\n";
    let xrd = XrdParser::from_yaml(&widgets_xrd(versions))
        .unwrap()
        .into_definition();

    let err = convert_definition(&xrd, &ConvertOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaMissing);
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let err = convert_file(temp_dir.path().join("nope.yaml"), &ConvertOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
}
