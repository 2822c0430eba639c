//! Integration tests for node validation and the pre-compile report.

mod helpers;

use helpers::{
    data_process, data_process_args, data_process_node, edge, endpoint, endpoint_args,
    endpoint_node, processing_input,
};
use pipeline_graph::parse;
use pipeline_graph::parse::types::*;
use pipeline_graph::validate::{self, summarize_reports};

#[test]
fn well_formed_nodes_are_valid() {
    assert!(validate::validate(&data_process("a", "prep")).valid);
    assert!(validate::validate(&endpoint("e", "ep")).valid);
    for node in helpers::endpoint_graph().nodes {
        let result = validate::validate(&node);
        assert!(result.valid, "{:?}", result.errors);
    }
}

#[test]
fn missing_inputs_reported_then_fixed() {
    let mut args = data_process_args();
    args.processing_inputs = None;

    let result = validate::validate(&data_process_node("a", "prep", &args));
    assert!(!result.valid);
    assert!(result.has_error_at("Arguments.ProcessingInputs"));

    args.processing_inputs = Some(vec![processing_input()]);
    let result = validate::validate(&data_process_node("a", "prep", &args));
    assert!(!result.has_error_at("Arguments.ProcessingInputs"));
    assert!(result.valid);
}

#[test]
fn empty_input_list_counts_as_missing() {
    let mut args = data_process_args();
    args.processing_inputs = Some(vec![]);
    let node = data_process_node("a", "prep", &args);
    assert!(validate::validate(&node).has_error_at("Arguments.ProcessingInputs"));
}

#[test]
fn name_and_type_are_checked() {
    let mut node = data_process("a", "has spaces");
    if let NodeData::DataProcess(body) = &mut node.data {
        body.step_type = Some("Training".into());
    }
    let result = validate::validate(&node);
    assert!(result.has_error_at("Name"));
    assert!(result.has_error_at("Type"));
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn missing_arguments_is_one_error() {
    let node = parse::parse_node(
        r#"{"id":"t","data":{"kind":"trainModel","Name":"train","Type":"Training"}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "Arguments");
}

#[test]
fn missing_parent_group_short_circuits() {
    let node = parse::parse_node(
        r#"{"id":"b","data":{"kind":"deployModelBatchInference","Name":"batch","Type":"Transform",
            "Arguments":{"ModelName":"m","TransformInput":{},
                "TransformOutput":{"S3OutputPath":"s3://bucket/out"},
                "TransformResources":{"InstanceType":"ml.m5.large","InstanceCount":1}}}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["Arguments.TransformInput.DataSource"]);
}

#[test]
fn uris_must_be_s3_or_https() {
    let mut args = data_process_args();
    let input = &mut args.processing_inputs.as_mut().unwrap()[0];
    input.s3_input.as_mut().unwrap().s3_uri = Some(ArgValue::literal("/local/data"));

    let result = validate::validate(&data_process_node("a", "prep", &args));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "Arguments.ProcessingInputs[0].S3Input.S3Uri");
}

#[test]
fn model_data_url_accepts_get_references() {
    let node = parse::parse_node(
        r#"{"id":"m","data":{"kind":"createModel","Name":"model","Type":"Model",
            "Arguments":{"ExecutionRoleArn":"arn:aws:iam::1:role/r",
                "PrimaryContainer":{"ModelDataUrl":{"Get":""}}}}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    assert!(result.has_error_at("Arguments.PrimaryContainer.ModelDataUrl.Get"));
}

#[test]
fn depends_on_entries_use_the_name_pattern() {
    let mut node = endpoint("e", "ep");
    if let NodeData::DeployModelEndpoint(body) = &mut node.data {
        body.depends_on = Some(vec!["ok".into(), "not ok".into()]);
    }
    let result = validate::validate(&node);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "DependsOn[1]");
}

#[test]
fn all_errors_are_collected() {
    let node = parse::parse_node(
        r#"{"id":"e","data":{"kind":"deployModelEndpoint","Name":"ep","Type":"Endpoint",
            "Arguments":{"EndpointConfig":{"ProductionVariants":[{}]}}}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Arguments.EndpointName",
            "Arguments.EndpointConfig.ProductionVariants[0].InitialInstanceCount",
            "Arguments.EndpointConfig.ProductionVariants[0].InstanceType",
            "Arguments.EndpointConfig.ProductionVariants[0].VariantName",
            "Arguments.EndpointConfig.ProductionVariants[0].ModelName",
        ]
    );
}

#[test]
fn report_covers_connected_failures_only() {
    let graph = helpers::prep_train_graph();
    // The isolated scratch node is invalid but not part of the pipeline.
    assert!(validate::validate_connected(&graph.nodes, &graph.edges).is_empty());
    assert!(validate::validate_graph(&graph.nodes, &graph.edges).is_empty());

    let mut args = data_process_args();
    args.processing_inputs = None;
    let nodes = vec![data_process("a", "prep"), data_process_node("b", "train", &args)];
    let reports = validate::validate_connected(&nodes, &[edge("a", "b")]);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].node_id, "b");
    assert_eq!(
        summarize_reports(&reports),
        "Node Data Process (b) has validation errors:\n\
         - Arguments.ProcessingInputs: At least one ProcessingInput is required"
    );
}

#[test]
fn summary_truncates_after_five_errors() {
    let node = parse::parse_node(
        r#"{"id":"x","data":{"kind":"trainModel","label":"Train Model","Arguments":{}}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    assert!(result.errors.len() > 5);

    let summary = validate::summarize_errors(&node.id, node.label(), &result);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Node Train Model (x) has validation errors:");
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[6], format!("...and {} more.", result.errors.len() - 5));
}

#[test]
fn field_errors_map_to_kind_codes() {
    let mut args = endpoint_args("ep");
    args.endpoint_name = None;
    let nodes = vec![data_process("a", "prep"), endpoint_node("e", "ep", &args)];
    let errors = validate::validate_graph(&nodes, &[edge("a", "e")]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "N005");
    assert_eq!(
        errors[0].to_string(),
        "[Validate:N005] EndpointName is required (node 'e', at Arguments.EndpointName)"
    );
}

#[test]
fn unreadable_arguments_are_one_error() {
    let node = parse::parse_node(
        r#"{"id":"m","data":{"kind":"createModel","Name":"model","Type":"Model",
            "Arguments":{"PrimaryContainer":5}}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "Arguments");
    assert!(result.errors[0].message.starts_with("Arguments could not be read"));
}

#[test]
fn parameterized_role_and_counts_are_valid() {
    let node = parse::parse_node(
        r#"{"id":"t","data":{"kind":"deployModelBatchInference","Name":"batch","Type":"Transform",
            "Arguments":{"ModelName":{"Get":"Steps.model.ModelName"},
                "TransformInput":{"DataSource":{"S3DataSource":{"S3DataType":"S3Prefix","S3Uri":"s3://bucket/in"}}},
                "TransformOutput":{"S3OutputPath":"s3://bucket/out"},
                "TransformResources":{"InstanceType":{"Get":"Parameters.InstanceType"},
                    "InstanceCount":{"Get":"Parameters.Count"}}}}}"#,
    )
    .unwrap();
    let result = validate::validate(&node);
    assert!(result.valid, "{:?}", result.errors);
}
