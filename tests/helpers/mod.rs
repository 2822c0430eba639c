#![allow(dead_code)]

use pipeline_graph::parse::types::*;
use pipeline_graph::pipeline::types::Step;

// =============================================================================
// Fixtures
// =============================================================================

pub fn prep_train_graph() -> Graph {
    pipeline_graph::parse::parse_graph(include_str!("../fixtures/prep_train_graph.json"))
        .expect("fixture should parse")
}

pub fn endpoint_graph() -> Graph {
    pipeline_graph::parse::parse_graph(include_str!("../fixtures/endpoint_graph.json"))
        .expect("fixture should parse")
}

pub const IMPORTED_PIPELINE: &str = include_str!("../fixtures/imported_pipeline.json");

// =============================================================================
// Node builders
// =============================================================================

/// A data-process node that passes validation.
pub fn data_process(id: &str, name: &str) -> Node {
    data_process_node(id, name, &data_process_args())
}

pub fn data_process_node(id: &str, name: &str, args: &DataProcessArgs) -> Node {
    Node::new(id, NodeData::DataProcess(NodeBody::named(NodeKind::DataProcess, name, args)))
}

pub fn data_process_args() -> DataProcessArgs {
    DataProcessArgs {
        role_arn: Some(ArgValue::literal("arn:aws:iam::123456789012:role/PipelineExecution")),
        processing_resources: Some(ProcessingResources {
            cluster_config: Some(ClusterConfig {
                instance_count: Some(1.into()),
                instance_type: Some(ArgValue::literal("ml.m5.xlarge")),
                volume_size_in_gb: Some(30.into()),
            }),
        }),
        app_specification: Some(AppSpecification {
            image_uri: Some(ArgValue::literal(
                "123456789012.dkr.ecr.us-east-1.amazonaws.com/prep:latest",
            )),
            ..Default::default()
        }),
        processing_inputs: Some(vec![processing_input()]),
        processing_output_config: Some(ProcessingOutputConfig {
            outputs: Some(vec![ProcessingOutput {
                output_name: Some("out".into()),
                s3_output: Some(S3Output {
                    s3_uri: Some(ArgValue::literal("s3://ml-bucket/out")),
                    local_path: Some("/opt/ml/processing/output".into()),
                    s3_upload_mode: Some("EndOfJob".into()),
                }),
            }]),
        }),
        stopping_condition: None,
    }
}

pub fn processing_input() -> ProcessingInput {
    ProcessingInput {
        input_name: Some("raw".into()),
        s3_input: Some(S3Input {
            s3_uri: Some(ArgValue::literal("s3://ml-bucket/raw")),
            local_path: Some("/opt/ml/processing/input".into()),
            s3_data_type: Some("S3Prefix".into()),
            ..Default::default()
        }),
    }
}

/// An endpoint node with one production variant that passes validation.
pub fn endpoint(id: &str, name: &str) -> Node {
    endpoint_node(id, name, &endpoint_args(name))
}

pub fn endpoint_node(id: &str, name: &str, args: &EndpointArgs) -> Node {
    Node::new(
        id,
        NodeData::DeployModelEndpoint(NodeBody::named(NodeKind::DeployModelEndpoint, name, args)),
    )
}

pub fn endpoint_args(name: &str) -> EndpointArgs {
    EndpointArgs {
        endpoint_name: Some(ArgValue::literal(format!("{name}-live"))),
        endpoint_config: Some(EndpointConfig {
            production_variants: Some(vec![ProductionVariant {
                initial_instance_count: Some(1.into()),
                managed_instance_scaling: None,
                instance_type: Some(ArgValue::literal("ml.m5.large")),
                model_name: Some(ArgValue::literal("churn-model")),
                variant_name: Some("AllTraffic".into()),
            }]),
        }),
    }
}

pub fn edge(source: &str, target: &str) -> Edge {
    Edge::new(source, target)
}

// =============================================================================
// Step helpers
// =============================================================================

pub fn names(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(|s| s.name.as_str()).collect()
}

pub fn node_by_name<'a>(graph: &'a Graph, name: &str) -> &'a Node {
    graph
        .nodes
        .iter()
        .find(|n| n.data.explicit_name() == Some(name))
        .unwrap_or_else(|| panic!("no node named {name}"))
}

/// Edges as `(source step name, target step name)` pairs.
pub fn named_edges(graph: &Graph) -> Vec<(String, String)> {
    let name_of = |id: &str| {
        graph
            .nodes
            .iter()
            .find(|n| n.id == id)
            .and_then(|n| n.data.explicit_name())
            .unwrap_or_default()
            .to_string()
    };
    let mut pairs: Vec<_> = graph
        .edges
        .iter()
        .map(|e| (name_of(&e.source), name_of(&e.target)))
        .collect();
    pairs.sort();
    pairs
}
