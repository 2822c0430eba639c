//! Per-kind step building: copy the present argument fields of a node into
//! its step's `Arguments`.
//!
//! Only known fields are copied. Blank strings and empty optional lists or
//! maps are dropped so they never reach the output as empty values.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use super::expand;
use crate::parse::types::*;
use crate::pipeline::types::{Step, StepType};

/// Build the step(s) for one connected node.
pub fn build_steps(node: &Node, name: &str, depends_on: Option<Vec<String>>) -> Vec<Step> {
    let (step_type, arguments) = match &node.data {
        NodeData::DataProcess(b) => (
            StepType::Processing,
            to_json_object(&data_process_args(&typed(&b.arguments))),
        ),
        NodeData::TrainModel(b) => (
            StepType::Training,
            to_json_object(&train_model_args(&typed(&b.arguments))),
        ),
        NodeData::CreateModel(b) => (
            StepType::Model,
            to_json_object(&create_model_args(&typed(&b.arguments))),
        ),
        NodeData::DeployModelBatchInference(b) => (
            StepType::Transform,
            to_json_object(&batch_inference_args(&typed(&b.arguments))),
        ),
        NodeData::DeployModelEndpoint(b) => {
            return expand::expand_endpoint(&typed(&b.arguments), name, depends_on).into();
        }
    };

    vec![Step::new(name, step_type, arguments).with_depends_on(depends_on)]
}

/// Typed view of a node's arguments. Compilation only runs on validated
/// nodes, so an unreadable object never gets here; it builds as empty.
fn typed<A: DeserializeOwned + Default>(args: &Option<Arguments<A>>) -> A {
    args.as_ref()
        .and_then(|a| a.typed().ok())
        .unwrap_or_default()
}

fn non_blank(s: &Option<String>) -> Option<String> {
    s.clone().filter(|s| !s.is_empty())
}

fn non_blank_arg(v: &Option<ArgValue>) -> Option<ArgValue> {
    v.clone().filter(|v| !v.is_blank())
}

fn non_empty<T: Clone>(v: &Option<Vec<T>>) -> Option<Vec<T>> {
    v.clone().filter(|v| !v.is_empty())
}

fn non_empty_map<V: Clone>(m: &Option<BTreeMap<String, V>>) -> Option<BTreeMap<String, V>> {
    m.clone().filter(|m| !m.is_empty())
}

fn stopping(sc: &Option<StoppingCondition>) -> Option<StoppingCondition> {
    sc.as_ref()
        .and_then(|s| s.max_runtime_in_seconds.clone())
        .map(|max| StoppingCondition {
            max_runtime_in_seconds: Some(max),
        })
}

fn data_process_args(a: &DataProcessArgs) -> DataProcessArgs {
    DataProcessArgs {
        role_arn: non_blank_arg(&a.role_arn),
        processing_resources: a
            .processing_resources
            .as_ref()
            .and_then(|r| r.cluster_config.clone())
            .map(|cfg| ProcessingResources {
                cluster_config: Some(cfg),
            }),
        app_specification: a.app_specification.as_ref().map(|app| AppSpecification {
            image_uri: app.image_uri.clone(),
            container_entrypoint: non_empty(&app.container_entrypoint),
            container_arguments: non_empty(&app.container_arguments),
        }),
        processing_inputs: a.processing_inputs.as_ref().map(|inputs| {
            inputs
                .iter()
                .map(|input| ProcessingInput {
                    input_name: input.input_name.clone(),
                    s3_input: Some(input.s3_input.clone().unwrap_or_default()),
                })
                .collect()
        }),
        processing_output_config: a
            .processing_output_config
            .as_ref()
            .and_then(|c| c.outputs.as_ref())
            .map(|outputs| ProcessingOutputConfig {
                outputs: Some(
                    outputs
                        .iter()
                        .map(|output| ProcessingOutput {
                            output_name: output.output_name.clone(),
                            s3_output: Some(output.s3_output.clone().unwrap_or_default()),
                        })
                        .collect(),
                ),
            }),
        stopping_condition: stopping(&a.stopping_condition),
    }
}

fn train_model_args(a: &TrainModelArgs) -> TrainModelArgs {
    TrainModelArgs {
        role_arn: non_blank_arg(&a.role_arn),
        algorithm_specification: a.algorithm_specification.clone(),
        resource_config: a.resource_config.clone(),
        input_data_config: a.input_data_config.as_ref().map(|channels| {
            channels
                .iter()
                .map(|channel| {
                    let s3 = channel
                        .data_source
                        .as_ref()
                        .and_then(|d| d.s3_data_source.clone())
                        .unwrap_or_default();
                    TrainingInput {
                        channel_name: channel.channel_name.clone(),
                        data_source: Some(TrainingDataSource {
                            s3_data_source: Some(s3),
                        }),
                        content_type: non_blank(&channel.content_type),
                        input_mode: non_blank(&channel.input_mode),
                    }
                })
                .collect()
        }),
        output_data_config: a.output_data_config.clone(),
        stopping_condition: stopping(&a.stopping_condition),
        hyper_parameters: non_empty_map(&a.hyper_parameters),
    }
}

fn create_model_args(a: &CreateModelArgs) -> CreateModelArgs {
    CreateModelArgs {
        execution_role_arn: non_blank_arg(&a.execution_role_arn),
        primary_container: a.primary_container.as_ref().map(|pc| PrimaryContainer {
            image: pc.image.clone(),
            model_data_url: pc.model_data_url.clone(),
            environment: non_empty_map(&pc.environment),
        }),
    }
}

fn batch_inference_args(a: &BatchInferenceArgs) -> BatchInferenceArgs {
    BatchInferenceArgs {
        model_name: a.model_name.clone().filter(|m| !m.is_blank()),
        transform_input: a.transform_input.as_ref().map(|ti| {
            let s3 = ti
                .data_source
                .as_ref()
                .and_then(|d| d.s3_data_source.as_ref());
            TransformInput {
                data_source: Some(TrainingDataSource {
                    s3_data_source: Some(S3DataSource {
                        s3_data_type: s3.and_then(|s| s.s3_data_type.clone()),
                        s3_uri: s3.and_then(|s| s.s3_uri.clone()),
                        s3_data_distribution_type: None,
                    }),
                }),
                content_type: non_blank(&ti.content_type),
                compression_type: non_blank(&ti.compression_type),
                split_type: non_blank(&ti.split_type),
            }
        }),
        transform_output: a.transform_output.as_ref().map(|to| TransformOutput {
            s3_output_path: to.s3_output_path.clone(),
            accept: non_blank(&to.accept),
            assemble_with: non_blank(&to.assemble_with),
        }),
        transform_resources: a.transform_resources.clone(),
        data_capture_config: a.data_capture_config.clone(),
    }
}
