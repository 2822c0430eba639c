//! Per-node field validation.
//!
//! Each kind has one validator with the same shape: `Name`, `Type`, the
//! kind's required argument groups, then `DependsOn`. A missing parent group
//! is reported once; its children are not checked. All errors are collected.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::messages as msg;
use crate::parse::types::*;

pub static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-_]{1,64}$").expect("step name pattern"));

pub static S3_OR_HTTPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https|s3)://([^/]+)/?(.*)$").expect("uri pattern"));

pub const MAX_URI_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn push(errors: &mut Vec<ValidationError>, path: impl Into<String>, message: impl Into<String>) {
    errors.push(ValidationError {
        path: path.into(),
        message: message.into(),
    });
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn blank_arg(value: &Option<ArgValue>) -> bool {
    value.as_ref().is_none_or(ArgValue::is_blank)
}

/// Presence, then scheme/host shape for literals, then length.
fn check_uri(
    errors: &mut Vec<ValidationError>,
    path: String,
    label: &str,
    value: Option<&ArgValue>,
) {
    match value {
        None => push(errors, path, msg::required(label)),
        Some(v) if v.is_blank() => push(errors, path, msg::required(label)),
        Some(ArgValue::Literal(s)) => {
            if !S3_OR_HTTPS_RE.is_match(s) {
                push(errors, path, msg::URI);
            } else if s.len() > MAX_URI_LEN {
                push(errors, path, msg::max_len(MAX_URI_LEN));
            }
        }
        Some(ArgValue::Get { get }) => {
            if get.len() > MAX_URI_LEN {
                push(errors, path, msg::max_len(MAX_URI_LEN));
            }
        }
        Some(ArgValue::Expr(_)) => {}
    }
}

/// `Name`, `Type` and `Arguments` presence. Returns the typed arguments when
/// they are present and readable.
fn check_header<A: DeserializeOwned + Default>(
    body: &NodeBody<A>,
    kind: NodeKind,
    errors: &mut Vec<ValidationError>,
) -> Option<A> {
    let name_ok = body
        .step_name
        .as_deref()
        .is_some_and(|n| NAME_RE.is_match(n));
    if !name_ok {
        push(errors, "Name", msg::REGEX_NAME);
    }

    let expected = kind.step_type().as_str();
    if body.step_type.as_deref() != Some(expected) {
        push(errors, "Type", msg::type_must_be(expected));
    }

    match body.arguments.as_ref().map(Arguments::typed) {
        None => {
            push(errors, "Arguments", msg::required("Arguments"));
            None
        }
        Some(Err(e)) => {
            push(errors, "Arguments", msg::unreadable(&e.to_string()));
            None
        }
        Some(Ok(args)) => Some(args),
    }
}

fn check_depends_on<A>(body: &NodeBody<A>, errors: &mut Vec<ValidationError>) {
    for (i, item) in body.depends_on.iter().flatten().enumerate() {
        if !NAME_RE.is_match(item) {
            push(errors, msg::item("DependsOn", i, ""), msg::ITEM_REGEX);
        }
    }
}

/// Validate a node's data against its kind's rules.
pub fn validate_node_data(data: &NodeData) -> ValidationResult {
    match data {
        NodeData::DataProcess(b) => validate_data_process(b),
        NodeData::TrainModel(b) => validate_train_model(b),
        NodeData::CreateModel(b) => validate_create_model(b),
        NodeData::DeployModelBatchInference(b) => validate_batch_inference(b),
        NodeData::DeployModelEndpoint(b) => validate_endpoint(b),
    }
}

pub fn validate_data_process(body: &NodeBody<DataProcessArgs>) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(args) = check_header(body, NodeKind::DataProcess, &mut errors).as_ref() {
        let cluster = args
            .processing_resources
            .as_ref()
            .and_then(|r| r.cluster_config.as_ref());
        match cluster {
            None => push(
                &mut errors,
                msg::arg("ProcessingResources.ClusterConfig"),
                msg::required("ClusterConfig"),
            ),
            Some(cfg) => {
                if cfg.instance_count.is_none() {
                    push(
                        &mut errors,
                        msg::arg("ProcessingResources.ClusterConfig.InstanceCount"),
                        msg::required("InstanceCount"),
                    );
                }
                if cfg.volume_size_in_gb.is_none() {
                    push(
                        &mut errors,
                        msg::arg("ProcessingResources.ClusterConfig.VolumeSizeInGB"),
                        msg::required("VolumeSizeInGB"),
                    );
                }
                if blank_arg(&cfg.instance_type) {
                    push(
                        &mut errors,
                        msg::arg("ProcessingResources.ClusterConfig.InstanceType"),
                        msg::required("InstanceType"),
                    );
                }
            }
        }

        match &args.app_specification {
            None => push(
                &mut errors,
                msg::arg("AppSpecification"),
                msg::required("AppSpecification"),
            ),
            Some(app) if blank_arg(&app.image_uri) => push(
                &mut errors,
                msg::arg("AppSpecification.ImageUri"),
                msg::required("ImageUri"),
            ),
            Some(_) => {}
        }

        let inputs_path = msg::arg("ProcessingInputs");
        match args.processing_inputs.as_deref() {
            None | Some([]) => push(
                &mut errors,
                inputs_path,
                msg::at_least_one("ProcessingInput"),
            ),
            Some(inputs) => {
                for (i, input) in inputs.iter().enumerate() {
                    if blank(&input.input_name) {
                        push(
                            &mut errors,
                            msg::item(&inputs_path, i, "InputName"),
                            msg::required("InputName"),
                        );
                    }
                    let Some(s3) = &input.s3_input else {
                        push(
                            &mut errors,
                            msg::item(&inputs_path, i, "S3Input"),
                            msg::required("S3Input"),
                        );
                        continue;
                    };
                    check_uri(
                        &mut errors,
                        msg::item(&inputs_path, i, "S3Input.S3Uri"),
                        "S3Uri",
                        s3.s3_uri.as_ref(),
                    );
                    if blank(&s3.local_path) {
                        push(
                            &mut errors,
                            msg::item(&inputs_path, i, "S3Input.LocalPath"),
                            msg::required("LocalPath"),
                        );
                    }
                    if blank(&s3.s3_data_type) {
                        push(
                            &mut errors,
                            msg::item(&inputs_path, i, "S3Input.S3DataType"),
                            msg::required("S3DataType"),
                        );
                    }
                }
            }
        }

        let outputs_path = msg::arg("ProcessingOutputConfig.Outputs");
        let outputs = args
            .processing_output_config
            .as_ref()
            .and_then(|c| c.outputs.as_deref());
        match outputs {
            None | Some([]) => push(
                &mut errors,
                outputs_path,
                msg::at_least_one("ProcessingOutput"),
            ),
            Some(outputs) => {
                for (i, output) in outputs.iter().enumerate() {
                    if blank(&output.output_name) {
                        push(
                            &mut errors,
                            msg::item(&outputs_path, i, "OutputName"),
                            msg::required("OutputName"),
                        );
                    }
                    let Some(s3) = &output.s3_output else {
                        push(
                            &mut errors,
                            msg::item(&outputs_path, i, "S3Output"),
                            msg::required("S3Output"),
                        );
                        continue;
                    };
                    check_uri(
                        &mut errors,
                        msg::item(&outputs_path, i, "S3Output.S3Uri"),
                        "S3Uri",
                        s3.s3_uri.as_ref(),
                    );
                    if blank(&s3.local_path) {
                        push(
                            &mut errors,
                            msg::item(&outputs_path, i, "S3Output.LocalPath"),
                            msg::required("LocalPath"),
                        );
                    }
                    if blank(&s3.s3_upload_mode) {
                        push(
                            &mut errors,
                            msg::item(&outputs_path, i, "S3Output.S3UploadMode"),
                            msg::required("S3UploadMode"),
                        );
                    }
                }
            }
        }

        if let Some(sc) = &args.stopping_condition {
            if sc.max_runtime_in_seconds.is_none() {
                push(
                    &mut errors,
                    msg::arg("StoppingCondition.MaxRuntimeInSeconds"),
                    "MaxRuntimeInSeconds is required when StoppingCondition is provided",
                );
            }
        }
    }

    check_depends_on(body, &mut errors);
    ValidationResult::from_errors(errors)
}

pub fn validate_train_model(body: &NodeBody<TrainModelArgs>) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(args) = check_header(body, NodeKind::TrainModel, &mut errors).as_ref() {
        match &args.algorithm_specification {
            None => push(
                &mut errors,
                msg::arg("AlgorithmSpecification"),
                msg::required("AlgorithmSpecification"),
            ),
            Some(alg) => {
                if blank_arg(&alg.training_image) {
                    push(
                        &mut errors,
                        msg::arg("AlgorithmSpecification.TrainingImage"),
                        msg::required("TrainingImage"),
                    );
                }
                if blank(&alg.training_input_mode) {
                    push(
                        &mut errors,
                        msg::arg("AlgorithmSpecification.TrainingInputMode"),
                        msg::required("TrainingInputMode"),
                    );
                }
            }
        }

        match &args.resource_config {
            None => push(
                &mut errors,
                msg::arg("ResourceConfig"),
                msg::required("ResourceConfig"),
            ),
            Some(rc) => {
                if blank_arg(&rc.instance_type) {
                    push(
                        &mut errors,
                        msg::arg("ResourceConfig.InstanceType"),
                        msg::required("InstanceType"),
                    );
                }
                if rc.instance_count.is_none() {
                    push(
                        &mut errors,
                        msg::arg("ResourceConfig.InstanceCount"),
                        msg::required("InstanceCount"),
                    );
                }
                if rc.volume_size_in_gb.is_none() {
                    push(
                        &mut errors,
                        msg::arg("ResourceConfig.VolumeSizeInGB"),
                        msg::required("VolumeSizeInGB"),
                    );
                }
            }
        }

        let channels_path = msg::arg("InputDataConfig");
        match args.input_data_config.as_deref() {
            None | Some([]) => push(
                &mut errors,
                channels_path,
                msg::at_least_one("InputDataConfig item"),
            ),
            Some(channels) => {
                for (i, channel) in channels.iter().enumerate() {
                    if blank(&channel.channel_name) {
                        push(
                            &mut errors,
                            msg::item(&channels_path, i, "ChannelName"),
                            msg::required("ChannelName"),
                        );
                    }
                    let s3 = channel
                        .data_source
                        .as_ref()
                        .and_then(|d| d.s3_data_source.as_ref());
                    let Some(s3) = s3 else {
                        push(
                            &mut errors,
                            msg::item(&channels_path, i, "DataSource.S3DataSource"),
                            msg::required("S3DataSource"),
                        );
                        continue;
                    };
                    if blank(&s3.s3_data_type) {
                        push(
                            &mut errors,
                            msg::item(&channels_path, i, "DataSource.S3DataSource.S3DataType"),
                            msg::required("S3DataType"),
                        );
                    }
                    check_uri(
                        &mut errors,
                        msg::item(&channels_path, i, "DataSource.S3DataSource.S3Uri"),
                        "S3Uri",
                        s3.s3_uri.as_ref(),
                    );
                }
            }
        }

        check_uri(
            &mut errors,
            msg::arg("OutputDataConfig.S3OutputPath"),
            "S3OutputPath",
            args.output_data_config
                .as_ref()
                .and_then(|o| o.s3_output_path.as_ref()),
        );

        let max_runtime = args
            .stopping_condition
            .as_ref()
            .and_then(|s| s.max_runtime_in_seconds.as_ref());
        if max_runtime.is_none() {
            push(
                &mut errors,
                msg::arg("StoppingCondition.MaxRuntimeInSeconds"),
                msg::required("StoppingCondition.MaxRuntimeInSeconds"),
            );
        }
    }

    check_depends_on(body, &mut errors);
    ValidationResult::from_errors(errors)
}

pub fn validate_create_model(body: &NodeBody<CreateModelArgs>) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(args) = check_header(body, NodeKind::CreateModel, &mut errors).as_ref() {
        if blank_arg(&args.execution_role_arn) {
            push(
                &mut errors,
                msg::arg("ExecutionRoleArn"),
                msg::required("ExecutionRoleArn"),
            );
        }

        match &args.primary_container {
            None => push(
                &mut errors,
                msg::arg("PrimaryContainer"),
                "PrimaryContainer is required to supply ModelDataUrl",
            ),
            Some(pc) => match &pc.model_data_url {
                Some(ArgValue::Get { get }) if get.is_empty() => push(
                    &mut errors,
                    msg::arg("PrimaryContainer.ModelDataUrl.Get"),
                    msg::required("ModelDataUrl.Get"),
                ),
                Some(ArgValue::Get { get }) if get.len() > MAX_URI_LEN => push(
                    &mut errors,
                    msg::arg("PrimaryContainer.ModelDataUrl.Get"),
                    msg::max_len(MAX_URI_LEN),
                ),
                url => check_uri(
                    &mut errors,
                    msg::arg("PrimaryContainer.ModelDataUrl"),
                    "ModelDataUrl",
                    url.as_ref(),
                ),
            },
        }
    }

    check_depends_on(body, &mut errors);
    ValidationResult::from_errors(errors)
}

pub fn validate_batch_inference(body: &NodeBody<BatchInferenceArgs>) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(args) = check_header(body, NodeKind::DeployModelBatchInference, &mut errors).as_ref() {
        if blank_arg(&args.model_name) {
            push(
                &mut errors,
                msg::arg("ModelName"),
                msg::required("ModelName"),
            );
        }

        match &args.transform_input {
            None => push(
                &mut errors,
                msg::arg("TransformInput"),
                msg::required("TransformInput"),
            ),
            Some(ti) => match &ti.data_source {
                None => push(
                    &mut errors,
                    msg::arg("TransformInput.DataSource"),
                    msg::required("DataSource"),
                ),
                Some(ds) => match &ds.s3_data_source {
                    None => push(
                        &mut errors,
                        msg::arg("TransformInput.DataSource.S3DataSource"),
                        msg::required("S3DataSource"),
                    ),
                    Some(s3) => {
                        check_uri(
                            &mut errors,
                            msg::arg("TransformInput.DataSource.S3DataSource.S3Uri"),
                            "S3Uri",
                            s3.s3_uri.as_ref(),
                        );
                        if blank(&s3.s3_data_type) {
                            push(
                                &mut errors,
                                msg::arg("TransformInput.DataSource.S3DataSource.S3DataType"),
                                msg::required("S3DataType"),
                            );
                        }
                    }
                },
            },
        }

        check_uri(
            &mut errors,
            msg::arg("TransformOutput.S3OutputPath"),
            "S3OutputPath",
            args.transform_output
                .as_ref()
                .and_then(|o| o.s3_output_path.as_ref()),
        );

        match &args.transform_resources {
            None => push(
                &mut errors,
                msg::arg("TransformResources"),
                msg::required("TransformResources"),
            ),
            Some(tr) => {
                if blank_arg(&tr.instance_type) {
                    push(
                        &mut errors,
                        msg::arg("TransformResources.InstanceType"),
                        msg::required("InstanceType"),
                    );
                }
                if tr.instance_count.is_none() {
                    push(
                        &mut errors,
                        msg::arg("TransformResources.InstanceCount"),
                        msg::required("InstanceCount"),
                    );
                }
            }
        }

        if let Some(dcc) = &args.data_capture_config {
            check_uri(
                &mut errors,
                msg::arg("DataCaptureConfig.DestinationS3Uri"),
                "DestinationS3Uri",
                dcc.destination_s3_uri.as_ref(),
            );
        }
    }

    check_depends_on(body, &mut errors);
    ValidationResult::from_errors(errors)
}

pub fn validate_endpoint(body: &NodeBody<EndpointArgs>) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(args) = check_header(body, NodeKind::DeployModelEndpoint, &mut errors).as_ref() {
        if blank_arg(&args.endpoint_name) {
            push(
                &mut errors,
                msg::arg("EndpointName"),
                msg::required("EndpointName"),
            );
        }

        let variants_path = msg::arg("EndpointConfig.ProductionVariants");
        match &args.endpoint_config {
            None => push(
                &mut errors,
                msg::arg("EndpointConfig"),
                msg::required("EndpointConfig"),
            ),
            Some(ec) => match ec.production_variants.as_deref() {
                None | Some([]) => push(
                    &mut errors,
                    variants_path,
                    msg::at_least_one("ProductionVariants"),
                ),
                Some(variants) => {
                    for (i, pv) in variants.iter().enumerate() {
                        if pv.initial_instance_count.is_none() {
                            push(
                                &mut errors,
                                msg::item(&variants_path, i, "InitialInstanceCount"),
                                msg::required("InitialInstanceCount"),
                            );
                        }
                        if blank_arg(&pv.instance_type) {
                            push(
                                &mut errors,
                                msg::item(&variants_path, i, "InstanceType"),
                                msg::required("InstanceType"),
                            );
                        }
                        if blank(&pv.variant_name) {
                            push(
                                &mut errors,
                                msg::item(&variants_path, i, "VariantName"),
                                msg::required("VariantName"),
                            );
                        }
                        if blank_arg(&pv.model_name) {
                            push(
                                &mut errors,
                                msg::item(&variants_path, i, "ModelName"),
                                msg::required("ModelName"),
                            );
                        }
                    }
                }
            },
        }
    }

    check_depends_on(body, &mut errors);
    ValidationResult::from_errors(errors)
}
