//! Rust types mirroring the editor's node/edge model.
//!
//! These types are the serde target for the canvas graph JSON. Node `data`
//! is a union tagged by `kind`; each kind carries its own argument struct.
//! Every argument field is optional so half-filled nodes still parse and can
//! be reported on by validation instead of failing deserialization.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::pipeline::types::StepType;

// =============================================================================
// GRAPH
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// `source → target`: the target depends on the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Edge {
            id: format!("{source}->{target}"),
            source,
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// NODE
// =============================================================================

pub const APP_NODE_TYPE: &str = "appNode";

fn default_node_type() -> String {
    APP_NODE_TYPE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    pub data: NodeData,
}

impl Node {
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        Node {
            id: id.into(),
            node_type: default_node_type(),
            position: Position::default(),
            data,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn label(&self) -> &str {
        self.data.label()
    }
}

/// The closed set of step categories a node can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    DataProcess,
    TrainModel,
    CreateModel,
    DeployModelBatchInference,
    DeployModelEndpoint,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::DataProcess => "dataProcess",
            NodeKind::TrainModel => "trainModel",
            NodeKind::CreateModel => "createModel",
            NodeKind::DeployModelBatchInference => "deployModelBatchInference",
            NodeKind::DeployModelEndpoint => "deployModelEndpoint",
        }
    }

    /// The `Type` a node of this kind must declare.
    pub fn step_type(&self) -> StepType {
        match self {
            NodeKind::DataProcess => StepType::Processing,
            NodeKind::TrainModel => StepType::Training,
            NodeKind::CreateModel => StepType::Model,
            NodeKind::DeployModelBatchInference => StepType::Transform,
            NodeKind::DeployModelEndpoint => StepType::Endpoint,
        }
    }

    /// Fixed palette label used when importing by kind.
    pub fn display_label(&self) -> &'static str {
        match self {
            NodeKind::DataProcess => "Data Process",
            NodeKind::TrainModel => "Train Model",
            NodeKind::CreateModel => "Create Model",
            NodeKind::DeployModelBatchInference => "Deploy Model(batch inference)",
            NodeKind::DeployModelEndpoint => "Deploy Model(endpoint)",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// NODE DATA: tagged union over the five step kinds
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeData {
    #[serde(rename = "dataProcess")]
    DataProcess(NodeBody<DataProcessArgs>),
    #[serde(rename = "trainModel")]
    TrainModel(NodeBody<TrainModelArgs>),
    #[serde(rename = "createModel")]
    CreateModel(NodeBody<CreateModelArgs>),
    #[serde(rename = "deployModelBatchInference")]
    DeployModelBatchInference(NodeBody<BatchInferenceArgs>),
    #[serde(rename = "deployModelEndpoint")]
    DeployModelEndpoint(NodeBody<EndpointArgs>),
}

/// Fields shared by every node kind. `name` is the editor's lowercase
/// label field; `Name` is the canonical step name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBody<A> {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    #[serde(rename = "DisplayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,
    #[serde(rename = "DependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(rename = "Arguments", default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Arguments<A>>,
}

impl<A: Serialize> NodeBody<A> {
    /// A body whose `Name`, `name` and `Type` agree, as the editor creates them.
    pub fn named(kind: NodeKind, name: impl Into<String>, arguments: &A) -> Self {
        let name = name.into();
        NodeBody {
            label: kind.display_label().to_string(),
            name: Some(name.clone()),
            step_name: Some(name),
            display_name: None,
            step_type: Some(kind.step_type().as_str().to_string()),
            depends_on: None,
            arguments: Some(Arguments::new(arguments)),
        }
    }
}

/// A node's `Arguments` object, held exactly as given. `A` is the typed view
/// validation and compilation read through [`Arguments::typed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Arguments<A> {
    raw: Value,
    #[serde(skip)]
    view: PhantomData<A>,
}

impl<A> Arguments<A> {
    pub fn from_raw(raw: Value) -> Self {
        Arguments {
            raw,
            view: PhantomData,
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl<A: Serialize> Arguments<A> {
    pub fn new(typed: &A) -> Self {
        Arguments::from_raw(to_json_object(typed))
    }
}

impl<A: DeserializeOwned + Default> Arguments<A> {
    /// Typed view of the object. `null` reads as empty.
    pub fn typed(&self) -> Result<A, serde_json::Error> {
        if self.raw.is_null() {
            return Ok(A::default());
        }
        A::deserialize(&self.raw)
    }
}

/// Serialize into a JSON value, falling back to an empty object.
pub fn to_json_object<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize arguments");
        Value::Object(Map::new())
    })
}

macro_rules! with_body {
    ($data:expr, $body:ident => $e:expr) => {
        match $data {
            NodeData::DataProcess($body) => $e,
            NodeData::TrainModel($body) => $e,
            NodeData::CreateModel($body) => $e,
            NodeData::DeployModelBatchInference($body) => $e,
            NodeData::DeployModelEndpoint($body) => $e,
        }
    };
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::DataProcess(_) => NodeKind::DataProcess,
            NodeData::TrainModel(_) => NodeKind::TrainModel,
            NodeData::CreateModel(_) => NodeKind::CreateModel,
            NodeData::DeployModelBatchInference(_) => NodeKind::DeployModelBatchInference,
            NodeData::DeployModelEndpoint(_) => NodeKind::DeployModelEndpoint,
        }
    }

    pub fn label(&self) -> &str {
        with_body!(self, b => &b.label)
    }

    /// Explicit step name: `Name`, then `name`, ignoring blanks.
    pub fn explicit_name(&self) -> Option<&str> {
        let (upper, lower) = with_body!(self, b => (b.step_name.as_deref(), b.name.as_deref()));
        upper
            .filter(|s| !s.is_empty())
            .or(lower.filter(|s| !s.is_empty()))
    }

    pub fn display_name(&self) -> Option<&str> {
        with_body!(self, b => b.display_name.as_deref())
    }

    pub fn step_type(&self) -> Option<&str> {
        with_body!(self, b => b.step_type.as_deref())
    }
}

// =============================================================================
// ARGUMENT VALUES
// =============================================================================

/// A field that may hold a literal or a `{"Get": "..."}` reference to another
/// step's output. Anything else (pipeline functions, parameters) is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Literal(String),
    Get {
        #[serde(rename = "Get")]
        get: String,
    },
    Expr(Value),
}

impl ArgValue {
    pub fn literal(s: impl Into<String>) -> Self {
        ArgValue::Literal(s.into())
    }

    pub fn get(s: impl Into<String>) -> Self {
        ArgValue::Get { get: s.into() }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            ArgValue::Literal(s) => s.is_empty(),
            ArgValue::Get { get } => get.is_empty(),
            ArgValue::Expr(v) => v.is_null(),
        }
    }
}

/// A count or size: a whole number, or a `{"Get": "..."}` resolved at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Count {
    Value(u64),
    Get {
        #[serde(rename = "Get")]
        get: String,
    },
}

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count::Value(n)
    }
}

/// Count/size fields accept numbers, numeric strings and `Get` references.
/// Anything else reads as absent rather than failing the whole node.
pub fn de_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Count>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

pub fn count_from_value(value: &Value) -> Option<Count> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .map(Count::Value),
        Value::String(s) => s.trim().parse().ok().map(Count::Value),
        Value::Object(map) => match map.get("Get") {
            Some(Value::String(get)) => Some(Count::Get { get: get.clone() }),
            _ => None,
        },
        _ => None,
    }
}

// =============================================================================
// DATA PROCESS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataProcessArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_resources: Option<ProcessingResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_specification: Option<AppSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_inputs: Option<Vec<ProcessingInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_output_config: Option<ProcessingOutputConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_config: Option<ClusterConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterConfig {
    #[serde(default, deserialize_with = "de_count", skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<Count>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<ArgValue>,
    #[serde(
        rename = "VolumeSizeInGB",
        default,
        deserialize_with = "de_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_size_in_gb: Option<Count>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_entrypoint: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_arguments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_input: Option<S3Input>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Input {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_input_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_compression_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingOutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<ProcessingOutput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_output: Option<S3Output>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Output {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_upload_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoppingCondition {
    #[serde(default, deserialize_with = "de_count", skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<Count>,
}

// =============================================================================
// TRAIN MODEL
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainModelArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<Vec<TrainingInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyper_parameters: Option<BTreeMap<String, ArgValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_image: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_input_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<ArgValue>,
    #[serde(default, deserialize_with = "de_count", skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<Count>,
    #[serde(
        rename = "VolumeSizeInGB",
        default,
        deserialize_with = "de_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_size_in_gb: Option<Count>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TrainingDataSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainingDataSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<S3DataSource>,
}

/// Shared by training channels and transform inputs; transforms leave the
/// distribution type unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3DataSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<ArgValue>,
}

// =============================================================================
// CREATE MODEL
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_container: Option<PrimaryContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrimaryContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_data_url: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, ArgValue>>,
}

// =============================================================================
// BATCH INFERENCE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchInferenceArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_input: Option<TransformInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_output: Option<TransformOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_resources: Option<TransformResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_capture_config: Option<DataCaptureConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TrainingDataSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assemble_with: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<ArgValue>,
    #[serde(default, deserialize_with = "de_count", skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<Count>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataCaptureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_s3_uri: Option<ArgValue>,
}

// =============================================================================
// ENDPOINT
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_config: Option<EndpointConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_variants: Option<Vec<ProductionVariant>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionVariant {
    #[serde(default, deserialize_with = "de_count", skip_serializing_if = "Option::is_none")]
    pub initial_instance_count: Option<Count>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_instance_scaling: Option<ManagedInstanceScaling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedInstanceScaling {
    #[serde(default, deserialize_with = "de_count", skip_serializing_if = "Option::is_none")]
    pub max_instance_count: Option<Count>,
}
