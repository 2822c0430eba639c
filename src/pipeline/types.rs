//! Step and pipeline document types.
//!
//! A `Step` is the JSON unit the pipeline-execution service consumes. Its
//! `Arguments` stay an opaque JSON object here; the typed view lives on the
//! editor side in `parse::types`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Definition format version stamped on exported documents.
pub const PIPELINE_VERSION: &str = "2020-12-01";

/// `VirtualStepType` carried by both halves of an expanded endpoint.
pub const DEPLOY_MODEL_VIRTUAL_TYPE: &str = "DeployModel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepType {
    Processing,
    Training,
    Model,
    Transform,
    Endpoint,
    EndpointConfig,
}

impl StepType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Processing => "Processing",
            StepType::Training => "Training",
            StepType::Model => "Model",
            StepType::Transform => "Transform",
            StepType::Endpoint => "Endpoint",
            StepType::EndpointConfig => "EndpointConfig",
        }
    }
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn empty_arguments() -> Value {
    Value::Object(Map::new())
}

/// One step of a pipeline definition.
///
/// Only `Type` is required when reading. The other fields are read leniently
/// so hand-edited or partially formed steps still import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "Name", default, deserialize_with = "de_text")]
    pub name: String,
    #[serde(rename = "Type")]
    pub step_type: StepType,
    #[serde(
        rename = "DisplayName",
        default,
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
    #[serde(rename = "Arguments", default = "empty_arguments")]
    pub arguments: Value,
    #[serde(
        rename = "DependsOn",
        default,
        deserialize_with = "de_names",
        skip_serializing_if = "Option::is_none"
    )]
    pub depends_on: Option<Vec<String>>,
    #[serde(
        rename = "VirtualStepName",
        default,
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_step_name: Option<String>,
    #[serde(
        rename = "VirtualStepType",
        default,
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_step_type: Option<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, step_type: StepType, arguments: Value) -> Self {
        Step {
            name: name.into(),
            step_type,
            display_name: None,
            arguments,
            depends_on: None,
            virtual_step_name: None,
            virtual_step_type: None,
        }
    }

    /// Attach dependencies, leaving the field absent when there are none.
    pub fn with_depends_on(mut self, depends_on: Option<Vec<String>>) -> Self {
        self.depends_on = depends_on.filter(|d| !d.is_empty());
        self
    }

    pub fn dependencies(&self) -> &[String] {
        self.depends_on.as_deref().unwrap_or(&[])
    }

    /// Read one element of an imported `Steps` array. Only a missing `Type`,
    /// or one outside the known vocabulary, drops the step.
    pub fn from_value(value: &Value) -> Option<Step> {
        match Step::deserialize(value) {
            Ok(step) => Some(step),
            Err(e) => {
                let step_type = value.get("Type").map(ToString::to_string).unwrap_or_default();
                tracing::warn!(step_type = %step_type, error = %e, "dropping step of unknown type");
                None
            }
        }
    }
}

/// Non-string names read as empty.
fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(de_opt_text(deserializer)?.unwrap_or_default())
}

/// Non-string values read as absent.
fn de_opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// `DependsOn` that is not an array reads as absent; non-string entries are skipped.
fn de_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<String>>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// A full pipeline definition as exported to a file or submitted for creation.
/// Only `Steps` is interpreted; the rest is carried for the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PipelineDocument {
    pub version: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(default)]
    pub pipeline_name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl PipelineDocument {
    pub fn new(pipeline_name: impl Into<String>, steps: Vec<Step>) -> Self {
        PipelineDocument {
            version: PIPELINE_VERSION.to_string(),
            metadata: Map::new(),
            parameters: Vec::new(),
            pipeline_name: pipeline_name.into(),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_metadata_does_not_drop_the_step() {
        let step = Step::from_value(&json!({
            "Name": "prep",
            "Type": "Processing",
            "DisplayName": 7,
            "VirtualStepName": ["x"],
            "VirtualStepType": false
        }))
        .expect("step should be kept");
        assert_eq!(step.name, "prep");
        assert_eq!(step.display_name, None);
        assert_eq!(step.virtual_step_name, None);
        assert_eq!(step.virtual_step_type, None);
    }

    #[test]
    fn missing_name_reads_as_empty() {
        let step = Step::from_value(&json!({ "Type": "Training" })).expect("step should be kept");
        assert_eq!(step.name, "");
        assert_eq!(step.step_type, StepType::Training);
        assert_eq!(step.arguments, json!({}));
    }

    #[test]
    fn only_the_type_drops_a_step() {
        assert!(Step::from_value(&json!({ "Name": "n", "Type": "Lambda" })).is_none());
        assert!(Step::from_value(&json!({ "Name": "n" })).is_none());
        assert!(Step::from_value(&json!({ "Name": "n", "Type": 3 })).is_none());
        assert!(Step::from_value(&json!(7)).is_none());
    }

    #[test]
    fn arguments_are_kept_as_given() {
        let args = json!({ "RoleArn": { "Get": "Parameters.RoleArn" }, "Anything": [1, 2] });
        let step = Step::from_value(&json!({ "Name": "p", "Type": "Processing", "Arguments": args.clone() }))
            .unwrap();
        assert_eq!(step.arguments, args);
    }
}
