//! Step → node reconstruction.
//!
//! Ordinary steps lift one-to-one onto a node of the matching kind. An
//! `Endpoint` step folds together with the `EndpointConfig` its
//! `EndpointConfigName` reference points at.

use std::collections::HashMap;

use serde_json::{Map, Value, json};

use super::LabelStrategy;
use crate::parse::types::*;
use crate::pipeline::reference::parse_endpoint_config_ref;
use crate::pipeline::types::{Step, StepType};

/// A node under construction, with every step name it stands for.
#[derive(Debug, Clone)]
pub struct NodeBuild {
    pub step_names: Vec<String>,
    pub data: NodeData,
}

/// Lift a non-endpoint step onto a node, carrying its `Arguments` as given.
/// `Endpoint` and `EndpointConfig` steps yield `None`; they go through
/// [`fold_endpoint`].
pub fn lift_step(step: &Step, strategy: LabelStrategy) -> Option<NodeBuild> {
    let data = match step.step_type {
        StepType::Processing => {
            NodeData::DataProcess(body(step, NodeKind::DataProcess, strategy, verbatim(step)))
        }
        StepType::Training => {
            NodeData::TrainModel(body(step, NodeKind::TrainModel, strategy, verbatim(step)))
        }
        StepType::Model => {
            NodeData::CreateModel(body(step, NodeKind::CreateModel, strategy, verbatim(step)))
        }
        StepType::Transform => NodeData::DeployModelBatchInference(body(
            step,
            NodeKind::DeployModelBatchInference,
            strategy,
            verbatim(step),
        )),
        StepType::Endpoint | StepType::EndpointConfig => return None,
    };

    Some(NodeBuild {
        step_names: vec![step.name.clone()],
        data,
    })
}

/// Fold an `Endpoint` step and its referenced config into one node. Returns
/// the config's name when the reference resolved.
///
/// The node's arguments are the endpoint's own minus `EndpointConfigName`,
/// with `EndpointConfig` set to the config step's arguments.
pub fn fold_endpoint<'a>(
    endpoint: &Step,
    configs: &HashMap<&'a str, &'a Step>,
    strategy: LabelStrategy,
) -> (NodeBuild, Option<&'a str>) {
    let config = endpoint
        .arguments
        .get("EndpointConfigName")
        .and_then(|v| v.get("Get"))
        .and_then(Value::as_str)
        .and_then(parse_endpoint_config_ref)
        .and_then(|name| configs.get(name).copied());

    if config.is_none() {
        tracing::debug!(endpoint = %endpoint.name, "endpoint config reference did not resolve");
    }

    let mut raw: Map<String, Value> = endpoint
        .arguments
        .as_object()
        .map(|args| {
            args.iter()
                .filter(|(key, _)| key.as_str() != "EndpointConfigName")
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();
    let endpoint_config = config
        .map(|c| &c.arguments)
        .filter(|args| args.is_object())
        .cloned()
        .unwrap_or_else(|| json!({ "ProductionVariants": [] }));
    raw.insert("EndpointConfig".into(), endpoint_config);

    let mut node_body = body(
        endpoint,
        NodeKind::DeployModelEndpoint,
        strategy,
        Arguments::from_raw(Value::Object(raw)),
    );
    let mut step_names = Vec::with_capacity(2);
    if let Some(config) = config {
        let mut deps = node_body.depends_on.take().unwrap_or_default();
        for dep in config.dependencies() {
            if !deps.contains(dep) {
                deps.push(dep.clone());
            }
        }
        node_body.depends_on = (!deps.is_empty()).then_some(deps);
        step_names.push(config.name.clone());
    }
    step_names.push(endpoint.name.clone());

    (
        NodeBuild {
            step_names,
            data: NodeData::DeployModelEndpoint(node_body),
        },
        config.map(|c| c.name.as_str()),
    )
}

fn verbatim<A>(step: &Step) -> Arguments<A> {
    Arguments::from_raw(step.arguments.clone())
}

fn body<A>(
    step: &Step,
    kind: NodeKind,
    strategy: LabelStrategy,
    arguments: Arguments<A>,
) -> NodeBody<A> {
    NodeBody {
        label: label(step, kind, strategy),
        name: Some(step.name.clone()),
        step_name: Some(step.name.clone()),
        display_name: Some(
            step.display_name
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| step.name.clone()),
        ),
        step_type: Some(step.step_type.as_str().to_string()),
        depends_on: step.depends_on.clone(),
        arguments: Some(arguments),
    }
}

/// Fixed kind label, or the step's own display name, name or type.
pub fn label(step: &Step, kind: NodeKind, strategy: LabelStrategy) -> String {
    match strategy {
        LabelStrategy::ByKind => kind.display_label().to_string(),
        LabelStrategy::ByDisplayName => step
            .display_name
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(Some(step.name.as_str()).filter(|n| !n.is_empty()))
            .unwrap_or(step.step_type.as_str())
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn step(value: Value) -> Step {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn processing_lifts_to_data_process() {
        let s = step(json!({
            "Name": "prep",
            "Type": "Processing",
            "Arguments": { "RoleArn": "arn:aws:iam::1:role/x" }
        }));
        let build = lift_step(&s, LabelStrategy::ByKind).unwrap();
        assert_eq!(build.step_names, vec!["prep"]);
        assert_eq!(build.data.kind(), NodeKind::DataProcess);
        assert_eq!(build.data.label(), "Data Process");
        let NodeData::DataProcess(body) = build.data else { panic!() };
        let args = body.arguments.unwrap().typed().unwrap();
        assert_eq!(args.role_arn, Some(ArgValue::literal("arn:aws:iam::1:role/x")));
    }

    #[test]
    fn display_name_strategy_prefers_display_name() {
        let mut s = step(json!({ "Name": "train", "Type": "Training" }));
        assert_eq!(label(&s, NodeKind::TrainModel, LabelStrategy::ByDisplayName), "train");
        s.display_name = Some("Train it".into());
        assert_eq!(label(&s, NodeKind::TrainModel, LabelStrategy::ByDisplayName), "Train it");
        s.display_name = None;
        s.name.clear();
        assert_eq!(label(&s, NodeKind::TrainModel, LabelStrategy::ByDisplayName), "Training");
    }

    #[test]
    fn arguments_the_model_cannot_read_are_kept() {
        let args = json!({ "PrimaryContainer": 5, "Tags": [{ "Key": "team" }] });
        let s = step(json!({ "Name": "m", "Type": "Model", "Arguments": args.clone() }));
        let build = lift_step(&s, LabelStrategy::ByKind).unwrap();
        let NodeData::CreateModel(body) = build.data else { panic!() };
        let kept = body.arguments.unwrap();
        assert_eq!(kept.raw(), &args);
        assert!(kept.typed().is_err());
    }

    #[test]
    fn endpoint_without_config_keeps_empty_variants() {
        let ep = step(json!({
            "Name": "ep",
            "Type": "Endpoint",
            "Arguments": { "EndpointConfigName": { "Get": "nonsense" } }
        }));
        let (build, config) = fold_endpoint(&ep, &HashMap::new(), LabelStrategy::ByKind);
        assert!(config.is_none());
        assert_eq!(build.step_names, vec!["ep"]);
        let NodeData::DeployModelEndpoint(body) = build.data else { panic!() };
        assert_eq!(
            body.arguments.unwrap().raw(),
            &json!({ "EndpointConfig": { "ProductionVariants": [] } })
        );
    }

    #[test]
    fn endpoint_folds_config_dependencies() {
        let cfg = step(json!({
            "Name": "ep_EndpointConfig",
            "Type": "EndpointConfig",
            "DependsOn": ["model"],
            "Arguments": { "ProductionVariants": [
                { "InitialInstanceCount": 1, "InstanceType": "ml.m5.large", "ModelName": "m", "VariantName": "v" }
            ] }
        }));
        let ep = step(json!({
            "Name": "ep",
            "Type": "Endpoint",
            "Arguments": {
                "EndpointName": "live",
                "EndpointConfigName": { "Get": "Steps.ep_EndpointConfig.EndpointConfigName" }
            }
        }));
        let configs = HashMap::from([("ep_EndpointConfig", &cfg)]);
        let (build, config) = fold_endpoint(&ep, &configs, LabelStrategy::ByKind);
        assert_eq!(config, Some("ep_EndpointConfig"));
        assert_eq!(build.step_names, vec!["ep_EndpointConfig", "ep"]);
        let NodeData::DeployModelEndpoint(body) = build.data else { panic!() };
        assert_eq!(body.depends_on, Some(vec!["model".to_string()]));
        let args = body.arguments.unwrap();
        assert_eq!(
            args.raw(),
            &json!({
                "EndpointName": "live",
                "EndpointConfig": { "ProductionVariants": [
                    { "InitialInstanceCount": 1, "InstanceType": "ml.m5.large", "ModelName": "m", "VariantName": "v" }
                ] }
            })
        );
        let typed = args.typed().unwrap();
        assert_eq!(typed.endpoint_name, Some(ArgValue::literal("live")));
        let variants = typed.endpoint_config.unwrap().production_variants.unwrap();
        assert_eq!(variants[0].initial_instance_count, Some(Count::Value(1)));
    }
}
