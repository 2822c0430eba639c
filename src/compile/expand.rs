//! Endpoint expansion: one editor node → `EndpointConfig` + `Endpoint` steps.
//!
//! Both steps carry the node's dependencies and the same virtual name/type
//! pair so the decompiler can fold them back into one node.

use serde::Serialize;

use crate::parse::types::{
    ArgValue, EndpointArgs, EndpointConfig, ManagedInstanceScaling, ProductionVariant,
    to_json_object,
};
use crate::pipeline::reference::{endpoint_config_name, endpoint_config_ref};
use crate::pipeline::types::{DEPLOY_MODEL_VIRTUAL_TYPE, Step, StepType};

pub fn expand_endpoint(
    args: &EndpointArgs,
    base_name: &str,
    depends_on: Option<Vec<String>>,
) -> [Step; 2] {
    let config_name = endpoint_config_name(base_name);

    let variants: Vec<ProductionVariant> = args
        .endpoint_config
        .as_ref()
        .and_then(|ec| ec.production_variants.as_ref())
        .map(|variants| variants.iter().map(copy_variant).collect())
        .unwrap_or_default();

    let mut config_step = Step::new(
        config_name.clone(),
        StepType::EndpointConfig,
        to_json_object(&EndpointConfig {
            production_variants: Some(variants),
        }),
    )
    .with_depends_on(depends_on.clone());

    let endpoint_args = EndpointStepArgs {
        endpoint_name: args.endpoint_name.clone(),
        endpoint_config_name: ArgValue::get(endpoint_config_ref(&config_name)),
    };
    let mut endpoint_step = Step::new(base_name, StepType::Endpoint, to_json_object(&endpoint_args))
        .with_depends_on(depends_on);

    for step in [&mut config_step, &mut endpoint_step] {
        step.virtual_step_name = Some(base_name.to_string());
        step.virtual_step_type = Some(DEPLOY_MODEL_VIRTUAL_TYPE.to_string());
    }

    [config_step, endpoint_step]
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct EndpointStepArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_name: Option<ArgValue>,
    endpoint_config_name: ArgValue,
}

/// Scaling is only carried when it names a maximum.
fn copy_variant(v: &ProductionVariant) -> ProductionVariant {
    ProductionVariant {
        initial_instance_count: v.initial_instance_count.clone(),
        managed_instance_scaling: v
            .managed_instance_scaling
            .as_ref()
            .and_then(|m| m.max_instance_count.clone())
            .map(|max| ManagedInstanceScaling {
                max_instance_count: Some(max),
            }),
        instance_type: v.instance_type.clone(),
        model_name: v.model_name.clone(),
        variant_name: v.variant_name.clone(),
    }
}
