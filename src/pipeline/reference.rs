//! `{"Get": "Steps.<Name>.<Field>"}` references between steps.

use std::sync::LazyLock;

use regex::Regex;

static ENDPOINT_CONFIG_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Steps\.(.+)\.EndpointConfigName$").expect("endpoint config ref pattern")
});

/// Name of the `EndpointConfig` step generated for an endpoint named `base`.
pub fn endpoint_config_name(base: &str) -> String {
    format!("{base}_EndpointConfig")
}

/// The `Get` string an `Endpoint` step uses to reach its config step.
pub fn endpoint_config_ref(config_step_name: &str) -> String {
    format!("Steps.{config_step_name}.EndpointConfigName")
}

/// Inverse of [`endpoint_config_ref`].
pub fn parse_endpoint_config_ref(get: &str) -> Option<&str> {
    ENDPOINT_CONFIG_REF
        .captures(get)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
