use crate::sweep::configuration::Configuration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rule marking configurations that must be skipped
///
/// Predicates are pure: the same configuration always gives the same answer.
/// The enumerator evaluates a predicate once every axis it names is bound,
/// so `excludes` may rely on those bindings being present.
pub trait ExclusionPredicate {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Axes that must be bound before the predicate can be evaluated
    fn required_axes(&self) -> Vec<&str>;

    /// Whether the (partial) configuration must be skipped
    fn excludes(&self, configuration: &Configuration) -> bool;
}

/// Built-in exclusion rules, loadable from a settings file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case", deny_unknown_fields)]
pub enum ExclusionRule {
    /// Skip when two axes take different values (e.g. storage vs compute precision)
    MatchingValues {
        /// First axis
        left: String,
        /// Second axis
        right: String,
    },

    /// Skip every value of `axis` not listed
    AllowOnly {
        /// Restricted axis
        axis: String,
        /// Values kept
        values: Vec<String>,
    },

    /// With more than one active device, skip values of `axis` not listed
    MultiDeviceOnly {
        /// Axis holding the space-separated device set
        device_axis: String,
        /// Restricted axis
        axis: String,
        /// Values allowed in multi-device configurations
        values: Vec<String>,
    },

    /// Skip configurations matching every listed binding
    Forbid {
        /// Axis to value pairs that together mark a skip
        bindings: BTreeMap<String, String>,
    },
}

impl ExclusionRule {
    /// Storage and compute precision must agree
    pub fn matching_values(left: &str, right: &str) -> Self {
        Self::MatchingValues {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Keep only the listed values of `axis`
    pub fn allow_only(axis: &str, values: &[&str]) -> Self {
        Self::AllowOnly {
            axis: axis.to_string(),
            values: values.iter().map(ToString::to_string).collect(),
        }
    }

    /// Keep only the listed values of `axis` when several devices are active
    pub fn multi_device_only(device_axis: &str, axis: &str, values: &[&str]) -> Self {
        Self::MultiDeviceOnly {
            device_axis: device_axis.to_string(),
            axis: axis.to_string(),
            values: values.iter().map(ToString::to_string).collect(),
        }
    }

    /// Skip the exact combination of bindings
    pub fn forbid<'a, I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::Forbid {
            bindings: bindings
                .into_iter()
                .map(|(axis, value)| (axis.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl ExclusionPredicate for ExclusionRule {
    fn name(&self) -> &str {
        match self {
            Self::MatchingValues { .. } => "matching_values",
            Self::AllowOnly { .. } => "allow_only",
            Self::MultiDeviceOnly { .. } => "multi_device_only",
            Self::Forbid { .. } => "forbid",
        }
    }

    fn required_axes(&self) -> Vec<&str> {
        match self {
            Self::MatchingValues { left, right } => vec![left.as_str(), right.as_str()],
            Self::AllowOnly { axis, .. } => vec![axis.as_str()],
            Self::MultiDeviceOnly {
                device_axis, axis, ..
            } => vec![device_axis.as_str(), axis.as_str()],
            Self::Forbid { bindings } => bindings.keys().map(String::as_str).collect(),
        }
    }

    fn excludes(&self, configuration: &Configuration) -> bool {
        match self {
            Self::MatchingValues { left, right } => {
                match (configuration.get(left), configuration.get(right)) {
                    (Some(l), Some(r)) => l != r,
                    _ => false,
                }
            }
            Self::AllowOnly { axis, values } => configuration
                .get(axis)
                .is_some_and(|value| !values.iter().any(|v| v == value)),
            Self::MultiDeviceOnly {
                device_axis,
                axis,
                values,
            } => {
                let multi_device = configuration
                    .get(device_axis)
                    .is_some_and(|devices| devices.split_whitespace().count() > 1);
                multi_device
                    && configuration
                        .get(axis)
                        .is_some_and(|value| !values.iter().any(|v| v == value))
            }
            Self::Forbid { bindings } => {
                !bindings.is_empty()
                    && bindings
                        .iter()
                        .all(|(axis, value)| configuration.get(axis) == Some(value.as_str()))
            }
        }
    }
}
