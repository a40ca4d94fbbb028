use crate::io::error::{Result, SweepError};
use crate::sweep::configuration::Configuration;
use std::collections::HashSet;

/// Values an axis may take
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisDomain {
    /// Flat ordered list of values
    Values(Vec<String>),

    /// Active device set, expanded from the bound device type
    ///
    /// For device types listed in `single_device_modes` only the first id is
    /// produced. Every other device type walks the cumulative prefixes of
    /// `ids`, modelling a scaling study over the first N devices.
    DevicePrefixes {
        /// Device ids in the order they are added to the set
        ids: Vec<String>,
        /// Axis holding the device type, declared before this one
        mode_axis: String,
        /// Device types that never use more than one device
        single_device_modes: Vec<String>,
    },
}

/// A named dimension of the sweep
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    name: String,
    domain: AxisDomain,
}

impl Axis {
    /// Create an axis over a flat list of values
    pub fn values<I, S>(name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            domain: AxisDomain::Values(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a device-set axis expanded from the value bound to `mode_axis`
    pub fn device_prefixes<I, S>(
        name: &str,
        ids: I,
        mode_axis: &str,
        single_device_modes: &[&str],
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            domain: AxisDomain::DevicePrefixes {
                ids: ids.into_iter().map(Into::into).collect(),
                mode_axis: mode_axis.to_string(),
                single_device_modes: single_device_modes
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
        }
    }

    /// Axis name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Axis domain
    pub const fn domain(&self) -> &AxisDomain {
        &self.domain
    }

    /// Axis this one depends on, if any
    pub fn depends_on(&self) -> Option<&str> {
        match &self.domain {
            AxisDomain::Values(_) => None,
            AxisDomain::DevicePrefixes { mode_axis, .. } => Some(mode_axis),
        }
    }

    /// Values this axis takes under the given partial configuration
    ///
    /// A device-set axis whose mode axis is unbound expands as multi-device.
    pub fn expand(&self, partial: &Configuration) -> Vec<String> {
        match &self.domain {
            AxisDomain::Values(values) => values.clone(),
            AxisDomain::DevicePrefixes {
                ids,
                mode_axis,
                single_device_modes,
            } => {
                let single = partial
                    .get(mode_axis)
                    .is_some_and(|mode| single_device_modes.iter().any(|m| m == mode));
                if single {
                    ids.first().cloned().into_iter().collect()
                } else {
                    device_prefixes(ids)
                }
            }
        }
    }

    /// Reject repeated values, which would emit equal configurations
    ///
    /// # Errors
    ///
    /// Returns `DuplicateValue` naming the first repeated value
    pub fn validate(&self) -> Result<()> {
        let listed = match &self.domain {
            AxisDomain::Values(values) => values,
            AxisDomain::DevicePrefixes { ids, .. } => ids,
        };
        let mut seen = HashSet::new();
        for value in listed {
            if !seen.insert(value.as_str()) {
                return Err(SweepError::DuplicateValue {
                    axis: self.name.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Cumulative space-joined prefixes of a device id list
///
/// `["0", "1", "2"]` becomes `["0", "0 1", "0 1 2"]`.
pub fn device_prefixes<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    let mut prefixes: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let next = match prefixes.last() {
            Some(previous) => format!("{previous} {}", id.as_ref()),
            None => id.as_ref().to_string(),
        };
        prefixes.push(next);
    }
    prefixes
}
