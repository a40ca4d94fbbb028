use std::fmt;

/// One axis bound to one value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Axis name
    pub axis: String,
    /// Value the axis takes
    pub value: String,
}

/// Assignment of values to axes, in declared axis order
///
/// The same type describes partial configurations during enumeration; the
/// enumerator only emits configurations binding every declared axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Configuration {
    bindings: Vec<Binding>,
}

impl Configuration {
    /// Create an empty configuration
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Value bound to `axis`, if any
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|binding| binding.axis == axis)
            .map(|binding| binding.value.as_str())
    }

    /// Bindings in axis order
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// Number of bound axes
    pub const fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no axis is bound
    pub const fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind `axis` to `value` after the existing bindings
    pub fn push(&mut self, axis: &str, value: String) {
        self.bindings.push(Binding {
            axis: axis.to_string(),
            value,
        });
    }

    /// Keep only the first `len` bindings
    pub fn truncate(&mut self, len: usize) {
        self.bindings.truncate(len);
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, V> FromIterator<(A, V)> for Configuration
where
    A: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, V)>>(iter: T) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(axis, value)| Binding {
                    axis: axis.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", binding.axis, binding.value)?;
        }
        Ok(())
    }
}
