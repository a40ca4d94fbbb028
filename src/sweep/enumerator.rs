use crate::io::error::{Result, SweepError, unknown_axis};
use crate::sweep::axis::Axis;
use crate::sweep::configuration::Configuration;
use crate::sweep::predicate::ExclusionPredicate;
use std::collections::HashMap;
use tracing::trace;

/// Axes and exclusion predicates describing one sweep
///
/// Traversal is a depth-first walk of the cross product in declared axis
/// order. Each predicate is attached to the depth at which its last required
/// axis becomes bound, so it prunes a branch as early as possible and runs
/// exactly once per branch.
pub struct Sweep {
    axes: Vec<Axis>,
    predicates: Vec<Box<dyn ExclusionPredicate>>,
    /// Predicate indices to evaluate after binding the axis at each depth
    checkpoints: Vec<Vec<usize>>,
}

impl Sweep {
    /// Validate a declaration and build the sweep
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No axes are declared
    /// - Two axes share a name, or an axis repeats a value
    /// - A device-set axis depends on an axis not declared before it
    /// - A predicate requires an axis that is not declared
    pub fn new(axes: Vec<Axis>, predicates: Vec<Box<dyn ExclusionPredicate>>) -> Result<Self> {
        if axes.is_empty() {
            return Err(SweepError::EmptyDeclaration);
        }

        let checkpoints = Self::plan_checkpoints(&axes, &predicates)?;

        Ok(Self {
            axes,
            predicates,
            checkpoints,
        })
    }

    /// Map each predicate to the depth where its last required axis is bound
    fn plan_checkpoints(
        axes: &[Axis],
        predicates: &[Box<dyn ExclusionPredicate>],
    ) -> Result<Vec<Vec<usize>>> {
        let mut depth_of: HashMap<&str, usize> = HashMap::with_capacity(axes.len());
        for (depth, axis) in axes.iter().enumerate() {
            axis.validate()?;
            if let Some(mode_axis) = axis.depends_on() {
                if !depth_of.contains_key(mode_axis) {
                    return Err(unknown_axis(
                        mode_axis,
                        &format!("device-set axis '{}'", axis.name()),
                    ));
                }
            }
            if depth_of.insert(axis.name(), depth).is_some() {
                return Err(SweepError::DuplicateAxis {
                    name: axis.name().to_string(),
                });
            }
        }

        let last_depth = axes.len().saturating_sub(1);
        let mut checkpoints = vec![Vec::new(); axes.len()];
        for (index, predicate) in predicates.iter().enumerate() {
            let mut trigger = None;
            for required in predicate.required_axes() {
                let depth = depth_of.get(required).copied().ok_or_else(|| {
                    unknown_axis(required, &format!("predicate '{}'", predicate.name()))
                })?;
                trigger = trigger.max(Some(depth));
            }
            // Predicates naming no axis are checked on complete configurations
            let trigger = trigger.unwrap_or(last_depth);
            if let Some(slot) = checkpoints.get_mut(trigger) {
                slot.push(index);
            }
        }

        Ok(checkpoints)
    }

    /// Declared axes in traversal order
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Lazily enumerate every configuration no predicate excludes
    pub fn iter(&self) -> SweepIter<'_> {
        SweepIter::new(self)
    }

    /// Number of configurations `iter` yields
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Whether any predicate attached to `depth` excludes the partial configuration
    fn pruned_at(&self, depth: usize, partial: &Configuration) -> bool {
        let Some(indices) = self.checkpoints.get(depth) else {
            return false;
        };
        indices.iter().any(|&index| {
            self.predicates.get(index).is_some_and(|predicate| {
                let excluded = predicate.excludes(partial);
                if excluded {
                    trace!(predicate = predicate.name(), %partial, "pruned branch");
                }
                excluded
            })
        })
    }
}

impl<'a> IntoIterator for &'a Sweep {
    type Item = Configuration;
    type IntoIter = SweepIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Frame {
    values: Vec<String>,
    cursor: usize,
}

/// Depth-first iterator over the valid configurations of a [`Sweep`]
pub struct SweepIter<'a> {
    sweep: &'a Sweep,
    frames: Vec<Frame>,
    partial: Configuration,
}

impl<'a> SweepIter<'a> {
    fn new(sweep: &'a Sweep) -> Self {
        let partial = Configuration::new();
        let frames = sweep
            .axes
            .first()
            .map(|axis| Frame {
                values: axis.expand(&partial),
                cursor: 0,
            })
            .into_iter()
            .collect();
        Self {
            sweep,
            frames,
            partial,
        }
    }
}

impl Iterator for SweepIter<'_> {
    type Item = Configuration;

    fn next(&mut self) -> Option<Configuration> {
        loop {
            let depth = self.frames.len().checked_sub(1)?;
            self.partial.truncate(depth);

            let frame = self.frames.last_mut()?;
            let Some(value) = frame.values.get(frame.cursor).cloned() else {
                self.frames.pop();
                continue;
            };
            frame.cursor += 1;

            let axis = self.sweep.axes.get(depth)?;
            self.partial.push(axis.name(), value);

            if self.sweep.pruned_at(depth, &self.partial) {
                continue;
            }

            match self.sweep.axes.get(depth + 1) {
                Some(next_axis) => {
                    let values = next_axis.expand(&self.partial);
                    self.frames.push(Frame { values, cursor: 0 });
                }
                None => return Some(self.partial.clone()),
            }
        }
    }
}
