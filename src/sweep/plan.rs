//! Concrete LBM benchmark sweep: axis order, exclusions, and command layout

use crate::driver::invocation::{ArgumentSpec, CommandTemplate};
use crate::io::configuration::{
    AXIS_COLLISION, AXIS_COMPUTE_FP, AXIS_DEVICE_IDS, AXIS_DEVICE_TYPE, AXIS_DOMAIN_SIZE,
    AXIS_GRID, AXIS_LATTICE, AXIS_OCC, AXIS_SPACE_CURVE, AXIS_STENCIL_SEMANTIC, AXIS_STORAGE_FP,
    AXIS_STREAMING_METHOD, AXIS_TRANSFER_MODE, FLAG_BENCHMARK, FLAG_COLLISION, FLAG_COMPUTE_FP,
    FLAG_DEVICE_IDS, FLAG_DEVICE_TYPE, FLAG_DOMAIN_SIZE, FLAG_GRID, FLAG_LATTICE, FLAG_MAX_ITER,
    FLAG_OCC, FLAG_REPETITIONS, FLAG_REPORT_FILENAME, FLAG_SPACE_CURVE, FLAG_STENCIL_SEMANTIC,
    FLAG_STORAGE_FP, FLAG_STREAMING_METHOD, FLAG_TRANSFER_MODE, FLAG_WARMUP_ITER,
};
use crate::io::error::{Result, invalid_parameter, unknown_axis};
use crate::io::settings::SweepSettings;
use crate::sweep::axis::Axis;
use crate::sweep::enumerator::Sweep;
use crate::sweep::predicate::ExclusionPredicate;
use std::path::PathBuf;

/// The LBM benchmark sweep and the command layout used to run it
pub struct SweepPlan {
    /// Valid configurations in traversal order
    pub sweep: Sweep,
    /// Argument layout for the benchmark executable
    pub template: CommandTemplate,
}

impl SweepPlan {
    /// Assemble the sweep declared by `settings` for `program`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The device-set or single-device lists are malformed
    /// - The axis declaration or any exclusion rule is invalid
    /// - The command layout refers to an axis the sweep does not declare
    pub fn from_settings(settings: &SweepSettings, program: impl Into<PathBuf>) -> Result<Self> {
        if settings.report_filename.split_whitespace().count() != 1 {
            return Err(invalid_parameter(
                "report_filename",
                &settings.report_filename,
                &"must be a single non-empty token",
            ));
        }

        let sweep = Sweep::new(declare_axes(settings), declare_predicates(settings))?;
        let template = CommandTemplate::new(program, argument_layout(settings));

        for axis in template.referenced_axes() {
            if !sweep.axes().iter().any(|declared| declared.name() == axis) {
                return Err(unknown_axis(axis, &"the benchmark command layout"));
            }
        }

        Ok(Self { sweep, template })
    }
}

/// Axes in traversal order; changing this order changes the sweep order
fn declare_axes(settings: &SweepSettings) -> Vec<Axis> {
    let single_device_types: Vec<&str> = settings
        .single_device_types
        .iter()
        .map(String::as_str)
        .collect();

    vec![
        Axis::values(AXIS_DEVICE_TYPE, settings.device_types.iter().cloned()),
        Axis::device_prefixes(
            AXIS_DEVICE_IDS,
            settings.device_ids.iter().cloned(),
            AXIS_DEVICE_TYPE,
            &single_device_types,
        ),
        Axis::values(AXIS_OCC, settings.occ.iter().cloned()),
        Axis::values(AXIS_DOMAIN_SIZE, settings.domain_sizes.iter().cloned()),
        Axis::values(AXIS_STORAGE_FP, settings.storage_fp.iter().cloned()),
        Axis::values(AXIS_COMPUTE_FP, settings.compute_fp.iter().cloned()),
        Axis::values(AXIS_GRID, settings.grids.iter().cloned()),
        Axis::values(AXIS_SPACE_CURVE, settings.space_curves.iter().cloned()),
        Axis::values(AXIS_LATTICE, settings.lattices.iter().cloned()),
        Axis::values(AXIS_TRANSFER_MODE, settings.transfer_modes.iter().cloned()),
        Axis::values(
            AXIS_STENCIL_SEMANTIC,
            settings.stencil_semantics.iter().cloned(),
        ),
        Axis::values(AXIS_COLLISION, settings.collisions.iter().cloned()),
        Axis::values(
            AXIS_STREAMING_METHOD,
            settings.streaming_methods.iter().cloned(),
        ),
    ]
}

fn declare_predicates(settings: &SweepSettings) -> Vec<Box<dyn ExclusionPredicate>> {
    settings
        .exclusions
        .iter()
        .cloned()
        .map(|rule| Box::new(rule) as Box<dyn ExclusionPredicate>)
        .collect()
}

/// Flag order expected by the benchmark executable
fn argument_layout(settings: &SweepSettings) -> Vec<ArgumentSpec> {
    vec![
        ArgumentSpec::axis(FLAG_DEVICE_TYPE, AXIS_DEVICE_TYPE),
        ArgumentSpec::axis(FLAG_DEVICE_IDS, AXIS_DEVICE_IDS),
        ArgumentSpec::axis(FLAG_GRID, AXIS_GRID),
        ArgumentSpec::axis(FLAG_DOMAIN_SIZE, AXIS_DOMAIN_SIZE),
        ArgumentSpec::fixed(FLAG_MAX_ITER, &settings.max_iter),
        ArgumentSpec::fixed(FLAG_REPORT_FILENAME, &settings.report_filename),
        ArgumentSpec::axis(FLAG_COMPUTE_FP, AXIS_COMPUTE_FP),
        ArgumentSpec::axis(FLAG_STORAGE_FP, AXIS_STORAGE_FP),
        ArgumentSpec::axis(FLAG_OCC, AXIS_OCC),
        ArgumentSpec::axis(FLAG_TRANSFER_MODE, AXIS_TRANSFER_MODE),
        ArgumentSpec::axis(FLAG_STENCIL_SEMANTIC, AXIS_STENCIL_SEMANTIC),
        ArgumentSpec::axis(FLAG_SPACE_CURVE, AXIS_SPACE_CURVE),
        ArgumentSpec::axis(FLAG_COLLISION, AXIS_COLLISION),
        ArgumentSpec::axis(FLAG_STREAMING_METHOD, AXIS_STREAMING_METHOD),
        ArgumentSpec::axis(FLAG_LATTICE, AXIS_LATTICE),
        ArgumentSpec::switch(FLAG_BENCHMARK),
        ArgumentSpec::fixed(FLAG_WARMUP_ITER, &settings.warmup_iter),
        ArgumentSpec::fixed(FLAG_REPETITIONS, &settings.repetitions),
    ]
}
