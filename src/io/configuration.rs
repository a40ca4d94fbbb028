//! Axis names, command-line flags, and sweep defaults

// Axis names in declared traversal order
/// Device type axis (cpu, gpu)
pub const AXIS_DEVICE_TYPE: &str = "deviceType";
/// Active device set axis (cumulative prefixes of the device ids)
pub const AXIS_DEVICE_IDS: &str = "deviceIds";
/// Occupancy policy axis
pub const AXIS_OCC: &str = "occ";
/// Domain edge length axis
pub const AXIS_DOMAIN_SIZE: &str = "domainSize";
/// Storage precision axis
pub const AXIS_STORAGE_FP: &str = "storageFP";
/// Compute precision axis
pub const AXIS_COMPUTE_FP: &str = "computeFP";
/// Grid layout axis
pub const AXIS_GRID: &str = "grid";
/// Space-filling curve axis
pub const AXIS_SPACE_CURVE: &str = "spaceCurve";
/// Lattice axis
pub const AXIS_LATTICE: &str = "lattice";
/// Halo transfer mode axis
pub const AXIS_TRANSFER_MODE: &str = "transferMode";
/// Stencil semantic axis
pub const AXIS_STENCIL_SEMANTIC: &str = "stencilSemantic";
/// Collision operator axis
pub const AXIS_COLLISION: &str = "collision";
/// Streaming method axis
pub const AXIS_STREAMING_METHOD: &str = "streamingMethod";

// Flags understood by the benchmark executable
/// Flag for the device type
pub const FLAG_DEVICE_TYPE: &str = "--deviceType";
/// Flag for the device id list
pub const FLAG_DEVICE_IDS: &str = "--deviceIds";
/// Flag for the grid layout
pub const FLAG_GRID: &str = "--grid";
/// Flag for the domain size
pub const FLAG_DOMAIN_SIZE: &str = "--domain-size";
/// Flag for the iteration count
pub const FLAG_MAX_ITER: &str = "--max-iter";
/// Flag for the report file prefix
pub const FLAG_REPORT_FILENAME: &str = "--report-filename";
/// Flag for the compute precision
pub const FLAG_COMPUTE_FP: &str = "--computeFP";
/// Flag for the storage precision
pub const FLAG_STORAGE_FP: &str = "--storageFP";
/// Flag for the occupancy policy
pub const FLAG_OCC: &str = "--occ";
/// Flag for the transfer mode
pub const FLAG_TRANSFER_MODE: &str = "--transferMode";
/// Flag for the stencil semantic
pub const FLAG_STENCIL_SEMANTIC: &str = "--stencilSemantic";
/// Flag for the space-filling curve
pub const FLAG_SPACE_CURVE: &str = "--spaceCurve";
/// Flag for the collision operator
pub const FLAG_COLLISION: &str = "--collision";
/// Flag for the streaming method
pub const FLAG_STREAMING_METHOD: &str = "--streamingMethod";
/// Flag for the lattice
pub const FLAG_LATTICE: &str = "--lattice";
/// Flag-only switch enabling benchmark mode
pub const FLAG_BENCHMARK: &str = "--benchmark";
/// Flag for warmup iterations
pub const FLAG_WARMUP_ITER: &str = "--warmup-iter";
/// Flag for repetitions
pub const FLAG_REPETITIONS: &str = "--repetitions";

// Run constants shared by every configuration
/// Default iteration count per run
pub const DEFAULT_MAX_ITER: u64 = 10_000;
/// Default warmup iterations per run
pub const DEFAULT_WARMUP_ITER: u64 = 10;
/// Default repetitions per run
pub const DEFAULT_REPETITIONS: u64 = 5;
/// Default report file prefix passed to the benchmark
pub const DEFAULT_REPORT_FILENAME: &str = "lbm";
/// Default path of the benchmark executable
pub const DEFAULT_EXECUTABLE: &str = "./lbm";

// Device-set expansion
/// Device types that only ever use the first device
pub const SINGLE_DEVICE_TYPES: &[&str] = &["cpu"];
/// Streaming methods allowed when more than one device is active
pub const MULTI_DEVICE_STREAMING: &[&str] = &["pull"];
/// Lattices currently exercised by the sweep
pub const BENCHMARKED_LATTICES: &[&str] = &["d3q27"];

// Log layout
/// Suffix appended to the executable path to name the run log
pub const LOG_SUFFIX: &str = ".log";
/// Line separating command lines from benchmark output in the run log
pub const LOG_DELIMITER: &str = "-------------------------------------------";

// Progress bar display settings
/// Width of the progress bar in cells
pub const PROGRESS_BAR_WIDTH: usize = 40;
/// Width the progress label is padded to
pub const PROGRESS_LABEL_WIDTH: usize = 10;
/// Label shown in front of the progress bar
pub const PROGRESS_LABEL: &str = "Progress";
