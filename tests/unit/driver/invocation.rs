//! Tests for argument layout and command-line realization

#[cfg(test)]
mod tests {
    use lbmsweep::SweepError;
    use lbmsweep::driver::invocation::{ArgumentSpec, CommandTemplate};
    use lbmsweep::sweep::configuration::Configuration;
    use std::ffi::OsStr;
    use std::path::Path;

    fn template() -> CommandTemplate {
        CommandTemplate::new(
            "./lbm",
            vec![
                ArgumentSpec::axis("--deviceType", "deviceType"),
                ArgumentSpec::axis("--deviceIds", "deviceIds"),
                ArgumentSpec::fixed("--max-iter", &10_000),
                ArgumentSpec::switch("--benchmark"),
                ArgumentSpec::fixed("--repetitions", &5),
            ],
        )
    }

    fn gpu_pair() -> Configuration {
        [("deviceType", "gpu"), ("deviceIds", "0 1")]
            .into_iter()
            .collect()
    }

    // Tests arguments follow the template order and split multi-token values
    // Verified by pushing the device set as a single token
    #[test]
    fn test_build_arguments() {
        let invocation = template().build(&gpu_pair()).expect("complete configuration");
        assert_eq!(invocation.program, Path::new("./lbm"));
        assert_eq!(
            invocation.args,
            vec![
                "--deviceType",
                "gpu",
                "--deviceIds",
                "0",
                "1",
                "--max-iter",
                "10000",
                "--benchmark",
                "--repetitions",
                "5",
            ]
        );
    }

    // Tests the command line joins program and tokens with single spaces
    #[test]
    fn test_command_line() {
        let invocation = template().build(&gpu_pair()).expect("complete configuration");
        assert_eq!(
            invocation.command_line(),
            "./lbm --deviceType gpu --deviceIds 0 1 --max-iter 10000 --benchmark --repetitions 5"
        );
    }

    // Tests the process builder carries program and arguments
    #[test]
    fn test_command_builder() {
        let invocation = template().build(&gpu_pair()).expect("complete configuration");
        let command = invocation.command();
        assert_eq!(command.get_program(), OsStr::new("./lbm"));
        assert_eq!(command.get_args().count(), invocation.args.len());
    }

    // Tests a configuration lacking a templated axis is rejected
    // Verified by silently skipping missing axes
    #[test]
    fn test_missing_binding() {
        let partial: Configuration = [("deviceType", "cpu")].into_iter().collect();
        match template().build(&partial) {
            Err(SweepError::MissingBinding { axis }) => assert_eq!(axis, "deviceIds"),
            other => unreachable!("Expected MissingBinding, got {other:?}"),
        }
    }

    // Tests referenced axes exclude fixed and switch entries
    #[test]
    fn test_referenced_axes() {
        let template = template();
        let axes: Vec<&str> = template.referenced_axes().collect();
        assert_eq!(axes, vec!["deviceType", "deviceIds"]);
        assert_eq!(template.arguments().len(), 5);
        assert_eq!(template.program(), Path::new("./lbm"));
    }
}
