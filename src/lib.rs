pub mod convert;
pub mod reading;

/// Input path used when the CLI is invoked without arguments.
pub const DEFAULT_INPUT: &str = "ImportCSV.csv";
/// Output path used when the CLI is invoked without a second argument.
pub const DEFAULT_OUTPUT: &str = "letture.json";
