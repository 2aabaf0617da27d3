use anyhow::Result;
use letture_convert::{convert, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    info!("converting {} -> {}", input, output);
    convert::convert_csv_to_json(&input, &output)?;
    Ok(())
}
