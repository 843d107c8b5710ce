use basenum::{help, init_constants, make_codec, CodecConfig, NumeralError, Operator};
use std::process::ExitCode;

const USAGE: &str = "\
usage:
  basenum encode <radix> <value> [precision]
  basenum decode <radix> <numeral>
  basenum <plus|minus|times|divide|pow> <radix> <x> <y>
  basenum constants
  basenum help";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Numeral(NumeralError),
}

impl From<NumeralError> for CliError {
    fn from(e: NumeralError) -> Self {
        Self::Numeral(e)
    }
}

fn parse<T: std::str::FromStr>(arg: &str, what: &str) -> Result<T, CliError> {
    arg.parse()
        .map_err(|_| CliError::Usage(format!("invalid {what}: {arg}")))
}

fn run(args: &[String]) -> Result<String, CliError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["encode", radix, value, rest @ ..] => {
            let mut config = CodecConfig::new(parse(radix, "radix")?);
            if let [precision] = rest {
                config = config.with_precision(parse(precision, "precision")?);
            } else if !rest.is_empty() {
                return Err(CliError::Usage(USAGE.to_string()));
            }
            let value: f64 = parse(value, "value")?;
            Ok(config.build()?.encode(value)?)
        }
        ["decode", radix, numeral] => {
            let codec = make_codec(parse(radix, "radix")?)?;
            Ok(codec.decode(*numeral)?.to_string())
        }
        ["constants"] => {
            let constants = init_constants()?;
            Ok(constants
                .iter()
                .map(|(name, value)| format!("{name} = {value}"))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        ["help"] => Ok(format!("{USAGE}\n\n{}", help(&init_constants()?))),
        [op, radix, x, y] => {
            let op: Operator = op.parse().map_err(CliError::Usage)?;
            let codec = make_codec(parse(radix, "radix")?)?;
            Ok(codec.apply(op, *x, *y)?)
        }
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliError::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        Err(CliError::Numeral(e)) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
