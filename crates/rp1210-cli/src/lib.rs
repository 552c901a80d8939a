//! RP1210 Lookup Tool
//!
//! Resolves RP1210 error codes and command codes from the command line.

pub mod config;

use rp1210::error_code::{self, ErrorEntry};
use rp1210::{parse_code, Command, ErrorCode, Rp1210Error};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

pub use config::{LookupConfig, OutputFormat};

/// Errors from argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Nothing to look up
    #[error("usage: rp1210-lookup [--json | --text] (--errors | --commands | <code-or-name>...)")]
    NoArguments,

    /// Flag we do not understand
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    /// Argument is neither a number nor a known name
    #[error(transparent)]
    Lookup(#[from] Rp1210Error),
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Dump the error table
    ListErrors,
    /// Dump the command table
    ListCommands,
    /// Look up individual codes or names
    Lookup(Vec<String>),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub request: Request,
    /// `--json` or `--text` on the command line overrides the configured format
    pub format_override: Option<OutputFormat>,
}

/// A resolved lookup argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Error(ErrorCode),
    Command(Command),
}

/// Parse arguments (without the program name)
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut format_override = None;
    let mut request = None;
    let mut lookups = Vec::new();

    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "--json" => format_override = Some(OutputFormat::Json),
            "--text" => format_override = Some(OutputFormat::Text),
            "--errors" => request = Some(Request::ListErrors),
            "--commands" => request = Some(Request::ListCommands),
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownFlag(flag.to_string()))
            }
            value => lookups.push(value.to_string()),
        }
    }

    let request = match request {
        Some(listing) => listing,
        None if !lookups.is_empty() => Request::Lookup(lookups),
        None => return Err(CliError::NoArguments),
    };

    Ok(Invocation {
        request,
        format_override,
    })
}

/// Resolve one argument.
///
/// Numbers are error codes. Names are tried as commands first, then as
/// error names.
pub fn resolve(arg: &str) -> Result<Resolved, Rp1210Error> {
    if let Ok(code) = parse_code(arg) {
        return Ok(Resolved::Error(ErrorCode(code)));
    }

    if let Ok(command) = arg.parse::<Command>() {
        return Ok(Resolved::Command(command));
    }

    match error_code::code_for(arg) {
        Some(code) => Ok(Resolved::Error(ErrorCode(code))),
        None => {
            debug!("Could not resolve argument {:?}", arg);
            Err(Rp1210Error::InvalidCode(arg.to_string()))
        }
    }
}

/// Render a resolved argument as one output line
pub fn render(resolved: Resolved, format: OutputFormat) -> String {
    match (resolved, format) {
        (Resolved::Error(code), OutputFormat::Text) => match code.category() {
            Some(category) => format!("{} [{}]", code, category),
            None => code.to_string(),
        },
        (Resolved::Error(code), OutputFormat::Json) => json!({
            "code": code.0,
            "name": code.describe(),
            "category": code.category(),
            "known": code.is_known(),
        })
        .to_string(),
        (Resolved::Command(command), OutputFormat::Text) => {
            format!("{} [{}]", command, command.category())
        }
        (Resolved::Command(command), OutputFormat::Json) => json!({
            "code": command.code(),
            "name": command.name(),
            "category": command.category(),
            "vendor": command.is_vendor_specific(),
        })
        .to_string(),
    }
}

fn render_entry(entry: &ErrorEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{:>5}  {:<42} {}", entry.code, entry.name, entry.category),
        OutputFormat::Json => json!(entry).to_string(),
    }
}

/// Produce every output line for an invocation.
///
/// Lookups stop at the first argument that cannot be resolved.
pub fn execute(request: &Request, format: OutputFormat) -> Result<Vec<String>, CliError> {
    let lines = match request {
        Request::ListErrors => error_code::entries()
            .iter()
            .map(|e| render_entry(e, format))
            .collect(),
        Request::ListCommands => Command::ALL
            .iter()
            .map(|&c| render(Resolved::Command(c), format))
            .collect(),
        Request::Lookup(args) => args
            .iter()
            .map(|arg| resolve(arg).map(|r| render(r, format)))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(lines)
}

/// Initialize logging
pub fn init_logging(config: &LookupConfig) -> anyhow::Result<()> {
    let level: Level = config.level();

    if config.json_logs {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_lookup_args() {
        let inv = parse_args(["128", "0x8000"]).unwrap();
        assert_eq!(
            inv.request,
            Request::Lookup(vec!["128".to_string(), "0x8000".to_string()])
        );
        assert_eq!(inv.format_override, None);
    }

    #[test]
    fn test_parse_listing_and_json() {
        let inv = parse_args(["--json", "--errors"]).unwrap();
        assert_eq!(inv.request, Request::ListErrors);
        assert_eq!(inv.format_override, Some(OutputFormat::Json));

        let inv = parse_args(["--commands"]).unwrap();
        assert_eq!(inv.request, Request::ListCommands);
    }

    #[test]
    fn test_text_flag_parses_and_is_in_usage() {
        let inv = parse_args(["--text", "128"]).unwrap();
        assert_eq!(inv.format_override, Some(OutputFormat::Text));

        let usage = CliError::NoArguments.to_string();
        assert!(usage.contains("--text"));
        assert!(usage.contains("--json"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_args(Vec::<String>::new()),
            Err(CliError::NoArguments)
        ));
        assert!(matches!(
            parse_args(["--verbose"]),
            Err(CliError::UnknownFlag(_))
        ));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("128").unwrap(), Resolved::Error(ErrorCode(128)));
        assert_eq!(
            resolve("CMD_SET_J1939_BAUD").unwrap(),
            Resolved::Command(Command::SetJ1939Baud)
        );
        assert_eq!(
            resolve("ERR_BUS_OFF").unwrap(),
            Resolved::Error(ErrorCode(151))
        );
        assert!(matches!(
            resolve("NOT_A_THING"),
            Err(Rp1210Error::InvalidCode(_))
        ));
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(Resolved::Error(ErrorCode(128)), OutputFormat::Text),
            "ERR_DLL_NOT_INITIALIZED (128) [client]"
        );
        assert_eq!(
            render(Resolved::Error(ErrorCode(9999)), OutputFormat::Text),
            "UNKNOWN_ERROR (9999)"
        );
        assert_eq!(
            render(Resolved::Command(Command::GenericDriverCommand), OutputFormat::Text),
            "CMD_GENERIC_DRIVER_COMMAND (0x8000) [general]"
        );
    }

    #[test]
    fn test_render_json() {
        let line = render(Resolved::Error(ErrorCode(3008)), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["name"], "API_NO_DEVICES_FOUND");
        assert_eq!(value["category"], "Vendor");
        assert_eq!(value["known"], true);

        let line = render(Resolved::Error(ErrorCode(0)), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["name"], "UNKNOWN_ERROR");
        assert!(value["category"].is_null());

        let line = render(Resolved::Command(Command::GenericDriverCommand), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["code"], 0x8000);
        assert_eq!(value["vendor"], true);
    }

    #[test]
    fn test_execute_listings() {
        let errors = execute(&Request::ListErrors, OutputFormat::Text).unwrap();
        assert_eq!(errors.len(), error_code::entries().len());
        assert!(errors[0].contains("ERR_DLL_NOT_INITIALIZED"));

        let commands = execute(&Request::ListCommands, OutputFormat::Json).unwrap();
        assert_eq!(commands.len(), Command::ALL.len());
    }

    #[test]
    fn test_execute_stops_on_bad_argument() {
        let request = Request::Lookup(vec!["128".to_string(), "bogus".to_string()]);
        assert!(matches!(
            execute(&request, OutputFormat::Text),
            Err(CliError::Lookup(Rp1210Error::InvalidCode(_)))
        ));
    }

    proptest! {
        #[test]
        fn prop_numeric_args_always_resolve(code in any::<u16>()) {
            let resolved = resolve(&code.to_string()).unwrap();
            prop_assert_eq!(resolved, Resolved::Error(ErrorCode(code)));
            let line = render(resolved, OutputFormat::Text);
            prop_assert!(line.starts_with(rp1210::describe(code)));
        }
    }
}
