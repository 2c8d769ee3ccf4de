use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, GeminiConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context, copy};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidModel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidModel { raw } => write!(f, "invalid --model value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--model <name>] [--timeout-secs <n>] [--offline]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --model <name>        question generator model (default gemini-3-flash-preview)");
    eprintln!("  --timeout-secs <n>    generator request timeout in seconds (default 20)");
    eprintln!("  --offline             skip the generator and use the bundled questions");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NOOR_AI_API_KEY, NOOR_AI_BASE_URL, NOOR_AI_MODEL, NOOR_AI_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    model: Option<String>,
    timeout: Option<Duration>,
    offline: bool,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => {
                    let value = require_value(args, "--model")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidModel { raw: value });
                    }
                    parsed.model = Some(value);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let secs: u64 = value
                        .trim()
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.timeout = Some(Duration::from_secs(secs));
                }
                "--offline" => parsed.offline = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Environment config with command-line overrides applied.
    fn generator_config(&self, from_env: Option<GeminiConfig>) -> Option<GeminiConfig> {
        if self.offline {
            return None;
        }
        let mut config = from_env?;
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout = timeout;
        }
        Some(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(&mut std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let services = AppServices::new(parsed.generator_config(GeminiConfig::from_env()));
    if !services.generation_enabled() && !parsed.offline {
        warn!("NOOR_AI_API_KEY not set, serving bundled questions only");
    }
    let services: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&services);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(copy::APP_TITLE)
            .with_always_on_top(false),
    );

    info!("launching quiz window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(&mut args.iter().map(ToString::to_string))
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&["--model", "m", "--timeout-secs", "5", "--offline"]).unwrap();
        assert_eq!(args.model.as_deref(), Some("m"));
        assert_eq!(args.timeout, Some(Duration::from_secs(5)));
        assert!(args.offline);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--model"]),
            Err(ArgsError::MissingValue { flag: "--model" })
        );
        assert_eq!(
            parse(&["--timeout-secs", "0"]),
            Err(ArgsError::InvalidTimeout { raw: "0".into() })
        );
        assert_eq!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
    }

    #[test]
    fn overrides_apply_to_env_config() {
        let args = parse(&["--model", "other", "--timeout-secs", "3"]).unwrap();
        let config = args
            .generator_config(Some(GeminiConfig::new("key")))
            .unwrap();
        assert_eq!(config.model, "other");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn offline_or_missing_key_disables_generator() {
        let offline = parse(&["--offline"]).unwrap();
        assert!(
            offline
                .generator_config(Some(GeminiConfig::new("key")))
                .is_none()
        );
        assert!(Args::default().generator_config(None).is_none());
    }
}
