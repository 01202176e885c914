//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `openx_htb` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the request descriptors of a simulated auction round
//!
//! All request construction is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use openx_htb::config::{LogFormat, LogLevel};
use openx_htb::initialization::init_logger_with;
use openx_htb::{
    generate_return_parcels, load_identity_data, load_partner_config, Architecture,
    PartnerModule, RequestDescriptor,
};

#[derive(Debug, Parser)]
#[command(
    name = "openx_htb",
    about = "Builds OpenX bid requests for every slot in a partner config."
)]
struct Opt {
    /// Partner configuration JSON file
    #[arg(long, value_parser)]
    config: PathBuf,

    /// Resolved identity data JSON file
    #[arg(long, value_parser)]
    identity: Option<PathBuf>,

    /// Override the configured architecture: sra|mra
    #[arg(long, value_enum)]
    architecture: Option<Architecture>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Print one full request URL per line instead of JSON descriptors
    #[arg(long)]
    urls: bool,
}

/// Loads the configuration, builds the round's requests and renders them for stdout.
fn run(opt: Opt) -> Result<String> {
    let mut config = load_partner_config(&opt.config)?;
    if let Some(architecture) = opt.architecture {
        config.architecture = Some(architecture);
    }

    let identity = opt
        .identity
        .as_deref()
        .map(load_identity_data)
        .transpose()?
        .map(Arc::new);

    let module = PartnerModule::new(config).context("Failed to configure partner module")?;
    let parcels = generate_return_parcels(module.profile(), module.config(), identity)?;
    let requests = module
        .generate_requests(&parcels)
        .context("Failed to build bid requests")?;

    render_output(&requests, opt.urls)
}

/// Renders descriptors as pretty JSON, or as one full URL per line.
fn render_output(requests: &[RequestDescriptor], urls: bool) -> Result<String> {
    if !urls {
        return serde_json::to_string_pretty(requests).context("Failed to serialize requests");
    }

    let mut lines = Vec::with_capacity(requests.len());
    for request in requests {
        let url = request
            .to_url()
            .with_context(|| format!("Failed to render URL for request {}", request.callback_id))?;
        lines.push(url.to_string());
    }
    Ok(lines.join("\n"))
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(opt) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("openx_htb error: {:#}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn descriptor(url: &str) -> RequestDescriptor {
        let mut data = BTreeMap::new();
        data.insert("auid".to_string(), "54321".into());
        RequestDescriptor {
            url: url.to_string(),
            data,
            callback_id: "_abc".to_string(),
        }
    }

    #[test]
    fn test_opt_parses_value_enums() {
        let opt = Opt::try_parse_from([
            "openx_htb",
            "--config",
            "partner.json",
            "--architecture",
            "mra",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(opt.architecture, Some(Architecture::Mra));
        assert_eq!(opt.log_level, LogLevel::Info);
        assert_eq!(opt.log_format, LogFormat::Json);
        assert!(!opt.urls);
    }

    #[test]
    fn test_opt_rejects_unknown_architecture() {
        let result = Opt::try_parse_from([
            "openx_htb",
            "--config",
            "partner.json",
            "--architecture",
            "hybrid",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_output_urls() {
        let requests = vec![descriptor("https://example-d.openx.net/w/1.0/arj")];
        let output = render_output(&requests, true).unwrap();
        assert_eq!(output, "https://example-d.openx.net/w/1.0/arj?auid=54321");
    }

    #[test]
    fn test_render_output_url_failure_is_an_error() {
        // Reported through run()'s error path like every other failure
        let requests = vec![descriptor("/w/1.0/arj")];
        let err = render_output(&requests, true).unwrap_err();
        assert!(err.to_string().contains("Failed to render URL for request _abc"));
    }

    #[test]
    fn test_render_output_json() {
        let requests = vec![descriptor("https://example-d.openx.net/w/1.0/arj")];
        let output = render_output(&requests, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["callbackId"], "_abc");
    }
}
