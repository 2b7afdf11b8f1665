//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_dns` library that handles:
//! - Command-line argument parsing
//! - Reading domains from arguments, a file or stdin
//! - Logger initialization
//! - Writing the export artifact
//!
//! All record generation is implemented in the library crate.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use mail_dns::batch::split_bulk_input;
use mail_dns::config::{DEFAULT_APP_NAME, DEFAULT_TTL, MAX_BATCH_DOMAINS};
use mail_dns::export::{export_filename, write_export, ExportMeta};
use mail_dns::initialization::init_logger_with;
use mail_dns::policy::{Alignment, DmarcDisposition, DmarcOptions};
use mail_dns::{
    run, Config, DkimOverrides, DomainInputPolicy, ExportFormat, GenerateError, GenerateRequest,
    LogFormat, LogLevel, ProviderCatalog,
};

#[derive(Debug, Parser)]
#[command(name = "mail_dns", version, about = "Generate mail DNS records for your domains")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate records for one or more domains
    Generate(GenerateArgs),
    /// List the available mail providers
    Providers(ProvidersArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Domains to generate records for
    domains: Vec<String>,

    /// Read additional domains (one per line or comma separated) from a file, or "-" for stdin
    #[arg(long)]
    file: Option<PathBuf>,

    /// Provider id (see `mail_dns providers`)
    #[arg(long, short)]
    provider: String,

    /// Load providers from a JSON file instead of the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// DMARC policy: none, quarantine or reject
    #[arg(long, default_value = "none")]
    policy: DmarcDisposition,

    /// DMARC subdomain policy
    #[arg(long = "sp")]
    subdomain_policy: Option<DmarcDisposition>,

    /// Percentage of failing mail the policy applies to (1-100)
    #[arg(long)]
    pct: Option<u16>,

    /// Aggregate report address
    #[arg(long)]
    rua: String,

    /// Forensic report address
    #[arg(long)]
    ruf: Option<String>,

    /// DKIM alignment: relaxed or strict
    #[arg(long)]
    adkim: Option<Alignment>,

    /// SPF alignment: relaxed or strict
    #[arg(long)]
    aspf: Option<Alignment>,

    /// Aggregate reporting interval in seconds
    #[arg(long)]
    ri: Option<u32>,

    /// Failure reporting options (0, 1, d, s)
    #[arg(long = "fo", value_delimiter = ',')]
    failure_options: Vec<String>,

    /// DKIM public key for a selector
    #[arg(long = "dkim", value_name = "SELECTOR=VALUE", value_parser = parse_dkim_override)]
    dkim: Vec<(String, String)>,

    /// Provider verification token
    #[arg(long)]
    verification_token: Option<String>,

    /// TTL in seconds for every record
    #[arg(long, default_value_t = DEFAULT_TTL)]
    ttl: u32,

    /// Accept pasted URLs and strip "www." before validating
    #[arg(long)]
    lenient: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Output file (stdout if omitted)
    #[arg(long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write into this directory using the standard export filename
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Application name used in export titles and filenames
    #[arg(long, default_value = DEFAULT_APP_NAME)]
    app_name: String,
}

#[derive(Debug, Args)]
struct ProvidersArgs {
    /// Load providers from a JSON file instead of the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn parse_dkim_override(raw: &str) -> Result<(String, String), String> {
    let (selector, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SELECTOR=VALUE, got '{raw}'"))?;
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(format!("missing selector in '{raw}'"));
    }
    Ok((selector.to_string(), value.to_string()))
}

fn load_catalog(path: Option<&Path>) -> Result<ProviderCatalog> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            ProviderCatalog::from_json(&json)
                .with_context(|| format!("Invalid catalog file: {}", path.display()))
        }
        None => Ok(ProviderCatalog::builtin()),
    }
}

fn collect_domains(args: &GenerateArgs) -> Result<Vec<String>> {
    let mut domains = args.domains.clone();
    if let Some(file) = &args.file {
        let text = if file.as_os_str() == "-" {
            info!("Reading domains from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read domains from stdin")?;
            buf
        } else {
            fs::read_to_string(file)
                .with_context(|| format!("Failed to read domain file: {}", file.display()))?
        };
        domains.extend(split_bulk_input(&text));
    }
    Ok(domains)
}

fn generate(args: GenerateArgs) -> Result<i32> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let domains = collect_domains(&args)?;

    let config = Config {
        app_name: args.app_name.clone(),
        ttl: args.ttl,
        max_batch_domains: MAX_BATCH_DOMAINS,
        domain_input: if args.lenient {
            DomainInputPolicy::Lenient
        } else {
            DomainInputPolicy::Strict
        },
    };

    let request = GenerateRequest {
        domains,
        provider_id: args.provider.clone(),
        dmarc: DmarcOptions {
            policy: args.policy,
            subdomain_policy: args.subdomain_policy,
            percentage: args.pct,
            aggregate_report_address: args.rua.clone(),
            forensic_report_address: args.ruf.clone(),
            spf_alignment: args.aspf,
            dkim_alignment: args.adkim,
            reporting_interval_seconds: args.ri,
            failure_options: args.failure_options.clone(),
        },
        dkim_overrides: args.dkim.iter().cloned().collect::<DkimOverrides>(),
        verification_token: args.verification_token.clone(),
    };

    let result = match run(&request, &catalog, &config) {
        Ok(result) => result,
        Err(GenerateError::InvalidPolicy(errors)) => {
            eprintln!("mail_dns error: invalid DMARC options");
            for error in errors {
                eprintln!("  - {error}");
            }
            return Ok(1);
        }
        Err(GenerateError::UnknownProvider(id)) => {
            eprintln!(
                "mail_dns error: unknown provider '{}' (available: {})",
                id,
                catalog.ids().join(", ")
            );
            return Ok(1);
        }
        Err(e) => {
            eprintln!("mail_dns error: {e}");
            return Ok(1);
        }
    };

    let meta = ExportMeta {
        app_name: config.app_name.clone(),
        date: chrono::Local::now().date_naive(),
    };

    let target = match (&args.output, &args.output_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => Some(dir.join(export_filename(
            &meta.app_name,
            meta.date,
            args.format,
        ))),
        (None, None) => None,
    };

    let written = match &target {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let written = write_export(&result, args.format, &meta, io::BufWriter::new(file))?;
            eprintln!("Wrote {} records to {}", written, path.display());
            written
        }
        None => {
            write_export(&result, args.format, &meta, io::stdout().lock())?
        }
    };

    for rejected in &result.rejected {
        eprintln!("Rejected '{}': {}", rejected.raw_input, rejected.reason);
    }
    info!("{} records exported", written);

    // Exit code 2 when nothing at all could be generated
    Ok(if result.accepted.is_empty() { 2 } else { 0 })
}

fn list_providers(args: ProvidersArgs) -> Result<i32> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    for profile in catalog.iter() {
        println!("{} - {}", profile.id, profile.display_name);
        for mx in profile.mx_by_priority() {
            println!("    MX    {:>3} {}", mx.priority, mx.host_template);
        }
        println!("    SPF   {}", profile.spf_include);
        println!("    DKIM  {}", profile.dkim_selectors.join(", "));
    }
    Ok(0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let code = match cli.command {
        Command::Generate(args) => generate(args)?,
        Command::Providers(args) => list_providers(args)?,
    };

    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
