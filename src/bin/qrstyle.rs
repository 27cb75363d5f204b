use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use qrstyle::{
    ErrorCorrection, LogoAsset, ModuleStyle, Payload, QrcodeEncoder, RenderRequest, generate_png,
};

#[derive(Parser, Debug)]
#[command(name = "qrstyle", version)]
struct Cli {
    /// Log debug-level rendering details to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a text payload as a styled QR PNG.
    Render(RenderArgs),
    /// Render a JSON request file as a styled QR PNG.
    Request(RequestArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Text to encode.
    #[arg(long)]
    text: String,

    /// Module shape.
    #[arg(long, value_enum, default_value_t = ModuleStyle::Square)]
    style: ModuleStyle,

    /// Pixels per module (1-50).
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    module_size: i64,

    /// Quiet-zone width in modules (0-20).
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    margin: i64,

    /// Error-correction level.
    #[arg(long, value_enum, default_value_t = ErrorCorrection::M)]
    ecc: ErrorCorrection,

    /// PNG or JPEG logo to center over the code.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RequestArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

/// On-disk request: a [`RenderRequest`] plus an optional logo file.
#[derive(serde::Deserialize, Debug)]
struct RequestFile {
    #[serde(flatten)]
    request: RenderRequest,
    /// Relative paths resolve against the request file's directory.
    #[serde(default)]
    logo_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Request(args) => cmd_request(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let request = RenderRequest {
        payload: Payload::Text { text: args.text },
        module_size: args.module_size,
        margin: args.margin,
        error_correction: args.ecc,
        style: args.style,
    };
    write_png(&request, args.logo.as_deref(), &args.out)
}

fn cmd_request(args: RequestArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read request '{}'", args.in_path.display()))?;
    let file: RequestFile = serde_json::from_str(&json)
        .with_context(|| format!("parse request '{}'", args.in_path.display()))?;

    let base = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let logo = file.logo_path.map(|p| base.join(p));
    write_png(&file.request, logo.as_deref(), &args.out)
}

fn write_png(request: &RenderRequest, logo: Option<&Path>, out: &Path) -> anyhow::Result<()> {
    let logo_bytes = logo
        .map(|p| std::fs::read(p).with_context(|| format!("read logo '{}'", p.display())))
        .transpose()?;
    let logo_name = logo.and_then(|p| p.file_name()).and_then(|n| n.to_str());
    let asset = logo_bytes.as_deref().map(|bytes| LogoAsset {
        bytes,
        filename: logo_name,
    });

    let png = generate_png(request, asset, &QrcodeEncoder)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, png).with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
