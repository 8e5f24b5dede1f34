//! CLI entry point for targetid.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All identification logic lives in the `targetid` facade.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "targetid",
    version,
    about = "Stable, credential-safe identifiers for scan targets"
)]
struct Cli {
    /// Target to identify (directory or file; must exist).
    #[arg(default_value = ".")]
    path: Utf8PathBuf,

    /// Sub-path within the target, appended as a percent-encoded fragment.
    /// Not required to exist on disk.
    #[arg(long)]
    sub_path: Option<String>,

    /// Emit a JSON object instead of the bare id.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let id = targetid::get_target_id(&cli.path, cli.sub_path.as_deref())
        .with_context(|| format!("identify target: {}", cli.path))?;

    if cli.json {
        println!("{}", serde_json::json!({ "target_id": id.as_str() }));
    } else {
        println!("{id}");
    }

    Ok(())
}
