use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use proseva_unformat::{telemetry, FormatResult, Paste};

#[derive(Parser, Debug)]
#[command(name = "unformat")]
#[command(about = "Remove all formatting from rich text and report what was stripped")]
struct Args {
    /// File to read (defaults to stdin)
    #[arg(conflicts_with_all = ["html", "plain"])]
    input: Option<PathBuf>,

    /// Markup flavor of a clipboard export (text/html), preferred over --plain
    #[arg(long)]
    html: Option<PathBuf>,

    /// Plain flavor of a clipboard export (text/plain)
    #[arg(long)]
    plain: Option<PathBuf>,

    /// Write the plain text here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print {"plainText", "categories"} as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Don't print the summary on stderr
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    telemetry::init();
    let args = Args::parse();

    let paste = read_paste(&args)?;
    if paste.is_empty() {
        tracing::warn!("nothing to format, input is empty");
    }

    let result = paste.format();
    tracing::info!(categories = ?result.labels(), "stripped formatting");

    let rendered = if args.json {
        serde_json::to_string_pretty(&result)?
    } else {
        result.plain_text.clone()
    };

    match &args.output {
        Some(path) => {
            fs::write(path, with_newline(&rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            io::stdout()
                .lock()
                .write_all(with_newline(&rendered).as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    if !args.quiet {
        print_summary(&result);
    }

    Ok(())
}

fn read_paste(args: &Args) -> Result<Paste> {
    if args.html.is_some() || args.plain.is_some() {
        let html = args.html.as_deref().map(read_file).transpose()?;
        let plain = args.plain.as_deref().map(read_file).transpose()?;
        if html.as_deref().is_some_and(|s| !s.is_empty()) {
            tracing::info!("using markup flavor");
        }
        return Ok(Paste::new(html, plain));
    }

    let text = match &args.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(Paste::plain(text))
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn with_newline(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!("{s}\n")
    }
}

fn print_summary(result: &FormatResult) {
    let removed = if result.categories.is_empty() {
        "nothing".to_string()
    } else {
        result.labels().join(", ")
    };
    eprintln!("Removed:    {removed}");
    eprintln!("Characters: {}", result.plain_text.chars().count());
    eprintln!("Words:      {}", result.plain_text.split_whitespace().count());
}
