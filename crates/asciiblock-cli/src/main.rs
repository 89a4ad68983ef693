use anyhow::{Context as _, Result};
use asciiblock_config::Config;
use asciiblock_engine::{Block, ContentModel, Context, Identity, Sub, SubPreset};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

/// Render one block of source text.
#[derive(Debug, Parser)]
#[command(name = "asciiblock", version, about)]
struct Args {
    /// Source file to read; omit or pass `-` to read stdin
    file: Option<PathBuf>,

    /// Block context, which selects the default content model and subs
    #[arg(long, default_value = "paragraph")]
    context: Context,

    /// Override the content model (compound, simple, verbatim, raw, empty)
    #[arg(long)]
    content_model: Option<ContentModel>,

    /// Override the substitutions with a comma-separated list
    #[arg(long, value_delimiter = ',', conflicts_with = "preset")]
    subs: Option<Vec<Sub>>,

    /// Override the substitutions with a preset (none, basic, header, normal, verbatim)
    #[arg(long)]
    preset: Option<SubPreset>,

    /// Config file to use instead of ~/.config/asciiblock/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the raw source instead of the rendered content
    #[arg(long, conflicts_with = "inspect")]
    source: bool,

    /// Print a one-line summary of the block
    #[arg(long)]
    inspect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Content,
    Source,
    Inspect,
}

impl Args {
    /// `--source` and `--inspect` are mutually exclusive.
    fn output(&self) -> Output {
        if self.inspect {
            Output::Inspect
        } else if self.source {
            Output::Source
        } else {
            Output::Content
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    };
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if explicit.is_some() => {
            anyhow::bail!("config file '{}' does not exist", config_path.display())
        }
        None => {
            log::debug!("No config file found, using built-in defaults");
            Ok(Config::default())
        }
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn build_block(args: &Args, config: &Config, text: String) -> Block {
    let mut opts = config.options_for(args.context);
    if let Some(model) = args.content_model {
        opts.content_model = model;
    }
    if let Some(subs) = &args.subs {
        opts.subs = subs.clone();
    } else if let Some(preset) = args.preset {
        opts.subs = preset.expand();
    }
    log::debug!(
        "{} block: content model {}, subs {:?}",
        args.context,
        opts.content_model,
        opts.subs
    );
    Block::new(args.context, opts.with_source(text))
}

/// Renders the requested view of `block`. `None` means there is nothing to print.
fn render(block: &Block, output: Output) -> Option<String> {
    match output {
        Output::Source => Some(block.source()),
        Output::Inspect => Some(block.to_string()),
        Output::Content => block.content(&Identity).unwrap_or_else(|never| match never {}),
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let text = read_source(args.file.as_deref())?;
    let block = build_block(args, &config, text);

    if let Some(out) = render(&block, args.output()) {
        println!("{out}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["asciiblock"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_to_paragraph_content() {
        let a = args(&[]);
        assert_eq!(a.context, Context::Paragraph);
        assert_eq!(a.output(), Output::Content);
        assert!(a.file.is_none());
    }

    #[test]
    fn parses_subs_list() {
        let a = args(&["--subs", "quotes,callouts"]);
        assert_eq!(a.subs, Some(vec![Sub::Quotes, Sub::Callouts]));
    }

    #[test]
    fn rejects_unknown_context() {
        assert!(Args::try_parse_from(["asciiblock", "--context", "table"]).is_err());
    }

    #[test]
    fn subs_and_preset_conflict() {
        let parsed =
            Args::try_parse_from(["asciiblock", "--subs", "quotes", "--preset", "basic"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn listing_renders_trimmed_verbatim() {
        let a = args(&["--context", "listing"]);
        let block = build_block(&a, &Config::default(), "\n  code\n\n".to_string());
        assert_eq!(block.content_model(), ContentModel::Verbatim);
        assert_eq!(render(&block, Output::Content).as_deref(), Some("  code"));
    }

    #[test]
    fn flags_override_config() {
        let a = args(&["--content-model", "empty", "--preset", "none"]);
        let block = build_block(&a, &Config::default(), "text".to_string());
        assert!(block.subs.is_empty());
        assert_eq!(render(&block, Output::Content), None);
        assert_eq!(render(&block, Output::Source).as_deref(), Some("text"));
    }

    #[test]
    fn source_and_inspect_conflict() {
        let parsed = Args::try_parse_from(["asciiblock", "--source", "--inspect"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn source_flag_selects_raw_source() {
        assert_eq!(args(&["--source"]).output(), Output::Source);
    }

    #[test]
    fn inspect_prints_block_summary() {
        let a = args(&["--inspect"]);
        let block = build_block(&a, &Config::default(), "a\nb".to_string());
        let out = render(&block, a.output()).unwrap();
        assert!(out.ends_with("content_model: simple, style: none, lines: 2 }"));
    }
}
