/// Borgify — assimilate text from arguments, a file, STDIN, or a prompt.
///
/// Usage: borgify [OPTIONS] [INPUT]...
use anyhow::{Context, Result};
use borgify::core::config::TransformConfig;
use borgify::core::engine::TransformEngine;
use borgify::core::injection::{InjectionScope, PhraseFormat};
use borgify::schema::dialect::Dialect;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Assimilate your text. < RESISTANCE IS FUTILE >
#[derive(Parser, Debug)]
#[command(name = "borgify", version, about)]
struct Cli {
    /// Text to assimilate, or a single file name
    input: Vec<String>,

    /// Chance (0.0-1.0) of appending a Borg phrase
    #[arg(short, long)]
    chance: Option<f64>,

    /// Seed for reproducible phrase injection
    #[arg(short, long)]
    seed: Option<u64>,

    /// Extra dialect RON file merged over the built-in one (repeatable)
    #[arg(short, long)]
    dialect: Vec<PathBuf>,

    /// Start from an empty dialect instead of the built-in Borg one
    #[arg(long)]
    no_builtin: bool,

    /// Transform config RON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw a phrase after every sentence instead of once per line
    #[arg(long)]
    sentence_scope: bool,

    /// Render phrases as `< PHRASE >`
    #[arg(long)]
    bracketed: bool,
}

impl Cli {
    fn transform_config(&self) -> Result<TransformConfig> {
        let mut config = match &self.config {
            Some(path) => TransformConfig::load_from_ron(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TransformConfig::default(),
        };
        if let Some(chance) = self.chance {
            config = config.with_probability(chance);
        }
        if self.sentence_scope {
            config = config.with_scope(InjectionScope::Sentence);
        }
        if self.bracketed {
            config = config.with_phrase_format(PhraseFormat::Bracketed);
        }
        Ok(config)
    }

    fn dialect(&self) -> Result<Dialect> {
        let mut dialect = if self.no_builtin {
            Dialect::default()
        } else {
            Dialect::borg()
        };
        for path in &self.dialect {
            let extra = Dialect::load_from_ron(path)
                .with_context(|| format!("failed to load dialect {}", path.display()))?;
            dialect.merge(extra);
        }
        Ok(dialect)
    }
}

/// Attribution lines ("-- Seven of Nine") are left alone in bulk modes.
fn is_attribution(line: &str) -> bool {
    line.trim().starts_with("-- ")
}

/// Next line without its terminator. Invalid UTF-8 is replaced, not fatal.
fn next_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if input
        .read_until(b'\n', buf)
        .context("failed to read input line")?
        == 0
    {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf[..]);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn assimilate_lines<R: BufRead, W: Write>(
    engine: &TransformEngine<'_>,
    rng: &mut StdRng,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut buf = Vec::new();
    while let Some(line) = next_line(&mut input, &mut buf)? {
        let line = line.trim_end();
        if is_attribution(line) {
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", engine.transform(line, rng))?;
        }
    }
    Ok(())
}

fn interactive<R: BufRead, W: Write>(
    engine: &TransformEngine<'_>,
    rng: &mut StdRng,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "borgify — < RESISTANCE IS FUTILE > Type a line to assimilate. Ctrl-D to quit."
    )?;
    let mut buf = Vec::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        match next_line(&mut input, &mut buf)? {
            Some(line) => writeln!(out, "{}", engine.transform(&line, rng))?,
            None => break,
        }
    }
    writeln!(out, "\n< YOU WILL BE ASSIMILATED >")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.transform_config()?;
    let dialect = cli.dialect()?;
    debug!(
        entries = dialect.lexicon.len(),
        phrases = dialect.phrases.len(),
        probability = config.injection_probability,
        "dialect ready"
    );

    let engine = TransformEngine::new(&dialect, config);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Explicit arguments win over a non-terminal STDIN.
    if let [single] = cli.input.as_slice() {
        let path = Path::new(single);
        if path.is_file() {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            return assimilate_lines(&engine, &mut rng, BufReader::new(file), &mut out);
        }
    }

    if !cli.input.is_empty() {
        let text = cli.input.join(" ");
        writeln!(out, "{}", engine.transform(&text, &mut rng))?;
        return Ok(());
    }

    if !io::stdin().is_terminal() {
        return assimilate_lines(&engine, &mut rng, io::stdin().lock(), &mut out);
    }

    interactive(&engine, &mut rng, io::stdin().lock(), &mut out)
}
