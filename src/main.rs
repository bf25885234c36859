use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use smallbasic_lexer::LexicalError;
use smallbasic_lexer::output::{render_json, render_text};
use smallbasic_lexer::scanner;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sbtok", about = "Tokenize Small Basic source, one token per line")]
struct Cli {
    /// Source file to tokenize (omit or `-` for stdin)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report a lexical error on stderr and exit with failure
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }

    fn source_name(&self) -> String {
        self.input_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}

fn read_source(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read source file '{}'", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("read source from stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = read_source(&cli)?;
    let tokens = scanner::tokenize(&source);

    match cli.format {
        Format::Text => println!("{}", render_text(&tokens)),
        Format::Json => println!("{}", render_json(&tokens)),
    }

    if cli.check {
        if let Some(token) = tokens.last().filter(|t| t.is_error()) {
            let name = cli.source_name();
            if let Some(err) = LexicalError::in_source(&name, &source, token.position()) {
                eprintln!("{:?}", miette::Report::new(err));
            }
            bail!("lexical error in {name}");
        }
    }
    Ok(())
}
