use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use pocketconsole::{Console, ConsoleOptions, Label, LogArg};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Action {
    Error,
    Warn,
    Info,
    Aced,
    Debug,
    /// Plain stdout output, no filtering or prefix
    Log,
    /// Plain stderr output, no filtering or prefix
    RawError,
    /// Render the JSON argument as a table on stdout
    Table,
}

#[derive(Parser)]
#[command(name = "pocketconsole")]
#[command(about = "Write leveled, prefixed log lines to the terminal")]
#[command(version)]
struct Args {
    /// What to write
    #[arg(value_enum)]
    action: Action,

    /// Values to log (a call with several values is written as a group)
    #[arg(value_name = "ARGS")]
    values: Vec<String>,

    /// Module name shown by %m
    #[arg(short = 'm', long)]
    module: Option<String>,

    /// Level threshold: debug, info, warn, error or none
    #[arg(short = 'l', long)]
    level: Option<String>,

    /// Prefix format (%t time, %l level, %L glyph, %m module, %c/%C color on/off)
    #[arg(long)]
    format: Option<String>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Parse each value as JSON (values that are not JSON stay text)
    #[arg(long)]
    json: bool,

    /// Show custom-displayable values in their inspected form
    #[arg(long)]
    no_to_string: bool,

    /// YAML file with console options
    #[arg(short = 'c', long = "config")]
    config_file: Option<PathBuf>,

    /// Log each line of this file ('-' for stdin) as its own call
    #[arg(short = 'i', long = "input")]
    input_file: Option<PathBuf>,
}

impl Args {
    fn options(&self) -> Result<ConsoleOptions> {
        let mut options = match &self.config_file {
            Some(path) => ConsoleOptions::from_yaml_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => ConsoleOptions::default(),
        };

        if let Some(module) = &self.module {
            options.module = Some(module.clone());
        }
        if let Some(level) = &self.level {
            options.level = Some(level.clone());
        }
        if let Some(format) = &self.format {
            options.format = Some(format.clone());
        }
        if self.color {
            options.color = Some(true);
        } else if self.no_color {
            options.color = Some(false);
        }
        if self.no_to_string {
            options.use_to_string = false;
        }
        Ok(options)
    }

    fn to_arg(&self, value: &str) -> LogArg {
        if self.json {
            LogArg::parse_json_or_text(value)
        } else {
            LogArg::from(value)
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut console = Console::new(args.options()?);

    match &args.input_file {
        Some(path) => {
            let input: Box<dyn BufRead> = if path.as_os_str() == "-" {
                Box::new(BufReader::new(io::stdin()))
            } else {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
                Box::new(BufReader::new(file))
            };

            for line in input.lines() {
                let line = line.context("Failed to read input")?;
                dispatch(&mut console, args.action, &[args.to_arg(&line)])?;
            }
        }
        None => {
            let values: Vec<LogArg> = args.values.iter().map(|v| args.to_arg(v)).collect();
            dispatch(&mut console, args.action, &values)?;
        }
    }

    Ok(())
}

fn dispatch(console: &mut Console, action: Action, values: &[LogArg]) -> Result<()> {
    match action {
        Action::Error => console.emit(Label::Error, values),
        Action::Warn => console.emit(Label::Warn, values),
        Action::Info => console.emit(Label::Info, values),
        Action::Aced => console.emit(Label::Aced, values),
        Action::Debug => console.emit(Label::Debug, values),
        Action::Log => console.log(values),
        Action::RawError => console.raw_error(values),
        Action::Table => console.table(&table_data(values)?),
    }
    Ok(())
}

fn table_data(values: &[LogArg]) -> Result<serde_json::Value> {
    match values.first().context("table needs one JSON argument")? {
        LogArg::Json(data) => Ok(data.clone()),
        other => serde_json::from_str(&other.header_text())
            .context("table argument is not valid JSON"),
    }
}
