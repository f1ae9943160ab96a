use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use pebble::{DisplayNumber, EvaluationContext, StatementBuffer};

/// Interpreter for a tiny language of numbers, variables, `if`, `for` and
/// `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the program from a file, one statement per `;` or `}` terminated chunk of lines
    #[arg(short, long, conflicts_with = "statements")]
    file: Option<PathBuf>,

    /// Do not echo the value of each statement
    #[arg(short, long)]
    quiet: bool,

    /// Print every variable once the program has finished
    #[arg(long)]
    dump_env: bool,

    /// Print the variables of `--dump-env` as a JSON object
    #[arg(long, requires = "dump_env")]
    json: bool,

    /// Statements to evaluate, read from stdin when none are given
    statements: Vec<String>,
}

struct Driver {
    context: EvaluationContext,
    quiet: bool,
}

impl Driver {
    fn run(&mut self, source: &str) {
        match self.context.evaluate_str(source) {
            Ok(Some(value)) if !self.quiet => println!("{}", DisplayNumber(value)),
            Ok(_) => {}
            Err(err) => eprintln!("Error: {}", err),
        }
    }

    fn run_lines(&mut self, lines: impl Iterator<Item = io::Result<String>>, prompt: bool) -> anyhow::Result<()> {
        let mut buffer = StatementBuffer::new();

        if prompt { show_prompt(&buffer)?; }
        for line in lines {
            if let Some(statement) = buffer.push_line(&line?) {
                self.run(&statement);
            }
            if prompt { show_prompt(&buffer)?; }
        }

        if let Some(statement) = buffer.flush() {
            self.run(&statement);
        }
        Ok(())
    }
}

fn show_prompt(buffer: &StatementBuffer) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(if buffer.is_empty() { b"> " } else { b". " })?;
    stdout.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut driver = Driver { context: EvaluationContext::new(), quiet: args.quiet };

    if let Some(path) = &args.file {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        driver.run_lines(source.lines().map(|line| Ok(line.to_owned())), false)?;
    } else if !args.statements.is_empty() {
        for statement in &args.statements {
            driver.run(statement);
        }
    } else {
        driver.run_lines(io::stdin().lock().lines(), true)?;
    }

    if args.dump_env && args.json {
        println!("{}", serde_json::to_string_pretty(driver.context.environment())?);
    } else if args.dump_env {
        println!("{}", driver.context.environment());
    }

    Ok(())
}
