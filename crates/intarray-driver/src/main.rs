//! Walks through every `IntArray` operation over integer input.
//!
//! Reads tokens for two arrays from `--input` (or stdin), then exercises
//! printing, comparison, copying, assignment and indexing, writing a
//! transcript to stdout. `--probe-index` indexes the first array at the end;
//! an out-of-range value aborts the process with a panic.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use intarray_core::{ArrayConfig, IntArray, TokenReader};
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Walks through IntArray operations", long_about = None)]
struct Args {
    /// Size of the first array; the second always uses the default size.
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    size: isize,

    /// File of whitespace-separated integers. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Index the first array here after the walkthrough.
    #[arg(long, allow_negative_numbers = true)]
    probe_index: Option<isize>,

    /// Reject non-positive `--size` instead of using the default size.
    #[arg(long)]
    strict_size: bool,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

/// Index read and overwritten during the walkthrough.
const DEMO_INDEX: usize = 5;
const DEMO_VALUE: i32 = 1000;

fn run<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> Result<()> {
    let config = if args.strict_size {
        ArrayConfig::strict()
    } else {
        ArrayConfig::default()
    };
    let mut tokens = TokenReader::new(input);

    writeln!(out, "Arrays alive before construction: {}", IntArray::instance_count())?;
    {
        let mut first = IntArray::with_config(args.size, &config)
            .with_context(|| format!("cannot create first array (size {})", args.size))?;
        let mut second = IntArray::default();
        writeln!(out, "Arrays alive after construction: {}", IntArray::instance_count())?;

        for (label, array) in [("first", &first), ("second", &second)] {
            writeln!(out, "\nSize of {label} array is {}", array.len())?;
            writeln!(out, "{label} after initialization:")?;
            array.write_to(out)?;
        }

        writeln!(out, "\nInput {} integers:", first.len() + second.len())?;
        first.read_from(&mut tokens).context("reading first array")?;
        second.read_from(&mut tokens).context("reading second array")?;
        debug!("consumed {} tokens", tokens.tokens_read());

        writeln!(out, "\nAfter input, the arrays contain:")?;
        writeln!(out, "first:")?;
        first.write_to(out)?;
        writeln!(out, "second:")?;
        second.write_to(out)?;

        writeln!(out, "\nEvaluating: first != second")?;
        if first != second {
            writeln!(out, "first and second are not equal")?;
        }

        let third = first.clone();
        writeln!(out, "\nSize of third array is {}", third.len())?;
        writeln!(out, "third initialized with first:")?;
        third.write_to(out)?;

        writeln!(out, "\nAssigning second to first:")?;
        first.assign(&second);
        writeln!(out, "first:")?;
        first.write_to(out)?;
        writeln!(out, "second:")?;
        second.write_to(out)?;

        writeln!(out, "\nEvaluating: first == second")?;
        if first == second {
            writeln!(out, "first and second are equal")?;
        }

        writeln!(out, "\nfirst[{DEMO_INDEX}] is {}", first[DEMO_INDEX])?;
        writeln!(out, "Assigning {DEMO_VALUE} to first[{DEMO_INDEX}]")?;
        first[DEMO_INDEX] = DEMO_VALUE;
        writeln!(out, "first:")?;
        first.write_to(out)?;

        writeln!(out, "\nArrays alive in scope: {}", IntArray::instance_count())?;

        if let Some(index) = args.probe_index {
            info!("probing first[{index}] of {}", first.len());
            out.flush()?;
            writeln!(out, "first[{index}] is {}", first.at(index))?;
        }
    }
    writeln!(out, "Arrays alive after scope: {}", IntArray::instance_count())?;
    Ok(())
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(log_level).init();
    debug!("{args:?}");

    let input = open_input(args.input.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, input, &mut out)?;
    out.flush()?;
    Ok(())
}
