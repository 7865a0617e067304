use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use fzdiff::presenter::{colorize, encode, encode_header, Format};
use fzdiff::{Batch, Comparator, ComparisonResult, Config, Error, Pair, DEFAULT_JOBS};

/// Pairs read from a file or stdin are compared in chunks of this size.
const BATCH_SIZE: usize = 10_000;

#[derive(Parser)]
#[command(
    name = "fzdiff",
    version,
    about = "Finds Levenshtein edit distance and tags differences between strings.",
    long_about = "fzdiff takes two strings and returns the edit distance between them \
        according to the Levenshtein algorithm. It can abort once a maximum edit \
        distance is reached, and can insert tags into both strings showing where \
        edit events happened.\n\n\
        With a single argument naming a file, or with CSV piped into stdin, every \
        row's first two fields are compared."
)]
struct Args {
    /// Adds diff tags into strings
    #[arg(short, long)]
    tags: bool,

    /// Shows differences with terminal colors instead of tags, implies --tags
    #[arg(short, long)]
    color: bool,

    /// Max threshold for edit distance, 0 means no limit
    #[arg(short, long = "max-edit-distance", default_value_t = 0)]
    max_edit_distance: usize,

    /// Output format: compact (compact JSON), pretty (pretty JSON), csv, tsv
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// Number of worker threads for file and stdin input
    #[arg(short, long, default_value_t = DEFAULT_JOBS)]
    jobs: usize,

    /// Two strings, or a path to a CSV file with pairs of strings
    #[arg(num_args = 0..=2)]
    input: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let format = args.format.parse::<Format>().unwrap_or_else(|e| {
        tracing::warn!("{}, setting format to csv", e);
        Format::Csv
    });
    let output = Output {
        format,
        color: args.color,
    };
    let config = Config::default()
        .with_diff(args.tags || args.color)
        .max_edit_distance(args.max_edit_distance);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.input.as_slice() {
        [a, b] => {
            let result = Comparator::new(config).compare(a, b);
            write_header(&mut out, format)?;
            writeln!(out, "{}", output.encode(&result)?)?;
        }
        [path] if Path::new(path).is_file() => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
            let batch = Batch::with_jobs(config, args.jobs)?;
            compare_csv(&batch, file, output, &mut out)?;
        }
        [] if !io::stdin().is_terminal() => {
            let batch = Batch::with_jobs(config, args.jobs)?;
            compare_csv(&batch, io::stdin().lock(), output, &mut out)?;
        }
        _ => {
            Args::command().print_help()?;
            return Ok(());
        }
    }
    out.flush()?;
    Ok(())
}

/// How each comparison is written out.
#[derive(Clone, Copy)]
struct Output {
    format: Format,
    color: bool,
}

impl Output {
    fn encode(&self, result: &ComparisonResult) -> Result<String, Error> {
        if self.color {
            encode(&colorize(result), self.format)
        } else {
            encode(result, self.format)
        }
    }
}

fn write_header<W: Write>(out: &mut W, format: Format) -> Result<(), Error> {
    if let Some(header) = encode_header(format) {
        writeln!(out, "{}", header?)?;
    }
    Ok(())
}

fn compare_csv<R: Read, W: Write>(batch: &Batch, input: R, output: Output, out: &mut W) -> Result<(), Error> {
    write_header(out, output.format)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut pairs = Vec::with_capacity(BATCH_SIZE);
    for record in rdr.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(Error::ShortRow {
                line: record.position().map_or(0, |p| p.line()),
                fields: record.len(),
            });
        }
        pairs.push(Pair::new(&record[0], &record[1]));
        if pairs.len() == BATCH_SIZE {
            flush_batch(batch, &mut pairs, output, out)?;
        }
    }
    flush_batch(batch, &mut pairs, output, out)
}

fn flush_batch<W: Write>(batch: &Batch, pairs: &mut Vec<Pair>, output: Output, out: &mut W) -> Result<(), Error> {
    for result in batch.compare(pairs) {
        writeln!(out, "{}", output.encode(&result)?)?;
    }
    pairs.clear();
    Ok(())
}
