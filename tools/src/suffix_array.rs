use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use radix_sa::{Strategy, SuffixArrayBuilder};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Lsd,
    Msd,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lsd => Strategy::Lsd,
            StrategyArg::Msd => Strategy::Msd,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Constructs the suffix array of the given text by radix sorting."
)]
struct Args {
    #[arg(short = 'i', long, help = "Path to an input text file")]
    input_file: String,

    #[arg(
        short = 'o',
        long,
        help = "Path to an output file, one suffix position per line (stdout if omitted)"
    )]
    output_file: Option<String>,

    #[arg(short = 's', long, value_enum, default_value = "msd", help = "Radix sorting order")]
    strategy: StrategyArg,

    #[arg(
        short = 't',
        long,
        help = "Optional range size below which MSD falls back to comparison sort"
    )]
    threshold: Option<usize>,

    #[arg(short = 'v', long, help = "Print progress to stderr")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = read_text(&args.input_file)?;
    if text.contains(&0) {
        eprintln!("Warning: the text contains NUL bytes, which collide with the sentinel.");
    }

    let builder = SuffixArrayBuilder::new(&text)
        .strategy(args.strategy.into())
        .verbose(args.verbose);
    let builder = if let Some(threshold) = args.threshold {
        builder.msd_threshold(threshold)?
    } else {
        builder
    };

    let now = Instant::now();
    let sa = builder.build();
    eprintln!("Elapsed sec: {}", now.elapsed().as_millis() as f64 / 1000.0);

    if let Some(output_file) = args.output_file.as_ref() {
        write_suffix_array(BufWriter::new(File::create(output_file)?), &sa)?;
    } else {
        write_suffix_array(std::io::stdout().lock(), &sa)?;
    }

    Ok(())
}

fn read_text(input_file: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut file: File = File::open(input_file)?;
    let n_bytes = file.metadata()?.len();
    let mut text = Vec::with_capacity(n_bytes as usize);
    file.read_to_end(&mut text)?;
    Ok(text)
}

fn write_suffix_array<W: Write>(mut writer: W, sa: &[usize]) -> std::io::Result<()> {
    for suffix in sa {
        writeln!(writer, "{}", suffix)?;
    }
    writer.flush()
}
