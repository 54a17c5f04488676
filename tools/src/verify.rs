use std::error::Error;
use std::fs::{self, File};
use std::io::Read;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'i', long, help = "Path to the text file")]
    input_file: String,

    #[arg(short = 's', long, help = "Path to a suffix array file, one position per line")]
    sa_file: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = read_text(&args.input_file)?;
    let sa = read_suffix_array(&args.sa_file)?;
    radix_sa::verify_suffix_array(&text, &sa)?;
    println!("OK: {} suffixes", sa.len());

    Ok(())
}

fn read_text(input_file: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut file: File = File::open(input_file)?;
    let mut text = Vec::new();
    file.read_to_end(&mut text)?;
    Ok(text)
}

fn read_suffix_array(sa_file: &str) -> Result<Vec<usize>, Box<dyn Error>> {
    let mut sa = Vec::new();
    for line in fs::read_to_string(sa_file)?.lines() {
        let line = line.trim();
        if !line.is_empty() {
            sa.push(line.parse()?);
        }
    }
    Ok(sa)
}
