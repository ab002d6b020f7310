//! dis86 - an 8086 MOV-subset disassembler
//!
//! Usage:
//!   dis86 <image>              Disassemble a raw machine-code image
//!   dis86 <image> --limit N    Stop after N instructions

use anyhow::{bail, Context, Result};
use clap::Parser;
use dis86_disasm::Instructions;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dis86")]
#[command(about = "An 8086 MOV-subset disassembler", long_about = None)]
struct Cli {
    /// Path to the raw machine-code image
    image: PathBuf,

    /// Stop after this many instructions
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data = fs::read(&cli.image)
        .with_context(|| format!("Failed to read image: {}", cli.image.display()))?;

    println!("bits 16");

    let mut stream = Instructions::new(&data);
    let mut printed = 0usize;

    loop {
        if cli.limit.is_some_and(|limit| printed == limit) {
            break;
        }
        // Capture the offset before decoding so errors can report where
        // the bad instruction started.
        let offset = stream.position();
        match stream.next() {
            Some(Ok(inst)) => {
                println!("{inst}");
                printed += 1;
            }
            Some(Err(err)) => {
                bail!(
                    "{} at byte offset {:#x} in {}",
                    err,
                    offset,
                    cli.image.display()
                );
            }
            None => break,
        }
    }

    Ok(())
}
