use std::fs;

use clap::Parser;
use mint_compiler::compile;

/// The Mint language compiler: checks a program and prints it back with
/// every type annotation stripped.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file to compile.
    file: String,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(args.file).expect("could not read source file");
    let output = compile(&source);

    if !output.diagnostics.is_empty() {
        for diagnostic in output.diagnostics.iter() {
            eprintln!("Error: {}", diagnostic.message(&source));
        }
        std::process::exit(1);
    }

    println!("{}", output.output);
}
