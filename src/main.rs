//! md2html CLI - convert a markup file to an HTML file.
//!
//! Two positional arguments: input path, output path. Errors are reported
//! on stderr; a missing input aborts before any output is written.

use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: md2html <input> <output>");
        return;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read input file {}: {}", args[1], err);
            return;
        }
    };

    let html = md2html::to_html(&contents);

    if let Err(err) = fs::write(&args[2], html) {
        eprintln!("failed to write output file {}: {}", args[2], err);
    }
}
