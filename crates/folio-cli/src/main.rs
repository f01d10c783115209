use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use folio_core::{Segment, render_text, segment};
use folio_shell::Theme;

mod assets;
mod pages;

fn main() {
    let mut input: Option<String> = None;
    let mut build = false;
    let mut raw = false;
    let mut theme = Theme::Light;
    let mut out_dir = PathBuf::from("site");
    let mut content_dir = PathBuf::from("content");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--build" => build = true,
            "--raw" => raw = true,
            "--theme" => match args.next().as_deref().and_then(Theme::parse) {
                Some(value) => theme = value,
                None => {
                    eprintln!("--theme expects: light | dark");
                    print_usage();
                    process::exit(2);
                }
            },
            "--out" => match args.next() {
                Some(value) => out_dir = PathBuf::from(value),
                None => {
                    eprintln!("--out expects a directory");
                    print_usage();
                    process::exit(2);
                }
            },
            "--content" => match args.next() {
                Some(value) => content_dir = PathBuf::from(value),
                None => {
                    eprintln!("--content expects a directory");
                    print_usage();
                    process::exit(2);
                }
            },
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    if build {
        match pages::build_site(&content_dir, &out_dir, theme) {
            Ok(report) => {
                eprintln!("wrote {} pages to {}", report.pages, out_dir.display());
            }
            Err(err) => {
                eprintln!("build failed: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    if raw {
        for item in segment(&source) {
            match item {
                Segment::Text(value) => println!("text {:?}", value),
                Segment::Link { url } => println!("link {}", url),
                Segment::Image { alt, src } => println!("image {:?} {}", alt, src),
            }
        }
    } else {
        print!("{}", render_text(&source));
    }
}

fn print_usage() {
    eprintln!(
        "Usage: folio-cli [--build] [--content DIR] [--out DIR] [--theme light|dark] [--raw] [input]"
    );
    eprintln!("  without --build: segment the input text (file or stdin) and print the fragment");
    eprintln!("  with --build: render the site from --content into --out");
}
