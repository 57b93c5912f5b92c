extern crate argparse;
extern crate pad;
extern crate flatpath;

use argparse::{ArgumentParser, StoreTrue};
use pad::PadStr;
use std::io;
use std::io::{BufRead, Write};

use flatpath::normalize::{normalize_with, NormalizeOptions};

const QUIT_TOKEN: &str = "quit";

//Demonstration cases. Purely informational; a mismatch is reported, not fatal.
const DEMO_CASES: &[(&str, &str, &str)] = &[
    ("a/b/c", "./d", "a/b/c/d"),
    ("a/b/c", "../d", "a/b/c/d"),
    ("a/b/c", "////d", "a/b/c/d"),
    ("a/b/c", "d", "a/b/c/d"),
    ("ab/c", "../e", "ab/c/e"),
    ("/a/b/c", "../d", "/a/b/c/d"),
    ("/a/b/c", "./d/e/../f", "/a/b/c/d/f"),
    ("a/b/c", "../../d", "a/b/c/d"),
    ("a/b/c", "../../../../d", "a/b/c/d"),
    ("a/b/c", ".././.././d", "a/b/c/d"),
    ("a/b/c", "/////.././d/e////f", "a/b/c/d/e/f"),
    ("a/b/c", "d/../e", "a/b/c/e"),
];

fn run_demo(options: NormalizeOptions) {
    println!("Running demonstration cases:");

    for (i, &(current_dir, relative_path, expected)) in DEMO_CASES.iter().enumerate() {
        let result = normalize_with(current_dir, relative_path, options);
        let verdict = if result == expected {
            "ok"
        } else {
            "MISMATCH"
        };

        println!("Case {:2}: {} {} -> {} expected {} {}",
            i + 1,
            current_dir.pad_to_width(10),
            relative_path.pad_to_width(20),
            result.pad_to_width(14),
            expected.pad_to_width(14),
            verdict);
    }
}

/// Read pairs of lines from stdin and print the flattened path for each.
///
/// Stops on end-of-input, or when either line is the quit token. Input lines
/// have surrounding whitespace stripped before use.
fn run_loop(options: NormalizeOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter current directory: ");
        io::stdout().flush()?;

        let current_dir = match lines.next() {
            Some(line) => line?,
            None => break
        };
        let current_dir = current_dir.trim();

        if current_dir == QUIT_TOKEN {
            break;
        }

        print!("Enter relative path: ");
        io::stdout().flush()?;

        let relative_path = match lines.next() {
            Some(line) => line?,
            None => break
        };
        let relative_path = relative_path.trim();

        if relative_path == QUIT_TOKEN {
            break;
        }

        println!("The normalized path is: {}", normalize_with(current_dir, relative_path, options));
    }

    Ok(())
}

fn main() -> io::Result<()> {
    //Here's some configuration!
    let mut trim_trailing_punctuation = false;
    let mut no_demo = false;

    {
        let mut ap = ArgumentParser::new();

        ap.set_description("Flatten a relative path against a current directory, lexically.");

        ap.refer(&mut trim_trailing_punctuation).add_option(&["--trim"], StoreTrue, "Strip trailing '.' and '?' characters from relative path segments");
        ap.refer(&mut no_demo).add_option(&["--no-demo"], StoreTrue, "Skip the built-in demonstration cases");

        ap.parse_args_or_exit();
    }

    let options = NormalizeOptions {
        trim_trailing_punctuation
    };

    if !no_demo {
        run_demo(options);
        println!();
    }

    run_loop(options)
}
