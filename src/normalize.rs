//! Lexical flattening of a relative path against a current directory.

/// The sole separator character the normalizer recognizes.
pub const SEPARATOR: char = '/';

const TRAILING_PUNCTUATION: &[char] = &['.', '?'];

/// Options controlling how `normalize_with` treats individual segments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizeOptions {
    /// Strip trailing `.` and `?` characters from the right end of every
    /// non-special relative segment before it is accepted. A segment trimmed
    /// down to nothing is dropped outright rather than kept as an empty token.
    pub trim_trailing_punctuation: bool,
}

/// Flatten `relative_path` against `current_dir` with the default options.
///
/// See `normalize_with` for the full contract.
pub fn normalize(current_dir: &str, relative_path: &str) -> String {
    normalize_with(current_dir, relative_path, NormalizeOptions::default())
}

/// Flatten `relative_path` against `current_dir`, lexically.
///
/// The current directory is resolved on its own first: empty and `.` segments
/// are discarded, and each `..` pops the last accepted segment if one exists.
/// A `..` with nothing left to pop is silently discarded, so the resolved base
/// never escapes upward past the start of `current_dir`.
///
/// The relative path is then resolved independently. Its leading separators
/// are stripped, so it is never itself treated as absolute, and its `..`
/// segments pop from the relative stack only. Excess `..` therefore cannot
/// reach back into the already-resolved current directory; it vanishes
/// instead.
///
/// The result is both stacks joined with single separators, prefixed with one
/// leading separator if and only if `current_dir` begins with one. Runs of
/// consecutive separators in either input collapse, since the empty segments
/// they produce are discarded during the scan.
///
/// No filesystem access occurs and no input can fail: any pair of strings
/// produces a result string, possibly empty.
pub fn normalize_with(current_dir: &str, relative_path: &str, options: NormalizeOptions) -> String {
    let mut base_stack: Vec<&str> = Vec::new();

    for segment in current_dir.split(SEPARATOR) {
        match segment {
            "" | "." => {},
            ".." => {
                base_stack.pop();
            },
            segment => base_stack.push(segment)
        }
    }

    let mut relative_stack: Vec<&str> = Vec::new();

    for segment in relative_path.trim_start_matches(SEPARATOR).split(SEPARATOR) {
        match segment {
            "" | "." => {},
            ".." => {
                //Pops bottom out at the start of the relative path, not the
                //base stack.
                relative_stack.pop();
            },
            segment => {
                let segment = if options.trim_trailing_punctuation {
                    segment.trim_end_matches(TRAILING_PUNCTUATION)
                } else {
                    segment
                };

                if !segment.is_empty() {
                    relative_stack.push(segment);
                }
            }
        }
    }

    let mut flattened = String::new();

    if current_dir.starts_with(SEPARATOR) {
        flattened.push(SEPARATOR);
    }

    for (i, segment) in base_stack.iter().chain(relative_stack.iter()).enumerate() {
        if i > 0 {
            flattened.push(SEPARATOR);
        }

        flattened.push_str(segment);
    }

    flattened
}
