//! Command line argument parsing for the `polyglot` binary.

use clap::Parser;
use polyglot::Language;

/// Command line interface definition for `polyglot`.
///
/// The input is parsed into a polyglot syntax tree; the output flags choose
/// what is printed about it. Without any of them only a one-line summary per
/// file is printed.
///
/// ## Examples
///
/// Print the tree as an S-expression:
/// ```bash
/// polyglot main.c --sexp
/// ```
///
/// List every call site of a project, following the directory tree:
/// ```bash
/// polyglot src/ --calls
/// ```
///
/// Parse a header as C++ rather than C:
/// ```bash
/// polyglot widget.h --language cpp --functions
/// ```
#[derive(Parser)]
#[command(
    name = "polyglot",
    author,
    version,
    about = "Parse C, C++, Java, JavaScript, Python, Rust and TypeScript into capability-tagged syntax trees",
    long_about = "The 'polyglot' command parses a source file, or every file with a recognized extension \
under a directory, into a language-normalized syntax tree. Output flags print the tree, its JSON \
serialization, or the call sites and functions found in it."
)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct Cli {
    /// Source file, or directory to walk.
    pub(crate) path: std::path::PathBuf,

    /// Parse as this language instead of detecting it from the file extension.
    ///
    /// Accepted names: c, cpp, java, javascript, python, rust, typescript, tsx.
    #[clap(long = "language", short = 'l')]
    pub(crate) language: Option<Language>,

    /// Print the tree as an S-expression.
    #[clap(long = "sexp", action = clap::ArgAction::SetTrue)]
    pub(crate) sexp: bool,

    /// Print the tree as JSON.
    #[clap(long = "json", action = clap::ArgAction::SetTrue)]
    pub(crate) json: bool,

    /// Print every call with its callee and arguments.
    #[clap(long = "calls", action = clap::ArgAction::SetTrue)]
    pub(crate) calls: bool,

    /// Print every function with its name and parameters.
    #[clap(long = "functions", action = clap::ArgAction::SetTrue)]
    pub(crate) functions: bool,

    /// Fail unless the tree reproduces the file byte for byte.
    #[clap(long = "check-roundtrip", action = clap::ArgAction::SetTrue)]
    pub(crate) check_roundtrip: bool,

    /// Keep a best-effort parse of every syntax error region next to its raw
    /// text.
    #[clap(long = "variation-points", action = clap::ArgAction::SetTrue)]
    pub(crate) variation_points: bool,

    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}
