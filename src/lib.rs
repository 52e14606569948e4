//! `declarg` is a declarative command line parser for Rust.
//!
//! A Cli program is described up front: its options, their value types, which ones are required, and how they are documented.
//! `declarg` then turns the raw command line into typed values (or a precise error).
//! Specifically, `declarg` attempts to prioritize the following design concerns:
//! * *Typed values*:
//! Each option declares one of a fixed set of value types (boolean, string, integer, float, double, or a list thereof).
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Familiar syntax*:
//! Long options (`--name value`, `--name=value`), short options (`-n value`, `-n=value`) and clusters of short flags (`-abc`).
//! * *Sub-command paradigm*:
//! The user may configure sub-commands which act to collect multiple related programs into a single Cli.
//! * *Detailed yet basic UX*:
//! The help output of the Cli should leave no ambiguity in how to use the program.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! Configure `declarg` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! ```no_run
#![doc = include_str!("../demos/demo_options.rs")]
//! ```
//!
//! The help message, as printed by [`GeneralParser::print_help`]:
//! ```console
//! usage:
//!   render [OPTIONS] --input
//!
//! Render the input files.
//!
//! Options:
//!
//!   --verbose, -v
//!     Print each file as it is rendered.
//!
//!   --jobs VALUE, -j VALUE
//!     Number of workers.
//!
//!   --input VALUE, -i VALUE [REQUIRED]
//!     The input files.
//!
//! Output:
//!
//!   --format FORMAT, -f FORMAT
//!     The output format.
//!     One of html, text.
//!
//!   --scale VALUE
//!     Scale the output by this factor.
//! ```
//!
//! ```console
//! $ render -v -i a.md --input=b.md
//! Rendering 2 file(s) as text with 1 worker(s).
//!   a.md
//!   b.md
//!
//! $ render --jobs
//! Option 'jobs' needs a value
//! See usage: render [OPTIONS] --input
//! ```
//!
//! Note, `declarg` does not reserve `--help`; print the help message via [`GeneralParser::print_help`], or the `help` sub-command.
//!
//! ### Positionals
//! Any declared option may also be parsed positionally, via [`CommandLineParser::positional`].
//! ```no_run
#![doc = include_str!("../demos/demo_positional.rs")]
//! ```
//!
//! ### Sub-commands
//! A [`CommandLineParser`] either accepts options, or dispatches to sub-commands (never both).
//! Sub-commands implement the [`Command`](./prelude/trait.Command.html) trait.
//! ```no_run
#![doc = include_str!("../demos/demo_commands.rs")]
//! ```
//!
//! ```console
//! $ calc add 1 2 3
//! Sum: 6
//!
//! $ calc help scale
//! usage:
//!   calc scale [OPTIONS] --value
//!
//! Multiply a value by a factor.
//!
//! Options:
//!
//!   --value VALUE [REQUIRED]
//!     The value.
//!
//!   --factor VALUE, -f VALUE
//!     The factor.
//! ```
//!
//! # Cli Semantics
//! `declarg` parses the Cli tokens according to the following set of rules.
//!
//! * `--name value`, `--name=value`, `-n value` and `-n=value` all give `value` to the option `name` (short name `n`).
//! * Only the first `=` character is used as a separator.
//! For example, `--key=123=456` gives the value `123=456`.
//! Since `-5` reads as a short option, negative numbers must be given with the separator (ex: `--offset=-5`).
//! * A value surrounded by matching single or double quotes has one layer of quotes removed.
//! * Multiple short named options may be combined into a single flag.
//! For example, `-abc` is equivalent to `-a -b -c`.
//! The `=` separator, or the next token, gives a value to the final option of the cluster only.
//! * An option given without a value is a *flag*.
//! Boolean options resolve to `true`, other scalar options to their implicit value (if any, otherwise it is an error).
//! * Scalar options take the last value given, while list options collect every value given, across both long and short names, in Cli order.
//! * Once a bare token is seen, no more options may follow.
//! Everything after `--` is a positional token, even if it starts with `-`.
//! * Positional tokens fill the positional options in order; a list positional takes all the remaining ones.
//! Any further tokens are available via [`CliResults::rest`].
//! Without any positional options, a positional token is an error.
//! * Options not given take their default value (if any).
//! Required options without a value are reported together, in declaration order.
//!
//! # Features
//! * `tracing_debug`: Emit debug logs via [`tracing`](https://docs.rs/tracing), for the scan & resolution of the command line.
pub use declarg_builder::*;
