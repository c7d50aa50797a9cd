use rustop::opts;

use crate::{
    error::{FibError, Result},
    Index,
};

/// Configure a comparison run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// The position in the Fibonacci sequence both strategies compute.
    /// Defaults to 40.
    pub index: Index,
    /// Print the report as JSON instead of plain text.
    pub json: bool,
    /// Verbose output. Logs the progress of each strategy to stderr.
    pub verbose: bool,
}

impl Config {
    /// Parses the command line arguments to get the options.
    ///
    /// Exits the process on `--help` or on arguments rustop cannot parse.
    /// An index that is negative or not an integer is returned as an error.
    pub fn new() -> Result<Self> {
        parse_args()
    }

    /// Set the index both strategies compute.
    pub fn set_index(&mut self, index: Index) -> &mut Self {
        self.index = index;
        self
    }

    /// Print the report as JSON.
    pub fn set_json(&mut self, json: bool) -> &mut Self {
        self.json = json;
        self
    }

    /// Log progress to stderr.
    pub fn set_verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    /// Set the options to the given value.
    /// This will overwrite all current options.
    pub fn set_config(&mut self, options: Config) -> &mut Self {
        *self = options;
        self
    }

    /// Build a config from the raw, not yet validated index argument.
    pub fn from_args(index: Option<&str>, json: bool, verbose: bool) -> Result<Self> {
        let index = match index {
            Some(input) => Index::parse(input)?,
            None => Index::default(),
        };
        Ok(Config {
            index,
            json,
            verbose,
        })
    }
}

/// Command line arguments before the index is validated.
#[derive(Debug)]
pub(crate) struct CliArgs {
    /// Every argument that was given as index, in order.
    index: Vec<String>,
    json: bool,
    verbose: bool,
}

impl CliArgs {
    pub(crate) fn into_config(self) -> Result<Config> {
        match self.index.as_slice() {
            [] => Config::from_args(None, self.json, self.verbose),
            [index] => Config::from_args(Some(index), self.json, self.verbose),
            _ => Err(FibError::InvalidIndex {
                input: self.index.join(" "),
                reason: "only one index may be given",
            }),
        }
    }
}

/// rustop would read e.g. `-5` as an unknown short option.
fn is_negative_number(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|first| first.is_ascii_digit() || first == '.')
}

/// Parses `args` (without the program name).
///
/// Negative numbers and everything after `--` are collected as index arguments,
/// so they are validated by [Index::parse] instead of being dropped or rejected
/// as unknown options.
pub(crate) fn parse_cli<'a, I>(args: I) -> std::result::Result<CliArgs, rustop::Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut negatives = Vec::new();
    let mut options = Vec::new();
    let mut args = args.into_iter();
    for arg in args.by_ref() {
        if arg == "--" {
            options.push(arg);
            break;
        }
        if is_negative_number(arg) {
            negatives.push(arg);
        } else {
            options.push(arg);
        }
    }
    options.extend(args);

    let (args, rest) = opts! {
        command_name "fibbench";
        synopsis "Compare naive recursive and tabulated Fibonacci.";
        opt json:bool, desc:"Print the report as a single JSON object.";
        opt verbose:bool, desc:"Log the progress of each strategy to stderr.";
        param index:Option<String>, desc:"The index n to compute (default 40).";
    }
    .parse_args(options)?;

    let index = args
        .index
        .into_iter()
        .chain(negatives.into_iter().map(str::to_string))
        .chain(rest.into_iter().map(str::to_string))
        .collect();
    Ok(CliArgs {
        index,
        json: args.json,
        verbose: args.verbose,
    })
}

pub(crate) fn parse_args() -> Result<Config> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_cli(args.iter().map(String::as_str)) {
        Ok(cli) => cli.into_config(),
        Err(rustop::Error::Help(help)) => {
            println!("{}", help);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
