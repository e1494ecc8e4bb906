//! Parsing command-line arguments.

use crate::error::Error;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command, Error as ClapError,
};
use ecagen_lib::{Config, Rule};
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

fn positive(s: &str) -> Result<isize, String> {
    match s.parse::<isize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(String::from("must be a positive integer")),
    }
}

fn rule_number(s: &str) -> Result<isize, String> {
    s.parse::<Rule>()
        .map(|rule| rule.number() as isize)
        .map_err(|e| e.to_string())
}

fn cells(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err(String::from("missing initial configuration"))
    } else if s.chars().all(|c| c == '0' || c == '1') {
        Ok(s.to_string())
    } else {
        Err(String::from("may only contain 0 or 1"))
    }
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Evolves an elementary cellular automaton and draws it as an image\n\
             \n\
             Takes an initial configuration (generation 0), evolves it according \n\
             to the given rule, and draws one row of pixels per generation, \n\
             with the first generation on top.\n\
             * Dead cells are drawn white;\n\
             * Living cells are drawn black.\n\
             \n\
             Without --output, the result is printed as text instead:\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n",
        )
        .arg(
            Arg::new("INIT")
                .help("Initial configuration, as a binary number")
                .long_help(
                    "Initial configuration (generation 0), as a binary number\n\
                     It must have an odd length, or it will be padded with a 0 at the end.\n",
                )
                .short('i')
                .long("init")
                .value_parser(cells)
                .required_unless_present_any(["CONFIG", "RANDOM"]),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton, from 0 to 255")
                .short('r')
                .long("rule")
                .value_parser(rule_number)
                .required_unless_present_any(["CONFIG", "RANDOM"]),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations, i.e., the height of the image")
                .short('g')
                .long("generations")
                .value_parser(positive)
                .required_unless_present("CONFIG"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Path of the output PNG image")
                .long_help(
                    "Path of the output PNG image\n\
                     If it is not given, the result is printed as text.\n",
                )
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FIXED")
                .help("Crops or extends the image to the given width")
                .long_help(
                    "Crops or extends the image to the given width\n\
                     An even width is rounded up to the next odd number.\n",
                )
                .long("fixedwidth")
                .value_parser(positive),
        )
        .arg(
            Arg::new("WRAP")
                .help("Makes the row wrap around at the given width")
                .long_help(
                    "Makes the row wrap around at the given width, instead of being infinite\n\
                     An even width is rounded up to the next odd number.\n\
                     Overrides --fixedwidth.\n",
                )
                .long("wrapped")
                .value_parser(positive),
        )
        .arg(
            Arg::new("NOPAD")
                .help("Rejects an initial configuration of even length instead of padding it")
                .long("no-pad")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("RANDOM")
                .help("Chooses a random rule and initial configuration unless given")
                .long("random")
                .action(ArgAction::SetTrue)
                .conflicts_with("CONFIG"),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .long_help(
                    "Reads the configuration from a JSON, YAML or TOML file\n\
                     The format is chosen by the file extension.\n\
                     Other options override the values in the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// A struct to store the parse results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Args {
    config_file: Option<PathBuf>,
    rule: Option<isize>,
    initial: Option<String>,
    generations: Option<isize>,
    fixed_width: Option<isize>,
    wrap: Option<isize>,
    no_pad: bool,
    random: bool,
    pub(crate) output: Option<PathBuf>,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, ClapError> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, ClapError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Args {
            config_file: matches.get_one::<PathBuf>("CONFIG").cloned(),
            rule: matches.get_one::<isize>("RULE").copied(),
            initial: matches.get_one::<String>("INIT").cloned(),
            generations: matches.get_one::<isize>("GENERATIONS").copied(),
            fixed_width: matches.get_one::<isize>("FIXED").copied(),
            wrap: matches.get_one::<isize>("WRAP").copied(),
            no_pad: matches.get_flag("NOPAD"),
            random: matches.get_flag("RANDOM"),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
        }
    }

    /// The configuration of the run.
    ///
    /// Starts from the configuration file, a random configuration, or the
    /// default one, and then applies the command-line options.
    pub(crate) fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config_file {
            Some(path) => read_config(path)?,
            None if self.random => Config::random(&mut rand::thread_rng()),
            None => Config::default(),
        };
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(initial) = &self.initial {
            config.initial = initial.clone();
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if self.fixed_width.is_some() {
            config.fixed_width = self.fixed_width;
        }
        if self.wrap.is_some() {
            config.wrap = self.wrap;
        }
        if self.no_pad {
            config.pad = false;
        }
        Ok(config)
    }
}

/// Reads a configuration file, choosing the format by its extension.
pub(crate) fn read_config(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&text)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
        Some("toml") => Ok(toml::from_str(&text)?),
        _ => Err(Error::UnknownFormat(path.to_owned())),
    }
}
