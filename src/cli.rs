use crate::difficulty::DifficultyKind;
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use std::path::PathBuf;

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

/// Options for a normal run of the game.  Each of these overrides the
/// corresponding configuration file setting.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) difficulty: Option<DifficultyKind>,
    pub(crate) log_level: Option<LevelFilter>,
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Short('l') | Arg::Long("log-level") => {
                    args.log_level = Some(parser.value()?.parse()?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }

    pub(crate) fn help_text(bin_name: &str) -> String {
        format!(
            concat!(
                "Usage: {bin_name} [<options>]\n",
                "\n",
                "Play snake in the terminal\n",
                "\n",
                "Options:\n",
                "  -c <file>, --config <file>\n",
                "                    Read configuration from the given file\n",
                "\n",
                "  -d <name>, --difficulty <name>\n",
                "                    Start with the given difficulty preset\n",
                "                    [calm, classic, turbo]\n",
                "\n",
                "  -l <level>, --log-level <level>\n",
                "                    Set the minimum level of logged messages\n",
                "                    [off, error, warn, info, debug, trace]\n",
                "\n",
                "  -h, --help        Display this help message and exit\n",
                "  -V, --version     Show the program version and exit\n",
            ),
            bin_name = bin_name
        )
    }
}
