use camino::Utf8PathBuf;

use clap::{crate_version, value_parser, Arg, ArgAction, Command, ValueHint};

use crate::select::JsonLayout;

pub fn clap() -> clap::Command {
    Command::new("benchparse")
        .version(crate_version!())
        .about("Parse sel4bench output")
        .arg(
            Arg::new("bench-output")
                .help("file containing output of sel4bench")
                .short('b')
                .long("bench-output")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("benchmarks")
                .help("file with a list of line-separated benchmarks")
                .short('i')
                .long("benchmarks")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("benchparse-output")
                .help("directory to write benchparse output to")
                .short('o')
                .long("benchparse-output")
                .value_name("DIR")
                .required(true)
                .value_parser(value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("json-layout")
                .help("how selected benchmarks are laid out in the JSON output")
                .long("json-layout")
                .env("BENCHPARSE_JSON_LAYOUT")
                .value_name("LAYOUT")
                .default_value("concat")
                .value_parser(value_parser!(JsonLayout)),
        )
        .arg(
            Arg::new("quiet")
                .help("don't print the summary to stdout")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .help("be verbose (repeat for more)")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}
