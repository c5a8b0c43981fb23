use camino::Utf8PathBuf;

use crate::select::JsonLayout;

/// Everything a single benchparse run needs.
#[derive(Builder, Debug, Clone)]
#[builder(setter(into))]
pub struct Config {
    /// raw sel4bench output
    pub bench_output: Utf8PathBuf,
    /// line separated list of benchmarks to report
    pub benchmarks: Utf8PathBuf,
    /// directory the `0<N>.{txt,json}` files go to
    pub output_dir: Utf8PathBuf,
    #[builder(default)]
    pub json_layout: JsonLayout,
    #[builder(default)]
    pub quiet: bool,
}

impl Config {
    pub fn from_matches(matches: &clap::ArgMatches) -> Result<Config, ConfigBuilderError> {
        let mut builder = ConfigBuilder::default();

        if let Some(bench_output) = matches.get_one::<Utf8PathBuf>("bench-output") {
            builder.bench_output(bench_output.clone());
        }
        if let Some(benchmarks) = matches.get_one::<Utf8PathBuf>("benchmarks") {
            builder.benchmarks(benchmarks.clone());
        }
        if let Some(output_dir) = matches.get_one::<Utf8PathBuf>("benchparse-output") {
            builder.output_dir(output_dir.clone());
        }
        if let Some(layout) = matches.get_one::<JsonLayout>("json-layout") {
            builder.json_layout(*layout);
        }

        builder.quiet(matches.get_flag("quiet")).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConfigBuilder::default()
            .bench_output("bench.log")
            .benchmarks("benchmarks.txt")
            .output_dir("out")
            .build()
            .unwrap();
        assert_eq!(config.json_layout, JsonLayout::Concat);
        assert!(!config.quiet);
    }

    #[test]
    fn missing_path() {
        let res = ConfigBuilder::default()
            .bench_output("bench.log")
            .output_dir("out")
            .build();
        assert!(res.is_err());
    }

    #[test]
    fn from_cli() {
        let matches = crate::cli::clap()
            .try_get_matches_from([
                "benchparse",
                "-b",
                "bench.log",
                "-i",
                "benchmarks.txt",
                "-o",
                "out",
                "--json-layout",
                "array",
                "-q",
            ])
            .unwrap();
        let config = Config::from_matches(&matches).unwrap();
        assert_eq!(config.bench_output, "bench.log");
        assert_eq!(config.benchmarks, "benchmarks.txt");
        assert_eq!(config.output_dir, "out");
        assert_eq!(config.json_layout, JsonLayout::Array);
        assert!(config.quiet);
    }
}
