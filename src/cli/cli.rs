use clap::Parser;
use std::path::PathBuf;

/// procplot - sample one process's CPU % and plot it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Process name, exact and case-sensitive (e.g. chrome.exe, not Chrome.exe)
    pub process: String,

    /// How many samples to take
    #[arg(value_parser = parse_iterations)]
    pub iterations: usize,

    /// Length of each sampling window, in seconds
    #[arg(value_parser = parse_interval)]
    pub interval: f64,

    /// Where to write the rendered plot
    #[arg(short, long, default_value = "cpu-plot.png")]
    pub output: PathBuf,

    /// Also dump the raw samples as a JSON report
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Iterations must be a plain integer greater than zero.
fn parse_iterations(raw: &str) -> Result<usize, String> {
    let iterations: usize = raw
        .parse()
        .map_err(|_| "must be an integer".to_string())?;
    if iterations == 0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(iterations)
}

/// Interval must be a positive number of seconds. NaN and inf are rejected.
fn parse_interval(raw: &str) -> Result<f64, String> {
    let interval: f64 = raw
        .parse()
        .map_err(|_| "must be a number of seconds".to_string())?;
    if !interval.is_finite() || interval <= 0.0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<CommandArgs, clap::Error> {
        CommandArgs::try_parse_from(argv)
    }

    #[test]
    fn test_accepts_well_formed_request() {
        let args = parse(&["procplot", "chrome", "21", "0.1"]).unwrap();
        assert_eq!(args.process, "chrome");
        assert_eq!(args.iterations, 21);
        assert_eq!(args.interval, 0.1);
        assert_eq!(args.output, PathBuf::from("cpu-plot.png"));
        assert!(args.json.is_none());
    }

    #[test]
    fn test_rejects_non_integer_iterations() {
        assert!(parse(&["procplot", "chrome", "abc", "0.1"]).is_err());
        assert!(parse(&["procplot", "chrome", "2.5", "0.1"]).is_err());
        assert!(parse(&["procplot", "chrome", "", "0.1"]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_iterations() {
        assert!(parse(&["procplot", "chrome", "0", "0.1"]).is_err());
        assert!(parse(&["procplot", "chrome", "-3", "0.1"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_interval() {
        assert!(parse(&["procplot", "chrome", "5", "fast"]).is_err());
        assert!(parse(&["procplot", "chrome", "5", "nan"]).is_err());
        assert!(parse(&["procplot", "chrome", "5", "inf"]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        assert!(parse(&["procplot", "chrome", "5", "0"]).is_err());
        assert!(parse(&["procplot", "chrome", "5", "-0.5"]).is_err());
    }

    #[test]
    fn test_rejects_missing_parameters() {
        assert!(parse(&["procplot"]).is_err());
        assert!(parse(&["procplot", "chrome"]).is_err());
        assert!(parse(&["procplot", "chrome", "5"]).is_err());
    }
}
