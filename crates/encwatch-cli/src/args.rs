//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use encwatch_models::validate_job_name;
use encwatch_monitor::{DisplayMode, MonitorConfig};
use encwatch_progress::WriterConfig;

/// Read FFmpeg `-progress` output from stdin and keep a status file current.
///
/// Example:
///
/// ```text
/// ffmpeg -i in.mkv -progress pipe:1 -nostats out.mp4 \
///     | encwatch-writer --duration 3600 --job-file /tmp/prog/job_1.txt --name job1
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "encwatch-writer", version)]
pub struct WriterArgs {
    /// Expected media duration in seconds (values below 1 are treated as 1)
    #[arg(long, value_parser = parse_duration_secs)]
    pub duration: f64,

    /// Status file to write for this job
    #[arg(long)]
    pub job_file: PathBuf,

    /// Job name shown by the monitor (must not contain '|' or line breaks)
    #[arg(long, default_value = "", value_parser = parse_job_name)]
    pub name: String,

    /// Minimum seconds between status file writes
    #[arg(long, default_value = "1.0", value_parser = parse_interval)]
    pub interval: Duration,
}

impl WriterArgs {
    /// Convert into writer configuration.
    pub fn into_config(self) -> WriterConfig {
        WriterConfig {
            job_file: self.job_file,
            name: self.name,
            duration_secs: self.duration,
            interval: self.interval,
        }
    }
}

/// Show a live table of every job status file in a directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "encwatch-monitor", version)]
pub struct MonitorArgs {
    /// Directory where job status files are written
    #[arg(long)]
    pub dir: PathBuf,

    /// Seconds between refreshes
    #[arg(long, default_value = "0.5", value_parser = parse_interval)]
    pub refresh: Duration,

    /// Print each refresh as new lines instead of redrawing in place
    #[arg(long)]
    pub plain: bool,
}

impl MonitorArgs {
    /// Convert into monitor configuration, resolving the display mode now.
    pub fn into_config(self) -> MonitorConfig {
        MonitorConfig::new(self.dir)
            .with_refresh(self.refresh)
            .with_mode(DisplayMode::detect(self.plain))
    }
}

fn parse_duration_secs(s: &str) -> Result<f64, String> {
    let secs: f64 = s.trim().parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !secs.is_finite() {
        return Err(format!("`{s}` is not a finite number of seconds"));
    }
    Ok(secs)
}

fn parse_job_name(s: &str) -> Result<String, String> {
    validate_job_name(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs = parse_duration_secs(s)?;
    if secs < 0.0 {
        return Err(format!("`{s}` must not be negative"));
    }
    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_defaults() {
        let args = WriterArgs::try_parse_from([
            "encwatch-writer",
            "--duration",
            "3600",
            "--job-file",
            "/tmp/prog/job_1.txt",
        ])
        .unwrap();

        assert_eq!(args.duration, 3600.0);
        assert_eq!(args.name, "");
        assert_eq!(args.interval, Duration::from_secs(1));

        let config = args.into_config();
        assert_eq!(config.job_file, PathBuf::from("/tmp/prog/job_1.txt"));
    }

    #[test]
    fn test_writer_requires_duration_and_job_file() {
        assert!(WriterArgs::try_parse_from(["encwatch-writer", "--job-file", "a.txt"]).is_err());
        assert!(WriterArgs::try_parse_from(["encwatch-writer", "--duration", "10"]).is_err());
    }

    #[test]
    fn test_writer_rejects_bad_numbers() {
        let base = ["encwatch-writer", "--job-file", "a.txt"];
        for bad in [["--duration", "abc"], ["--duration", "inf"]] {
            let argv: Vec<&str> = base.iter().chain(bad.iter()).copied().collect();
            assert!(WriterArgs::try_parse_from(argv).is_err());
        }

        assert!(WriterArgs::try_parse_from([
            "encwatch-writer",
            "--job-file",
            "a.txt",
            "--duration",
            "10",
            "--interval",
            "-1"
        ])
        .is_err());
    }

    #[test]
    fn test_writer_all_options() {
        let args = WriterArgs::try_parse_from([
            "encwatch-writer",
            "--duration",
            "12.5",
            "--job-file",
            "job.txt",
            "--name",
            "trailer",
            "--interval",
            "0.25",
        ])
        .unwrap();

        assert_eq!(args.name, "trailer");
        assert_eq!(args.interval, Duration::from_millis(250));
    }

    #[test]
    fn test_writer_rejects_names_that_break_the_status_line() {
        for bad in ["a|b", "a\nb", "a\rb"] {
            let result = WriterArgs::try_parse_from([
                "encwatch-writer",
                "--duration",
                "10",
                "--job-file",
                "job.txt",
                "--name",
                bad,
            ]);
            assert!(result.is_err(), "name {bad:?} should be rejected");
        }
    }

    #[test]
    fn test_monitor_defaults() {
        let args = MonitorArgs::try_parse_from(["encwatch-monitor", "--dir", "/tmp/prog"]).unwrap();
        assert_eq!(args.refresh, Duration::from_millis(500));
        assert!(!args.plain);
    }

    #[test]
    fn test_monitor_plain_forces_plain_mode() {
        let args = MonitorArgs::try_parse_from([
            "encwatch-monitor",
            "--dir",
            "/tmp/prog",
            "--refresh",
            "0.75",
            "--plain",
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.mode, DisplayMode::Plain);
        assert_eq!(config.refresh, Duration::from_millis(750));
    }
}
