use colog::format::CologStyle;
use colored::Colorize;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};
use std::io::Write;

/// Timestamped log lines. With `verbose` the emitting module is shown too,
/// so request and response dumps can be told apart from command output.
pub struct BookingLogStyle {
    pub verbose: bool,
}

impl CologStyle for BookingLogStyle {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "[{}] {}",
            chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .blue()
                .bold(),
            self.level_color(level, self.level_token(level))
        )
    }

    fn format(&self, buf: &mut Formatter, record: &Record<'_>) -> Result<(), std::io::Error> {
        let message = record
            .args()
            .to_string()
            .replace('\n', &self.line_separator());

        if self.verbose {
            writeln!(
                buf,
                "{} [{}] {}",
                self.prefix_token(&record.level()),
                record.module_path().unwrap_or("unknown").dimmed(),
                message
            )
        } else {
            writeln!(buf, "{} {}", self.prefix_token(&record.level()), message)
        }
    }
}

/// Log to stderr. `RUST_LOG` is honoured, `verbose` forces debug level.
pub fn init(verbose: bool) {
    let mut builder: env_logger::Builder = colog::default_builder();
    builder.format(colog::formatter(BookingLogStyle { verbose }));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
