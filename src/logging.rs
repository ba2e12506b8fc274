use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();
static COLORIZE: OnceLock<bool> = OnceLock::new();

/// Colored, timestamped logger. Writes to stderr; stdout carries the
/// server response.
struct QueryLogger;

fn compact_timestamp(seconds: u64, millis: u32) -> String {
    if seconds < 60 {
        format!("{:>3}.{:03}s", seconds, millis)
    } else if seconds < 3600 {
        format!("{:>2}m{:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{:>2}h{:02}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

fn short_module(module_path: Option<&str>) -> &str {
    let module = module_path
        .unwrap_or("unknown")
        .rsplit("::")
        .next()
        .unwrap_or("unknown");
    module.get(..12).unwrap_or(module)
}

fn paint(level: Level, line: &str, colorize: bool) -> String {
    if !colorize {
        return line.to_string();
    }

    let colored = match level {
        Level::Error => line.bright_red(),
        Level::Warn => line.bright_yellow(),
        Level::Info => line.bright_green(),
        Level::Debug => line.bright_blue(),
        Level::Trace => line.bright_black(),
    };
    colored.to_string()
}

fn level_char(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}

impl log::Log for QueryLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = START_TIME.get_or_init(Instant::now).elapsed();
        let line = format!(
            "{} [{}] {:>12} | {}",
            compact_timestamp(elapsed.as_secs(), elapsed.subsec_millis()),
            level_char(record.level()),
            short_module(record.module_path()),
            record.args()
        );

        let colorize = *COLORIZE.get_or_init(|| std::io::stderr().is_terminal());
        eprintln!("{}", paint(record.level(), &line, colorize));
    }

    fn flush(&self) {}
}

static LOGGER: QueryLogger = QueryLogger;

/// Install the logger at `Info`.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    let _ = START_TIME.set(Instant::now());
    let colorize = *COLORIZE.get_or_init(|| std::io::stderr().is_terminal());
    // colored checks stdout on its own; follow stderr instead
    colored::control::set_override(colorize);
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}
