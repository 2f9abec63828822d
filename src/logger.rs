use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

pub const DEFAULT_LOG_LEVEL: &'static str = "warn";

pub fn init_logging(level: Option<&str>) {
    let level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .map(|l| l.to_string().to_lowercase())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
