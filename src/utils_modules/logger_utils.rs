use crate::common::*;

fn file_log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        std::thread::current().name().unwrap_or("unnamed"),
        record.module_path().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

fn console_log_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "[{}] {}", record.level(), record.args())
}

#[doc = r#"
    Initializes the global logger.

    Records go to daily rotated files under `logs/` (the last 10 are kept) and `Info`
    and above are duplicated to stdout, which is where the run's console output lives.
    The level follows `RUST_LOG` and falls back to `info`.

    The returned handle must stay alive until the program exits.
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("repo_view_charts"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(file_log_format)
        .format_for_stdout(console_log_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()?;

    Ok(handle)
}
