use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    opt_format,
};

/// Start logging. `RUST_LOG` wins over `level`. With a `log_dir` the log goes
/// to rotating files there (warnings are still echoed to stderr); without one
/// it goes to stderr.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup_logging(level: &str, log_dir: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?.format(opt_format);

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .duplicate_to_stderr(Duplicate::Warn)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            ),
        None => logger,
    };

    logger.start()
}
