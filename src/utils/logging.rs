use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

fn open_logfile(logfile: &Path) -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(logfile)
        .ok()
}

/// Append log records to `logfile` as `<timestamp> <message>`.
///
/// A logfile that cannot be opened (read-only working directory and the
/// like) leaves logging disabled and the run proceeds without a log.
pub fn init(logfile: &Path) {
    let Some(file) = open_logfile(logfile) else {
        return;
    };

    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.args()
            )
        })
        .try_init();
}
