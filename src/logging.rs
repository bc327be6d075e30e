use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Sends all log output to `path`, so it never draws over the terminal UI.
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logger(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = Path::new(path).parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
