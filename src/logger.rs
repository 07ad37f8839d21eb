//! File logging setup
//!
//! The TUI owns the terminal, so log output goes to a file under the
//! platform data dir instead of stdout.

use anyhow::Result;
use log::LevelFilter;

/// Initialize the global logger writing to ~/.local/share/movietui/movietui.log
pub fn init() -> Result<()> {
    let Some(dir) = dirs::data_dir().map(|p| p.join("movietui")) else {
        return Ok(());
    };
    std::fs::create_dir_all(&dir)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Debug)
        .chain(fern::log_file(dir.join("movietui.log"))?)
        .apply()?;

    Ok(())
}
