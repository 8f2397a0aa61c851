// Order persistence module
// Writes each submitted order to a timestamped JSON file on disk

use chrono::{DateTime, Local};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Timestamp format used in order filenames (second resolution)
const FILENAME_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Save a submitted order under `orders_dir`.
///
/// Creates the directory if it does not exist, then writes the mapping as
/// pretty-printed JSON (non-ASCII characters preserved literally) to
/// `order_<YYYYMMDDHHMMSS>.json`. Returns the path written.
///
/// Filenames have second resolution: two submissions within the same
/// wall-clock second target the same file and the later write wins.
pub fn save_order(orders_dir: &str, submission: &Map<String, Value>) -> io::Result<PathBuf> {
    save_order_at(orders_dir, &Local::now(), submission)
}

/// Save an order using an explicit timestamp
fn save_order_at(
    orders_dir: &str,
    when: &DateTime<Local>,
    submission: &Map<String, Value>,
) -> io::Result<PathBuf> {
    fs::create_dir_all(orders_dir)?;

    let filename = format!("order_{}.json", when.format(FILENAME_TIME_FORMAT));
    let path = Path::new(orders_dir).join(filename);

    let json = serde_json::to_string_pretty(submission)?;
    fs::write(&path, json)?;

    Ok(path)
}
