use bankopslib::report::{write_report, DEFAULT_COUNT};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: печатаем последние выполненные операции из файла (stdout)
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "operations.json".to_owned());
    write_report(&mut std::io::stdout(), Path::new(&path), DEFAULT_COUNT)?;
    Ok(())
}
