//! Загрузка операций из JSON-файла.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::model::Operation;

/// Читает файл `path` и разбирает его как JSON-массив операций.
///
/// Отсутствующий файл и некорректный JSON возвращаются как ошибки;
/// прерывать ли конвейер, решает вызывающая сторона.
pub fn load_operations(path: &Path) -> Result<Vec<Operation>> {
    let file = File::open(path)?;
    let operations = serde_json::from_reader(BufReader::new(file))?;
    Ok(operations)
}
