//! Сборка отчёта: последние выполненные операции из выписки.

use std::io::Write;
use std::path::Path;

use tracing::error;

use crate::error::Result;
use crate::format::format_operation;
use crate::loader::load_operations;
use crate::model::Operation;
use crate::select::{filter_executed, sort_by_date_desc};

/// Сколько операций попадает в отчёт по умолчанию.
pub const DEFAULT_COUNT: usize = 5;

/// Отбирает из `operations` последние `count` выполненных и форматирует их.
///
/// Ошибка сортировки (операция без даты) оставляет отчёт пустым.
/// Операция, которую не удалось отформатировать, в отчёт не попадает,
/// но своё место среди `count` занимает; остальные операции не страдают.
pub fn build_report(operations: &[Operation], count: usize) -> Vec<String> {
    let sorted = match sort_by_date_desc(operations) {
        Ok(sorted) => sorted,
        Err(e) => {
            error!("cannot sort operations: {e}");
            return Vec::new();
        }
    };

    let mut blocks = Vec::new();
    for op in filter_executed(sorted).take(count) {
        match format_operation(op) {
            Ok(block) => blocks.push(block),
            Err(e) => error!("cannot format operation {:?}: {e}", op.id),
        }
    }
    blocks
}

/// Загружает операции из `path` и пишет отчёт в `w`, разделяя блоки
/// пустой строкой.
///
/// Ошибка загрузки возвращается вызывающему; отчёт при этом не пишется вовсе.
pub fn write_report<W: Write>(w: &mut W, path: &Path, count: usize) -> Result<()> {
    let operations = load_operations(path)?;
    for block in build_report(&operations, count) {
        writeln!(w, "{block}")?;
    }
    Ok(())
}
