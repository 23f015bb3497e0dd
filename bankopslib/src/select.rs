//! Отбор операций: фильтр по статусу и сортировка по дате.

use crate::error::{OpsError, Result};
use crate::model::{OpState, Operation};

/// Выполнена ли операция.
pub fn is_executed(op: &Operation) -> bool {
    op.state == Some(OpState::Executed)
}

/// Ленивый фильтр выполненных операций с сохранением исходного порядка.
pub fn filter_executed<'a, I>(operations: I) -> impl Iterator<Item = &'a Operation>
where
    I: IntoIterator<Item = &'a Operation>,
{
    operations.into_iter().filter(|op| is_executed(op))
}

/// Сортирует операции по полю `date` по убыванию (свежие раньше).
///
/// Сравниваются сами ISO-8601 строки. Операция без даты делает
/// сортировку невозможной целиком, частичный результат не возвращается.
pub fn sort_by_date_desc(operations: &[Operation]) -> Result<Vec<&Operation>> {
    if operations.iter().any(|op| op.date.is_none()) {
        return Err(OpsError::MissingDate);
    }
    let mut sorted: Vec<&Operation> = operations.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(sorted)
}
