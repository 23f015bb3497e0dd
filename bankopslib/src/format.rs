//! Форматирование дат и трёхстрочных блоков операции.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::error::{OpsError, Result};
use crate::mask::mask_account_or_card;
use crate::model::Operation;

/// Приводит ISO-8601 дату к виду `ДД.ММ.ГГГГ`.
///
/// Неразбираемая строка возвращается как есть, с предупреждением
/// в журнале. Наружу эта функция не падает.
pub fn format_date(date_str: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return d.format("%d.%m.%Y").to_string();
    }
    warn!("cannot parse date {date_str:?}, leaving as is");
    date_str.to_owned()
}

/// Собирает блок из трёх строк: дата и описание, маскированные реквизиты,
/// сумма с валютой.
///
/// Дата обязательна; без неё блок не строится. Ошибка маскировки любого
/// из реквизитов отменяет весь блок, частичный вывод не возвращается.
pub fn format_operation(op: &Operation) -> Result<String> {
    let date = match op.date.as_deref() {
        Some(raw) if !raw.is_empty() => format_date(raw),
        _ => return Err(OpsError::MissingDate),
    };
    let description = &op.description;

    let (amount, currency) = match &op.operation_amount {
        Some(oa) => (
            oa.amount.map(|a| a.to_string()).unwrap_or_default(),
            oa.currency.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    // Пустой реквизит приравнивается к отсутствующему.
    let from = match op.from.as_deref() {
        Some(raw) if !raw.is_empty() => Some(mask_account_or_card(raw)?),
        _ => None,
    };
    let to = match op.to.as_deref() {
        Some(raw) if !raw.is_empty() => Some(mask_account_or_card(raw)?),
        _ => None,
    };

    let from_part = match from {
        Some(from) => format!("{from} -> "),
        None => String::new(),
    };
    let to_part = to.unwrap_or_default();

    Ok(format!(
        "{date} {description}\n{from_part}{to_part}\n{amount} {currency}\n"
    ))
}
