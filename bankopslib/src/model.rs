//! Доменная модель — операция из JSON-выписки, как её отдаёт банк.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Статус операции. Выполненной считается только `EXECUTED`;
/// незнакомый статус разбирается в [`OpState::Unknown`], а не в ошибку.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum OpState {
    Executed,
    Canceled,
    Pending,
    Unknown,
}

impl From<String> for OpState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "EXECUTED" => Self::Executed,
            "CANCELED" => Self::Canceled,
            "PENDING" => Self::Pending,
            _ => Self::Unknown,
        }
    }
}

/// Операция. Все поля на границе опциональны: подстановка значений
/// по умолчанию происходит при десериализации, а не в форматировании.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Operation {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub state: Option<OpState>,
    /// Дата в ISO-8601. Хранится строкой: лексикографический порядок
    /// таких строк совпадает с хронологическим.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "operationAmount", default)]
    pub operation_amount: Option<OperationAmount>,
    /// Реквизит вида `"<название> <номер>"`.
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OperationAmount {
    /// Сумма в выписке записана строкой ("56071.02").
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}
