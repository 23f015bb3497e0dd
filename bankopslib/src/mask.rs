//! Маскировка номеров карт и счетов в строке реквизита.

use regex::Regex;

use crate::error::{OpsError, Result};

/// Длина номера карты в цифрах.
pub const CARD_NUMBER_LEN: usize = 16;
/// Длина номера счёта в цифрах.
pub const ACCOUNT_NUMBER_LEN: usize = 20;

// Группы (4)(2)(2)(4)(4): первые шесть и последние четыре цифры остаются видимыми.
const CARD_NUMBER_RE: &str = r"\b(\d{4})(\d{2})(\d{2})(\d{4})(\d{4})\b";
const ACCOUNT_NUMBER_RE: &str = r"\b\d{20}\b";

/// Похож ли токен на номер карты (16 цифр).
pub fn is_card_number(number: &str) -> bool {
    number.len() == CARD_NUMBER_LEN
}

/// Проверяет номер счёта: 20 цифр — `Ok(true)`, иначе ошибка длины.
///
/// В отличие от [`is_card_number`] неверная длина здесь ошибка, а не `false`.
pub fn is_account_number(number: &str) -> Result<bool> {
    if number.len() != ACCOUNT_NUMBER_LEN {
        return Err(OpsError::WrongNumberLength(number.len()));
    }
    Ok(true)
}

/// Маскирует 16-значный номер карты внутри строки:
/// `"MasterCard 9454780748494532"` -> `"MasterCard 9454 78** **** 4532"`.
/// Текст вокруг номера (название платёжной системы) не меняется.
pub fn mask_card(text: &str) -> Result<String> {
    let re = Regex::new(CARD_NUMBER_RE).map_err(|e| OpsError::Parse(e.to_string()))?;
    let caps = re
        .captures(text)
        .ok_or_else(|| OpsError::CardNumberNotFound(text.to_owned()))?;
    let masked = format!("{} {}** **** {}", &caps[1], &caps[2], &caps[5]);
    Ok(text.replacen(&caps[0], &masked, 1))
}

/// Маскирует 20-значный номер счёта: видны только последние четыре цифры.
pub fn mask_account(text: &str) -> Result<String> {
    let re = Regex::new(ACCOUNT_NUMBER_RE).map_err(|e| OpsError::Parse(e.to_string()))?;
    let found = re
        .find(text)
        .ok_or_else(|| OpsError::AccountNumberNotFound(text.to_owned()))?;
    let number = found.as_str();
    let masked = format!("**{}", &number[number.len() - 4..]);
    Ok(text.replacen(number, &masked, 1))
}

/// Разбивает реквизит на название и номер (последний токен) и маскирует
/// номер по его длине: 16 цифр — карта, 20 — счёт, иное — ошибка длины.
pub fn mask_account_or_card(info: &str) -> Result<String> {
    let parts: Vec<&str> = info.split_whitespace().collect();
    let Some((&number, name_parts)) = parts.split_last() else {
        return Err(OpsError::NumberMissing);
    };
    let normalized = format!("{} {}", name_parts.join(" "), number);

    if is_card_number(number) {
        return mask_card(&normalized);
    }
    is_account_number(number)?;
    mask_account(&normalized)
}
