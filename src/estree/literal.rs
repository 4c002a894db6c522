//! Значения литералов: числа, строки, регулярные выражения, ключевые слова

use serde::Serialize;
use std::iter::Peekable;
use std::str::Chars;

/// Значение поля `value` у узла `Literal`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    /// Строки и исходный текст регулярных выражений
    String(String),
}

/// Числовое значение литерала.
///
/// Поддерживаются десятичная запись, `0x`/`0o`/`0b`, устаревшая
/// восьмеричная (`017`) и разделители `_`. Для BigInt (`10n`) возвращает `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text: String = raw.chars().filter(|c| *c != '_').collect();
    if text.ends_with('n') {
        return None;
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|prefix| text.strip_prefix(*prefix)) {
            return parse_radix(digits, radix);
        }
    }
    if text.len() > 1
        && text.starts_with('0')
        && text.bytes().all(|b| (b'0'..=b'7').contains(&b))
    {
        return parse_radix(&text[1..], 8);
    }
    text.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Значение строкового литерала: кавычки сняты, escape-последовательности раскрыты
pub fn decode_string(raw: &str) -> String {
    let inner = raw
        .strip_prefix(['"', '\''])
        .and_then(|rest| rest.strip_suffix(['"', '\'']))
        .unwrap_or(raw);

    let mut units: Vec<u16> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        match escaped {
            'n' => units.push(0x0A),
            't' => units.push(0x09),
            'r' => units.push(0x0D),
            'b' => units.push(0x08),
            'f' => units.push(0x0C),
            'v' => units.push(0x0B),
            '0'..='7' => units.push(decode_octal(escaped, &mut chars)),
            'x' => match take_hex(&mut chars, 2) {
                Some(value) => units.push(value as u16),
                None => units.push('x' as u16),
            },
            'u' => match decode_unicode(&mut chars) {
                Some(value) => push_code_point(&mut units, value),
                None => units.push('u' as u16),
            },
            // продолжение строки
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => push_char(&mut units, other),
        }
    }
    String::from_utf16_lossy(&units)
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

fn push_code_point(units: &mut Vec<u16>, value: u32) {
    match char::from_u32(value) {
        Some(c) => push_char(units, c),
        // одиночный суррогат: склеится с парой или станет U+FFFD
        None if value <= 0xFFFF => units.push(value as u16),
        None => units.push(0xFFFD),
    }
}

fn decode_octal(first: char, chars: &mut Peekable<Chars<'_>>) -> u16 {
    let max_len = if first <= '3' { 3 } else { 2 };
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 1..max_len {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                chars.next();
            }
            None => break,
        }
    }
    value as u16
}

fn take_hex(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut value = 0u32;
    for _ in 0..count {
        value = value * 16 + lookahead.next()?.to_digit(16)?;
    }
    *chars = lookahead;
    Some(value)
}

fn decode_unicode(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    if chars.peek() != Some(&'{') {
        return take_hex(chars, 4);
    }
    let mut lookahead = chars.clone();
    lookahead.next();
    let mut value = 0u32;
    let mut digits = 0;
    loop {
        match lookahead.next()? {
            '}' if digits > 0 => break,
            c => {
                value = value.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
                digits += 1;
            }
        }
    }
    *chars = lookahead;
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("3.25"), Some(3.25));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("1_000"), Some(1000.0));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("09"), Some(9.0));
    }

    #[test]
    fn test_parse_radix_numbers() {
        assert_eq!(parse_number("0xff"), Some(255.0));
        assert_eq!(parse_number("0O17"), Some(15.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("017"), Some(15.0));
        assert_eq!(parse_number("0x"), None);
    }

    #[test]
    fn test_bigint_is_rejected() {
        assert_eq!(parse_number("10n"), None);
    }

    #[test]
    fn test_decode_simple_escapes() {
        assert_eq!(decode_string(r#""a\nb""#), "a\nb");
        assert_eq!(decode_string(r"'it\'s'"), "it's");
        assert_eq!(decode_string(r#""tab\there""#), "tab\there");
        assert_eq!(decode_string(r#""\q""#), "q");
    }

    #[test]
    fn test_decode_numeric_escapes() {
        assert_eq!(decode_string(r#""\x41B\u{43}""#), "ABC");
        assert_eq!(decode_string(r#""\101""#), "A");
        assert_eq!(decode_string(r#""\0""#), "\0");
        assert_eq!(decode_string(r#""\uD83D\uDE00""#), "\u{1F600}");
    }

    #[test]
    fn test_decode_line_continuation() {
        assert_eq!(decode_string("\"a\\\nb\""), "ab");
    }

    #[test]
    fn test_literal_value_serialization() {
        assert_eq!(serde_json::to_value(LiteralValue::Null).unwrap(), serde_json::Value::Null);
        assert_eq!(serde_json::to_value(LiteralValue::Boolean(true)).unwrap(), serde_json::json!(true));
        assert_eq!(serde_json::to_value(LiteralValue::Number(1.5)).unwrap(), serde_json::json!(1.5));
        assert_eq!(
            serde_json::to_value(LiteralValue::String("x".into())).unwrap(),
            serde_json::json!("x")
        );
    }
}
