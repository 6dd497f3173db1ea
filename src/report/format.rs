// ==========================================
// 育肥场杠杆计算器 - 巴西数字格式
// ==========================================
// 千位分隔符 '.', 小数分隔符 ','  (1.234,56)
// ==========================================

use std::num::ParseFloatError;

/// 格式化小数（巴西格式）
///
/// # 示例
/// - format_decimal(1234.567, 2) -> "1.234,57"
/// - format_decimal(-0.001, 2)   -> "0,00"
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    // 四舍五入后为 0 时不带负号
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{},{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// 货币格式: "R$ 1.234,56"
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_decimal(value, 2))
}

/// 百分比格式（输入为小数）: 0.1234 -> "12,34%"
pub fn format_rate_as_percent(rate: f64) -> String {
    format!("{}%", format_decimal(rate * 100.0, 2))
}

/// 解析巴西格式小数
///
/// 同时接受 "1.234,56" / "340,5" / "340.5"（无逗号时 '.' 视为小数点）
pub fn parse_decimal(s: &str) -> Result<f64, ParseFloatError> {
    let trimmed = s.trim();
    let normalized = if trimmed.contains(',') {
        trimmed
            .replace('.', "") // 千位分隔符
            .replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.567, 2), "1.234,57");
        assert_eq!(format_decimal(600822115.84, 2), "600.822.115,84");
        assert_eq!(format_decimal(-3737.7, 2), "-3.737,70");
        assert_eq!(format_decimal(12.0, 0), "12");
        assert_eq!(format_decimal(999.0, 1), "999,0");
        assert_eq!(format_decimal(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_currency_and_percent() {
        assert_eq!(format_currency(340.0), "R$ 340,00");
        assert_eq!(format_currency(-1644.1), "R$ -1.644,10");
        assert_eq!(format_rate_as_percent(0.1234), "12,34%");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("123,45").unwrap(), 123.45);
        assert_eq!(parse_decimal("1.234,56").unwrap(), 1234.56);
        assert_eq!(parse_decimal(" 340.5 ").unwrap(), 340.5);
        assert_eq!(parse_decimal("340").unwrap(), 340.0);
        assert!(parse_decimal("abc").is_err());
    }
}
