//! Chilean RUT validation and formatting.
//!
//! The check character is a base-11 weighted sum over the body digits, right
//! to left, with weights cycling 2 through 7. Remainder 11 maps to '0' and
//! 10 to 'K', per the public standard.

use serde::{Deserialize, Serialize};

/// Outcome of a RUT validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RutValidation {
    pub is_valid: bool,
    /// Dot-and-dash formatted form of the input, best effort.
    pub formatted: String,
    pub error: Option<String>,
}

/// Keep digits and the check letter only.
fn clean(rut: &str) -> String {
    rut.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .collect()
}

/// Format a raw RUT with thousands dots and the dash before the check
/// character, e.g. "12345678-5" → "12.345.678-5".
pub fn format_rut(rut: &str) -> String {
    let cleaned = clean(rut);
    if cleaned.len() < 2 {
        return cleaned;
    }

    let body = &cleaned[..cleaned.len() - 1];
    let check = cleaned[cleaned.len() - 1..].to_uppercase();

    let mut formatted = String::with_capacity(body.len() + body.len() / 3 + 2);
    for (i, c) in body.chars().enumerate() {
        let remaining = body.len() - i;
        if i > 0 && remaining % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(c);
    }

    format!("{}-{}", formatted, check)
}

/// Compute the check character for a numeric body.
pub fn compute_check_digit(body: &str) -> Option<char> {
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut sum: u32 = 0;
    let mut multiplier = 2;
    for c in body.chars().rev() {
        sum += c.to_digit(10)? * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    Some(match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        digit => char::from_digit(digit, 10)?,
    })
}

/// Validate a RUT in any common written form.
pub fn validate_rut(rut: &str) -> RutValidation {
    let cleaned = clean(rut);

    if cleaned.len() < 2 {
        return RutValidation {
            is_valid: false,
            formatted: rut.to_string(),
            error: Some("RUT debe tener al menos 2 caracteres".to_string()),
        };
    }

    let body = &cleaned[..cleaned.len() - 1];
    let check = cleaned[cleaned.len() - 1..].to_uppercase();

    if !body.chars().all(|c| c.is_ascii_digit()) {
        return RutValidation {
            is_valid: false,
            formatted: format_rut(rut),
            error: Some("El cuerpo del RUT debe ser numérico".to_string()),
        };
    }

    if body.len() < 7 || body.len() > 8 {
        return RutValidation {
            is_valid: false,
            formatted: format_rut(rut),
            error: Some(
                "RUT debe tener entre 7 y 8 dígitos más el dígito verificador".to_string(),
            ),
        };
    }

    match compute_check_digit(body) {
        Some(expected) if check == expected.to_string() => RutValidation {
            is_valid: true,
            formatted: format_rut(rut),
            error: None,
        },
        _ => RutValidation {
            is_valid: false,
            formatted: format_rut(rut),
            error: Some("Dígito verificador inválido".to_string()),
        },
    }
}

/// Convenience boolean form.
pub fn is_valid_rut(rut: &str) -> bool {
    validate_rut(rut).is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_worked_example() {
        // 8*2+7*3+6*4+5*5+4*6+3*7+2*2+1*3 = 138, 138 % 11 = 6, 11-6 = 5
        assert_eq!(compute_check_digit("12345678"), Some('5'));
    }

    #[test]
    fn test_check_digit_edge_mappings() {
        // Bodies whose remainder maps to the letter and zero cases
        assert_eq!(compute_check_digit("19463420"), Some('K'));
        assert!(compute_check_digit("1234a678").is_none());
        assert!(compute_check_digit("").is_none());
    }

    #[test]
    fn test_validate_accepts_canonical_example() {
        let result = validate_rut("12345678-5");
        assert!(result.is_valid);
        assert_eq!(result.formatted, "12.345.678-5");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_validate_accepts_formatted_input() {
        assert!(is_valid_rut("12.345.678-5"));
        assert!(is_valid_rut("19.463.420-K"));
        assert!(is_valid_rut("19463420k"));
    }

    #[test]
    fn test_validate_rejects_wrong_check_digit() {
        let result = validate_rut("12345678-9");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Dígito verificador inválido"));
    }

    #[test]
    fn test_validate_rejects_short_input() {
        let result = validate_rut("5");
        assert!(!result.is_valid);
        assert_eq!(
            result.error.as_deref(),
            Some("RUT debe tener al menos 2 caracteres")
        );
    }

    #[test]
    fn test_validate_rejects_wrong_length_body() {
        let result = validate_rut("123456-0");
        assert!(!result.is_valid);
        assert!(result.error.unwrap().contains("entre 7 y 8 dígitos"));
    }

    #[test]
    fn test_format_rut() {
        assert_eq!(format_rut("12345678-5"), "12.345.678-5");
        assert_eq!(format_rut("1234567k"), "1.234.567-K");
        assert_eq!(format_rut("7"), "7");
    }
}
