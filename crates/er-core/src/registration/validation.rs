//! Field validation rules.
//!
//! 字段校验规则。每个函数只校验一条规则。

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;

pub const IDENTITY_NUMBER_DIGITS: usize = 12;
pub const VERIFICATION_CODE_DIGITS: usize = 6;
pub const MOBILE_NUMBER_DIGITS: usize = 10;
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static EXPIRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("expiry pattern compiles"));

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Strip formatting whitespace from an identity number.
pub fn normalize_identity_number(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strip spaces and dashes from a card number.
pub fn normalize_card_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Returns the normalized identity number when it has exactly 12 digits.
pub fn validate_identity_number(raw: &str) -> Result<String, ValidationError> {
    let normalized = normalize_identity_number(raw);
    if is_digits(&normalized, IDENTITY_NUMBER_DIGITS) {
        Ok(normalized)
    } else {
        Err(ValidationError::InvalidIdentityNumber)
    }
}

pub fn validate_verification_code(code: &str) -> Result<(), ValidationError> {
    if is_digits(code, VERIFICATION_CODE_DIGITS) {
        Ok(())
    } else {
        Err(ValidationError::InvalidVerificationCode)
    }
}

pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() >= MIN_NAME_LEN {
        Ok(())
    } else {
        Err(ValidationError::NameTooShort)
    }
}

pub fn validate_date_of_birth(date_of_birth: &str) -> Result<(), ValidationError> {
    if date_of_birth.is_empty() {
        Err(ValidationError::DateOfBirthRequired)
    } else {
        Ok(())
    }
}

pub fn validate_mobile_number(mobile: &str) -> Result<(), ValidationError> {
    if is_digits(mobile, MOBILE_NUMBER_DIGITS) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobileNumber)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_cardholder_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::CardholderNameRequired)
    } else {
        Ok(())
    }
}

pub fn validate_card_number(raw: &str) -> Result<(), ValidationError> {
    let digits = normalize_card_number(raw);
    if digits.is_empty() {
        return Err(ValidationError::CardNumberRequired);
    }
    if (13..=19).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::CardNumberInvalid)
    }
}

pub fn validate_expiry(expiry: &str) -> Result<(), ValidationError> {
    if expiry.is_empty() {
        return Err(ValidationError::ExpiryRequired);
    }
    if EXPIRY_PATTERN.is_match(expiry) {
        Ok(())
    } else {
        Err(ValidationError::ExpiryInvalid)
    }
}

pub fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if cvv.is_empty() {
        return Err(ValidationError::CvvRequired);
    }
    if is_digits(cvv, 3) {
        Ok(())
    } else {
        Err(ValidationError::CvvInvalid)
    }
}
