//! Input validation utilities
//!
//! Serde already enforces structure; these checks cover the semantic rules
//! the deserializer cannot express. Messages stay in Portuguese to match the
//! site's forms; they are logged rather than returned on the wire.

use estate::models::{NewContact, NewProperty};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// Validate a contact form payload
pub fn validate_contact(contact: &NewContact) -> Result<(), String> {
    if contact.name.trim().chars().count() < 2 {
        return Err("Nome deve ter pelo menos 2 caracteres".to_string());
    }

    if digit_count(&contact.phone) < 10 {
        return Err("Telefone deve ter pelo menos 10 dígitos".to_string());
    }

    validate_email(&contact.email)?;

    if contact.interest.trim().is_empty() {
        return Err("Selecione um interesse".to_string());
    }

    Ok(())
}

/// Validate a new listing payload
pub fn validate_property(property: &NewProperty) -> Result<(), String> {
    if property.price < Decimal::ZERO {
        return Err("Preço não pode ser negativo".to_string());
    }

    if property.bedrooms < 0 || property.bathrooms < 0 {
        return Err("Quartos e banheiros não podem ser negativos".to_string());
    }

    if property.parking.is_some_and(|parking| parking < 0) {
        return Err("Vagas de garagem não podem ser negativas".to_string());
    }

    if let Some(rating) = property.rating {
        if rating < Decimal::ZERO || rating > Decimal::new(50, 1) {
            return Err("Avaliação deve estar entre 0 e 5".to_string());
        }
    }

    Ok(())
}

/// Validate email
fn validate_email(email: &str) -> Result<(), String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Email inválido".to_string());
    }

    Ok(())
}

/// Phone numbers arrive formatted ("(21) 99988-7766"); only digits count.
fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}
