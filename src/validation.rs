//! Form Validation
//!
//! Client-local checks for the login, register and spell forms. Failures
//! are reported per field and never reach the network layer.

use crate::models::{LoginData, RegisterData, SpellFormData};

pub const MIN_SPELL_NAME_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Ordered field -> message pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.clear(field);
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| m.as_str())
    }

    /// Typing into a field clears its error
    pub fn clear(&mut self, field: &str) {
        self.0.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate_login(data: &LoginData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if data.username.trim().is_empty() {
        errors.insert("username", "Username is required");
    }
    if data.password.trim().is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

pub fn validate_register(data: &RegisterData, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let username = data.username.trim();
    if username.is_empty() {
        errors.insert("username", "Username is required");
    } else if username.chars().count() < MIN_USERNAME_LEN {
        errors.insert("username", format!("Username must be at least {} characters", MIN_USERNAME_LEN));
    }

    let email = data.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.insert("email", "Enter a valid email address");
    }

    if data.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if data.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
    }

    if confirm_password != data.password {
        errors.insert("confirm_password", "Passwords do not match");
    }
    errors
}

/// `local@domain.tld` with no whitespace
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Raw text of the spell form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellFormInput {
    pub name: String,
    pub description: String,
    pub mana_cost: String,
    pub damage: String,
    pub element: String,
}

impl SpellFormInput {
    pub fn from_form_data(data: &SpellFormData) -> Self {
        Self {
            name: data.name.clone(),
            description: data.description.clone(),
            mana_cost: data.mana_cost.to_string(),
            damage: data.damage.map(|d| d.to_string()).unwrap_or_default(),
            element: data.element.clone(),
        }
    }
}

/// Validate and convert; element is an open vocabulary, only emptiness is rejected
pub fn validate_spell(input: &SpellFormInput) -> Result<SpellFormData, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = input.name.trim();
    if name.is_empty() {
        errors.insert("name", "Spell name is required");
    } else if name.chars().count() < MIN_SPELL_NAME_LEN {
        errors.insert("name", format!("Spell name must be at least {} characters", MIN_SPELL_NAME_LEN));
    }

    let description = input.description.trim();
    if description.is_empty() {
        errors.insert("description", "Spell description is required");
    } else if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.insert("description", format!("Description must be at least {} characters", MIN_DESCRIPTION_LEN));
    }

    let element = input.element.trim();
    if element.is_empty() {
        errors.insert("element", "Spell element is required");
    }

    let mana_cost = match parse_stat(&input.mana_cost) {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            errors.insert("mana_cost", "Mana cost is required");
            None
        }
        Err(msg) => {
            errors.insert("mana_cost", msg);
            None
        }
    };

    let damage = match parse_stat(&input.damage) {
        Ok(value) => value,
        Err(msg) => {
            errors.insert("damage", msg);
            None
        }
    };

    match mana_cost {
        Some(mana_cost) if errors.is_empty() => Ok(SpellFormData {
            name: name.to_string(),
            description: description.to_string(),
            mana_cost,
            damage,
            element: element.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Blank -> None; otherwise a non-negative integer
fn parse_stat(raw: &str) -> Result<Option<u32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| "Must be a whole number of 0 or more")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_input() -> SpellFormInput {
        SpellFormInput {
            name: "Fireball".into(),
            description: "Hurls a roaring ball of flame".into(),
            mana_cost: "12".into(),
            damage: "".into(),
            element: "Attack".into(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(&LoginData {
            username: "  ".into(),
            password: String::new(),
        });
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let ok = validate_login(&LoginData {
            username: "merlin".into(),
            password: "secret".into(),
        });
        assert!(ok.is_empty());
    }

    #[test]
    fn test_valid_spell_converts() {
        let data = validate_spell(&valid_input()).unwrap();
        assert_eq!(data.mana_cost, 12);
        assert_eq!(data.damage, None);
        assert_eq!(data.element, "Attack");
    }

    #[test]
    fn test_element_is_open_vocabulary() {
        let input = SpellFormInput {
            element: "chronomancy".into(),
            ..valid_input()
        };
        assert!(validate_spell(&input).is_ok());
    }

    #[rstest]
    #[case("name", "", "Spell name is required")]
    #[case("name", "Zo", "Spell name must be at least 3 characters")]
    #[case("description", "   ", "Spell description is required")]
    #[case("description", "Too short", "Description must be at least 20 characters")]
    #[case("element", "", "Spell element is required")]
    #[case("mana_cost", "", "Mana cost is required")]
    #[case("mana_cost", "-4", "Must be a whole number of 0 or more")]
    #[case("damage", "lots", "Must be a whole number of 0 or more")]
    fn test_spell_field_rules(#[case] field: &str, #[case] value: &str, #[case] message: &str) {
        let mut input = valid_input();
        match field {
            "name" => input.name = value.into(),
            "description" => input.description = value.into(),
            "element" => input.element = value.into(),
            "mana_cost" => input.mana_cost = value.into(),
            "damage" => input.damage = value.into(),
            _ => unreachable!(),
        }
        let errors = validate_spell(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field), Some(message));
    }

    #[test]
    fn test_register_rules() {
        let data = RegisterData {
            username: "al".into(),
            email: "al@nowhere".into(),
            password: "12345".into(),
        };
        let errors = validate_register(&data, "different");
        assert!(errors.get("username").is_some());
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert!(errors.get("password").is_some());
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));

        let data = RegisterData {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "hunter22".into(),
        };
        assert!(validate_register(&data, "hunter22").is_empty());
    }

    #[test]
    fn test_clearing_a_field_error() {
        let mut errors = validate_spell(&SpellFormInput::default()).unwrap_err();
        assert!(errors.get("name").is_some());
        errors.clear("name");
        assert!(errors.get("name").is_none());
        assert!(errors.get("description").is_some());
    }
}
