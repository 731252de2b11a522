use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One user's entry.
///
/// Every field is kept as text, including `age`, so the persisted JSON stays
/// byte-compatible with collections written by earlier versions. Password and
/// card number are stored in plaintext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub card: String,
}

impl UserRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Password => &self.password,
            Field::Age => &self.age,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Card => &self.card,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Password => self.password = value,
            Field::Age => self.age = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Card => self.card = value,
        }
    }
}

/// The six record fields, in form (and validation) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Password,
    Age,
    Email,
    Phone,
    Card,
}

/// How a field is presented in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Password,
    Email,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Password,
        Field::Age,
        Field::Email,
        Field::Phone,
        Field::Card,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Password => "password",
            Field::Age => "age",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Card => "card",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Password => "Password",
            Field::Age => "Age",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Card => "Card Number",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Field::Password => InputKind::Password,
            Field::Email => InputKind::Email,
            _ => InputKind::Text,
        }
    }

    /// Message shown when a non-empty value does not match the field's rule.
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Name => "Enter name from capital letter",
            Field::Password => "Password must be at least 5 characters",
            Field::Age => "Enter a valid age",
            Field::Email => "Enter a valid email with @",
            Field::Phone => "Enter phone number in format +380...",
            Field::Card => "Card number must has 16 numbers",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.key() == lowered)
            .ok_or_else(|| {
                format!(
                    "Unknown field '{}' (expected one of: name, password, age, email, phone, card)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_ordered_for_validation() {
        let mut shuffled = vec![Field::Card, Field::Name, Field::Email, Field::Age];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Field::Name, Field::Age, Field::Email, Field::Card]
        );
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("Phone".parse::<Field>().unwrap(), Field::Phone);
        assert!("zip".parse::<Field>().is_err());
    }

    #[test]
    fn get_and_set_cover_every_field() {
        let mut record = UserRecord::default();
        for field in Field::ALL {
            record.set(field, field.key());
        }
        for field in Field::ALL {
            assert_eq!(record.get(field), field.key());
        }
    }

    #[test]
    fn deserializes_legacy_payload_with_missing_keys() {
        let json = r#"[{"name":"Anna","age":"30"}]"#;
        let records: Vec<UserRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].name, "Anna");
        assert_eq!(records[0].age, "30");
        assert_eq!(records[0].card, "");
    }
}
