use email_address::EmailAddress;
use std::collections::BTreeMap;

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// One message per offending field
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Checks the form locally and returns the trimmed input when every field is acceptable
pub fn validate(input: &ContactInput) -> Result<ContactInput, FieldErrors> {
    let trimmed = ContactInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        message: input.message.trim().to_string(),
    };

    let mut errors = FieldErrors::new();

    let name_length = trimmed.name.chars().count();
    if name_length == 0 {
        errors.insert(Field::Name, "Name is required");
    } else if name_length > NAME_MAX {
        errors.insert(Field::Name, "Name too long");
    }

    if trimmed.email.chars().count() > EMAIL_MAX {
        errors.insert(Field::Email, "Email too long");
    } else if !EmailAddress::is_valid(&trimmed.email) {
        errors.insert(Field::Email, "Invalid email address");
    }

    let message_length = trimmed.message.chars().count();
    if message_length < MESSAGE_MIN {
        errors.insert(Field::Message, "Message must be at least 10 characters");
    } else if message_length > MESSAGE_MAX {
        errors.insert(Field::Message, "Message too long");
    }

    if errors.is_empty() {
        Ok(trimmed)
    } else {
        Err(errors)
    }
}
