use std::fmt;

/// A contact stored in the table: a name and the phone number attached to it.
///
/// Records are never mutated once built; an update replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    number: String,
}

impl Record {
    /// Creates a new record.
    ///
    /// # Arguments
    ///
    /// * `name` - The contact name.
    /// * `number` - The phone number.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Returns the contact name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number.
    pub fn get_number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
