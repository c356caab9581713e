use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Entry {
    pub name: String,
    pub phone: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phone: {}", self.name, self.phone)
    }
}
