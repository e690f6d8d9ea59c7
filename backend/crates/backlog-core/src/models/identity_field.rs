use serde_json::Value;

/// Decoded shape of a person-valued field such as `System.CreatedBy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityField {
    /// An identity object, possibly carrying a `displayName`
    Object { display_name: Option<String> },
    /// Present but not an object (a bare string, number, ...)
    Other,
    Absent,
}

impl IdentityField {
    pub fn decode(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => IdentityField::Absent,
            Some(Value::Object(map)) => IdentityField::Object {
                display_name: map
                    .get("displayName")
                    .and_then(Value::as_str)
                    .map(String::from),
            },
            Some(_) => IdentityField::Other,
        }
    }

    pub fn display_name(self) -> Option<String> {
        match self {
            IdentityField::Object { display_name } => display_name,
            IdentityField::Other | IdentityField::Absent => None,
        }
    }
}
