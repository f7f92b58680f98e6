use serde::{Deserialize, Serialize};

/// Energy produced (positive amount) or consumed (negative amount) by a house at a point in time.
///
/// Both `time` and `amount` are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub house: String,
    pub time: String,
    pub amount: String,
}

impl Record {
    pub fn new(house: &str, time: &str, amount: &str) -> Self {
        Self { house: house.to_string(), time: time.to_string(), amount: amount.to_string() }
    }

    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_has_three_fields() {
        let record = Record::new("H1", "2024-01-01T10:00", "-3.5");
        let bytes = record.to_bytes().unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"house":"H1","time":"2024-01-01T10:00","amount":"-3.5"}"#
        );
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(Record::from_bytes(br#"{"house":"H1"}"#).is_err());
        assert!(Record::from_bytes(b"").is_err());
    }
}
