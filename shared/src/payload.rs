use serde::{Deserialize, Serialize};

/// Record handed to the host's `sendData` call as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePayload {
    /// Amount in whole currency units (digits of the amount field)
    pub amount: u64,
    /// Category wire key
    pub category: String,
    /// User text, or the category key when left blank
    pub description: String,
    /// Who the expense is for; may be empty
    pub person: String,
}

impl ExpensePayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_has_exactly_four_fields() {
        let payload = ExpensePayload {
            amount: 45_000,
            category: "Xăng xe".to_string(),
            description: "xăng".to_string(),
            person: String::new(),
        };
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["amount"], 45_000);
        assert_eq!(object["category"], "Xăng xe");
        assert_eq!(object["description"], "xăng");
        assert_eq!(object["person"], "");
    }

    #[test]
    fn test_amount_is_a_json_integer() {
        let payload = ExpensePayload {
            amount: 20_000,
            category: "Khác".to_string(),
            description: "Khác".to_string(),
            person: "Alice".to_string(),
        };
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"amount":20000,"category":"Khác","description":"Khác","person":"Alice"}"#
        );
    }
}
