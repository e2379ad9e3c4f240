use serde::{Deserialize, Serialize};

/// A generated offer for one employee.
/// `employee_id` is a soft reference: the store does not enforce it.
/// `content` is the ordered paragraph sequence produced by the letter
/// generator at the time the offer was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub employee_id: String,
    pub content: Vec<String>,
    pub accepted: bool,
}

impl Offer {
    pub fn new(id: String, employee_id: String, content: Vec<String>) -> Self {
        Self {
            id,
            employee_id,
            content,
            accepted: false,
        }
    }
}
