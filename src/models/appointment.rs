use serde::{Deserialize, Serialize};

/// Customer appointment as collected from the form.
///
/// Values are taken verbatim from the form fields; `age` stays a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentSubmission {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub appointment_date: String,
    pub time_slot: String,
}

impl AppointmentSubmission {
    /// Form field names, in submission order.
    pub const FIELDS: [&'static str; 6] = [
        "name",
        "email",
        "age",
        "gender",
        "appointment_date",
        "time_slot",
    ];
}
