use crate::headless::HeadlessForm;
use crate::models::appointment::AppointmentSubmission;

/// Login form as the page renders it: empty fields.
pub fn login_form() -> HeadlessForm {
    HeadlessForm::new("loginForm")
        .with_field("email", "")
        .with_field("password", "")
}

/// Customer appointment form with every field blank.
pub fn appointment_form() -> HeadlessForm {
    AppointmentSubmission::FIELDS
        .iter()
        .fold(HeadlessForm::new("customerForm"), |form, name| form.with_field(name, ""))
}

pub fn sample_appointment(name: &str) -> AppointmentSubmission {
    AppointmentSubmission {
        name: name.to_string(),
        email: "ana@example.com".to_string(),
        age: "34".to_string(),
        gender: "female".to_string(),
        appointment_date: "2026-11-02".to_string(),
        time_slot: "09:00-10:00".to_string(),
    }
}

/// Type an appointment into the form, field by field.
pub fn fill_appointment(form: &HeadlessForm, appointment: &AppointmentSubmission) {
    form.fill("name", &appointment.name);
    form.fill("email", &appointment.email);
    form.fill("age", &appointment.age);
    form.fill("gender", &appointment.gender);
    form.fill("appointment_date", &appointment.appointment_date);
    form.fill("time_slot", &appointment.time_slot);
}
