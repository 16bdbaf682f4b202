use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::banner::{show_message, ShownBanner};
use crate::client::BloodBankClient;
use crate::config::FormTimings;
use crate::models::appointment::AppointmentSubmission;
use crate::models::auth::ADMIN_USER_TYPE;
use crate::models::common::RequestResult;
use crate::page::{Form, Page, SubmitEvent};

pub const ADMIN_DASHBOARD_PATH: &str = "admin_dashboard.html";
pub const HOME_PATH: &str = "index.html";

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const APPOINTMENT_FAILED_MESSAGE: &str = "Failed to submit appointment";

/// Result of handling a login submission.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Success banner shown; navigation to `destination` fires after the redirect delay.
    Redirecting {
        destination: &'static str,
        banner: ShownBanner,
        navigation: JoinHandle<()>,
    },
    Failed {
        banner: ShownBanner,
        result: RequestResult,
    },
}

/// Result of handling an appointment submission.
#[derive(Debug)]
pub enum AppointmentOutcome {
    Submitted { banner: ShownBanner },
    Failed {
        banner: ShownBanner,
        result: RequestResult,
    },
}

/// Destination after a successful login.
pub fn redirect_for(result: &RequestResult) -> &'static str {
    match result.data_str("user_type") {
        Some(ADMIN_USER_TYPE) => ADMIN_DASHBOARD_PATH,
        _ => HOME_PATH,
    }
}

/// Connects the login and appointment forms to the API client.
pub struct FormController {
    client: Arc<BloodBankClient>,
    page: Arc<dyn Page>,
    timings: FormTimings,
    login_form: Option<Arc<dyn Form>>,
    appointment_form: Option<Arc<dyn Form>>,
}

impl FormController {
    pub fn new(client: Arc<BloodBankClient>, page: Arc<dyn Page>) -> Self {
        Self {
            client,
            page,
            timings: FormTimings::default(),
            login_form: None,
            appointment_form: None,
        }
    }

    pub fn with_timings(mut self, timings: FormTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn bind_login_form(&mut self, form: Arc<dyn Form>) {
        info!("Login form bound: {}", form.id());
        self.login_form = Some(form);
    }

    pub fn bind_appointment_form(&mut self, form: Arc<dyn Form>) {
        info!("Appointment form bound: {}", form.id());
        self.appointment_form = Some(form);
    }

    /// Fire the diagnostic health check. Its outcome never affects the page.
    pub fn page_ready(&self) -> JoinHandle<RequestResult> {
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let result = client.health_check().await;
            if !result.success() {
                warn!("API health check failed: {:?}", result.error());
            }
            result
        })
    }

    /// Handle a submit event on the login form.
    ///
    /// Returns `None` when no login form is bound.
    pub async fn submit_login(&self, event: &mut SubmitEvent) -> Option<LoginOutcome> {
        let form = self.login_form.as_ref()?;
        event.prevent_default();

        let email = field(form.as_ref(), "email");
        let password = field(form.as_ref(), "password");
        info!("Submitting login for {}", email);

        let result = self.client.login(&email, &password).await;

        if result.success() {
            let banner = self.show(Some(form.as_ref()), LOGIN_SUCCESS_MESSAGE, false);
            let destination = redirect_for(&result);

            let page = Arc::clone(&self.page);
            let delay = self.timings.redirect_delay;
            let navigation = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                page.navigate(destination);
            });

            Some(LoginOutcome::Redirecting {
                destination,
                banner,
                navigation,
            })
        } else {
            let message = non_empty(result.data_str("error")).unwrap_or(LOGIN_FAILED_MESSAGE);
            warn!("Login rejected: {}", message);
            let banner = self.show(Some(form.as_ref()), message, true);
            Some(LoginOutcome::Failed { banner, result })
        }
    }

    /// Handle a submit event on the appointment form.
    ///
    /// Returns `None` when no appointment form is bound.
    pub async fn submit_appointment(&self, event: &mut SubmitEvent) -> Option<AppointmentOutcome> {
        let form = self.appointment_form.as_ref()?;
        event.prevent_default();

        let appointment = read_appointment(form.as_ref());
        info!(
            "Submitting appointment for {} on {} ({})",
            appointment.email, appointment.appointment_date, appointment.time_slot
        );

        let result = self.client.submit_customer_appointment(&appointment).await;

        if result.success() {
            let message = result.data_str("message").unwrap_or_default();
            let banner = self.show(Some(form.as_ref()), message, false);
            form.reset();
            Some(AppointmentOutcome::Submitted { banner })
        } else {
            let message = non_empty(result.data_str("message")).unwrap_or(APPOINTMENT_FAILED_MESSAGE);
            warn!("Appointment rejected: {}", message);
            let banner = self.show(Some(form.as_ref()), message, true);
            Some(AppointmentOutcome::Failed { banner, result })
        }
    }

    fn show(&self, form: Option<&dyn Form>, text: &str, is_error: bool) -> ShownBanner {
        show_message(&self.page, form, text, is_error, self.timings.banner_ttl)
    }
}

// Blank server messages fall back like missing ones
fn non_empty(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.is_empty())
}

fn field(form: &dyn Form, name: &str) -> String {
    form.value(name).unwrap_or_default()
}

/// Collect the six appointment fields verbatim.
pub fn read_appointment(form: &dyn Form) -> AppointmentSubmission {
    AppointmentSubmission {
        name: field(form, "name"),
        email: field(form, "email"),
        age: field(form, "age"),
        gender: field(form, "gender"),
        appointment_date: field(form, "appointment_date"),
        time_slot: field(form, "time_slot"),
    }
}
