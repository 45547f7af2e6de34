use super::{report_failure, validate_input};
use crate::application::ports::navigator::{Navigator, Route};
use crate::application::ports::notifier::{Notification, Notifier};
use crate::application::services::AuthService;
use crate::presentation::dto::auth_dto::{AuthFormResponse, LoginRequest, RegisterRequest};
use crate::shared::error::AppError;
use std::sync::Arc;

pub const LOGIN_SUCCEEDED: &str = "Erfolgreich eingeloggt!";
pub const REGISTER_SUCCEEDED: &str = "Erfolgreich registriert! Du kannst dich jetzt anmelden.";

pub struct LoginHandler {
    auth_service: Arc<AuthService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    form: LoginRequest,
    remember_me: bool,
    show_password: bool,
    is_loading: bool,
}

impl LoginHandler {
    pub fn new(
        auth_service: Arc<AuthService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth_service,
            notifier,
            navigator,
            form: LoginRequest::default(),
            remember_me: false,
            show_password: false,
            is_loading: false,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    pub fn toggle_show_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn form_state(&self) -> AuthFormResponse {
        AuthFormResponse {
            email: self.form.email.clone(),
            is_loading: self.is_loading,
            show_password: self.show_password,
            show_confirm_password: false,
            remember_me: self.remember_me,
        }
    }

    /// Simulated sign-in. Success goes to the feed; any failure leaves the
    /// form as typed.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        if let Err(err) = validate_input(&self.form) {
            report_failure(self.notifier.as_ref(), &err).await;
            return Err(err);
        }

        self.is_loading = true;
        let result = self.auth_service.login(&self.form.clone().into()).await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                self.notifier.notify(Notification::success(LOGIN_SUCCEEDED)).await;
                self.navigator.navigate(Route::Home).await;
                Ok(())
            }
            Err(err) => {
                report_failure(self.notifier.as_ref(), &err).await;
                Err(err)
            }
        }
    }
}

pub struct RegisterHandler {
    auth_service: Arc<AuthService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    form: RegisterRequest,
    show_password: bool,
    show_confirm_password: bool,
    is_loading: bool,
}

impl RegisterHandler {
    pub fn new(
        auth_service: Arc<AuthService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth_service,
            notifier,
            navigator,
            form: RegisterRequest::default(),
            show_password: false,
            show_confirm_password: false,
            is_loading: false,
        }
    }

    /// Mutable access to the form fields.
    pub fn form_mut(&mut self) -> &mut RegisterRequest {
        &mut self.form
    }

    pub fn toggle_show_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn toggle_show_confirm_password(&mut self) -> bool {
        self.show_confirm_password = !self.show_confirm_password;
        self.show_confirm_password
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn form_state(&self) -> AuthFormResponse {
        AuthFormResponse {
            email: self.form.email.clone(),
            is_loading: self.is_loading,
            show_password: self.show_password,
            show_confirm_password: self.show_confirm_password,
            remember_me: false,
        }
    }

    /// Success sends the user to the login page.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        if let Err(err) = validate_input(&self.form) {
            report_failure(self.notifier.as_ref(), &err).await;
            return Err(err);
        }

        self.is_loading = true;
        let result = self.auth_service.register(&self.form.clone().into()).await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success(REGISTER_SUCCEEDED))
                    .await;
                self.navigator.navigate(Route::Login).await;
                Ok(())
            }
            Err(err) => {
                report_failure(self.notifier.as_ref(), &err).await;
                Err(err)
            }
        }
    }
}
