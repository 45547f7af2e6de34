mod common;

use fitblog_lib::application::ports::navigator::{Navigator, Route};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn login_waits_then_navigates_home() {
    let state = common::state();
    state.navigator.navigate(Route::Login).await;

    let mut login = state.login_handler();
    login.set_email("sarah@beispiel.com");
    login.set_password("geheim");

    let started = Instant::now();
    login.submit().await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(!login.is_loading());
    assert_eq!(state.navigator.current().await, Route::Home);
    assert_eq!(
        common::toast_messages(&state).await,
        vec!["Erfolgreich eingeloggt!"]
    );
}

#[tokio::test(start_paused = true)]
async fn login_with_empty_fields_reports_after_the_delay() {
    let state = common::state();
    state.navigator.navigate(Route::Login).await;
    let mut login = state.login_handler();

    let started = Instant::now();
    assert!(login.submit().await.is_err());

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(state.navigator.current().await, Route::Login);
    assert_eq!(
        common::toast_messages(&state).await,
        vec!["Bitte fülle alle Felder aus."]
    );
}

#[tokio::test(start_paused = true)]
async fn register_mismatch_is_immediate_and_stays() {
    let state = common::state();
    state.navigator.navigate(Route::Register).await;
    let mut register = state.register_handler();
    {
        let form = register.form_mut();
        form.first_name = "Lisa".into();
        form.last_name = "Grün".into();
        form.email = "lisa@beispiel.com".into();
        form.password = "abcd1234".into();
        form.confirm_password = "abcd1235".into();
        form.accept_terms = true;
    }

    let started = Instant::now();
    assert!(register.submit().await.is_err());

    assert!(started.elapsed() < Duration::from_millis(1000));
    assert_eq!(state.navigator.current().await, Route::Register);
    assert_eq!(
        common::toast_messages(&state).await,
        vec!["Passwörter stimmen nicht überein!"]
    );
    assert_eq!(register.form_state().email, "lisa@beispiel.com");
}

#[tokio::test(start_paused = true)]
async fn register_requires_terms_then_succeeds() {
    let state = common::state();
    state.navigator.navigate(Route::Register).await;
    let mut register = state.register_handler();
    {
        let form = register.form_mut();
        form.first_name = "Lisa".into();
        form.last_name = "Grün".into();
        form.email = "lisa@beispiel.com".into();
        form.password = "abcd1234".into();
        form.confirm_password = "abcd1234".into();
    }

    assert!(register.submit().await.is_err());
    register.form_mut().accept_terms = true;
    register.submit().await.unwrap();

    assert_eq!(state.navigator.current().await, Route::Login);
    assert_eq!(
        common::toast_messages(&state).await,
        vec![
            "Bitte akzeptiere die Nutzungsbedingungen!",
            "Erfolgreich registriert! Du kannst dich jetzt anmelden."
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn latency_is_configurable() {
    let mut config = common::config();
    config.auth.simulated_latency_ms = 50;
    let state = common::state_with(config);

    let mut login = state.login_handler();
    login.set_email("a@b.de");
    login.set_password("x");

    let started = Instant::now();
    login.submit().await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(1000));
}
