//! Signup dispatch ordering tests
//!
//! The confirmation code is sent before the registration is held, so a
//! failed dispatch leaves nothing behind. These touch the pending-signup
//! file under a temp state dir, so they run serially.

use serial_test::serial;
use veritrust::cli::commands::staff::send_then_hold;
use veritrust::core::services::auth::{self, AuthError, PendingSignup, SignupRequest};
use veritrust::paths;

use crate::common::fixtures::{RecordingMailer, with_temp_home};

fn pending() -> PendingSignup {
    auth::begin_signup(
        &[],
        &SignupRequest {
            full_name: "New Person".to_string(),
            role: "Driver".to_string(),
            department: "Logistics".to_string(),
            email: "new.person@ngo.org".to_string(),
            password: "hunter2hunter".to_string(),
        },
    )
    .unwrap()
}

#[test]
#[serial]
fn failed_dispatch_holds_no_registration() {
    with_temp_home(|| {
        let mailer = RecordingMailer::failing();
        let err = send_then_hold(&pending(), &mailer).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::Delivery(_))
        ));
        assert_eq!(err.to_string(), "Failed to send code. Try again.");
        assert!(!paths::pending_signup_file().exists());
    });
}

#[test]
#[serial]
fn successful_dispatch_holds_the_registration() {
    with_temp_home(|| {
        let mailer = RecordingMailer::new();
        let held = pending();
        send_then_hold(&held, &mailer).unwrap();

        assert!(paths::pending_signup_file().exists());
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], (held.email.clone(), held.code.clone()));
    });
}
