//! Newsletter sign-up acknowledgement. Nothing is sent anywhere.

pub fn confirmation(email: &str) -> String {
    format!("Thank you for subscribing with {}!", email)
}
