pub mod login;
pub mod register;

fn valid_email(email: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

/// Server side minimum, checked client side to save a round trip.
const PASSWORD_MIN_LEN: usize = 6;

fn valid_password(password: &str) -> bool {
    password.len() >= PASSWORD_MIN_LEN
}
