use crate::login_status::LoginStatus::{Accepted, Invalid, Other, Refused};

/// Interpretation of the numeric status sent back by the login route.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum LoginStatus {
    /// The submission itself was invalid: the form has to be reset.
    Invalid,
    /// The credentials were refused, a message explains why.
    Refused,
    Accepted,
    /// Any status above 1. Its message is shown but nothing else happens.
    Other(i64),
}

impl From<i64> for LoginStatus {
    fn from(status: i64) -> Self {
        match status {
            status if status < 0 => Invalid,
            0 => Refused,
            1 => Accepted,
            status => Other(status),
        }
    }
}
