//! Form precondition checks.
//!
//! Each validator returns the normalized input or the exact toast message to
//! show. Nothing here touches the network; a failed check means no request is
//! issued.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

const MIN_USERNAME_CHARS: usize = 3;
const MIN_PASSWORD_CHARS: usize = 8;
const MIN_ANSWER_CHARS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsernameChange {
    pub new_username: String,
    pub security_answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub security_answer: String,
}

/// A question/answer pair ready to be stored. The answer is trimmed but not
/// yet lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityAnswer {
    pub question: String,
    pub answer: String,
}

fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| v.is_empty())
}

/// # Errors
///
/// Fails when either field is empty. A whitespace-only username counts as
/// empty; otherwise the username is sent as typed.
pub fn login(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if any_blank(&[username.trim(), password]) {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Fails on an empty field or when the confirmation differs.
pub fn registration(username: &str, password: &str, confirm: &str) -> Result<Credentials, &'static str> {
    if any_blank(&[username.trim(), password, confirm]) {
        return Err(FILL_ALL_FIELDS);
    }
    if password != confirm {
        return Err("Passwords do not match!");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Fails on an empty field or a username shorter than three characters.
pub fn username_change(new_username: &str, security_answer: &str) -> Result<UsernameChange, &'static str> {
    let new_username = new_username.trim();
    let security_answer = security_answer.trim();
    if any_blank(&[new_username, security_answer]) {
        return Err(FILL_ALL_FIELDS);
    }
    if new_username.chars().count() < MIN_USERNAME_CHARS {
        return Err("Username must be at least 3 characters");
    }
    Ok(UsernameChange { new_username: new_username.to_owned(), security_answer: security_answer.to_owned() })
}

/// # Errors
///
/// Fails on an empty field, a confirmation mismatch, or a new password
/// shorter than eight characters, in that order.
pub fn password_change(
    current_password: &str,
    new_password: &str,
    confirm: &str,
    security_answer: &str,
) -> Result<PasswordChange, &'static str> {
    let security_answer = security_answer.trim();
    if any_blank(&[current_password, new_password, confirm, security_answer]) {
        return Err(FILL_ALL_FIELDS);
    }
    if new_password != confirm {
        return Err("New passwords do not match");
    }
    if new_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("New password must be at least 8 characters");
    }
    Ok(PasswordChange {
        current_password: current_password.to_owned(),
        new_password: new_password.to_owned(),
        security_answer: security_answer.to_owned(),
    })
}

/// # Errors
///
/// Fails on an empty field, an answer mismatch, or an answer shorter than two
/// characters.
pub fn security_answer(question: &str, answer: &str, confirm: &str) -> Result<SecurityAnswer, &'static str> {
    let answer = answer.trim();
    let confirm = confirm.trim();
    if any_blank(&[question, answer, confirm]) {
        return Err(FILL_ALL_FIELDS);
    }
    if answer != confirm {
        return Err("Answers do not match");
    }
    if answer.chars().count() < MIN_ANSWER_CHARS {
        return Err("Answer must be at least 2 characters");
    }
    Ok(SecurityAnswer { question: question.to_owned(), answer: answer.to_owned() })
}
