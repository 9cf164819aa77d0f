use super::*;

// =============================================================
// login / registration
// =============================================================

#[test]
fn login_sends_fields_as_typed() {
    let creds = login("  ada  ", " pw ").unwrap();
    assert_eq!(creds.username, "  ada  ");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn registration_sends_username_as_typed() {
    let creds = registration(" ada", "secret", "secret").unwrap();
    assert_eq!(creds.username, " ada");
}

#[test]
fn login_rejects_blank_fields() {
    assert_eq!(login("", "pw"), Err(FILL_ALL_FIELDS));
    assert_eq!(login("   ", "pw"), Err(FILL_ALL_FIELDS));
    assert_eq!(login("ada", ""), Err(FILL_ALL_FIELDS));
}

#[test]
fn registration_mismatch_is_rejected() {
    assert_eq!(registration("ada", "secret-1", "secret-2"), Err("Passwords do not match!"));
}

#[test]
fn registration_accepts_matching_passwords() {
    let creds = registration("ada", "secret", "secret").unwrap();
    assert_eq!(creds, Credentials { username: "ada".into(), password: "secret".into() });
}

#[test]
fn registration_blank_checked_before_mismatch() {
    assert_eq!(registration("ada", "secret", ""), Err(FILL_ALL_FIELDS));
}

// =============================================================
// account changes
// =============================================================

#[test]
fn username_change_requires_three_chars() {
    assert_eq!(username_change("ab", "blue"), Err("Username must be at least 3 characters"));
    assert_eq!(username_change(" ab ", "blue"), Err("Username must be at least 3 characters"));
    let change = username_change(" abc ", " blue ").unwrap();
    assert_eq!(change.new_username, "abc");
    assert_eq!(change.security_answer, "blue");
}

#[test]
fn username_change_requires_answer() {
    assert_eq!(username_change("newname", "   "), Err(FILL_ALL_FIELDS));
}

#[test]
fn password_change_checks_in_order() {
    assert_eq!(password_change("", "longenough", "longenough", "a"), Err(FILL_ALL_FIELDS));
    assert_eq!(password_change("old", "longenough", "different1", "a"), Err("New passwords do not match"));
    assert_eq!(password_change("old", "short", "short", "a"), Err("New password must be at least 8 characters"));
}

#[test]
fn password_change_accepts_valid_input() {
    let change = password_change("old", "longenough", "longenough", " blue ").unwrap();
    assert_eq!(change.new_password, "longenough");
    assert_eq!(change.security_answer, "blue");
}

#[test]
fn security_answer_rules() {
    assert_eq!(security_answer("", "blue", "blue"), Err(FILL_ALL_FIELDS));
    assert_eq!(security_answer("Q?", "blue", "Blue"), Err("Answers do not match"));
    assert_eq!(security_answer("Q?", "b", "b"), Err("Answer must be at least 2 characters"));
    let ok = security_answer("Q?", " Blue ", "Blue").unwrap();
    assert_eq!(ok, SecurityAnswer { question: "Q?".into(), answer: "Blue".into() });
}
