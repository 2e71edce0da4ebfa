//! Sign-up validation command.

use shopease_storefront::{Confirmation, SignupForm};

/// Render the checklist and either the masked request body or the error toast.
///
/// # Errors
///
/// Returns an error if the request body cannot be serialized.
pub fn report(form: &SignupForm) -> Result<Vec<String>, serde_json::Error> {
    let mut lines = vec!["Password requirements:".to_string()];
    for check in form.password_checks() {
        let mark = if check.passed { "x" } else { " " };
        lines.push(format!("  [{mark}] {}", check.rule.label()));
    }

    let confirmation = match form.confirmation() {
        Confirmation::Empty => "empty",
        Confirmation::Matches => "matches",
        Confirmation::Mismatch => "does not match",
    };
    lines.push(format!("Confirmation: {confirmation}"));

    match form.validate() {
        Ok(request) => {
            let mut body = serde_json::to_value(&request)?;
            if let Some(password) = body.get_mut("password") {
                *password = serde_json::Value::from("********");
            }
            lines.push(serde_json::to_string_pretty(&body)?);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Sign-up form rejected");
            lines.push(e.user_message());
        }
    }

    Ok(lines)
}

/// Validate the given fields and print the report.
///
/// # Errors
///
/// Returns an error if the request body cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn run(
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    accept_terms: bool,
) -> Result<(), serde_json::Error> {
    let form = SignupForm::new(name, email, password, confirm_password, accept_terms);
    for line in report(&form)? {
        println!("{line}");
    }
    Ok(())
}
