//! Auth Guard
//!
//! Condition and placeholder for routes that need a signed-in viewer.

use leptos::prelude::*;

/// Route condition: `None` while the stored token is still being checked
pub fn auth_gate(restoring: bool, authenticated: bool) -> Option<bool> {
    if restoring {
        None
    } else {
        Some(authenticated)
    }
}

/// Shown on a protected route until the session restore settles
#[component]
pub fn AuthPending() -> impl IntoView {
    view! {
        <div class="auth-check">
            <h2>"Checking magical credentials..."</h2>
            <p>"Please wait while we verify your access"</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, None)]
    #[case(true, true, None)]
    #[case(false, false, Some(false))]
    #[case(false, true, Some(true))]
    fn test_auth_gate(#[case] restoring: bool, #[case] authenticated: bool, #[case] expected: Option<bool>) {
        assert_eq!(auth_gate(restoring, authenticated), expected);
    }
}
