use serde::Deserialize;

pub const DEMO_EMAIL: &str = "demo@example.com";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub code: String,
    pub email: String,
}

/// Demo-only gate: a plain comparison against one configured access code.
#[derive(Clone, Debug)]
pub struct DemoCredentials {
    access_code: String,
}

impl DemoCredentials {
    pub fn new(access_code: impl Into<String>) -> Self {
        DemoCredentials {
            access_code: access_code.into(),
        }
    }

    pub fn access_code(&self) -> &str {
        &self.access_code
    }

    pub fn accepts(&self, form: &LoginForm) -> bool {
        form.code == self.access_code && !form.email.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(code: &str, email: &str) -> LoginForm {
        LoginForm {
            code: code.into(),
            email: email.into(),
        }
    }

    #[test]
    fn accepts_code_with_any_email() {
        let credentials = DemoCredentials::new("DEMO2024");
        assert!(credentials.accepts(&form("DEMO2024", DEMO_EMAIL)));
        assert!(credentials.accepts(&form("DEMO2024", "someone@else.bg")));
    }

    #[test]
    fn rejects_wrong_code_or_blank_email() {
        let credentials = DemoCredentials::new("DEMO2024");
        assert!(!credentials.accepts(&form("demo2024", DEMO_EMAIL)));
        assert!(!credentials.accepts(&form("DEMO2024", "   ")));
        assert!(!credentials.accepts(&form("", "")));
    }
}
