use super::*;

// Not a security boundary; the broker credentials are the real secret.
pub(super) const LOGIN_USER: &str = "Rith";
pub(super) const LOGIN_PASS: &str = "1234";

impl Dashboard {
    /// Gates the dashboard view behind an exact literal match.
    ///
    /// A successful login triggers one initial projection of the generator
    /// belief state, phrased as a device report. A failed login shows a
    /// localized message; there is no lockout or attempt counter.
    pub fn login(&mut self, username: &str, password: &str, now: Instant) -> bool {
        if username == LOGIN_USER && password == LOGIN_PASS {
            self.authenticated = true;
            self.user_line = format!("User ID: {LOGIN_USER}");
            self.login_message = None;
            let report = self.generator.report();
            self.update_generator_status(report, now);
            true
        } else {
            if let Some(text) = label_text(LabelKey::LoginInvalid, self.language) {
                self.login_message = Some((text.to_string(), NotifyKind::Error));
            }
            false
        }
    }
}
