use super::*;

/// Severity tier derived from a voltage reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Error,
}

/// Classifies a voltage reading into its severity tier.
///
/// The error band is checked first, so the warn band effectively covers
/// `[190, 200)`. A non-numeric reading (NaN) fails every comparison and
/// lands in `Ok`, matching the device dashboard's established behavior.
#[must_use]
pub fn classify_voltage(volts: f64) -> Severity {
    if volts > 250.0 || volts < 190.0 {
        Severity::Error
    } else if volts < 200.0 {
        Severity::Warn
    } else {
        Severity::Ok
    }
}

impl Dashboard {
    /// Applies a voltage reading: verbatim text plus unit, severity tier,
    /// and a 1.2 s card pulse. A newer pulse deadline replaces any pending
    /// one; pulses never queue or extend.
    pub fn apply_voltage(&mut self, raw: &str, now: Instant) {
        self.voltage_text = format!("{raw} V");
        let volts = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.voltage_severity = Some(classify_voltage(volts));
        self.voltage_pulse_until = Some(now + PULSE_DURATION);
    }

    /// Power-source field, written verbatim with no classification.
    pub fn apply_status(&mut self, raw: &str) {
        self.source_text = raw.to_string();
    }

    /// Backup field, written verbatim with no classification.
    pub fn apply_backup(&mut self, raw: &str) {
        self.backup_text = raw.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries_are_exact() {
        assert_eq!(classify_voltage(189.99), Severity::Error);
        assert_eq!(classify_voltage(190.0), Severity::Warn);
        assert_eq!(classify_voltage(199.99), Severity::Warn);
        assert_eq!(classify_voltage(200.0), Severity::Ok);
        assert_eq!(classify_voltage(250.0), Severity::Ok);
        assert_eq!(classify_voltage(250.01), Severity::Error);
    }

    #[test]
    fn non_numeric_readings_classify_ok() {
        assert_eq!(classify_voltage(f64::NAN), Severity::Ok);
    }
}
