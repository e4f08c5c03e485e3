use std::str::FromStr;
use std::time::Duration;

/// Identification header sent with every article request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Operational settings for the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Whole-request timeout. `None` leaves the client default (no timeout).
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Duration given on the command line, e.g. `30s`, `1m`, `1h15m30s`.
/// A bare number is read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_value = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    'd' => total_seconds += num * 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
                has_value = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        if !current_number.is_empty() {
            let num = current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total_seconds += num;
            has_value = true;
        }

        if !has_value {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}
