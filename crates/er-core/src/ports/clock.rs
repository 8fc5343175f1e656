use chrono::{DateTime, Utc};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        Clock {}
        impl ClockPort for Clock {
            fn now_ms(&self) -> i64;
        }
    }

    #[test]
    fn now_is_derived_from_now_ms() {
        let mut clock = MockClock::new();
        clock.expect_now_ms().times(1).return_const(1_709_283_600_123_i64);

        let now = clock.now();

        assert_eq!(now.to_rfc3339(), "2024-03-01T09:00:00.123+00:00");
    }
}
