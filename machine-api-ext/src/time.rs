use k8s_openapi::jiff::{SignedDuration, Timestamp};

use super::*;

const SECONDS_PER_DAY: f64 = 86_400.0;

pub trait TimeExt: Sized {
    fn now() -> Self;
    fn days_since(&self, earlier: &Self) -> f64;
    fn checked_sub_days(&self, days: f64) -> Option<Self>;
}

impl TimeExt for metav1::Time {
    /// Create a metav1::Time set to the current UTC time.
    ///
    /// # Examples
    ///
    /// ```
    /// use machine_api_ext::{metav1, TimeExt as _};
    /// let now = metav1::Time::now();
    /// ```
    fn now() -> Self {
        Self(Timestamp::now())
    }

    /// Fractional days elapsed from `earlier` to `self`; negative when
    /// `earlier` lies in the future.
    fn days_since(&self, earlier: &Self) -> f64 {
        self.0.duration_since(earlier.0).as_secs_f64() / SECONDS_PER_DAY
    }

    /// The point in time `days` fractional days before `self`, or `None`
    /// when that is not representable.
    fn checked_sub_days(&self, days: f64) -> Option<Self> {
        let duration = SignedDuration::try_from_secs_f64(days * SECONDS_PER_DAY).ok()?;
        self.0.checked_sub(duration).ok().map(Self)
    }
}
