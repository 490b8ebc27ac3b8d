/*!
    Timestamp types for media timing.
*/

use std::time::Duration;

use crate::rescale::{Rounding, rescale, rescale_timestamp};
use crate::Rational;

/**
    Denominator of the library's well-known high-resolution time base.

    One tick of this base is one microsecond.
*/
pub const TIME_BASE: i32 = 1_000_000;

/**
    The library's well-known high-resolution time base, 1/1,000,000.

    Collaborators that need a default time base before a stream declares its
    own use this one.
*/
pub const TIME_BASE_Q: Rational = Rational {
    num: 1,
    den: TIME_BASE,
};

/// Nanosecond time base used to convert to and from [`Duration`].
const NANOS_Q: Rational = Rational {
    num: 1,
    den: 1_000_000_000,
};

/**
    Presentation timestamp in time_base units.

    This is the raw timestamp value from the media stream. To convert to
    a meaningful duration, you need the stream's time base.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pts(pub i64);

impl Pts {
    /**
        Convert this PTS to a Duration using the given time base.

        The conversion goes through exact 128-bit rescaling, not floating
        point. Negative PTS values are clamped to zero; values beyond the
        range of 64-bit nanoseconds saturate to `Duration::MAX`.

        # Panics

        Panics if `time_base.den` is zero.
    */
    #[inline]
    pub fn to_duration(self, time_base: Rational) -> Duration {
        if self.0 <= 0 {
            return Duration::ZERO;
        }
        match rescale(self.0, time_base, NANOS_Q, Rounding::Nearest) {
            i64::MIN => Duration::MAX,
            nanos if nanos <= 0 => Duration::ZERO,
            nanos => Duration::from_nanos(nanos as u64),
        }
    }

    /**
        Create a PTS from a Duration using the given time base.

        Rounds to the nearest tick.

        # Panics

        Panics if `time_base.num` is zero.
    */
    #[inline]
    pub fn from_duration(duration: Duration, time_base: Rational) -> Self {
        let nanos = duration.as_nanos().min(i64::MAX as u128) as i64;
        Self(rescale_timestamp(nanos, NANOS_Q, time_base))
    }

    /**
        Convert this PTS from one time base to another, rounding to nearest.

        # Panics

        Panics if `to.num` or `from.den` is zero.
    */
    #[inline]
    pub fn rescale(self, from: Rational, to: Rational) -> Self {
        Self(rescale_timestamp(self.0, from, to))
    }
}

impl From<i64> for Pts {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Pts> for i64 {
    fn from(pts: Pts) -> Self {
        pts.0
    }
}

/**
    Duration in time_base units.

    Similar to Pts but semantically represents a duration rather than a point in time.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaDuration(pub i64);

impl MediaDuration {
    /**
        Convert this duration to a std Duration using the given time base.

        The conversion goes through exact 128-bit rescaling, not floating
        point. Negative values are clamped to zero; values beyond the range
        of 64-bit nanoseconds saturate to `Duration::MAX`.

        # Panics

        Panics if `time_base.den` is zero.
    */
    #[inline]
    pub fn to_duration(self, time_base: Rational) -> Duration {
        if self.0 <= 0 {
            return Duration::ZERO;
        }
        match rescale(self.0, time_base, NANOS_Q, Rounding::Nearest) {
            i64::MIN => Duration::MAX,
            nanos if nanos <= 0 => Duration::ZERO,
            nanos => Duration::from_nanos(nanos as u64),
        }
    }

    /**
        Create a MediaDuration from a std Duration using the given time base.

        Rounds to the nearest tick.

        # Panics

        Panics if `time_base.num` is zero.
    */
    #[inline]
    pub fn from_duration(duration: Duration, time_base: Rational) -> Self {
        let nanos = duration.as_nanos().min(i64::MAX as u128) as i64;
        Self(rescale_timestamp(nanos, NANOS_Q, time_base))
    }

    /**
        Convert this duration from one time base to another, rounding to
        nearest.

        # Panics

        Panics if `to.num` or `from.den` is zero.
    */
    #[inline]
    pub fn rescale(self, from: Rational, to: Rational) -> Self {
        Self(rescale_timestamp(self.0, from, to))
    }
}

impl From<i64> for MediaDuration {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MediaDuration> for i64 {
    fn from(duration: MediaDuration) -> Self {
        duration.0
    }
}

// Ensure timestamps are Send + Sync
static_assertions::assert_impl_all!(Pts: Send, Sync);
static_assertions::assert_impl_all!(MediaDuration: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    const TB_1_1000: Rational = Rational { num: 1, den: 1000 };
    const TB_1_90000: Rational = Rational { num: 1, den: 90000 };
    const TB_1_48000: Rational = Rational { num: 1, den: 48000 };

    #[test]
    fn pts_to_duration_milliseconds() {
        // 1000 ticks at 1/1000 = 1 second
        let pts = Pts(1000);
        let dur = pts.to_duration(TB_1_1000);
        assert_eq!(dur, Duration::from_secs(1));
    }

    #[test]
    fn pts_to_duration_mpeg_ts() {
        // 90000 ticks at 1/90000 = 1 second
        let pts = Pts(90000);
        let dur = pts.to_duration(TB_1_90000);
        assert_eq!(dur, Duration::from_secs(1));
    }

    #[test]
    fn pts_to_duration_audio() {
        // 48000 ticks at 1/48000 = 1 second
        let pts = Pts(48000);
        let dur = pts.to_duration(TB_1_48000);
        assert_eq!(dur, Duration::from_secs(1));
    }

    #[test]
    fn pts_to_duration_rounds_fractional_nanos() {
        // 1/90000 s = 11111.1.. ns, rounds to 11111
        let pts = Pts(1);
        assert_eq!(pts.to_duration(TB_1_90000), Duration::from_nanos(11111));
    }

    #[test]
    fn pts_zero() {
        let pts = Pts(0);
        assert_eq!(pts.to_duration(TB_1_1000), Duration::ZERO);
    }

    #[test]
    fn pts_negative_clamps_to_zero() {
        let pts = Pts(-100);
        assert_eq!(pts.to_duration(TB_1_1000), Duration::ZERO);
    }

    #[test]
    fn pts_from_duration() {
        let dur = Duration::from_secs(1);
        let pts = Pts::from_duration(dur, TB_1_1000);
        assert_eq!(pts.0, 1000);
    }

    #[test]
    fn pts_from_duration_rounds_to_nearest_tick() {
        // 1.6 ms at 1/1000 rounds up to 2 ticks
        let pts = Pts::from_duration(Duration::from_micros(1600), TB_1_1000);
        assert_eq!(pts.0, 2);
    }

    #[test]
    fn pts_round_trip() {
        let original = Duration::from_millis(1500);
        let pts = Pts::from_duration(original, TB_1_1000);
        let back = pts.to_duration(TB_1_1000);
        assert_eq!(back, original);
    }

    #[test]
    fn pts_rescale_between_time_bases() {
        assert_eq!(Pts(90000).rescale(TB_1_90000, TB_1_48000), Pts(48000));
        assert_eq!(Pts(3003).rescale(TB_1_90000, TB_1_1000), Pts(33));
    }

    #[test]
    fn pts_rescale_to_default_time_base() {
        // One second of 90 kHz ticks is one million microseconds
        assert_eq!(Pts(90000).rescale(TB_1_90000, TIME_BASE_Q), Pts(1_000_000));
        assert_eq!(TIME_BASE_Q.den, TIME_BASE);
    }

    #[test]
    fn media_duration_to_duration() {
        let md = MediaDuration(2000);
        let dur = md.to_duration(TB_1_1000);
        assert_eq!(dur, Duration::from_secs(2));
    }

    #[test]
    fn media_duration_from_duration() {
        let dur = Duration::from_secs(2);
        let md = MediaDuration::from_duration(dur, TB_1_1000);
        assert_eq!(md.0, 2000);
    }

    #[test]
    fn media_duration_rescale() {
        assert_eq!(
            MediaDuration(48000).rescale(TB_1_48000, TB_1_90000),
            MediaDuration(90000)
        );
    }

    #[test]
    fn pts_ordering() {
        assert!(Pts(100) < Pts(200));
        assert!(Pts(200) > Pts(100));
        assert_eq!(Pts(100), Pts(100));
    }

    #[test]
    fn media_duration_negative_clamps_to_zero() {
        let md = MediaDuration(-50);
        assert_eq!(md.to_duration(TB_1_1000), Duration::ZERO);
    }
}
