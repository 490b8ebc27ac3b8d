/*!
    Rational time bases and exact timestamp rescaling for media pipelines.

    Media timestamps are integers scaled by a rational time base (e.g.
    1/90000 second per tick for MPEG-TS, 1/48000 for 48 kHz audio). Moving
    a timestamp between streams means converting between time bases, and
    doing that in floating point silently loses precision. This crate keeps
    everything in integer arithmetic: fractions stay exact, and every
    product that feeds a rounding or comparison decision is formed in
    128-bit intermediates so in-range 64-bit inputs never overflow.

    # Core Types

    - [`Rational`] - Exact fractions for time bases and frame rates
    - [`Rounding`] - Rounding policies for rescaling
    - [`Pts`] and [`MediaDuration`] - Timestamps in time_base units

    # Operations

    - [`rescale`] - Convert a tick count between time bases under a rounding policy
    - [`rescale_pass_minmax`] - Same, preserving the min/max sentinel timestamps
    - [`rescale_timestamp`] - Convenience conversion rounding to nearest
    - [`compare_timestamps`] - Exact comparison across time bases

    # Constants

    - [`TIME_BASE_Q`] - The well-known 1/1,000,000 (microsecond) time base

    # Error Handling

    - [`ParseRationalError`] - Failure parsing a rational from a string

    Everything is a pure, synchronous function over its arguments; there is
    no shared state and no synchronization requirement for concurrent use.
*/

mod error;
mod rational;
mod rescale;
mod timestamp;

pub use error::ParseRationalError;
pub use rational::Rational;
pub use rescale::{Rounding, compare_timestamps, rescale, rescale_pass_minmax, rescale_timestamp};
pub use timestamp::{MediaDuration, Pts, TIME_BASE, TIME_BASE_Q};
