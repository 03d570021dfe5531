//! Test fixtures
//!
//! Pre-built test data and fixed time/activity group sources.

use chrono::{DateTime, TimeZone, Utc};

use crate::api::ChannelInfo;
use crate::events::{ActivityGroupSource, PayloadBuilder};
use crate::time::FixedClock;

/// Activity group handed out by `FixedActivityGroup::default()`
pub const FIXED_GROUP: &str = "4242424";

/// Activity group source that always returns the same id
#[derive(Debug, Clone)]
pub struct FixedActivityGroup(pub String);

impl Default for FixedActivityGroup {
    fn default() -> Self {
        Self(FIXED_GROUP.to_string())
    }
}

impl ActivityGroupSource for FixedActivityGroup {
    fn next_group(&self) -> String {
        self.0.clone()
    }
}

/// 2024-06-15 12:00:00 UTC
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Payload builder pinned to `fixed_time()` and `FIXED_GROUP`
pub fn fixed_builder() -> PayloadBuilder<FixedClock, FixedActivityGroup> {
    PayloadBuilder::with_sources(FixedClock::new(fixed_time()), FixedActivityGroup::default())
}

/// A typical channel lookup result
pub fn sample_channel_info() -> ChannelInfo {
    ChannelInfo {
        id: "5b2e2007760aeb7729487dab".to_string(),
        username: "teststreamer".to_string(),
        display_name: "TestStreamer".to_string(),
        profile_pic_url: "https://cdn.example.com/avatar.png".to_string(),
    }
}
