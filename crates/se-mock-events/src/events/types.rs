use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kinds of mock activity that can be sent
///
/// Wire names match the labels used by the activity form, including the two
/// gift variants that contain spaces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum EventType {
    #[serde(rename = "follow")]
    #[strum(serialize = "follow")]
    Follow,
    #[serde(rename = "subscriber")]
    #[strum(serialize = "subscriber")]
    Subscriber,
    #[serde(rename = "tip")]
    #[strum(serialize = "tip")]
    Tip,
    #[serde(rename = "cheer")]
    #[strum(serialize = "cheer")]
    Cheer,
    #[serde(rename = "raid")]
    #[strum(serialize = "raid")]
    Raid,
    #[serde(rename = "merch")]
    #[strum(serialize = "merch")]
    Merch,
    /// A batch of gifted subscriptions bought by one sender
    #[serde(rename = "community gift")]
    #[strum(serialize = "community gift")]
    CommunityGift,
    /// One recipient's share of a community gift
    #[serde(rename = "single community gift")]
    #[strum(serialize = "single community gift")]
    SingleCommunityGift,
}

impl EventType {
    /// Returns the wire name of the event type
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
