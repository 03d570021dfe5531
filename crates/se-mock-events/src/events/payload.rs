//! Mock event payload construction
//!
//! Turns an event type and a handful of form values into the Twitch-shaped
//! envelope the mock activity endpoint accepts.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::EventType;
use super::values::{EventFieldValues, FieldValue};
use crate::time::{to_iso_millis, Clock, SystemClock};

const PROVIDER: &str = "twitch";
const PROVIDER_ID: &str = "100135110";
const DEFAULT_AVATAR: &str =
    "https://cdn.streamelements.com/assets/dashboard/my-overlays/overlay-default-preview-2.jpg";

const DEFAULT_SENDER: &str = "streamelements";
const DEFAULT_AMOUNT: i64 = 1;
const DEFAULT_MESSAGE: &str = "How are you today?";
const DEFAULT_TIER: &str = "1000";
const DEFAULT_RECEIVER: &str = "someone";

/// Upper bound (exclusive) for generated activity groups
const ACTIVITY_GROUP_RANGE: f64 = 9_000_000.0;

/// The `type` discriminant carried by a payload
///
/// Differs from `EventType` for the gift variants: a community gift is sent as
/// `communityGiftPurchase` and a single community gift as `subscriber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayloadType {
    Follow,
    Subscriber,
    Tip,
    Cheer,
    Raid,
    Merch,
    CommunityGiftPurchase,
}

/// A line item in a merch payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchItem {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

impl MerchItem {
    fn new(name: &str, price: u32, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            price,
            quantity,
        }
    }
}

/// The nested `data` object of a payload
///
/// Fields that a given payload type does not carry are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub provider_id: String,
    pub username: FieldValue,
    pub display_name: FieldValue,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gifted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MerchItem>>,
}

impl EventData {
    fn viewer(name: &FieldValue) -> Self {
        Self {
            provider_id: PROVIDER_ID.to_string(),
            username: name.clone(),
            display_name: name.clone(),
            avatar: DEFAULT_AVATAR.to_string(),
            amount: None,
            gifted: None,
            sender: None,
            tier: None,
            message: None,
            items: None,
        }
    }
}

/// A complete mock event, ready to be posted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub provider: String,
    pub created_at: String,
    pub is_mock: bool,
    pub flagged: bool,
    #[serde(rename = "type")]
    pub kind: PayloadType,
    /// Only set for community gift purchases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_group: Option<String>,
    pub data: EventData,
}

/// Source of activity group ids for community gifts sent without one
pub trait ActivityGroupSource: Send + Sync {
    fn next_group(&self) -> String;
}

/// Random numeric-string activity groups
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomActivityGroup;

impl ActivityGroupSource for RandomActivityGroup {
    fn next_group(&self) -> String {
        let value: f64 = rand::rng().random_range(0.0..ACTIVITY_GROUP_RANGE);
        value.to_string()
    }
}

/// Resolved form values after fallbacks
///
/// Values keep the JSON type they were given in, so a numeric tier is sent
/// as a number.
struct Resolved {
    sender: FieldValue,
    amount: FieldValue,
    message: FieldValue,
    tier: FieldValue,
    receiver: FieldValue,
}

impl Resolved {
    fn from_values(values: &EventFieldValues) -> Self {
        Self {
            sender: values.value_or("sender", DEFAULT_SENDER),
            amount: values.value_or("amount", DEFAULT_AMOUNT),
            message: values.value_or("message", DEFAULT_MESSAGE),
            tier: values.value_or("tier", DEFAULT_TIER),
            receiver: values.value_or("receiver", DEFAULT_RECEIVER),
        }
    }
}

/// Builds payloads using the given clock and activity group source
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder<C: Clock = SystemClock, G: ActivityGroupSource = RandomActivityGroup> {
    clock: C,
    groups: G,
}

impl PayloadBuilder {
    /// Creates a builder backed by the system clock and random activity groups
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, G: ActivityGroupSource> PayloadBuilder<C, G> {
    /// Creates a builder with custom time and activity group sources
    pub fn with_sources(clock: C, groups: G) -> Self {
        Self { clock, groups }
    }

    /// Builds the payload for `event_type`
    ///
    /// Missing, empty or zero values fall back to fixed defaults before the
    /// type-specific shape is assembled. `activity_group` is only used for
    /// community gifts.
    pub fn build(
        &self,
        event_type: EventType,
        values: &EventFieldValues,
        activity_group: Option<&str>,
    ) -> EventPayload {
        let Resolved {
            sender,
            amount,
            message,
            tier,
            receiver,
        } = Resolved::from_values(values);

        let mut group = None;
        let mut data = EventData::viewer(&sender);

        let kind = match event_type {
            EventType::Follow => PayloadType::Follow,
            EventType::Subscriber => {
                data.amount = Some(amount);
                data.gifted = Some(false);
                data.tier = Some(tier);
                PayloadType::Subscriber
            }
            EventType::Tip => {
                data.amount = Some(amount);
                data.message = Some(message);
                PayloadType::Tip
            }
            EventType::Cheer => {
                data.amount = Some(amount);
                data.message = Some(message);
                PayloadType::Cheer
            }
            EventType::Raid => {
                data.amount = Some(amount);
                PayloadType::Raid
            }
            EventType::Merch => {
                data.amount = Some(amount);
                data.items = Some(vec![
                    MerchItem::new("Hat", 5, 1),
                    MerchItem::new("Shirt", 5, 1),
                ]);
                PayloadType::Merch
            }
            EventType::CommunityGift => {
                data.amount = Some(amount);
                data.gifted = Some(true);
                data.tier = Some(tier);
                group = Some(
                    activity_group
                        .filter(|g| !g.is_empty())
                        .map_or_else(|| self.groups.next_group(), str::to_string),
                );
                PayloadType::CommunityGiftPurchase
            }
            EventType::SingleCommunityGift => {
                data = EventData::viewer(&receiver);
                data.amount = Some(FieldValue::from(1));
                data.gifted = Some(true);
                data.sender = Some(sender);
                data.tier = Some(tier);
                PayloadType::Subscriber
            }
        };

        EventPayload {
            provider: PROVIDER.to_string(),
            created_at: to_iso_millis(self.clock.now()),
            is_mock: true,
            flagged: false,
            kind,
            activity_group: group,
            data,
        }
    }
}

/// Builds a payload with the system clock and a random activity group fallback
pub fn build_event_payload(
    event_type: EventType,
    values: &EventFieldValues,
    activity_group: Option<&str>,
) -> EventPayload {
    PayloadBuilder::new().build(event_type, values, activity_group)
}
