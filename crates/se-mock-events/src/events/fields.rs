//! Input fields offered for each event type
//!
//! This is declarative data for whatever renders the input form. The payload
//! builder does not read it; it applies its own fallbacks.

use serde::Serialize;

use super::types::EventType;

/// Input widget type for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
}

/// Pre-filled value for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Text(&'static str),
    Number(i64),
}

/// Describes one user-editable input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventField {
    /// Key into `EventFieldValues`
    pub id: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldDefault>,
}

/// The field list for one event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    pub event_type: EventType,
    pub fields: &'static [EventField],
}

const fn text(id: &'static str, label: &'static str) -> EventField {
    EventField {
        id,
        label,
        kind: FieldKind::Text,
        placeholder: None,
        default_value: None,
    }
}

const fn number(id: &'static str, label: &'static str, default: i64) -> EventField {
    EventField {
        id,
        label,
        kind: FieldKind::Number,
        placeholder: None,
        default_value: Some(FieldDefault::Number(default)),
    }
}

impl EventField {
    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn default_text(mut self, default: &'static str) -> Self {
        self.default_value = Some(FieldDefault::Text(default));
        self
    }
}

const USERNAME: EventField = text("sender", "Username").placeholder("streamelements");
const SENDER: EventField = text("sender", "Sender").placeholder("streamelements");
const MESSAGE: EventField = text("message", "Message").placeholder("How are you today?");
const TIER: EventField = text("tier", "Tier").default_text("1000");

const FOLLOW_FIELDS: &[EventField] = &[USERNAME];
const SUBSCRIBER_FIELDS: &[EventField] = &[USERNAME, number("amount", "Months", 1), TIER];
const TIP_FIELDS: &[EventField] = &[USERNAME, number("amount", "Amount", 10), MESSAGE];
const CHEER_FIELDS: &[EventField] = &[USERNAME, number("amount", "Bits", 100), MESSAGE];
const RAID_FIELDS: &[EventField] = &[USERNAME, number("amount", "Viewers", 10)];
const MERCH_FIELDS: &[EventField] = &[USERNAME, number("amount", "Items", 1)];
const COMMUNITY_GIFT_FIELDS: &[EventField] = &[SENDER, number("amount", "Count", 5), TIER];
const SINGLE_COMMUNITY_GIFT_FIELDS: &[EventField] = &[
    SENDER,
    text("receiver", "Receiver").placeholder("someone"),
    TIER,
];

/// Field schema for every event type, in form order
pub static EVENT_CONFIGS: [EventConfig; 8] = [
    EventConfig {
        event_type: EventType::Follow,
        fields: FOLLOW_FIELDS,
    },
    EventConfig {
        event_type: EventType::Subscriber,
        fields: SUBSCRIBER_FIELDS,
    },
    EventConfig {
        event_type: EventType::Tip,
        fields: TIP_FIELDS,
    },
    EventConfig {
        event_type: EventType::Cheer,
        fields: CHEER_FIELDS,
    },
    EventConfig {
        event_type: EventType::Raid,
        fields: RAID_FIELDS,
    },
    EventConfig {
        event_type: EventType::Merch,
        fields: MERCH_FIELDS,
    },
    EventConfig {
        event_type: EventType::CommunityGift,
        fields: COMMUNITY_GIFT_FIELDS,
    },
    EventConfig {
        event_type: EventType::SingleCommunityGift,
        fields: SINGLE_COMMUNITY_GIFT_FIELDS,
    },
];

impl EventType {
    /// Returns the input fields shown for this event type
    pub fn fields(self) -> &'static [EventField] {
        match self {
            EventType::Follow => FOLLOW_FIELDS,
            EventType::Subscriber => SUBSCRIBER_FIELDS,
            EventType::Tip => TIP_FIELDS,
            EventType::Cheer => CHEER_FIELDS,
            EventType::Raid => RAID_FIELDS,
            EventType::Merch => MERCH_FIELDS,
            EventType::CommunityGift => COMMUNITY_GIFT_FIELDS,
            EventType::SingleCommunityGift => SINGLE_COMMUNITY_GIFT_FIELDS,
        }
    }
}
