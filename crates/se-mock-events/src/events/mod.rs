mod fields;
mod payload;
mod types;
mod values;

pub use fields::{EventConfig, EventField, FieldDefault, FieldKind, EVENT_CONFIGS};
pub use payload::{
    build_event_payload, ActivityGroupSource, EventData, EventPayload, MerchItem, PayloadBuilder,
    PayloadType, RandomActivityGroup,
};
pub use types::EventType;
pub use values::{EventFieldValues, FieldValue};
