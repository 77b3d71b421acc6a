//! Property-Based Tests for the Easter Folly rules
//!
//! Uses `proptest` to check the invariants the host relies on:
//!   - purge conserves quantity and converts every expiring stack
//!   - containers without expiring stacks are left exactly as they were
//!   - a single-field update touches only that field
//!   - an armed override reverts to the byte-identical original

use std::collections::HashMap;

use proptest::prelude::*;

use folly_core::config::{GiftConfig, ItemNames};
use folly_core::expiry::ExpiryProcessor;
use folly_core::gift::{GiftAttempt, GiftOutcome, GiftOverrideController};
use folly_core::host::{ActiveHand, DialogueSource, RelationshipTable};
use folly_core::record::{split_fields, update_entry, FieldUpdate};
use folly_core::scheduler::TickScheduler;
use folly_core::types::{CalendarDate, Container, FriendshipData, ItemId, ItemStack, Season};

const EGG: &str = "Chocolate Egg";

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_slot() -> impl Strategy<Value = Option<ItemStack>> {
    prop_oneof![
        Just(None),
        (1..1000u32).prop_map(|q| Some(ItemStack::new(ItemId(900), EGG, q))),
        (1..1000u32, prop_oneof![Just("Sugar"), Just("Parsnip"), Just("Chocolate Bar")])
            .prop_map(|(q, name)| Some(ItemStack::new(ItemId(7), name, q))),
    ]
}

fn arb_container() -> impl Strategy<Value = Container> {
    prop::collection::vec(arb_slot(), 0..36).prop_map(Container::with_slots)
}

/// Record fields never contain the delimiter.
fn arb_field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?'-]{0,24}"
}

fn arb_record(min_fields: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_field(), min_fields..12)
}

fn processor() -> ExpiryProcessor {
    ExpiryProcessor::new(EGG, "Chocolate Bar", CalendarDate::new(1, Season::Summer))
}

// ---------------------------------------------------------------------------
// Property: purge conserves quantity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn purge_conserves_quantity(mut container in arb_container()) {
        let eggs_before = container.count_named(EGG);
        let bars_before = container.count_named("Chocolate Bar");
        let others_before: Vec<ItemStack> = container
            .stacks()
            .filter(|s| s.name != EGG)
            .cloned()
            .collect();

        let purge = processor().purge_container(&mut container, ItemId(50));

        prop_assert_eq!(container.count_named(EGG), 0);
        prop_assert_eq!(container.count_named("Chocolate Bar"), bars_before + eggs_before);

        let others_after: Vec<ItemStack> = container
            .stacks()
            .filter(|s| s.name != EGG && s.id != ItemId(50))
            .cloned()
            .collect();
        prop_assert_eq!(others_after, others_before);

        match purge {
            Some(p) => {
                prop_assert_eq!(u64::from(p.total), eggs_before);
                let last = container.slots.last().cloned().flatten();
                prop_assert_eq!(last, Some(ItemStack::new(ItemId(50), "Chocolate Bar", p.total)));
            }
            None => {
                prop_assert_eq!(eggs_before, 0);
            }
        }
    }

    #[test]
    fn purge_without_eggs_is_identity(slots in prop::collection::vec(
        prop_oneof![
            Just(None),
            (1..1000u32).prop_map(|q| Some(ItemStack::new(ItemId(245), "Sugar", q))),
        ],
        0..36,
    )) {
        let mut container = Container::with_slots(slots);
        let before = container.clone();
        prop_assert!(processor().purge_container(&mut container, ItemId(50)).is_none());
        prop_assert_eq!(container, before);
    }
}

// ---------------------------------------------------------------------------
// Property: single-field update touches only that field
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn field_two_update_preserves_other_fields(fields in arb_record(3), line in arb_field()) {
        let old = fields.join("/");
        let new = update_entry(&old, &[Some(line.as_str())], &FieldUpdate::at(2))
            .expect("record has at least three fields");

        let before = split_fields(&old, '/');
        let after = split_fields(&new, '/');
        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(after[2], line.as_str());
        for i in (0..before.len()).filter(|&i| i != 2) {
            prop_assert_eq!(after[i], before[i]);
        }
    }

    #[test]
    fn out_of_range_update_always_fails(fields in prop::collection::vec(arb_field(), 1..3)) {
        let old = fields.join("/");
        prop_assert!(update_entry(&old, &[Some("x")], &FieldUpdate::at(fields.len())).is_err());
    }
}

// ---------------------------------------------------------------------------
// Property: override reverts byte for byte
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Table {
    records: HashMap<String, String>,
    line: String,
}

impl RelationshipTable for Table {
    fn record(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }
    fn set_record(&mut self, key: &str, value: String) {
        self.records.insert(key.to_string(), value);
    }
}

impl ActiveHand for Table {
    fn active_item_mut(&mut self) -> Option<&mut ItemStack> {
        None
    }
}

impl DialogueSource for Table {
    fn line(&self, _key: &str) -> Option<String> {
        Some(self.line.clone())
    }
}

proptest! {
    #[test]
    fn override_reverts_exactly(fields in arb_record(3), line in "[a-z ]{1,20}") {
        let original = fields.join("/");
        let mut table = Table { line, ..Table::default() };
        table.records.insert("Abigail".to_string(), original.clone());

        let mut ctl = GiftOverrideController::new(GiftConfig::default(), &ItemNames::default());
        let mut scheduler = TickScheduler::new();
        let attempt = GiftAttempt {
            recipient: "Abigail".to_string(),
            gift: EGG.to_string(),
            recipient_accepts: true,
            friendship: Some(FriendshipData::default()),
        };

        let outcome = ctl.on_before_gift_given(&attempt, &mut table, &mut scheduler)
            .expect("record is long enough");
        prop_assert_eq!(outcome, GiftOutcome::Armed);
        prop_assert_eq!(scheduler.take_due().len(), 1);
        ctl.on_tick(&mut table);
        prop_assert_eq!(&table.records["Abigail"], &original);
    }
}
