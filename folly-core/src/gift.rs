//! Gift dialogue override — a one-tick swap of a recipient's gift-taste line.
//!
//! When an Easter item is about to be given, the recipient's gift-taste
//! record gets a unique localized line written into its dialogue field, so
//! the host shows that line for this one gift. On the next tick the exact
//! original record is written back.
//!
//! ```text
//!            on_before_gift_given              on_tick
//!   Idle ─────────────────────────► Armed ───────────────► Idle
//!                (capture original,          (take pending,
//!                 write override,             restore original)
//!                 schedule revert)
//! ```
//!
//! Only one override can be in flight. A second arm attempt while one is
//! pending is refused so the captured original is never overwritten.

use tracing::{debug, warn};

use crate::config::{GiftConfig, ItemNames};
use crate::error::{FollyError, Result};
use crate::host::{GiftHost, RelationshipTable};
use crate::record::{self, FieldUpdate};
use crate::scheduler::{TickScheduler, TickTask};
use crate::types::FriendshipData;

/// A gift the player is about to hand over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftAttempt {
    /// Recipient key in the relationship table (the NPC's name).
    pub recipient: String,
    /// Name of the gifted item.
    pub gift: String,
    /// Whether the recipient is willing to take this item at all.
    pub recipient_accepts: bool,
    /// The player's gift counters with the recipient; `None` if never met.
    pub friendship: Option<FriendshipData>,
}

/// The single in-flight override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOverride {
    /// Recipient whose record was overridden.
    pub recipient: String,
    /// Record exactly as it was before the override.
    pub original: String,
}

/// Why a gift was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The override rule is switched off.
    Disabled,
    /// The recipient will not accept the item.
    Refused,
    /// The player has no friendship data with the recipient.
    NeverMet,
    /// The weekly gift allowance is used up.
    WeeklyLimit,
    /// The daily gift allowance is used up.
    DailyLimit,
    /// The item is not one of the Easter items.
    NotEasterItem,
}

/// What a pre-gift invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftOutcome {
    /// The override was written and the revert scheduled.
    Armed,
    /// Another override is still pending; nothing was changed.
    AlreadyPending,
    /// The gift proceeds with unmodified host behavior.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum OverrideState {
    #[default]
    Idle,
    Armed(PendingOverride),
}

/// Drives the `Idle → Armed → Idle` override cycle.
#[derive(Debug, Clone)]
pub struct GiftOverrideController {
    gifts: GiftConfig,
    egg: String,
    basket: String,
    enabled: bool,
    state: OverrideState,
}

impl GiftOverrideController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(gifts: GiftConfig, items: &ItemNames) -> Self {
        Self {
            gifts,
            egg: items.egg.clone(),
            basket: items.basket.clone(),
            enabled: true,
            state: OverrideState::Idle,
        }
    }

    /// Switch the rule on or off. A pending override still reverts.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The in-flight override, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOverride> {
        match &self.state {
            OverrideState::Idle => None,
            OverrideState::Armed(pending) => Some(pending),
        }
    }

    /// Whether an override is waiting to be reverted.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, OverrideState::Armed(_))
    }

    /// Check the guards that decide whether a gift is eligible.
    fn check(&self, attempt: &GiftAttempt) -> std::result::Result<(), IgnoreReason> {
        if !self.enabled {
            return Err(IgnoreReason::Disabled);
        }
        if !attempt.recipient_accepts {
            return Err(IgnoreReason::Refused);
        }
        let friendship = attempt.friendship.ok_or(IgnoreReason::NeverMet)?;
        if friendship.gifts_this_week >= self.gifts.weekly_gift_limit {
            return Err(IgnoreReason::WeeklyLimit);
        }
        if friendship.gifts_today >= self.gifts.daily_gift_limit {
            return Err(IgnoreReason::DailyLimit);
        }
        if attempt.gift != self.egg && attempt.gift != self.basket {
            return Err(IgnoreReason::NotEasterItem);
        }
        Ok(())
    }

    /// Pre-gift entry point: arm the override if the gift is eligible.
    ///
    /// Every lookup that can fail runs before the first write, so an error
    /// leaves host state and the controller untouched.
    ///
    /// # Errors
    /// - `FollyError::RecordNotFound` if the recipient has no gift-taste record.
    /// - `FollyError::MissingDialogue` if no localized line exists for the
    ///   recipient.
    /// - `FollyError::FieldOutOfBounds` if the record is too short to hold the
    ///   dialogue field.
    pub fn on_before_gift_given(
        &mut self,
        attempt: &GiftAttempt,
        host: &mut dyn GiftHost,
        scheduler: &mut TickScheduler,
    ) -> Result<GiftOutcome> {
        if let Err(reason) = self.check(attempt) {
            return Ok(GiftOutcome::Ignored(reason));
        }

        if let Some(pending) = self.pending() {
            warn!(
                pending = %pending.recipient,
                requested = %attempt.recipient,
                "Gift dialogue override already pending; ignoring new request"
            );
            return Ok(GiftOutcome::AlreadyPending);
        }

        let original = host
            .record(&attempt.recipient)
            .ok_or_else(|| FollyError::RecordNotFound {
                key: attempt.recipient.clone(),
            })?;
        let key = self.gifts.dialogue_key(&attempt.recipient);
        let line = host
            .line(&key)
            .ok_or(FollyError::MissingDialogue { key })?;
        let updated = record::update_entry(
            &original,
            &[Some(line.as_str())],
            &FieldUpdate::at(self.gifts.dialogue_field).delimited_by(self.gifts.delimiter),
        )?;

        // The basket leaves one unit behind once given.
        if attempt.gift == self.basket {
            if let Some(held) = host.active_item_mut() {
                held.quantity = held.quantity.saturating_add(1);
            }
        }

        host.set_record(&attempt.recipient, updated);
        self.state = OverrideState::Armed(PendingOverride {
            recipient: attempt.recipient.clone(),
            original,
        });
        scheduler.schedule_once(TickTask::RevertGiftDialogue);

        debug!(recipient = %attempt.recipient, gift = %attempt.gift, "Patched in unique gift dialogue");
        Ok(GiftOutcome::Armed)
    }

    /// Tick entry point: restore the captured record, if one is pending.
    ///
    /// The controller returns to idle before the record is written, so a
    /// repeated tick finds nothing to revert.
    pub fn on_tick(&mut self, relationships: &mut dyn RelationshipTable) -> Option<PendingOverride> {
        let OverrideState::Armed(pending) = std::mem::take(&mut self.state) else {
            return None;
        };
        relationships.set_record(&pending.recipient, pending.original.clone());
        debug!(recipient = %pending.recipient, original = %pending.original, "Reverted gift taste dialogue");
        Some(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ActiveHand, DialogueSource};
    use crate::types::{ItemId, ItemStack};
    use std::collections::HashMap;

    const ABIGAIL: &str = "Oh, I love this!/66 128/Hey, thanks./68 84/Eww./20/What?!/16/Thanks./394";

    #[derive(Default)]
    struct FakeHost {
        records: HashMap<String, String>,
        lines: HashMap<String, String>,
        hand: Option<ItemStack>,
    }

    impl RelationshipTable for FakeHost {
        fn record(&self, key: &str) -> Option<String> {
            self.records.get(key).cloned()
        }
        fn set_record(&mut self, key: &str, value: String) {
            self.records.insert(key.to_string(), value);
        }
    }

    impl ActiveHand for FakeHost {
        fn active_item_mut(&mut self) -> Option<&mut ItemStack> {
            self.hand.as_mut()
        }
    }

    impl DialogueSource for FakeHost {
        fn line(&self, key: &str) -> Option<String> {
            self.lines.get(key).cloned()
        }
    }

    fn host() -> FakeHost {
        let mut host = FakeHost::default();
        host.records.insert("Abigail".to_string(), ABIGAIL.to_string());
        host.lines.insert(
            "talk.egg_gift.abigail".to_string(),
            "A chocolate egg? You remembered!".to_string(),
        );
        host
    }

    fn controller() -> GiftOverrideController {
        GiftOverrideController::new(GiftConfig::default(), &ItemNames::default())
    }

    fn attempt(gift: &str) -> GiftAttempt {
        GiftAttempt {
            recipient: "Abigail".to_string(),
            gift: gift.to_string(),
            recipient_accepts: true,
            friendship: Some(FriendshipData::default()),
        }
    }

    #[test]
    fn arms_and_reverts_exactly() {
        let mut host = host();
        let mut scheduler = TickScheduler::new();
        let mut ctl = controller();

        let outcome = ctl
            .on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut scheduler)
            .expect("arms");
        assert_eq!(outcome, GiftOutcome::Armed);
        assert!(scheduler.is_scheduled(TickTask::RevertGiftDialogue));
        assert_eq!(
            record::split_fields(&host.records["Abigail"], '/')[2],
            "A chocolate egg? You remembered!"
        );

        let reverted = ctl.on_tick(&mut host).expect("pending override");
        assert_eq!(reverted.original, ABIGAIL);
        assert_eq!(host.records["Abigail"], ABIGAIL);
        assert!(!ctl.is_armed());
    }

    #[test]
    fn second_tick_is_a_no_op() {
        let mut host = host();
        let mut scheduler = TickScheduler::new();
        let mut ctl = controller();
        ctl.on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut scheduler)
            .expect("arms");
        ctl.on_tick(&mut host);

        host.records.insert("Abigail".to_string(), "changed by host".to_string());
        assert!(ctl.on_tick(&mut host).is_none());
        assert_eq!(host.records["Abigail"], "changed by host");
    }

    #[test]
    fn weekly_limit_blocks_override() {
        let mut host = host();
        let mut scheduler = TickScheduler::new();
        let mut gift = attempt("Chocolate Egg");
        gift.friendship = Some(FriendshipData {
            gifts_today: 0,
            gifts_this_week: 2,
        });

        let outcome = controller()
            .on_before_gift_given(&gift, &mut host, &mut scheduler)
            .expect("no error");
        assert_eq!(outcome, GiftOutcome::Ignored(IgnoreReason::WeeklyLimit));
        assert_eq!(host.records["Abigail"], ABIGAIL);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn guards_are_checked() {
        let mut host = host();
        let mut scheduler = TickScheduler::new();
        let mut ctl = controller();

        let mut refused = attempt("Chocolate Egg");
        refused.recipient_accepts = false;
        let mut stranger = attempt("Chocolate Egg");
        stranger.friendship = None;
        let mut given_today = attempt("Chocolate Egg");
        given_today.friendship = Some(FriendshipData {
            gifts_today: 1,
            gifts_this_week: 1,
        });

        let cases = [
            (refused, IgnoreReason::Refused),
            (stranger, IgnoreReason::NeverMet),
            (given_today, IgnoreReason::DailyLimit),
            (attempt("Sugar"), IgnoreReason::NotEasterItem),
        ];
        for (gift, reason) in cases {
            let outcome = ctl
                .on_before_gift_given(&gift, &mut host, &mut scheduler)
                .expect("no error");
            assert_eq!(outcome, GiftOutcome::Ignored(reason));
        }
        assert_eq!(host.records["Abigail"], ABIGAIL);
        assert!(!ctl.is_armed());
    }

    #[test]
    fn disabled_rule_ignores_gifts() {
        let mut host = host();
        let mut scheduler = TickScheduler::new();
        let outcome = controller()
            .enabled(false)
            .on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut scheduler)
            .expect("no error");
        assert_eq!(outcome, GiftOutcome::Ignored(IgnoreReason::Disabled));
    }

    #[test]
    fn missing_dialogue_is_an_error_and_changes_nothing() {
        let mut host = host();
        host.lines.clear();
        host.hand = Some(ItemStack::new(ItemId(51), "Egg Basket", 1));
        let mut scheduler = TickScheduler::new();
        let mut ctl = controller();

        let err = ctl
            .on_before_gift_given(&attempt("Egg Basket"), &mut host, &mut scheduler)
            .expect_err("no line for abigail");
        assert!(matches!(err, FollyError::MissingDialogue { ref key } if key == "talk.egg_gift.abigail"));
        assert_eq!(host.records["Abigail"], ABIGAIL);
        assert_eq!(host.hand.as_ref().map(|s| s.quantity), Some(1));
        assert!(!ctl.is_armed());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn missing_record_is_an_error() {
        let mut host = host();
        host.records.clear();
        let err = controller()
            .on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut TickScheduler::new())
            .expect_err("no record");
        assert!(matches!(err, FollyError::RecordNotFound { .. }));
    }

    #[test]
    fn short_record_fails_loudly() {
        let mut host = host();
        host.records.insert("Abigail".to_string(), "love/1".to_string());
        let err = controller()
            .on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut TickScheduler::new())
            .expect_err("record too short");
        assert!(matches!(err, FollyError::FieldOutOfBounds { index: 2, field_count: 2 }));
        assert_eq!(host.records["Abigail"], "love/1");
    }

    #[test]
    fn basket_leaves_one_behind() {
        let mut host = host();
        host.hand = Some(ItemStack::new(ItemId(51), "Egg Basket", 1));
        let outcome = controller()
            .on_before_gift_given(&attempt("Egg Basket"), &mut host, &mut TickScheduler::new())
            .expect("arms");
        assert_eq!(outcome, GiftOutcome::Armed);
        assert_eq!(host.hand.as_ref().map(|s| s.quantity), Some(2));
    }

    #[test]
    fn egg_does_not_touch_active_hand() {
        let mut host = host();
        host.hand = Some(ItemStack::new(ItemId(900), "Chocolate Egg", 4));
        controller()
            .on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut TickScheduler::new())
            .expect("arms");
        assert_eq!(host.hand.as_ref().map(|s| s.quantity), Some(4));
    }

    #[test]
    fn double_arm_keeps_first_original() {
        let mut host = host();
        host.records.insert("Sam".to_string(), "a/b/c/d".to_string());
        host.lines.insert("talk.egg_gift.sam".to_string(), "Sweet!".to_string());
        let mut scheduler = TickScheduler::new();
        let mut ctl = controller();

        ctl.on_before_gift_given(&attempt("Chocolate Egg"), &mut host, &mut scheduler)
            .expect("arms");
        let mut to_sam = attempt("Chocolate Egg");
        to_sam.recipient = "Sam".to_string();
        let second = ctl
            .on_before_gift_given(&to_sam, &mut host, &mut scheduler)
            .expect("no error");

        assert_eq!(second, GiftOutcome::AlreadyPending);
        assert_eq!(host.records["Sam"], "a/b/c/d");
        let pending = ctl.pending().expect("still armed");
        assert_eq!(pending.recipient, "Abigail");
        assert_eq!(pending.original, ABIGAIL);
    }
}
