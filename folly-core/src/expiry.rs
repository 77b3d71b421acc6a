//! Egg expiry — converts leftover eggs once the Easter season is over.
//!
//! On the boundary date every container in the world is scanned. Matching
//! stacks are cleared slot by slot and one replacement stack holding the
//! summed quantity is appended to the same container. Totals never cross
//! container boundaries.

use tracing::{debug, info, warn};

use crate::catalog::CatalogResolver;
use crate::host::WorldContainers;
use crate::types::{CalendarDate, Container, ItemId, ItemStack};

/// What a day-start invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// Today is not the boundary date.
    NotScheduled,
    /// The replacement item could not be resolved; nothing was touched.
    CatalogUnavailable,
    /// The purge ran.
    Purged(PurgeReport),
}

/// Totals for one purge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeReport {
    /// Containers that held at least one expiring stack.
    pub containers: usize,
    /// Expiring stacks removed.
    pub stacks_removed: usize,
    /// Units converted into the replacement item.
    pub units_converted: u64,
}

/// Result of purging a single container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerPurge {
    /// Stacks cleared.
    pub stacks_removed: usize,
    /// Quantity of the appended replacement stack.
    pub total: u32,
}

/// Runs the egg purge on the configured boundary date.
#[derive(Debug, Clone)]
pub struct ExpiryProcessor {
    expiring_item: String,
    replacement_item: String,
    boundary: CalendarDate,
}

impl ExpiryProcessor {
    /// Create a processor converting `expiring_item` into `replacement_item`
    /// on `boundary`.
    #[must_use]
    pub fn new(
        expiring_item: impl Into<String>,
        replacement_item: impl Into<String>,
        boundary: CalendarDate,
    ) -> Self {
        Self {
            expiring_item: expiring_item.into(),
            replacement_item: replacement_item.into(),
            boundary,
        }
    }

    /// Whether the purge runs on `date`.
    #[must_use]
    pub fn is_due(&self, date: CalendarDate) -> bool {
        date == self.boundary
    }

    /// Day-start entry point.
    pub fn on_day_started(
        &self,
        date: CalendarDate,
        catalog: &CatalogResolver,
        world: &mut dyn WorldContainers,
    ) -> PurgeOutcome {
        if !self.is_due(date) {
            return PurgeOutcome::NotScheduled;
        }

        let Some(replacement_id) = catalog.object_id(&self.replacement_item) else {
            warn!(
                item = %self.replacement_item,
                %date,
                "Replacement item not in catalog; skipping today's purge"
            );
            return PurgeOutcome::CatalogUnavailable;
        };

        let mut report = PurgeReport::default();
        world.visit_containers(&mut |location, container| {
            if let Some(purge) = self.purge_container(container, replacement_id) {
                debug!(
                    location,
                    stacks = purge.stacks_removed,
                    total = purge.total,
                    "Converted expired stacks"
                );
                report.containers += 1;
                report.stacks_removed += purge.stacks_removed;
                report.units_converted += u64::from(purge.total);
            }
        });

        info!(
            item = %self.expiring_item,
            containers = report.containers,
            units = report.units_converted,
            "Expired item purge complete"
        );
        PurgeOutcome::Purged(report)
    }

    /// Purge one container. Returns `None` if it was left untouched.
    ///
    /// Target slots are collected before any slot is cleared, so the scan
    /// never observes its own writes.
    pub fn purge_container(&self, container: &mut Container, replacement_id: ItemId) -> Option<ContainerPurge> {
        let targets: Vec<usize> = container
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_ref()
                    .filter(|s| s.is_present() && s.name == self.expiring_item)
                    .map(|_| i)
            })
            .collect();

        if targets.is_empty() {
            return None;
        }

        let sum: u64 = targets
            .iter()
            .filter_map(|&i| container.slots[i].as_ref())
            .map(|s| u64::from(s.quantity))
            .sum();
        let Ok(total) = u32::try_from(sum) else {
            warn!(total = sum, "Expired stack total overflows a single stack; container left as is");
            return None;
        };

        for &i in &targets {
            container.slots[i] = None;
        }
        container.slots.push(Some(ItemStack::new(
            replacement_id,
            self.replacement_item.clone(),
            total,
        )));

        Some(ContainerPurge {
            stacks_removed: targets.len(),
            total,
        })
    }
}
