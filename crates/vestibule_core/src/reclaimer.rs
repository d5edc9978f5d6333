//! Portal reclamation.
//!
//! Ownership is derived, never stored: a category belongs to a member when it
//! carries the configured prefix and an overwrite for the member's id. When no
//! category passes that test the reclaimer falls back to the identity suffix
//! embedded in the category name. Both signals come from the immutable member
//! id, so a rename between join and leave does not orphan the portal.

use crate::{ChannelInfo, PortalConfig, PortalDirectory, PortalMember, matches_identity_suffix};
use derive_getters::Getters;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// How the reclaimer located the member's categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ReclaimStrategy {
    /// Categories carrying an overwrite for the member.
    Ownership,
    /// Categories whose name ends with the member's identity suffix.
    NameSuffix,
    /// Neither search matched anything, or the category listing failed.
    NothingFound,
}

/// Outcome of a reclamation sweep.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ReclaimReport {
    strategy: ReclaimStrategy,
    categories_deleted: usize,
    channels_deleted: usize,
    failures: usize,
}

impl ReclaimReport {
    fn new(strategy: ReclaimStrategy) -> Self {
        Self {
            strategy,
            categories_deleted: 0,
            channels_deleted: 0,
            failures: 0,
        }
    }
}

/// Deletes the portals of departing members.
#[derive(Debug, Clone)]
pub struct PortalReclaimer {
    config: Arc<PortalConfig>,
}

impl PortalReclaimer {
    /// Create a reclaimer for the given configuration.
    pub fn new(config: Arc<PortalConfig>) -> Self {
        Self { config }
    }

    /// Delete every portal category owned by the member, children first.
    ///
    /// Never fails: each failed listing or deletion is logged and counted,
    /// and the sweep carries on.
    #[instrument(
        skip(self, directory, member),
        fields(guild_id = %directory.guild_id(), member_id = %member.id())
    )]
    pub async fn delete_portal(
        &self,
        directory: &dyn PortalDirectory,
        member: &PortalMember,
    ) -> ReclaimReport {
        let categories = match directory.categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Failed to list categories, nothing reclaimed");
                let mut report = ReclaimReport::new(ReclaimStrategy::NothingFound);
                report.failures += 1;
                return report;
            }
        };

        let prefix = self.config.category_prefix();
        let member_id = *member.id();

        let owned: Vec<&ChannelInfo> = categories
            .iter()
            .filter(|c| c.name().starts_with(prefix.as_str()) && c.has_member_overwrite(member_id))
            .collect();

        let (strategy, targets) = if !owned.is_empty() {
            (ReclaimStrategy::Ownership, owned)
        } else {
            debug!("No category carries an overwrite for the member, trying name suffix");
            let by_name: Vec<&ChannelInfo> = categories
                .iter()
                .filter(|c| matches_identity_suffix(prefix, c.name(), member_id))
                .collect();
            if by_name.is_empty() {
                (ReclaimStrategy::NothingFound, by_name)
            } else {
                (ReclaimStrategy::NameSuffix, by_name)
            }
        };

        let mut report = ReclaimReport::new(strategy);
        for category in targets {
            self.delete_category(directory, category, &mut report).await;
        }

        info!(
            strategy = %report.strategy,
            categories = report.categories_deleted,
            channels = report.channels_deleted,
            failures = report.failures,
            "Portal reclaimed"
        );
        report
    }

    async fn delete_category(
        &self,
        directory: &dyn PortalDirectory,
        category: &ChannelInfo,
        report: &mut ReclaimReport,
    ) {
        match directory.channels_by_parent(*category.id()).await {
            Ok(children) => {
                for child in children {
                    match directory.delete_channel(*child.id()).await {
                        Ok(()) => {
                            debug!(channel_id = %child.id(), channel = %child.name(), "Deleted channel");
                            report.channels_deleted += 1;
                        }
                        Err(e) => {
                            warn!(channel_id = %child.id(), channel = %child.name(), error = %e, "Failed to delete channel");
                            report.failures += 1;
                        }
                    }
                }
            }
            Err(e) => {
                warn!(category_id = %category.id(), error = %e, "Failed to list category children");
                report.failures += 1;
            }
        }

        match directory.delete_channel(*category.id()).await {
            Ok(()) => {
                debug!(category_id = %category.id(), category = %category.name(), "Deleted category");
                report.categories_deleted += 1;
            }
            Err(e) => {
                warn!(category_id = %category.id(), category = %category.name(), error = %e, "Failed to delete category");
                report.failures += 1;
            }
        }
    }
}
