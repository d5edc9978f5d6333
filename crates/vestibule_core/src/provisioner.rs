//! Portal provisioning.
//!
//! `ensure_portal` converges a member's portal toward the configured layout:
//! reuse or create the category, refresh its overwrites, then create whichever
//! configured channels are missing. Every write is a separate remote call, so
//! an interrupted run leaves a partial portal that the next run completes.

use crate::{
    ChannelInfo, ChannelKind, PortalConfig, PortalDirectory, PortalMember, Snowflake, category_name_for,
    portal_overwrites,
};
use derive_getters::Getters;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use vestibule_error::{ConfigError, VestibuleResult};

/// A provisioned portal.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Portal {
    /// The member's category.
    category: ChannelInfo,
    /// One text channel per configured name, in configured order.
    channels: Vec<ChannelInfo>,
    /// Whether the staff role was granted access.
    staff_visible: bool,
}

/// Creates and repairs member portals.
#[derive(Debug, Clone)]
pub struct PortalProvisioner {
    config: Arc<PortalConfig>,
}

impl PortalProvisioner {
    /// Create a provisioner for the given configuration.
    pub fn new(config: Arc<PortalConfig>) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Resolve the configured staff role against the guild's current roles.
    ///
    /// A missing role or a failed lookup both mean "no staff visibility".
    pub async fn resolve_staff_role(&self, directory: &dyn PortalDirectory) -> Option<Snowflake> {
        let staff = (*self.config.staff_role())?;
        match directory.find_role_by_id(staff).await {
            Ok(Some(role)) => Some(*role.id()),
            Ok(None) => {
                debug!(guild_id = %directory.guild_id(), role_id = %staff, "Staff role not found in guild");
                None
            }
            Err(e) => {
                warn!(guild_id = %directory.guild_id(), role_id = %staff, error = %e, "Staff role lookup failed");
                None
            }
        }
    }

    /// Make sure the member's portal exists with current permissions.
    ///
    /// Safe to call repeatedly: existing objects are reused and only missing
    /// channels are created.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no channel names are configured,
    /// and the first platform error encountered otherwise.
    #[instrument(
        skip(self, directory, member),
        fields(guild_id = %directory.guild_id(), member_id = %member.id(), category)
    )]
    pub async fn ensure_portal(
        &self,
        directory: &dyn PortalDirectory,
        member: &PortalMember,
    ) -> VestibuleResult<Portal> {
        let channel_names = self.config.channel_names();
        if channel_names.is_empty() {
            return Err(ConfigError::new("No portal channel names configured").into());
        }

        let name = category_name_for(self.config.category_prefix(), member);
        tracing::Span::current().record("category", name.as_str());

        let staff_role = self.resolve_staff_role(directory).await;
        let overwrites = portal_overwrites(directory.everyone_role(), *member.id(), staff_role);

        let category = match directory.find_category_by_name(&name).await? {
            Some(existing) => {
                debug!(category_id = %existing.id(), "Reusing existing category");
                directory.set_overwrites(*existing.id(), &overwrites).await?;
                existing
            }
            None => {
                debug!("Creating category");
                directory.create_category(&name, &overwrites).await?
            }
        };

        let existing_children = directory.channels_by_parent(*category.id()).await?;
        let mut channels = Vec::with_capacity(channel_names.len());
        for channel_name in channel_names {
            let found = existing_children.iter().find(|child| {
                *child.kind() == ChannelKind::Text
                    && directory.channel_name_matches(child.name(), channel_name)
            });
            let channel = match found {
                Some(child) => {
                    debug!(channel_id = %child.id(), channel = %channel_name, "Reusing channel");
                    child.clone()
                }
                None => {
                    debug!(channel = %channel_name, "Creating channel");
                    directory
                        .create_text_channel(*category.id(), channel_name, &overwrites)
                        .await?
                }
            };
            channels.push(channel);
        }

        info!(
            category_id = %category.id(),
            channels = channels.len(),
            staff_visible = staff_role.is_some(),
            "Portal ready"
        );

        Ok(Portal {
            category,
            channels,
            staff_visible: staff_role.is_some(),
        })
    }
}
