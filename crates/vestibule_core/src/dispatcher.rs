//! Lifecycle event dispatch.
//!
//! The dispatcher is the failure boundary: whatever goes wrong while handling
//! one member is logged here and never reaches the event loop.

use crate::{
    MemberLocks, Portal, PortalConfig, PortalDirectory, PortalMember, PortalProvisioner,
    PortalReclaimer, ReclaimReport, Snowflake,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Text of the welcome message posted into a new portal.
pub fn welcome_message(member: &PortalMember, staff_visible: bool) -> String {
    let mut message = format!("Welcome <@{}>! This is your private space.", member.id());
    if staff_visible {
        message.push_str(" Staff can also see these channels.");
    }
    message
}

/// Routes join and leave events to the provisioner and reclaimer.
#[derive(Debug)]
pub struct PortalDispatcher {
    provisioner: PortalProvisioner,
    reclaimer: PortalReclaimer,
    locks: MemberLocks,
}

impl PortalDispatcher {
    /// Create a dispatcher sharing one configuration across its components.
    pub fn new(config: Arc<PortalConfig>) -> Self {
        Self {
            provisioner: PortalProvisioner::new(config.clone()),
            reclaimer: PortalReclaimer::new(config),
            locks: MemberLocks::new(),
        }
    }

    /// The provisioner used for joins.
    pub fn provisioner(&self) -> &PortalProvisioner {
        &self.provisioner
    }

    /// The reclaimer used for leaves.
    pub fn reclaimer(&self) -> &PortalReclaimer {
        &self.reclaimer
    }

    /// Log that the gateway session is up.
    pub fn handle_ready(&self, bot_name: &str, bot_id: Snowflake, guilds: usize) {
        info!(bot_user = %bot_name, bot_id = %bot_id, guilds, "Connected and ready");
    }

    /// Provision the member's portal and greet them in it.
    ///
    /// Returns the portal on success; failures are logged and yield `None`.
    pub async fn handle_member_join(
        &self,
        directory: &dyn PortalDirectory,
        member: &PortalMember,
    ) -> Option<Portal> {
        let key = (directory.guild_id(), *member.id());
        self.locks
            .run(key, async {
                match self.provisioner.ensure_portal(directory, member).await {
                    Ok(portal) => {
                        self.send_welcome(directory, member, &portal).await;
                        Some(portal)
                    }
                    Err(e) => {
                        error!(
                            guild_id = %directory.guild_id(),
                            member_id = %member.id(),
                            error = %e,
                            "Failed to provision portal"
                        );
                        None
                    }
                }
            })
            .await
    }

    /// Reclaim the member's portal.
    pub async fn handle_member_leave(
        &self,
        directory: &dyn PortalDirectory,
        member: &PortalMember,
    ) -> ReclaimReport {
        let key = (directory.guild_id(), *member.id());
        self.locks
            .run(key, self.reclaimer.delete_portal(directory, member))
            .await
    }

    async fn send_welcome(
        &self,
        directory: &dyn PortalDirectory,
        member: &PortalMember,
        portal: &Portal,
    ) {
        let Some(first) = portal.channels().first() else {
            return;
        };
        let content = welcome_message(member, *portal.staff_visible());
        if let Err(e) = directory.send_message(*first.id(), &content).await {
            warn!(
                channel_id = %first.id(),
                member_id = %member.id(),
                error = %e,
                "Failed to send welcome message"
            );
        }
    }
}
