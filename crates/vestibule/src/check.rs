//! Offline configuration report for the `check` subcommand.

use derive_getters::Getters;
use serde::Serialize;
use vestibule_core::{
    Capability, PortalConfig, PortalMember, Principal, Snowflake, category_name_for,
    portal_overwrites,
};

/// Whether staff visibility will apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StaffRoleStatus {
    /// No staff role was given.
    NotConfigured,
    /// A well-formed role id was given; the guild may still lack the role.
    Configured {
        /// Parsed role id
        id: Snowflake,
    },
    /// A value was given but it is not a role id; it is ignored.
    Invalid {
        /// The value as given
        raw: String,
    },
}

/// One row of the overwrite plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PlannedOverwrite {
    /// Who the overwrite targets.
    target: String,
    /// Capabilities granted.
    allow: Vec<Capability>,
    /// Capabilities withheld.
    deny: Vec<Capability>,
}

/// What a join by the sample member would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SamplePortal {
    /// Sample member id.
    member_id: Snowflake,
    /// Category name the member would get.
    category: String,
    /// Overwrites applied to the category and each channel.
    overwrites: Vec<PlannedOverwrite>,
}

/// The effective configuration, as `check` reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CheckReport {
    /// Category name prefix.
    category_prefix: String,
    /// Channels created in each portal, in order.
    channel_names: Vec<String>,
    /// Staff role status.
    staff_role: StaffRoleStatus,
    /// Preview for a sample member, when one was given.
    sample: Option<SamplePortal>,
}

impl CheckReport {
    /// Build the report for a configuration.
    ///
    /// `raw_staff_role` is the staff role value as given, so a malformed value
    /// can be reported even though the configuration dropped it.
    pub fn new(
        config: &PortalConfig,
        raw_staff_role: Option<&str>,
        sample: Option<&PortalMember>,
    ) -> Self {
        let staff_role = match (config.staff_role(), raw_staff_role) {
            (Some(id), _) => StaffRoleStatus::Configured { id: *id },
            (None, Some(raw)) => StaffRoleStatus::Invalid {
                raw: raw.to_string(),
            },
            (None, None) => StaffRoleStatus::NotConfigured,
        };

        Self {
            category_prefix: config.category_prefix().clone(),
            channel_names: config.channel_names().clone(),
            staff_role,
            sample: sample.map(|member| sample_portal(config, member)),
        }
    }

    /// Whether a portal could be provisioned with this configuration.
    pub fn is_valid(&self) -> bool {
        !self.channel_names.is_empty()
    }

    /// Human-readable rendering.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("category prefix: {:?}\n", self.category_prefix));
        if self.channel_names.is_empty() {
            out.push_str("channels:        (none) - portals cannot be provisioned\n");
        } else {
            out.push_str(&format!("channels:        {}\n", self.channel_names.join(", ")));
        }
        let staff = match &self.staff_role {
            StaffRoleStatus::NotConfigured => "not configured".to_string(),
            StaffRoleStatus::Configured { id } => format!("role {}", id),
            StaffRoleStatus::Invalid { raw } => format!("ignored, {:?} is not a role id", raw),
        };
        out.push_str(&format!("staff role:      {}\n", staff));

        if let Some(sample) = &self.sample {
            out.push_str(&format!("\nsample member {}\n", sample.member_id));
            out.push_str(&format!("  category: {}\n", sample.category));
            for overwrite in &sample.overwrites {
                out.push_str(&format!(
                    "  {}: allow [{}] deny [{}]\n",
                    overwrite.target,
                    join_capabilities(&overwrite.allow),
                    join_capabilities(&overwrite.deny)
                ));
            }
        }
        out
    }
}

fn sample_portal(config: &PortalConfig, member: &PortalMember) -> SamplePortal {
    // Placeholder for the guild's default role; the real id is the guild id.
    let everyone = Snowflake(0);
    let overwrites = portal_overwrites(everyone, *member.id(), *config.staff_role())
        .into_iter()
        .map(|overwrite| {
            let target = match overwrite.principal() {
                Principal::Role(id) if *id == everyone => "@everyone".to_string(),
                Principal::Role(id) => format!("role {}", id),
                Principal::Member(id) => format!("member {}", id),
            };
            PlannedOverwrite {
                target,
                allow: overwrite.allow().iter().copied().collect(),
                deny: overwrite.deny().iter().copied().collect(),
            }
        })
        .collect();

    SamplePortal {
        member_id: *member.id(),
        category: category_name_for(config.category_prefix(), member),
        overwrites,
    }
}

fn join_capabilities(caps: &[Capability]) -> String {
    caps.iter()
        .map(|cap| cap.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
