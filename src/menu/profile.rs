//! Profile menu construction.
//!
//! A pure function from viewer/account/relationship/capability state to an
//! ordered menu. No store access, no field probing: every instance
//! capability the menu depends on arrives as an explicit predicate input.

use serde::{Deserialize, Serialize};

use super::entry::{normalize, MenuAction, MenuEntry, MenuLink};

/// The account a profile menu is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Server-assigned account id.
    pub id: String,
    /// Local part of the account's handle.
    pub username: String,
    /// Home domain for remote accounts; `None` for local accounts.
    pub domain: Option<String>,
    /// Whether the account holds the admin role.
    pub admin: bool,
    /// Whether the account holds the moderator role.
    pub moderator: bool,
    /// Whether the account carries a verified mark.
    pub verified: bool,
    /// Whether the account carries a donor mark.
    pub donor: bool,
    /// Whether the account is in follow suggestions.
    pub suggested: bool,
}

impl Account {
    /// Whether the account lives on this server.
    pub fn is_local(&self) -> bool {
        self.domain.is_none()
    }

    /// Whether the account lives on another server.
    pub fn is_remote(&self) -> bool {
        self.domain.is_some()
    }
}

/// The viewer's relationship to the account, as last fetched.
///
/// Defaults to all-false, which is also the right reading when the
/// relationship has not been fetched yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Viewer follows the account.
    pub following: bool,
    /// Account follows the viewer.
    pub followed_by: bool,
    /// Viewer sees the account's reposts.
    pub showing_reblogs: bool,
    /// Viewer muted the account.
    pub muting: bool,
    /// Viewer blocked the account.
    pub blocking: bool,
    /// Viewer blocked the account's whole domain.
    pub domain_blocking: bool,
}

/// Capability flags of the instance and the client environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// The client can share URLs natively.
    pub can_share: bool,
    /// The backend supports lists.
    pub lists: bool,
    /// Lists may contain accounts the viewer does not follow.
    pub unrestricted_lists: bool,
    /// The backend supports removing a follower.
    pub remove_from_followers: bool,
    /// The backend supports the follow-suggestions admin API.
    pub suggestions: bool,
}

/// The signed-in viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// The viewer's own account id.
    pub account_id: String,
    /// Viewer holds the admin role.
    pub is_admin: bool,
    /// Viewer holds the moderator role.
    pub is_moderator: bool,
}

impl Viewer {
    /// Admins and moderators get the staff section.
    pub fn is_staff(&self) -> bool {
        self.is_admin || self.is_moderator
    }
}

/// Build the dropdown menu for an account's profile header.
///
/// Returns an empty menu for signed-out viewers. Sections, in order:
/// share, own-account settings or interaction actions, remote-domain
/// visibility, staff moderation. Divider placement follows the builders;
/// [`normalize`] removes the ones that ended up redundant.
pub fn profile_menu(
    viewer: Option<&Viewer>,
    account: &Account,
    relationship: &Relationship,
    capabilities: &Capabilities,
) -> Vec<MenuEntry> {
    let Some(viewer) = viewer else {
        return Vec::new();
    };

    let mut menu: Vec<MenuEntry> = Vec::new();

    if capabilities.can_share {
        menu.push(MenuEntry::Action(MenuAction::Share));
        menu.push(MenuEntry::Divider);
    }

    if account.id == viewer.account_id {
        menu.push(MenuEntry::Link(MenuLink::EditProfile));
        menu.push(MenuEntry::Link(MenuLink::Preferences));
        menu.push(MenuEntry::Divider);
        menu.push(MenuEntry::Link(MenuLink::MutedUsers));
        menu.push(MenuEntry::Link(MenuLink::BlockedUsers));
    } else {
        menu.push(MenuEntry::Action(MenuAction::Mention));

        if relationship.following {
            if relationship.showing_reblogs {
                menu.push(MenuEntry::Action(MenuAction::HideReblogs));
            } else {
                menu.push(MenuEntry::Action(MenuAction::ShowReblogs));
            }

            if capabilities.lists {
                menu.push(MenuEntry::Action(MenuAction::AddOrRemoveFromList));
            }

            menu.push(MenuEntry::Divider);
        } else if capabilities.lists && capabilities.unrestricted_lists {
            menu.push(MenuEntry::Action(MenuAction::AddOrRemoveFromList));
        }

        if capabilities.remove_from_followers && relationship.followed_by {
            menu.push(MenuEntry::Action(MenuAction::RemoveFromFollowers));
        }

        if relationship.muting {
            menu.push(MenuEntry::Action(MenuAction::Unmute));
        } else {
            menu.push(MenuEntry::Action(MenuAction::Mute));
        }

        if relationship.blocking {
            menu.push(MenuEntry::Action(MenuAction::Unblock));
        } else {
            menu.push(MenuEntry::Action(MenuAction::Block));
        }

        menu.push(MenuEntry::Action(MenuAction::Report));
    }

    if let Some(domain) = &account.domain {
        menu.push(MenuEntry::Divider);

        if relationship.domain_blocking {
            menu.push(MenuEntry::Action(MenuAction::UnblockDomain {
                domain: domain.clone(),
            }));
        } else {
            menu.push(MenuEntry::Action(MenuAction::BlockDomain {
                domain: domain.clone(),
            }));
        }
    }

    if viewer.is_staff() {
        menu.push(MenuEntry::Divider);

        if viewer.is_admin {
            menu.push(MenuEntry::Link(MenuLink::ModerationInterface {
                account_id: account.id.clone(),
            }));
        }

        if account.id != viewer.account_id && account.is_local() && viewer.is_admin {
            if account.admin {
                menu.push(MenuEntry::Action(MenuAction::DemoteToModerator));
                menu.push(MenuEntry::Action(MenuAction::DemoteToUser));
            } else if account.moderator {
                menu.push(MenuEntry::Action(MenuAction::PromoteToAdmin));
                menu.push(MenuEntry::Action(MenuAction::DemoteToUser));
            } else {
                menu.push(MenuEntry::Action(MenuAction::PromoteToAdmin));
                menu.push(MenuEntry::Action(MenuAction::PromoteToModerator));
            }
        }

        if account.verified {
            menu.push(MenuEntry::Action(MenuAction::UnverifyUser));
        } else {
            menu.push(MenuEntry::Action(MenuAction::VerifyUser));
        }

        if account.donor {
            menu.push(MenuEntry::Action(MenuAction::RemoveDonor));
        } else {
            menu.push(MenuEntry::Action(MenuAction::SetDonor));
        }

        if capabilities.suggestions && viewer.is_admin {
            if account.suggested {
                menu.push(MenuEntry::Action(MenuAction::UnsuggestUser));
            } else {
                menu.push(MenuEntry::Action(MenuAction::SuggestUser));
            }
        }

        if account.id != viewer.account_id {
            menu.push(MenuEntry::Action(MenuAction::DeactivateUser));
            menu.push(MenuEntry::Action(MenuAction::DeleteUser));
        }
    }

    normalize(menu)
}
