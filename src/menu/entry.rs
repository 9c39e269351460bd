//! Tagged menu-entry variants.
//!
//! Menus used to be built as mutable arrays where `null` stood for a
//! divider and every entry was probed for an `action` or `to` field. Here
//! a menu is an ordered list of explicit variants; the rendering layer maps
//! actions and links to localized labels and icons, and dispatches the
//! intents.

use serde::{Deserialize, Serialize};

/// One entry in a rendered dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Dispatches an intent when activated.
    Action(MenuAction),
    /// Navigates somewhere when activated.
    Link(MenuLink),
    /// Visual separator between sections.
    Divider,
}

/// Dispatchable menu intents for a profile menu.
///
/// Variants carry the data the dispatcher needs beyond the account the
/// menu was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum MenuAction {
    /// Share the account's profile URL.
    Share,
    /// Start a mention of the account.
    Mention,
    /// Hide the account's reposts from timelines.
    HideReblogs,
    /// Show the account's reposts in timelines again.
    ShowReblogs,
    /// Open list-membership management for the account.
    AddOrRemoveFromList,
    /// Remove the account from the viewer's followers.
    RemoveFromFollowers,
    /// Mute the account.
    Mute,
    /// Unmute the account.
    Unmute,
    /// Block the account.
    Block,
    /// Unblock the account.
    Unblock,
    /// Report the account.
    Report,
    /// Hide everything from the account's domain.
    BlockDomain {
        /// Domain to hide.
        domain: String,
    },
    /// Unhide the account's domain.
    UnblockDomain {
        /// Domain to unhide.
        domain: String,
    },
    /// Promote the account to admin.
    PromoteToAdmin,
    /// Promote the account to moderator.
    PromoteToModerator,
    /// Demote the account to moderator.
    DemoteToModerator,
    /// Demote the account to a regular user.
    DemoteToUser,
    /// Mark the account as verified.
    VerifyUser,
    /// Remove the account's verified mark.
    UnverifyUser,
    /// Mark the account as a donor.
    SetDonor,
    /// Remove the account's donor mark.
    RemoveDonor,
    /// Add the account to follow suggestions.
    SuggestUser,
    /// Remove the account from follow suggestions.
    UnsuggestUser,
    /// Deactivate the account.
    DeactivateUser,
    /// Delete the account.
    DeleteUser,
}

/// Navigation targets reachable from a profile menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum MenuLink {
    /// The viewer's own profile settings.
    EditProfile,
    /// The viewer's preferences page.
    Preferences,
    /// The viewer's muted-users list.
    MutedUsers,
    /// The viewer's blocked-users list.
    BlockedUsers,
    /// The backend moderation interface for an account (opens externally).
    ModerationInterface {
        /// Account to open the moderation interface for.
        account_id: String,
    },
}

/// Drop leading, trailing, and adjacent dividers.
///
/// Builders push a divider ahead of each conditional section without
/// knowing whether the previous section produced anything; this pass makes
/// the result presentable.
pub fn normalize(entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    let mut out: Vec<MenuEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry == MenuEntry::Divider {
            match out.last() {
                None | Some(MenuEntry::Divider) => continue,
                _ => {}
            }
        }
        out.push(entry);
    }

    while out.last() == Some(&MenuEntry::Divider) {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_edges() {
        let entries = vec![
            MenuEntry::Divider,
            MenuEntry::Action(MenuAction::Share),
            MenuEntry::Divider,
        ];
        assert_eq!(
            normalize(entries),
            vec![MenuEntry::Action(MenuAction::Share)]
        );
    }

    #[test]
    fn test_normalize_collapses_runs() {
        let entries = vec![
            MenuEntry::Action(MenuAction::Mention),
            MenuEntry::Divider,
            MenuEntry::Divider,
            MenuEntry::Action(MenuAction::Report),
        ];
        assert_eq!(
            normalize(entries),
            vec![
                MenuEntry::Action(MenuAction::Mention),
                MenuEntry::Divider,
                MenuEntry::Action(MenuAction::Report),
            ]
        );
    }

    #[test]
    fn test_normalize_keeps_interior_divider() {
        let entries = vec![
            MenuEntry::Link(MenuLink::EditProfile),
            MenuEntry::Divider,
            MenuEntry::Link(MenuLink::MutedUsers),
        ];
        assert_eq!(normalize(entries.clone()), entries);
    }

    #[test]
    fn test_normalize_all_dividers_is_empty() {
        let entries = vec![MenuEntry::Divider, MenuEntry::Divider];
        assert!(normalize(entries).is_empty());
    }
}
