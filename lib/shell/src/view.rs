//! Renderable view state derived from a session user snapshot.

use serde::{Deserialize, Serialize};
use skill_time_navigation::{NavigationCatalog, NavigationModel, UrlBuilder, compute_navigation};
use skill_time_platform_access::User;

/// Name shown when the user has not set one.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Avatar letter shown when the user has not set a name.
pub const DEFAULT_AVATAR_INITIAL: &str = "U";

/// Everything the presentation layer needs to draw the shell.
///
/// When `signed_in` is false the wallet, identity and verified-provider
/// sections are omitted; the fields still hold their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub navigation: NavigationModel,
    pub signed_in: bool,
    pub wallet_credits: u64,
    pub display_name: String,
    pub email: String,
    pub avatar_initial: String,
    pub show_verified_badge: bool,
}

/// Projects a user snapshot onto the shell's view state.
pub fn derive_view_state<U: UrlBuilder + ?Sized>(
    catalog: &NavigationCatalog,
    urls: &U,
    user: Option<&User>,
) -> ViewState {
    let full_name = user
        .and_then(User::full_name)
        .filter(|name| !name.trim().is_empty());

    ViewState {
        navigation: compute_navigation(catalog, urls, user),
        signed_in: user.is_some(),
        wallet_credits: user.map_or(0, User::wallet_credits),
        display_name: full_name.unwrap_or(DEFAULT_DISPLAY_NAME).to_string(),
        email: user.and_then(User::email).unwrap_or_default().to_string(),
        avatar_initial: avatar_initial(full_name),
        show_verified_badge: user.is_some_and(User::is_verified_provider),
    }
}

fn avatar_initial(full_name: Option<&str>) -> String {
    full_name
        .and_then(|name| name.trim_start().chars().next())
        .map_or_else(
            || DEFAULT_AVATAR_INITIAL.to_string(),
            |first| first.to_uppercase().collect(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_time_core::UserId;
    use skill_time_navigation::PageUrlBuilder;
    use skill_time_platform_access::Role;

    fn view_for(user: Option<&User>) -> ViewState {
        derive_view_state(&NavigationCatalog::standard(), &PageUrlBuilder::new(), user)
    }

    #[test]
    fn all_default_user_gets_defaults() {
        let view = view_for(Some(&User::default()));

        assert!(view.signed_in);
        assert_eq!(view.wallet_credits, 0);
        assert_eq!(view.display_name, "User");
        assert_eq!(view.email, "");
        assert_eq!(view.avatar_initial, "U");
        assert!(!view.show_verified_badge);
    }

    #[test]
    fn verified_standard_user() {
        let mut user = User::new(UserId::from("usr-dana"));
        user.set_full_name(Some("Dana Lee".to_string()));
        user.set_email(Some("dana@example.com".to_string()));
        user.set_wallet_credits(150);
        user.set_verified_provider(true);

        let view = view_for(Some(&user));

        assert_eq!(
            view.navigation.titles(),
            ["Marketplace", "My Learning", "My Courses", "Profile"]
        );
        assert!(view.show_verified_badge);
        assert_eq!(view.wallet_credits, 150);
        assert_eq!(view.display_name, "Dana Lee");
        assert_eq!(view.email, "dana@example.com");
        assert_eq!(view.avatar_initial, "D");
    }

    #[test]
    fn guest_view() {
        let view = view_for(None);

        assert!(!view.signed_in);
        assert_eq!(
            view.navigation.titles(),
            ["Marketplace", "My Learning", "My Courses", "Profile"]
        );
        assert_eq!(view.wallet_credits, 0);
        assert_eq!(view.display_name, "User");
        assert!(!view.show_verified_badge);
    }

    #[test]
    fn admin_view() {
        let mut user = User::new(UserId::from("usr-admin"));
        user.set_role(Role::Admin);

        let view = view_for(Some(&user));

        assert_eq!(view.navigation.items.len(), 5);
        assert_eq!(view.navigation.titles().last(), Some(&"Admin Panel"));
        assert!(!view.show_verified_badge);
    }

    #[test]
    fn blank_full_name_falls_back_to_defaults() {
        let mut user = User::default();
        user.set_full_name(Some("   ".to_string()));

        let view = view_for(Some(&user));

        assert_eq!(view.display_name, "User");
        assert_eq!(view.avatar_initial, "U");
    }

    #[test]
    fn avatar_initial_is_uppercased() {
        let mut user = User::default();
        user.set_full_name(Some("émile zola".to_string()));

        assert_eq!(view_for(Some(&user)).avatar_initial, "É");
    }
}
