use crate::backend::api::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Estimator,
    Inventory,
    Users,
}

impl Menu {
    /// Entries the sidebar offers for the given role.
    ///
    /// Mirrors the server side authorization: inventory management is for
    /// installers (and admins), user management for admins only. Guests
    /// only get the estimator.
    pub fn entries(role: Option<Role>) -> Vec<Menu> {
        let mut entries = vec![Menu::Estimator];
        match role {
            Some(Role::Installer) => entries.push(Menu::Inventory),
            Some(Role::Admin) => {
                entries.push(Menu::Inventory);
                entries.push(Menu::Users);
            }
            Some(Role::Client) | None => {}
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_role() {
        assert_eq!(Menu::entries(None), vec![Menu::Estimator]);
        assert_eq!(Menu::entries(Some(Role::Client)), vec![Menu::Estimator]);
        assert_eq!(
            Menu::entries(Some(Role::Installer)),
            vec![Menu::Estimator, Menu::Inventory]
        );
        assert_eq!(
            Menu::entries(Some(Role::Admin)),
            vec![Menu::Estimator, Menu::Inventory, Menu::Users]
        );
    }
}
