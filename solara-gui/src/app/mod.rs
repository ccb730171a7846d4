pub mod cache;
pub mod config;
pub mod menu;
pub mod message;
pub mod state;
pub mod view;

mod error;

use std::sync::Arc;

use iced::Task;

use solara_ui::widget::Element;

pub use config::Config;
pub use message::Message;

use state::{EstimatorPanel, InventoryPanel, State, UsersPanel};

use crate::{
    app::{cache::Cache, menu::Menu},
    backend::Backend,
};

struct Panels {
    current: Menu,
    estimator: EstimatorPanel,
    inventory: InventoryPanel,
    users: UsersPanel,
}

impl Panels {
    fn new() -> Panels {
        Self {
            current: Menu::Estimator,
            estimator: EstimatorPanel::new(),
            inventory: InventoryPanel::new(),
            users: UsersPanel::new(),
        }
    }

    fn current(&self) -> &dyn State {
        match self.current {
            Menu::Estimator => &self.estimator,
            Menu::Inventory => &self.inventory,
            Menu::Users => &self.users,
        }
    }

    fn current_mut(&mut self) -> &mut dyn State {
        match self.current {
            Menu::Estimator => &mut self.estimator,
            Menu::Inventory => &mut self.inventory,
            Menu::Users => &mut self.users,
        }
    }
}

pub struct App {
    cache: Cache,
    backend: Arc<dyn Backend + Sync + Send>,

    panels: Panels,
}

impl App {
    pub fn new(cache: Cache, backend: Arc<dyn Backend + Sync + Send>) -> (App, Task<Message>) {
        let mut panels = Panels::new();
        let task = panels.estimator.reload(backend.clone(), &cache);
        (
            Self {
                panels,
                cache,
                backend,
            },
            task,
        )
    }

    fn set_current_panel(&mut self, menu: Menu) -> Task<Message> {
        // The sidebar only shows reachable entries, but the check belongs
        // here: a panel must never be displayed to a role the server would
        // refuse.
        if !Menu::entries(self.cache.role()).contains(&menu) {
            return Task::none();
        }

        self.panels.current_mut().interrupt();
        self.panels.current = menu;
        self.panels
            .current_mut()
            .reload(self.backend.clone(), &self.cache)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Menu(menu)) => self.set_current_panel(menu),
            Message::View(view::Message::Reload) => self
                .panels
                .current_mut()
                .reload(self.backend.clone(), &self.cache),
            _ => self
                .panels
                .current_mut()
                .update(self.backend.clone(), &self.cache, message),
        }
    }

    pub fn view(&self) -> Element<Message> {
        self.panels.current().view(&self.cache).map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::api::{Role, User},
        dir::SolaraDirectory,
        session::Session,
        utils::mock::ScriptedBackend,
    };

    fn cache_with_role(role: Option<Role>) -> Cache {
        Cache {
            datadir: SolaraDirectory::new(std::path::PathBuf::from("/tmp/solara-test")),
            session: role.map(|role| Session {
                token: "tok".to_string(),
                user: User {
                    id: 1,
                    email: "user@example.com".to_string(),
                    full_name: None,
                    role,
                    is_active: true,
                },
            }),
        }
    }

    fn app_with_role(role: Option<Role>) -> App {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        App::new(cache_with_role(role), backend).0
    }

    #[test]
    fn panels_are_gated_by_role() {
        let mut app = app_with_role(None);
        let _ = app.update(Message::View(view::Message::Menu(Menu::Inventory)));
        assert_eq!(app.panels.current, Menu::Estimator);
        let _ = app.update(Message::View(view::Message::Menu(Menu::Users)));
        assert_eq!(app.panels.current, Menu::Estimator);

        let mut app = app_with_role(Some(Role::Installer));
        let _ = app.update(Message::View(view::Message::Menu(Menu::Inventory)));
        assert_eq!(app.panels.current, Menu::Inventory);
        let _ = app.update(Message::View(view::Message::Menu(Menu::Users)));
        assert_eq!(app.panels.current, Menu::Inventory);

        let mut app = app_with_role(Some(Role::Admin));
        let _ = app.update(Message::View(view::Message::Menu(Menu::Users)));
        assert_eq!(app.panels.current, Menu::Users);
    }

    #[test]
    fn client_role_only_sees_the_estimator() {
        let mut app = app_with_role(Some(Role::Client));
        for menu in [Menu::Inventory, Menu::Users] {
            let _ = app.update(Message::View(view::Message::Menu(menu)));
            assert_eq!(app.panels.current, Menu::Estimator);
        }
    }
}
