use std::sync::Arc;

use iced::Task;

use solara_ui::widget::Element;

use crate::{
    app::{cache::Cache, error::Error, menu::Menu, message::Message, state::State, view},
    backend::{
        api::{Role, User},
        Backend,
    },
};

#[derive(Default)]
pub struct UsersPanel {
    users: Vec<User>,
    /// The row whose role change is in flight, with the role to restore if
    /// the server refuses it.
    updating: Option<(u32, Role)>,
    warning: Option<Error>,
    loaded: bool,
}

impl UsersPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl State for UsersPanel {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message> {
        view::dashboard(
            &Menu::Users,
            cache,
            self.warning.as_ref(),
            view::users::users_view(
                &self.users,
                self.updating.map(|(id, _)| id),
                self.loaded,
            ),
        )
    }

    fn update(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::Users(res) => {
                self.loaded = true;
                match res {
                    Ok(users) => {
                        self.warning = None;
                        self.users = users;
                    }
                    Err(e) => {
                        self.warning = Some(e);
                    }
                }
            }
            Message::View(view::Message::Users(view::UsersMessage::RoleSelected(id, role))) => {
                // One change at a time. The row is applied right away and
                // rolled back if the server refuses it.
                if self.updating.is_none() {
                    if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
                        if user.role != role {
                            self.updating = Some((id, user.role));
                            self.warning = None;
                            user.role = role;
                            if let Some(token) = cache.token() {
                                return Task::perform(
                                    async move {
                                        backend
                                            .update_user_role(&token, id, role)
                                            .await
                                            .map_err(Error::UpdateRole)
                                    },
                                    move |res| Message::RoleUpdated(id, role, res),
                                );
                            }
                        }
                    }
                }
            }
            Message::RoleUpdated(id, role, res) => {
                if let Some((pending, previous)) = self.updating {
                    if pending == id {
                        self.updating = None;
                        match res {
                            Ok(()) => {
                                tracing::info!("User {} role changed to {}", id, role);
                            }
                            Err(e) => {
                                if let Some(user) =
                                    self.users.iter_mut().find(|user| user.id == id)
                                {
                                    user.role = previous;
                                }
                                self.warning = Some(e);
                            }
                        }
                    }
                }
            }
            _ => {}
        };
        Task::none()
    }

    fn reload(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
    ) -> Task<Message> {
        self.loaded = false;
        self.warning = None;
        self.updating = None;
        if let Some(token) = cache.token() {
            Task::perform(
                async move { backend.list_users(&token).await.map_err(Error::LoadUsers) },
                Message::Users,
            )
        } else {
            Task::none()
        }
    }
}

impl From<UsersPanel> for Box<dyn State> {
    fn from(s: UsersPanel) -> Box<dyn State> {
        Box::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::BackendError,
        dir::SolaraDirectory,
        session::Session,
        utils::{mock::ScriptedBackend, sandbox::Sandbox},
    };
    use serde_json::json;

    fn admin_cache() -> Cache {
        Cache {
            datadir: SolaraDirectory::new(std::path::PathBuf::from("/tmp/solara-test")),
            session: Some(Session {
                token: "tok-admin".to_string(),
                user: User {
                    id: 1,
                    email: "root@solara.energy".to_string(),
                    full_name: None,
                    role: Role::Admin,
                    is_active: true,
                },
            }),
        }
    }

    fn users_fixture() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "email": "root@solara.energy",
                "full_name": null,
                "role": "admin",
                "is_active": true,
            },
            {
                "id": 7,
                "email": "bob@example.com",
                "full_name": "Bob Tran",
                "role": "client",
                "is_active": true,
            },
        ])
    }

    #[tokio::test]
    async fn users_role_change_is_applied_optimistically() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            (
                Some(json!({"method": "list_users", "token": "tok-admin"})),
                Ok(users_fixture()),
            ),
            (
                Some(json!({
                    "method": "update_user_role",
                    "token": "tok-admin",
                    "params": {"user_id": 7, "role": "admin"},
                })),
                Ok(json!({})),
            ),
        ]));
        let cache = admin_cache();

        let sandbox = Sandbox::new(UsersPanel::new())
            .load(backend.clone(), &cache)
            .await;
        assert!(sandbox.state().loaded);
        assert_eq!(sandbox.state().users.len(), 2);

        let sandbox = sandbox
            .update(
                backend,
                &cache,
                Message::View(view::Message::Users(view::UsersMessage::RoleSelected(
                    7,
                    Role::Admin,
                ))),
            )
            .await;

        let panel = sandbox.state();
        assert_eq!(panel.users[1].role, Role::Admin);
        assert!(panel.updating.is_none());
        assert!(panel.warning.is_none());
    }

    #[tokio::test]
    async fn users_role_change_rolls_back_on_failure() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            (None, Ok(users_fixture())),
            (
                None,
                Err(BackendError::Http(
                    Some(403),
                    "Not enough permissions".to_string(),
                )),
            ),
        ]));
        let cache = admin_cache();

        let sandbox = Sandbox::new(UsersPanel::new())
            .load(backend.clone(), &cache)
            .await;
        let sandbox = sandbox
            .update(
                backend,
                &cache,
                Message::View(view::Message::Users(view::UsersMessage::RoleSelected(
                    7,
                    Role::Admin,
                ))),
            )
            .await;

        let panel = sandbox.state();
        assert_eq!(panel.users[1].role, Role::Client);
        assert!(panel.updating.is_none());
        assert!(matches!(panel.warning, Some(Error::UpdateRole(_))));
    }

    #[tokio::test]
    async fn users_selecting_current_role_does_nothing() {
        let backend = Arc::new(ScriptedBackend::new(vec![(None, Ok(users_fixture()))]));
        let cache = admin_cache();

        let sandbox = Sandbox::new(UsersPanel::new())
            .load(backend.clone(), &cache)
            .await;
        // No script entry is left: a backend call here would panic.
        let sandbox = sandbox
            .update(
                backend,
                &cache,
                Message::View(view::Message::Users(view::UsersMessage::RoleSelected(
                    7,
                    Role::Client,
                ))),
            )
            .await;

        assert!(sandbox.state().updating.is_none());
        assert_eq!(sandbox.state().users[1].role, Role::Client);
    }
}
