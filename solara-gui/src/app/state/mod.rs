mod estimator;
mod inventory;
mod users;

use std::sync::Arc;

use iced::Task;

use solara_ui::widget::Element;

use super::{cache::Cache, message::Message, view};
use crate::backend::Backend;

pub use estimator::EstimatorPanel;
pub use inventory::InventoryPanel;
pub use users::UsersPanel;

pub trait State {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message>;
    fn update(
        &mut self,
        _backend: Arc<dyn Backend + Sync + Send>,
        _cache: &Cache,
        _message: Message,
    ) -> Task<Message> {
        Task::none()
    }
    fn interrupt(&mut self) {}
    fn reload(
        &mut self,
        _backend: Arc<dyn Backend + Sync + Send>,
        _cache: &Cache,
    ) -> Task<Message> {
        Task::none()
    }
}
