use iced::futures::StreamExt;
use std::collections::VecDeque;
use std::sync::Arc;

use iced_runtime::{task::into_stream, Action};

use crate::{
    app::{cache::Cache, message::Message, state::State},
    backend::Backend,
};

pub struct Sandbox<S: State> {
    state: S,
}

impl<S: State + 'static> Sandbox<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Feed every message produced by pending tasks back into the state,
    /// until nothing is left in flight.
    async fn run(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        first: iced::Task<Message>,
    ) {
        let mut tasks = VecDeque::new();
        tasks.push_back(first);
        while let Some(task) = tasks.pop_front() {
            if let Some(mut stream) = into_stream(task) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(msg) = action {
                        tasks.push_back(self.state.update(backend.clone(), cache, msg));
                    }
                }
            }
        }
    }

    pub async fn update(
        mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Self {
        let task = self.state.update(backend.clone(), cache, message);
        self.run(backend, cache, task).await;
        self
    }

    pub async fn load(
        mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
    ) -> Self {
        let task = self.state.reload(backend.clone(), cache);
        self.run(backend, cache, task).await;
        self
    }
}
