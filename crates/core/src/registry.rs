//! Entity registry: the shared, mutation-safe list of live game objects.
//!
//! The registry is scoped to one running session. Dispatch snapshots the
//! entity list before iterating, so entities may register or unregister
//! others (or themselves) mid-dispatch without corrupting iteration.
//! Registration order is significant only for draw order: later entities
//! draw on top.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use tui_snake_term::Screen;
use tui_snake_types::InputEvent;

use crate::entity::Entity;
use crate::session::Session;

pub type EntityRef = Arc<Mutex<dyn Entity>>;

#[derive(Default)]
pub struct Registry {
    entities: RwLock<Vec<EntityRef>>,
}

fn lock_entity(entity: &EntityRef) -> MutexGuard<'_, dyn Entity + 'static> {
    entity.lock().unwrap_or_else(|e| e.into_inner())
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, entity: EntityRef) {
        let mut entities = self.entities.write().unwrap_or_else(|e| e.into_inner());
        entities.push(entity);
    }

    /// Remove by identity. A no-op when the entity is not registered.
    pub fn unregister(&self, entity: &EntityRef) {
        let mut entities = self.entities.write().unwrap_or_else(|e| e.into_inner());
        entities.retain(|e| !Arc::ptr_eq(e, entity));
    }

    pub fn clear(&self) {
        let mut entities = self.entities.write().unwrap_or_else(|e| e.into_inner());
        entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Vec<EntityRef> {
        self.entities
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Deliver one event to every currently registered tickable entity.
    pub fn dispatch_event(&self, session: &Session, event: InputEvent) {
        for entity in self.snapshot() {
            let mut guard = lock_entity(&entity);
            if let Some(tickable) = guard.as_tickable() {
                tickable.tick(session, event);
            }
        }
    }

    /// Invoke draw on every drawable entity in registration order.
    pub fn draw_entities(&self, session: &Session, screen: &mut Screen) {
        for entity in self.snapshot() {
            let mut guard = lock_entity(&entity);
            if let Some(drawable) = guard.as_drawable() {
                drawable.draw(session, screen);
            }
        }
    }
}
