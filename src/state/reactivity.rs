// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Identificador para cancelar una suscripción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Lista compartida de callbacks. Los clones comparten la misma lista.
#[derive(Clone, Default)]
pub struct Subscribers {
    next_id: Rc<Cell<u64>>,
    callbacks: Rc<RefCell<Vec<(SubscriptionId, Callback)>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.callbacks.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista antes para que un callback pueda (des)suscribirse.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in callbacks {
            callback();
        }
    }
}
