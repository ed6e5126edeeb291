//! Observer<T> — значение с уведомлением об изменении
//!
//! Простой reusable примитив (UI-биндинги, HUD, настройки):
//! - `set_value` уведомляет listeners только если значение реально изменилось (`PartialEq`)
//! - `invoke`: принудительный re-broadcast текущего значения
//! - `dispose`: сброс listeners и значения в `T::default()`
//!
//! # Доставка
//! Синхронно, в порядке регистрации. Паника внутри listener пробрасывается
//! вызывающему `set_value`/`invoke`, оставшиеся listeners НЕ получают значение.
//! Это текущее поведение, а не гарантия: если нужна all-or-nothing доставка,
//! оборачивайте listener сами.
//!
//! # Re-entrancy
//! Все методы берут `&self` (interior mutability), listener может держать
//! `Rc<Observer<T>>` и вызвать `set_value` прямо во время доставки. Вложенная
//! доставка отрабатывает целиком, затем внешняя продолжает со своим снимком
//! (listeners + значение на момент старта). Защиты от бесконечной рекурсии нет,
//! caller-beware.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::logger;

/// Listener: non-null callback. Идентичность = указатель `Rc`.
pub type Listener<T> = Rc<dyn Fn(&T)>;

pub struct Observer<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T: PartialEq + Clone> Observer<T> {
    /// Создаёт Observer без listeners
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Создаёт Observer с одним начальным listener
    pub fn with_listener(value: T, listener: Listener<T>) -> Self {
        Self {
            value: RefCell::new(value),
            listeners: RefCell::new(vec![listener]),
        }
    }

    /// Текущее значение. Borrow не держите через `set_value`.
    pub fn value(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Присваивает значение; при изменении уведомляет всех listeners
    ///
    /// Равное значение (`==`): no-op, listeners не вызываются.
    pub fn set_value(&self, value: T) {
        if *self.value.borrow() == value {
            return;
        }
        *self.value.borrow_mut() = value;
        self.invoke();
    }

    /// Вызывает всех listeners с текущим значением (даже если оно не менялось)
    pub fn invoke(&self) {
        // Снимок: listener может менять observer во время доставки
        let listeners = self.listeners.borrow().clone();
        let value = self.value.borrow().clone();

        logger::log(&format!(
            "Observer: invoking {} listener(s)",
            listeners.len()
        ));
        for listener in &listeners {
            listener(&value);
        }
    }

    /// Добавляет listener в конец списка. Дубликаты разрешены:
    /// каждая регистрация получает уведомление отдельно.
    pub fn add_listener(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Удаляет ПЕРВУЮ регистрацию этого listener (по идентичности `Rc`)
    ///
    /// Незарегистрированный listener: no-op.
    pub fn remove_listener(&self, listener: &Listener<T>) {
        let target = Rc::as_ptr(listener) as *const ();
        let mut listeners = self.listeners.borrow_mut();
        if let Some(index) = listeners
            .iter()
            .position(|registered| Rc::as_ptr(registered) as *const () == target)
        {
            listeners.remove(index);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: PartialEq + Clone + Default> Observer<T> {
    /// Очищает listeners и сбрасывает значение в `T::default()`. Идемпотентно.
    ///
    /// После dispose старые listeners не вызываются; новые можно добавить,
    /// но "дефолтность" значения владелец должен восстановить сам.
    pub fn dispose(&self) {
        self.listeners.borrow_mut().clear();
        *self.value.borrow_mut() = T::default();
    }
}

impl<T: PartialEq + Clone + Default> Default for Observer<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("value", &*self.value.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
