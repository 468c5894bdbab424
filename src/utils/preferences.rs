use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Process-wide display preferences. Held behind an injected handle
/// rather than ambient global state so the codec/aggregation core
/// never reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub theme: String,
    pub locale: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            locale: "en".to_string(),
        }
    }
}

type Subscriber = Box<dyn Fn(&Preferences) + Send + 'static>;

/// Shared get/update/subscribe handle, created once at startup and
/// cloned into whatever needs it. Subscribers run synchronously after
/// each update with the new value.
#[derive(Clone, Default)]
pub struct PreferencesHandle {
    inner: Arc<Mutex<Preferences>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl PreferencesHandle {
    pub fn new(initial: Preferences) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get(&self) -> Preferences {
        self.inner.lock().unwrap().clone()
    }

    pub fn update(&self, apply: impl FnOnce(&mut Preferences)) {
        let updated = {
            let mut prefs = self.inner.lock().unwrap();
            apply(&mut prefs);
            prefs.clone()
        };
        for subscriber in self.subscribers.lock().unwrap().iter() {
            subscriber(&updated);
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&Preferences) + Send + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn defaults_match_initial_app_state() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, "dark");
        assert_eq!(prefs.locale, "en");
    }

    #[test]
    fn update_is_visible_to_clones() {
        let handle = PreferencesHandle::default();
        let clone = handle.clone();
        handle.update(|p| p.theme = "light".to_string());
        assert_eq!(clone.get().theme, "light");
    }

    #[test]
    fn subscribers_see_each_update() {
        let handle = PreferencesHandle::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        handle.subscribe(move |prefs| {
            assert_eq!(prefs.locale, "zh");
            counter.fetch_add(1, Ordering::SeqCst);
        });
        handle.update(|p| p.locale = "zh".to_string());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
