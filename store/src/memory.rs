use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionBackend;

/// In-memory SessionBackend for native targets and tests.
///
/// Clones share the same underlying map, so a backend handed to several
/// stores behaves like one storage area.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
