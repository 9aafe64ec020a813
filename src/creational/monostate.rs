//! Monostate (Borg)
//!
//! Many `MonoState` values, one backing store. Writing an attribute through
//! any instance changes what every instance sees.

use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Insertion-ordered attribute store, created once and shared by handle.
#[derive(Debug, Clone)]
pub struct SharedState {
    attributes: Rc<RefCell<Vec<(String, Value)>>>,
}

impl SharedState {
    /// Starts with `x = 10` and `y = 20`.
    pub fn new() -> Self {
        SharedState {
            attributes: Rc::new(RefCell::new(vec![
                ("x".to_string(), Value::from(10)),
                ("y".to_string(), Value::from(20)),
            ])),
        }
    }

    fn set(&self, key: &str, value: Value) {
        let mut attributes = self.attributes.borrow_mut();
        match attributes.iter().position(|(k, _)| k == key) {
            Some(i) => attributes[i].1 = value,
            None => attributes.push((key.to_string(), value)),
        }
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.attributes
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct MonoState {
    state: SharedState,
}

impl MonoState {
    pub fn new(state: &SharedState, name: Option<&str>, last_name: Option<&str>) -> Self {
        let instance = MonoState {
            state: state.clone(),
        };
        if let Some(name) = name {
            instance.set("name", name);
        }
        if let Some(last_name) = last_name {
            instance.set("last_name", last_name);
        }
        instance
    }

    pub fn set(&self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        tracing::debug!(key, %value, "writing shared attribute");
        self.state.set(key, value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.state.get(key)
    }

    pub fn shares_state_with(&self, other: &MonoState) -> bool {
        Rc::ptr_eq(&self.state.attributes, &other.state.attributes)
    }
}

impl fmt::Display for MonoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self.state.attributes.borrow();
        let params: Vec<String> = attributes
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{k}={s}"),
                other => format!("{k}={other}"),
            })
            .collect();
        write!(f, "MonoState ({})", params.join(", "))
    }
}
