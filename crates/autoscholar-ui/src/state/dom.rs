//! Headless view model: controls, the display region, and the text input.
//!
//! These stand in for live document elements. A [`Control`] is a shared
//! handle, so a save workflow can keep mutating a control after the region
//! has moved on to newer content.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tokio::sync::{Mutex, RwLock};

use super::Generation;
use crate::config::labels;
use crate::render::escape;

static SAVE_BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<button\b[^>]*\bclass="([^"]*)"[^>]*\bdata-index="([^"]*)"[^>]*>([^<]*)</button>"#)
        .expect("valid save button pattern")
});

/// Visual state of a save control, derived from its class markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    /// No marker.
    Idle,
    /// Request in flight.
    Saving,
    /// Request succeeded.
    Saved,
    /// Request failed.
    Failed,
}

/// Element state behind a [`Control`] handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Visible text.
    pub label: String,

    /// Whether the control ignores activation.
    pub disabled: bool,

    /// Class markers.
    pub classes: BTreeSet<String>,

    /// `data-*` and other attributes.
    pub attributes: BTreeMap<String, String>,

    /// Store generation the control was mounted from.
    pub generation: Option<Generation>,
}

impl ControlState {
    /// Returns true if the class marker is set.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Status derived from the markers. `saving` wins over the others.
    #[must_use]
    pub fn status(&self) -> ControlStatus {
        if self.has_class(labels::SAVING_CLASS) {
            ControlStatus::Saving
        } else if self.has_class(labels::FAILED_CLASS) {
            ControlStatus::Failed
        } else if self.has_class(labels::SAVED_CLASS) {
            ControlStatus::Saved
        } else {
            ControlStatus::Idle
        }
    }

    /// Serialize back to button markup.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let classes = self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        let mut html = format!(r#"<button type="button" class="{}""#, escape(&classes));
        for (name, value) in &self.attributes {
            html.push_str(&format!(r#" {name}="{}""#, escape(value)));
        }
        if self.disabled {
            html.push_str(" disabled");
        }
        html.push_str(&format!(">{}</button>", escape(&self.label)));
        html
    }
}

/// Shared handle to one interactive element.
#[derive(Debug, Clone, Default)]
pub struct Control {
    state: Arc<Mutex<ControlState>>,
}

impl Control {
    /// Create a control from an initial state.
    #[must_use]
    pub fn new(state: ControlState) -> Self {
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Create an idle save control for `index`.
    #[must_use]
    pub fn save_button(index: usize, generation: Option<Generation>) -> Self {
        Self::new(ControlState {
            label: labels::CALL_TO_ACTION.to_string(),
            classes: BTreeSet::from([labels::SAVE_BUTTON_CLASS.to_string()]),
            attributes: BTreeMap::from([("data-index".to_string(), index.to_string())]),
            generation,
            ..Default::default()
        })
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ControlState {
        self.state.lock().await.clone()
    }

    /// Apply a change under a single lock.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut ControlState),
    {
        f(&mut *self.state.lock().await);
    }

    /// Apply a change only if `check` holds, under a single lock.
    ///
    /// Returns whether the change was applied.
    pub async fn update_if<P, F>(&self, check: P, f: F) -> bool
    where
        P: FnOnce(&ControlState) -> bool,
        F: FnOnce(&mut ControlState),
    {
        let mut state = self.state.lock().await;
        if !check(&state) {
            return false;
        }
        f(&mut state);
        true
    }

    /// Current label.
    pub async fn label(&self) -> String {
        self.state.lock().await.label.clone()
    }

    /// Whether the control is disabled.
    pub async fn is_disabled(&self) -> bool {
        self.state.lock().await.disabled
    }

    /// Whether a class marker is set.
    pub async fn has_class(&self, class: &str) -> bool {
        self.state.lock().await.has_class(class)
    }

    /// Attribute value.
    pub async fn attribute(&self, name: &str) -> Option<String> {
        self.state.lock().await.attributes.get(name).cloned()
    }

    /// Status derived from the class markers.
    pub async fn status(&self) -> ControlStatus {
        self.state.lock().await.status()
    }
}

#[derive(Debug, Default)]
struct RegionState {
    html: String,
    controls: Vec<Control>,
}

/// The element whose content is swapped by the controllers.
#[derive(Debug, Clone, Default)]
pub struct DisplayRegion {
    inner: Arc<RwLock<RegionState>>,
}

impl DisplayRegion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content. Previously mounted controls are detached.
    pub async fn set_html(&self, html: String) {
        let mut region = self.inner.write().await;
        region.html = html;
        region.controls.clear();
    }

    /// Replace the content and mount a control for every save button in it.
    ///
    /// Returns the number of mounted controls.
    pub async fn mount(&self, html: String, generation: Generation) -> usize {
        let controls: Vec<Control> = SAVE_BUTTON
            .captures_iter(&html)
            .filter_map(|caps| {
                let classes: BTreeSet<String> =
                    caps[1].split_whitespace().map(str::to_string).collect();
                if !classes.contains(labels::SAVE_BUTTON_CLASS) {
                    return None;
                }
                Some(Control::new(ControlState {
                    label: caps[3].to_string(),
                    disabled: false,
                    classes,
                    attributes: BTreeMap::from([("data-index".to_string(), caps[2].to_string())]),
                    generation: Some(generation),
                }))
            })
            .collect();

        let mounted = controls.len();
        let mut region = self.inner.write().await;
        region.html = html;
        region.controls = controls;
        mounted
    }

    /// Content as last set.
    pub async fn html(&self) -> String {
        self.inner.read().await.html.clone()
    }

    /// Content with every mounted control serialized in its live state.
    pub async fn live_html(&self) -> String {
        let (html, controls) = {
            let region = self.inner.read().await;
            (region.html.clone(), region.controls.clone())
        };

        let mut states = Vec::with_capacity(controls.len());
        for control in &controls {
            states.push(control.snapshot().await);
        }

        let mut states = states.into_iter();
        SAVE_BUTTON
            .replace_all(&html, |caps: &regex::Captures<'_>| {
                let is_save = caps[1].split_whitespace().any(|c| c == labels::SAVE_BUTTON_CLASS);
                is_save
                    .then(|| states.next())
                    .flatten()
                    .map_or_else(|| caps[0].to_string(), |state| state.outer_html())
            })
            .into_owned()
    }

    /// All mounted save controls, in document order.
    pub async fn save_controls(&self) -> Vec<Control> {
        self.inner.read().await.controls.clone()
    }

    /// Mounted save control whose `data-index` equals `index`.
    pub async fn save_control(&self, index: usize) -> Option<Control> {
        let wanted = index.to_string();
        for control in self.save_controls().await {
            if control.attribute("data-index").await.as_deref() == Some(wanted.as_str()) {
                return Some(control);
            }
        }
        None
    }
}

/// Single-line text field.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: Arc<RwLock<String>>,
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    pub async fn value(&self) -> String {
        self.value.read().await.clone()
    }

    /// Replace the value.
    pub async fn set(&self, value: impl Into<String>) {
        *self.value.write().await = value.into();
    }

    /// Empty the field.
    pub async fn clear(&self) {
        self.value.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = concat!(
        r#"<tr><td><button type="button" class="save-button" data-index="0">Add</button></td></tr>"#,
        "\n",
        r#"<tr><td><button type="button" class="other" data-index="9">Other</button></td></tr>"#,
        "\n",
        r#"<tr><td><button type="button" class="save-button" data-index="1">Add</button></td></tr>"#,
    );

    #[tokio::test]
    async fn test_mount_finds_save_buttons_only() {
        let region = DisplayRegion::new();
        let mounted = region.mount(MARKUP.to_string(), Generation::default()).await;

        assert_eq!(mounted, 2);
        let second = region.save_control(1).await.unwrap();
        assert_eq!(second.label().await, "Add");
        assert!(second.has_class("save-button").await);
        assert!(region.save_control(9).await.is_none());
    }

    #[tokio::test]
    async fn test_set_html_detaches_controls() {
        let region = DisplayRegion::new();
        region.mount(MARKUP.to_string(), Generation::default()).await;
        let held = region.save_control(0).await.unwrap();

        region.set_html("<p>loading</p>".to_string()).await;

        assert!(region.save_controls().await.is_empty());
        // Detached handles stay usable.
        held.update(|s| s.label = "Saved!".into()).await;
        assert_eq!(held.label().await, "Saved!");
    }

    #[tokio::test]
    async fn test_live_html_reflects_control_state() {
        let region = DisplayRegion::new();
        region.mount(MARKUP.to_string(), Generation::default()).await;
        let first = region.save_control(0).await.unwrap();
        first
            .update(|s| {
                s.disabled = true;
                s.label = labels::SAVED.to_string();
                s.classes.insert(labels::SAVED_CLASS.to_string());
            })
            .await;

        let html = region.live_html().await;
        assert!(html.contains(
            r#"<button type="button" class="save-button saved" data-index="0" disabled>Saved!</button>"#
        ));
        assert!(html.contains(r#"class="other" data-index="9">Other</button>"#));
        assert!(html.contains(r#"data-index="1">Add</button>"#));
    }

    #[test]
    fn test_status_precedence() {
        let mut state = ControlState::default();
        assert_eq!(state.status(), ControlStatus::Idle);
        state.classes.insert(labels::FAILED_CLASS.into());
        assert_eq!(state.status(), ControlStatus::Failed);
        state.classes.insert(labels::SAVING_CLASS.into());
        assert_eq!(state.status(), ControlStatus::Saving);
    }

    #[tokio::test]
    async fn test_text_input() {
        let input = TextInput::new();
        input.set("abc123").await;
        assert_eq!(input.value().await, "abc123");
        input.clear().await;
        assert!(input.value().await.is_empty());
    }
}
