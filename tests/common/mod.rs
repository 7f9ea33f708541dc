//! Shared test fixtures: an in-memory fake browser implementing the driver
//! boundary, plus deferred questions with controllable latency.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use troupe::screenplay::answerable::{Answerable, OneOrMany};
use troupe::screenplay::error::{BrowserError, BrowserResult, ScreenplayResult};
use troupe::screenplay::{Actor, Question};
use troupe::web::{
    BrowserDriver, DialogHandle, DialogRef, ElementHandle, ElementRef, Selector,
};

/// Route library tracing to the test output when `RUST_LOG` asks for it.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Where the fake browser's modal dialog currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogDisposition {
    None,
    Open,
    Dismissed,
    Accepted,
}

struct SelectControl {
    multiple: bool,
    options: Vec<(String, String)>,
    // values in the order they were selected
    selected: Vec<String>,
}

impl SelectControl {
    fn value_for_label(&self, label: &str) -> Option<String> {
        self.options
            .iter()
            .find(|(_, l)| l == label)
            .map(|(v, _)| v.clone())
    }

    fn label_for_value(&self, value: &str) -> Option<String> {
        self.options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, l)| l.clone())
    }

    fn select(&mut self, value: &str) {
        if self.multiple {
            self.selected.retain(|v| v != value);
            self.selected.push(value.to_string());
        } else {
            self.selected = vec![value.to_string()];
        }
    }
}

#[derive(Default)]
struct BrowserState {
    url: Option<String>,
    controls: HashMap<String, SelectControl>,
    texts: HashMap<String, (String, u64)>,
    text_lists: HashMap<String, Vec<(String, u64)>>,
    clicks: Vec<String>,
    dialog: Option<DialogDisposition>,
}

/// An in-memory browser session driven entirely through the driver traits.
#[derive(Default)]
pub struct FakeBrowser {
    state: Arc<Mutex<BrowserState>>,
}

fn key(selector: &Selector) -> String {
    selector.to_string()
}

impl FakeBrowser {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_select(&self, selector: &Selector, multiple: bool, options: &[(&str, &str)]) {
        self.state.lock().controls.insert(
            key(selector),
            SelectControl {
                multiple,
                options: options
                    .iter()
                    .map(|(v, l)| (v.to_string(), l.to_string()))
                    .collect(),
                selected: Vec::new(),
            },
        );
    }

    pub fn add_text(&self, selector: &Selector, text: &str) {
        self.add_text_with_latency(selector, text, 0);
    }

    /// A text element whose read-back completes only after the given delay.
    pub fn add_text_with_latency(&self, selector: &Selector, text: &str, delay_ms: u64) {
        self.state
            .lock()
            .texts
            .insert(key(selector), (text.to_string(), delay_ms));
    }

    /// A collection of text elements, each with its own read-back delay.
    pub fn add_text_list(&self, selector: &Selector, texts: &[(&str, u64)]) {
        self.state.lock().text_lists.insert(
            key(selector),
            texts.iter().map(|(t, d)| (t.to_string(), *d)).collect(),
        );
    }

    /// Put an open modal dialog on the page, as a click handler would.
    pub fn open_alert(&self) {
        self.state.lock().dialog = Some(DialogDisposition::Open);
    }

    pub fn dialog_disposition(&self) -> DialogDisposition {
        self.state.lock().dialog.unwrap_or(DialogDisposition::None)
    }

    pub fn selected_values_of(&self, selector: &Selector) -> Vec<String> {
        self.state.lock().controls[&key(selector)].selected.clone()
    }

    pub fn clicks(&self) -> Vec<String> {
        self.state.lock().clicks.clone()
    }

    pub fn current_url(&self) -> Option<String> {
        self.state.lock().url.clone()
    }
}

#[async_trait]
impl BrowserDriver for FakeBrowser {
    async fn locate(&self, selector: &Selector) -> BrowserResult<ElementRef> {
        let key = key(selector);
        let known = {
            let state = self.state.lock();
            state.controls.contains_key(&key) || state.texts.contains_key(&key)
        };
        if !known {
            return Err(BrowserError::ElementNotFound {
                name: key.clone(),
                selector: key,
            });
        }

        Ok(Arc::new(FakeElement {
            state: Arc::clone(&self.state),
            key,
        }))
    }

    async fn locate_all(&self, selector: &Selector) -> BrowserResult<Vec<ElementRef>> {
        let key = key(selector);
        let count = match self.state.lock().text_lists.get(&key) {
            Some(items) => items.len(),
            None => {
                return Err(BrowserError::ElementNotFound {
                    name: key.clone(),
                    selector: key,
                });
            }
        };

        Ok((0..count)
            .map(|index| {
                Arc::new(FakeListItem {
                    state: Arc::clone(&self.state),
                    key: key.clone(),
                    index,
                }) as ElementRef
            })
            .collect())
    }

    async fn open_dialog(&self) -> BrowserResult<DialogRef> {
        match self.state.lock().dialog {
            Some(DialogDisposition::Open) => Ok(Arc::new(FakeDialog {
                state: Arc::clone(&self.state),
            })),
            _ => Err(BrowserError::NoDialogOpen),
        }
    }

    async fn navigate_to(&self, url: &str) -> BrowserResult<()> {
        self.state.lock().url = Some(url.to_string());
        Ok(())
    }
}

struct FakeElement {
    state: Arc<Mutex<BrowserState>>,
    key: String,
}

impl FakeElement {
    fn with_control<R>(
        &self,
        op: impl FnOnce(&mut SelectControl) -> BrowserResult<R>,
    ) -> BrowserResult<R> {
        let mut state = self.state.lock();
        match state.controls.get_mut(&self.key) {
            Some(control) => op(control),
            None => Err(BrowserError::Session(format!(
                "{} is not a select control",
                self.key
            ))),
        }
    }
}

#[async_trait]
impl ElementHandle for FakeElement {
    async fn select_by_value(&self, value: &str) -> BrowserResult<()> {
        let key = self.key.clone();
        self.with_control(|control| {
            if control.label_for_value(value).is_none() {
                return Err(BrowserError::OptionNotFound {
                    wanted: value.to_string(),
                    control: key,
                });
            }
            control.select(value);
            Ok(())
        })
    }

    async fn select_by_label(&self, label: &str) -> BrowserResult<()> {
        let key = self.key.clone();
        self.with_control(|control| match control.value_for_label(label) {
            Some(value) => {
                control.select(&value);
                Ok(())
            }
            None => Err(BrowserError::OptionNotFound {
                wanted: label.to_string(),
                control: key,
            }),
        })
    }

    async fn selected_values(&self) -> BrowserResult<Vec<String>> {
        self.with_control(|control| Ok(control.selected.clone()))
    }

    async fn selected_labels(&self) -> BrowserResult<Vec<String>> {
        self.with_control(|control| {
            Ok(control
                .selected
                .iter()
                .filter_map(|v| control.label_for_value(v))
                .collect())
        })
    }

    async fn text(&self) -> BrowserResult<String> {
        let (text, delay_ms) = match self.state.lock().texts.get(&self.key) {
            Some(entry) => entry.clone(),
            None => {
                return Err(BrowserError::Session(format!(
                    "{} has no text",
                    self.key
                )));
            }
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        Ok(text)
    }

    async fn click(&self) -> BrowserResult<()> {
        self.state.lock().clicks.push(self.key.clone());
        Ok(())
    }
}

struct FakeListItem {
    state: Arc<Mutex<BrowserState>>,
    key: String,
    index: usize,
}

#[async_trait]
impl ElementHandle for FakeListItem {
    async fn select_by_value(&self, _value: &str) -> BrowserResult<()> {
        Err(BrowserError::Session("list items are not selectable".into()))
    }

    async fn select_by_label(&self, _label: &str) -> BrowserResult<()> {
        Err(BrowserError::Session("list items are not selectable".into()))
    }

    async fn selected_values(&self) -> BrowserResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn selected_labels(&self) -> BrowserResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn text(&self) -> BrowserResult<String> {
        let (text, delay_ms) = {
            let state = self.state.lock();
            state.text_lists[&self.key][self.index].clone()
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        Ok(text)
    }

    async fn click(&self) -> BrowserResult<()> {
        Ok(())
    }
}

struct FakeDialog {
    state: Arc<Mutex<BrowserState>>,
}

impl FakeDialog {
    fn settle(&self, disposition: DialogDisposition) -> BrowserResult<()> {
        let mut state = self.state.lock();
        match state.dialog {
            Some(DialogDisposition::Open) => {
                state.dialog = Some(disposition);
                Ok(())
            }
            _ => Err(BrowserError::NoDialogOpen),
        }
    }
}

#[async_trait]
impl DialogHandle for FakeDialog {
    async fn dismiss(&self) -> BrowserResult<()> {
        self.settle(DialogDisposition::Dismissed)
    }

    async fn accept(&self) -> BrowserResult<()> {
        self.settle(DialogDisposition::Accepted)
    }

    async fn message(&self) -> BrowserResult<String> {
        Ok("hello!".to_string())
    }
}

/// A deferred scalar question that resolves after a configurable delay.
pub struct Eventually {
    description: String,
    value: String,
    delay: Duration,
}

impl Eventually {
    pub fn value(description: &str, value: &str, delay_ms: u64) -> Self {
        Self {
            description: description.to_string(),
            value: value.to_string(),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl Question for Eventually {
    type Answer = String;

    async fn answered_by(&self, _actor: &Actor) -> ScreenplayResult<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.value.clone())
    }
}

impl fmt::Display for Eventually {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<Eventually> for Answerable<String> {
    fn from(question: Eventually) -> Self {
        Answerable::question(question)
    }
}

impl From<Eventually> for OneOrMany<String> {
    fn from(question: Eventually) -> Self {
        OneOrMany::One(question.into())
    }
}

/// A deferred collection question that resolves after a configurable delay.
pub struct EventuallyAll {
    description: String,
    values: Vec<String>,
    delay: Duration,
}

impl EventuallyAll {
    pub fn values(description: &str, values: &[&str], delay_ms: u64) -> Self {
        Self {
            description: description.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl Question for EventuallyAll {
    type Answer = Vec<String>;

    async fn answered_by(&self, _actor: &Actor) -> ScreenplayResult<Vec<String>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.values.clone())
    }
}

impl fmt::Display for EventuallyAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<EventuallyAll> for Answerable<Vec<String>> {
    fn from(question: EventuallyAll) -> Self {
        Answerable::question(question)
    }
}

impl From<EventuallyAll> for OneOrMany<String> {
    fn from(question: EventuallyAll) -> Self {
        OneOrMany::Many(question.into())
    }
}

/// A question that always rejects, for failure-propagation tests.
pub struct NeverAnswered {
    description: String,
}

impl NeverAnswered {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
        }
    }
}

#[async_trait]
impl Question for NeverAnswered {
    type Answer = String;

    async fn answered_by(&self, _actor: &Actor) -> ScreenplayResult<String> {
        Err(BrowserError::Session("the session is gone".to_string()).into())
    }
}

impl fmt::Display for NeverAnswered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<NeverAnswered> for Answerable<String> {
    fn from(question: NeverAnswered) -> Self {
        Answerable::question(question)
    }
}

impl From<NeverAnswered> for OneOrMany<String> {
    fn from(question: NeverAnswered) -> Self {
        OneOrMany::One(question.into())
    }
}
