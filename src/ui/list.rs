// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Load / filter / render cycle shared by every dashboard list.
//!
//! A load clears the container, awaits its fetch, then renders one view per
//! record or a single placeholder. Each container carries a generation
//! counter: starting a load bumps it, and a resolution is applied only if
//! no newer load has started since. Superseded requests still run to
//! completion; their results are dropped.

use crate::error::Result;
use std::fmt;
use std::future::Future;
use tokio::sync::Mutex;

/// Placeholder texts for one kind of load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMessages {
    /// Shown when the fetch returns no records
    pub empty: String,
    /// Shown when the fetch fails
    pub failed: String,
}

impl ListMessages {
    pub fn new(empty: impl Into<String>, failed: impl Into<String>) -> Self {
        Self {
            empty: empty.into(),
            failed: failed.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Empty(String),
    Failed(String),
}

impl Placeholder {
    pub fn message(&self) -> &str {
        match self {
            Placeholder::Empty(msg) | Placeholder::Failed(msg) => msg,
        }
    }
}

/// Contents of a rendering container.
///
/// Invariant: `placeholder` is only set when `items` is empty. A cleared
/// container has neither.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<V> {
    pub items: Vec<V>,
    pub placeholder: Option<Placeholder>,
}

impl<V> Default for ListView<V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            placeholder: None,
        }
    }
}

impl<V> ListView<V> {
    pub fn is_cleared(&self) -> bool {
        self.items.is_empty() && self.placeholder.is_none()
    }
}

impl<V: fmt::Display> fmt::Display for ListView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(placeholder) = &self.placeholder {
            return writeln!(f, "{}", placeholder.message());
        }
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Whether a load's result reached the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rendered `count` records (0 means the empty placeholder).
    Rendered { count: usize },
    /// Fetch failed; the failure placeholder was rendered.
    Failed,
    /// A newer load started first; this result was discarded.
    Superseded,
}

struct ListState<V> {
    generation: u64,
    view: ListView<V>,
}

/// One rendering container plus its generation counter.
pub struct ListController<V> {
    name: &'static str,
    state: Mutex<ListState<V>>,
}

impl<V: Clone> ListController<V> {
    /// `name` only labels log lines.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(ListState {
                generation: 0,
                view: ListView::default(),
            }),
        }
    }

    /// Current contents of the container.
    pub async fn view(&self) -> ListView<V> {
        self.state.lock().await.view.clone()
    }

    pub async fn generation(&self) -> u64 {
        self.state.lock().await.generation
    }

    /// Run one load: clear, fetch, render.
    ///
    /// The container is cleared before `fetch` is first polled, so no
    /// network I/O happens ahead of the clear.
    pub async fn load<T, Fut, R>(&self, fetch: Fut, render: R, messages: &ListMessages) -> LoadOutcome
    where
        Fut: Future<Output = Result<Vec<T>>>,
        R: Fn(&T) -> V,
    {
        let ticket = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.view = ListView::default();
            state.generation
        };

        let result = fetch.await;

        let mut state = self.state.lock().await;
        if state.generation != ticket {
            tracing::debug!(
                list = self.name,
                ticket,
                latest = state.generation,
                "Discarding superseded list result"
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(records) if records.is_empty() => {
                state.view.placeholder = Some(Placeholder::Empty(messages.empty.clone()));
                LoadOutcome::Rendered { count: 0 }
            }
            Ok(records) => {
                state.view.items = records.iter().map(render).collect();
                LoadOutcome::Rendered {
                    count: state.view.items.len(),
                }
            }
            Err(e) => {
                tracing::error!(list = self.name, error = %e, "Failed to load list");
                state.view.placeholder = Some(Placeholder::Failed(messages.failed.clone()));
                LoadOutcome::Failed
            }
        }
    }

    /// Remove the first item matching `pred`. Does not touch the generation.
    pub async fn remove_where<P>(&self, pred: P) -> Option<V>
    where
        P: Fn(&V) -> bool,
    {
        let mut state = self.state.lock().await;
        let index = state.view.items.iter().position(pred)?;
        Some(state.view.items.remove(index))
    }

    /// Clone of the first item matching `pred`.
    pub async fn find<P>(&self, pred: P) -> Option<V>
    where
        P: Fn(&V) -> bool,
    {
        self.state.lock().await.view.items.iter().find(|v| pred(v)).cloned()
    }
}
