//! Ambient build scope.
//!
//! While a [`Document`](crate::Document) is being built through
//! [`Document::build`](crate::Document::build), helpers that never see the
//! document (symbol naming, template expansion) can still register imports
//! and read its configuration. Scopes are thread-local and nest; each is
//! popped by its guard on every exit path.

use std::{cell::RefCell, marker::PhantomData};

use crate::EmitConfig;

struct Frame {
    config: EmitConfig,
    imports: Vec<String>,
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

/// Guard for one active build scope.
///
/// Not `Send`: the scope belongs to the thread that entered it.
#[must_use = "the scope ends when the guard is dropped"]
pub struct BuildScope {
    depth: usize,
    finished: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl BuildScope {
    /// Push a new scope for a document with `config`.
    pub fn enter(config: &EmitConfig) -> Self {
        let depth = FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            frames.push(Frame {
                config: config.clone(),
                imports: Vec::new(),
            });
            frames.len()
        });
        tracing::trace!(depth, "entered build scope");
        Self {
            depth,
            finished: false,
            _thread_bound: PhantomData,
        }
    }

    /// End the scope, returning the imports registered while it was active.
    pub fn finish(mut self) -> Vec<String> {
        self.finished = true;
        pop_to(self.depth).unwrap_or_default()
    }
}

impl Drop for BuildScope {
    fn drop(&mut self) {
        if !self.finished {
            pop_to(self.depth);
        }
    }
}

/// Pop every frame at or above `depth`, returning the imports of the frame
/// at `depth` itself.
fn pop_to(depth: usize) -> Option<Vec<String>> {
    FRAMES
        .try_with(|frames| {
            let mut frames = frames.borrow_mut();
            let mut imports = None;
            while frames.len() >= depth {
                match frames.pop() {
                    Some(frame) => imports = Some(frame.imports),
                    None => break,
                }
            }
            tracing::trace!(depth, "left build scope");
            imports
        })
        .ok()
        .flatten()
}

/// Register a namespace import with the innermost active scope.
///
/// Returns `false` when no scope is active.
pub fn register_import(namespace: &str) -> bool {
    FRAMES.with(|frames| match frames.borrow_mut().last_mut() {
        Some(frame) => {
            if !frame.imports.iter().any(|ns| ns == namespace) {
                frame.imports.push(namespace.to_string());
            }
            true
        }
        None => false,
    })
}

/// Configuration of the document being built, if any.
pub fn active_config() -> Option<EmitConfig> {
    FRAMES.with(|frames| frames.borrow().last().map(|frame| frame.config.clone()))
}

/// Whether a build scope is active on this thread.
pub fn is_building() -> bool {
    FRAMES.with(|frames| !frames.borrow().is_empty())
}
