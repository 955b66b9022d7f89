//! Headless stand-ins for the visual root and the UI thread's event loop.

use std::collections::VecDeque;

/// The root of the visible scene: attached stylesheets, style classes and an
/// inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRoot {
    pub stylesheets: Vec<String>,
    pub style_classes: Vec<String>,
    pub style: String,
}

impl ViewRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_style_class(&self, class: &str) -> bool {
        self.style_classes.iter().any(|c| c == class)
    }
}

type Job = Box<dyn FnOnce(&mut ViewRoot) + Send>;

/// Work posted to run later on the UI thread.
///
/// Mutations of the live scene are queued instead of applied inside the
/// callback that produced them; the owner of the root drains the queue once
/// the callback has returned.
#[derive(Default)]
pub struct EventQueue {
    pending: VecDeque<Job>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run_later<F>(&mut self, job: F)
    where
        F: FnOnce(&mut ViewRoot) + Send + 'static,
    {
        self.pending.push_back(Box::new(job));
    }

    /// Runs every queued job in posting order and returns how many ran.
    pub fn run_pending(&mut self, root: &mut ViewRoot) -> usize {
        let mut ran = 0;
        while let Some(job) = self.pending.pop_front() {
            job(root);
            ran += 1;
        }
        ran
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
