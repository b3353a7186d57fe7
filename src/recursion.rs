//! Depth tracking for nested entity rendering.
//!
//! A [`RenderContext`] is created once per top-level render and handed down
//! by value. Each nested entity render asks for a child context through
//! [`RenderContext::nested`]; the parent is never mutated, so the depth falls
//! back to zero as soon as a new top-level render starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest allowed nesting of entity renders.
pub const MAX_RENDER_DEPTH: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("recursive rendering detected at depth {depth}, aborting rendering")]
pub struct RecursionLimitExceeded {
    pub depth: usize,
}

/// What a formatter does once the depth limit is hit.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecursionPolicy {
    /// Abort the branch with [`RecursionLimitExceeded`].
    Fail,
    /// Render nothing further for the branch and log a warning.
    #[default]
    Degrade,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderContext {
    depth: usize,
    policy: RecursionPolicy,
}

impl RenderContext {
    /// Context for a fresh top-level render.
    pub fn top_level(policy: RecursionPolicy) -> Self {
        Self { depth: 0, policy }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn policy(&self) -> RecursionPolicy {
        self.policy
    }

    /// Context for one more level of nested rendering.
    pub fn nested(&self) -> Result<Self, RecursionLimitExceeded> {
        let depth = self.depth + 1;
        if depth > MAX_RENDER_DEPTH {
            return Err(RecursionLimitExceeded { depth });
        }
        Ok(Self {
            depth,
            policy: self.policy,
        })
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::top_level(RecursionPolicy::default())
    }
}
