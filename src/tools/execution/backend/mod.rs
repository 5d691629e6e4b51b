//! Concrete tmux backends.

pub(super) mod local;
