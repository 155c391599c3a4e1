//! Concrete [`Transport`](crate::sender::Transport) implementations.

pub mod http;
