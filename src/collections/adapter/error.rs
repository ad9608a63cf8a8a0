use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Stack,
    Queue,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Stack => f.write_str("Stack"),
            ContainerKind::Queue => f.write_str("Queue"),
        }
    }
}

/// Returned by element access and removal on an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("called `{container}::{operation}` on an empty {}", .container.noun())]
pub struct OutOfRangeError {
    pub container: ContainerKind,
    pub operation: &'static str,
}

impl ContainerKind {
    #[inline]
    fn noun(&self) -> &'static str {
        match self {
            ContainerKind::Stack => "stack",
            ContainerKind::Queue => "queue",
        }
    }
}

impl OutOfRangeError {
    #[inline]
    pub(crate) const fn stack(operation: &'static str) -> Self {
        Self {
            container: ContainerKind::Stack,
            operation,
        }
    }

    #[inline]
    pub(crate) const fn queue(operation: &'static str) -> Self {
        Self {
            container: ContainerKind::Queue,
            operation,
        }
    }
}
