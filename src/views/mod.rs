//! Screens that drive [`ProductClient`](crate::services::ProductClient).
//!
//! Each view owns its state and re-fetches whenever it loads. Every client
//! error is turned into a [`Notice`] here; nothing propagates past a view.

mod create;
mod detail;
mod edit;
mod list;

use std::fmt;

pub use create::CreateView;
pub use detail::DetailView;
pub use edit::EditView;
pub use list::ListView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => f.write_str(msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    ProductList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
    pub notice: Option<Notice>,
    pub navigation: Navigation,
}

impl ViewOutcome {
    pub fn stay() -> Self {
        Self {
            notice: None,
            navigation: Navigation::Stay,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Error(msg.into())),
            navigation: Navigation::Stay,
        }
    }

    pub fn to_list(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            navigation: Navigation::ProductList,
        }
    }

    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}
