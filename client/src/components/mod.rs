//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render author data from the shared `AppViews` context and turn
//! clicks and submissions into controller calls. Row buttons are routed
//! through a page-supplied `CommandTable`.

pub mod author_detail;
pub mod author_form;
pub mod author_list;
pub mod author_table;
pub mod login_form;
pub mod message_banner;
