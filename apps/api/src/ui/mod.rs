// Server-rendered page: form state, HTML views, and the page handlers.

pub mod form;
pub mod handlers;
pub mod view;
