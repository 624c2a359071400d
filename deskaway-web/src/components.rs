pub mod dashboard;
pub mod filter;
pub mod footer;
pub mod header;
pub mod timeline;
pub mod waitlist_form;
