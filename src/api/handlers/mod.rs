//! HTTP request handlers for API endpoints.

pub mod domains;
pub mod root;

pub use domains::{
    create_domain_handler, delete_domain_handler, get_domain_handler, list_domains_handler,
    update_domain_handler,
};
pub use root::root_handler;
