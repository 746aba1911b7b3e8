//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod access_logs;
pub mod analytics;
pub mod expand;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use access_logs::access_logs_handler;
pub use analytics::{top_urls_by_date_handler, top_urls_handler};
pub use expand::expand_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{
    delete_url_handler, get_url_handler, list_urls_handler, set_status_handler,
    update_url_handler,
};
