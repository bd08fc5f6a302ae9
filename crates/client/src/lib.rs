//! Typed client for the site's remote procedures plus the page-level logic
//! built on it: concurrent initial load, placeholder content, display
//! helpers and the contact form.

pub mod contact;
pub mod content;
pub mod errors;
pub mod fallback;
pub mod rpc;
pub mod view;

pub use contact::ContactForm;
pub use content::{load_site_content, SiteContent};
pub use errors::ClientError;
pub use rpc::RpcClient;
