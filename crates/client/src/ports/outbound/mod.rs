//! Outbound ports - Interfaces for the page and the network
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to drive the DOM and HTTP without depending on
//! `web-sys` or any concrete client.

pub mod feedback_port;
pub mod form_port;
pub mod http_port;
pub mod list_item_port;
pub mod navigation_port;

pub use feedback_port::FeedbackPort;
pub use form_port::FormPort;
pub use http_port::HttpPort;
pub use list_item_port::ListItemPort;
pub use navigation_port::NavigationPort;

#[cfg(any(test, feature = "testing"))]
pub use feedback_port::MockFeedbackPort;
#[cfg(any(test, feature = "testing"))]
pub use form_port::MockFormPort;
#[cfg(any(test, feature = "testing"))]
pub use http_port::MockHttpPort;
#[cfg(any(test, feature = "testing"))]
pub use list_item_port::MockListItemPort;
#[cfg(any(test, feature = "testing"))]
pub use navigation_port::MockNavigationPort;
