//! Port definitions.
//!
//! Application services talk to the page and the network only through these
//! traits, so they run unchanged against the DOM in the browser and against
//! mocks in host tests.

pub mod outbound;
