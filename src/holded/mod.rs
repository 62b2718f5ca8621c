// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Holded API access

pub mod client;
pub mod params;

pub use client::{Endpoints, HoldedClient};
pub use params::Payload;
