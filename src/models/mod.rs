// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Request and response models

pub mod responses;

pub use responses::*;
