// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the invitation page.

pub mod button;
pub mod container;
