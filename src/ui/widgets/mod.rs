// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets for the decorative layers.

pub mod confetti;
pub mod floating_hearts;

pub use confetti::Confetti;
pub use floating_hearts::FloatingHearts;
