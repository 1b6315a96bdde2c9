// SPDX-License-Identifier: MPL-2.0
//! View modules. Each renders a projection of the application state and
//! emits its own message type, mapped into the root message by `app`.

pub mod banner;
pub mod styles;
pub mod tags;
pub mod thumbnails;
pub mod viewer;
