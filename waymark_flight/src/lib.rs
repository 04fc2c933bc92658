// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Flight: continuous flight-style camera navigation.
//!
//! A [`FlightController`] turns pointer and keyboard events plus a periodic
//! timer tick into camera motion on a [`waymark_view3d::Viewport`]. The
//! controller owns a small state machine ([`FlightMode`]): the primary
//! button flies forward, the secondary button flies in reverse, and pressing
//! the opposite button mid-flight toggles direction instead of restarting.
//!
//! While flying, mouse movement steers by accumulating yaw and pitch deltas
//! that the next tick applies, and a modifier switches the tick from
//! translation to roll. A set of discrete key bindings moves and turns the
//! camera one step at a time, independent of the flight state machine.
//!
//! Speeds are proportional to the diagonal of the visible scene bounds, so
//! flying feels the same across scenes of very different physical size. The
//! diagonal is sampled once at the start of each flight and falls back to
//! `1.0` when the bounds are uninitialized.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use waymark_flight::{FlightController, FlightMode, Modifiers};
//! use waymark_view3d::Viewport;
//!
//! let mut viewport = Viewport::new(Size::new(800.0, 600.0));
//! let mut flight = FlightController::new();
//!
//! flight.on_primary_button_down(&viewport);
//! assert_eq!(flight.mode(), FlightMode::FlyingForward);
//!
//! flight.on_mouse_move(Point::new(400.0, 300.0), Modifiers::default(), &viewport);
//! flight.on_mouse_move(Point::new(410.0, 300.0), Modifiers::default(), &viewport);
//! flight.on_tick(Modifiers::default(), &mut viewport);
//!
//! flight.on_primary_button_up();
//! assert_eq!(flight.mode(), FlightMode::Idle);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;

pub use controller::{FlightController, FlightKey, FlightMode, Modifiers};
