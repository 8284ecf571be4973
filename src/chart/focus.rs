//! Pointer-driven focus tracking for the chart cursor and tooltip
//!
//! Two states only: `Idle` and `Focused(index)`. Pointer down/move inside the
//! chart focuses the nearest point; pointer up/leave returns to `Idle` and
//! forgets the previous focus.

use log::trace;
use serde::{Deserialize, Serialize};

use super::layout::ChartGeometry;

/// Discrete pointer input, x in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64 },
    Move { x: f64 },
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Focused(usize),
}

/// Notification sent to listeners; both fields are `None` on release
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusChange {
    pub index: Option<usize>,
    pub value: Option<f64>,
}

impl FocusChange {
    pub fn released() -> Self {
        Self { index: None, value: None }
    }
}

/// Focused point with its screen position, for drawing the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Focus {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

type FocusListener = Box<dyn FnMut(&FocusChange)>;

/// State machine turning pointer events into a focused series index
#[derive(Default)]
pub struct FocusTracker {
    state: FocusState,
    listeners: Vec<FocusListener>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn focused_index(&self) -> Option<usize> {
        match self.state {
            FocusState::Idle => None,
            FocusState::Focused(index) => Some(index),
        }
    }

    /// Register a listener called synchronously on every focus change
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&FocusChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Feed one pointer event through the state machine
    ///
    /// Down/move outside `[0, width]` are ignored and return `None`.
    pub fn handle(&mut self, event: PointerEvent, geometry: &ChartGeometry) -> Option<FocusChange> {
        let change = match event {
            PointerEvent::Down { x } | PointerEvent::Move { x } => {
                if !(0.0..=geometry.width).contains(&x) {
                    trace!("Ignoring pointer at x={} outside chart", x);
                    return None;
                }
                let index = geometry.locate(x);
                self.state = FocusState::Focused(index);
                FocusChange {
                    index: Some(index),
                    value: geometry.value(index),
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.state = FocusState::Idle;
                FocusChange::released()
            }
        };

        trace!("Focus -> {:?}", self.state);
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
        Some(change)
    }

    /// Screen position of the focused point, if any
    pub fn focus(&self, geometry: &ChartGeometry) -> Option<Focus> {
        let index = self.focused_index()?;
        let (x, y) = geometry.point(index)?;
        Some(Focus { index, x, y })
    }
}
