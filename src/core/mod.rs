//! # Core Application Logic
//!
//! This module contains RoadReady's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • QuizEngine           │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │    API     │
//!     │  Adapter   │ ───── spawns fetches ──▶ │  Backend   │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding all application state
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`quiz`]: The quiz attempt state machine and scoring
//! - [`content`]: Topics and lesson content blocks
//! - [`identity`]: Signed-in user and the local key-value store
//! - [`config`]: Layered settings

pub mod action;
pub mod config;
pub mod content;
pub mod identity;
pub mod quiz;
pub mod state;
