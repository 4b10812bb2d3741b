//! # State Module
//!
//! Session state for the storefront.
//!
//! Each concern gets its own state type, owned by a [`Session`] created at
//! start-up and passed by reference to the commands that need it. There are
//! no globals: two sessions never share a cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Session                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬───────┴───────┬──────────────────┐              │
//! │      ▼               ▼               ▼                  ▼              │
//! │  ┌──────────┐  ┌─────────────┐  ┌──────────────┐  ┌─────────────┐     │
//! │  │CartState │  │SearchFilter │  │ CatalogState │  │ ConfigState │     │
//! │  │          │  │   State     │  │              │  │             │     │
//! │  │ Store<   │  │  Store<     │  │ products     │  │ api         │     │
//! │  │  Cart>   │  │ SearchFilter│  │ categories   │  │ display     │     │
//! │  │          │  │  >          │  │ view memo    │  │ form        │     │
//! │  └──────────┘  └─────────────┘  └──────────────┘  └─────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Stores: Mutex-guarded, listeners run after the lock is released     │
//! │  • CatalogState: loads are generation-tagged, stale results dropped    │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod search;
mod store;

pub use cart::{CartState, CartTotals, CheckoutReceipt};
pub use catalog::{
    CatalogState, CatalogView, EmptyReason, LoadFailure, LoadState, LoadTicket, Resource,
};
pub use config::{ApiSettings, ConfigState, DisplaySettings, FormSettings, CONFIG_FILE_NAME};
pub use search::SearchFilterState;
pub use store::{Listener, Store, Subscription};

/// Everything one running storefront instance owns.
#[derive(Debug, Default)]
pub struct Session {
    pub cart: CartState,
    pub search: SearchFilterState,
    pub catalog: CatalogState,
    pub config: ConfigState,
}

impl Session {
    pub fn new(config: ConfigState) -> Self {
        Session {
            cart: CartState::new(),
            search: SearchFilterState::new(),
            catalog: CatalogState::new(),
            config,
        }
    }
}
