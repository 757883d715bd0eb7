//! Global state management

use dioxus::prelude::*;

use crate::types::CheckoutItem;

/// Starting value of the category price filter
pub const DEFAULT_MAX_PRICE: u32 = 5000;

/// Upper bound of the price slider
pub const PRICE_SLIDER_MAX: u32 = 200_000;

/// Shop categories reachable from the dashboard tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    HomeKitchen,
    Clothing,
    Tech,
}

impl Category {
    /// Category for a `/dashboard/categories/:id` segment
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Category::HomeKitchen),
            2 => Some(Category::Clothing),
            3 => Some(Category::Tech),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Category::HomeKitchen => 1,
            Category::Clothing => 2,
            Category::Tech => 3,
        }
    }

    /// `adType` string the backend stores for this category
    pub fn ad_type(&self) -> &'static str {
        match self {
            Category::HomeKitchen => "Kitchen & Home Appliances",
            // Misspelt on the backend
            Category::Clothing => "cloathing",
            Category::Tech => "tech",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::HomeKitchen => "Home & Kitchen",
            Category::Clothing => "Clothing",
            Category::Tech => "Tech",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::HomeKitchen => "\u{1F373}", // 🍳
            Category::Clothing => "\u{1F455}",    // 👕
            Category::Tech => "\u{1F4BB}",        // 💻
        }
    }

    pub fn variants() -> &'static [Category] {
        &[Category::HomeKitchen, Category::Clothing, Category::Tech]
    }
}

/// Items handed to the checkout page by "Buy now" or the cart
#[derive(Clone, Copy)]
pub struct CheckoutState {
    pub items: Signal<Vec<CheckoutItem>>,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
        }
    }

    pub fn start(&mut self, items: Vec<CheckoutItem>) {
        self.items.set(items);
    }

    pub fn clear(&mut self) {
        self.items.set(Vec::new());
    }

    pub fn total(&self) -> f64 {
        self.items.read().iter().map(CheckoutItem::total).sum()
    }
}

/// Id of an item awaiting confirmation before it is deleted
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingDelete {
    id: Option<String>,
}

impl PendingDelete {
    pub fn ask(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }

    /// Hand back the id to delete, closing the prompt
    pub fn confirm(&mut self) -> Option<String> {
        self.id.take()
    }

    pub fn cancel(&mut self) {
        self.id = None;
    }
}

/// Use the checkout hand-off state
pub fn use_checkout() -> CheckoutState {
    use_context::<CheckoutState>()
}
