//! Product-page state — app-owned containers mutated by UI events.

use super::{Product, ProductOption};
use crate::domain::groupbuy::OrderItemRequest;
use crate::shared::display_won;

// ─── Option selection ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    pub value: u64,
    pub label: String,
    pub unit_price: i64,
    pub quantity: u32,
    stock: Option<u32>,
}

impl SelectedOption {
    pub fn line_price(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }
}

/// Options the buyer picked, in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSelection {
    selected: Vec<SelectedOption>,
}

impl OptionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option with quantity 1. Returns `false` and changes nothing when
    /// the option is already selected or sold out.
    pub fn select(&mut self, option: &ProductOption) -> bool {
        if option.is_sold_out() || self.contains(option.value) {
            return false;
        }
        self.selected.push(SelectedOption {
            value: option.value,
            label: option.label.clone(),
            unit_price: option.price,
            quantity: 1,
            stock: option.stock,
        });
        true
    }

    /// Select by option id on `product`. Unknown ids are ignored.
    pub fn select_value(&mut self, product: &Product, value: u64) -> bool {
        match product.option(value) {
            Some(option) => self.select(option),
            None => false,
        }
    }

    pub fn remove(&mut self, value: u64) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s.value != value);
        self.selected.len() != before
    }

    /// Set the quantity of a selected option, clamped to at least 1 and at
    /// most the known stock.
    pub fn change_quantity(&mut self, value: u64, quantity: u32) -> bool {
        let Some(entry) = self.selected.iter_mut().find(|s| s.value == value) else {
            return false;
        };
        let mut quantity = quantity.max(1);
        if let Some(stock) = entry.stock {
            quantity = quantity.min(stock.max(1));
        }
        entry.quantity = quantity;
        true
    }

    pub fn contains(&self, value: u64) -> bool {
        self.selected.iter().any(|s| s.value == value)
    }

    pub fn selected(&self) -> &[SelectedOption] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn total_count(&self) -> u32 {
        self.selected
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.quantity))
    }

    pub fn total_price(&self) -> i64 {
        self.selected
            .iter()
            .fold(0i64, |total, s| total.saturating_add(s.line_price()))
    }

    /// e.g. `"총 50,400원"`.
    pub fn total_price_label(&self) -> String {
        format!("총 {}", display_won(self.total_price()))
    }

    pub fn order_items(&self) -> Vec<OrderItemRequest> {
        self.selected
            .iter()
            .map(|s| OrderItemRequest {
                groupbuy_option_id: s.value,
                quantity: s.quantity,
            })
            .collect()
    }
}

// ─── Detail images ───────────────────────────────────────────────────────────

/// Images shown before the buyer expands the detail section on desktop.
pub const DESKTOP_INITIAL_IMAGES: usize = 1;

/// Leading images that should load eagerly.
pub const PRIORITY_IMAGES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailImage<'a> {
    pub src: &'a str,
    pub alt: String,
    pub priority: bool,
}

/// Collapsible list of product detail images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePager {
    product_name: String,
    images: Vec<String>,
    max_initial: usize,
    show_all: bool,
}

impl ImagePager {
    pub fn new(product_name: impl Into<String>, images: Vec<String>, max_initial: usize) -> Self {
        Self {
            product_name: product_name.into(),
            images,
            max_initial,
            show_all: false,
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::new(
            product.name.clone(),
            product.detail_images.clone(),
            DESKTOP_INITIAL_IMAGES,
        )
    }

    pub fn displayed_images(&self) -> &[String] {
        if self.show_all {
            &self.images
        } else {
            &self.images[..self.images.len().min(self.max_initial)]
        }
    }

    pub fn displayed(&self) -> Vec<DetailImage<'_>> {
        self.displayed_images()
            .iter()
            .enumerate()
            .map(|(index, src)| DetailImage {
                src,
                alt: format!("{} 상세 이미지 {}", self.product_name, index + 1),
                priority: index < PRIORITY_IMAGES,
            })
            .collect()
    }

    pub fn has_more_images(&self) -> bool {
        self.images.len() > self.max_initial
    }

    pub fn is_showing_all(&self) -> bool {
        self.show_all
    }

    pub fn show_all(&mut self) {
        self.show_all = true;
    }

    pub fn load_more(&mut self) {
        self.show_all();
    }

    pub fn show_less(&mut self) {
        self.show_all = false;
    }
}
