//! Product page — the group-buy detail as the storefront renders it, plus
//! the option selector, detail-image pager and action busy flags.

pub mod action;
pub mod state;

use crate::domain::groupbuy::wire::{DiscountStage, GroupBuyDetail, GroupBuyOption};
use crate::shared::{CategoryId, GroupBuyId};
use serde::{Deserialize, Serialize};

pub use action::{InFlight, InFlightGuard, OrderBoxActions};
pub use state::{DetailImage, ImagePager, OptionSelection, SelectedOption};

/// A selectable option on the product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Group-buy option id, used when ordering.
    pub value: u64,
    pub label: String,
    /// Unit price the buyer pays.
    pub price: i64,
    pub original_price: i64,
    pub stock: Option<u32>,
    pub image: Option<String>,
}

impl ProductOption {
    pub fn is_sold_out(&self) -> bool {
        self.stock == Some(0)
    }
}

impl From<&GroupBuyOption> for ProductOption {
    fn from(option: &GroupBuyOption) -> Self {
        Self {
            value: option.groupbuy_option_id,
            label: option.name.clone(),
            price: option.effective_price(),
            original_price: option.price,
            stock: option.stock,
            image: option.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: GroupBuyId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub thumbnail: Option<String>,
    pub detail_images: Vec<String>,
    pub options: Vec<ProductOption>,
    pub category_ids: Vec<CategoryId>,
    pub discount_stages: Vec<DiscountStage>,
    pub order_count: u64,
}

impl Product {
    pub fn option(&self, value: u64) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Highest discount rate reachable, in percent.
    pub fn max_discount_rate(&self) -> f64 {
        self.discount_stages
            .iter()
            .map(|s| s.rate)
            .fold(0.0, f64::max)
    }

    /// Discount rate currently unlocked by the order count, in percent.
    pub fn current_discount_rate(&self) -> f64 {
        self.discount_stages
            .iter()
            .filter(|s| u64::from(s.count) <= self.order_count)
            .map(|s| s.rate)
            .fold(0.0, f64::max)
    }
}

impl From<&GroupBuyDetail> for Product {
    fn from(detail: &GroupBuyDetail) -> Self {
        Self {
            id: detail.groupbuy_id,
            name: detail.title.clone(),
            description: detail.description.clone(),
            price: detail.price,
            thumbnail: detail.thumbnail_url.clone(),
            detail_images: detail.detail_image_urls.clone(),
            options: detail.options.iter().map(ProductOption::from).collect(),
            category_ids: detail.category_ids.clone(),
            discount_stages: detail.discount_stages.clone(),
            order_count: detail.order_count,
        }
    }
}

impl From<GroupBuyDetail> for Product {
    fn from(detail: GroupBuyDetail) -> Self {
        Product::from(&detail)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product() -> Product {
        let detail: GroupBuyDetail = serde_json::from_str(
            r#"{
                "groupbuyId": 12,
                "title": "어성초 진정 토너",
                "description": "민감 피부용",
                "price": 28000,
                "detailImageUrls": ["d1.jpg", "d2.jpg", "d3.jpg"],
                "discountStages": [{"count": 10, "rate": 10}, {"count": 50, "rate": 25}],
                "options": [
                    {"groupbuyOptionId": 120, "name": "200ml", "price": 28000, "salePrice": 25200, "stock": 30},
                    {"groupbuyOptionId": 121, "name": "400ml", "price": 45000, "stock": 0},
                    {"groupbuyOptionId": 122, "name": "리필 200ml", "price": 19000}
                ],
                "categoryIds": [2],
                "orderCount": 12
            }"#,
        )
        .unwrap();
        Product::from(detail)
    }
}
