//! Group-buys sub-client — one method per backend endpoint.

use crate::client::GroupBuyClient;
use crate::domain::groupbuy::wire::{
    CreateOrderApiResponse, EmptyResponse, GroupBuyCreateApiResponse, GroupBuyCreateResponse,
    GroupBuyDetailResponse, GroupBuyPageResponse, GroupBuyRankingResponse, GroupBuyTop3Response,
    SellerGroupBuyListResponse, StatusUpdateRequest,
};
use crate::domain::groupbuy::{
    CreateOrderRequest, GroupBuyCreateForm, GroupBuyStatus, OrderItemRequest, RankingSort,
    UploadFile,
};
use crate::domain::product::state::OptionSelection;
use crate::error::SdkError;
use crate::shared::{CategoryId, GroupBuyId};

use reqwest::multipart::{Form, Part};

/// Message used when the category listing fails without a backend message.
pub const CATEGORY_FETCH_ERROR_MESSAGE: &str = "공동구매 데이터를 불러오지 못했습니다.";

/// Default page size of the seller listing.
pub const SELLER_PAGE_SIZE: u32 = 10;

/// Sub-client for group-buy operations.
pub struct GroupBuys<'a> {
    pub(crate) client: &'a GroupBuyClient,
}

impl<'a> GroupBuys<'a> {
    // ── Listing ──────────────────────────────────────────────────────────

    /// Top three group buys for the home page.
    pub async fn fetch_top3(&self) -> Result<GroupBuyTop3Response, SdkError> {
        let url = routes::top3(self.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    /// Top six group buys of a category.
    pub async fn fetch_category_top6(
        &self,
        category: CategoryId,
    ) -> Result<GroupBuyTop3Response, SdkError> {
        let url = routes::category_top6(self.base_url(), category);
        Ok(self.client.http.get(&url).await?)
    }

    /// Top 100 of a category by order count, with `data.items` lifted into `data`.
    pub async fn fetch_ranking_top100(
        &self,
        category: CategoryId,
    ) -> Result<GroupBuyRankingResponse, SdkError> {
        let url = routes::listing(self.base_url(), Some(category), Some(RankingSort::OrderCount));
        let resp: GroupBuyPageResponse = self.client.http.get(&url).await?;
        Ok(lift_items(resp))
    }

    /// Top 100 across all categories by deadline, with `data.items` lifted into `data`.
    pub async fn fetch_all_ranking_top100(&self) -> Result<GroupBuyRankingResponse, SdkError> {
        let url = routes::listing(self.base_url(), None, Some(RankingSort::Deadline));
        let resp: GroupBuyPageResponse = self.client.http.get(&url).await?;
        Ok(lift_items(resp))
    }

    /// All group buys of a category.
    ///
    /// Fails with [`SdkError::Api`] on `success: false`; a missing page or
    /// missing items yields an empty list.
    pub async fn fetch_by_category(
        &self,
        category: CategoryId,
    ) -> Result<GroupBuyRankingResponse, SdkError> {
        let url = routes::listing(self.base_url(), Some(category), None);
        let resp: GroupBuyPageResponse = self.client.http.get(&url).await?;
        category_items(resp)
    }

    // ── Create ───────────────────────────────────────────────────────────

    /// Data for the seller's creation form.
    pub async fn fetch_create_data(&self) -> Result<GroupBuyCreateResponse, SdkError> {
        let url = routes::create_data(self.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    /// Create a group buy from a multipart form.
    pub async fn create(
        &self,
        form: &GroupBuyCreateForm,
    ) -> Result<GroupBuyCreateApiResponse, SdkError> {
        let url = routes::collection(self.base_url());
        let multipart = build_create_form(form)?;
        tracing::debug!(
            title = %form.request.title,
            detail_images = form.detail_images.len(),
            "creating group buy"
        );
        Ok(self.client.http.post_multipart(&url, multipart).await?)
    }

    // ── Detail & orders ──────────────────────────────────────────────────

    /// Group-buy detail. Publicly viewable, so sent without credentials.
    pub async fn get_detail(&self, id: GroupBuyId) -> Result<GroupBuyDetailResponse, SdkError> {
        let url = routes::item(self.client.public_http.base_url(), id);
        Ok(self.client.public_http.get(&url).await?)
    }

    /// Place an order for the given option lines.
    pub async fn create_order(
        &self,
        id: GroupBuyId,
        order_items: Vec<OrderItemRequest>,
    ) -> Result<CreateOrderApiResponse, SdkError> {
        let url = routes::orders(self.base_url(), id);
        let body = CreateOrderRequest { order_items };
        Ok(self.client.http.post(&url, &body).await?)
    }

    /// Place an order for everything currently selected on the product page.
    pub async fn create_order_from_selection(
        &self,
        id: GroupBuyId,
        selection: &OptionSelection,
    ) -> Result<CreateOrderApiResponse, SdkError> {
        if selection.is_empty() {
            return Err(SdkError::Validation("no option selected".to_string()));
        }
        self.create_order(id, selection.order_items()).await
    }

    // ── Seller management ────────────────────────────────────────────────

    /// Change the lifecycle status. The backend answers without `data`;
    /// `into_data` on the result yields `Value::Null`.
    pub async fn update_status(
        &self,
        id: GroupBuyId,
        status: GroupBuyStatus,
    ) -> Result<EmptyResponse, SdkError> {
        let url = routes::status(self.base_url(), id);
        tracing::debug!(groupbuy_id = %id, status = %status, "updating group buy status");
        let resp: EmptyResponse = self.client.http.patch(&url, &StatusUpdateRequest { status }).await?;
        Ok(acknowledged(resp))
    }

    /// One page of the seller's group buys. `None` falls back to page 0 of size 10.
    pub async fn seller_groupbuys(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<SellerGroupBuyListResponse, SdkError> {
        let url = routes::seller(
            self.base_url(),
            Some((page.unwrap_or(0), size.unwrap_or(SELLER_PAGE_SIZE))),
        );
        Ok(self.client.http.get(&url).await?)
    }

    /// Every group buy of the seller, unpaged.
    pub async fn all_seller_groupbuys(&self) -> Result<SellerGroupBuyListResponse, SdkError> {
        let url = routes::seller(self.base_url(), None);
        Ok(self.client.http.get(&url).await?)
    }

    /// Delete a group buy. Answered like [`update_status`](Self::update_status).
    pub async fn delete(&self, id: GroupBuyId) -> Result<EmptyResponse, SdkError> {
        let url = routes::item(self.base_url(), id);
        let resp: EmptyResponse = self.client.http.delete(&url).await?;
        Ok(acknowledged(resp))
    }

    fn base_url(&self) -> &str {
        self.client.http.base_url()
    }
}

// ─── Response reshaping ──────────────────────────────────────────────────────

/// Replace the page in `data` with its items, keeping `success` and `message`.
fn lift_items(resp: GroupBuyPageResponse) -> GroupBuyRankingResponse {
    resp.map_data(|page| page.items)
}

/// `success: false` is an error; a missing page or missing items is an empty list.
fn category_items(resp: GroupBuyPageResponse) -> Result<GroupBuyRankingResponse, SdkError> {
    let resp = resp.ensure_success(CATEGORY_FETCH_ERROR_MESSAGE)?;
    Ok(lift_items(resp).with_default_data())
}

/// Status-only answers (`{ success, message }`) carry `null` as their payload.
fn acknowledged(resp: EmptyResponse) -> EmptyResponse {
    resp.with_default_data()
}

// ─── Multipart ───────────────────────────────────────────────────────────────

fn file_part(file: &UploadFile) -> Result<Part, SdkError> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.mime)
        .map_err(|e| SdkError::Validation(format!("invalid mime type {}: {}", file.mime, e)))?;
    Ok(part)
}

/// `request` (JSON), `thumbnail`, then one `detailImages` part per image.
pub(crate) fn build_create_form(form: &GroupBuyCreateForm) -> Result<Form, SdkError> {
    let request_json = serde_json::to_string(&form.request)?;
    let request_part = Part::text(request_json)
        .mime_str("application/json")
        .map_err(|e| SdkError::Other(e.to_string()))?;

    let mut multipart = Form::new()
        .part("request", request_part)
        .part("thumbnail", file_part(&form.thumbnail)?);
    for image in &form.detail_images {
        multipart = multipart.part("detailImages", file_part(image)?);
    }
    Ok(multipart)
}

// ─── Routes ──────────────────────────────────────────────────────────────────

mod routes {
    use crate::domain::groupbuy::{RankingSort, RANKING_LIMIT};
    use crate::shared::{CategoryId, GroupBuyId};

    pub fn collection(base: &str) -> String {
        format!("{}/api/groupbuys", base)
    }

    pub fn top3(base: &str) -> String {
        format!("{}/api/groupbuys/top3", base)
    }

    pub fn category_top6(base: &str, category: CategoryId) -> String {
        format!("{}/api/groupbuys/{}/top6", base, category.0)
    }

    pub fn listing(base: &str, category: Option<CategoryId>, sort: Option<RankingSort>) -> String {
        let mut params = Vec::new();
        if let Some(category) = category {
            params.push(format!("categoryId={}", category.0));
        }
        params.push(format!("limit={}", RANKING_LIMIT));
        if let Some(sort) = sort {
            params.push(format!("sort={}", sort.as_str()));
        }
        format!("{}/api/groupbuys?{}", base, params.join("&"))
    }

    pub fn create_data(base: &str) -> String {
        format!("{}/api/groupbuys/create", base)
    }

    pub fn item(base: &str, id: GroupBuyId) -> String {
        format!("{}/api/groupbuys/{}", base, id)
    }

    pub fn orders(base: &str, id: GroupBuyId) -> String {
        format!("{}/api/groupbuys/{}/orders", base, id)
    }

    pub fn status(base: &str, id: GroupBuyId) -> String {
        format!("{}/api/groupbuys/{}/status", base, id)
    }

    pub fn seller(base: &str, paging: Option<(u32, u32)>) -> String {
        match paging {
            Some((page, size)) => format!("{}/api/groupbuys/seller?page={}&size={}", base, page, size),
            None => format!("{}/api/groupbuys/seller", base),
        }
    }
}
