//! Busy flags for the product-page actions.
//!
//! Each action (buy now, add to cart) has its own flag so the UI can show a
//! spinner on the right button. Flags are advisory: they guard against a
//! second click while the first request is pending, nothing more.

use super::state::OptionSelection;
use std::cell::Cell;
use std::future::Future;

/// Single-threaded busy flag.
#[derive(Debug, Default)]
pub struct InFlight {
    busy: Cell<bool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Mark busy. `None` when the action is already running.
    pub fn begin(&self) -> Option<InFlightGuard<'_>> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlightGuard { flag: &self.busy })
    }

    /// Await `fut` while busy. `None` (and `fut` is dropped unpolled) when the
    /// action is already running.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let _guard = self.begin()?;
        Some(fut.await)
    }
}

/// Clears the busy flag on drop, whether the action succeeded, failed or
/// returned early.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// The order box's two actions over the current selection.
#[derive(Debug, Default)]
pub struct OrderBoxActions {
    pub creating_order: InFlight,
    pub adding_to_cart: InFlight,
}

impl OrderBoxActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` for buy-now. `None` when nothing is selected or a
    /// buy-now request is already pending.
    pub async fn buy_now<'s, F, Fut>(
        &self,
        selection: &'s OptionSelection,
        action: F,
    ) -> Option<Fut::Output>
    where
        F: FnOnce(&'s OptionSelection) -> Fut,
        Fut: Future,
    {
        Self::submit(&self.creating_order, selection, action).await
    }

    /// Run `action` for add-to-cart, under the same rules as [`buy_now`](Self::buy_now).
    pub async fn add_to_cart<'s, F, Fut>(
        &self,
        selection: &'s OptionSelection,
        action: F,
    ) -> Option<Fut::Output>
    where
        F: FnOnce(&'s OptionSelection) -> Fut,
        Fut: Future,
    {
        Self::submit(&self.adding_to_cart, selection, action).await
    }

    async fn submit<'s, F, Fut>(
        flag: &InFlight,
        selection: &'s OptionSelection,
        action: F,
    ) -> Option<Fut::Output>
    where
        F: FnOnce(&'s OptionSelection) -> Fut,
        Fut: Future,
    {
        if selection.is_empty() {
            return None;
        }
        let _guard = flag.begin()?;
        Some(action(selection).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::fixtures;
    use crate::error::SdkError;

    #[test]
    fn test_begin_is_exclusive() {
        let flag = InFlight::new();
        let guard = flag.begin();
        assert!(guard.is_some());
        assert!(flag.is_busy());
        assert!(flag.begin().is_none());
        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.begin().is_some());
    }

    #[test]
    fn test_run_resets_after_error() {
        let flag = InFlight::new();
        let out = tokio_test::block_on(flag.run(async { Err::<(), _>(SdkError::Other("boom".into())) }));
        assert!(matches!(out, Some(Err(SdkError::Other(_)))));
        assert!(!flag.is_busy());
    }

    #[test]
    fn test_run_skipped_while_busy() {
        let flag = InFlight::new();
        let _guard = flag.begin();
        let out = tokio_test::block_on(flag.run(async { 1 }));
        assert_eq!(out, None);
        assert!(flag.is_busy());
    }

    #[test]
    fn test_actions_need_a_selection() {
        let actions = OrderBoxActions::new();
        let empty = OptionSelection::new();
        let out = tokio_test::block_on(actions.buy_now(&empty, |_| async { 1 }));
        assert_eq!(out, None);
    }

    #[test]
    fn test_actions_use_separate_flags() {
        let product = fixtures::product();
        let mut selection = OptionSelection::new();
        selection.select_value(&product, 120);

        let actions = OrderBoxActions::new();
        let _pending = actions.creating_order.begin();
        let blocked = tokio_test::block_on(actions.buy_now(&selection, |_| async { "order" }));
        assert_eq!(blocked, None);

        let added = tokio_test::block_on(
            actions.add_to_cart(&selection, |s| {
                let items = s.order_items();
                async move { items.len() }
            }),
        );
        assert_eq!(added, Some(1));
        assert!(!actions.adding_to_cart.is_busy());
    }
}
