//! The live resource stock of a game session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::{BuildCost, BuildCosts};
use crate::economy::{ResourceStock, StartingProfiles};

/// Sole owner of the session's resource stock.
///
/// Every producer and consumer of resources goes through this type. The
/// stock sits behind a single mutex and each operation holds it for its
/// whole duration, so the check and the spend in
/// [`GameResources::subtract_for_building`] cannot interleave with another
/// caller. Not `Clone`; readers take a [`snapshot`].
///
/// [`snapshot`]: GameResources::snapshot
#[derive(Debug)]
pub struct GameResources {
    costs: Arc<BuildCosts>,
    stock: Mutex<ResourceStock>,
}

impl GameResources {
    /// Create an economy with the given starting stock.
    #[must_use]
    pub fn new(costs: Arc<BuildCosts>, starting: ResourceStock) -> Self {
        Self {
            costs,
            stock: Mutex::new(starting),
        }
    }

    /// Copy of the current stock.
    #[must_use]
    pub fn snapshot(&self) -> ResourceStock {
        *self.lock()
    }

    /// Whether the current stock covers `cost`.
    #[must_use]
    pub fn can_afford(&self, cost: &BuildCost) -> bool {
        self.lock().covers(cost)
    }

    /// Whether the current stock covers the build cost of an object.
    ///
    /// Objects without a registered cost are free and always affordable.
    #[must_use]
    pub fn can_afford_object(&self, id: &str) -> bool {
        self.can_afford(&self.costs.cost(id))
    }

    /// What is missing to build an object; zero if it is affordable.
    #[must_use]
    pub fn shortfall_for(&self, id: &str) -> BuildCost {
        self.lock().shortfall(&self.costs.cost(id))
    }

    /// Subtract a cost unconditionally, flooring each field at zero.
    ///
    /// Callers are expected to check [`GameResources::can_afford`] first; the
    /// floor keeps the stock valid but hides over-spending.
    pub fn subtract(&self, cost: &BuildCost) {
        let mut stock = self.lock();
        *stock = stock.saturating_sub_cost(cost);
    }

    /// Spend the build cost of an object if the stock covers it.
    ///
    /// Returns whether the resources were spent. On `false` the stock is
    /// unchanged.
    #[must_use]
    pub fn subtract_for_building(&self, id: &str) -> bool {
        self.try_spend(id).is_ok()
    }

    /// Spend the build cost of an object, reporting what was spent or what
    /// is missing.
    ///
    /// The shortfall is computed under the same lock as the check, so it
    /// always describes the stock that refused the build.
    ///
    /// # Errors
    ///
    /// Returns the shortfall if the stock does not cover the cost. The
    /// stock is unchanged.
    pub fn try_spend(&self, id: &str) -> Result<BuildCost, BuildCost> {
        let cost = self.costs.cost(id);
        let mut stock = self.lock();
        let current = *stock;
        if !current.covers(&cost) {
            tracing::trace!(id, ?cost, stock = ?current, "cannot afford building");
            return Err(current.shortfall(&cost));
        }
        let remaining = current.saturating_sub_cost(&cost);
        *stock = remaining;
        tracing::debug!(id, ?cost, ?remaining, "spent resources on building");
        Ok(cost)
    }

    /// Subtract arbitrary amounts, flooring each field at zero.
    pub fn subtract_resources(&self, amount: ResourceStock) {
        let mut stock = self.lock();
        *stock = stock.saturating_sub(amount);
    }

    /// Add arbitrary amounts. Only `u32::MAX` bounds the stock.
    pub fn add(&self, amount: ResourceStock) {
        let mut stock = self.lock();
        *stock = stock.saturating_add(amount);
    }

    /// Overwrite the stock.
    pub fn set_stock(&self, stock: ResourceStock) {
        *self.lock() = stock;
    }

    /// Empty the stock.
    pub fn reset(&self) {
        self.set_stock(ResourceStock::ZERO);
    }

    /// Replace the stock with a profile's starting stock.
    ///
    /// Unknown profiles reset to zero.
    pub fn reset_to(&self, profiles: &StartingProfiles, name: &str) {
        self.set_stock(profiles.starting_resources(name));
    }

    /// The cost registry used for id-based queries.
    #[must_use]
    pub fn costs(&self) -> &BuildCosts {
        &self.costs
    }

    // The stock is plain data and valid after any partial update, so a
    // poisoned lock is safe to recover.
    fn lock(&self) -> MutexGuard<'_, ResourceStock> {
        self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
