use uuid::Uuid;

use crate::{
    Business, LedgerError, ResultLedger, TransactionFilter,
    views::{self, BusinessOverview},
};

use super::{App, View, normalize_required_name};

impl App {
    /// Creates a business with the current user enrolled as owner and selects
    /// it.
    pub fn create_business(&mut self, name: &str) -> ResultLedger<Uuid> {
        let name = normalize_required_name(name, "business")?;
        let user = self.require_session()?.clone();

        let business = Business::new(name, &user);
        let business_id = business.id;
        self.businesses.push(business);
        self.active_business = Some(business_id);
        self.active_book = None;
        self.view = View::Dashboard;
        self.filter = TransactionFilter::default();
        self.persist();
        Ok(business_id)
    }

    pub fn rename_business(&mut self, business_id: Uuid, name: &str) -> ResultLedger<()> {
        let name = normalize_required_name(name, "business")?;
        self.require_session()?;
        let business = self.business_mut(business_id)?;
        business.name = name;
        self.persist();
        Ok(())
    }

    /// Deletes a business and everything it contains.
    ///
    /// When the deleted business was selected, selection falls back to the
    /// first remaining business (or none) and the view returns to the
    /// dashboard.
    pub fn delete_business(&mut self, business_id: Uuid) -> ResultLedger<()> {
        self.require_session()?;
        let index = self
            .businesses
            .iter()
            .position(|business| business.id == business_id)
            .ok_or_else(|| LedgerError::KeyNotFound("business not exists".to_string()))?;
        self.businesses.remove(index);

        if self.active_business == Some(business_id) {
            self.active_business = self.businesses.first().map(|business| business.id);
            self.active_book = None;
            self.view = View::Dashboard;
            self.filter = TransactionFilter::default();
        }
        self.persist();
        Ok(())
    }

    /// Switches the active business. Book selection and filter reset.
    pub fn select_business(&mut self, business_id: Uuid) -> ResultLedger<()> {
        self.require_session()?;
        if !self.businesses.iter().any(|business| business.id == business_id) {
            return Err(LedgerError::KeyNotFound("business not exists".to_string()));
        }
        self.active_business = Some(business_id);
        self.active_book = None;
        self.view = View::Dashboard;
        self.filter = TransactionFilter::default();
        self.persist();
        Ok(())
    }

    /// Dashboard rows for the active business.
    pub fn dashboard(&self) -> Option<BusinessOverview> {
        self.active_business().map(views::business_overview)
    }
}
