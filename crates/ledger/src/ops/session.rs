use crate::{Book, Business, ResultLedger, TransactionFilter, User};

use super::{App, View, normalize_email, normalize_required_name};

const DEFAULT_BOOK_NAME: &str = "General";

impl App {
    /// Creates an account and seeds its first business.
    ///
    /// Authentication is mocked: nothing is checked, no credentials are
    /// stored. Any previously persisted tree is replaced.
    pub fn signup(&mut self, name: &str, email: &str, business_name: &str) -> ResultLedger<()> {
        let name = normalize_required_name(name, "user")?;
        let email = normalize_email(email)?;
        let business_name = normalize_required_name(business_name, "business")?;

        let user = User::new(name, email);
        let mut business = Business::new(business_name, &user);
        business.books.push(Book::new(DEFAULT_BOOK_NAME.to_string()));
        let business_id = business.id;

        self.user = Some(user);
        self.signed_in = true;
        self.businesses = vec![business];
        self.active_business = Some(business_id);
        self.reset_cursors();
        self.persist();
        Ok(())
    }

    /// Signs in with an email.
    ///
    /// Mocked: no password. The persisted tree is always reused: the
    /// persisted user keeps their selection, a team member lands in a
    /// business they belong to, and an unknown email defaults to the first
    /// available business. Only when nothing is persisted at all does login
    /// seed the same tree as signup.
    pub fn login(&mut self, email: &str) -> ResultLedger<()> {
        let email = normalize_email(email)?;

        let is_returning = self
            .user
            .as_ref()
            .is_some_and(|user| user.email.eq_ignore_ascii_case(&email));

        if !is_returning {
            let membership = self.businesses.iter().find_map(|business| {
                business
                    .member_by_email(&email)
                    .map(|member| (business.id, member.name.clone()))
            });

            if let Some((business_id, name)) = membership {
                self.user = Some(User::new(name, email));
                self.active_business = Some(business_id);
            } else if self.businesses.is_empty() {
                let name = demo_name(&email);
                let user = User::new(name.clone(), email);
                let mut business = Business::new(format!("{name}'s business"), &user);
                business.books.push(Book::new(DEFAULT_BOOK_NAME.to_string()));
                let business_id = business.id;

                self.user = Some(user);
                self.businesses = vec![business];
                self.active_business = Some(business_id);
            } else {
                self.user = Some(User::new(demo_name(&email), email));
                self.active_business = self.businesses.first().map(|business| business.id);
            }
        } else if self.active_business.is_none() {
            self.active_business = self.businesses.first().map(|business| business.id);
        }

        self.signed_in = true;
        self.reset_cursors();
        self.persist();
        Ok(())
    }

    /// Signs out. The tree stays persisted so the same email can sign back in.
    pub fn logout(&mut self) {
        self.signed_in = false;
        self.reset_cursors();
        self.persist();
    }

    fn reset_cursors(&mut self) {
        self.active_book = None;
        self.view = View::Dashboard;
        self.dialog = None;
        self.filter = TransactionFilter::default();
    }
}

fn demo_name(email: &str) -> String {
    let local_part = email.split('@').next().unwrap_or_default();
    if local_part.is_empty() {
        "demo".to_string()
    } else {
        local_part.to_string()
    }
}
