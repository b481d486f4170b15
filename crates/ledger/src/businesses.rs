//! Businesses: the top level of the tree a user manages.
//!
//! A business owns its books and its team. The team invariant is that exactly
//! one member is the owner; every team mutation goes through
//! [`Business::ensure_single_owner`] before it is committed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Book, LedgerError, ResultLedger, Role, TeamMember, User};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub books: Vec<Book>,
    pub team: Vec<TeamMember>,
}

impl Business {
    /// Creates a business with `owner` enrolled as the owning team member.
    pub fn new(name: String, owner: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            books: Vec::new(),
            team: vec![TeamMember::new(
                owner.name.clone(),
                owner.email.clone(),
                Role::Owner,
            )],
        }
    }

    pub fn owner(&self) -> Option<&TeamMember> {
        self.team.iter().find(|member| member.role == Role::Owner)
    }

    pub fn book(&self, book_id: Uuid) -> Option<&Book> {
        self.books.iter().find(|book| book.id == book_id)
    }

    pub fn book_mut(&mut self, book_id: Uuid) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id == book_id)
    }

    pub fn member(&self, member_id: Uuid) -> Option<&TeamMember> {
        self.team.iter().find(|member| member.id == member_id)
    }

    pub fn member_by_email(&self, email: &str) -> Option<&TeamMember> {
        self.team
            .iter()
            .find(|member| member.email.eq_ignore_ascii_case(email))
    }

    /// Checks the team invariant: exactly one owner.
    pub fn ensure_single_owner(&self) -> ResultLedger<()> {
        let owners = self
            .team
            .iter()
            .filter(|member| member.role == Role::Owner)
            .count();
        if owners != 1 {
            return Err(LedgerError::OwnershipViolation(format!(
                "expected exactly one owner, found {owners}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner_user() -> User {
        User::new("Alice".to_string(), "alice@example.com".to_string())
    }

    #[test]
    fn new_business_enrolls_the_creator_as_owner() {
        let business = Business::new("Shop".to_string(), &owner_user());
        let owner = business.owner().unwrap();
        assert_eq!(owner.role, Role::Owner);
        assert_eq!(owner.email, "alice@example.com");
        business.ensure_single_owner().unwrap();
    }

    #[test]
    fn ensure_single_owner_rejects_zero_owners() {
        let mut business = Business::new("Shop".to_string(), &owner_user());
        business.team[0].role = Role::Manager;
        let err = business.ensure_single_owner().unwrap_err();
        assert_eq!(
            err,
            LedgerError::OwnershipViolation("expected exactly one owner, found 0".to_string())
        );
    }

    #[test]
    fn ensure_single_owner_rejects_two_owners() {
        let mut business = Business::new("Shop".to_string(), &owner_user());
        business.team.push(TeamMember::new(
            "Bob".to_string(),
            "bob@example.com".to_string(),
            Role::Owner,
        ));
        assert!(business.ensure_single_owner().is_err());
    }

    #[test]
    fn member_by_email_ignores_case() {
        let business = Business::new("Shop".to_string(), &owner_user());
        assert!(business.member_by_email("ALICE@example.com").is_some());
        assert!(business.member_by_email("bob@example.com").is_none());
    }
}
