use std::mem;

use uuid::Uuid;

use crate::{Business, LedgerError, ResultLedger, Role, TeamMember};

use super::{App, normalize_email, normalize_required_name};

impl App {
    /// Invites a member into the active business's team. Owners are never
    /// invited, ownership moves only through [`App::transfer_ownership`].
    pub fn invite_member(&mut self, name: &str, email: &str, role: Role) -> ResultLedger<Uuid> {
        self.require_session()?;
        let name = normalize_required_name(name, "member")?;
        let email = normalize_email(email)?;
        if role == Role::Owner {
            return Err(LedgerError::OwnershipViolation(
                "cannot invite an owner".to_string(),
            ));
        }

        let business = self.active_business_mut()?;
        if business.member_by_email(&email).is_some() {
            return Err(LedgerError::ExistingKey(email));
        }

        let member = TeamMember::new(name, email, role);
        let member_id = member.id;
        let mut team = business.team.clone();
        team.push(member);
        commit_team(business, team)?;
        self.persist();
        Ok(member_id)
    }

    pub fn remove_member(&mut self, member_id: Uuid) -> ResultLedger<()> {
        self.require_session()?;
        let business = self.active_business_mut()?;
        let member = business
            .member(member_id)
            .ok_or_else(|| LedgerError::KeyNotFound("member not exists".to_string()))?;
        if member.role == Role::Owner {
            return Err(LedgerError::OwnershipViolation(
                "cannot remove the owner".to_string(),
            ));
        }

        let mut team = business.team.clone();
        team.retain(|member| member.id != member_id);
        commit_team(business, team)?;
        self.persist();
        Ok(())
    }

    pub fn update_member_role(&mut self, member_id: Uuid, role: Role) -> ResultLedger<()> {
        self.require_session()?;
        let business = self.active_business_mut()?;
        let member = business
            .member(member_id)
            .ok_or_else(|| LedgerError::KeyNotFound("member not exists".to_string()))?;
        if member.role == Role::Owner || role == Role::Owner {
            return Err(LedgerError::OwnershipViolation(
                "ownership moves only through transfer".to_string(),
            ));
        }

        let mut team = business.team.clone();
        if let Some(member) = team.iter_mut().find(|member| member.id == member_id) {
            member.role = role;
        }
        commit_team(business, team)?;
        self.persist();
        Ok(())
    }

    /// Hands ownership to the member with `email`, enrolling them first when
    /// they are not on the team yet. The previous owner stays on as a manager.
    pub fn transfer_ownership(&mut self, email: &str, name: &str) -> ResultLedger<()> {
        self.require_session()?;
        let email = normalize_email(email)?;
        let business = self.active_business_mut()?;

        let mut team = business.team.clone();
        let current = team
            .iter_mut()
            .find(|member| member.role == Role::Owner)
            .ok_or_else(|| {
                LedgerError::OwnershipViolation("business has no owner".to_string())
            })?;
        current.role = Role::Manager;

        match team
            .iter_mut()
            .find(|member| member.email.eq_ignore_ascii_case(&email))
        {
            Some(member) => member.role = Role::Owner,
            None => {
                let name = normalize_required_name(name, "member")?;
                team.push(TeamMember::new(name, email, Role::Owner));
            }
        }

        commit_team(business, team)?;
        self.persist();
        Ok(())
    }
}

/// Swaps `team` in, re-checks the single-owner invariant and rolls the swap
/// back if it fails.
fn commit_team(business: &mut Business, team: Vec<TeamMember>) -> ResultLedger<()> {
    let previous = mem::replace(&mut business.team, team);
    if let Err(err) = business.ensure_single_owner() {
        business.team = previous;
        return Err(err);
    }
    Ok(())
}
