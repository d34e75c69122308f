//! Command handlers over the session store and the seeded catalogs.

use crate::error::{CliError, Result as CliErrorResult};

use sd_auth::{GateDecision, RegistrationProfile, SessionStore, StaffDirectory};
use sd_catalog::{
    DepartmentLoad, EmployeeCatalog, NewReview, NewTicket, ReviewCatalog, TicketCatalog,
    TicketSnapshot, TicketTrack,
};
use sd_core::{
    AvailabilityStatus, Department, EmployeeFilter, GeoLocation, Rating, ReviewCategory,
    ReviewFilter, Role, TicketFilter, TicketPriority, TicketStatus,
};
use sd_session::FileSessionSlot;

use std::str::FromStr;
use std::time::Duration;

use serde_json::{Value, json};

/// Everything a command needs: the session store plus the in-memory data
/// the views are backed by. Catalog contents live for one invocation.
pub struct App {
    store: SessionStore<StaffDirectory, FileSessionSlot>,
    tickets: TicketCatalog,
    employees: EmployeeCatalog,
    reviews: ReviewCatalog,
}

impl App {
    pub fn bootstrap(config: &sd_config::Config) -> CliErrorResult<Self> {
        let slot = FileSessionSlot::new(config.session_path()?);
        let store = SessionStore::open(
            StaffDirectory::new(),
            slot,
            Duration::from_secs(config.session.verify_timeout_secs),
        );

        Ok(Self {
            store,
            tickets: TicketCatalog::seeded(),
            employees: EmployeeCatalog::seeded(),
            reviews: ReviewCatalog::seeded(),
        })
    }

    /// Route gate for role-scoped commands.
    fn gate(&self, allowed: &[Role]) -> CliErrorResult<()> {
        match sd_auth::evaluate(self.store.current(), allowed) {
            GateDecision::Permit => Ok(()),
            GateDecision::RedirectToLanding => Err(CliError::SignedOut),
            GateDecision::RedirectToDashboard => Err(CliError::Forbidden {
                allowed: allowed
                    .iter()
                    .map(|role| role.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    // ---------------------------------------------------------------- auth

    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: &str,
    ) -> CliErrorResult<Value> {
        let role = Role::from_str(role)?;

        if !self.store.login(email, password, role).await? {
            return Err(CliError::InvalidCredentials);
        }

        let identity = self.store.current().ok_or(CliError::SignedOut)?;
        Ok(json!({ "signed_in": true, "identity": identity }))
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> CliErrorResult<Value> {
        // Confirmation mismatch is the caller's check, before the store runs
        if password != confirm_password {
            return Err(CliError::PasswordMismatch);
        }

        self.store
            .register(RegistrationProfile::new(name, email))
            .await?;

        let identity = self.store.current().ok_or(CliError::SignedOut)?;
        Ok(json!({ "registered": true, "identity": identity }))
    }

    pub fn logout(&mut self) -> CliErrorResult<Value> {
        self.store.logout()?;
        Ok(json!({ "signed_out": true }))
    }

    pub fn whoami(&self) -> CliErrorResult<Value> {
        Ok(json!({
            "signed_in": self.store.is_signed_in(),
            "identity": self.store.current(),
        }))
    }

    pub fn locate(&mut self, lat: f64, lng: f64, address: &str) -> CliErrorResult<Value> {
        let had_session = self.store.is_signed_in();
        self.store
            .update_location(GeoLocation::new(lat, lng, address))?;

        Ok(json!({
            "updated": had_session,
            "identity": self.store.current(),
        }))
    }

    // ------------------------------------------------------------- tickets

    pub fn ticket_list(
        &self,
        query: Option<&str>,
        status: Option<&str>,
    ) -> CliErrorResult<Value> {
        self.gate(&[])?;

        let mut filter = TicketFilter::new(query.unwrap_or_default());
        if let Some(status) = status {
            filter = filter.with_status(TicketStatus::from_str(status)?);
        }

        let tickets = self.tickets.search(&filter);
        Ok(json!({ "count": tickets.len(), "tickets": tickets }))
    }

    pub fn ticket_show(&self, id: &str) -> CliErrorResult<Value> {
        self.gate(&[])?;

        let ticket = self.tickets.require(id)?;
        Ok(serde_json::to_value(ticket)?)
    }

    pub fn ticket_create(
        &mut self,
        title: &str,
        description: &str,
        category: &str,
        priority: Option<&str>,
        location: &str,
    ) -> CliErrorResult<Value> {
        self.gate(&[])?;

        let mut new_ticket = NewTicket::new(
            title,
            description,
            Department::from_str(category)?,
            location,
        );
        if let Some(priority) = priority {
            new_ticket = new_ticket.with_priority(TicketPriority::from_str(priority)?);
        }

        let ticket = self.tickets.submit(new_ticket)?;
        Ok(json!({ "submitted": true, "ticket": ticket }))
    }

    pub fn ticket_track(&self, id: &str) -> CliErrorResult<Value> {
        self.gate(&[])?;

        let ticket = self.tickets.require(id)?;
        let track = TicketTrack::for_ticket(ticket);

        Ok(json!({
            "ticket_id": track.ticket_id(),
            "status": ticket.status,
            "timeline": track.timeline(),
            "thread": track.thread(),
        }))
    }

    pub fn ticket_say(&self, id: &str, message: &str) -> CliErrorResult<Value> {
        self.gate(&[])?;

        let ticket = self.tickets.require(id)?;
        let mut track = TicketTrack::for_ticket(ticket);
        track.post(message);

        Ok(json!({
            "ticket_id": track.ticket_id(),
            "thread": track.thread(),
        }))
    }

    // ----------------------------------------------------------- employees

    pub fn employee_list(
        &self,
        query: Option<&str>,
        status: Option<&str>,
    ) -> CliErrorResult<Value> {
        self.gate(&[Role::Admin])?;

        let mut filter = EmployeeFilter::new(query.unwrap_or_default());
        if let Some(status) = status {
            filter = filter.with_status(AvailabilityStatus::from_str(status)?);
        }

        let employees = self.employees.search(&filter);
        Ok(json!({ "count": employees.len(), "employees": employees }))
    }

    pub fn employee_map(&self) -> CliErrorResult<Value> {
        self.gate(&[Role::Admin])?;

        let positions: Vec<Value> = self
            .employees
            .on_duty()
            .into_iter()
            .map(|employee| {
                json!({
                    "id": employee.id,
                    "name": employee.name,
                    "status": employee.status,
                    "whereabouts": employee.whereabouts,
                    "position": employee.position,
                    "current_ticket": employee.current_ticket,
                })
            })
            .collect();

        Ok(json!({ "count": positions.len(), "employees": positions }))
    }

    // ------------------------------------------------------------- reviews

    pub fn review_list(
        &self,
        query: Option<&str>,
        rating: Option<u8>,
        department: Option<&str>,
    ) -> CliErrorResult<Value> {
        self.gate(&[Role::Admin])?;

        let mut filter = ReviewFilter::new(query.unwrap_or_default());
        if let Some(rating) = rating {
            filter = filter.with_rating(Rating::new(rating)?);
        }
        if let Some(department) = department {
            filter = filter.with_department(Department::from_str(department)?);
        }

        let reviews = self.reviews.search(&filter);
        Ok(json!({ "count": reviews.len(), "reviews": reviews }))
    }

    pub fn review_submit(
        &mut self,
        employee_id: &str,
        ticket_id: &str,
        rating: u8,
        comment: &str,
        categories: &[String],
    ) -> CliErrorResult<Value> {
        self.gate(&[])?;

        let ticket = self.tickets.require(ticket_id)?;
        if !ticket.can_review {
            return Err(CliError::NotReviewable {
                id: ticket_id.to_string(),
            });
        }

        let employee = self.employees.require(employee_id)?;
        let reviewer = self.store.current().ok_or(CliError::SignedOut)?;

        let categories = categories
            .iter()
            .map(|category| ReviewCategory::from_str(category))
            .collect::<Result<Vec<_>, _>>()?;

        let review = self.reviews.submit(NewReview {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            employee_avatar: employee.avatar.clone(),
            department: employee.department,
            ticket_id: ticket.id.clone(),
            rating: Rating::new(rating)?,
            comment: comment.to_string(),
            categories,
            reviewer_name: reviewer.name.clone(),
        });

        Ok(json!({ "submitted": true, "review": review }))
    }

    pub fn review_summary(&self) -> CliErrorResult<Value> {
        self.gate(&[Role::Admin])?;

        Ok(json!({
            "overall": self.reviews.overall(),
            "employees": self.reviews.employee_summaries(),
        }))
    }

    // --------------------------------------------------------------- admin

    pub fn admin_stats(&self) -> CliErrorResult<Value> {
        self.gate(&[Role::Admin])?;

        Ok(json!({
            "snapshot": TicketSnapshot::measure(&self.tickets),
            "departments": DepartmentLoad::seeded(),
        }))
    }
}
