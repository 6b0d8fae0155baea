//! Admin dashboards and staff management.

use dinedesk_api_models::{
    Acknowledgement, AdminStats, AdminUserPage, EmployeePatch, Envelope, NewEmployee,
    StaffMember, StaffMutation,
};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

impl ApiClient {
    /// Registered customers.
    pub async fn get_admin_users(&self) -> ApiResult<Envelope<AdminUserPage>> {
        self.send(
            Endpoint::get("/admin/users", "get admin users"),
            Payload::Empty,
        )
        .await
    }

    /// Restaurant dashboard counters.
    pub async fn get_all_stats(&self) -> ApiResult<AdminStats> {
        self.send(Endpoint::get("/admin/allstats", "get all stats"), Payload::Empty)
            .await
    }

    /// Store dashboard counters.
    pub async fn get_ecom_stats(&self) -> ApiResult<AdminStats> {
        self.send(
            Endpoint::get("/admin/allecomstats", "get ecom stats"),
            Payload::Empty,
        )
        .await
    }

    /// Add a staff member.
    pub async fn create_employee(&self, body: &NewEmployee) -> ApiResult<StaffMutation> {
        self.send(
            Endpoint::post("/admin/staff", "create employee"),
            Payload::json(body)?,
        )
        .await
    }

    /// Every staff member.
    pub async fn get_employees(&self) -> ApiResult<Envelope<Vec<StaffMember>>> {
        self.send(Endpoint::get("/admin/staff", "get employees"), Payload::Empty)
            .await
    }

    /// One staff member.
    pub async fn get_employee_by_id(&self, staff_id: &str) -> ApiResult<Envelope<StaffMember>> {
        self.send(
            Endpoint::get(format!("/admin/staff/{}", segment(staff_id)), "get employee"),
            Payload::Empty,
        )
        .await
    }

    /// Edit a staff member.
    pub async fn update_employee(
        &self,
        staff_id: &str,
        body: &EmployeePatch,
    ) -> ApiResult<StaffMutation> {
        self.send(
            Endpoint::patch(
                format!("/admin/staff/{}", segment(staff_id)),
                "update employee",
            ),
            Payload::json(body)?,
        )
        .await
    }

    /// Remove a staff member.
    pub async fn delete_employee(&self, staff_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::delete(
                format!("/admin/staff/{}", segment(staff_id)),
                "delete employee",
            ),
            Payload::Empty,
        )
        .await
    }
}
