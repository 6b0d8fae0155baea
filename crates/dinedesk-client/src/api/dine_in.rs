//! Dine-in operations: tables, bookings, reservations, orders, checkouts, and
//! assistance requests.
//!
//! Most responses use the `{ success, data }` envelope; state transitions
//! (`cancel`, `ready`, ...) are bodiless `POST`s acknowledged with
//! `{ success }`.

use dinedesk_api_models::{
    Acknowledgement, Assistance, BookingPatch, CheckoutPatch, DineInCheckout, DineInOrder,
    DineInTable, DineInTableBooking, Envelope, NewBooking, NewCheckout, NewTable, OrderPatch,
    PageRequest, ReservationPage, TableStats, TableUpdate, TimeWindow,
};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

fn resource(base: &str, id: &str) -> String {
    format!("{base}/{}", segment(id))
}

// ----------------------------------------------------------------------------
// Tables
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Every table.
    pub async fn get_tables(&self) -> ApiResult<Envelope<Vec<DineInTable>>> {
        self.send(Endpoint::get("/dine-in/tables", "get tables"), Payload::Empty)
            .await
    }

    /// One table by id.
    pub async fn get_table_by_id(&self, table_id: &str) -> ApiResult<Envelope<DineInTable>> {
        self.send(
            Endpoint::get(resource("/dine-in/tables", table_id), "get table"),
            Payload::Empty,
        )
        .await
    }

    /// One table by its printed number.
    pub async fn get_table_by_table_number(
        &self,
        table_number: &str,
    ) -> ApiResult<Envelope<DineInTable>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/tables/by-no", table_number),
                "get table",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Create a table.
    pub async fn create_table(&self, body: &NewTable) -> ApiResult<Envelope<DineInTable>> {
        self.send(
            Endpoint::post("/dine-in/tables", "create table"),
            Payload::json(body)?,
        )
        .await
    }

    /// Update a table.
    pub async fn update_table(
        &self,
        table_id: &str,
        body: &TableUpdate,
    ) -> ApiResult<Envelope<DineInTable>> {
        self.send(
            Endpoint::patch(resource("/dine-in/tables", table_id), "update table"),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a table.
    pub async fn delete_table(&self, table_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::delete(resource("/dine-in/tables", table_id), "delete table"),
            Payload::Empty,
        )
        .await
    }

    /// Flag a table as cleaned and ready for the next party.
    pub async fn mark_table_as_cleaned(&self, table_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::post(
                resource("/dine-in/tables/cleaned", table_id),
                "mark table as cleaned",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Tables free for the whole window.
    pub async fn get_available_tables(
        &self,
        window: &TimeWindow,
    ) -> ApiResult<Envelope<Vec<DineInTable>>> {
        self.send(
            Endpoint::post("/dine-in/available-tables", "get available tables"),
            Payload::json(window)?,
        )
        .await
    }

    /// Per-table occupancy counters.
    pub async fn get_table_stats(&self) -> ApiResult<Envelope<Vec<TableStats>>> {
        self.send(
            Endpoint::get("/dine-in/table-stats", "get table stats"),
            Payload::Empty,
        )
        .await
    }
}

// ----------------------------------------------------------------------------
// Bookings and reservations
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Every booking.
    pub async fn get_bookings(&self) -> ApiResult<Envelope<Vec<DineInTableBooking>>> {
        self.send(
            Endpoint::get("/dine-in/bookings", "get bookings"),
            Payload::Empty,
        )
        .await
    }

    /// One booking.
    pub async fn get_booking(&self, booking_id: &str) -> ApiResult<Envelope<DineInTableBooking>> {
        self.send(
            Endpoint::get(resource("/dine-in/bookings", booking_id), "get booking"),
            Payload::Empty,
        )
        .await
    }

    /// Book a table.
    pub async fn create_booking(
        &self,
        body: &NewBooking,
    ) -> ApiResult<Envelope<DineInTableBooking>> {
        self.send(
            Endpoint::post("/dine-in/bookings", "create booking"),
            Payload::json(body)?,
        )
        .await
    }

    /// Replace booking fields. The backend's reply shape is not fixed.
    pub async fn update_booking(&self, booking_id: &str, body: &BookingPatch) -> ApiResult<Value> {
        self.send(
            Endpoint::put(resource("/dine-in/bookings", booking_id), "update booking"),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a booking. The backend's reply shape is not fixed.
    pub async fn delete_booking(&self, booking_id: &str) -> ApiResult<Value> {
        self.send(
            Endpoint::delete(resource("/dine-in/bookings", booking_id), "delete booking"),
            Payload::Empty,
        )
        .await
    }

    /// Cancel a booking.
    pub async fn mark_booking_as_cancelled(&self, booking_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::post(
                resource("/dine-in/bookings/cancel", booking_id),
                "mark booking as cancelled",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Close a booking after the party leaves.
    pub async fn mark_booking_as_completed(&self, booking_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::post(
                resource("/dine-in/bookings/complete", booking_id),
                "mark booking as completed",
            ),
            Payload::Empty,
        )
        .await
    }

    /// One page of reservations. Without `page` the backend chooses.
    pub async fn get_reservations(
        &self,
        page: Option<PageRequest>,
    ) -> ApiResult<Envelope<ReservationPage>> {
        self.send(
            Endpoint::get("/dine-in/reservations", "get reservations")
                .query_opt("page", page.map(|p| p.page))
                .query_opt("limit", page.map(|p| p.limit)),
            Payload::Empty,
        )
        .await
    }
}

// ----------------------------------------------------------------------------
// Orders
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Every order.
    pub async fn get_orders(&self) -> ApiResult<Envelope<Vec<DineInOrder>>> {
        self.send(Endpoint::get("/dine-in/orders", "get orders"), Payload::Empty)
            .await
    }

    /// One order.
    pub async fn get_order_by_id(&self, order_id: &str) -> ApiResult<Envelope<DineInOrder>> {
        self.send(
            Endpoint::get(resource("/dine-in/orders", order_id), "get order"),
            Payload::Empty,
        )
        .await
    }

    /// Orders placed against a booking.
    pub async fn get_orders_by_booking_id(
        &self,
        booking_id: &str,
    ) -> ApiResult<Envelope<Vec<DineInOrder>>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/orders/booking", booking_id),
                "get orders",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Orders placed by a user.
    pub async fn get_orders_by_user_id(
        &self,
        user_id: &str,
    ) -> ApiResult<Envelope<Vec<DineInOrder>>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/orders/user", user_id),
                "get orders",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Orders placed at a table.
    pub async fn get_orders_by_table_id(
        &self,
        table_id: &str,
    ) -> ApiResult<Envelope<Vec<DineInOrder>>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/orders/table", table_id),
                "get orders",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Place an order.
    pub async fn create_order(&self, body: &DineInOrder) -> ApiResult<Envelope<DineInOrder>> {
        self.send(
            Endpoint::post("/dine-in/orders", "create order"),
            Payload::json(body)?,
        )
        .await
    }

    /// Partially update an order.
    pub async fn update_order(
        &self,
        order_id: &str,
        body: &OrderPatch,
    ) -> ApiResult<Envelope<DineInOrder>> {
        self.send(
            Endpoint::patch(resource("/dine-in/orders", order_id), "update order"),
            Payload::json(body)?,
        )
        .await
    }

    /// Update an order; the backend removes it when the quantity drops to zero.
    pub async fn update_or_delete_order(
        &self,
        order_id: &str,
        body: &OrderPatch,
    ) -> ApiResult<Envelope<DineInOrder>> {
        self.send(
            Endpoint::patch(
                resource("/dine-in/orders/update", order_id),
                "update order",
            ),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete an order.
    pub async fn delete_order(&self, order_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::delete(resource("/dine-in/orders", order_id), "delete order"),
            Payload::Empty,
        )
        .await
    }

    /// Cancel an order.
    pub async fn mark_order_as_cancelled(&self, order_id: &str) -> ApiResult<Acknowledgement> {
        self.order_transition("/dine-in/orders/cancel", order_id, "mark order as cancelled")
            .await
    }

    /// Kitchen finished the order.
    pub async fn mark_order_as_ready(&self, order_id: &str) -> ApiResult<Acknowledgement> {
        self.order_transition("/dine-in/orders/ready", order_id, "mark order as ready")
            .await
    }

    /// Order delivered to the table.
    pub async fn mark_order_as_served(&self, order_id: &str) -> ApiResult<Acknowledgement> {
        self.order_transition("/dine-in/orders/serve", order_id, "mark order as served")
            .await
    }

    /// Kitchen started the order.
    pub async fn mark_order_as_preparing(&self, order_id: &str) -> ApiResult<Acknowledgement> {
        self.order_transition(
            "/dine-in/orders/prepare",
            order_id,
            "mark order as preparing",
        )
        .await
    }

    async fn order_transition(
        &self,
        base: &str,
        order_id: &str,
        action: &'static str,
    ) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::post(resource(base, order_id), action),
            Payload::Empty,
        )
        .await
    }
}

// ----------------------------------------------------------------------------
// Checkouts and assistance
// ----------------------------------------------------------------------------

impl ApiClient {
    /// Every checkout.
    pub async fn get_checkouts(&self) -> ApiResult<Envelope<Vec<DineInCheckout>>> {
        self.send(
            Endpoint::get("/dine-in/checkouts", "get checkouts"),
            Payload::Empty,
        )
        .await
    }

    /// One checkout.
    pub async fn get_checkout_by_id(
        &self,
        checkout_id: &str,
    ) -> ApiResult<Envelope<DineInCheckout>> {
        self.send(
            Endpoint::get(resource("/dine-in/checkouts", checkout_id), "get checkout"),
            Payload::Empty,
        )
        .await
    }

    /// Checkout for a booking.
    pub async fn get_checkout_by_booking_id(
        &self,
        booking_id: &str,
    ) -> ApiResult<Envelope<DineInCheckout>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/checkouts/booking", booking_id),
                "get checkout",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Checkout for a user.
    pub async fn get_checkout_by_user_id(
        &self,
        user_id: &str,
    ) -> ApiResult<Envelope<DineInCheckout>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/checkouts/user", user_id),
                "get checkout",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Checkout for a table.
    pub async fn get_checkout_by_table_id(
        &self,
        table_id: &str,
    ) -> ApiResult<Envelope<DineInCheckout>> {
        self.send(
            Endpoint::get(
                resource("/dine-in/checkouts/table", table_id),
                "get checkout",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Open a checkout for a booking.
    pub async fn create_user_end_checkout(
        &self,
        booking_id: &str,
    ) -> ApiResult<Envelope<DineInCheckout>> {
        let body = NewCheckout {
            booking_id: booking_id.to_string(),
        };
        self.send(
            Endpoint::post("/dine-in/checkouts", "create checkout"),
            Payload::json(&body)?,
        )
        .await
    }

    /// Partially update a checkout.
    pub async fn update_checkout(
        &self,
        checkout_id: &str,
        body: &CheckoutPatch,
    ) -> ApiResult<Envelope<DineInCheckout>> {
        self.send(
            Endpoint::patch(
                resource("/dine-in/checkouts", checkout_id),
                "update checkout",
            ),
            Payload::json(body)?,
        )
        .await
    }

    /// Delete a checkout.
    pub async fn delete_checkout(&self, checkout_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::delete(
                resource("/dine-in/checkouts", checkout_id),
                "delete checkout",
            ),
            Payload::Empty,
        )
        .await
    }

    /// Open assistance requests raised from tables.
    pub async fn get_all_assistance(&self) -> ApiResult<Envelope<Vec<Assistance>>> {
        self.send(
            Endpoint::get("/dine-in/assistance", "get assistance"),
            Payload::Empty,
        )
        .await
    }

    /// Dismiss an assistance request.
    pub async fn delete_assistance(&self, assistance_id: &str) -> ApiResult<Acknowledgement> {
        self.send(
            Endpoint::delete(
                resource("/dine-in/assistance", assistance_id),
                "delete assistance",
            ),
            Payload::Empty,
        )
        .await
    }
}
