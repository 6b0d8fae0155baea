//! Floor operations: tables, bookings, reservations, and kitchen orders.

use dinedesk_api_models::{Acknowledgement, PageRequest};

use crate::cli::{
    BookingTransition, IdArgs, OrderTransition, OutputFormat, ReservationArgs,
};
use crate::client::{AppContext, CliResult};
use crate::output::{
    render_booking_list, render_order_list, render_reservations, render_table_list,
};

fn report(ack: &Acknowledgement, fallback: &str) {
    match ack.message.as_deref() {
        Some(message) if !message.is_empty() => println!("{message}"),
        _ => println!("{fallback}"),
    }
}

pub(crate) async fn handle_table_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let tables = ctx.api.get_tables().await?;
    render_table_list(&tables.data, format)
}

pub(crate) async fn handle_table_cleaned(ctx: &AppContext, args: IdArgs) -> CliResult<()> {
    let ack = ctx.api.mark_table_as_cleaned(&args.id).await?;
    report(&ack, &format!("Table marked as cleaned (id: {})", args.id));
    Ok(())
}

pub(crate) async fn handle_booking_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let bookings = ctx.api.get_bookings().await?;
    render_booking_list(&bookings.data, format)
}

pub(crate) async fn handle_booking_transition(
    ctx: &AppContext,
    args: IdArgs,
    transition: BookingTransition,
) -> CliResult<()> {
    let (ack, verb) = match transition {
        BookingTransition::Cancel => (
            ctx.api.mark_booking_as_cancelled(&args.id).await?,
            "cancelled",
        ),
        BookingTransition::Complete => (
            ctx.api.mark_booking_as_completed(&args.id).await?,
            "completed",
        ),
    };
    report(&ack, &format!("Booking {verb} (id: {})", args.id));
    Ok(())
}

pub(crate) async fn handle_reservations(
    ctx: &AppContext,
    args: ReservationArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let page = match (args.page, args.limit) {
        (Some(page), Some(limit)) => Some(PageRequest { page, limit }),
        _ => None,
    };
    let reservations = ctx.api.get_reservations(page).await?;
    render_reservations(
        &reservations.data.reservations,
        reservations.data.total,
        format,
    )
}

pub(crate) async fn handle_order_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let orders = ctx.api.get_orders().await?;
    render_order_list(&orders.data, format)
}

pub(crate) async fn handle_order_transition(
    ctx: &AppContext,
    args: IdArgs,
    transition: OrderTransition,
) -> CliResult<()> {
    let id = args.id.as_str();
    let (ack, state) = match transition {
        OrderTransition::Ready => (ctx.api.mark_order_as_ready(id).await?, "ready"),
        OrderTransition::Serve => (ctx.api.mark_order_as_served(id).await?, "served"),
        OrderTransition::Prepare => (ctx.api.mark_order_as_preparing(id).await?, "preparing"),
        OrderTransition::Cancel => (ctx.api.mark_order_as_cancelled(id).await?, "cancelled"),
    };
    report(&ack, &format!("Order {state} (id: {id})"));
    Ok(())
}
