//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use dinedesk_api_models::{
    AdminStats, ContactMessage, Coupon, DineInOrder, DineInTable, DineInTableBooking, Dish,
    DishCategory, Reservation, User,
};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};
use crate::forms::coupon::UNLIMITED_USES;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_user(user: &User, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(user)?,
        OutputFormat::Table => {
            println!("id: {}", user.id);
            println!("name: {}", user.display_name());
            if let Some(email) = &user.email {
                println!("email: {email}");
            }
            if let Some(phone) = &user.phone_number {
                let code = user.country_code.as_deref().unwrap_or_default();
                println!("phone: {code}{phone}");
            }
            if let Some(role) = &user.role {
                println!("role: {role}");
            }
        }
    }
    Ok(())
}

pub(crate) fn render_coupon_list(coupons: &[Coupon], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(coupons)?,
        OutputFormat::Table => {
            println!(
                "{:<24} {:<16} {:>10} {:<10} EXPIRES",
                "ID", "CODE", "USES", "ONE-TIME"
            );
            for coupon in coupons {
                println!(
                    "{:<24} {:<16} {:>10} {:<10} {}",
                    coupon.id,
                    coupon.code,
                    format_uses(coupon.no_of_uses),
                    yes_no(coupon.is_one_time),
                    coupon.expires_on.format("%Y-%m-%d")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_coupon(coupon: &Coupon, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(coupon)?,
        OutputFormat::Table => {
            println!("id: {}", coupon.id);
            println!("code: {}", coupon.code);
            println!("one-time: {}", yes_no(coupon.is_one_time));
            println!("uses: {}", format_uses(coupon.no_of_uses));
            println!("expires: {}", coupon.expires_on.format("%Y-%m-%d"));
            for (key, value) in coupon.meta_data.iter().filter(|(key, _)| *key != "terms") {
                println!("{key}: {value}");
            }
            let terms = coupon.terms();
            if !terms.is_empty() {
                println!("terms:");
                for term in terms {
                    println!("  - {term}");
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn render_dish_list(dishes: &[Dish], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(dishes)?,
        OutputFormat::Table => {
            println!(
                "{:<24} {:>9} {:<9} {:<7} NAME",
                "ID", "PRICE", "AVAILABLE", "NON-VEG"
            );
            for dish in dishes {
                println!(
                    "{:<24} {:>9.2} {:<9} {:<7} {}",
                    dish.id,
                    dish.price,
                    yes_no(dish.is_available),
                    yes_no(dish.is_non_veg),
                    dish.name
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_dish_categories(
    categories: &[DishCategory],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(categories)?,
        OutputFormat::Table => {
            println!("{:<24} NAME", "ID");
            for category in categories {
                println!("{:<24} {}", category.id, category.name);
            }
        }
    }
    Ok(())
}

pub(crate) fn render_table_list(tables: &[DineInTable], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(tables)?,
        OutputFormat::Table => {
            println!("{:<24} {:<8} {:>8} STATUS", "ID", "NUMBER", "CAPACITY");
            for table in tables {
                println!(
                    "{:<24} {:<8} {:>8} {}",
                    table.id,
                    table.table_number,
                    table.capacity,
                    table.status().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_booking_list(
    bookings: &[DineInTableBooking],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(bookings)?,
        OutputFormat::Table => {
            println!(
                "{:<24} {:<24} {:<10} {:<13} {:>6} STATUS",
                "ID", "TABLE", "DATE", "WINDOW", "PEOPLE"
            );
            for booking in bookings {
                println!(
                    "{:<24} {:<24} {:<10} {:<13} {:>6} {}",
                    booking.id,
                    booking.table_id,
                    booking.booking_date,
                    format!("{}-{}", booking.from_time, booking.to_time),
                    booking.number_of_people,
                    booking.status.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_reservations(
    reservations: &[Reservation],
    total: u64,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(reservations)?,
        OutputFormat::Table => {
            println!("{:<24} {:<8} {:<10} {:>6} STATUS", "ID", "TABLE", "DATE", "PEOPLE");
            for reservation in reservations {
                println!(
                    "{:<24} {:<8} {:<10} {:>6} {}",
                    reservation.id,
                    reservation.table_number.as_deref().unwrap_or("-"),
                    reservation.booking_date.as_deref().unwrap_or("-"),
                    reservation
                        .number_of_people
                        .map_or_else(|| "-".to_string(), |n| n.to_string()),
                    reservation.status.as_deref().unwrap_or("-")
                );
            }
            println!("total: {total}");
        }
    }
    Ok(())
}

pub(crate) fn render_order_list(orders: &[DineInOrder], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(orders)?,
        OutputFormat::Table => {
            println!("{:<24} {:<24} {:<24} {:>4} STATUS", "ID", "TABLE", "DISH", "QTY");
            for order in orders {
                println!(
                    "{:<24} {:<24} {:<24} {:>4} {}",
                    order.id.as_deref().unwrap_or("-"),
                    order.table_id.as_deref().unwrap_or("-"),
                    order.dish_id.as_deref().unwrap_or("-"),
                    order.quantity.unwrap_or_default(),
                    order.status.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_message_list(
    messages: &[ContactMessage],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(messages)?,
        OutputFormat::Table => {
            println!("{:<24} {:<4} {:<24} SUBJECT", "ID", "READ", "FROM");
            for message in messages {
                println!(
                    "{:<24} {:<4} {:<24} {}",
                    message.id,
                    yes_no(message.is_read),
                    message
                        .name
                        .as_deref()
                        .or(message.email.as_deref())
                        .unwrap_or("-"),
                    message.subject.as_deref().unwrap_or(&message.message)
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_stats(stats: &AdminStats, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(stats)?,
        OutputFormat::Table => {
            for (name, value) in &stats.0 {
                match value {
                    serde_json::Value::String(text) => println!("{name}: {text}"),
                    other => println!("{name}: {other}"),
                }
            }
        }
    }
    Ok(())
}

#[must_use]
pub(crate) fn format_uses(uses: i64) -> String {
    if uses == UNLIMITED_USES {
        "unlimited".to_string()
    } else {
        uses.to_string()
    }
}

#[must_use]
pub(crate) const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_sentinel_is_rendered_by_name() {
        assert_eq!(format_uses(UNLIMITED_USES), "unlimited");
        assert_eq!(format_uses(12), "12");
    }

    #[test]
    fn yes_no_formats_flags() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
