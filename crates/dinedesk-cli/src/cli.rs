//! Argument parsing and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dinedesk_client::API_URL_ENV;
use dinedesk_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_id, init_logging};
use uuid::Uuid;

use crate::client::{AppContext, CliResult, STATE_FILE_ENV};
use crate::commands::auth::{handle_logout, handle_request_otp, handle_verify, handle_whoami};
use crate::commands::coupons::{
    handle_coupon_create, handle_coupon_delete, handle_coupon_list, handle_coupon_show,
};
use crate::commands::dine_in::{
    handle_booking_list, handle_booking_transition, handle_order_list, handle_order_transition,
    handle_reservations, handle_table_cleaned, handle_table_list,
};
use crate::commands::dishes::{handle_dish_categories, handle_dish_list};
use crate::commands::messages::{handle_message_delete, handle_message_list, handle_message_read};
use crate::commands::stats::handle_stats;
use crate::commands::upload::handle_upload;
use crate::forms::coupon::DiscountType;

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli
            .log_format
            .as_deref()
            .map_or_else(LogFormat::infer, LogFormat::from_name),
        build_id: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    let trace_id = Uuid::new_v4().to_string();
    tracing::debug!(build = build_id(), trace_id = %trace_id, "starting command");
    let result = match AppContext::from_cli(&cli, &trace_id) {
        Ok(ctx) => dispatch(cli.command, &ctx, cli.output).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(trace_id = %trace_id, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

async fn dispatch(command: Command, ctx: &AppContext, output: OutputFormat) -> CliResult<()> {
    match command {
        Command::Auth(auth) => match auth {
            AuthCommand::RequestOtp(args) => handle_request_otp(ctx, args).await,
            AuthCommand::Verify(args) => handle_verify(ctx, args).await,
            AuthCommand::Whoami => handle_whoami(ctx, output).await,
            AuthCommand::Logout => handle_logout(ctx),
        },
        Command::Coupons(coupons) => match coupons {
            CouponCommand::List => handle_coupon_list(ctx, output).await,
            CouponCommand::Show(args) => handle_coupon_show(ctx, args, output).await,
            CouponCommand::Create(args) => handle_coupon_create(ctx, args).await,
            CouponCommand::Delete(args) => handle_coupon_delete(ctx, args).await,
        },
        Command::Dishes(dishes) => match dishes {
            DishCommand::List(args) => handle_dish_list(ctx, args, output).await,
            DishCommand::Categories => handle_dish_categories(ctx, output).await,
        },
        Command::Tables(tables) => match tables {
            TableCommand::List => handle_table_list(ctx, output).await,
            TableCommand::Cleaned(args) => handle_table_cleaned(ctx, args).await,
        },
        Command::Bookings(bookings) => match bookings {
            BookingCommand::List => handle_booking_list(ctx, output).await,
            BookingCommand::Cancel(args) => {
                handle_booking_transition(ctx, args, BookingTransition::Cancel).await
            }
            BookingCommand::Complete(args) => {
                handle_booking_transition(ctx, args, BookingTransition::Complete).await
            }
        },
        Command::Reservations(args) => handle_reservations(ctx, args, output).await,
        Command::Orders(orders) => match orders {
            OrderCommand::List => handle_order_list(ctx, output).await,
            OrderCommand::Ready(args) => {
                handle_order_transition(ctx, args, OrderTransition::Ready).await
            }
            OrderCommand::Serve(args) => {
                handle_order_transition(ctx, args, OrderTransition::Serve).await
            }
            OrderCommand::Prepare(args) => {
                handle_order_transition(ctx, args, OrderTransition::Prepare).await
            }
            OrderCommand::Cancel(args) => {
                handle_order_transition(ctx, args, OrderTransition::Cancel).await
            }
        },
        Command::Messages(messages) => match messages {
            MessageCommand::List => handle_message_list(ctx, output).await,
            MessageCommand::Read(args) => handle_message_read(ctx, args).await,
            MessageCommand::Delete(args) => handle_message_delete(ctx, args).await,
        },
        Command::Stats(args) => handle_stats(ctx, args, output).await,
        Command::Upload(args) => handle_upload(ctx, args, output).await,
    }
}

#[derive(Parser)]
#[command(
    name = "dinedesk",
    version,
    about = "Administrative CLI for the Dinedesk restaurant platform"
)]
pub(crate) struct Cli {
    /// Backend base URL.
    #[arg(long, global = true, env = API_URL_ENV)]
    pub(crate) api_url: String,
    /// File holding the persisted access token.
    #[arg(long, global = true, env = STATE_FILE_ENV)]
    pub(crate) state_file: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    /// Log filter directive; `RUST_LOG` overrides it.
    #[arg(long, global = true, env = "DINEDESK_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    /// Log line format, `json` or `pretty`; defaults by build profile.
    #[arg(long, global = true, env = "DINEDESK_LOG_FORMAT")]
    pub(crate) log_format: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Sign in with a one-time password and manage the stored session.
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Discount coupons.
    #[command(subcommand)]
    Coupons(CouponCommand),
    /// Menu dishes.
    #[command(subcommand)]
    Dishes(DishCommand),
    /// Dine-in tables.
    #[command(subcommand)]
    Tables(TableCommand),
    /// Table bookings.
    #[command(subcommand)]
    Bookings(BookingCommand),
    /// Paged reservation listing.
    Reservations(ReservationArgs),
    /// Dine-in orders.
    #[command(subcommand)]
    Orders(OrderCommand),
    /// Contact-form inbox.
    #[command(subcommand)]
    Messages(MessageCommand),
    /// Dashboard counters.
    Stats(StatsArgs),
    /// Upload a file and print its public URL.
    Upload(UploadArgs),
}

#[derive(Subcommand)]
pub(crate) enum AuthCommand {
    /// Send a one-time password to a phone number.
    RequestOtp(PhoneArgs),
    /// Exchange a one-time password for a stored access token.
    Verify(VerifyArgs),
    /// Show the signed-in user.
    Whoami,
    /// Forget the stored access token.
    Logout,
}

#[derive(Args, Clone)]
pub(crate) struct PhoneArgs {
    #[arg(long, default_value = "+91")]
    pub(crate) country_code: String,
    #[arg(long)]
    pub(crate) phone: String,
}

#[derive(Args, Clone)]
pub(crate) struct VerifyArgs {
    #[command(flatten)]
    pub(crate) phone: PhoneArgs,
    #[arg(long)]
    pub(crate) otp: String,
}

#[derive(Subcommand)]
pub(crate) enum CouponCommand {
    List,
    Show(IdArgs),
    Create(CouponCreateArgs),
    Delete(IdArgs),
}

#[derive(Args, Clone)]
pub(crate) struct CouponCreateArgs {
    /// Code customers type at checkout.
    #[arg(long)]
    pub(crate) code: String,
    /// Allow a customer to redeem the coupon more than once.
    #[arg(long)]
    pub(crate) reusable: bool,
    /// Total redemptions: a number or `unlimited`.
    #[arg(long, default_value = "")]
    pub(crate) uses: String,
    /// Expiry date, `YYYY-MM-DD`.
    #[arg(long)]
    pub(crate) expires: String,
    #[arg(long, value_enum, default_value_t = DiscountType::Percentage)]
    pub(crate) discount_type: DiscountType,
    #[arg(long, default_value = "")]
    pub(crate) discount_amount: String,
    #[arg(long, default_value = "")]
    pub(crate) min_cart_value: String,
    /// Terms and conditions; repeat for each line. Replaces the defaults.
    #[arg(long = "term")]
    pub(crate) terms: Vec<String>,
}

#[derive(Subcommand)]
pub(crate) enum DishCommand {
    List(DishListArgs),
    Categories,
}

#[derive(Args, Clone, Default)]
pub(crate) struct DishListArgs {
    /// Only dishes in this category.
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum TableCommand {
    List,
    /// Mark a table as cleaned.
    Cleaned(IdArgs),
}

#[derive(Subcommand)]
pub(crate) enum BookingCommand {
    List,
    Cancel(IdArgs),
    Complete(IdArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BookingTransition {
    Cancel,
    Complete,
}

#[derive(Args, Clone, Default)]
pub(crate) struct ReservationArgs {
    #[arg(long, requires = "limit")]
    pub(crate) page: Option<u32>,
    #[arg(long, requires = "page")]
    pub(crate) limit: Option<u32>,
}

#[derive(Subcommand)]
pub(crate) enum OrderCommand {
    List,
    Ready(IdArgs),
    Serve(IdArgs),
    Prepare(IdArgs),
    Cancel(IdArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OrderTransition {
    Ready,
    Serve,
    Prepare,
    Cancel,
}

#[derive(Subcommand)]
pub(crate) enum MessageCommand {
    List,
    Read(MessageReadArgs),
    Delete(IdArgs),
}

#[derive(Args, Clone)]
pub(crate) struct MessageReadArgs {
    pub(crate) id: String,
    /// Mark as unread instead.
    #[arg(long)]
    pub(crate) unread: bool,
}

#[derive(Args, Clone, Default)]
pub(crate) struct StatsArgs {
    /// Show store counters instead of restaurant counters.
    #[arg(long)]
    pub(crate) ecom: bool,
}

#[derive(Args, Clone)]
pub(crate) struct UploadArgs {
    pub(crate) path: PathBuf,
    /// MIME type reported to the server.
    #[arg(long)]
    pub(crate) mime: Option<String>,
}

#[derive(Args, Clone)]
pub(crate) struct IdArgs {
    pub(crate) id: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_coupon_create_with_repeated_terms() {
        let cli = Cli::try_parse_from([
            "dinedesk",
            "--api-url",
            "http://localhost:4000",
            "coupons",
            "create",
            "--code",
            "FEAST",
            "--uses",
            "unlimited",
            "--expires",
            "2025-12-31",
            "--term",
            "one",
            "--term",
            "two",
        ])
        .expect("arguments parse");
        let Command::Coupons(CouponCommand::Create(args)) = cli.command else {
            panic!("expected coupons create");
        };
        assert_eq!(args.code, "FEAST");
        assert!(!args.reusable);
        assert_eq!(args.terms, ["one", "two"]);
        assert_eq!(args.discount_type, DiscountType::Percentage);
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn log_format_flag_is_global() {
        let cli = Cli::try_parse_from([
            "dinedesk",
            "--api-url",
            "http://localhost:4000",
            "stats",
            "--log-format",
            "json",
        ])
        .expect("arguments parse");
        assert_eq!(cli.log_format.as_deref(), Some("json"));
        assert_eq!(
            cli.log_format
                .as_deref()
                .map_or_else(LogFormat::infer, LogFormat::from_name),
            LogFormat::Json
        );
    }

    #[test]
    fn reservations_page_requires_limit() {
        let parsed = Cli::try_parse_from([
            "dinedesk",
            "--api-url",
            "http://localhost:4000",
            "reservations",
            "--page",
            "2",
        ]);
        assert!(parsed.is_err());
    }
}
