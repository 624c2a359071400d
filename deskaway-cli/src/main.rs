mod file_storage;
mod report;

use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deskaway_core::{
    ActivityFilter, ActivityType, BookingAction, BookingStore, Catalog, DistanceBucket,
    DurationSelection, WaitlistSubmission,
};

use file_storage::FileStorage;
use report::{OutputFormat, Outcome};

#[derive(Debug, Parser)]
#[command(name = "deskaway", version)]
#[command(about = "Manage DeskAway workation bookings from the terminal")]
struct Args {
    /// JSON file holding the booking snapshot
    #[arg(long, env = "DESKAWAY_STORE", default_value = "deskaway-bookings.json")]
    store: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every booking and the journey timeline
    Status,
    /// RSVP to a weekly event
    ConfirmEvent { id: u32 },
    /// Book an island logistics service
    BookLogistic { id: u32 },
    /// Reserve workplace equipment
    ReserveEquipment { id: u32 },
    /// Book a leisure activity
    BookActivity { id: u32 },
    /// Book the featured volcano trek
    BookVolcanoTrek,
    /// Print the journey timeline
    Timeline,
    /// Browse activities with optional facet filters
    Activities {
        /// Time available: all, <1hr, 1-3hrs, or 3hrs+
        #[arg(long, default_value = "all")]
        duration: DurationSelection,
        /// Activity type (repeatable; any listed type matches)
        #[arg(long = "type")]
        types: Vec<ActivityType>,
        /// Distance bucket (repeatable; any listed bucket matches)
        #[arg(long = "distance")]
        distances: Vec<DistanceBucket>,
    },
    /// List events, services, equipment, and the featured trek
    Catalog,
    /// Join the waitlist and print the webhook payload
    JoinWaitlist {
        #[arg(long)]
        email: String,
        /// Full name; switches to the final sign-up form
        #[arg(long)]
        name: Option<String>,
        /// Opt in to location updates (final sign-up only)
        #[arg(long)]
        updates: bool,
        /// Upcoming location of interest (quick sign-up only)
        #[arg(long)]
        destination: Option<String>,
    },
}

impl Command {
    const fn booking_action(&self) -> Option<BookingAction> {
        match self {
            Self::ConfirmEvent { id } => Some(BookingAction::ConfirmEvent(*id)),
            Self::BookLogistic { id } => Some(BookingAction::BookLogistic(*id)),
            Self::ReserveEquipment { id } => Some(BookingAction::ReserveEquipment(*id)),
            Self::BookActivity { id } => Some(BookingAction::BookActivity(*id)),
            Self::BookVolcanoTrek => Some(BookingAction::BookVolcanoTrek),
            _ => None,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = Catalog::default_catalog();
    let mut out = stdout().lock();

    if let Some(action) = args.command.booking_action() {
        let mut store = BookingStore::open(FileStorage::new(&args.store));
        let newly_booked = store.apply(action);
        let outcome = Outcome::new(action, catalog, newly_booked, !store.last_save_failed());
        report::write_outcome(&mut out, args.format, &outcome)?;
        if store.last_save_failed() {
            anyhow::bail!("failed to write {}", store.storage().path().display());
        }
        return Ok(());
    }

    match args.command {
        Command::Status => {
            let store = BookingStore::open(FileStorage::new(&args.store));
            report::write_status(&mut out, args.format, store.state(), &store.timeline())?;
        }
        Command::Timeline => {
            let store = BookingStore::open(FileStorage::new(&args.store));
            report::write_timeline(&mut out, args.format, &store.timeline())?;
        }
        Command::Activities {
            duration,
            types,
            distances,
        } => {
            let store = BookingStore::open(FileStorage::new(&args.store));
            let filter = build_filter(duration, &types, &distances);
            report::write_activities(&mut out, args.format, &filter, &catalog.activities, store.state())?;
        }
        Command::Catalog => report::write_catalog(&mut out, args.format, catalog)?,
        Command::JoinWaitlist {
            email,
            name,
            updates,
            destination,
        } => {
            let submitted_at = chrono::Utc::now().to_rfc3339();
            let submission = match name {
                Some(name) => WaitlistSubmission::full(&name, &email, updates, submitted_at),
                None => WaitlistSubmission::quick(&email, destination.as_deref(), submitted_at),
            }
            .context("invalid waitlist sign-up")?;
            log::info!("waitlist sign-up via {}", submission.source.key());
            report::write_waitlist(&mut out, args.format, &submission)?;
        }
        Command::ConfirmEvent { .. }
        | Command::BookLogistic { .. }
        | Command::ReserveEquipment { .. }
        | Command::BookActivity { .. }
        | Command::BookVolcanoTrek => {}
    }
    out.flush()?;
    Ok(())
}

/// Repeated flags select the same facet value once.
fn build_filter(
    duration: DurationSelection,
    types: &[ActivityType],
    distances: &[DistanceBucket],
) -> ActivityFilter {
    let mut filter = ActivityFilter::new();
    filter.set_duration(duration);
    for activity_type in types {
        if !filter.types().contains(activity_type) {
            filter.toggle_type(*activity_type);
        }
    }
    for bucket in distances {
        if !filter.distances().contains(bucket) {
            filter.toggle_distance(*bucket);
        }
    }
    filter
}
