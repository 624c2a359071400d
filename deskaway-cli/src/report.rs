use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use deskaway_core::{
    Activity, ActivityFilter, BookingAction, BookingCategory, BookingState, Catalog, TimelineEntry,
    TimelineStatus, WaitlistSubmission,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    Console,
    /// Machine-readable JSON on stdout
    Json,
}

/// Result of a booking command.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub newly_booked: bool,
    pub saved: bool,
}

impl Outcome {
    pub fn new(action: BookingAction, catalog: &Catalog, newly_booked: bool, saved: bool) -> Self {
        let (name, id) = action_parts(action);
        Self {
            action: name,
            id,
            label: label_for(action, catalog),
            newly_booked,
            saved,
        }
    }
}

const fn action_parts(action: BookingAction) -> (&'static str, Option<u32>) {
    match action {
        BookingAction::ConfirmEvent(id) => ("confirm-event", Some(id)),
        BookingAction::BookLogistic(id) => ("book-logistic", Some(id)),
        BookingAction::ReserveEquipment(id) => ("reserve-equipment", Some(id)),
        BookingAction::BookActivity(id) => ("book-activity", Some(id)),
        BookingAction::BookVolcanoTrek => ("book-volcano-trek", None),
    }
}

/// Catalog name for the booked item, if the id is listed.
pub fn label_for(action: BookingAction, catalog: &Catalog) -> Option<String> {
    match action {
        BookingAction::ConfirmEvent(id) => catalog.event(id).map(|e| e.title.clone()),
        BookingAction::BookLogistic(id) => catalog.logistic(id).map(|s| s.label.clone()),
        BookingAction::ReserveEquipment(id) => catalog.equipment(id).map(|i| i.name.clone()),
        BookingAction::BookActivity(id) => catalog.activity(id).map(|a| a.name.clone()),
        BookingAction::BookVolcanoTrek => Some(catalog.volcano_trek.title.clone()),
    }
}

pub fn write_outcome(out: &mut dyn Write, format: OutputFormat, outcome: &Outcome) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, outcome);
    }
    let subject = match (&outcome.label, outcome.id) {
        (Some(label), Some(id)) => format!("{label} (#{id})"),
        (Some(label), None) => label.clone(),
        (None, Some(id)) => format!("#{id}"),
        (None, None) => outcome.action.to_string(),
    };
    if outcome.newly_booked {
        writeln!(out, "{} {subject}", "✅ Booked".green().bold())?;
    } else {
        writeln!(out, "{} {subject}", "ℹ️  Already booked".yellow())?;
    }
    if !outcome.saved {
        writeln!(out, "{}", "⚠️  Could not write the store file; change kept for this run only".red())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct StatusReport<'a> {
    bookings: &'a BookingState,
    timeline: &'a [TimelineEntry],
}

pub fn write_status(
    out: &mut dyn Write,
    format: OutputFormat,
    state: &BookingState,
    timeline: &[TimelineEntry],
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &StatusReport {
                bookings: state,
                timeline,
            },
        );
    }
    writeln!(out, "{}", "🌴 DeskAway Bookings".bright_cyan().bold())?;
    writeln!(out, "{}", "====================".cyan())?;
    for category in BookingCategory::ALL {
        let ids = state.ids(category);
        let listed = if ids.is_empty() {
            "none".dimmed().to_string()
        } else {
            ids.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
        };
        writeln!(out, "{:12} {listed}", category_heading(category))?;
    }
    let trek = if state.volcano_trek_booked() {
        "booked".green().to_string()
    } else {
        "not booked".dimmed().to_string()
    };
    writeln!(out, "{:12} {trek}", "Volcano trek")?;
    writeln!(out)?;
    write_timeline(out, format, timeline)
}

const fn category_heading(category: BookingCategory) -> &'static str {
    match category {
        BookingCategory::Event => "Events",
        BookingCategory::Logistic => "Logistics",
        BookingCategory::Equipment => "Equipment",
        BookingCategory::Activity => "Activities",
    }
}

pub fn write_timeline(out: &mut dyn Write, format: OutputFormat, timeline: &[TimelineEntry]) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &timeline);
    }
    writeln!(out, "{}", "🗺️  Your Island Story".bright_yellow().bold())?;
    for entry in timeline {
        let badge = match entry.status {
            TimelineStatus::Confirmed => "✨ Confirmed".green(),
            TimelineStatus::Active => "🌴 Active".cyan(),
        };
        writeln!(out, "  {} {} [{badge}]", entry.title.bold(), entry.time.dimmed())?;
        writeln!(out, "    \"{}\"", entry.description)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ActivityReport<'a> {
    filter: FilterSummary,
    total: usize,
    activities: Vec<&'a Activity>,
}

#[derive(Serialize)]
struct FilterSummary {
    duration: String,
    types: Vec<String>,
    distances: Vec<String>,
}

impl From<&ActivityFilter> for FilterSummary {
    fn from(filter: &ActivityFilter) -> Self {
        Self {
            duration: filter.duration().to_string(),
            types: filter.types().iter().map(ToString::to_string).collect(),
            distances: filter.distances().iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn write_activities(
    out: &mut dyn Write,
    format: OutputFormat,
    filter: &ActivityFilter,
    all: &[Activity],
    state: &BookingState,
) -> Result<()> {
    let visible = filter.apply(all);
    if format == OutputFormat::Json {
        return write_json(
            out,
            &ActivityReport {
                filter: FilterSummary::from(filter),
                total: all.len(),
                activities: visible,
            },
        );
    }
    writeln!(out, "Showing {} of {} activities", visible.len(), all.len())?;
    if visible.is_empty() {
        writeln!(out, "{}", "No activities match these filters.".dimmed())?;
    }
    for activity in visible {
        let booked = if state.contains(BookingCategory::Activity, activity.id) {
            " ✓".green().to_string()
        } else {
            String::new()
        };
        writeln!(
            out,
            "  #{} {}{booked} [{}] {} • {} km • {} • {}",
            activity.id,
            activity.name.bold(),
            activity.activity_type,
            activity.duration.display_name(),
            activity.distance_km,
            activity.work_vibe,
            activity.price
        )?;
    }
    Ok(())
}

pub fn write_catalog(out: &mut dyn Write, format: OutputFormat, catalog: &Catalog) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, catalog);
    }
    writeln!(out, "{}", "Sunset Gatherings".bright_cyan().bold())?;
    for event in &catalog.events {
        writeln!(out, "  #{} {} ({} {})", event.id, event.title, event.date, event.time)?;
    }
    writeln!(out, "{}", "Island Essentials".bright_cyan().bold())?;
    for service in &catalog.logistics {
        writeln!(out, "  #{} {} {}", service.id, service.label, service.price)?;
    }
    writeln!(out, "{}", "Workplace Suite".bright_cyan().bold())?;
    for item in &catalog.equipment {
        writeln!(out, "  #{} {} {} / {}", item.id, item.name, item.price, item.duration)?;
    }
    writeln!(out, "{}", "Featured".bright_cyan().bold())?;
    writeln!(out, "  {} {}", catalog.volcano_trek.title, catalog.volcano_trek.price)?;
    Ok(())
}

pub fn write_waitlist(out: &mut dyn Write, format: OutputFormat, submission: &WaitlistSubmission) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &submission.to_webhook_payload());
    }
    writeln!(out, "{} {}", "📬 Added to waitlist:".green().bold(), submission.email)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
