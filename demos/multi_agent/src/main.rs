//! multi_agent — smallest end-to-end demo of the compaction pipeline.
//!
//! Replays a hand-written event stream for one bus that picks up and drops
//! off two passengers across six links, then prints the derived
//! link-traversal log and occupancy ledger.  Swap the literal stream for a
//! parsed simulation event file to run at scale.

use anyhow::Result;

use tc_compaction::{CompactionEngine, CompactionObserver, OccupancySnapshotEntry, TraversalRecord};
use tc_core::{Mode, TransitEvent};

// ── Scenario stream ───────────────────────────────────────────────────────────

/// The bus's day: driver aboard from the start, Gerry rides links 1–2,
/// Fitz rides links 2–3.
fn scenario_stream() -> Vec<TransitEvent> {
    fn board(time: f64, person: &str) -> TransitEvent {
        TransitEvent::PersonEntersVehicle {
            time,
            vehicle: "bus".into(),
            person: person.into(),
        }
    }
    fn alight(time: f64, person: &str) -> TransitEvent {
        TransitEvent::PersonLeavesVehicle {
            time,
            vehicle: "bus".into(),
            person: person.into(),
        }
    }
    fn link_enter(time: f64, link: &str) -> TransitEvent {
        TransitEvent::LinkEnter { time, vehicle: "bus".into(), link: link.into() }
    }
    fn link_leave(time: f64) -> TransitEvent {
        TransitEvent::LinkLeave { time, vehicle: "bus".into() }
    }

    vec![
        board(0.0, "driver"),
        TransitEvent::VehicleEntersTraffic {
            time:    0.0,
            vehicle: "bus".into(),
            link:    "start_link".into(),
            mode:    Mode::from("bus"),
        },
        link_leave(5.0),
        link_enter(5.0, "gerry_link_board"),
        board(7.0, "gerry"),
        link_leave(10.0),
        link_enter(10.0, "fitz_link_board"),
        board(12.0, "fitz"),
        link_leave(15.0),
        link_enter(15.0, "gerry_link_alight"),
        alight(17.0, "gerry"),
        link_leave(20.0),
        link_enter(20.0, "fitz_link_alight"),
        alight(22.0, "fitz"),
        link_leave(25.0),
        link_enter(25.0, "end_link"),
        TransitEvent::VehicleLeavesTraffic { time: 30.0, vehicle: "bus".into() },
    ]
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ClosePrinter;

impl CompactionObserver for ClosePrinter {
    fn on_traversal_closed(
        &mut self,
        record:   &TraversalRecord,
        snapshot: &[OccupancySnapshotEntry],
    ) {
        println!(
            "closed #{:<2} {:<18} {:>5.1}s → {:>5.1}s  {} aboard",
            record.index,
            record.link.as_str(),
            record.start_time,
            record.end_time.unwrap_or(f64::NAN),
            snapshot.len(),
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut engine = CompactionEngine::new();
    let processed = engine.process(scenario_stream(), &mut ClosePrinter)?;
    let logs = engine.finish();

    println!("\n{processed} events → {} traversals, {} ledger rows", logs.traversals.len(), logs.occupancy.len());

    println!("\nindex  vehicle  link                mode     start    end  occupants");
    for record in &logs.traversals {
        println!(
            "{:<5}  {:<7}  {:<18}  {:<7}  {:>5.1}  {:>5}  {:>9}",
            record.index,
            record.vehicle.as_str(),
            record.link.as_str(),
            record.mode.as_str(),
            record.start_time,
            record.end_time.map_or("-".to_owned(), |end| format!("{end:.1}")),
            record.occupant_count.map_or("-".to_owned(), |count| count.to_string()),
        );
    }

    println!("\ntraversal  person");
    for entry in &logs.occupancy {
        println!("{:<9}  {}", entry.traversal_index, entry.person);
    }

    Ok(())
}
