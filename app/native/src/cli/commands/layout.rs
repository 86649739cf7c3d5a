//! Layout preview command.
//!
//! Drives a real [`Tiler`] against a [`MemoryHost`] so the printed
//! rectangles are exactly what a reflow would apply.

use clap::Args;
use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::LoadedConfig;
use crate::error::HyprTileError;
use crate::tiling::constants::timing::TILING_DELAY;
use crate::tiling::{ExceptionSet, MemoryHost, Rect, Tiler, TilerSettings, WindowId, WindowInfo};

/// Size new simulated windows open at before tiling.
const INITIAL_FRAME: Rect = Rect::new(0, 0, 640, 480);

/// Arguments for `hyprtile layout`.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Number of windows to tile.
    #[arg(long, short, default_value_t = 3)]
    pub windows: u16,

    /// Work area width.
    #[arg(long, default_value_t = 1920)]
    pub width: i32,

    /// Work area height.
    #[arg(long, default_value_t = 1080)]
    pub height: i32,

    /// Work area left edge.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub x: i32,

    /// Work area top edge.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub y: i32,

    /// Output in JSON format.
    #[arg(long, short)]
    pub json: bool,
}

impl LayoutArgs {
    /// Returns the simulated work area.
    #[must_use]
    pub const fn work_area(&self) -> Rect { Rect::new(self.x, self.y, self.width, self.height) }
}

/// One placed window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Window id (1-based, in opening order).
    pub window: WindowId,
    /// Position in the managed list.
    pub index: usize,
    /// Assigned frame.
    pub frame: Rect,
}

impl Placement {
    /// Returns `"master"` for index 0, `"stack"` otherwise.
    #[must_use]
    pub const fn role(&self) -> &'static str { if self.index == 0 { "master" } else { "stack" } }
}

/// Opens `count` windows on a simulated monitor and runs one reflow.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn simulate(count: u16, work_area: Rect, settings: TilerSettings) -> Result<Vec<Placement>, HyprTileError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;

    let placements = runtime.block_on(async move {
        let host = MemoryHost::new(work_area);
        for id in 1..=WindowId::from(count) {
            host.open_window(WindowInfo::new(id, INITIAL_FRAME).with_class(format!("window-{id}")));
        }

        let mut tiler = Tiler::new(host.clone(), settings).with_exceptions(ExceptionSet::new());
        tiler.enable();

        // Let the debounce timer fire, then apply the pass it posts.
        tokio::time::sleep(TILING_DELAY * 2).await;
        tiler.process_pending();

        let placements: Vec<Placement> = tiler
            .managed_windows()
            .iter()
            .enumerate()
            .filter_map(|(index, &window)| host.frame(window).map(|frame| Placement { window, index, frame }))
            .collect();

        tiler.disable();
        placements
    });

    Ok(placements)
}

#[derive(Tabled)]
struct PlacementRow {
    #[tabled(rename = "Window")]
    window: WindowId,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "X")]
    x: i32,
    #[tabled(rename = "Y")]
    y: i32,
    #[tabled(rename = "Width")]
    width: i32,
    #[tabled(rename = "Height")]
    height: i32,
}

/// Execute `hyprtile layout`.
///
/// # Errors
///
/// Returns an error if the simulation or JSON output fails.
pub fn execute(args: &LayoutArgs, loaded: &LoadedConfig) -> Result<(), HyprTileError> {
    let work_area = args.work_area();
    let placements = simulate(args.windows, work_area, TilerSettings::from(loaded))?;

    if args.json {
        let value = serde_json::json!({
            "work-area": serde_json::to_value(work_area)?,
            "windows": placements
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "window": p.window,
                        "role": p.role(),
                        "frame": p.frame,
                    })
                })
                .collect::<Vec<_>>(),
        });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    if placements.is_empty() {
        println!("No windows to tile.");
        return Ok(());
    }

    let rows: Vec<PlacementRow> = placements
        .iter()
        .map(|p| PlacementRow {
            window: p.window,
            role: p.role(),
            x: p.frame.x,
            y: p.frame.y,
            width: p.frame.width,
            height: p.frame.height,
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..6)).with(Alignment::right()))
        .to_string();

    println!("{}", format!("Layout for {work_area} ({} windows)", placements.len()).bold());
    println!("{table}");
    Ok(())
}
